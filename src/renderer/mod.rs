//! Rendering module
//!
//! The loop only talks to a `Canvas`. `draw_frame` turns a `GameState` into
//! canvas calls; backends decide how pixels reach the screen.

pub mod software;
pub mod text;

pub use software::FrameBuffer;
pub use text::{TextRasterizer, TextSurface};

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::error::RenderError;
use crate::sim::{GameState, Rect};

/// Top-left corner of the hit counter
pub const HUD_ORIGIN: IVec2 = IVec2::new(10, 10);

/// RGBA8 color, laid out like a framebuffer pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        bytemuck::cast(color)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        bytemuck::cast(rgba)
    }
}

/// Per-mode palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub paddle: Color,
    pub ball: Color,
    pub text: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Color::BLACK,
        paddle: Color::WHITE,
        ball: Color::RED,
        text: Color::WHITE,
    };

    pub const LIGHT: Theme = Theme {
        background: Color::WHITE,
        paddle: Color::BLACK,
        ball: Color::YELLOW,
        text: Color::BLACK,
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }
}

/// Drawing surface provided by the windowing backend
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);

    /// Fill a rectangle, clipped to the frame
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Rasterize a single line of text. Failure is fatal to the loop.
    fn render_text(&mut self, text: &str, color: Color) -> Result<TextSurface, RenderError>;

    /// Copy a rendered text surface with its top-left corner at `origin`
    fn draw_text(&mut self, surface: &TextSurface, origin: IVec2);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), RenderError>;
}

/// HUD label for the hit counter
pub fn hud_text(hits: u32) -> String {
    format!("Hit number: {hits}")
}

/// Compose and present one frame
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) -> Result<(), RenderError> {
    let theme = Theme::for_mode(state.session.dark_mode);

    canvas.clear(theme.background);
    canvas.fill_rect(state.paddle.rect, theme.paddle);
    canvas.fill_rect(state.ball.rect, theme.ball);

    let surface = canvas.render_text(&hud_text(state.session.hits), theme.text)?;
    canvas.draw_text(&surface, HUD_ORIGIN);

    canvas.present()
}
