//! Desktop backend: winit window + pixels surface
//!
//! Acquisition order is event loop, window, surface, font. `NativeCanvas`
//! declares its fields so they drop font, surface, window; the caller keeps
//! `NativePlatform` alive longer so the event loop goes last.

use std::time::Duration;

use glam::IVec2;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use super::Platform;
use crate::error::{RenderError, SetupError};
use crate::input::{InputEvent, Key, KeyboardState};
use crate::renderer::{Canvas, Color, FrameBuffer, TextRasterizer, TextSurface};
use crate::settings::Settings;
use crate::sim::Rect;

/// Event source backed by a pumped winit event loop
pub struct NativePlatform {
    event_loop: EventLoop<()>,
    keyboard: KeyboardState,
}

impl NativePlatform {
    pub fn new() -> Result<Self, SetupError> {
        let event_loop = EventLoop::new().map_err(SetupError::EventLoop)?;
        Ok(Self {
            event_loop,
            keyboard: KeyboardState::default(),
        })
    }
}

impl Platform for NativePlatform {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        let keyboard = &mut self.keyboard;
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _target| {
                if let Event::WindowEvent {
                    event: WindowEvent::Focused(false),
                    ..
                } = event
                {
                    // Key-up events are lost while unfocused
                    keyboard.release_all();
                    return;
                }
                if let Some(input) = translate_event(&event) {
                    keyboard.apply(&input);
                    out.push(input);
                }
            });

        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {}", code);
            out.push(InputEvent::Quit);
        }
    }

    fn keyboard(&self) -> KeyboardState {
        self.keyboard
    }
}

/// Map a winit event to a game input event
fn translate_event(event: &Event<()>) -> Option<InputEvent> {
    let Event::WindowEvent { event, .. } = event else {
        return None;
    };
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => key_from_code(code),
                PhysicalKey::Unidentified(_) => Key::Other,
            };
            match event.state {
                // OS auto-repeat must not re-toggle pause/mode
                ElementState::Pressed if event.repeat => None,
                ElementState::Pressed => Some(InputEvent::KeyDown(key)),
                ElementState::Released => Some(InputEvent::KeyUp(key)),
            }
        }
        _ => None,
    }
}

fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyM => Key::ToggleMode,
        KeyCode::KeyP => Key::TogglePause,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Window, pixel surface and HUD font
pub struct NativeCanvas {
    // Drop order: font, surface, window. The window is only held so it
    // outlives the surface.
    text: TextRasterizer,
    pixels: Pixels,
    _window: Window,
    width: u32,
    height: u32,
}

impl NativeCanvas {
    pub fn new(platform: &NativePlatform, settings: &Settings) -> Result<Self, SetupError> {
        let window = WindowBuilder::new()
            .with_title(settings.window_title.as_str())
            .with_inner_size(LogicalSize::new(
                settings.window_width as f64,
                settings.window_height as f64,
            ))
            .with_resizable(false)
            .build(&platform.event_loop)
            .map_err(SetupError::Window)?;
        center_on_monitor(&window);

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(settings.window_width, settings.window_height, surface)
            .map_err(SetupError::Surface)?;

        let text = TextRasterizer::load(&settings.font_path, settings.font_size)?;

        log::info!(
            "Window ready: {}x{} ({}x{} physical)",
            settings.window_width,
            settings.window_height,
            size.width,
            size.height
        );

        Ok(Self {
            text,
            pixels,
            _window: window,
            width: settings.window_width,
            height: settings.window_height,
        })
    }

    fn frame(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::from_bytes(self.pixels.frame_mut(), self.width, self.height)
    }
}

impl Canvas for NativeCanvas {
    fn clear(&mut self, color: Color) {
        self.frame().clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.frame().fill_rect(rect, color);
    }

    fn render_text(&mut self, text: &str, color: Color) -> Result<TextSurface, RenderError> {
        self.text.render(text, color)
    }

    fn draw_text(&mut self, surface: &TextSurface, origin: IVec2) {
        self.frame().blit_text(surface, origin);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.pixels.render().map_err(RenderError::Present)
    }
}

fn center_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();
    let x = origin.x + (screen.width as i32 - outer.width as i32) / 2;
    let y = origin.y + (screen.height as i32 - outer.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
