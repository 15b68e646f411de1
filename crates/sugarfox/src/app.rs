//! # Windowed Host
//!
//! Mounts the hero into a winit window and feeds it window events.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CursorMoved      ─► HeroBackground::pointer_moved         │
//! │  MouseWheel       ─► ScrollContainer ─► set_scroll_progress│
//! │  Resized          ─► HeroBackground::resize                │
//! │  KeyT             ─► HeroBackground::set_theme (toggle)    │
//! │  RedrawRequested  ─► HeroBackground::on_frame              │
//! │  CloseRequested   ─► HeroBackground::unmount, exit         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! winit has no cancellable frame callback, so the scheduler keeps the
//! pending token in a slot shared with the event loop. A redraw only
//! reaches the hero if the slot still holds a token; cancelling clears it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use sugarfox_rendering::{FrameScheduler, FrameToken, GpuRenderer, HeroBackground, SurfaceSize};
use sugarfox_shared::ScrollContainer;

use crate::config::HeroConfig;
use crate::error::AppResult;

type DueSlot = Rc<Cell<Option<FrameToken>>>;

/// Frame scheduler backed by `Window::request_redraw`.
#[derive(Debug)]
pub struct WindowFrameScheduler {
    window: Arc<Window>,
    due: DueSlot,
    next_id: u64,
}

impl WindowFrameScheduler {
    fn new(window: Arc<Window>, due: DueSlot) -> Self {
        Self {
            window,
            due,
            next_id: 0,
        }
    }
}

impl FrameScheduler for WindowFrameScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken::new(self.next_id);
        self.due.set(Some(token));
        self.window.request_redraw();
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        clear_if_due(&self.due, token);
    }
}

fn clear_if_due(due: &Cell<Option<FrameToken>>, token: FrameToken) {
    if due.get() == Some(token) {
        due.set(None);
    }
}

type WindowHero = HeroBackground<WindowFrameScheduler, GpuRenderer<'static>>;

/// Everything the event loop closure owns.
struct HeroApp {
    hero: Option<WindowHero>,
    page: ScrollContainer,
    due: DueSlot,
    line_height: f32,
}

impl HeroApp {
    fn scroll_by(&mut self, delta: MouseScrollDelta) {
        // Wheel down is negative y; the page moves down.
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * self.line_height,
            #[allow(clippy::cast_possible_truncation)]
            MouseScrollDelta::PixelDelta(position) => -position.y as f32,
        };
        self.page.scroll_by(pixels);
        if let Some(hero) = self.hero.as_mut() {
            hero.set_scroll_progress(self.page.progress());
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        #[allow(clippy::cast_precision_loss)]
        self.page.resize(size.height as f32);
        if let Some(hero) = self.hero.as_mut() {
            hero.resize(SurfaceSize::new(size.width, size.height));
            hero.set_scroll_progress(self.page.progress());
        }
    }

    fn toggle_theme(&mut self) {
        if let Some(hero) = self.hero.as_mut() {
            if let Some(theme) = hero.scene().map(|scene| scene.theme().toggled()) {
                hero.set_theme(theme);
            }
        }
    }

    fn redraw(&mut self) {
        let Some(token) = self.due.take() else {
            return;
        };
        let Some(hero) = self.hero.as_mut() else {
            return;
        };
        match hero.on_frame(token) {
            Ok(_) => {
                let stats = hero.last_stats();
                if stats.frame % 600 == 0 && !stats.meets_target() {
                    warn!(fps = stats.fps(), frame = stats.frame, "hero below 60 FPS");
                }
            }
            Err(e) => error!("frame failed: {e}"),
        }
    }

    fn shutdown(&mut self) {
        if let Some(mut hero) = self.hero.take() {
            hero.unmount();
        }
    }
}

/// Opens the window and runs the hero until the window closes.
///
/// # Errors
///
/// Returns an error if the window, the GPU surface or the event loop
/// cannot be created.
pub fn run(config: HeroConfig) -> AppResult<()> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window.title.as_str())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height))
            .build(&event_loop)?,
    );

    let inner = window.inner_size();
    let surface = SurfaceSize::new(inner.width, inner.height);
    let due: DueSlot = Rc::new(Cell::new(None));
    let scheduler = WindowFrameScheduler::new(Arc::clone(&window), Rc::clone(&due));
    let target = Arc::clone(&window);

    let hero = HeroBackground::mount(Some(surface), &config.scene, scheduler, move |size, scene| {
        GpuRenderer::new(target, size, scene)
    })?;

    #[allow(clippy::cast_precision_loss)]
    let page = ScrollContainer::new(inner.height as f32, config.scroll.content_screens);
    let mut app = HeroApp {
        hero,
        page,
        due,
        line_height: config.scroll.line_height,
    };

    info!("press T to toggle theme, Esc to quit");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    app.shutdown();
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => match key {
                    KeyCode::Escape => {
                        app.shutdown();
                        elwt.exit();
                    }
                    KeyCode::KeyT => app.toggle_theme(),
                    _ => {}
                },
                WindowEvent::CursorMoved { position, .. } => {
                    if let Some(hero) = app.hero.as_mut() {
                        hero.pointer_moved(position.x, position.y);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => app.scroll_by(delta),
                WindowEvent::Resized(size) => app.resize(size),
                WindowEvent::RedrawRequested => app.redraw(),
                _ => {}
            },
            Event::LoopExiting => app.shutdown(),
            _ => {}
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_only_clears_matching_token() {
        let due = Cell::new(Some(FrameToken::new(2)));
        clear_if_due(&due, FrameToken::new(1));
        assert_eq!(due.get(), Some(FrameToken::new(2)));
        clear_if_due(&due, FrameToken::new(2));
        assert_eq!(due.get(), None);
    }
}
