//! winit application handler: owns the window, renderer and game state

use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::clock::FrameClock;
use super::keys::KeyboardState;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Score, tick};

pub struct PongApp {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    state: GameState,
    keys: KeyboardState,
    clock: FrameClock,
    /// First fatal error; reported once the event loop returns
    error: Option<anyhow::Error>,
}

impl PongApp {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.width as f32, settings.height as f32);
        Self {
            settings,
            window: None,
            renderer: None,
            state,
            keys: KeyboardState::default(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    /// Consume the app after the loop exits
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(RenderState::new(window.clone(), &self.settings))
            .context("failed to initialize renderer")?;

        // Game space is the drawable size in physical pixels
        let (width, height) = renderer.size;
        self.state = GameState::new(width as f32, height as f32);

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);

        log::info!("game started at {width}x{height}");
        announce_score(&self.state.score);
        self.clock.reset();
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            // Minimized
            return;
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(size.width, size.height);
        }
        self.state.resize(size.width as f32, size.height as f32);
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        let outcome = tick(&mut self.state, &self.keys.snapshot(), dt);
        report_events(&outcome.events);

        if outcome.quit_requested {
            log::info!("quit requested");
            event_loop.exit();
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match renderer.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout, skipping frame");
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
            }
            Err(e) => {
                log::warn!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::Focused(false) => self.keys.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keys.handle(code, event.state);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Print the tally to stdout and mirror it to the log
fn announce_score(score: &Score) {
    println!("{score}");
    log::info!("score {score}");
}

fn report_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Scored { score, .. } => announce_score(score),
            GameEvent::PauseToggled { paused } => {
                log::info!("{}", if *paused { "paused" } else { "resumed" });
            }
            GameEvent::WallBounce | GameEvent::PaddleHit { .. } => {}
        }
    }
}
