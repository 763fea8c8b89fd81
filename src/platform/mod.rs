//! Native window, input and frame loop

mod app;
pub mod clock;
pub mod keys;

use anyhow::Context;
use winit::event_loop::{ControlFlow, EventLoop};

pub use app::PongApp;
pub use clock::FrameClock;
pub use keys::{GameKey, KeyboardState};

use crate::settings::Settings;

/// Open the window and run until quit or close
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PongApp::new(settings);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    app.finish()
}
