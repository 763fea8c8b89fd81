//! Mo Pong - two-player Pong on wgpu
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, collisions, scoring, pause)
//! - `renderer`: wgpu pipeline, shader loading, instanced draws
//! - `platform`: winit window, keyboard state, frame clock
//! - `settings`: Presentation settings with environment overrides

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "MoEngine - Pong";
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Paddle dimensions and movement (pixels, pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const HALF_PADDLE_WIDTH: f32 = PADDLE_WIDTH / 2.0;
    pub const HALF_PADDLE_HEIGHT: f32 = PADDLE_HEIGHT / 2.0;
    /// Horizontal distance from each screen edge to a paddle center
    pub const PADDLE_INSET: f32 = 35.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 16.0;
    pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(200.0, 200.0);

    /// Lowest (and distance from the top of the highest) legal paddle center
    pub const PADDLE_BOUNDARY: f32 = HALF_PADDLE_HEIGHT + BALL_RADIUS;

    /// Horizontal speed-up applied on every paddle return (multiplicative)
    pub const BALL_SPEEDUP: f32 = 1.1;
    /// Fraction of paddle velocity transferred into the ball's vertical velocity
    pub const PADDLE_COUPLING: f32 = 0.5;
    /// Frames after a paddle hit before the next hit can register
    pub const FRAMES_TO_ALLOW_COLLISION: u32 = 7;

    /// Triangles in the ball's disc mesh
    pub const BALL_TRIANGLES: u32 = 20;
}
