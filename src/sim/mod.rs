//! Simulation core
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the shell feeds a `TickInput` and elapsed time, and reads positions back.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, candidate_paddle, classify_paddle_hit};
pub use state::{
    Ball, CollisionCooldown, GameEvent, GameState, Paddle, PauseState, Score, ServeDirection,
    Side,
};
pub use tick::{TickInput, TickOutcome, tick};
