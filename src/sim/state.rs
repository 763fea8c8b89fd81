//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`, passed by reference
//! into input, update and render-submit stages.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::PaddleHit;
use crate::consts::*;

/// Which player / paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into `GameState::paddles` (0 = left, 1 = right)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Horizontal direction the ball launches in after a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeDirection {
    /// Ball left through the left edge; relaunch toward the right
    Rightward,
    /// Ball left through the right edge; relaunch toward the left
    Leftward,
}

impl ServeDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            ServeDirection::Rightward => 1.0,
            ServeDirection::Leftward => -1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
    /// Vertical velocity (pixels/s), reset every frame
    pub vel: f32,
    pub half_extents: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            half_extents: Vec2::new(HALF_PADDLE_WIDTH, HALF_PADDLE_HEIGHT),
        }
    }

    /// Full width/height, as submitted to the renderer
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Keep the center inside `[PADDLE_BOUNDARY, screen_height - PADDLE_BOUNDARY]`
    pub fn clamp_to_bounds(&mut self, screen_height: f32) {
        // max/min instead of clamp: a window shorter than two boundaries must not panic
        self.pos.y = self.pos.y.min(paddle_max_y(screen_height)).max(PADDLE_BOUNDARY);
    }
}

/// Highest legal paddle center for a given screen height
#[inline]
pub fn paddle_max_y(screen_height: f32) -> f32 {
    screen_height - PADDLE_BOUNDARY
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: BALL_START_VELOCITY,
            radius: BALL_RADIUS,
        }
    }

    /// Back to `center` at the initial speed. `vel.y` is always positive afterwards.
    pub fn reset(&mut self, center: Vec2, direction: ServeDirection) {
        self.pos = center;
        self.vel = Vec2::new(
            BALL_START_VELOCITY.x * direction.sign(),
            BALL_START_VELOCITY.y,
        );
    }

    /// Diameter on both axes, as submitted to the renderer
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

/// Frame-counted gate that suppresses repeated paddle hits
///
/// `None` means no collision has happened yet, which always permits a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionCooldown {
    frames_since_hit: Option<u32>,
}

impl CollisionCooldown {
    /// Restart the window after a hit
    pub fn arm(&mut self) {
        self.frames_since_hit = Some(0);
    }

    /// Count one frame (no-op until the first hit)
    pub fn advance(&mut self) {
        if let Some(frames) = self.frames_since_hit.as_mut() {
            *frames = frames.saturating_add(1);
        }
    }

    pub fn allows_check(&self) -> bool {
        match self.frames_since_hit {
            None => true,
            Some(frames) => frames >= FRAMES_TO_ALLOW_COLLISION,
        }
    }
}

/// Pause flag with an edge-detect latch for the pause key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseState {
    paused: bool,
    /// Set while the key is held after a toggle
    key_latched: bool,
}

impl PauseState {
    /// Feed the current key state. Returns true if this poll toggled the pause.
    pub fn update(&mut self, key_down: bool) -> bool {
        if !key_down {
            self.key_latched = false;
            return false;
        }
        if self.key_latched {
            return false;
        }
        self.paused = !self.paused;
        self.key_latched = true;
        true
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Integration multiplier: 0 while paused, 1 otherwise
    #[inline]
    pub fn time_scale(&self) -> f32 {
        if self.paused { 0.0 } else { 1.0 }
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit { side: Side, hit: PaddleHit },
    /// Ball left the screen; `score` is the tally after the point
    Scored { scorer: Side, score: Score },
    PauseToggled { paused: bool },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen width/height in pixels
    pub screen: Vec2,
    /// Left (0) and right (1) paddles
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    pub cooldown: CollisionCooldown,
    pub pause: PauseState,
}

impl GameState {
    /// Fresh game for a screen of the given size
    pub fn new(width: f32, height: f32) -> Self {
        let screen = Vec2::new(width, height);
        Self {
            screen,
            paddles: [
                Paddle::new(Vec2::new(PADDLE_INSET, height / 2.0)),
                Paddle::new(Vec2::new(width - PADDLE_INSET, height / 2.0)),
            ],
            ball: Ball::new(screen / 2.0),
            score: Score::default(),
            cooldown: CollisionCooldown::default(),
            pause: PauseState::default(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.screen / 2.0
    }

    /// Screen size changed: store it and re-anchor the right paddle
    ///
    /// The ball is left where it is; paddles are pulled back inside the new band.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Vec2::new(width, height);
        self.paddles[Side::Right.index()].pos.x = width - PADDLE_INSET;
        for paddle in &mut self.paddles {
            paddle.clamp_to_bounds(height);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }
}
