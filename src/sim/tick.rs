//! Per-frame simulation tick
//!
//! Order within a frame: input mapping, integration, edge reflection and
//! scoring, then the cooldown-gated paddle collision.

use super::collision::{candidate_paddle, classify_paddle_hit};
use super::state::{GameEvent, GameState, Paddle, ServeDirection, Side, paddle_max_y};
use crate::consts::*;

/// Key snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Pause key currently held (edge detection happens in `PauseState`)
    pub pause: bool,
    /// Quit key currently held
    pub quit: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// The shell should close the window
    pub quit_requested: bool,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Advance the game by `dt` seconds of wall-clock time
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome {
        events: Vec::new(),
        quit_requested: input.quit,
    };

    apply_input(state, input, &mut outcome.events);
    integrate(state, dt);

    // No contact resolution while paused; velocities stay as stored
    if !state.pause.is_paused() {
        if let Some(direction) = resolve_edges(state, &mut outcome.events) {
            let center = state.center();
            state.ball.reset(center, direction);
        }
    }

    resolve_paddle_collision(state, &mut outcome.events);

    outcome
}

/// Map keys to paddle velocities and handle the pause toggle
fn apply_input(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let max_y = paddle_max_y(state.screen.y);

    let [left, right] = &mut state.paddles;
    left.vel = 0.0;
    right.vel = 0.0;

    // Later presses win when both keys of a paddle are held
    if input.left_up {
        steer(left, Direction::Up, max_y);
    }
    if input.left_down {
        steer(left, Direction::Down, max_y);
    }
    if input.right_down {
        steer(right, Direction::Down, max_y);
    }
    if input.right_up {
        steer(right, Direction::Up, max_y);
    }

    if state.pause.update(input.pause) {
        let paused = state.pause.is_paused();
        log::debug!("pause toggled: paused={paused}");
        events.push(GameEvent::PauseToggled { paused });
    }
}

/// Move toward `direction` unless already at that boundary, in which case snap to it
fn steer(paddle: &mut Paddle, direction: Direction, max_y: f32) {
    match direction {
        Direction::Up => {
            if paddle.pos.y < max_y {
                paddle.vel = PADDLE_SPEED;
            } else {
                paddle.pos.y = max_y;
            }
        }
        Direction::Down => {
            if paddle.pos.y > PADDLE_BOUNDARY {
                paddle.vel = -PADDLE_SPEED;
            } else {
                paddle.pos.y = PADDLE_BOUNDARY;
            }
        }
    }
}

/// `pos += vel * dt * time_scale` for every moving object
fn integrate(state: &mut GameState, dt: f32) {
    let step = dt * state.pause.time_scale();
    let screen_height = state.screen.y;

    for paddle in &mut state.paddles {
        paddle.pos.y += paddle.vel * step;
        paddle.clamp_to_bounds(screen_height);
    }

    state.ball.pos += state.ball.vel * step;
}

/// Reflect off top/bottom; award a point on left/right exit
///
/// Returns the serve direction when the ball must be reset.
fn resolve_edges(state: &mut GameState, events: &mut Vec<GameEvent>) -> Option<ServeDirection> {
    let ball = &mut state.ball;
    let r = ball.radius;

    if ball.pos.y - r <= 0.0 || ball.pos.y + r >= state.screen.y {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // At most one point per frame
    let (scorer, direction) = if ball.pos.x - r <= 0.0 {
        (Side::Right, ServeDirection::Rightward)
    } else if ball.pos.x + r >= state.screen.x {
        (Side::Left, ServeDirection::Leftward)
    } else {
        return None;
    };

    state.score.award(scorer);
    events.push(GameEvent::Scored {
        scorer,
        score: state.score,
    });
    Some(direction)
}

/// Bounce off the nearer paddle if the cooldown allows it
fn resolve_paddle_collision(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.cooldown.advance();
    if state.pause.is_paused() || !state.cooldown.allows_check() {
        return;
    }

    let side = candidate_paddle(state.ball.pos.x, state.screen);
    let paddle = state.paddles[side.index()];

    let Some(hit) = classify_paddle_hit(&state.ball, &paddle, side) else {
        return;
    };

    let vel = &mut state.ball.vel;
    if hit.flips_x() {
        vel.x = -vel.x;
    } else {
        vel.y = -vel.y;
    }

    // Every return speeds the ball up; paddle motion slices it vertically
    vel.x *= BALL_SPEEDUP;
    vel.y += PADDLE_COUPLING * paddle.vel;

    state.cooldown.arm();
    log::debug!("paddle hit: {side:?} {hit:?}, ball velocity now {vel}");
    events.push(GameEvent::PaddleHit { side, hit });
}
