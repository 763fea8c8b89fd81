//! Property tests for the simulation core, driven through the public `tick`

use glam::Vec2;
use mo_pong::consts::*;
use mo_pong::sim::{GameEvent, GameState, TickInput, tick};
use proptest::prelude::*;

fn movement_input() -> impl Strategy<Value = TickInput> {
    any::<(bool, bool, bool, bool)>().prop_map(|(left_up, left_down, right_up, right_down)| {
        TickInput {
            left_up,
            left_down,
            right_up,
            right_down,
            ..TickInput::default()
        }
    })
}

/// Where the ball sits when the game is paused
#[derive(Debug, Clone)]
enum Placement {
    Anywhere(Vec2),
    /// Offset from a paddle center; `true` for the right paddle
    NearPaddle(bool, Vec2),
    /// Distance past the top (`true`) or bottom wall
    OnWall(bool, f32, f32),
}

#[derive(Debug, Clone)]
struct PausedStart {
    paddle_y: [f32; 2],
    placement: Placement,
    ball_vel: Vec2,
}

impl PausedStart {
    fn build(&self) -> GameState {
        let mut state = GameState::new(800.0, 600.0);
        state.paddles[0].pos.y = self.paddle_y[0];
        state.paddles[1].pos.y = self.paddle_y[1];
        state.ball.pos = match self.placement {
            Placement::Anywhere(pos) => pos,
            Placement::NearPaddle(right, offset) => state.paddles[usize::from(right)].pos + offset,
            Placement::OnWall(top, x, depth) => {
                let y = if top { 600.0 - BALL_RADIUS + depth } else { BALL_RADIUS - depth };
                Vec2::new(x, y)
            }
        };
        state.ball.vel = self.ball_vel;
        state
    }
}

fn paused_start() -> impl Strategy<Value = PausedStart> {
    let band = PADDLE_BOUNDARY..=600.0 - PADDLE_BOUNDARY;
    let reach_x = HALF_PADDLE_WIDTH + BALL_RADIUS;
    let reach_y = HALF_PADDLE_HEIGHT + BALL_RADIUS;
    let placement = prop_oneof![
        (0.0f32..800.0, 0.0f32..600.0).prop_map(|(x, y)| Placement::Anywhere(Vec2::new(x, y))),
        (any::<bool>(), -reach_x..reach_x, -reach_y..reach_y)
            .prop_map(|(right, dx, dy)| Placement::NearPaddle(right, Vec2::new(dx, dy))),
        (any::<bool>(), 100.0f32..700.0, 0.0f32..BALL_RADIUS)
            .prop_map(|(top, x, depth)| Placement::OnWall(top, x, depth)),
    ];
    (band.clone(), band, placement, -400.0f32..400.0, -400.0f32..400.0).prop_map(
        |(left_y, right_y, placement, vx, vy)| PausedStart {
            paddle_y: [left_y, right_y],
            placement,
            ball_vel: Vec2::new(vx, vy),
        },
    )
}

fn frames() -> impl Strategy<Value = Vec<(TickInput, f32)>> {
    prop::collection::vec((movement_input(), 0.0f32..0.05), 1..300)
}

proptest! {
    #[test]
    fn paddles_stay_inside_the_band(frames in frames()) {
        let mut state = GameState::new(800.0, 600.0);
        for (input, dt) in frames {
            tick(&mut state, &input, dt);
            for paddle in &state.paddles {
                prop_assert!(paddle.pos.y >= PADDLE_BOUNDARY);
                prop_assert!(paddle.pos.y <= 600.0 - PADDLE_BOUNDARY);
            }
        }
    }

    #[test]
    fn score_never_jumps_by_more_than_one(frames in frames()) {
        let mut state = GameState::new(800.0, 600.0);
        let mut total = 0;
        for (input, dt) in frames {
            let outcome = tick(&mut state, &input, dt);
            let now = state.score.left + state.score.right;
            prop_assert!(now == total || now == total + 1);

            let scored = outcome
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored { .. }))
                .count() as u32;
            prop_assert_eq!(scored, now - total);
            total = now;
        }
    }

    #[test]
    fn horizontal_speed_never_drops_below_serve_speed(frames in frames()) {
        let mut state = GameState::new(800.0, 600.0);
        for (input, dt) in frames {
            tick(&mut state, &input, dt);
            prop_assert!(state.ball.vel.x.abs() >= BALL_START_VELOCITY.x);
        }
    }

    #[test]
    fn paused_game_does_not_move(
        start in paused_start(),
        frames in frames(),
    ) {
        let mut state = start.build();
        let hold_pause = TickInput { pause: true, ..TickInput::default() };
        let outcome = tick(&mut state, &hold_pause, 1.0 / 60.0);
        prop_assert!(state.pause.is_paused());
        prop_assert_eq!(outcome.events, vec![GameEvent::PauseToggled { paused: true }]);

        let paddles = state.paddles.map(|p| p.pos);
        let ball = state.ball;
        for (input, dt) in frames {
            // Key stays held, so the latch keeps the game paused
            let input = TickInput { pause: true, ..input };
            let outcome = tick(&mut state, &input, dt);
            prop_assert!(outcome.events.is_empty());
            prop_assert_eq!(state.ball.vel, ball.vel);
        }
        prop_assert_eq!(state.paddles.map(|p| p.pos), paddles);
        prop_assert_eq!(state.ball, ball);
        prop_assert_eq!(state.score.left + state.score.right, 0);
    }

    #[test]
    fn replay_is_deterministic(frames in frames()) {
        let mut a = GameState::new(800.0, 600.0);
        let mut b = GameState::new(800.0, 600.0);
        for (input, dt) in &frames {
            tick(&mut a, input, *dt);
        }
        for (input, dt) in &frames {
            tick(&mut b, input, *dt);
        }
        prop_assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}

#[test]
fn serve_then_return_off_left_paddle() {
    let mut state = GameState::new(800.0, 600.0);
    // Send the ball straight at the left paddle face
    state.ball.pos = Vec2::new(100.0, 300.0);
    state.ball.vel = Vec2::new(-200.0, 0.0);

    let mut hit = false;
    for _ in 0..60 {
        let outcome = tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        if outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleHit { .. }))
        {
            hit = true;
            break;
        }
    }

    assert!(hit);
    assert!(state.ball.vel.x > 0.0);
    assert!((state.ball.vel.x - 220.0).abs() < 1e-3);
    assert_eq!(state.score.left + state.score.right, 0);
}
