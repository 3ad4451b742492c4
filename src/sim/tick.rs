//! Per-frame game update
//!
//! Advances paddles and ball by an explicit delta time, resolves wall and
//! paddle collisions, and reports scoring through returned events. The
//! caller owns the clock; `tick` never reads one.

use super::collision::{circles_intersect, resolve_paddle_bounce};
use super::state::{GameEvent, GameState, Player, Score};
use crate::consts::*;

/// Input snapshot for a single frame.
///
/// Intents are -1 (down), 0 (hold) or +1 (up), already resolved by the
/// input mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub p1_intent: f32,
    pub p2_intent: f32,
}

/// Advance the game by one frame.
///
/// Update order: paddles, contact circles, ball, wall bounce, paddle
/// bounce, scoring, win check. Returns the scoring events of this frame
/// in the order they occurred.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Paddles: integrate intent, clamp to the court
    state.player1.position.y += input.p1_intent * PADDLE_SPEED * dt;
    state.player1.position.y = state
        .player1
        .position
        .y
        .clamp(-PADDLE_TRAVEL_LIMIT, PADDLE_TRAVEL_LIMIT);

    state.player2.position.y += input.p2_intent * PADDLE_SPEED * dt;
    state.player2.position.y = state
        .player2
        .position
        .y
        .clamp(-PADDLE_TRAVEL_LIMIT, PADDLE_TRAVEL_LIMIT);

    state.refresh_paddle_circles();

    // Ball: integrate direction, bounce off top/bottom walls
    state.ball.position += state.ball_direction * BALL_SPEED * dt;
    if state.ball.position.y >= COURT_EXTENT || state.ball.position.y <= -COURT_EXTENT {
        state.ball_direction.y = -state.ball_direction.y;
    }
    state.ball_circle.center = state.ball.position;

    // Paddle bounce: only the paddle on the ball's half is tested, and the
    // first overlapping circle (top to bottom) wins.
    if state.ball.position.x < 0.0 {
        for circle in &state.p1_circles {
            if circles_intersect(&state.ball_circle, circle) {
                resolve_paddle_bounce(&state.player1, &state.ball, &mut state.ball_direction);
                log::debug!("Ball bounced off player 1 paddle");
                break;
            }
        }
    } else {
        for circle in &state.p2_circles {
            if circles_intersect(&state.ball_circle, circle) {
                resolve_paddle_bounce(&state.player2, &state.ball, &mut state.ball_direction);
                log::debug!("Ball bounced off player 2 paddle");
                break;
            }
        }
    }

    // Scoring: a ball past a goal line awards the opponent and respawns
    if state.ball.position.x >= COURT_EXTENT {
        state.score.p1 += 1;
        state.respawn_ball(Player::One);
        events.push(GameEvent::Scored {
            player: Player::One,
            score: state.score,
        });
    } else if state.ball.position.x <= -COURT_EXTENT {
        state.score.p2 += 1;
        state.respawn_ball(Player::Two);
        events.push(GameEvent::Scored {
            player: Player::Two,
            score: state.score,
        });
    }

    // Win check: the crossing frame fires the event once, then both
    // counters reset
    if state.score.p1 >= WIN_SCORE {
        events.push(GameEvent::RoundWon {
            player: Player::One,
        });
        state.score = Score::default();
    }
    if state.score.p2 >= WIN_SCORE {
        events.push(GameEvent::RoundWon {
            player: Player::Two,
        });
        state.score = Score::default();
    }

    events
}
