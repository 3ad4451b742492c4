//! Game state owned by the frame loop
//!
//! One `GameState` holds everything the simulation mutates: the three
//! entity transforms, the shared ball direction, the score pair, and the
//! contact circles. The renderer and input mapper only ever read from it.

use glam::Vec3;

use super::collision::BoundingCircle;
use super::transform::Transform;
use crate::consts::*;

/// Which side of the court a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// 1-based number for score lines.
    pub fn number(self) -> u32 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Points per player; both reset when either reaches [`WIN_SCORE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
}

/// Scoring moments the frame loop reports to the players.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Scored { player: Player, score: Score },
    RoundWon { player: Player },
}

/// Complete game state for one match.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player1: Transform,
    pub player2: Transform,
    pub ball: Transform,
    /// Current travel direction; unit length after every update.
    pub ball_direction: Vec3,
    pub score: Score,
    /// Contact circles following each paddle, top to bottom.
    pub p1_circles: [BoundingCircle; CIRCLES_PER_PADDLE],
    pub p2_circles: [BoundingCircle; CIRCLES_PER_PADDLE],
    pub ball_circle: BoundingCircle,
}

impl GameState {
    pub fn new() -> Self {
        let paddle_scale = Vec3::new(BALL_SIZE, BALL_SIZE * 4.0, 1.0);
        let player1 = Transform::new(Vec3::new(-PADDLE_X_OFFSET, 0.0, 0.0), paddle_scale);
        let player2 = Transform::new(Vec3::new(PADDLE_X_OFFSET, 0.0, 0.0), paddle_scale);
        let ball = Transform::new(
            Vec3::new(0.0, BALL_SPAWN_Y, 0.0),
            Vec3::new(BALL_SIZE, BALL_SIZE, 1.0),
        );

        let p1_circles = paddle_circles(&player1);
        let p2_circles = paddle_circles(&player2);
        let ball_circle = BoundingCircle::new(ball.position, CIRCLE_RADIUS);

        Self {
            player1,
            player2,
            ball,
            ball_direction: Vec3::new(1.0, -1.0, 0.0).normalize(),
            score: Score::default(),
            p1_circles,
            p2_circles,
            ball_circle,
        }
    }

    /// Re-anchor the paddle contact circles to the current paddle Y.
    /// The X coordinates and the Y offsets are fixed at setup.
    pub fn refresh_paddle_circles(&mut self) {
        for (circle, offset) in self.p1_circles.iter_mut().zip(CIRCLE_Y_OFFSETS) {
            circle.center.y = self.player1.position.y + offset;
        }
        for (circle, offset) in self.p2_circles.iter_mut().zip(CIRCLE_Y_OFFSETS) {
            circle.center.y = self.player2.position.y + offset;
        }
    }

    /// Put the ball back in play after `scorer` won the point. The ball
    /// respawns on the opposing half's serve height, inside the court, so
    /// a crossing can never score twice.
    pub fn respawn_ball(&mut self, scorer: Player) {
        match scorer {
            Player::One => {
                self.ball.position = Vec3::new(0.0, -BALL_SPAWN_Y, 0.0);
                self.ball_direction = Vec3::new(-1.0, 1.0, 0.0).normalize();
            }
            Player::Two => {
                self.ball.position = Vec3::new(0.0, BALL_SPAWN_Y, 0.0);
                self.ball_direction = Vec3::new(1.0, -1.0, 0.0).normalize();
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a paddle's contact circles from its transform.
fn paddle_circles(paddle: &Transform) -> [BoundingCircle; CIRCLES_PER_PADDLE] {
    CIRCLE_Y_OFFSETS.map(|offset| {
        BoundingCircle::new(
            Vec3::new(paddle.position.x, paddle.position.y + offset, 0.0),
            CIRCLE_RADIUS,
        )
    })
}
