//! Duo Pong - two players, one keyboard, first to five
//!
//! Core modules:
//! - `sim`: frame-rate independent game update (paddles, ball, collisions, scoring)
//! - `renderer`: wgpu pipeline drawing one unit quad per entity
//! - `input`: raw key state mapped to per-paddle movement intent
//! - `settings`: presentation preferences loaded from a JSON file

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::InputState;
pub use settings::Settings;
pub use sim::{GameEvent, GameState, Player, Score, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Window is square and fixed-size; the court fills it edge to edge.
    pub const WINDOW_SIZE: u32 = 800;

    /// Court edge in normalized coordinates (walls at ±1 on both axes).
    pub const COURT_EXTENT: f32 = 1.0;
    /// Paddle centers may not travel past this Y magnitude.
    pub const PADDLE_TRAVEL_LIMIT: f32 = 0.9;
    /// Paddle X positions (player 1 negative, player 2 positive).
    pub const PADDLE_X_OFFSET: f32 = 0.8;

    /// Court units per second.
    pub const PADDLE_SPEED: f32 = 1.5;
    pub const BALL_SPEED: f32 = 1.0;

    /// Quad edge length for the ball; paddles are four times as tall.
    pub const BALL_SIZE: f32 = 0.02;
    /// Contact circle radius, shared by the ball and the paddle proxies.
    pub const CIRCLE_RADIUS: f32 = BALL_SIZE;
    /// Contact circles per paddle, stored top to bottom.
    pub const CIRCLES_PER_PADDLE: usize = 4;
    /// Y offsets of the paddle contact circles from the paddle center.
    pub const CIRCLE_Y_OFFSETS: [f32; CIRCLES_PER_PADDLE] = [
        1.5 * BALL_SIZE,
        0.5 * BALL_SIZE,
        -0.5 * BALL_SIZE,
        -1.5 * BALL_SIZE,
    ];

    /// Ball respawn height after a point (sign depends on the scorer).
    pub const BALL_SPAWN_Y: f32 = 0.8;

    /// First to this many points wins the round.
    pub const WIN_SCORE: u32 = 5;

    /// Upper bound on per-frame delta time so hitches don't teleport the ball.
    pub const MAX_FRAME_DT: f32 = 0.1;
}
