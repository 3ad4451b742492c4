//! Game simulation
//!
//! All gameplay logic lives here. This module is pure and frame-rate
//! independent:
//! - Updates take an explicit delta time and an input snapshot
//! - Scoring is reported through returned events, never by direct I/O
//! - No rendering or windowing dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod transform;

pub use collision::{BoundingCircle, circles_intersect, reflect, resolve_paddle_bounce};
pub use state::{GameEvent, GameState, Player, Score};
pub use tick::{TickInput, tick};
pub use transform::Transform;
