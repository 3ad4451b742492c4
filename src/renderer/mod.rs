//! wgpu rendering module
//!
//! One pipeline, one shared unit quad; every entity is that quad scaled
//! and translated by its world matrix.

pub mod pipeline;
pub mod vertex;

pub use pipeline::RenderState;
