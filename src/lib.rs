//! Voxpaint - an interactive volumetric brush-painting engine

pub mod core;
pub mod math;
pub mod volume;
pub mod slice;
pub mod effect;
pub mod brush;
