//! Editor effect dispatch

pub mod registry;

pub use registry::{EditorEffect, EffectRegistry, EffectTarget, ViewKind};
