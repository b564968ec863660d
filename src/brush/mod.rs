//! Brush painting: parameters, footprints, strokes and the rasterizer

pub mod params;
pub mod footprint;
pub mod stroke;
pub mod raster;
pub mod sphere;
pub mod session;

// Re-exports
pub use params::{BrushParameters, BrushShape};
pub use footprint::BrushFootprint;
pub use stroke::{StrokeAccumulator, StrokeState};
pub use raster::PaintStats;
pub use session::{PaintSession, SessionObserver};
