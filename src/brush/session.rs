//! Paint session driving the stroke lifecycle
//!
//! Owns the brush parameters, the per-view footprint cache and the stroke
//! buffer, and turns pointer/key events into rasterizer calls. Volumes and
//! slice geometry are borrowed per event; the session holds no scene state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::core::config::SessionConfig;
use crate::core::events::{KeySym, PointerEvent};
use crate::core::types::{Result, Vec2};
use crate::effect::registry::{EditorEffect, EffectTarget, ViewKind};
use crate::math::bounds::IjkBox;
use crate::brush::footprint::BrushFootprint;
use crate::brush::params::BrushParameters;
use crate::brush::raster::{self, PaintStats};
use crate::brush::stroke::StrokeAccumulator;
use crate::slice::geometry::{SliceGeometry, ViewId};
use crate::volume::Volume;

/// Radius scale applied on `+`/`=`
const RADIUS_SCALE_UP: f32 = 1.2;
/// Radius scale applied on `-`/`_`
const RADIUS_SCALE_DOWN: f32 = 0.8;

/// Receives the signals a paint session produces
pub trait SessionObserver {
    /// The label volume changed inside `region`; the owning view should repaint
    fn request_redraw(&mut self, view: ViewId, region: Option<IjkBox>) {
        let _ = (view, region);
    }

    /// A paint was applied. Undo collaborators snapshot state around this;
    /// no payload is needed beyond the fact that a paint occurred.
    fn stroke_applied(&mut self) {}
}

/// No-op observer for callers that do not track redraws
impl SessionObserver for () {}

/// Interactive brush-painting session
pub struct PaintSession {
    params: BrushParameters,
    delayed_paint: bool,
    stroke: StrokeAccumulator,
    /// Erase flag latched at stroke start, so one stroke never mixes
    /// fill and erase writes
    stroke_erase: bool,
    footprints: HashMap<ViewId, BrushFootprint>,
    smudge_warned: bool,
}

impl PaintSession {
    /// Create a session from a config
    pub fn new(config: SessionConfig) -> Self {
        Self {
            params: config.brush,
            delayed_paint: config.delayed_paint,
            stroke: StrokeAccumulator::new(),
            stroke_erase: false,
            footprints: HashMap::new(),
            smudge_warned: false,
        }
    }

    /// Current brush parameters
    pub fn params(&self) -> &BrushParameters {
        &self.params
    }

    /// Replace the brush parameters and drop cached footprints
    pub fn set_params(&mut self, params: BrushParameters) {
        self.params = params;
        self.footprints.clear();
    }

    /// Scale the radius within its bounds; cached footprints are rebuilt
    pub fn scale_radius(&mut self, factor: f32) {
        self.params.scale_radius(factor);
        self.footprints.clear();
    }

    /// Whether move points buffer until release
    pub fn delayed_paint(&self) -> bool {
        self.delayed_paint
    }

    /// Toggle stroke buffering
    pub fn set_delayed_paint(&mut self, delayed: bool) {
        self.delayed_paint = delayed;
    }

    /// Whether a stroke is currently in progress
    pub fn is_painting(&self) -> bool {
        self.stroke.is_active()
    }

    /// The view geometry changed (pan/zoom/reformat); its footprint is stale
    pub fn geometry_changed(&mut self, view: ViewId) {
        self.footprints.remove(&view);
    }

    /// Abort any in-flight stroke and drop all cached footprints
    pub fn deactivate(&mut self) {
        self.stroke.abort();
        self.footprints.clear();
    }

    /// Feed a pointer event from the given view
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        slice: &SliceGeometry,
        master: &Volume,
        label: &mut Volume,
        observer: &mut dyn SessionObserver,
    ) {
        match event {
            PointerEvent::Press { position } => {
                if self.params.smudge && !self.smudge_warned {
                    log::warn!("Smudge is not implemented; painting with the current parameters");
                    self.smudge_warned = true;
                }
                self.stroke_erase = self.params.erase;
                self.stroke.begin(position);
                if self.immediate_mode() {
                    let points = self.stroke.drain();
                    self.dispatch(points, slice, master, label, observer);
                }
            }
            PointerEvent::Move { position } => {
                if !self.stroke.append(position) {
                    return;
                }
                if self.immediate_mode() {
                    let points = self.stroke.drain();
                    self.dispatch(points, slice, master, label, observer);
                }
            }
            PointerEvent::Release { .. } => {
                if !self.stroke.is_active() {
                    return;
                }
                let points = self.stroke.finish();
                self.dispatch(points, slice, master, label, observer);
            }
        }
    }

    /// Feed a key event; radius scaling never emits a paint
    pub fn handle_key(&mut self, key: KeySym) {
        match key {
            KeySym::Plus | KeySym::Equal => self.scale_radius(RADIUS_SCALE_UP),
            KeySym::Minus | KeySym::Underscore => self.scale_radius(RADIUS_SCALE_DOWN),
        }
    }

    fn immediate_mode(&self) -> bool {
        self.params.pixel_mode || !self.delayed_paint
    }

    /// Paint a batch of drained stroke points and notify the observer.
    /// A point that fails (singular view transform, bad radius) is logged and
    /// discarded; later points still paint.
    fn dispatch(
        &mut self,
        points: Vec<Vec2>,
        slice: &SliceGeometry,
        master: &Volume,
        label: &mut Volume,
        observer: &mut dyn SessionObserver,
    ) {
        let mut params = self.params;
        params.erase = self.stroke_erase;

        let mut stats = PaintStats::default();
        if params.pixel_mode {
            stats.merge(&raster::paint_pixels(&points, slice, label, &params));
        } else {
            match self.footprint_for(slice, &params) {
                Ok(footprint) => {
                    let footprint = footprint.clone();
                    for &point in &points {
                        match raster::paint_brush(point, &footprint, slice, master, label, &params)
                        {
                            Ok(point_stats) => stats.merge(&point_stats),
                            Err(e) => log::warn!("Discarding stroke point: {}", e),
                        }
                    }
                }
                Err(e) => log::error!("Cannot build brush footprint: {}", e),
            }
        }

        observer.request_redraw(slice.view(), stats.modified);
        observer.stroke_applied();
    }

    fn footprint_for(
        &mut self,
        slice: &SliceGeometry,
        params: &BrushParameters,
    ) -> Result<&BrushFootprint> {
        match self.footprints.entry(slice.view()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let footprint = BrushFootprint::build(params, slice)?;
                Ok(entry.insert(footprint))
            }
        }
    }
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl EditorEffect for PaintSession {
    fn name(&self) -> &str {
        "Paint"
    }

    /// Paints 2D slice views that carry an editable label volume
    fn can_handle(&self, target: &EffectTarget) -> f64 {
        if target.view == ViewKind::Slice && target.has_label {
            0.5
        } else {
            0.0
        }
    }
}
