//! # Pad control
//!
//! Touch handling, value reporting and peak geometry for a single pad.
//!
//! ## Why This Module Exists
//!
//! Hosts differ in how they deliver touches and paint shapes, but the rules
//! for turning a finger position into directional values are the same
//! everywhere. [`PadControl`] owns those rules so a host only has to:
//! - report its bounds through [`PadControl::set_bounds`]
//! - forward touch events and react to the returned [`ValueChanged`]
//! - draw the planes described by [`PadControl::plane_rect`]
//!
//! ## Key Abstractions
//!
//! ### Values
//! [`PadControl::value_for_direction`] maps the tracked touch point to a reach
//! in `[0, 1]`. Bidirectional axes split the bounds at the midpoint;
//! unidirectional axes map the full span to their single direction.
//!
//! ### Peak and planes
//! The peak is the region the top plane occupies. Its size depends on each
//! axis' [`AxisMode`]; its origin follows the touch (or the resting point)
//! and is always clamped inside the bounds. Every other plane interpolates
//! between the full bounds and the peak by its [`Elevation`].
//!
//! ## Design Rationale
//!
//! Touch tracking is delegated to the typestate session in
//! [`super::session`], which makes "first touch wins" a property of the
//! types. Everything else is computed on demand from the bounds and the touch
//! point; the pad keeps no cached geometry that could go stale after a layout
//! pass.

use super::directions::{Axis, AxisMode, Direction, DirectionSet};
use super::geometry::{clamp, Point, Rect, Size};
use super::session::{TouchId, TouchPhase};
use super::PadError;
use crate::config::PadSettings;
use tracing::{debug, info, trace, warn};

/// Normalized position of a plane between the bounds (0.0) and the peak (1.0)
pub type Elevation = f64;

/// What caused a value-changed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Began,
    Moved,
    Ended,
}

/// Snapshot of all four directional values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadValues {
    pub up: f64,
    pub left: f64,
    pub down: f64,
    pub right: f64,
}

impl PadValues {
    /// Value for a single direction
    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
        }
    }

    /// Directions with a non-zero value, in Up, Left, Down, Right order
    pub fn active(&self) -> impl Iterator<Item = (Direction, f64)> + '_ {
        Direction::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .filter(|(_, value)| *value > 0.0)
    }
}

/// Value-changed notification emitted on every accepted touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    pub kind: TouchKind,
    /// Values after the event was applied
    pub values: PadValues,
}

impl ValueChanged {
    /// Whether the planes should animate to their new geometry
    pub fn animated(&self) -> bool {
        self.kind == TouchKind::Ended
    }
}

/// Touch-driven directional pad.
///
/// Built once with a fixed [`DirectionSet`] and plane count. The host feeds it
/// its current bounds and the local location of touch events; the pad answers
/// with directional values and the geometry its planes should take.
///
/// Has no `Default` or `Deserialize` implementation: a pad
/// only exists with an explicit direction configuration.
#[derive(Debug)]
pub struct PadControl {
    directions: DirectionSet,
    plane_count: usize,
    settings: PadSettings,
    bounds: Size,
    phase: TouchPhase,
}

impl PadControl {
    /// Creates a pad with the default plane count
    pub fn new(directions: DirectionSet) -> Self {
        let settings = PadSettings::default();
        Self::build(directions, settings.default_plane_count.max(1), settings)
    }

    /// Creates a pad with `planes` elevation planes
    pub fn with_planes(directions: DirectionSet, planes: usize) -> Result<Self, PadError> {
        Self::with_settings(directions, planes, PadSettings::default())
    }

    /// Creates a pad with explicit tuning values.
    ///
    /// Fails for zero planes and for settings that would let the peak outgrow
    /// the bounds (see [`PadSettings::validate`]).
    pub fn with_settings(
        directions: DirectionSet,
        planes: usize,
        settings: PadSettings,
    ) -> Result<Self, PadError> {
        if planes == 0 {
            return Err(PadError::NoPlanes);
        }
        settings.validate()?;
        Ok(Self::build(directions, planes, settings))
    }

    fn build(directions: DirectionSet, plane_count: usize, settings: PadSettings) -> Self {
        info!(
            "Creating pad for directions {:?} with {} planes",
            directions, plane_count
        );
        Self {
            directions,
            plane_count,
            settings,
            bounds: Size::default(),
            phase: TouchPhase::default(),
        }
    }

    /// Directions the pad was built with
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    pub fn settings(&self) -> &PadSettings {
        &self.settings
    }

    /// Size adopted in the last layout pass
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Layout pass: adopts the host's current size.
    ///
    /// Geometry follows the new bounds on the next query. No value-changed
    /// notification is emitted.
    pub fn set_bounds(&mut self, bounds: Size) -> Result<(), PadError> {
        if !(bounds.width >= 0.0 && bounds.height >= 0.0) {
            return Err(PadError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if bounds != self.bounds {
            debug!(
                "Pad bounds changed to {:.1}x{:.1}",
                bounds.width, bounds.height
            );
            self.bounds = bounds;
        }
        Ok(())
    }

    /// True while a touch is tracked
    pub fn is_selected(&self) -> bool {
        self.phase.is_active()
    }

    /// Clamped location of the tracked touch
    pub fn touch_point(&self) -> Option<Point> {
        self.phase.touch_point()
    }

    /// Starts tracking `touch_id` unless another touch is already tracked
    pub fn touch_begin(&mut self, touch_id: TouchId, location: Point) -> Option<ValueChanged> {
        let point = self.clamp_touch_point(location);
        match std::mem::take(&mut self.phase) {
            TouchPhase::Idle(session) => {
                self.phase = TouchPhase::Active(session.begin(touch_id, point));
                Some(self.notify(TouchKind::Began))
            }
            TouchPhase::Active(session) => {
                warn!(
                    "Ignoring touch {:?}, already tracking {:?}",
                    touch_id,
                    session.touch_id()
                );
                self.phase = TouchPhase::Active(session);
                None
            }
        }
    }

    /// Follows the tracked touch; moves of any other touch are dropped
    pub fn touch_move(&mut self, touch_id: TouchId, location: Point) -> Option<ValueChanged> {
        let point = self.clamp_touch_point(location);
        match &mut self.phase {
            TouchPhase::Active(session) if session.tracks(touch_id) => {
                session.move_to(point);
            }
            _ => {
                trace!("Dropping move for untracked touch {:?}", touch_id);
                return None;
            }
        }
        Some(self.notify(TouchKind::Moved))
    }

    /// Ends the tracked touch; the final notification reports all zeros
    pub fn touch_end(&mut self, touch_id: TouchId) -> Option<ValueChanged> {
        match std::mem::take(&mut self.phase) {
            TouchPhase::Active(session) if session.tracks(touch_id) => {
                self.phase = TouchPhase::Idle(session.end());
                Some(self.notify(TouchKind::Ended))
            }
            other => {
                debug!("Dropping end for untracked touch {:?}", touch_id);
                self.phase = other;
                None
            }
        }
    }

    fn notify(&self, kind: TouchKind) -> ValueChanged {
        let values = self.values();
        trace!(
            "{:?}: up={:.3} left={:.3} down={:.3} right={:.3}",
            kind,
            values.up,
            values.left,
            values.down,
            values.right
        );
        ValueChanged { kind, values }
    }

    /// Clamps a raw location into bounds.
    ///
    /// Axes the pad does not move along snap to the middle of the bounds.
    pub fn clamp_touch_point(&self, location: Point) -> Point {
        let d = self.directions;
        let size = self.bounds;

        let x = if d.nondirectional(Axis::X) {
            size.width * 0.5
        } else {
            clamp(location.x, 0.0, size.width)
        };
        let y = if d.nondirectional(Axis::Y) {
            size.height * 0.5
        } else {
            clamp(location.y, 0.0, size.height)
        };

        Point::new(x, y)
    }

    /// Normalized reach toward `direction`, in `[0, 1]`.
    ///
    /// Zero while no touch is active, for directions the pad was not built
    /// with, and for sets without an axis. On a bidirectional axis each half of
    /// the bounds maps to one direction, with the midpoint reading zero for
    /// both. On a unidirectional axis the full span maps to the one direction.
    pub fn value_for_direction(&self, direction: impl Into<DirectionSet>) -> f64 {
        let direction = direction.into();

        let Some(touch_point) = self.touch_point() else {
            return 0.0;
        };
        if !self.directions.contains(direction) {
            return 0.0;
        }
        let Some(axis) = direction.axis() else {
            return 0.0;
        };

        let bi = self.directions.bidirectional(axis);
        let span_multiplier = if bi { 0.5 } else { 1.0 };
        let subtract = if bi { 1.0 } else { 0.0 };

        let (position, extent, high) = match axis {
            Axis::X => (touch_point.x, self.bounds.width, DirectionSet::RIGHT),
            Axis::Y => (touch_point.y, self.bounds.height, DirectionSet::DOWN),
        };

        let total = position / (extent * span_multiplier);
        let value = if direction.contains(high) {
            total - subtract
        } else {
            1.0 - total
        };

        // A zero extent yields NaN, which reads as no reach
        if value.is_nan() {
            return 0.0;
        }
        clamp(value, 0.0, 1.0)
    }

    /// Net pull along `axis`: the difference between its two directions
    pub fn value_for_axis(&self, axis: Axis) -> f64 {
        let (low, high) = axis.directions();
        (self.value_for_direction(low) - self.value_for_direction(high)).abs()
    }

    /// All four directional values at once
    pub fn values(&self) -> PadValues {
        PadValues {
            up: self.value_for_direction(Direction::Up),
            left: self.value_for_direction(Direction::Left),
            down: self.value_for_direction(Direction::Down),
            right: self.value_for_direction(Direction::Right),
        }
    }

    /// Where the peak sits while no touch is active.
    ///
    /// Bidirectional axes rest in the middle. One-sided axes rest at 0 for Up
    /// or Left and at the full extent for Down or Right, which is the edge of
    /// full reach for Left and Up pads rather than the edge of zero reach.
    pub fn resting_point(&self) -> Point {
        let percent = |axis: Axis| match self.directions.mode(axis) {
            AxisMode::Bidirectional => 0.5,
            AxisMode::HighOnly => 1.0,
            AxisMode::LowOnly | AxisMode::Nondirectional => 0.0,
        };

        Point::new(
            self.bounds.width * percent(Axis::X),
            self.bounds.height * percent(Axis::Y),
        )
    }

    /// Size of the peak region for the current touch and selection
    pub fn peak_size(&self) -> Size {
        Size::new(
            self.peak_extent(Axis::X, self.bounds.width),
            self.peak_extent(Axis::Y, self.bounds.height),
        )
    }

    fn peak_extent(&self, axis: Axis, full: f64) -> f64 {
        let min_edge = self
            .settings
            .preferred_edge_length
            .min(full * self.settings.min_edge_fraction);

        match self.directions.mode(axis) {
            AxisMode::Nondirectional => full,
            AxisMode::Bidirectional => min_edge,
            AxisMode::LowOnly | AxisMode::HighOnly => {
                let floor = if self.is_selected() {
                    min_edge * self.settings.selection_growth_multiplier
                } else {
                    min_edge
                };
                floor.max(full * self.value_for_axis(axis))
            }
        }
    }

    /// Top-left corner of the peak region, kept inside the bounds
    pub fn peak_origin(&self) -> Point {
        let size = self.peak_size();
        let center = self.touch_point().unwrap_or_else(|| self.resting_point());

        let offset = |axis: Axis| match self.directions.mode(axis) {
            AxisMode::Bidirectional => 0.5,
            AxisMode::HighOnly => 1.0,
            AxisMode::LowOnly | AxisMode::Nondirectional => 0.0,
        };

        let x = center.x - size.width * offset(Axis::X);
        let y = center.y - size.height * offset(Axis::Y);

        Point::new(
            x.min(self.bounds.width - size.width).max(0.0),
            y.min(self.bounds.height - size.height).max(0.0),
        )
    }

    /// Region the top plane occupies
    pub fn peak_rect(&self) -> Rect {
        Rect::new(self.peak_origin(), self.peak_size())
    }

    /// Evenly spaced from 0.0 for the base plane to 1.0 for the top plane
    pub fn plane_elevation(&self, index: usize) -> Elevation {
        let divisor = (self.plane_count as f64 - 1.0).max(1.0);
        index as f64 / divisor
    }

    /// Rect of the plane at `elevation`, between the bounds and the peak.
    ///
    /// While selected the elevation is squared, so upper planes hug the peak.
    pub fn plane_rect(&self, elevation: Elevation) -> Rect {
        let exponent = if self.is_selected() {
            self.settings.selection_growth_exponent
        } else {
            1.0
        };
        Rect::from_size(self.bounds).lerp(&self.peak_rect(), elevation, exponent)
    }
}
