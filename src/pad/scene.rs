//! # Pad scenes
//!
//! Shape descriptors for painting a pad, and the return-to-rest animation.
//!
//! ## Why This Module Exists
//!
//! [`PadScene::build`] turns a [`PadControl`] into plain rectangles and a dot.
//! Hosts paint these with whatever toolkit they use. Colors stay on the host
//! side; the scene only carries opacities and whether the dot is highlighted.
//!
//! ## Animation
//!
//! [`PlaneAnimator`] holds the scene currently on screen. Touch-end
//! notifications start a linear blend from the displayed scene back to the
//! resting one; begin and move notifications jump straight to the new scene
//! and cancel whatever blend was running. The animator is sampled with the
//! frame time, so it never needs a timer of its own.

use super::control::{Elevation, PadControl, ValueChanged};
use super::geometry::{lerp, Point, Rect};
use std::time::{Duration, Instant};
use tracing::debug;

/// One elevation plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneShape {
    pub rect: Rect,
    pub elevation: Elevation,
    pub corner_radius: f64,
    pub stroke_width: f64,
    /// Opacity applied to the host's fill color
    pub fill_opacity: f64,
}

/// Marker dot centered in the peak region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotShape {
    pub center: Point,
    pub radius: f64,
    /// Drawn in the highlight color while a touch is active
    pub highlighted: bool,
}

/// Everything a host needs to draw one frame of a pad
#[derive(Debug, Clone, PartialEq)]
pub struct PadScene {
    /// Base plane first, top plane last
    pub planes: Vec<PlaneShape>,
    pub dot: Option<DotShape>,
}

impl PadScene {
    /// Describes every plane of `pad` and, when a plane sits at the peak, the dot
    pub fn build(pad: &PadControl) -> Self {
        let settings = pad.settings();
        let selected = pad.is_selected();

        let planes: Vec<PlaneShape> = (0..pad.plane_count())
            .map(|index| {
                let elevation = pad.plane_elevation(index);
                PlaneShape {
                    rect: pad.plane_rect(elevation),
                    elevation,
                    corner_radius: settings.plane_corner_radius,
                    stroke_width: settings.stroke_width,
                    fill_opacity: plane_opacity(elevation, selected),
                }
            })
            .collect();

        // Only a plane sitting exactly at the peak carries the dot
        let dot = planes
            .iter()
            .any(|plane| plane.elevation == 1.0)
            .then(|| DotShape {
                center: pad.peak_rect().center(),
                radius: settings.dot_radius,
                highlighted: selected,
            });

        Self { planes, dot }
    }

    /// Interpolates every plane and the dot toward `target`.
    ///
    /// Scenes of different plane counts do not blend; `target` is returned.
    pub fn blend(&self, target: &PadScene, t: f64) -> PadScene {
        if self.planes.len() != target.planes.len() {
            return target.clone();
        }

        let planes = self
            .planes
            .iter()
            .zip(&target.planes)
            .map(|(from, to)| PlaneShape {
                rect: from.rect.lerp(&to.rect, t, 1.0),
                ..*to
            })
            .collect();

        let dot = match (self.dot, target.dot) {
            (Some(from), Some(to)) => Some(DotShape {
                center: Point::new(
                    lerp(from.center.x, to.center.x, t, 1.0),
                    lerp(from.center.y, to.center.y, t, 1.0),
                ),
                ..to
            }),
            (_, to) => to,
        };

        PadScene { planes, dot }
    }
}

/// Fill opacity for a plane.
///
/// Selected planes fade in with elevation, never below 0.1. Idle pads only
/// tint their base plane.
pub fn plane_opacity(elevation: Elevation, selected: bool) -> f64 {
    if selected {
        elevation.max(0.1)
    } else if elevation == 0.0 {
        0.1
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
struct SceneTransition {
    from: PadScene,
    started_at: Instant,
    duration: Duration,
}

/// Displayed scene of a pad plus any in-flight animation toward it
#[derive(Debug, Clone)]
pub struct PlaneAnimator {
    target: PadScene,
    transition: Option<SceneTransition>,
}

impl PlaneAnimator {
    /// Starts at rest on `scene`
    pub fn new(scene: PadScene) -> Self {
        Self {
            target: scene,
            transition: None,
        }
    }

    /// Scene the animator is heading to, or showing when idle
    pub fn target(&self) -> &PadScene {
        &self.target
    }

    /// Moves to `scene` right away, dropping any running animation
    pub fn jump_to(&mut self, scene: PadScene) {
        if self.transition.take().is_some() {
            debug!("Cancelled running plane animation");
        }
        self.target = scene;
    }

    /// Animates from whatever is on screen at `now` toward `scene`
    pub fn animate_to(&mut self, scene: PadScene, now: Instant, duration: Duration) {
        let from = self.sample(now);
        self.transition = Some(SceneTransition {
            from,
            started_at: now,
            duration,
        });
        self.target = scene;
    }

    /// Applies a value-changed notification, animating when it asks for it
    pub fn apply(&mut self, change: &ValueChanged, pad: &PadControl, now: Instant) {
        let scene = PadScene::build(pad);
        if change.animated() {
            self.animate_to(scene, now, pad.settings().animation_duration());
        } else {
            self.jump_to(scene);
        }
    }

    /// True until the running blend has used up its duration
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| now.duration_since(transition.started_at) < transition.duration)
    }

    /// Scene to draw at `now`
    pub fn sample(&self, now: Instant) -> PadScene {
        match &self.transition {
            Some(transition) if self.is_animating(now) => {
                let elapsed = now.duration_since(transition.started_at);
                let t = elapsed.as_secs_f64() / transition.duration.as_secs_f64();
                transition.from.blend(&self.target, t)
            }
            _ => self.target.clone(),
        }
    }
}
