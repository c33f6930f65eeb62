//! egui host for a single [`PadControl`].
//!
//! Routes the pointer into the pad's touch handlers, keeps the plane
//! animation running and paints the pad's scene.

use super::common::{size_of, to_local, to_screen, to_screen_rect, UiColors};
use crate::config::{PadEntry, PadSettings};
use crate::pad::{
    PadControl, PadError, PadScene, PadValues, PlaneAnimator, Point, TouchId, ValueChanged,
};
use egui::{Sense, Stroke, StrokeKind, Ui, Vec2};
use std::time::Instant;
use tracing::{debug, info};

/// Touch input derived from the pointer state of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Begin(Point),
    Move(Point),
    End,
}

/// Maps the pointer state of a frame onto touch input.
///
/// A press on the pad begins a touch, holding it moves the touch and letting
/// go (or losing the pointer) ends it.
pub fn pointer_input(pressed: bool, selected: bool, location: Option<Point>) -> Option<PointerInput> {
    match (pressed, selected, location) {
        (true, false, Some(point)) => Some(PointerInput::Begin(point)),
        (true, true, Some(point)) => Some(PointerInput::Move(point)),
        (false, true, _) | (true, true, None) => Some(PointerInput::End),
        _ => None,
    }
}

/// One-line description of the non-zero values, e.g. `up 0.42 right 0.10`
pub fn describe(values: &PadValues) -> String {
    values
        .active()
        .map(|(direction, value)| format!("{} {:.2}", direction, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A labeled pad with its animation state
pub struct PadView {
    label: String,
    control: PadControl,
    animator: PlaneAnimator,
    last_change: Option<ValueChanged>,
}

impl PadView {
    pub fn new(entry: &PadEntry, settings: PadSettings) -> Result<Self, PadError> {
        let planes = entry.planes.unwrap_or(settings.default_plane_count);
        let control = PadControl::with_settings(entry.directions, planes, settings)?;
        let animator = PlaneAnimator::new(PadScene::build(&control));
        debug!("Created pad view '{}'", entry.label);
        Ok(Self {
            label: entry.label.clone(),
            control,
            animator,
            last_change: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn control(&self) -> &PadControl {
        &self.control
    }

    /// Applies one frame of pointer input, returning the pad's notification
    pub fn handle(&mut self, input: PointerInput, now: Instant) -> Option<ValueChanged> {
        let change = match input {
            PointerInput::Begin(point) => self.control.touch_begin(TouchId::POINTER, point),
            PointerInput::Move(point) => {
                if self.control.touch_point() == Some(self.control.clamp_touch_point(point)) {
                    return None;
                }
                self.control.touch_move(TouchId::POINTER, point)
            }
            PointerInput::End => self.control.touch_end(TouchId::POINTER),
        }?;

        self.animator.apply(&change, &self.control, now);
        info!("{} {:?}: {}", self.label, change.kind, describe(&change.values));
        self.last_change = Some(change);
        Some(change)
    }

    /// Lays out, drives and paints the pad in a cell of `size`
    pub fn render(&mut self, ui: &mut Ui, size: Vec2) {
        ui.vertical(|ui| {
            ui.label(&self.label);

            let (area, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
            let now = Instant::now();

            // Layout pass; egui sizes are never negative
            let bounds = size_of(area);
            if bounds != self.control.bounds() && self.control.set_bounds(bounds).is_ok() {
                self.animator.jump_to(PadScene::build(&self.control));
            }

            let location = response.interact_pointer_pos().map(|pos| to_local(pos, area));
            let pressed = response.is_pointer_button_down_on();
            if let Some(input) = pointer_input(pressed, self.control.is_selected(), location) {
                self.handle(input, now);
            }

            if self.animator.is_animating(now) {
                ui.ctx().request_repaint();
            }

            self.paint(ui, area, &self.animator.sample(now));

            let values = self.last_change.map(|change| change.values).unwrap_or_default();
            ui.small(describe(&values));
        });
    }

    fn paint(&self, ui: &Ui, area: egui::Rect, scene: &PadScene) {
        let painter = ui.painter_at(area);
        painter.rect_filled(area, 0.0, UiColors::EXTREME_BG);

        for plane in &scene.planes {
            let rect = to_screen_rect(plane.rect, area);
            let radius = plane.corner_radius as f32;
            painter.rect_filled(
                rect,
                radius,
                UiColors::ACTION.gamma_multiply(plane.fill_opacity as f32),
            );
            painter.rect_stroke(
                rect,
                radius,
                Stroke::new(plane.stroke_width as f32, UiColors::STROKE),
                StrokeKind::Inside,
            );
        }

        if let Some(dot) = scene.dot {
            let color = if dot.highlighted {
                UiColors::HIGHLIGHT
            } else {
                UiColors::ACTION
            };
            painter.circle_filled(to_screen(dot.center, area), dot.radius as f32, color);
        }
    }
}
