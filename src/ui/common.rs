//! # Shared UI styling and coordinate helpers
//!
//! Pads know nothing about colors or screen space. This module holds the
//! palette the demo paints them with and the conversions between egui's
//! screen coordinates and a pad's local coordinates.

use crate::pad::{Point, Rect, Size};
use egui::{vec2, Color32, Frame, Pos2, Stroke};

/// Centralized color palette for the pad demo's dark theme.
///
/// Plane fills use [`UiColors::ACTION`] scaled by each plane's opacity. The
/// dot switches from the action color to [`UiColors::HIGHLIGHT`] while a
/// touch is active.
pub struct UiColors;

impl UiColors {
    /// Background behind the pads (RGB: 30, 30, 30)
    pub const MAIN_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Background of a pad's cell (RGB: 20, 20, 20)
    pub const EXTREME_BG: Color32 = Color32::from_rgb(20, 20, 20);

    /// Border around pad cells (RGB: 60, 60, 60)
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Plane outlines
    pub const STROKE: Color32 = Color32::WHITE;

    /// Plane fill and idle dot color (RGB: 0, 122, 255)
    pub const ACTION: Color32 = Color32::from_rgb(0, 122, 255);

    /// Dot color while a touch is active
    pub const HIGHLIGHT: Color32 = Color32::WHITE;
}

/// Framed cell a pad is drawn in
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(4)
        .outer_margin(2)
}

/// Screen position to pad-local coordinates
pub fn to_local(pos: Pos2, area: egui::Rect) -> Point {
    let offset = pos - area.min;
    Point::new(offset.x as f64, offset.y as f64)
}

/// Pad-local point to screen position
pub fn to_screen(point: Point, area: egui::Rect) -> Pos2 {
    area.min + vec2(point.x as f32, point.y as f32)
}

/// Pad-local rect to screen rect
pub fn to_screen_rect(rect: Rect, area: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_screen(rect.origin, area),
        vec2(rect.size.width as f32, rect.size.height as f32),
    )
}

/// Size of a screen rect in pad units
pub fn size_of(area: egui::Rect) -> Size {
    Size::new(area.width() as f64, area.height() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn local_and_screen_coordinates_agree() {
        let area = egui::Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 80.0));

        assert_eq!(to_local(pos2(150.0, 60.0), area), Point::new(50.0, 10.0));
        assert_eq!(to_screen(Point::new(50.0, 10.0), area), pos2(150.0, 60.0));
        assert_eq!(size_of(area), Size::new(200.0, 80.0));

        let local = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        let screen = to_screen_rect(local, area);
        assert_eq!(screen.min, pos2(110.0, 70.0));
        assert_eq!(screen.max, pos2(140.0, 110.0));
    }
}
