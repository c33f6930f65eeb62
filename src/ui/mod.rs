//! # Pad demo user interface
//!
//! Hosts a set of pads in an eframe window the way an application would: it
//! builds each pad from the configured directions and plane count, hands it
//! its bounds and pointer input every frame, and logs every value-changed
//! notification.
//!
//! ## Layout
//! - **Omni row**: large square pads responding to every direction
//! - **Horizontal row**: wide, short pads (left, right, left + right)
//! - **Vertical row**: narrow, tall pads (up, down, up + down)
//!
//! Any row without pads is skipped.

pub mod common;
pub mod pad_view;

use tracing::info;

use crate::config::{DemoConfig, PadRow};
use crate::pad::PadError;

use self::common::{create_frame, UiColors};
use self::pad_view::PadView;

const SPACING: f32 = 12.0;

/// Top-level eframe application
pub struct PadDemoUI {
    views: Vec<(PadRow, PadView)>,
}

impl PadDemoUI {
    /// Builds a view for every configured pad
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DemoConfig) -> Result<Self, PadError> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        Self::from_config(config)
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self, PadError> {
        let views = config
            .pads
            .iter()
            .map(|entry| Ok((entry.row, PadView::new(entry, config.settings)?)))
            .collect::<Result<Vec<_>, PadError>>()?;

        info!("Pad demo UI created with {} pads", views.len());
        Ok(Self { views })
    }

    fn render_row(&mut self, ui: &mut egui::Ui, row: PadRow, cell: egui::Vec2) {
        if !self.views.iter().any(|(r, _)| *r == row) {
            return;
        }

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for (_, view) in self.views.iter_mut().filter(|(r, _)| *r == row) {
                create_frame(UiColors::MAIN_BG, UiColors::BORDER).show(ui, |ui| {
                    view.render(ui, cell);
                });
            }
        });
        ui.add_space(SPACING);
    }

    /// Cell sizes for the omni, horizontal and vertical rows
    fn cell_sizes(available: egui::Vec2) -> [egui::Vec2; 3] {
        let column = ((available.x - SPACING * 4.0) / 3.0).max(60.0);
        let omni = (available.y * 0.4).min(available.x - SPACING).max(120.0);
        [
            egui::vec2(omni, omni),
            egui::vec2(column, 88.0),
            egui::vec2(column.min(120.0), (available.y * 0.3).max(160.0)),
        ]
    }
}

impl eframe::App for PadDemoUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let [omni, horizontal, vertical] = Self::cell_sizes(ui.available_size());

                self.render_row(ui, PadRow::Omni, omni);
                self.render_row(ui, PadRow::Horizontal, horizontal);
                self.render_row(ui, PadRow::Vertical, vertical);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PadEntry;
    use crate::pad::DirectionSet;

    #[test]
    fn default_config_builds_every_pad() {
        let ui = PadDemoUI::from_config(&DemoConfig::default()).expect("ui");
        let labels: Vec<&str> = ui.views.iter().map(|(_, view)| view.label()).collect();
        assert_eq!(
            labels,
            vec!["omni", "left", "right", "left + right", "up", "down", "up + down"]
        );
        assert_eq!(ui.views[0].1.control().plane_count(), 3);
        assert_eq!(ui.views[1].1.control().plane_count(), 4);
    }

    #[test]
    fn pad_without_planes_fails_the_build() {
        let mut config = DemoConfig::default();
        config.pads.push(PadEntry::new("broken", DirectionSet::ALL, Some(0), PadRow::Omni));
        assert!(matches!(
            PadDemoUI::from_config(&config),
            Err(PadError::NoPlanes)
        ));
    }
}
