use eframe::egui::{
    self,
    Align2,
    Color32,
    CornerRadius,
    FontId,
    Rect,
    Sense,
    Stroke,
};

use crate::core::diverging::{
    BarGroup,
    DivergingDataset,
    Winner,
};

const BAR_HEIGHT: f32 = 20.0;
const BAR_GAP: f32 = 6.0;
const LABEL_GUTTER: f32 = 90.0;
const PLOT_PADDING: f32 = 8.0;

/// Tailwind green-500 / red-500, matching the service's web styling.
const WINNER_FILL: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const LOSER_FILL: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

/// Horizontal tug-of-war chart: older bars grow left from the shared zero
/// line, equal-or-younger bars grow right, and the winning side carries the
/// affirmative color.
pub struct BinaryBarChart;

impl BinaryBarChart {
    pub fn show(ui: &mut egui::Ui, dataset: &DivergingDataset) {
        let height = dataset.bars.len() as f32 * (BAR_HEIGHT + BAR_GAP) + BAR_GAP;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(ui.available_width(), height), Sense::hover());
        let rect = response.rect;

        let plot_left = rect.left() + LABEL_GUTTER;
        let plot_right = rect.right();
        let center_x = (plot_left + plot_right) / 2.0;
        let half_span = (plot_right - plot_left) / 2.0 - PLOT_PADDING;
        let scale = if dataset.domain > 0.0 { half_span / dataset.domain as f32 } else { 0.0 };

        for (index, bar) in dataset.bars.iter().enumerate() {
            let top = rect.top() + BAR_GAP + index as f32 * (BAR_HEIGHT + BAR_GAP);
            let mid_y = top + BAR_HEIGHT / 2.0;

            if bar.group == BarGroup::Threshold {
                painter.line_segment(
                    [egui::pos2(plot_left, mid_y), egui::pos2(plot_right, mid_y)],
                    Stroke::new(1.0, ui.visuals().strong_text_color()),
                );
                continue;
            }

            painter.text(
                egui::pos2(rect.left(), mid_y),
                Align2::LEFT_CENTER,
                &bar.label,
                FontId::proportional(12.0),
                ui.visuals().text_color(),
            );

            let winning_side = matches!(
                (bar.group, dataset.winner),
                (BarGroup::Older, Winner::Older)
                    | (BarGroup::EqualOrYounger, Winner::EqualOrYounger)
            );
            let fill = if winning_side { WINNER_FILL } else { LOSER_FILL };

            let extent = bar.value as f32 * scale;
            let (x0, x1) = if extent < 0.0 {
                (center_x + extent, center_x)
            } else {
                (center_x, center_x + extent)
            };

            if x1 - x0 >= 0.5 {
                painter.rect_filled(
                    Rect::from_min_max(egui::pos2(x0, top), egui::pos2(x1, top + BAR_HEIGHT)),
                    CornerRadius::same(4),
                    fill,
                );
            }

            if let Some(text) = bar.percent_text() {
                let text_color = if winning_side { Color32::WHITE } else { Color32::BLACK };
                let (anchor_x, align) = if extent < 0.0 {
                    (x0 + 4.0, Align2::LEFT_CENTER)
                } else {
                    (x1 - 4.0, Align2::RIGHT_CENTER)
                };
                painter.text(
                    egui::pos2(anchor_x, mid_y),
                    align,
                    text,
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        }

        // Shared-scale extremes so the mirror reads as one axis.
        if dataset.domain > 0.0 {
            let extreme = format!("{:.0}%", dataset.domain * 100.0);
            painter.text(
                egui::pos2(plot_left, rect.bottom()),
                Align2::LEFT_BOTTOM,
                &extreme,
                FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
            painter.text(
                egui::pos2(plot_right, rect.bottom()),
                Align2::RIGHT_BOTTOM,
                &extreme,
                FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}
