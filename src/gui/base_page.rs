use std::sync::Arc;

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    submission::{
        file_picker,
        model_select,
        show_progress,
        SubmissionState,
    },
    theme::Theme,
};
use crate::{
    api::PredictionClient,
    core::{
        century::{
            group_by_century,
            CenturyBucket,
        },
        models::{
            FlatPrediction,
            ModelKey,
        },
        tasks::TaskManager,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Flat,
    Grouped,
}

/// The base-endpoint page: flat top-k list with an optional century-grouped
/// view for decade predictions.
#[derive(Default)]
pub struct BasePage {
    pub state: SubmissionState,
    result: Option<FlatPrediction>,
    grouped: Option<Vec<(String, CenturyBucket)>>,
    view_mode: ViewMode,
}

impl BasePage {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        client: &Arc<PredictionClient>,
        tasks: &TaskManager,
    ) {
        ui.heading("Base Model Prediction");
        ui.add_space(8.0);

        if model_select(ui, &mut self.state, "base_model_key") {
            self.state.reset_selection();
            self.clear_results();
        }

        file_picker(ui, &mut self.state, client.config());

        if let Some(error) = &self.state.error {
            ui.colored_label(theme.red(), error);
        }

        ui.add_space(4.0);
        let label = if self.state.loading { "Predicting…" } else { "Submit" };
        if ui.add_enabled(self.state.can_submit(false), egui::Button::new(label)).clicked() {
            if let (Some(file), Some(model_key)) = (self.state.file.clone(), self.state.model_key)
            {
                self.clear_results();
                self.state.begin_submission();
                tasks.predict_base(client.clone(), file, model_key);
            }
        }

        show_progress(ui, &self.state);

        if self.state.model_key == Some(ModelKey::Decade) && self.result.is_some() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.view_mode, ViewMode::Flat, "Top 10 List");
                ui.selectable_value(&mut self.view_mode, ViewMode::Grouped, "Grouped");
            });
        }

        match self.view_mode {
            ViewMode::Flat => self.show_flat(ui),
            ViewMode::Grouped => self.show_grouped(ui, theme),
        }
    }

    fn show_flat(&self, ui: &mut egui::Ui) {
        let Some(result) = &self.result else { return };

        ui.add_space(8.0);
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder())
            .column(Column::auto().at_least(90.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Period");
                });
                header.col(|ui| {
                    ui.strong("Probability");
                });
            })
            .body(|mut body| {
                for item in &result.top_k_predictions {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(display_label(self.state.model_key, &item.label));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}%", item.probability * 100.0));
                        });
                    });
                }
            });
    }

    fn show_grouped(&self, ui: &mut egui::Ui, theme: &Theme) {
        let Some(grouped) = &self.grouped else { return };

        ui.add_space(8.0);
        for (century, bucket) in grouped {
            ui.group(|ui| {
                ui.label(theme.heading(&format!("{} — {:.2}%", century, bucket.total * 100.0)));
                for item in &bucket.items {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}s", item.label));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(format!("{:.2}%", item.probability * 100.0));
                            },
                        );
                    });
                }
            });
            ui.add_space(4.0);
        }
    }

    pub fn handle_progress(&mut self, value: f32) {
        self.state.set_progress(value);
    }

    pub fn handle_result(&mut self, result: Result<FlatPrediction, String>) {
        match result {
            Ok(data) => {
                if self.state.model_key == Some(ModelKey::Decade) {
                    let mut grouped: Vec<_> =
                        group_by_century(&data.top_k_predictions).into_iter().collect();
                    grouped.sort_by(|a, b| a.0.cmp(&b.0));
                    self.grouped = Some(grouped);
                }
                self.result = Some(data);
                self.state.finish(None);
            }
            Err(message) => self.state.finish(Some(message)),
        }
    }

    fn clear_results(&mut self) {
        self.result = None;
        self.grouped = None;
        self.view_mode = ViewMode::Flat;
    }
}

/// Presentation labels for flat results: decades read "1920s", century keys
/// read "19th" / "21st".
fn display_label(model_key: Option<ModelKey>, label: &str) -> String {
    match model_key {
        Some(ModelKey::Decade) if label.chars().count() > 2 => format!("{}s", label),
        _ if label == "21" => "21st".to_string(),
        _ => format!("{}th", label),
    }
}
