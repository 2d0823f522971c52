use std::sync::Arc;

use eframe::egui;

use super::{
    binary_chart::BinaryBarChart,
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
        diverging::{
            build_diverging,
            DivergingDataset,
        },
        models::{
            BinaryGroup,
            BinaryPrediction,
        },
        tasks::TaskManager,
    },
};

/// The binary-endpoint page: older vs. equal-or-younger around a user-chosen
/// threshold, rendered as two group lists plus the diverging bar chart.
#[derive(Default)]
pub struct BinaryPage {
    pub state: SubmissionState,
    result: Option<BinaryPrediction>,
    dataset: Option<DivergingDataset>,
}

impl BinaryPage {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        client: &Arc<PredictionClient>,
        tasks: &TaskManager,
    ) {
        ui.heading("Binary Model Prediction");
        ui.add_space(8.0);

        if model_select(ui, &mut self.state, "binary_model_key") {
            self.state.reset_selection();
            self.result = None;
            self.dataset = None;
        }

        if let Some(model_key) = self.state.model_key {
            ui.horizontal(|ui| {
                ui.label("Threshold");

                ui.add_enabled_ui(!self.state.loading, |ui| {
                    let selected = self
                        .state
                        .threshold
                        .clone()
                        .unwrap_or_else(|| "Select a threshold".to_string());

                    egui::ComboBox::from_id_salt("binary_threshold")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for option in model_key.threshold_options() {
                                let is_selected =
                                    self.state.threshold.as_deref() == Some(option.as_str());
                                if ui.selectable_label(is_selected, &option).clicked() {
                                    self.state.threshold = Some(option);
                                }
                            }
                        });
                });
            });
        }

        file_picker(ui, &mut self.state, client.config());

        if let Some(error) = &self.state.error {
            ui.colored_label(theme.red(), error);
        }

        ui.add_space(4.0);
        let label = if self.state.loading { "Predicting…" } else { "Submit" };
        if ui.add_enabled(self.state.can_submit(true), egui::Button::new(label)).clicked() {
            if let (Some(file), Some(model_key), Some(threshold)) = (
                self.state.file.clone(),
                self.state.model_key,
                self.state.threshold.clone(),
            ) {
                self.result = None;
                self.dataset = None;
                self.state.begin_submission();
                tasks.predict_binary(client.clone(), file, model_key, threshold);
            }
        }

        show_progress(ui, &self.state);

        if let Some(result) = &self.result {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.strong("Prediction:");
                ui.label(&result.prediction);
            });

            ui.add_space(8.0);
            ui.columns(2, |columns| {
                show_group(&mut columns[0], theme, "Older", &result.top_k.older);
                show_group(
                    &mut columns[1],
                    theme,
                    "Equal or younger",
                    &result.top_k.equal_or_younger,
                );
            });

            if let Some(dataset) = &self.dataset {
                ui.add_space(12.0);
                BinaryBarChart::show(ui, dataset);
            }
        }
    }

    pub fn handle_progress(&mut self, value: f32) {
        self.state.set_progress(value);
    }

    pub fn handle_result(&mut self, result: Result<BinaryPrediction, String>) {
        match result {
            Ok(data) => {
                self.dataset =
                    Some(build_diverging(&data.top_k.older, &data.top_k.equal_or_younger));
                self.result = Some(data);
                self.state.finish(None);
            }
            Err(message) => self.state.finish(Some(message)),
        }
    }
}

fn show_group(ui: &mut egui::Ui, theme: &Theme, title: &str, group: &BinaryGroup) {
    ui.label(theme.heading(&format!("{} ({:.2}%)", title, group.total_probability * 100.0)));

    for item in &group.items {
        ui.horizontal(|ui| {
            ui.label(&item.label);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{:.2}%", item.probability * 100.0));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        diverging::Winner,
        models::{
            BinaryTopK,
            PredictionItem,
        },
    };

    fn prediction(older_total: f64, younger_total: f64) -> BinaryPrediction {
        let item = |label: &str, probability: f64| PredictionItem {
            label: label.to_string(),
            probability,
        };

        BinaryPrediction {
            prediction: "older".to_string(),
            top_k: BinaryTopK {
                older: BinaryGroup {
                    total_probability: older_total,
                    items: vec![item("1780", older_total)],
                },
                equal_or_younger: BinaryGroup {
                    total_probability: younger_total,
                    items: vec![item("1810", younger_total)],
                },
            },
        }
    }

    #[test]
    fn successful_result_builds_the_chart_dataset() {
        let mut page = BinaryPage::default();
        page.state.begin_submission();

        page.handle_result(Ok(prediction(0.6, 0.4)));

        let dataset = page.dataset.as_ref().unwrap();
        assert_eq!(dataset.winner, Winner::Older);
        assert_eq!(dataset.bars.len(), 3);
        assert!(!page.state.loading);
    }

    #[test]
    fn failed_result_leaves_no_chart_behind() {
        let mut page = BinaryPage::default();
        page.state.begin_submission();

        page.handle_result(Err("Request timeout. Please try again.".to_string()));

        assert!(page.dataset.is_none());
        assert!(page.result.is_none());
        assert_eq!(page.state.error.as_deref(), Some("Request timeout. Please try again."));
    }
}
