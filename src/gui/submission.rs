use eframe::egui;

use crate::core::{
    config::ApiConfig,
    models::{
        ModelKey,
        UploadFile,
    },
    validation::validate_file,
};

/// Form state for one prediction submission. Owned by a page, reset through
/// `reset_selection` whenever the model key changes so no stale file,
/// threshold, or error leaks into the new view.
#[derive(Default)]
pub struct SubmissionState {
    pub file: Option<UploadFile>,
    pub model_key: Option<ModelKey>,
    pub threshold: Option<String>,
    pub loading: bool,
    pub progress: f32,
    pub error: Option<String>,
}

impl SubmissionState {
    /// Clears everything tied to the previous model selection. The model key
    /// itself stays; callers set it before or after as needed.
    pub fn reset_selection(&mut self) {
        self.file = None;
        self.threshold = None;
        self.error = None;
        self.progress = 0.0;
    }

    pub fn begin_submission(&mut self) {
        self.error = None;
        self.progress = 0.0;
        self.loading = true;
    }

    /// Terminal transition for a submission: progress is forced to 100 on
    /// both success and failure.
    pub fn finish(&mut self, error: Option<String>) {
        self.loading = false;
        self.progress = 100.0;
        self.error = error;
    }

    pub fn set_progress(&mut self, value: f32) {
        self.progress = value;
    }

    pub fn can_submit(&self, needs_threshold: bool) -> bool {
        !self.loading
            && self.file.is_some()
            && self.model_key.is_some()
            && (!needs_threshold || self.threshold.is_some())
    }

    /// Opens the native picker and validates the choice immediately; an
    /// invalid file never occupies the slot.
    pub fn pick_file(&mut self, config: &ApiConfig) {
        let Some(path) = rfd::FileDialog::new().add_filter("Text files", &["txt"]).pick_file()
        else {
            return;
        };

        self.error = None;
        let picked = UploadFile::from_path(&path)
            .and_then(|file| validate_file(Some(&file), config).map(|_| file));

        match picked {
            Ok(file) => self.file = Some(file),
            Err(error) => {
                self.file = None;
                self.error = Some(error.to_string());
            }
        }
    }
}

/// Model-type dropdown shared by both pages. Returns true when the selection
/// changed so the page can reset its results.
pub fn model_select(ui: &mut egui::Ui, state: &mut SubmissionState, id: &str) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Model type");

        ui.add_enabled_ui(!state.loading, |ui| {
            let selected =
                state.model_key.map(|key| key.display_name()).unwrap_or("Select a model type");

            egui::ComboBox::from_id_salt(id.to_string()).selected_text(selected).show_ui(
                ui,
                |ui| {
                    for key in ModelKey::ALL {
                        let is_selected = state.model_key == Some(key);
                        if ui.selectable_label(is_selected, key.display_name()).clicked()
                            && !is_selected
                        {
                            state.model_key = Some(key);
                            changed = true;
                        }
                    }
                },
            );
        });
    });

    changed
}

/// File row: picker button plus the current file name or a placeholder.
pub fn file_picker(ui: &mut egui::Ui, state: &mut SubmissionState, config: &ApiConfig) {
    ui.horizontal(|ui| {
        ui.label(format!("Text file (max {} MB)", config.max_file_size_mb()));

        if ui.add_enabled(!state.loading, egui::Button::new("Choose file…")).clicked() {
            state.pick_file(config);
        }

        match &state.file {
            Some(file) => {
                ui.monospace(&file.name);
            }
            None => {
                ui.weak("No file selected");
            }
        }
    });
}

pub fn show_progress(ui: &mut egui::Ui, state: &SubmissionState) {
    if !state.loading {
        return;
    }

    ui.add_space(8.0);
    ui.label("Analyzing text, please wait…");
    ui.add(egui::ProgressBar::new(state.progress / 100.0).text(format!("{:.0}%", state.progress)));
}
