use eframe::egui;

use super::app::Page;

/// Landing page: a short description of the two model families and a button
/// into each.
pub struct HomePage;

impl HomePage {
    pub fn show(ui: &mut egui::Ui) -> Option<Page> {
        let mut navigate = None;

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("Chronotext");
            ui.add_space(8.0);
            ui.label(
                "Estimates when a text was written, using models trained on historical \
                 documents from the 1600s to the 2020s. Pick a prediction type below.",
            );
        });

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.strong("Base Model");
                ui.add_space(4.0);
                ui.label(
                    "Predicts the decade or century of a text: the top 10 most probable \
                     decades, or the top 2 centuries, with their probabilities.",
                );
                ui.add_space(8.0);
                if ui.button("Use Base Model").clicked() {
                    navigate = Some(Page::Base);
                }
            });

            columns[1].group(|ui| {
                ui.strong("Binary Model");
                ui.add_space(4.0);
                ui.label(
                    "Classifies a text as older, or equal or younger, than a threshold you \
                     choose, and reports the most probable period on each side.",
                );
                ui.add_space(8.0);
                if ui.button("Use Binary Model").clicked() {
                    navigate = Some(Page::Binary);
                }
            });
        });

        navigate
    }
}
