use chronotext::gui::ChronotextApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 680.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chronotext",
        options,
        Box::new(|cc| Ok(Box::new(ChronotextApp::new(cc)))),
    )
}
