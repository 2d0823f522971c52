use std::sync::Arc;

use eframe::egui;

use super::{
    base_page::BasePage,
    binary_page::BinaryPage,
    home_page::HomePage,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    api::PredictionClient,
    core::{
        config::ApiConfig,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Base,
    Binary,
}

pub struct ChronotextApp {
    page: Page,
    theme: Theme,
    client: Arc<PredictionClient>,
    base: BasePage,
    binary: BinaryPage,
    task_manager: TaskManager,
}

impl ChronotextApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ApiConfig::from_env();
        println!("Prediction service: {}", config.base_url);

        let client =
            Arc::new(PredictionClient::new(config).expect("Failed to build HTTP client"));

        let theme = Theme::slate();
        set_theme(&cc.egui_ctx, theme.clone());

        Self {
            page: Page::Home,
            theme,
            client,
            base: BasePage::default(),
            binary: BinaryPage::default(),
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::BaseProgress(value) => self.base.handle_progress(value),
            TaskResult::BasePrediction(result) => self.base.handle_result(result),
            TaskResult::BinaryProgress(value) => self.binary.handle_progress(value),
            TaskResult::BinaryPrediction(result) => self.binary.handle_result(result),
        }
    }
}

impl eframe::App for ChronotextApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.page, Page::Home, "Home");
                ui.selectable_value(&mut self.page, Page::Base, "Base Model");
                ui.selectable_value(&mut self.page, Page::Binary, "Binary Model");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.page {
                Page::Home => {
                    if let Some(page) = HomePage::show(ui) {
                        self.page = page;
                    }
                }
                Page::Base => self.base.show(ui, &self.theme, &self.client, &self.task_manager),
                Page::Binary => {
                    self.binary.show(ui, &self.theme, &self.client, &self.task_manager)
                }
            });
        });

        // Keep frames coming while a submission is in flight so progress
        // updates land without user input.
        if self.base.state.loading || self.binary.state.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
