use std::sync::mpsc;
use std::sync::Arc;

use recipe_core::browser::Browser;
use recipe_core::config::BrowserConfig;
use recipe_core::store::RecipeStore;

use crate::messages::LoadResult;
use crate::panels;
use crate::states::UIState;

pub struct RecipeApp {
    pub load_tx: mpsc::Sender<LoadResult>,
    pub load_rx: mpsc::Receiver<LoadResult>,
    pub browser: Browser,
    pub ui_state: UIState,
    pub show_about: bool,
}

impl RecipeApp {
    pub fn new(config: BrowserConfig, store: RecipeStore) -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        let source = match config.data {
            Some(ref path) => path.display().to_string(),
            None => "bundled".to_string(),
        };
        let count = store.len();
        let browser = Browser::new(Arc::new(store), &config);
        let mut ui_state = UIState::new(&config, browser.scale(), source);
        ui_state.add_log(format!("{count} recipes loaded from {}", ui_state.source));

        Self {
            load_tx,
            load_rx,
            browser,
            ui_state,
            show_about: false,
        }
    }

    /// Drain finished recipe loads.
    fn poll_results(&mut self) {
        while let Ok(result) = self.load_rx.try_recv() {
            match result {
                LoadResult::Loaded { path, store } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({} recipes, {} tags)",
                        path.display(),
                        store.len(),
                        store.tag_vocabulary().len()
                    ));
                    self.ui_state.source = path.display().to_string();
                    self.browser.replace_store(Arc::new(store));
                }
                LoadResult::Error { message } => {
                    tracing::error!("{message}");
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn load_bundled(&mut self) {
        match RecipeStore::bundled() {
            Ok(store) => {
                self.ui_state.add_log(format!("{} bundled recipes loaded", store.len()));
                self.ui_state.source = "bundled".to_string();
                self.browser.replace_store(Arc::new(store));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn go_back(&mut self) {
        if self.browser.back() {
            self.ui_state.add_log(format!("Back to {}", self.browser.route()));
        }
    }
}

impl eframe::App for RecipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::header::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::detail::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Recettes");
                        ui.label("Browse, filter and scale recipes");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
