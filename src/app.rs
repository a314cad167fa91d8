use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, ranking};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GurumeApp {
    pub state: AppState,
}

impl GurumeApp {
    /// Start with `source` loaded, or with its error in the status bar.
    pub fn new(source: &Path) -> Self {
        let mut state = AppState::default();
        state.open_or_report(source);
        Self { state }
    }
}

impl eframe::App for GurumeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: thresholds and sort key ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot, selection, ranking ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("グルメサーチ");
                    ui.strong(format!(
                        "フィルタ後の店舗数: {} 件",
                        self.state.visible_indices.len()
                    ));
                    plot::scatter_plot(ui, &self.state);
                    ui.separator();
                    ranking::entry_selector(ui, &mut self.state);
                    ui.separator();
                    ranking::ranking_table(ui, &self.state);
                });
        });
    }
}
