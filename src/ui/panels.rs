use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::Thresholds;
use crate::data::rank::SortKey;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – threshold sliders and ranking key
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut thresholds = state.thresholds;

    ui.strong("最低価格の上限 (円)");
    let price = ui.add(
        egui::Slider::new(&mut thresholds.max_price, Thresholds::PRICE_RANGE)
            .step_by(Thresholds::PRICE_STEP)
            .fixed_decimals(0),
    );
    ui.add_space(4.0);

    ui.strong("人気スコアの下限");
    let score = ui.add(
        egui::Slider::new(&mut thresholds.min_score, Thresholds::SCORE_RANGE)
            .step_by(Thresholds::SCORE_STEP)
            .fixed_decimals(2),
    );

    if price.changed() || score.changed() {
        state.set_thresholds(thresholds);
    }

    if ui.small_button("Reset").clicked() {
        state.set_thresholds(Thresholds::default());
    }
    ui.separator();

    // ---- Ranking key ----
    ui.strong("ランキング基準を選んでください");
    let current = state.sort_key;
    egui::ComboBox::from_id_salt("sort_key")
        .selected_text(current.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for key in SortKey::ALL {
                if ui.selectable_label(current == key, key.as_str()).clicked() {
                    state.set_sort_key(key);
                }
            }
        });
    ui.separator();

    // ---- Stress legend ----
    let legend = state.color_map.legend_entries();
    if !legend.is_empty() {
        ui.strong("stress");
        for (label, color) in legend {
            let text = if label.is_empty() { "(none)" } else { label };
            ui.label(RichText::new(format!("● {text}")).color(color));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = state.source.is_some();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                if let Err(e) = state.reload() {
                    log::error!("Failed to reload: {e:#}");
                    state.status_message = Some(format!("Error: {e:#}"));
                }
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} entries loaded ({} dropped), {} visible",
                ds.len(),
                ds.dropped_rows,
                state.visible_indices.len()
            ));
            if ds.is_empty() {
                ui.label(RichText::new("no usable rows").color(Color32::YELLOW));
            }
        }

        if let Some(src) = &state.source {
            ui.separator();
            ui.label(RichText::new(src.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open gourmet listings")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_or_report(&path);
    }
}
