use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::present::{format_yen, hover_label, scatter_points};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Score vs. price scatter plot
// ---------------------------------------------------------------------------

/// Render the scatter plot of the current subset.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view listings  (File → Open…)");
        });
        return;
    }

    let subset = state.subset();
    let points = scatter_points(&subset);

    ui.label("人気スコアと最低価格の散布図");
    Plot::new("gurume_scatter")
        .height(360.0)
        .x_axis_label("スコア")
        .y_axis_label("最低価格 (円)")
        .include_x(0.0)
        .include_x(5.0)
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("スコア: {:.2}\n最低価格: ￥{}", value.x, format_yen(value.y))
            } else {
                name.to_owned()
            }
        })
        .show(ui, |plot_ui| {
            // One series per marker so hovering reports that entry's name.
            for p in &points {
                let series: PlotPoints = std::iter::once(p.xy()).collect();
                let marker = Points::new(series)
                    .name(hover_label(p.name, p.stress, p.score, p.lowest_price))
                    .color(state.color_map.color_for(p.stress))
                    .radius(4.0);
                plot_ui.points(marker);
            }
        });
}
