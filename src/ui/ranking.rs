use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::present::{format_yen, name_choices};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Entry selector with link
// ---------------------------------------------------------------------------

/// Selector over the subset's names plus a link to the chosen entry.
pub fn entry_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("気になるグルメを選んで詳しく見る");

    let mut chosen: Option<String> = None;
    {
        let subset = state.subset();
        let names = name_choices(&subset);
        let current = state.selected_name.as_deref();

        if names.is_empty() {
            ui.label("該当する店舗がありません");
        } else {
            egui::ComboBox::from_id_salt("selected_entry")
                .width(320.0)
                .selected_text(current.unwrap_or_default())
                .show_ui(ui, |ui: &mut Ui| {
                    for name in &names {
                        if ui.selectable_label(current == Some(*name), *name).clicked() {
                            chosen = Some((*name).to_string());
                        }
                    }
                });
        }
    }
    if let Some(name) = chosen {
        state.select_name(&name);
    }

    if let Some((name, url)) = state.selected_link() {
        ui.hyperlink_to(format!("{name} のページへ移動"), url);
    }
}

// ---------------------------------------------------------------------------
// Top-N ranking table
// ---------------------------------------------------------------------------

pub fn ranking_table(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("{} によるランキング (上位 10 件)", state.sort_key));
    ui.label(if state.sort_key.is_ascending() { "安い順" } else { "スコアの高い順" });

    let rows = state.ranking();
    if rows.is_empty() {
        ui.label("該当する店舗がありません");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(24.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["#", "name", "lowest_price", "score", "comment"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, row) in rows.iter().enumerate() {
                body.row(20.0, |mut cells| {
                    cells.col(|ui| {
                        ui.label((i + 1).to_string());
                    });
                    cells.col(|ui| {
                        ui.label(row.name);
                    });
                    cells.col(|ui| {
                        ui.label(format!("￥{}", format_yen(row.lowest_price)));
                    });
                    cells.col(|ui| {
                        ui.label(format!("{:.2}", row.score));
                    });
                    cells.col(|ui| {
                        ui.label(row.comment);
                    });
                });
            }
        });
}
