use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::flashcards::Navigator;

/// Browsable table of the cards currently under study (post-filter).
pub fn vocab_table(ui: &mut egui::Ui, theme: &Theme, navigator: &Navigator) {
    let ctx = ui.ctx().clone();
    let cards: Vec<_> = navigator.visible_cards().collect();

    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .header(25.0, |mut header| {
            for title in ["Word", "Reading", "Meaning", "JLPT", "Location", "Strokes"] {
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, title));
                });
            }
        })
        .body(|mut body| {
            body.rows(text_height, cards.len(), |mut row| {
                let card = cards[row.index()];
                row.col(|ui| {
                    ui.label(theme.strong(&ctx, &card.word));
                });
                row.col(|ui| {
                    ui.label(&card.reading);
                });
                row.col(|ui| {
                    ui.label(&card.meaning);
                });
                row.col(|ui| {
                    if let Some(badge) = card.jlpt_badge() {
                        ui.label(egui::RichText::new(badge).color(theme.indigo(&ctx)).small());
                    }
                });
                row.col(|ui| {
                    if let Some(location) = card.location() {
                        ui.small(location);
                    }
                });
                row.col(|ui| {
                    if let Some(strokes) = card.stroke_summary() {
                        ui.label(egui::RichText::new(strokes).color(theme.amber(&ctx)).small())
                            .on_hover_text(if card.is_common { "Common word" } else { "Rare word" });
                    }
                });
            });
        });
}
