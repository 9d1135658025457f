use eframe::egui;

use super::theme::Theme;
use crate::core::Book;

/// Book the user chose to study, handed back to the app for loading.
pub struct ShelfSelection {
    pub book: Book,
}

pub fn shelf_view(
    ctx: &egui::Context,
    theme: &Theme,
    books: &[Book],
    backend_configured: bool,
) -> Option<ShelfSelection> {
    let mut selection = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading(theme.heading(ctx, "📚 My Books"));
        ui.add_space(8.0);

        if !backend_configured {
            ui.label(theme.muted(
                ctx,
                "No backend configured. Set the endpoint under Settings → Backend.",
            ));
            return;
        }

        if books.is_empty() {
            ui.label(theme.muted(ctx, "Your shelf is empty."));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for book in books {
                egui::Frame::group(ui.style()).corner_radius(8.0).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(theme.strong(ctx, &book.title));

                            let credits = book.credits();
                            if !credits.is_empty() {
                                ui.small(credits);
                            }

                            if let Some(dates) = book.reading_dates() {
                                ui.small(theme.muted(ctx, &dates));
                            }
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Study Flashcards").clicked() {
                                    selection = Some(ShelfSelection { book: book.clone() });
                                }
                            },
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });
    });

    selection
}
