use eframe::egui;

use super::{
    theme::Theme,
    vocab_table,
};
use crate::{
    core::Book,
    flashcards::{
        JlptFilter,
        Navigator,
        Side,
        StudyMode,
    },
};

/// One book's study loop: the loaded card snapshot plus transient view state.
pub struct StudySession {
    pub book: Book,
    pub navigator: Navigator,
    pub first_touch: bool,
    pub show_vocab: bool,
}

impl StudySession {
    pub fn new(book: Book, navigator: Navigator) -> Self {
        Self { book, navigator, first_touch: true, show_vocab: false }
    }
}

/// Mode/filter switches that the app persists into settings.
pub enum StudyAction {
    ModeChanged(StudyMode),
    FilterChanged(JlptFilter),
}

pub fn flashcard_view(
    ctx: &egui::Context,
    theme: &Theme,
    session: &mut StudySession,
    modal_open: bool,
) -> Option<StudyAction> {
    let mut action = None;

    if !modal_open {
        handle_keys(ctx, session);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.heading(theme.heading(ctx, &format!("{} Flashcards", session.book.title)));

            match session.navigator.position() {
                Some((current, total)) => {
                    ui.small(theme.muted(
                        ctx,
                        &format!(
                            "{} • Card {} / {}",
                            session.navigator.side().label(),
                            current,
                            total
                        ),
                    ));
                }
                None => {
                    ui.small(theme.muted(ctx, "No cards"));
                }
            }

            ui.add_space(8.0);
            if let Some(mode_action) = mode_buttons(ui, theme, session) {
                action = Some(mode_action);
            }

            ui.add_space(10.0);

            if session.navigator.source_is_empty() {
                ui.add_space(40.0);
                ui.label("No vocabulary yet for this book.");
            } else if session.navigator.is_empty() {
                ui.add_space(40.0);
                ui.label("No cards match this JLPT filter.");
            } else {
                if session.first_touch {
                    ui.small(theme.muted(ctx, "Tap the card or press space to study →"));
                    ui.add_space(4.0);
                }

                card_face(ui, theme, session);

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let spacing = (ui.available_width() - 220.0).max(0.0) / 2.0;
                    ui.add_space(spacing);
                    if ui.add_sized([100.0, 28.0], egui::Button::new("← Review")).clicked() {
                        session.navigator.retreat();
                        session.first_touch = false;
                    }
                    ui.add_space(20.0);
                    if ui.add_sized([100.0, 28.0], egui::Button::new("Answer →")).clicked() {
                        session.navigator.advance();
                        session.first_touch = false;
                    }
                });
            }

            ui.add_space(14.0);
            ui.separator();

            let toggle_text =
                if session.show_vocab { "Hide vocabulary list" } else { "Show vocabulary list" };
            if ui.link(toggle_text).clicked() {
                session.show_vocab = !session.show_vocab;
            }

            if session.show_vocab {
                ui.add_space(6.0);
                vocab_table::vocab_table(ui, theme, &session.navigator);
            }
        });
    });

    action
}

fn handle_keys(ctx: &egui::Context, session: &mut StudySession) {
    // A focused text field (settings modal, error details) owns the keyboard.
    if ctx.wants_keyboard_input() {
        return;
    }

    let (forward, backward) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::ArrowLeft),
        )
    });

    if forward {
        session.navigator.advance();
        session.first_touch = false;
    }
    if backward {
        session.navigator.retreat();
        session.first_touch = false;
    }
}

fn mode_buttons(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &mut StudySession,
) -> Option<StudyAction> {
    let mut action = None;
    let ctx = ui.ctx().clone();

    ui.horizontal_wrapped(|ui| {
        let modes = [
            (StudyMode::MeaningOnly, theme.moss(&ctx)),
            (StudyMode::ReadingOnly, theme.indigo(&ctx)),
            (StudyMode::Both, theme.amber(&ctx)),
        ];

        for (mode, color) in modes {
            let selected = session.navigator.mode() == mode;
            let (fill, stroke) = if selected {
                (color.gamma_multiply(0.35), egui::Stroke::new(1.5, color))
            } else {
                (
                    ui.visuals().widgets.inactive.bg_fill,
                    ui.visuals().widgets.inactive.bg_stroke,
                )
            };
            let button = egui::Button::new(mode.label()).fill(fill).stroke(stroke);
            if ui.add(button).clicked() && !selected {
                session.navigator.set_mode(mode);
                action = Some(StudyAction::ModeChanged(mode));
            }
        }

        ui.add_space(10.0);

        let mut filter = session.navigator.filter();
        egui::ComboBox::from_id_salt("jlpt_filter")
            .selected_text(filter.label())
            .show_ui(ui, |ui| {
                for option in JlptFilter::ALL {
                    ui.selectable_value(&mut filter, option, option.label());
                }
            });

        if filter != session.navigator.filter() {
            session.navigator.set_filter(filter);
            action = Some(StudyAction::FilterChanged(filter));
        }
    });

    action
}

fn card_face(ui: &mut egui::Ui, theme: &Theme, session: &mut StudySession) {
    let ctx = ui.ctx().clone();
    let width = ui.available_width().min(560.0);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, 280.0), egui::Sense::click());

    if response.clicked() {
        session.navigator.advance();
        session.first_touch = false;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 16.0, theme.card_fill(&ctx));
    painter.rect_stroke(
        rect,
        16.0,
        egui::Stroke::new(1.5, theme.card_stroke(&ctx)),
        egui::StrokeKind::Inside,
    );

    let side = session.navigator.side();
    if let Some(text) = session.navigator.current_display() {
        let font_size = match side {
            Side::Word => 42.0,
            Side::Reading => 34.0,
            Side::Meaning => 26.0,
        };

        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(font_size),
            ui.visuals().text_color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VocabCard;

    fn one_card_session() -> StudySession {
        let card = VocabCard {
            word: "本".to_string(),
            reading: "ほん".to_string(),
            meaning: "book".to_string(),
            ..Default::default()
        };
        StudySession::new(Book::default(), Navigator::new(vec![card]))
    }

    fn space_pressed() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Space,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn space_advances_when_nothing_has_focus() {
        let ctx = egui::Context::default();
        let mut session = one_card_session();

        let _ = ctx.run(space_pressed(), |ctx| {
            handle_keys(ctx, &mut session);
        });

        assert_eq!(session.navigator.side(), Side::Meaning);
        assert!(!session.first_touch);
    }

    #[test]
    fn space_is_ignored_while_a_text_field_has_focus() {
        let ctx = egui::Context::default();
        let mut session = one_card_session();

        let _ = ctx.run(space_pressed(), |ctx| {
            ctx.memory_mut(|memory| memory.request_focus(egui::Id::new("endpoint_field")));
            assert!(ctx.wants_keyboard_input());
            handle_keys(ctx, &mut session);
        });

        assert_eq!(session.navigator.side(), Side::Word);
        assert!(session.first_touch);
    }
}
