use eframe::egui::{
    self,
    epaint::text::{
        FontInsert,
        FontPriority,
        InsertFontFamily,
    },
};

use super::{
    error_modal::ErrorModal,
    flashcard_view::{
        flashcard_view,
        StudyAction,
        StudySession,
    },
    message_overlay::MessageOverlay,
    settings::SettingsData,
    settings_modal::SettingsModal,
    shelf_view::shelf_view,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Book,
    },
    flashcards::Navigator,
    library::ShelfClient,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct YomitomoApp {
    settings_data: SettingsData,
    client: ShelfClient,
    books: Vec<Book>,
    session: Option<StudySession>,

    theme: Theme,
    settings_modal: SettingsModal,
    error_modal: ErrorModal,
    message_overlay: MessageOverlay,

    backend_connected: bool,
    last_connection_check: Option<std::time::Instant>,
    task_manager: TaskManager,
}

impl YomitomoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let client = ShelfClient::new(&settings_data.backend_url, &settings_data.api_key);

        let task_manager = TaskManager::new();
        if client.is_configured() {
            task_manager.load_books(client.clone());
        }

        let theme = Theme::washi();
        setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            settings_data,
            client,
            books: Vec::new(),
            session: None,
            theme,
            settings_modal: SettingsModal::new(),
            error_modal: ErrorModal::new(),
            message_overlay: MessageOverlay::new(),
            backend_connected: false,
            last_connection_check: None,
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::BackendConnection(connected) => {
                self.backend_connected = connected;
            }

            TaskResult::BooksLoaded(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(mut books) => {
                        // Float the most recently studied book to the top.
                        if let Some(last_id) = &self.settings_data.last_book_id {
                            if let Some(pos) = books.iter().position(|b| &b.id == last_id) {
                                let last = books.remove(pos);
                                books.insert(0, last);
                            }
                        }
                        println!("Loaded {} books from the shelf", books.len());
                        self.books = books;
                    }
                    Err(error_msg) => {
                        self.books = Vec::new();
                        self.error_modal.show_error(
                            "Shelf Error",
                            "Unable to load your books",
                            Some(&error_msg),
                        );
                    }
                }
            }

            TaskResult::CardsLoaded { book, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(cards) => {
                        println!("Loaded {} cards for {}", cards.len(), book.title);
                        let navigator = Navigator::with_settings(
                            cards,
                            self.settings_data.study_mode,
                            self.settings_data.jlpt_filter,
                        );
                        self.settings_data.last_book_id = Some(book.id.clone());
                        self.save_settings();
                        self.session = Some(StudySession::new(book, navigator));
                    }
                    Err(error_msg) => {
                        self.error_modal.show_error(
                            "Vocab Error",
                            format!("Unable to load vocab for {}", book.title),
                            Some(&error_msg),
                        );
                    }
                }
            }

            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
        }
    }

    fn update_backend_status(&mut self) {
        if !self.client.is_configured() {
            self.backend_connected = false;
            return;
        }

        let now = std::time::Instant::now();
        let should_check = match self.last_connection_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= 5,
        };

        if should_check {
            self.task_manager.check_backend_connection(self.client.clone());
            self.last_connection_check = Some(now);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        let endpoint_changed = settings.backend_url != self.settings_data.backend_url
            || settings.api_key != self.settings_data.api_key;

        self.settings_data = settings;
        self.save_settings();

        if endpoint_changed {
            self.client =
                ShelfClient::new(&self.settings_data.backend_url, &self.settings_data.api_key);
            self.session = None;
            self.books = Vec::new();
            self.last_connection_check = None;
            if self.client.is_configured() {
                self.task_manager.load_books(self.client.clone());
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }
}

impl eframe::App for YomitomoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_backend_status();

        let in_study_view = self.session.is_some();
        if let Some(action) = TopBar::show(
            ctx,
            &mut self.settings_modal,
            &self.settings_data,
            in_study_view,
            self.backend_connected,
        ) {
            match action {
                TopBarAction::BackToShelf => {
                    self.session = None;
                }
                TopBarAction::ReloadShelf => {
                    self.session = None;
                    if self.client.is_configured() {
                        self.task_manager.load_books(self.client.clone());
                    }
                }
            }
        }

        let mut study_action = None;
        let mut shelf_selection = None;
        let modal_open = self.settings_modal.is_open() || self.error_modal.is_open();
        if let Some(session) = &mut self.session {
            study_action = flashcard_view(ctx, &self.theme, session, modal_open);
        } else {
            let configured = self.client.is_configured();
            shelf_selection = shelf_view(ctx, &self.theme, &self.books, configured);
        }

        if let Some(action) = study_action {
            match action {
                StudyAction::ModeChanged(mode) => {
                    self.settings_data.study_mode = mode;
                }
                StudyAction::FilterChanged(filter) => {
                    self.settings_data.jlpt_filter = filter;
                }
            }
            self.save_settings();
        }

        if let Some(selection) = shelf_selection {
            self.task_manager.load_cards(self.client.clone(), selection.book);
        }

        self.message_overlay.show(ctx);
        self.error_modal.show(ctx);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        self.sync_dark_mode(ctx);
    }
}

/// Registers a system font that covers kana and kanji; the egui defaults
/// don't. Falls back quietly when none of the usual paths exist.
fn setup_fonts(ctx: &egui::Context) {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
        "C:\\Windows\\Fonts\\YuGothM.ttc",
        "C:\\Windows\\Fonts\\meiryo.ttc",
    ];

    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            ctx.add_font(FontInsert::new(
                "japanese_ui",
                egui::FontData::from_owned(bytes),
                vec![
                    InsertFontFamily {
                        family: egui::FontFamily::Proportional,
                        priority: FontPriority::Highest,
                    },
                    InsertFontFamily {
                        family: egui::FontFamily::Monospace,
                        priority: FontPriority::Lowest,
                    },
                ],
            ));
            return;
        }
    }

    eprintln!("No Japanese system font found; kana and kanji may not render.");
}
