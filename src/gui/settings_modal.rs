use eframe::egui;

use super::settings::SettingsData;

/// Editor for the backend endpoint and API key.
pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the edited settings when the user hits Save.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("backend_settings_modal")).show(ctx, |ui| {
            ui.set_width(460.0);
            ui.heading("Backend");
            ui.add_space(8.0);

            ui.label("Endpoint URL");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.backend_url)
                    .hint_text("https://xyzcompany.supabase.co")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            ui.label("API key");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.api_key)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            ui.small("The key is stored locally in settings.json and sent only to this endpoint.");

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
