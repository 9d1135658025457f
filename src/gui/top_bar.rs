use eframe::egui::{
    self,
    containers,
};

use super::settings_modal::SettingsModal;

pub enum TopBarAction {
    BackToShelf,
    ReloadShelf,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &super::settings::SettingsData,
        in_study_view: bool,
        backend_connected: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("Shelf", |ui| {
                    if in_study_view && ui.button("Back to Books").clicked() {
                        action = Some(TopBarAction::BackToShelf);
                    }
                    if ui.button("Reload Shelf").clicked() {
                        action = Some(TopBarAction::ReloadShelf);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Backend...").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_connected);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, connected: bool) {
        let color = if connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if connected { "Connected to shelf backend" } else { "Backend unreachable" };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("backend").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
