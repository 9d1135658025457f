use eframe::egui;
use yomitomo::gui::YomitomoApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("Yomitomo", options, Box::new(|cc| Ok(Box::new(YomitomoApp::new(cc)))))
}
