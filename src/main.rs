mod app;
use flashdrill_app::*;

use app::FlashApp;
use models::DeckStore;
use storage::cards::JsonCardFile;

fn main() -> eframe::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let data_dir = storage::default_data_dir().expect("no usable data directory");
    let settings_path = data_dir.join("settings.json");

    let settings = storage::settings::load(&settings_path);

    let mut deck = DeckStore::new(Box::new(JsonCardFile::new(data_dir.join("cards.json"))));
    deck.load();
    log::info!("loaded {} cards", deck.count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashdrill",
        options,
        Box::new(|_cc| Ok(Box::new(FlashApp::new(deck, settings, settings_path)))),
    )
}
