use kurbo::Size;
use relm4::prelude::*;
use snapdeck::config;
use snapdeck::gui::app::AppModel;
use snapdeck::gui::deck::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Deck};
use snapdeck::sys::runtime;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_setup();
    let deck = Deck::new(&config, Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.scrollsnap.snapdeck");

    app.run::<AppModel>((deck, rx));
    Ok(())
}
