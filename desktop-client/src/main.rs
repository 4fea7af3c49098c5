mod app;
mod config;

use common::logger::init_logger;
use common::{FileDictionary, GameSession, SessionRng, WordList, log, log_warn};
use eframe::egui;

use app::GameApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(None);

    let config = config::load_config()?;

    // Missing resources are a deployment defect: log and refuse to start.
    let word_list = match WordList::load(&config.words_file) {
        Ok(list) => list,
        Err(e) => {
            log_warn!("{}", e);
            return Err(Box::new(e));
        }
    };
    let dictionary = match FileDictionary::load(&config.dictionary_file, &config.locale)
    {
        Ok(dict) => dict,
        Err(e) => {
            log_warn!("{}", e);
            return Err(Box::new(e));
        }
    };

    log!(
        "Loaded {} root words and {} dictionary words ({})",
        word_list.len(),
        dictionary.len(),
        dictionary.locale()
    );

    let mut session = GameSession::new(
        word_list,
        Box::new(dictionary),
        &config.locale,
        SessionRng::from_random(),
    );
    session.start_game();
    log!("New root word: {}", session.root_word());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Word Scramble"),
        ..Default::default()
    };

    eframe::run_native(
        "Word Scramble",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(session)))),
    )?;

    Ok(())
}
