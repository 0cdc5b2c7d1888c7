use adaptive_quiz::QuizApp;
use adaptive_quiz::app::load_state;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Adaptive Quiz",
        options,
        Box::new(|cc| {
            let saved = load_state(cc.storage);
            let app = QuizApp::new(saved)?;
            Ok(Box::new(app))
        }),
    )
}
