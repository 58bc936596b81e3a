use arena_web::App;
use tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("logger is initialized once");

    tracing::info!("Starting organizer web app");
    dioxus::launch(App);
}
