mod bindings;
mod components;
mod config;
mod dom;
mod error;
mod fetch;
mod model;
mod state;
mod util;

use components::app::App;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("library starting");
    yew::Renderer::<App>::new().render();
}
