//! Rickdex Desktop: Dioxus-powered character browser.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod characters;
mod search;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage: loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rickdex=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load catalog at startup (blocking); store in Mutex, NOT in the signal
    let initial_state = AppState::from_cwd();
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(initial_state);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((248, 250, 252, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Rickdex")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(360.0, 560.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
