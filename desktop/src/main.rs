#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::RallyApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Rally – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(420.0, 820.0)),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

/// First `rally://` argument on the command line, if any.
fn launch_deep_link() -> Option<String> {
    std::env::args().skip(1).find(|arg| arg.starts_with("rally://"))
}

#[component]
fn App() -> Element {
    let deep_link = use_hook(launch_deep_link);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        RallyApp { deep_link: deep_link }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
