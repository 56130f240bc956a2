use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::RallyApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // A launcher may pass a `rally://single_account/<name>` URI as an argument.
    let deep_link = use_hook(|| std::env::args().skip(1).find(|arg| arg.starts_with("rally://")));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        RallyApp { deep_link: deep_link }
    }
}
