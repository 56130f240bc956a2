use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::RallyApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Rally" }
        document::Style { "{MAIN_CSS_INLINE}" }
        // Browsers have no launch URI; deep links arrive only on native targets.
        RallyApp { deep_link: None }
    }
}
