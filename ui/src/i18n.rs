//! Internationalization (i18n) support for `rally-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/rally-ui.ftl   (fallback/reference)
//!   es-ES/rally-ui.ftl
//!   fr-FR/rally-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let total = t!("total");
//! ```
//!
//! To add a new locale, copy `en-US/rally-ui.ftl` to `i18n/<lang-id>/rally-ui.ftl`
//! and translate each value, keeping message IDs and placeholders identical.
//! The completeness tests under `tests/` fail until every key is present.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::nav::Destination;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-accounts")
///     t!("bill-due", date = "Feb 9")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the FTL filenames and `i18n.toml`).
const DOMAIN: &str = "rally-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language the loader currently serves, e.g. `es-ES`.
pub fn current_language() -> String {
    language_tag(&FluentLanguageLoader::current_languages(&*LOADER))
}

fn language_tag(loaded: &[LanguageIdentifier]) -> String {
    loaded
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized tab label for a destination.
pub fn destination_label(destination: Destination) -> String {
    match destination {
        Destination::Overview => crate::t!("nav-overview"),
        Destination::Accounts => crate::t!("nav-accounts"),
        Destination::Bills => crate::t!("nav-bills"),
        Destination::SingleAccount => crate::t!("nav-single-account"),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
