// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsLog, Resolution};
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

use super::detect;
use super::vocabulary::VOCABULARY;

/// Locale served when neither the persisted preference nor the environment
/// hint names a supported language, and the last resort for lookups.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Handle returned by [`I18n::subscribe`], used to unsubscribe.
pub type SubscriberId = usize;

/// The localization resolver.
///
/// Owns the resource table (immutable after construction) and the active
/// locale (swapped only by [`I18n::set_locale`]). Everything the UI renders
/// goes through [`I18n::tr`].
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
    diagnostics: DiagnosticsLog,
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&LanguageIdentifier)>)>,
    next_subscriber: SubscriberId,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl I18n {
    /// Builds the resolver and runs locale detection once: the persisted
    /// preference from `config`, then the host environment hint, then
    /// [`DEFAULT_LOCALE`]. Detection does not write to the config store.
    pub fn new(config: &Config) -> Self {
        Self::with_hints(
            config.language.as_deref(),
            detect::system_hint().as_deref(),
        )
    }

    /// Like [`I18n::new`], but with both detection inputs supplied by the
    /// caller. This is the deterministic entry point used by tests.
    pub fn with_hints(persisted: Option<&str>, env_hint: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .expect("default locale is a valid language tag");
        let current_locale =
            detect::resolve_locale(persisted, env_hint, &available_locales, &default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
            diagnostics: DiagnosticsLog::default(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The active locale. Always one of [`I18n::available_locales`].
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    /// Supported locales, sorted by tag.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Switches the active locale and notifies subscribers.
    ///
    /// Fails with [`Error::UnsupportedLocale`] when `locale` has no resource
    /// bundle, leaving the active locale untouched. Subscribers run after
    /// the swap, so none of them can observe a half-updated value.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> Result<()> {
        if !self.bundles.contains_key(&locale) {
            return Err(Error::UnsupportedLocale(locale.to_string()));
        }
        self.current_locale = locale;
        let active = self.current_locale.clone();
        for (_, callback) in &self.subscribers {
            callback(&active);
        }
        Ok(())
    }

    /// Registers a callback invoked after every locale switch, with the new
    /// active locale. The render layer uses this to re-render localized text.
    pub fn subscribe(&mut self, callback: impl Fn(&LanguageIdentifier) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(subscriber, _)| *subscriber != id);
    }

    /// Resolves `key` in the active locale.
    pub fn tr(&self, key: &str) -> String {
        let locale = self.current_locale.clone();
        self.tr_in(key, &locale)
    }

    /// Resolves `key` in an explicit locale.
    ///
    /// Lookup is best-effort and never fails a render path: a miss falls
    /// back to the default locale's value, and a key absent everywhere comes
    /// back verbatim as a visible placeholder. Both degradations are logged
    /// and recorded in the diagnostics buffer.
    pub fn tr_in(&self, key: &str, locale: &LanguageIdentifier) -> String {
        if let Some(value) = self.format(locale, key) {
            return value;
        }

        if *locale != self.default_locale {
            if let Some(value) = self.format(&self.default_locale, key) {
                log::warn!(
                    "missing translation '{key}' for locale '{locale}', serving '{}'",
                    self.default_locale
                );
                self.diagnostics.record(DiagnosticEvent::MissingTranslation {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    resolution: Resolution::DefaultLocale,
                });
                return value;
            }
        }

        log::warn!("translation '{key}' not found in any locale, returning the key itself");
        self.diagnostics.record(DiagnosticEvent::MissingTranslation {
            locale: locale.to_string(),
            key: key.to_string(),
            resolution: Resolution::RawKey,
        });
        key.to_string()
    }

    /// Audits every supported locale against the shared key vocabulary.
    ///
    /// Returns the (locale, key) pairs with no usable value. An empty result
    /// is the completeness invariant the test suite enforces.
    pub fn missing_messages(&self) -> Vec<(LanguageIdentifier, &'static str)> {
        let mut missing = Vec::new();
        for locale in &self.available_locales {
            for &key in VOCABULARY {
                let usable = self
                    .format(locale, key)
                    .is_some_and(|value| !value.is_empty());
                if !usable {
                    missing.push((locale.clone(), key));
                }
            }
        }
        missing
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let msg = bundle.get_message(key)?;
        let pattern = msg.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}
