// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::rc::Rc;

use storelocale::config::{self, Config};
use storelocale::i18n::persistence::apply_language_change_at;
use storelocale::i18n::{I18n, DEFAULT_LOCALE};
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

fn lang(tag: &str) -> LanguageIdentifier {
    tag.parse().expect("valid language tag")
}

#[test]
fn language_selection_follows_the_persisted_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en".to_string()),
    };
    config::save_to_path(&initial, &path).expect("failed to write initial config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n_en = I18n::with_hints(loaded.language.as_deref(), None);
    assert_eq!(i18n_en.current_locale().to_string(), "en");

    let french = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french, &path).expect("failed to write french config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n_fr = I18n::with_hints(loaded.language.as_deref(), None);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn explicit_switch_survives_a_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    // First session: environment suggests Arabic, the user picks French.
    let mut session_one = I18n::with_hints(None, Some("ar-SA"));
    assert_eq!(session_one.current_locale().to_string(), "ar");
    apply_language_change_at(&mut session_one, lang("fr"), &path).expect("switch succeeds");

    // Second session: the persisted choice outranks the environment hint.
    let stored = config::load_from_path(&path).expect("config readable");
    let session_two = I18n::with_hints(stored.language.as_deref(), Some("ar-SA"));
    assert_eq!(session_two.current_locale().to_string(), "fr");
    assert_eq!(session_two.tr("welcome"), "Bienvenue dans notre boutique");
}

#[test]
fn detection_alone_never_writes_the_config_store() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let i18n = I18n::with_hints(None, Some("fr-CA"));
    assert_eq!(i18n.current_locale().to_string(), "fr");
    // A detected-but-unconfirmed locale must not be locked in.
    assert!(!path.exists());
}

#[test]
fn render_layer_is_notified_after_a_switch() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut i18n = I18n::with_hints(None, None);
    let rendered = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&rendered);
    i18n.subscribe(move |locale| {
        *sink.borrow_mut() = locale.to_string();
    });

    apply_language_change_at(&mut i18n, lang("ar"), &path).expect("switch succeeds");

    assert_eq!(*rendered.borrow(), "ar");
    assert_eq!(i18n.tr("add-to-cart"), "أضف إلى السلة");
}

#[test]
fn shipped_resources_are_complete_for_every_locale() {
    let i18n = I18n::with_hints(None, None);
    assert_eq!(i18n.default_locale().to_string(), DEFAULT_LOCALE);
    let missing = i18n.missing_messages();
    assert!(missing.is_empty(), "missing translations: {missing:?}");
    assert!(i18n.diagnostics().is_empty());
}
