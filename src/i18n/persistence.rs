// SPDX-License-Identifier: MPL-2.0
//! Language-preference persistence logic.
//!
//! An explicit language switch must survive a restart, but the user's
//! immediate experience must not depend on storage durability: the
//! in-memory switch always takes effect, and a failed write is logged and
//! recorded as a diagnostic instead of propagating.

use crate::config;
use crate::diagnostics::DiagnosticEvent;
use crate::error::Result;
use std::path::Path;
use unic_langid::LanguageIdentifier;

use super::fluent::I18n;

/// Applies the newly selected locale and persists it to the config store.
///
/// The only hard failure is [`crate::error::Error::UnsupportedLocale`] from
/// the switch itself, in which case nothing is written.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Result<()> {
    i18n.set_locale(locale.clone())?;

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(locale.to_string());
    record_write_failure(i18n, config::save(&cfg));
    Ok(())
}

/// Like [`apply_language_change`], but against an explicit settings file.
pub fn apply_language_change_at(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    path: &Path,
) -> Result<()> {
    i18n.set_locale(locale.clone())?;

    let mut cfg = config::load_from_path(path).unwrap_or_default();
    cfg.language = Some(locale.to_string());
    record_write_failure(i18n, config::save_to_path(&cfg, path));
    Ok(())
}

fn record_write_failure(i18n: &I18n, outcome: Result<()>) {
    if let Err(error) = outcome {
        log::warn!("failed to persist language selection: {error}");
        i18n.diagnostics().record(DiagnosticEvent::PersistenceFailure {
            message: error.to_string(),
        });
    }
}
