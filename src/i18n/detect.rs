// SPDX-License-Identifier: MPL-2.0
//! Active-locale detection.
//!
//! Pure resolution logic, decoupled from any host API: the persisted
//! preference and the environment hint come in as plain strings so the
//! precedence order is independently testable. [`system_hint`] is the one
//! thin wrapper over the host.

use unic_langid::LanguageIdentifier;

/// Reads the host's preferred locale tag, e.g. `"fr-FR"`.
pub fn system_hint() -> Option<String> {
    sys_locale::get_locale()
}

/// Normalizes a raw locale tag to BCP 47 shape.
///
/// POSIX-style tags carry codeset and modifier suffixes (`fr_FR.UTF-8@euro`)
/// and use underscores; `C` and `POSIX` name no language at all.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(raw.replace('_', "-"))
}

/// Extracts the primary language subtag of a locale tag (`fr-CA` -> `fr`).
pub fn primary_subtag(tag: &str) -> Option<LanguageIdentifier> {
    let normalized = normalize_tag(tag)?;
    let lang: LanguageIdentifier = normalized.parse().ok()?;
    Some(LanguageIdentifier::from_parts(lang.language, None, None, &[]))
}

/// Determines the active locale. First match wins:
///
/// 1. The persisted user choice, if it names a supported locale.
/// 2. The environment hint, matched exactly and then by primary subtag.
/// 3. The configured default.
///
/// The result is always a member of `available` (assuming `default` is).
/// Detection never writes to the persistence store: a detected locale is
/// only locked in once the user confirms it explicitly.
pub fn resolve_locale(
    persisted: Option<&str>,
    env_hint: Option<&str>,
    available: &[LanguageIdentifier],
    default: &LanguageIdentifier,
) -> LanguageIdentifier {
    if let Some(code) = persisted {
        if let Some(lang) = parse_tag(code) {
            if available.contains(&lang) {
                return lang;
            }
        }
    }

    if let Some(hint) = env_hint {
        if let Some(lang) = parse_tag(hint) {
            if available.contains(&lang) {
                return lang;
            }
            if let Some(supported) = available.iter().find(|l| l.language == lang.language) {
                return supported.clone();
            }
        }
    }

    default.clone()
}

fn parse_tag(raw: &str) -> Option<LanguageIdentifier> {
    normalize_tag(raw)?.parse().ok()
}
