// SPDX-License-Identifier: MPL-2.0
//! `storelocale` owns localization for the storefront UI.
//!
//! It resolves the active display language from the persisted user
//! preference, the host environment hint, and a configured default,
//! persists explicit language switches, and resolves translation keys
//! against embedded Fluent resources with a best-effort fallback chain.
//!
//! The render layer is an external collaborator: it calls [`i18n::I18n::tr`]
//! for every piece of user-facing text, drives language switches through
//! [`i18n::persistence::apply_language_change`], and re-renders via the
//! resolver's subscribe/notify hook.

#![doc(html_root_url = "https://docs.rs/storelocale/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
