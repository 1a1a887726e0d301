// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the storefront.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation resource loading, and string lookup.
//!
//! # Features
//!
//! - Automatic locale detection from the persisted preference or system settings
//! - Embedded `.ftl` translation resources, one file per locale
//! - Runtime language switching with subscriber notification
//! - Fallback to the default locale, then to the raw key, when translations are missing

pub mod detect;
pub mod fluent;
pub mod persistence;
pub mod vocabulary;

pub use fluent::{I18n, SubscriberId, DEFAULT_LOCALE};
