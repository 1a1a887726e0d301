// SPDX-License-Identifier: MPL-2.0
//! The closed vocabulary of translation keys.
//!
//! Every supported locale's `.ftl` resource must define a value for every
//! key listed here. A missing value is an authoring defect caught by the
//! completeness audit ([`crate::i18n::I18n::missing_messages`]) and the test
//! suite, not a runtime error.

/// All translation keys the storefront UI may ask for.
pub const VOCABULARY: &[&str] = &[
    "welcome",
    "catalog-title",
    "product-details",
    "price",
    "quantity",
    "add-to-cart",
    "remove-from-cart",
    "out-of-stock",
    "cart-title",
    "cart-empty",
    "subtotal",
    "shipping",
    "total",
    "checkout",
    "continue-shopping",
    "place-order",
    "order-confirmed",
    "search-placeholder",
    "language-label",
    "contact-us",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for key in VOCABULARY {
            assert!(seen.insert(key), "duplicate vocabulary key: {key}");
        }
    }

    #[test]
    fn vocabulary_keys_are_valid_fluent_identifiers() {
        for key in VOCABULARY {
            let mut chars = key.chars();
            assert!(
                chars.next().is_some_and(|c| c.is_ascii_alphabetic()),
                "key must start with a letter: {key}"
            );
            assert!(
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "key contains invalid characters: {key}"
            );
        }
    }
}
