//! Product code identifier.
//!
//! Codes are unique across the inventory under case-insensitive comparison,
//! but the spelling the user typed is what gets displayed and persisted.

use core::hash::{Hash, Hasher};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Case-insensitive product code.
///
/// Equality and hashing use a lower-cased key; `Display` shows the original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode {
    display: String,
    key: String,
}

impl ProductCode {
    /// Parse a code from user or file input.
    ///
    /// Surrounding whitespace is trimmed. The code must be non-empty and must
    /// not contain the file delimiter or a line break.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(DomainError::invalid_field("code", "cannot be empty"));
        }
        if display.contains([',', '\n', '\r']) {
            return Err(DomainError::invalid_field(
                "code",
                "cannot contain commas or line breaks",
            ));
        }
        Ok(Self {
            display: display.to_string(),
            key: normalize(display),
        })
    }

    /// The code as entered.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Canonical comparison key (lower case).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive match against raw text (trimmed).
    pub fn matches(&self, raw: &str) -> bool {
        self.key == normalize(raw.trim())
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
}

impl PartialEq for ProductCode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ProductCode {}

impl Hash for ProductCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl ValueObject for ProductCode {}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductCode> for String {
    fn from(value: ProductCode) -> Self {
        value.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_trims_and_keeps_original_casing() {
        let code = ProductCode::parse("  SkU123 ").unwrap();
        assert_eq!(code.as_str(), "SkU123");
        assert_eq!(code.key(), "sku123");
        assert_eq!(code.to_string(), "SkU123");
    }

    #[test]
    fn parse_rejects_empty_code() {
        let err = ProductCode::parse("   ").unwrap_err();
        match err {
            DomainError::InvalidField { field, .. } => assert_eq!(field, "code"),
            _ => panic!("Expected InvalidField error for empty code"),
        }
    }

    #[test]
    fn parse_rejects_delimiter() {
        assert!(ProductCode::parse("SKU,1").is_err());
        assert!(ProductCode::parse("SKU\n1").is_err());
    }

    #[test]
    fn equality_and_hash_ignore_case() {
        let a = ProductCode::parse("SKU123").unwrap();
        let b = ProductCode::parse("sku123").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn matches_raw_text() {
        let code = ProductCode::parse("SKU456").unwrap();
        assert!(code.matches(" sku456 "));
        assert!(!code.matches("SKU45"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: case changes never affect equality.
            #[test]
            fn case_insensitive_equality(raw in "[A-Za-z0-9-]{1,20}") {
                let upper = ProductCode::parse(&raw.to_uppercase()).unwrap();
                let lower = ProductCode::parse(&raw.to_lowercase()).unwrap();
                prop_assert_eq!(&upper, &lower);
                prop_assert!(upper.matches(&raw));
            }
        }
    }
}
