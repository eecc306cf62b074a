use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    pub id: String,
    pub name: String,
    pub hex: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<String>>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl ColorEntry {
    pub fn customers(&self) -> &[String] {
        self.customers.as_deref().unwrap_or(&[])
    }

    /// Comma-joined customer list as the edit form shows it.
    pub fn customers_line(&self) -> String {
        self.customers().join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHexCode {
    pub value: String,
}

impl fmt::Display for InvalidHexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hex code '{}'; expected '#' followed by 3 or 6 hex digits",
            self.value
        )
    }
}

impl Error for InvalidHexCode {}

/// Accepts `#rgb` and `#rrggbb`, either case.
pub fn validate_hex(raw: &str) -> Result<(), InvalidHexCode> {
    let digits = raw.strip_prefix('#').ok_or_else(|| InvalidHexCode {
        value: raw.to_string(),
    })?;
    let valid_len = digits.len() == 3 || digits.len() == 6;
    if valid_len && digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(InvalidHexCode {
            value: raw.to_string(),
        })
    }
}

/// Expands a validated hex code into RGB channels. Short codes double each digit.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    validate_hex(hex).ok()?;
    let digits = &hex[1..];
    let expanded = if digits.len() == 3 {
        digits.chars().flat_map(|ch| [ch, ch]).collect::<String>()
    } else {
        digits.to_string()
    };
    let channel = |index: usize| u8::from_str_radix(&expanded[index..index + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
