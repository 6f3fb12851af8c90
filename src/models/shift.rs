use serde::{Deserialize, Serialize};
use std::fmt;

/// Production shift. Stored as the wire values `Siang` / `Malam`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "Siang")]
    Day,
    #[serde(rename = "Malam")]
    Night,
}

impl Shift {
    /// Convert enum → stored string
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Day => "Siang",
            Shift::Night => "Malam",
        }
    }

    /// Helper: convert user input (`day`, `night`, `Siang`, `Malam`, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "siang" | "day" | "d" => Some(Shift::Day),
            "malam" | "night" | "n" => Some(Shift::Night),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
