//! The family label attached to a color. Stored data has used two shapes for the same field over
//! time: a bare family name such as `"Red"`, and a structured `{ "main": "Red", "sub": "Scarlet" }`
//! record. [`Family`] models both as variants of one type, and every consumer goes through the
//! same accessors ([`Family::main`], [`Family::sub`]) instead of inspecting the shape.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::classifier::FamilyTable;

/// The label used when a color cannot be placed in any family.
pub const UNKNOWN_FAMILY: &str = "Unknown";

/// A color family, optionally refined by a shade.
/// # Example
/// Both stored shapes deserialize, and read the same way.
///
/// ```
/// # use tincture::Family;
/// let legacy: Family = serde_json::from_str(r#""Blue""#).unwrap();
/// let structured: Family = serde_json::from_str(r#"{"main": "Blue", "sub": "Navy"}"#).unwrap();
/// assert_eq!(legacy.main(), "Blue");
/// assert_eq!(structured.main(), "Blue");
/// assert_eq!(legacy.sub(), None);
/// assert_eq!(structured.sub(), Some("Navy"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Family {
    /// A bare family name, as older records store it.
    Simple(String),
    /// A main family and an optional shade within it.
    Structured {
        /// The coarse family, such as "Red" or "Gray".
        main: String,
        /// The shade within the family, such as "Scarlet" or "Charcoal".
        sub: Option<String>,
    },
}

impl Family {
    /// Builds a structured family.
    pub fn new(main: impl Into<String>, sub: Option<String>) -> Family {
        Family::Structured {
            main: main.into(),
            sub,
        }
    }

    /// The structured family used when classification finds no match.
    pub fn unknown() -> Family {
        Family::new(UNKNOWN_FAMILY, None)
    }

    /// The main family name, whichever shape this is. An empty legacy string reads as
    /// [`UNKNOWN_FAMILY`].
    pub fn main(&self) -> &str {
        let main = match self {
            Family::Simple(name) => name,
            Family::Structured { main, .. } => main,
        };
        if main.trim().is_empty() {
            UNKNOWN_FAMILY
        } else {
            main
        }
    }

    /// The shade, if this family has one.
    pub fn sub(&self) -> Option<&str> {
        match self {
            Family::Simple(_) => None,
            Family::Structured { sub, .. } => sub.as_deref(),
        }
    }

    /// Whether the given table could have produced this label. See [`FamilyTable::is_valid`].
    pub fn is_valid_for(&self, table: &FamilyTable) -> bool {
        table.is_valid(self)
    }

    /// Converts either shape into the structured shape.
    pub fn normalized(&self) -> Family {
        Family::new(self.main(), self.sub().map(str::to_string))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.sub() {
            Some(sub) => write!(f, "{} ({})", self.main(), sub),
            None => write!(f, "{}", self.main()),
        }
    }
}

impl From<&str> for Family {
    fn from(name: &str) -> Family {
        Family::Simple(name.to_string())
    }
}

impl From<String> for Family {
    fn from(name: String) -> Family {
        Family::Simple(name)
    }
}
