//! Currency code type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency code.
///
/// Bills circulate in whatever denomination their mint issues — `sat`,
/// `BTC`, ISO codes like `USD` — so the code is carried as an opaque
/// string. The engine performs no normalization, no validation against
/// a currency table and no currency-specific rounding; it only checks
/// that two amounts agree before combining them.
///
/// # Example
///
/// ```rust
/// use billfold_core::types::Currency;
///
/// let sat = Currency::new("sat");
/// assert_eq!(sat.code(), "sat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into())
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency(code)
    }
}
