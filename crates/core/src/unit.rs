//! Measurement unit for inventory quantities.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The fixed set of units an item can be measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    Litre,
    Ml,
    Pcs,
}

impl Unit {
    /// All units, in the order they are offered to the user.
    pub const ALL: [Unit; 5] = [Unit::Kg, Unit::G, Unit::Litre, Unit::Ml, Unit::Pcs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Litre => "litre",
            Unit::Ml => "ml",
            Unit::Pcs => "pcs",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "litre" => Ok(Unit::Litre),
            "ml" => Ok(Unit::Ml),
            "pcs" => Ok(Unit::Pcs),
            other => Err(DomainError::validation(format!(
                "unit must be one of: kg, g, litre, ml, pcs (got '{other}')"
            ))),
        }
    }
}
