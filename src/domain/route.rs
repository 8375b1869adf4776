use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered (origin, destination) IATA pair. The reverse direction is used
/// to price the return leg.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct Route {
    pub origin: String,
    pub dest: String,
}

impl Route {
    pub fn new(origin: &str, dest: &str) -> Self {
        Route {
            origin: origin.to_uppercase(),
            dest: dest.to_uppercase(),
        }
    }

    /// Human-readable tag attached to every candidate this route produces.
    pub fn label(&self) -> String {
        format!("{} ↔ {}", self.origin, self.dest)
    }
}

fn is_iata(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

impl FromStr for Route {
    type Err = String;

    /// Parses `ORG-DST` (case-insensitive), e.g. `CGN-PMO`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let Some((origin, dest)) = text.split_once('-') else {
            return Err(format!("expected ORG-DST, got '{text}'"));
        };
        let (origin, dest) = (origin.trim(), dest.trim());
        if !is_iata(origin) || !is_iata(dest) {
            return Err(format!("'{text}' is not a pair of 3-letter IATA codes"));
        }
        Ok(Route::new(origin, dest))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.dest)
    }
}
