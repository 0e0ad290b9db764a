//! Domain entities
//!
//! Plain records handed out by the repositories. Relations are expressed as
//! foreign-key fields; navigation goes through repository lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A hero, seeded out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

/// A power a hero may hold.
///
/// `name` is never empty and `description` is always at least
/// [`MIN_DESCRIPTION_CHARS`](crate::domain::validation::MIN_DESCRIPTION_CHARS) characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Rating attached to a hero/power association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strength '{0}'")]
pub struct UnknownStrength(pub String);

impl FromStr for Strength {
    type Err = UnknownStrength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or_else(|| UnknownStrength(s.to_string()))
    }
}

/// Association row linking one hero to one power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

/// Validated input for inserting an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroPower {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}
