//! Base attributes and the limits that apply to them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest accepted value for a single base attribute
pub const MIN_ATTRIBUTE: i32 = 1;

/// Highest accepted value for a single base attribute
pub const MAX_ATTRIBUTE: i32 = 100;

/// Lowest accepted sum of the four base attributes
pub const MIN_ATTRIBUTE_TOTAL: i32 = 10;

/// Highest accepted sum of the four base attributes
pub const MAX_ATTRIBUTE_TOTAL: i32 = 200;

/// Health granted per point of constitution
pub const HEALTH_PER_CONSTITUTION: i32 = 10;

/// Mana granted per point of intelligence
pub const MANA_PER_INTELLIGENCE: i32 = 7;

/// One of the four base attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    Constitution,
}

impl Attribute {
    /// All attributes in the order they are range-checked.
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::Constitution,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Intelligence => "intelligence",
            Attribute::Constitution => "constitution",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The four base attribute scores.
///
/// Scores are unchecked here. A freshly reset builder holds all zeroes, and
/// range checks happen at finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAttributes {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub constitution: i32,
}

impl BaseAttributes {
    pub const fn new(strength: i32, agility: i32, intelligence: i32, constitution: i32) -> Self {
        Self {
            strength,
            agility,
            intelligence,
            constitution,
        }
    }

    /// Returns the score for `attribute`.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Constitution => self.constitution,
        }
    }

    /// Returns a mutable reference to the score for `attribute`.
    pub fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Constitution => &mut self.constitution,
        }
    }

    /// Sum of all four scores. Saturates instead of overflowing on unchecked input.
    pub fn total(&self) -> i32 {
        Attribute::ALL
            .iter()
            .fold(0i32, |sum, attribute| sum.saturating_add(self.get(*attribute)))
    }

    /// The first attribute outside [`MIN_ATTRIBUTE`, `MAX_ATTRIBUTE`], with its value.
    pub fn first_out_of_range(&self) -> Option<(Attribute, i32)> {
        Attribute::ALL
            .iter()
            .map(|attribute| (*attribute, self.get(*attribute)))
            .find(|(_, value)| !(MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(value))
    }

    /// Health derived from constitution
    pub fn health(&self) -> i32 {
        self.constitution.saturating_mul(HEALTH_PER_CONSTITUTION)
    }

    /// Mana derived from intelligence
    pub fn mana(&self) -> i32 {
        self.intelligence.saturating_mul(MANA_PER_INTELLIGENCE)
    }
}

/// A class-specific minimum for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeRequirement {
    pub attribute: Attribute,
    pub minimum: i32,
}

impl AttributeRequirement {
    pub const fn new(attribute: Attribute, minimum: i32) -> Self {
        Self { attribute, minimum }
    }

    pub fn is_met_by(&self, attributes: &BaseAttributes) -> bool {
        attributes.get(self.attribute) >= self.minimum
    }
}

impl fmt::Display for AttributeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >= {}", self.attribute, self.minimum)
    }
}
