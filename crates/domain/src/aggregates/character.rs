//! Character aggregate - the immutable product of a successful finalize
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated, there are no mutators
//! - **Valid by construction**: The only constructor is crate-private and is
//!   called by `CharacterBuilder::finalize` after every rule has passed
//! - **Owned inventory**: The character holds its own copy of the item list,
//!   so reusing the builder never reaches back into a finished character

use serde::Serialize;
use std::fmt;

use crate::value_objects::{BaseAttributes, CharacterClass};

/// A finalized character
///
/// # Invariants
///
/// - `name` is 2..=30 characters and not blank
/// - each base attribute is in 1..=100 and their sum is in 10..=200
/// - the class minimums of `class` are met
/// - `special_ability`, if present, is on the class whitelist
/// - `relic` is only present for Paladin, Priest or Necromancer
/// - equipment slots, if present, are not blank
/// - `inventory` has at most 20 distinct entries
/// - `health == constitution * 10` and `mana == intelligence * 7`
///
/// # Example
///
/// ```
/// use heroforge_domain::CharacterBuilder;
///
/// let character = CharacterBuilder::new()
///     .set_name("Kaelen")
///     .set_class("Archer")
///     .set_strength(10)
///     .set_agility(25)
///     .set_intelligence(15)
///     .set_constitution(10)
///     .finalize()
///     .unwrap();
///
/// assert_eq!(character.name(), "Kaelen");
/// assert_eq!(character.health(), 100);
/// assert_eq!(character.mana(), 105);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    name: String,
    class: CharacterClass,
    attributes: BaseAttributes,

    // Derived at construction
    health: i32,
    mana: i32,

    primary_weapon: Option<String>,
    armor: Option<String>,
    special_ability: Option<String>,
    relic: Option<String>,

    inventory: Vec<String>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Assembles a character from already-validated parts and computes the
    /// derived stats.
    pub(crate) fn from_validated(
        name: String,
        class: CharacterClass,
        attributes: BaseAttributes,
        primary_weapon: Option<String>,
        armor: Option<String>,
        special_ability: Option<String>,
        relic: Option<String>,
        inventory: Vec<String>,
    ) -> Self {
        Self {
            name,
            class,
            health: attributes.health(),
            mana: attributes.mana(),
            attributes,
            primary_weapon,
            armor,
            special_ability,
            relic,
            inventory,
        }
    }

    // =========================================================================
    // Identity Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    // =========================================================================
    // Stats Accessors
    // =========================================================================

    /// Returns all four base attributes.
    #[inline]
    pub fn attributes(&self) -> BaseAttributes {
        self.attributes
    }

    #[inline]
    pub fn strength(&self) -> i32 {
        self.attributes.strength
    }

    #[inline]
    pub fn agility(&self) -> i32 {
        self.attributes.agility
    }

    #[inline]
    pub fn intelligence(&self) -> i32 {
        self.attributes.intelligence
    }

    #[inline]
    pub fn constitution(&self) -> i32 {
        self.attributes.constitution
    }

    /// Health points, `constitution * 10`.
    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Mana points, `intelligence * 7`.
    #[inline]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    // =========================================================================
    // Equipment Accessors
    // =========================================================================

    #[inline]
    pub fn primary_weapon(&self) -> Option<&str> {
        self.primary_weapon.as_deref()
    }

    #[inline]
    pub fn armor(&self) -> Option<&str> {
        self.armor.as_deref()
    }

    #[inline]
    pub fn special_ability(&self) -> Option<&str> {
        self.special_ability.as_deref()
    }

    #[inline]
    pub fn relic(&self) -> Option<&str> {
        self.relic.as_deref()
    }

    /// Items carried, in the order they were added.
    #[inline]
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }
}

/// Multi-line character card used by the text presentation.
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Character: {} [{}]", self.name, self.class)?;
        writeln!(
            f,
            "Stats: STR:{} AGI:{} INT:{} CON:{}",
            self.attributes.strength,
            self.attributes.agility,
            self.attributes.intelligence,
            self.attributes.constitution
        )?;
        writeln!(f, "HP:{} MP:{}", self.health, self.mana)?;
        writeln!(
            f,
            "Equipment: {}, {}",
            self.primary_weapon.as_deref().unwrap_or("none"),
            self.armor.as_deref().unwrap_or("none")
        )?;
        if let Some(ability) = &self.special_ability {
            writeln!(f, "Ability: {}", ability)?;
        }
        if let Some(relic) = &self.relic {
            writeln!(f, "Relic: {}", relic)?;
        }
        write!(f, "Inventory: [{}]", self.inventory.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_character() -> Character {
        Character::from_validated(
            "Valeria".to_string(),
            CharacterClass::Paladin,
            BaseAttributes::new(25, 10, 12, 20),
            Some("Plasma Morningstar".to_string()),
            Some("Plate Armor".to_string()),
            Some("Lay on Hands".to_string()),
            Some("Sunstone".to_string()),
            vec!["Shield".to_string(), "Bandages".to_string()],
        )
    }

    #[test]
    fn derived_stats_are_computed_at_construction() {
        let character = create_test_character();
        assert_eq!(character.health(), 200);
        assert_eq!(character.mana(), 84);
    }

    #[test]
    fn display_renders_card() {
        let card = create_test_character().to_string();
        assert_eq!(
            card,
            "Character: Valeria [Paladin]\n\
             Stats: STR:25 AGI:10 INT:12 CON:20\n\
             HP:200 MP:84\n\
             Equipment: Plasma Morningstar, Plate Armor\n\
             Ability: Lay on Hands\n\
             Relic: Sunstone\n\
             Inventory: [Shield, Bandages]"
        );
    }

    #[test]
    fn display_marks_empty_slots() {
        let character = Character::from_validated(
            "Ash".to_string(),
            CharacterClass::Bard,
            BaseAttributes::new(10, 10, 10, 10),
            None,
            None,
            None,
            None,
            Vec::new(),
        );
        let card = character.to_string();
        assert!(card.contains("Equipment: none, none"));
        assert!(!card.contains("Ability:"));
        assert!(card.ends_with("Inventory: []"));
    }

    #[test]
    fn serializes_as_camel_case() {
        let json = serde_json::to_value(create_test_character()).unwrap();
        assert_eq!(json["name"], "Valeria");
        assert_eq!(json["class"], "Paladin");
        assert_eq!(json["attributes"]["constitution"], 20);
        assert_eq!(json["primaryWeapon"], "Plasma Morningstar");
        assert_eq!(json["specialAbility"], "Lay on Hands");
        assert_eq!(json["inventory"][1], "Bandages");
    }
}
