//! Archetype templates issued against a `CharacterBuilder`
//!
//! The director only stages fields. It never resets, names or finalizes the
//! builder, so callers can name the character first, apply a template, then
//! override whatever they like before calling `finalize`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::builder::CharacterBuilder;
use crate::error::DomainError;
use crate::value_objects::{BaseAttributes, CharacterClass};

/// Canned starting templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Agile ranged fighter (Archer)
    RangedAgile,
    /// Melee tank (Warrior)
    MeleeTank,
    /// Offensive spellcaster (Mage)
    OffensiveCaster,
    /// Healer and support (Priest)
    Healer,
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::RangedAgile,
            Archetype::MeleeTank,
            Archetype::OffensiveCaster,
            Archetype::Healer,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::RangedAgile => "Ranged Agile",
            Archetype::MeleeTank => "Melee Tank",
            Archetype::OffensiveCaster => "Offensive Caster",
            Archetype::Healer => "Healer",
        }
    }

    /// The class this template stages.
    pub fn class(&self) -> CharacterClass {
        self.template().class
    }

    fn template(&self) -> &'static Template {
        match self {
            Archetype::RangedAgile => &RANGED_AGILE,
            Archetype::MeleeTank => &MELEE_TANK,
            Archetype::OffensiveCaster => &OFFENSIVE_CASTER,
            Archetype::Healer => &HEALER,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accepts `ranged-agile`, `ranged_agile`, `rangedagile` and `Ranged Agile`.
impl std::str::FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "rangedagile" => Ok(Archetype::RangedAgile),
            "meleetank" => Ok(Archetype::MeleeTank),
            "offensivecaster" => Ok(Archetype::OffensiveCaster),
            "healer" => Ok(Archetype::Healer),
            _ => Err(DomainError::parse(format!("Unknown archetype: {}", s))),
        }
    }
}

struct Template {
    class: CharacterClass,
    attributes: BaseAttributes,
    primary_weapon: &'static str,
    armor: &'static str,
    special_ability: Option<&'static str>,
    items: &'static [&'static str],
}

static RANGED_AGILE: Template = Template {
    class: CharacterClass::Archer,
    attributes: BaseAttributes::new(10, 25, 15, 10),
    primary_weapon: "Longbow",
    armor: "Leather Armor",
    special_ability: None,
    items: &["Quiver of Arrows", "Rope", "Healing Potion"],
};

static MELEE_TANK: Template = Template {
    class: CharacterClass::Warrior,
    attributes: BaseAttributes::new(25, 10, 5, 20),
    primary_weapon: "Greatsword",
    armor: "Plate Armor",
    special_ability: None,
    items: &["Shield", "Health Potion", "Bandages"],
};

static OFFENSIVE_CASTER: Template = Template {
    class: CharacterClass::Mage,
    attributes: BaseAttributes::new(5, 10, 30, 10),
    primary_weapon: "Staff of Fire",
    armor: "Mystic Robes",
    special_ability: Some("Fireball"),
    items: &["Mana Potion", "Spell Tome", "Crystal Focus"],
};

static HEALER: Template = Template {
    class: CharacterClass::Priest,
    attributes: BaseAttributes::new(5, 8, 25, 15),
    primary_weapon: "Holy Mace",
    armor: "Cloth Vestments",
    special_ability: Some("Holy Light"),
    items: &["Holy Water", "Prayer Beads", "Bandages"],
};

/// Issues archetype templates as setter sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterDirector;

impl CharacterDirector {
    pub fn new() -> Self {
        Self
    }

    /// Stages `archetype` onto `builder` and hands the builder back for
    /// further chaining.
    pub fn construct<'a>(
        &self,
        archetype: Archetype,
        builder: &'a mut CharacterBuilder,
    ) -> &'a mut CharacterBuilder {
        let template = archetype.template();
        builder
            .set_class(template.class.display_name())
            .set_attributes(template.attributes)
            .set_primary_weapon(template.primary_weapon)
            .set_armor(template.armor);
        if let Some(ability) = template.special_ability {
            builder.set_special_ability(ability);
        }
        builder.add_items(template.items.iter().copied())
    }
}
