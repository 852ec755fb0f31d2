//! Character classes and the per-class rule table
//!
//! Every rule that depends on the class tag lives in `ClassProfile`: the
//! attribute minimums, the special-ability whitelist and relic eligibility.
//! The validation pipeline reads the table uniformly instead of branching
//! per class.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attributes::{Attribute, AttributeRequirement, BaseAttributes};
use crate::error::DomainError;

/// The closed set of playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Priest,
    Archer,
    Paladin,
    Necromancer,
    Bard,
}

/// Rules that apply to a single class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    /// Minimum attribute values, checked in order
    pub requirements: &'static [AttributeRequirement],
    /// Special abilities the class may take
    pub abilities: &'static [&'static str],
    /// Whether the class may carry a relic
    pub relic_eligible: bool,
}

impl ClassProfile {
    /// Returns the first requirement the attributes fail to meet, if any.
    pub fn unmet_requirement(&self, attributes: &BaseAttributes) -> Option<AttributeRequirement> {
        self.requirements
            .iter()
            .copied()
            .find(|requirement| !requirement.is_met_by(attributes))
    }

    /// Returns true if `ability` is on this class's whitelist.
    pub fn allows_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|candidate| *candidate == ability)
    }
}

const WARRIOR_PALADIN_MINIMUMS: &[AttributeRequirement] = &[
    AttributeRequirement::new(Attribute::Strength, 15),
    AttributeRequirement::new(Attribute::Constitution, 10),
];
const CASTER_MINIMUMS: &[AttributeRequirement] =
    &[AttributeRequirement::new(Attribute::Intelligence, 20)];
const AGILE_MINIMUMS: &[AttributeRequirement] =
    &[AttributeRequirement::new(Attribute::Agility, 18)];
const PRIEST_MINIMUMS: &[AttributeRequirement] = &[
    AttributeRequirement::new(Attribute::Intelligence, 15),
    AttributeRequirement::new(Attribute::Constitution, 8),
];
const BARD_MINIMUMS: &[AttributeRequirement] = &[
    AttributeRequirement::new(Attribute::Intelligence, 10),
    AttributeRequirement::new(Attribute::Agility, 10),
];

static WARRIOR: ClassProfile = ClassProfile {
    requirements: WARRIOR_PALADIN_MINIMUMS,
    abilities: &["Berserker Rage", "Shield Wall", "Battle Cry"],
    relic_eligible: false,
};

static MAGE: ClassProfile = ClassProfile {
    requirements: CASTER_MINIMUMS,
    abilities: &["Fireball", "Ice Storm", "Arcane Blast", "Teleport"],
    relic_eligible: false,
};

static ROGUE: ClassProfile = ClassProfile {
    requirements: AGILE_MINIMUMS,
    abilities: &["Backstab", "Vanish", "Poison Blade", "Smoke Bomb"],
    relic_eligible: false,
};

static PRIEST: ClassProfile = ClassProfile {
    requirements: PRIEST_MINIMUMS,
    abilities: &["Holy Light", "Divine Shield", "Resurrection", "Smite"],
    relic_eligible: true,
};

static ARCHER: ClassProfile = ClassProfile {
    requirements: AGILE_MINIMUMS,
    abilities: &["Multi Shot", "Precision", "Rain of Arrows", "Eagle Eye"],
    relic_eligible: false,
};

static PALADIN: ClassProfile = ClassProfile {
    requirements: WARRIOR_PALADIN_MINIMUMS,
    abilities: &[
        "Divine Strike",
        "Aura of Protection",
        "Lay on Hands",
        "Consecration",
    ],
    relic_eligible: true,
};

static NECROMANCER: ClassProfile = ClassProfile {
    requirements: CASTER_MINIMUMS,
    abilities: &["Raise Dead", "Soul Drain", "Bone Armor", "Plague"],
    relic_eligible: true,
};

static BARD: ClassProfile = ClassProfile {
    requirements: BARD_MINIMUMS,
    abilities: &["Inspire", "Lullaby", "Battle Hymn", "Charm"],
    relic_eligible: false,
};

impl CharacterClass {
    /// Get all classes, in declaration order
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
            CharacterClass::Priest,
            CharacterClass::Archer,
            CharacterClass::Paladin,
            CharacterClass::Necromancer,
            CharacterClass::Bard,
        ]
    }

    /// Classes permitted to carry a relic
    pub fn relic_bearers() -> &'static [CharacterClass] {
        &[
            CharacterClass::Paladin,
            CharacterClass::Priest,
            CharacterClass::Necromancer,
        ]
    }

    /// Get a display name for the class
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Priest => "Priest",
            CharacterClass::Archer => "Archer",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Necromancer => "Necromancer",
            CharacterClass::Bard => "Bard",
        }
    }

    /// Returns the rule table entry for this class.
    pub fn profile(&self) -> &'static ClassProfile {
        match self {
            CharacterClass::Warrior => &WARRIOR,
            CharacterClass::Mage => &MAGE,
            CharacterClass::Rogue => &ROGUE,
            CharacterClass::Priest => &PRIEST,
            CharacterClass::Archer => &ARCHER,
            CharacterClass::Paladin => &PALADIN,
            CharacterClass::Necromancer => &NECROMANCER,
            CharacterClass::Bard => &BARD,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Class tags match exactly; "warrior" is not a class.
impl std::str::FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .copied()
            .find(|class| class.display_name() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown class: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            "Necromancer".parse::<CharacterClass>().ok(),
            Some(CharacterClass::Necromancer)
        );
        assert!("necromancer".parse::<CharacterClass>().is_err());
        assert!(" Bard".parse::<CharacterClass>().is_err());
        assert!("Druid".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for class in CharacterClass::all() {
            assert_eq!(class.to_string().parse::<CharacterClass>().ok(), Some(*class));
        }
    }

    #[test]
    fn test_every_whitelist_has_three_or_four_abilities() {
        for class in CharacterClass::all() {
            let count = class.profile().abilities.len();
            assert!((3..=4).contains(&count), "{class} has {count} abilities");
        }
    }

    #[test]
    fn test_relic_eligibility_matches_relic_bearers() {
        for class in CharacterClass::all() {
            assert_eq!(
                class.profile().relic_eligible,
                CharacterClass::relic_bearers().contains(class)
            );
        }
    }

    #[test]
    fn test_ability_whitelists_are_class_specific() {
        assert!(CharacterClass::Warrior.profile().allows_ability("Battle Cry"));
        assert!(!CharacterClass::Warrior.profile().allows_ability("Fireball"));
        assert!(CharacterClass::Archer.profile().allows_ability("Eagle Eye"));
        assert!(!CharacterClass::Archer.profile().allows_ability("eagle eye"));
    }

    mod requirements {
        use super::*;

        fn attrs(str_: i32, agi: i32, int: i32, con: i32) -> BaseAttributes {
            BaseAttributes::new(str_, agi, int, con)
        }

        #[test]
        fn warrior_reports_strength_before_constitution() {
            let unmet = CharacterClass::Warrior
                .profile()
                .unmet_requirement(&attrs(5, 10, 10, 5));
            assert_eq!(
                unmet,
                Some(AttributeRequirement::new(Attribute::Strength, 15))
            );
        }

        #[test]
        fn paladin_reports_constitution_when_strength_met() {
            let unmet = CharacterClass::Paladin
                .profile()
                .unmet_requirement(&attrs(15, 10, 10, 9));
            assert_eq!(
                unmet,
                Some(AttributeRequirement::new(Attribute::Constitution, 10))
            );
        }

        #[test]
        fn casters_need_twenty_intelligence() {
            for class in [CharacterClass::Mage, CharacterClass::Necromancer] {
                assert!(class.profile().unmet_requirement(&attrs(10, 10, 19, 10)).is_some());
                assert!(class.profile().unmet_requirement(&attrs(10, 10, 20, 10)).is_none());
            }
        }

        #[test]
        fn agile_classes_need_eighteen_agility() {
            for class in [CharacterClass::Rogue, CharacterClass::Archer] {
                assert!(class.profile().unmet_requirement(&attrs(10, 17, 10, 10)).is_some());
                assert!(class.profile().unmet_requirement(&attrs(10, 18, 10, 10)).is_none());
            }
        }

        #[test]
        fn priest_needs_intelligence_and_constitution() {
            let profile = CharacterClass::Priest.profile();
            assert!(profile.unmet_requirement(&attrs(5, 5, 15, 8)).is_none());
            assert_eq!(
                profile.unmet_requirement(&attrs(5, 5, 14, 8)),
                Some(AttributeRequirement::new(Attribute::Intelligence, 15))
            );
            assert_eq!(
                profile.unmet_requirement(&attrs(5, 5, 15, 7)),
                Some(AttributeRequirement::new(Attribute::Constitution, 8))
            );
        }

        #[test]
        fn bard_needs_balanced_intelligence_and_agility() {
            let profile = CharacterClass::Bard.profile();
            assert!(profile.unmet_requirement(&attrs(5, 10, 10, 5)).is_none());
            assert_eq!(
                profile.unmet_requirement(&attrs(5, 9, 10, 5)),
                Some(AttributeRequirement::new(Attribute::Agility, 10))
            );
        }
    }
}
