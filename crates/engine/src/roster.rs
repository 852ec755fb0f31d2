//! Forges the showcase roster.
//!
//! One builder is reused for every hero: reset, name, apply the archetype,
//! customise, finalize. The safety probes then feed deliberately broken
//! characters through the same pipeline and record the rejections.

use serde::Serialize;

use heroforge_domain::{
    Archetype, Character, CharacterBuilder, CharacterDirector, ValidationError,
    ValidationErrorKind,
};

/// A hero that was forged successfully.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgedHero {
    pub archetype: Archetype,
    pub character: Character,
}

/// A construction that finalize turned down.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub label: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl Rejection {
    fn new(label: impl Into<String>, error: &ValidationError) -> Self {
        Self {
            label: label.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeReport {
    pub heroes: Vec<ForgedHero>,
    pub rejections: Vec<Rejection>,
    /// Probes that were expected to fail but produced a character
    pub unexpected_successes: Vec<String>,
}

/// Name and customisation applied on top of each archetype.
fn customise(archetype: Archetype, builder: &mut CharacterBuilder) {
    match archetype {
        Archetype::RangedAgile => {
            builder.set_special_ability("Eagle Eye");
        }
        Archetype::MeleeTank => {
            builder
                .set_primary_weapon("Plasma Morningstar")
                .set_special_ability("Battle Cry");
        }
        Archetype::OffensiveCaster => {
            builder.add_item("Ember Shard");
        }
        Archetype::Healer => {
            builder.add_item("Sunstone Charm");
        }
    }
}

fn hero_name(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::RangedAgile => "Kaelen",
        Archetype::MeleeTank => "Valeria",
        Archetype::OffensiveCaster => "Ignis",
        Archetype::Healer => "Seraphine",
    }
}

/// Deliberately invalid characters, each expected to be rejected.
pub fn safety_probes() -> Vec<(&'static str, CharacterBuilder)> {
    let mut out_of_range = CharacterBuilder::new();
    out_of_range
        .set_name("Invalid")
        .set_class("Warrior")
        .set_strength(150)
        .set_agility(10)
        .set_intelligence(5)
        .set_constitution(15);

    let mut weak_warrior = CharacterBuilder::new();
    weak_warrior
        .set_name("WeakOne")
        .set_class("Warrior")
        .set_strength(5)
        .set_agility(10)
        .set_intelligence(5)
        .set_constitution(10);

    vec![
        ("Out-of-range strength", out_of_range),
        ("Class requirements", weak_warrior),
    ]
}

/// Forges one hero per archetype in `roster`, then runs the safety probes.
pub fn forge_roster(roster: &[Archetype]) -> ForgeReport {
    let director = CharacterDirector::new();
    let mut builder = CharacterBuilder::new();
    let mut report = ForgeReport::default();

    for archetype in roster {
        builder.reset().set_name(hero_name(*archetype));
        director.construct(*archetype, &mut builder);
        customise(*archetype, &mut builder);

        match builder.finalize() {
            Ok(character) => {
                tracing::info!(
                    archetype = %archetype,
                    name = character.name(),
                    class = %character.class(),
                    "Hero forged"
                );
                report.heroes.push(ForgedHero {
                    archetype: *archetype,
                    character,
                });
            }
            Err(e) => {
                tracing::warn!(archetype = %archetype, error = %e, "Template hero rejected");
                report.rejections.push(Rejection::new(archetype.display_name(), &e));
            }
        }
    }
    builder.reset();

    for (label, probe) in safety_probes() {
        match probe.finalize() {
            Ok(character) => {
                tracing::warn!(probe = label, name = character.name(), "Safety probe accepted");
                report.unexpected_successes.push(label.to_string());
            }
            Err(e) => {
                tracing::info!(probe = label, kind = ?e.kind(), error = %e, "Safety probe rejected");
                report.rejections.push(Rejection::new(label, &e));
            }
        }
    }

    report
}
