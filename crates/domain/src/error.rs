//! Error types for the domain layer
//!
//! `ValidationError` is the taxonomy reported by `CharacterBuilder::finalize`.
//! `DomainError` wraps it for callers that also parse class tags or archetype
//! names from text.

use serde::Serialize;
use thiserror::Error;

use crate::value_objects::{Attribute, AttributeRequirement, CharacterClass};

/// A single rule violated while finalizing a character.
///
/// Finalize reports exactly one of these: the first rule that failed, in the
/// fixed evaluation order of the validation pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or class tag absent or blank
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    /// Name length outside the accepted bounds
    #[error("name must be between {min} and {max} characters (got {length})")]
    OutOfRangeLength {
        length: usize,
        min: usize,
        max: usize,
    },

    /// Class tag not in the closed set
    #[error(
        "invalid class: {value}. Valid classes are: Warrior, Mage, Rogue, Priest, Archer, Paladin, Necromancer, Bard"
    )]
    InvalidEnumValue { value: String },

    /// A base attribute outside [1, 100]
    #[error("{attribute} must be between 1 and 100 (got {value})")]
    AttributeOutOfRange { attribute: Attribute, value: i32 },

    /// Sum of the base attributes outside [10, 200]
    #[error("total attribute points must be between 10 and 200 (got {total})")]
    StatBudgetViolation { total: i32 },

    /// A class-specific minimum was not met
    #[error("{class} requires {requirement}")]
    ClassRequirementUnmet {
        class: CharacterClass,
        requirement: AttributeRequirement,
    },

    /// An equipment slot was supplied but is blank
    #[error("{field} cannot be blank when specified")]
    BlankOptionalField { field: &'static str },

    /// Inventory holds more than 20 items
    #[error("inventory cannot hold more than 20 items (got {size})")]
    InventoryTooLarge { size: usize },

    /// The same item name appears twice in the inventory
    #[error("inventory contains duplicate item: {item}")]
    DuplicateInventoryItem { item: String },

    /// Special ability not in the class whitelist
    #[error("invalid special ability for {class}: {ability}")]
    AbilityClassMismatch {
        ability: String,
        class: CharacterClass,
    },

    /// Relic supplied for a class that cannot carry one
    #[error("{class} cannot carry a relic; only {} can", join_classes(.eligible))]
    RelicClassMismatch {
        class: CharacterClass,
        eligible: &'static [CharacterClass],
    },
}

/// The kind of a `ValidationError`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    MissingRequiredField,
    OutOfRangeLength,
    InvalidEnumValue,
    AttributeOutOfRange,
    StatBudgetViolation,
    ClassRequirementUnmet,
    BlankOptionalField,
    InventoryTooLarge,
    DuplicateInventoryItem,
    AbilityClassMismatch,
    RelicClassMismatch,
}

impl ValidationError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingRequiredField { .. } => ValidationErrorKind::MissingRequiredField,
            Self::OutOfRangeLength { .. } => ValidationErrorKind::OutOfRangeLength,
            Self::InvalidEnumValue { .. } => ValidationErrorKind::InvalidEnumValue,
            Self::AttributeOutOfRange { .. } => ValidationErrorKind::AttributeOutOfRange,
            Self::StatBudgetViolation { .. } => ValidationErrorKind::StatBudgetViolation,
            Self::ClassRequirementUnmet { .. } => ValidationErrorKind::ClassRequirementUnmet,
            Self::BlankOptionalField { .. } => ValidationErrorKind::BlankOptionalField,
            Self::InventoryTooLarge { .. } => ValidationErrorKind::InventoryTooLarge,
            Self::DuplicateInventoryItem { .. } => ValidationErrorKind::DuplicateInventoryItem,
            Self::AbilityClassMismatch { .. } => ValidationErrorKind::AbilityClassMismatch,
            Self::RelicClassMismatch { .. } => ValidationErrorKind::RelicClassMismatch,
        }
    }
}

fn join_classes(classes: &[CharacterClass]) -> String {
    classes
        .iter()
        .map(|class| class.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Finalize rejected the staged character
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Parse error (for class tags and archetype names)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_error_names_attribute_and_value() {
        let err = ValidationError::AttributeOutOfRange {
            attribute: Attribute::Strength,
            value: 150,
        };
        assert_eq!(err.kind(), ValidationErrorKind::AttributeOutOfRange);
        assert_eq!(
            err.to_string(),
            "strength must be between 1 and 100 (got 150)"
        );
    }

    #[test]
    fn test_class_requirement_message() {
        let err = ValidationError::ClassRequirementUnmet {
            class: CharacterClass::Warrior,
            requirement: AttributeRequirement::new(Attribute::Strength, 15),
        };
        assert_eq!(err.to_string(), "Warrior requires strength >= 15");
    }

    #[test]
    fn test_relic_error_lists_eligible_classes() {
        let err = ValidationError::RelicClassMismatch {
            class: CharacterClass::Rogue,
            eligible: CharacterClass::relic_bearers(),
        };
        assert_eq!(
            err.to_string(),
            "Rogue cannot carry a relic; only Paladin, Priest, Necromancer can"
        );
    }

    #[test]
    fn test_validation_converts_into_domain_error() {
        let err: DomainError = ValidationError::InventoryTooLarge { size: 21 }.into();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: inventory cannot hold more than 20 items (got 21)"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown class: Druid");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown class: Druid");
    }
}
