//! Heroforge domain - staged, validated character construction
//!
//! A `CharacterBuilder` accumulates fields through chained setters. Its
//! `finalize` runs the ordered rule pipeline in `validation` and, only when
//! every rule passes, produces an immutable `Character`.

pub mod aggregates;
pub mod builder;
pub mod director;
pub mod error;
pub mod validation;
pub mod value_objects;

pub use aggregates::Character;
pub use builder::CharacterBuilder;
pub use director::{Archetype, CharacterDirector};
pub use error::{DomainError, ValidationError, ValidationErrorKind};
pub use validation::{MAX_INVENTORY_SIZE, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
pub use value_objects::{
    Attribute, AttributeRequirement, BaseAttributes, CharacterClass, ClassProfile,
};
