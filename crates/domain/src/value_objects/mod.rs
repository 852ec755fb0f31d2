//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod character_class;

pub use attributes::{
    Attribute, AttributeRequirement, BaseAttributes, HEALTH_PER_CONSTITUTION, MANA_PER_INTELLIGENCE,
    MAX_ATTRIBUTE, MAX_ATTRIBUTE_TOTAL, MIN_ATTRIBUTE, MIN_ATTRIBUTE_TOTAL,
};
pub use character_class::{CharacterClass, ClassProfile};
