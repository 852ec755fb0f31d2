//! CharacterBuilder - reusable accumulator for character construction
//!
//! Setters only assign; every check is deferred to `finalize`. A builder can
//! be reused across many constructions, but nothing resets it implicitly:
//! call `reset` between uses or staged fields carry over.

use crate::aggregates::Character;
use crate::error::ValidationError;
use crate::validation::{self, non_blank};
use crate::value_objects::{Attribute, BaseAttributes};

/// Mutable staging area for a single character.
///
/// # Example
///
/// ```
/// use heroforge_domain::{CharacterBuilder, ValidationErrorKind};
///
/// let mut builder = CharacterBuilder::new();
/// builder
///     .set_name("WeakOne")
///     .set_class("Warrior")
///     .set_strength(5)
///     .set_agility(10)
///     .set_intelligence(5)
///     .set_constitution(10);
///
/// let err = builder.finalize().unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::ClassRequirementUnmet);
///
/// // The builder is untouched, fix it and retry.
/// builder.set_strength(15);
/// assert!(builder.finalize().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterBuilder {
    name: Option<String>,
    class_tag: Option<String>,
    attributes: BaseAttributes,
    primary_weapon: Option<String>,
    armor: Option<String>,
    special_ability: Option<String>,
    relic: Option<String>,
    inventory: Vec<String>,
}

impl CharacterBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every staged field: strings to absent, attributes to zero,
    /// inventory to empty.
    pub fn reset(&mut self) -> &mut Self {
        self.name = None;
        self.class_tag = None;
        self.attributes = BaseAttributes::default();
        self.primary_weapon = None;
        self.armor = None;
        self.special_ability = None;
        self.relic = None;
        // Keep the allocation for the next construction.
        self.inventory.clear();
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Stages the class tag as given. Unknown tags are rejected at finalize.
    pub fn set_class(&mut self, class_tag: impl Into<String>) -> &mut Self {
        self.class_tag = Some(class_tag.into());
        self
    }

    pub fn set_strength(&mut self, value: i32) -> &mut Self {
        self.set_attribute(Attribute::Strength, value)
    }

    pub fn set_agility(&mut self, value: i32) -> &mut Self {
        self.set_attribute(Attribute::Agility, value)
    }

    pub fn set_intelligence(&mut self, value: i32) -> &mut Self {
        self.set_attribute(Attribute::Intelligence, value)
    }

    pub fn set_constitution(&mut self, value: i32) -> &mut Self {
        self.set_attribute(Attribute::Constitution, value)
    }

    pub fn set_attribute(&mut self, attribute: Attribute, value: i32) -> &mut Self {
        *self.attributes.get_mut(attribute) = value;
        self
    }

    /// Stages all four base attributes at once.
    pub fn set_attributes(&mut self, attributes: BaseAttributes) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn set_primary_weapon(&mut self, weapon: impl Into<String>) -> &mut Self {
        self.primary_weapon = Some(weapon.into());
        self
    }

    pub fn set_armor(&mut self, armor: impl Into<String>) -> &mut Self {
        self.armor = Some(armor.into());
        self
    }

    pub fn set_special_ability(&mut self, ability: impl Into<String>) -> &mut Self {
        self.special_ability = Some(ability.into());
        self
    }

    pub fn set_relic(&mut self, relic: impl Into<String>) -> &mut Self {
        self.relic = Some(relic.into());
        self
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Appends an item. Empty names are ignored. Duplicates are accepted here
    /// and rejected at finalize.
    pub fn add_item(&mut self, item: impl Into<String>) -> &mut Self {
        let item = item.into();
        if !item.is_empty() {
            self.inventory.push(item);
        }
        self
    }

    /// Appends each item in order, with the same rule as `add_item`.
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for item in items {
            self.add_item(item);
        }
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn class_tag(&self) -> Option<&str> {
        self.class_tag.as_deref()
    }

    pub fn attributes(&self) -> BaseAttributes {
        self.attributes
    }

    pub fn primary_weapon(&self) -> Option<&str> {
        self.primary_weapon.as_deref()
    }

    pub fn armor(&self) -> Option<&str> {
        self.armor.as_deref()
    }

    pub fn special_ability(&self) -> Option<&str> {
        self.special_ability.as_deref()
    }

    pub fn relic(&self) -> Option<&str> {
        self.relic.as_deref()
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    // =========================================================================
    // Finalize
    // =========================================================================

    /// Validates the staged fields and, if every rule passes, builds a
    /// `Character` from copies of them.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, in pipeline order. The builder is not
    /// modified either way.
    pub fn finalize(&self) -> Result<Character, ValidationError> {
        let class = match validation::validate(self) {
            Ok(class) => class,
            Err(err) => {
                tracing::debug!(
                    name = ?self.name,
                    kind = ?err.kind(),
                    error = %err,
                    "Character rejected"
                );
                return Err(err);
            }
        };

        // Presence was checked by the pipeline.
        let name = self.name.clone().unwrap_or_default();

        let character = Character::from_validated(
            name,
            class,
            self.attributes,
            self.primary_weapon.clone(),
            self.armor.clone(),
            non_blank(self.special_ability.as_deref()).map(str::to_string),
            non_blank(self.relic.as_deref()).map(str::to_string),
            self.inventory.clone(),
        );

        tracing::debug!(
            name = character.name(),
            class = %character.class(),
            health = character.health(),
            mana = character.mana(),
            "Character finalized"
        );

        Ok(character)
    }
}
