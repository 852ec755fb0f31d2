//! Ordered rule pipeline run by `CharacterBuilder::finalize`
//!
//! Rules are evaluated in a fixed order and the first violation is returned.
//! The order only decides which error is reported; a builder is accepted
//! exactly when every rule holds.
//!
//! 1. name present and not blank
//! 2. class tag present and not blank
//! 3. name length in 2..=30
//! 4. class tag names one of the eight classes
//! 5. each base attribute in 1..=100 (strength, agility, intelligence, constitution)
//! 6. attribute total in 10..=200
//! 7. class minimums
//! 8. equipment slots not blank when present
//! 9. inventory size at most 20
//! 10. no duplicate inventory items
//! 11. special ability on the class whitelist
//! 12. relic only for relic-bearing classes

use std::collections::HashSet;

use crate::builder::CharacterBuilder;
use crate::error::ValidationError;
use crate::value_objects::{
    BaseAttributes, CharacterClass, MAX_ATTRIBUTE_TOTAL, MIN_ATTRIBUTE_TOTAL,
};

/// Shortest accepted name, in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Longest accepted name, in characters
pub const MAX_NAME_LENGTH: usize = 30;

/// Most items a character may carry
pub const MAX_INVENTORY_SIZE: usize = 20;

/// Runs every rule against the staged fields.
///
/// Returns the parsed class on success so the caller does not parse the tag
/// a second time.
pub(crate) fn validate(builder: &CharacterBuilder) -> Result<CharacterClass, ValidationError> {
    let name = require_present("name", builder.name())?;
    let class_tag = require_present("class", builder.class_tag())?;

    check_name_length(name)?;
    let class = parse_class(class_tag)?;

    check_attribute_ranges(&builder.attributes())?;
    check_attribute_total(&builder.attributes())?;
    check_class_minimums(class, &builder.attributes())?;

    check_equipment_slot("primary weapon", builder.primary_weapon())?;
    check_equipment_slot("armor", builder.armor())?;

    check_inventory(builder.inventory())?;

    check_special_ability(class, builder.special_ability())?;
    check_relic(class, builder.relic())?;

    Ok(class)
}

/// Returns the value if it is present and not blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn require_present<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    non_blank(value).ok_or(ValidationError::MissingRequiredField { field })
}

fn check_name_length(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRangeLength {
            length,
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        })
    }
}

fn parse_class(tag: &str) -> Result<CharacterClass, ValidationError> {
    tag.parse()
        .map_err(|_| ValidationError::InvalidEnumValue {
            value: tag.to_string(),
        })
}

fn check_attribute_ranges(attributes: &BaseAttributes) -> Result<(), ValidationError> {
    match attributes.first_out_of_range() {
        Some((attribute, value)) => Err(ValidationError::AttributeOutOfRange { attribute, value }),
        None => Ok(()),
    }
}

fn check_attribute_total(attributes: &BaseAttributes) -> Result<(), ValidationError> {
    let total = attributes.total();
    if (MIN_ATTRIBUTE_TOTAL..=MAX_ATTRIBUTE_TOTAL).contains(&total) {
        Ok(())
    } else {
        Err(ValidationError::StatBudgetViolation { total })
    }
}

fn check_class_minimums(
    class: CharacterClass,
    attributes: &BaseAttributes,
) -> Result<(), ValidationError> {
    match class.profile().unmet_requirement(attributes) {
        Some(requirement) => Err(ValidationError::ClassRequirementUnmet { class, requirement }),
        None => Ok(()),
    }
}

fn check_equipment_slot(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::BlankOptionalField { field }),
        _ => Ok(()),
    }
}

fn check_inventory(items: &[String]) -> Result<(), ValidationError> {
    if items.len() > MAX_INVENTORY_SIZE {
        return Err(ValidationError::InventoryTooLarge { size: items.len() });
    }

    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().find(|item| !seen.insert(item.as_str())) {
        Some(item) => Err(ValidationError::DuplicateInventoryItem { item: item.clone() }),
        None => Ok(()),
    }
}

fn check_special_ability(
    class: CharacterClass,
    ability: Option<&str>,
) -> Result<(), ValidationError> {
    match non_blank(ability) {
        Some(ability) if !class.profile().allows_ability(ability) => {
            Err(ValidationError::AbilityClassMismatch {
                ability: ability.to_string(),
                class,
            })
        }
        _ => Ok(()),
    }
}

fn check_relic(class: CharacterClass, relic: Option<&str>) -> Result<(), ValidationError> {
    if non_blank(relic).is_some() && !class.profile().relic_eligible {
        return Err(ValidationError::RelicClassMismatch {
            class,
            eligible: CharacterClass::relic_bearers(),
        });
    }
    Ok(())
}
