//! Field-level validation applied before any store write.
//!
//! Every check runs; failures are collected so a client sees all of them at once.

use serde::Deserialize;
use serde_json::Value;

use super::{DomainError, NewHeroPower, Strength};

pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub const HERO_ID_REQUIRED: &str = "hero_id is required";
pub const POWER_ID_REQUIRED: &str = "power_id is required";
pub const STRENGTH_REQUIRED: &str = "strength is required";
pub const STRENGTH_INVALID: &str = "Strength must be one of: 'Strong', 'Weak', 'Average'";
pub const DESCRIPTION_INVALID: &str =
    "Description must be a string of at least 20 characters long.";
pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const DESCRIPTION_EMPTY: &str = "Description cannot be empty";
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 20 characters long";

/// Body of `POST /hero_powers`.
///
/// `strength` and `description` stay loosely typed so a wrong type is
/// reported as a rule violation rather than a parse failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateHeroPowerRequest {
    pub hero_id: Option<i32>,
    pub power_id: Option<i32>,
    pub strength: Option<Value>,
    pub description: Option<Value>,
}

/// Body of `PATCH /powers/{id}`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdatePowerRequest {
    pub description: Option<Value>,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_valid_description(value: &Value) -> bool {
    matches!(value, Value::String(s) if char_len(s) >= MIN_DESCRIPTION_CHARS)
}

/// Check a power's own fields, as required before inserting one.
pub fn validate_power(name: &str, description: &str) -> Result<(), DomainError> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(NAME_EMPTY.to_string());
    }
    if description.is_empty() {
        errors.push(DESCRIPTION_EMPTY.to_string());
    } else if char_len(description) < MIN_DESCRIPTION_CHARS {
        errors.push(DESCRIPTION_TOO_SHORT.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

/// Validate an association-creation body into an insertable record.
///
/// A `description` is not required; when one is sent it must still be a
/// string of at least [`MIN_DESCRIPTION_CHARS`] characters.
pub fn validate_hero_power(req: &CreateHeroPowerRequest) -> Result<NewHeroPower, DomainError> {
    let mut errors = Vec::new();

    if req.hero_id.is_none() {
        errors.push(HERO_ID_REQUIRED.to_string());
    }
    if req.power_id.is_none() {
        errors.push(POWER_ID_REQUIRED.to_string());
    }

    let strength = match &req.strength {
        None | Some(Value::Null) => {
            errors.push(STRENGTH_REQUIRED.to_string());
            None
        }
        Some(Value::String(s)) => match s.parse::<Strength>() {
            Ok(strength) => Some(strength),
            Err(_) => {
                errors.push(STRENGTH_INVALID.to_string());
                None
            }
        },
        Some(_) => {
            errors.push(STRENGTH_INVALID.to_string());
            None
        }
    };

    if let Some(description) = &req.description {
        if !description.is_null() && !is_valid_description(description) {
            errors.push(DESCRIPTION_INVALID.to_string());
        }
    }

    match (req.hero_id, req.power_id, strength) {
        (Some(hero_id), Some(power_id), Some(strength)) if errors.is_empty() => Ok(NewHeroPower {
            hero_id,
            power_id,
            strength,
        }),
        _ => Err(DomainError::Validation(errors)),
    }
}

/// Validate a power update. `Ok(None)` means there is nothing to change.
pub fn validate_power_update(req: &UpdatePowerRequest) -> Result<Option<String>, DomainError> {
    match &req.description {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) if char_len(s) >= MIN_DESCRIPTION_CHARS => Ok(Some(s.clone())),
        Some(_) => Err(DomainError::Validation(vec![DESCRIPTION_INVALID.to_string()])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(err: DomainError) -> Vec<String> {
        match err {
            DomainError::Validation(errors) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn power_rules_accumulate() {
        let errors = messages(validate_power("", "short").unwrap_err());
        assert_eq!(errors, vec![NAME_EMPTY, DESCRIPTION_TOO_SHORT]);

        let errors = messages(validate_power("flight", "").unwrap_err());
        assert_eq!(errors, vec![DESCRIPTION_EMPTY]);

        assert!(validate_power("flight", "gives the wielder the ability to fly").is_ok());
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        // 20 characters, 40 bytes
        let description = "éééééééééééééééééééé";
        assert!(validate_power("accents", description).is_ok());
    }

    #[test]
    fn hero_power_reports_every_missing_field() {
        let errors = messages(validate_hero_power(&CreateHeroPowerRequest::default()).unwrap_err());
        assert_eq!(
            errors,
            vec![HERO_ID_REQUIRED, POWER_ID_REQUIRED, STRENGTH_REQUIRED]
        );
    }

    #[test]
    fn hero_power_rejects_unknown_strength() {
        let req = CreateHeroPowerRequest {
            hero_id: Some(1),
            power_id: Some(2),
            strength: Some(json!("Invincible")),
            description: None,
        };
        assert_eq!(messages(validate_hero_power(&req).unwrap_err()), vec![STRENGTH_INVALID]);

        let req = CreateHeroPowerRequest {
            strength: Some(json!(3)),
            ..req
        };
        assert_eq!(messages(validate_hero_power(&req).unwrap_err()), vec![STRENGTH_INVALID]);
    }

    #[test]
    fn hero_power_checks_description_only_when_sent() {
        let valid = CreateHeroPowerRequest {
            hero_id: Some(1),
            power_id: Some(2),
            strength: Some(json!("Average")),
            description: None,
        };
        let new = validate_hero_power(&valid).unwrap();
        assert_eq!(
            new,
            NewHeroPower {
                hero_id: 1,
                power_id: 2,
                strength: Strength::Average
            }
        );

        let short = CreateHeroPowerRequest {
            description: Some(json!("too short")),
            ..valid.clone()
        };
        assert_eq!(messages(validate_hero_power(&short).unwrap_err()), vec![DESCRIPTION_INVALID]);

        let long = CreateHeroPowerRequest {
            description: Some(json!("a perfectly long description")),
            ..valid
        };
        assert!(validate_hero_power(&long).is_ok());
    }

    #[test]
    fn power_update_rules() {
        let update = |v: Option<Value>| validate_power_update(&UpdatePowerRequest { description: v });

        assert_eq!(update(None).unwrap(), None);
        assert_eq!(update(Some(Value::Null)).unwrap(), None);
        assert_eq!(update(Some(json!(""))).unwrap(), None);

        let nineteen = "a".repeat(19);
        assert_eq!(messages(update(Some(json!(nineteen))).unwrap_err()), vec![DESCRIPTION_INVALID]);
        assert_eq!(messages(update(Some(json!(42))).unwrap_err()), vec![DESCRIPTION_INVALID]);

        let twenty = "a".repeat(20);
        assert_eq!(update(Some(json!(twenty.clone()))).unwrap(), Some(twenty));
    }
}
