//! Serialization views
//!
//! Each response shape is an explicit projection. Nested records never point
//! back at the entity that embeds them, so Hero -> HeroPower -> Power stops there.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Hero, HeroPower, Power, Strength};

pub const HERO_SUMMARY_FIELDS: &[&str] = &["id", "name", "super_name"];
pub const POWER_SUMMARY_FIELDS: &[&str] = &["id", "name", "description"];

/// Keep only `fields` of a serialized record. Unknown names are ignored.
///
/// `record` must serialize to a JSON object (a struct with named fields);
/// anything else projects to an empty object.
pub fn only<T: Serialize>(record: &T, fields: &[&str]) -> Value {
    let mut projected = Map::new();
    match serde_json::to_value(record) {
        Ok(Value::Object(mut all)) => {
            for field in fields {
                if let Some((key, value)) = all.remove_entry(*field) {
                    projected.insert(key, value);
                }
            }
        }
        other => debug_assert!(false, "only() needs an object record, got {:?}", other),
    }
    Value::Object(projected)
}

/// `{id, name, super_name}`, used in listings and when embedded elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSummary {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

/// `{id, name, description}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerView {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// An association as seen from its hero: strength plus the power, no hero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPowerEntry {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub power: PowerView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroDetail {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerEntry>,
}

/// Default association shape; embeds neither side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPowerView {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}

/// Response of association creation, with both sides re-embedded in trimmed form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPowerCreated {
    #[serde(flatten)]
    pub hero_power: HeroPowerView,
    pub hero: HeroSummary,
    pub power: PowerView,
}

pub fn to_summary(hero: &Hero) -> HeroSummary {
    HeroSummary {
        id: hero.id,
        name: hero.name.clone(),
        super_name: hero.super_name.clone(),
    }
}

pub fn power_view(power: &Power) -> PowerView {
    PowerView {
        id: power.id,
        name: power.name.clone(),
        description: power.description.clone(),
    }
}

pub fn hero_power_view(hero_power: &HeroPower) -> HeroPowerView {
    HeroPowerView {
        id: hero_power.id,
        hero_id: hero_power.hero_id,
        power_id: hero_power.power_id,
        strength: hero_power.strength,
    }
}

pub fn to_detail(hero: &Hero, hero_powers: &[(HeroPower, Power)]) -> HeroDetail {
    HeroDetail {
        id: hero.id,
        name: hero.name.clone(),
        super_name: hero.super_name.clone(),
        hero_powers: hero_powers
            .iter()
            .map(|(hero_power, power)| HeroPowerEntry {
                id: hero_power.id,
                hero_id: hero_power.hero_id,
                power_id: hero_power.power_id,
                strength: hero_power.strength,
                power: power_view(power),
            })
            .collect(),
    }
}

pub fn to_created(hero_power: &HeroPower, hero: &Hero, power: &Power) -> HeroPowerCreated {
    HeroPowerCreated {
        hero_power: hero_power_view(hero_power),
        hero: to_summary(hero),
        power: power_view(power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hero() -> Hero {
        Hero {
            id: 1,
            name: "Kamala Khan".into(),
            super_name: "Ms. Marvel".into(),
        }
    }

    fn power(id: i32) -> Power {
        Power {
            id,
            name: "flight".into(),
            description: "gives the wielder the ability to fly".into(),
        }
    }

    #[test]
    fn only_keeps_requested_fields() {
        let projected = only(&hero(), &["id", "super_name", "missing"]);
        assert_eq!(projected, json!({"id": 1, "super_name": "Ms. Marvel"}));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "needs an object record")]
    fn only_rejects_non_object_records_in_debug() {
        only(&42, &["id"]);
    }

    #[test]
    fn detail_entries_carry_power_but_not_hero() {
        let links = vec![
            (
                HeroPower {
                    id: 10,
                    strength: Strength::Strong,
                    hero_id: 1,
                    power_id: 2,
                },
                power(2),
            ),
            (
                HeroPower {
                    id: 11,
                    strength: Strength::Weak,
                    hero_id: 1,
                    power_id: 3,
                },
                power(3),
            ),
        ];

        let value = serde_json::to_value(to_detail(&hero(), &links)).unwrap();
        let entries = value["hero_powers"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        for entry in entries {
            assert!(entry.get("strength").is_some());
            assert!(entry["power"].get("description").is_some());
            assert!(entry.get("hero").is_none());
        }
    }

    #[test]
    fn created_view_flattens_association_fields() {
        let hero_power = HeroPower {
            id: 5,
            strength: Strength::Average,
            hero_id: 1,
            power_id: 2,
        };
        let value = serde_json::to_value(to_created(&hero_power, &hero(), &power(2))).unwrap();

        assert_eq!(value["id"], 5);
        assert_eq!(value["strength"], "Average");
        assert_eq!(value["hero"], json!({"id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel"}));
        assert_eq!(value["power"]["id"], 2);
        assert!(value["power"].get("hero_powers").is_none());
    }
}
