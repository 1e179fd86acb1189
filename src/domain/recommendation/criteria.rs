//! Normalized query criteria sent to the scoring service.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::foundation::OptionId;

/// Desired activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Calm,
    Easy,
    Sporty,
    Action,
}

/// Fixed mapping from vibe option ids to vibe values. Option ids outside
/// this table produce no vibe constraint.
static VIBE_TABLE: Lazy<HashMap<&'static str, Vibe>> = Lazy::new(|| {
    HashMap::from([
        ("v_calm", Vibe::Calm),
        ("v_easy", Vibe::Easy),
        ("v_sporty", Vibe::Sporty),
        ("v_action", Vibe::Action),
    ])
});

impl Vibe {
    /// Resolves a vibe option id through the fixed table.
    pub fn from_option_id(id: &OptionId) -> Option<Self> {
        VIBE_TABLE.get(id.as_str()).copied()
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::Calm => "calm",
            Vibe::Easy => "easy",
            Vibe::Sporty => "sporty",
            Vibe::Action => "action",
        }
    }
}

/// Flat, all-optional query record.
///
/// An absent field means "no constraint on this axis", not zero. The record
/// serializes with absent axes omitted entirely; `kid_age_group` is the one
/// field that can serialize as an explicit JSON null (kids declared absent).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Criteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_min_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_max_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_travel_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<BTreeSet<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids_selected: Option<bool>,

    /// Outer `None` = axis unanswered (omitted); `Some(None)` = explicit null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid_age_group: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<Vibe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_eur_pp: Option<u32>,
}

impl Criteria {
    /// Returns true if no axis carries a constraint.
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vibe_table_maps_the_four_known_ids() {
        assert_eq!(Vibe::from_option_id(&OptionId::new("v_calm")), Some(Vibe::Calm));
        assert_eq!(Vibe::from_option_id(&OptionId::new("v_easy")), Some(Vibe::Easy));
        assert_eq!(Vibe::from_option_id(&OptionId::new("v_sporty")), Some(Vibe::Sporty));
        assert_eq!(Vibe::from_option_id(&OptionId::new("v_action")), Some(Vibe::Action));
    }

    #[test]
    fn vibe_table_rejects_unknown_ids() {
        assert_eq!(Vibe::from_option_id(&OptionId::new("v_extreme")), None);
        assert_eq!(Vibe::from_option_id(&OptionId::new("calm")), None);
    }

    #[test]
    fn vibe_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Vibe::Sporty).unwrap(), json!("sporty"));
    }

    #[test]
    fn empty_criteria_serializes_to_empty_object() {
        let value = serde_json::to_value(Criteria::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn absent_axes_are_omitted_from_wire_form() {
        let criteria = Criteria {
            time_min_minutes: Some(30),
            time_max_minutes: Some(60),
            vibe: Some(Vibe::Calm),
            ..Criteria::default()
        };
        let value = serde_json::to_value(&criteria).unwrap();
        assert_eq!(
            value,
            json!({"time_min_minutes": 30, "time_max_minutes": 60, "vibe": "calm"})
        );
    }

    #[test]
    fn declared_absent_kids_serializes_age_group_as_null() {
        let criteria = Criteria {
            kids_selected: Some(false),
            kid_age_group: Some(None),
            ..Criteria::default()
        };
        let value = serde_json::to_value(&criteria).unwrap();
        assert_eq!(value, json!({"kids_selected": false, "kid_age_group": null}));
    }
}
