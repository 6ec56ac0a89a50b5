use serde_json::{Map, Value};

use crate::intent::IntentEvent;

/// Slot and session attribute names, in the order they are resolved.
pub const PERSON: &str = "person";
pub const MEAL: &str = "meal";
pub const FOOD: &str = "food";
pub const PLACE: &str = "place";
pub const TIME: &str = "time";

/// Everything the user has told us about one meal so far.
///
/// This is the typed view of the session attributes. It is decoded from the
/// attributes at the start of a turn and written back at the end of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealReport {
    pub person: Option<String>,
    pub meal: Option<String>,
    pub food: Option<String>,
    pub place: Option<String>,
    pub time: Option<String>,
}

/// Which gating field the conversation is waiting for.
///
/// Never stored. It is derived from the report on every turn.
#[derive(Debug, PartialEq, Eq)]
pub enum MealState<'a> {
    NeedPerson,
    NeedMeal,
    NeedPlace,
    Done { meal: &'a str },
}

impl MealReport {
    /// Reads the five fields out of the slots of a meal report intent.
    pub fn from_slots(event: &IntentEvent) -> Self {
        let slot = |name: &str| event.slot(name).map(str::to_string);
        Self {
            person: slot(PERSON),
            meal: slot(MEAL),
            food: slot(FOOD),
            place: slot(PLACE),
            time: slot(TIME),
        }
    }

    /// Reads the known fields from session attributes.
    ///
    /// Only string values count. A known field holding anything else is
    /// treated as unset, so a bad attribute can never fail a turn.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Self {
        let field = |name: &str| {
            attributes
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            person: field(PERSON),
            meal: field(MEAL),
            food: field(FOOD),
            place: field(PLACE),
            time: field(TIME),
        }
    }

    /// Encodes the known fields as session attributes. Unset fields are left out.
    pub fn to_attributes(&self) -> Map<String, Value> {
        self.fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), Value::String(v.to_string()))))
            .collect()
    }

    pub fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (PERSON, self.person.as_deref()),
            (MEAL, self.meal.as_deref()),
            (FOOD, self.food.as_deref()),
            (PLACE, self.place.as_deref()),
            (TIME, self.time.as_deref()),
        ]
    }

    /// Folds freshly supplied values into the stored ones.
    ///
    /// A supplied non-empty value replaces the stored one, anything else keeps
    /// what was stored. A person nobody named falls back to `user_id`.
    pub fn merge(&mut self, supplied: MealReport, user_id: &str) {
        fill(&mut self.person, supplied.person);
        if self.person.is_none() {
            self.person = Some(user_id.to_string());
        }
        fill(&mut self.meal, supplied.meal);
        fill(&mut self.food, supplied.food);
        fill(&mut self.place, supplied.place);
        fill(&mut self.time, supplied.time);
    }

    /// Food and time are collected but never gate the conversation.
    pub fn state(&self) -> MealState<'_> {
        if self.person.is_none() {
            MealState::NeedPerson
        } else if let Some(meal) = self.meal.as_deref() {
            if self.place.is_none() {
                MealState::NeedPlace
            } else {
                MealState::Done { meal }
            }
        } else {
            MealState::NeedMeal
        }
    }
}

// An empty slot value counts as not supplied: it neither replaces a stored
// value nor blocks the user id fallback for the person.
fn fill(stored: &mut Option<String>, supplied: Option<String>) {
    if let Some(value) = supplied.filter(|value| !value.is_empty()) {
        *stored = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(meal: Option<&str>, place: Option<&str>) -> MealReport {
        MealReport {
            person: Some("jitu".to_string()),
            meal: meal.map(str::to_string),
            place: place.map(str::to_string),
            ..MealReport::default()
        }
    }

    #[test]
    fn test_merge_defaults_person_to_user_id() {
        let mut stored = MealReport::default();

        stored.merge(MealReport::default(), "amzn1.ask.account.jitu");

        assert_eq!(stored.person.as_deref(), Some("amzn1.ask.account.jitu"));
        assert_eq!(stored.state(), MealState::NeedMeal);
    }

    #[test]
    fn test_merge_prefers_stored_person_over_user_id() {
        let mut stored = report(None, None);

        stored.merge(MealReport::default(), "amzn1.ask.account.other");

        assert_eq!(stored.person.as_deref(), Some("jitu"));
    }

    #[test]
    fn test_merge_overwrites_with_supplied_values() {
        let mut stored = report(Some("breakfast"), None);
        let supplied = MealReport {
            person: Some("asha".to_string()),
            meal: Some("dinner".to_string()),
            food: Some("dosa".to_string()),
            ..MealReport::default()
        };

        stored.merge(supplied, "user");

        assert_eq!(stored.person.as_deref(), Some("asha"));
        assert_eq!(stored.meal.as_deref(), Some("dinner"));
        assert_eq!(stored.food.as_deref(), Some("dosa"));
        assert!(stored.place.is_none());
    }

    #[test]
    fn test_merge_never_clears_a_known_field() {
        let mut stored = MealReport {
            person: Some("jitu".to_string()),
            meal: Some("lunch".to_string()),
            food: Some("rice".to_string()),
            place: Some("home".to_string()),
            time: Some("noon".to_string()),
        };
        let before = stored.clone();
        let supplied = MealReport {
            meal: Some(String::new()),
            ..MealReport::default()
        };

        stored.merge(supplied, "user");

        assert_eq!(stored, before);
    }

    #[test]
    fn test_state_gates_on_person_meal_place_only() {
        assert_eq!(MealReport::default().state(), MealState::NeedPerson);
        assert_eq!(report(None, Some("home")).state(), MealState::NeedMeal);
        assert_eq!(report(Some("lunch"), None).state(), MealState::NeedPlace);
        // No food and no time, still done.
        assert_eq!(
            report(Some("lunch"), Some("home")).state(),
            MealState::Done { meal: "lunch" }
        );
    }

    #[test]
    fn test_attributes_ignore_unknown_keys_and_skip_unset_fields() {
        let attributes = json!({ "meal": "lunch", "visits": 3 });
        let Value::Object(attributes) = attributes else {
            unreachable!()
        };

        let decoded = MealReport::from_attributes(&attributes);

        assert_eq!(decoded.meal.as_deref(), Some("lunch"));
        assert_eq!(Value::Object(decoded.to_attributes()), json!({ "meal": "lunch" }));
    }

    #[test]
    fn test_attributes_with_wrong_types_read_as_unset() {
        let Value::Object(attributes) = json!({ "meal": 42, "place": null, "food": ["rice"], "time": "noon" })
        else {
            unreachable!()
        };

        let decoded = MealReport::from_attributes(&attributes);

        assert_eq!(
            decoded,
            MealReport {
                time: Some("noon".to_string()),
                ..MealReport::default()
            }
        );
    }

    #[test]
    fn test_empty_person_slot_falls_back_to_user_id() {
        let mut stored = MealReport::default();
        let supplied = MealReport {
            person: Some(String::new()),
            ..MealReport::default()
        };

        stored.merge(supplied, "amzn1.ask.account.jitu");

        assert_eq!(stored.person.as_deref(), Some("amzn1.ask.account.jitu"));
    }
}
