use std::collections::HashMap;

/// Intent name of the meal report, as declared in the interaction model.
pub const THINU_INTENT: &str = "ThinuIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";

/// One recognised intent with its slots, as handed to the dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentEvent {
    pub name: String,
    pub slots: HashMap<String, Option<String>>,
}

impl IntentEvent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: &str, value: &str) -> Self {
        self.slots.insert(name.to_string(), Some(value.to_string()));
        self
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|value| value.as_deref())
    }

    pub fn intent(&self) -> SkillIntent {
        SkillIntent::from_name(&self.name)
    }
}

impl From<&thinu_types::Intent> for IntentEvent {
    fn from(intent: &thinu_types::Intent) -> Self {
        Self {
            name: intent.name.clone(),
            slots: intent
                .slots
                .iter()
                .map(|(name, slot)| (name.clone(), slot.value.clone()))
                .collect(),
        }
    }
}

/// The intents the skill tells apart. Everything else is `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIntent {
    ReportMeal,
    Help,
    Stop,
    Cancel,
    Unsupported,
}

impl SkillIntent {
    pub fn from_name(name: &str) -> Self {
        match name {
            THINU_INTENT => SkillIntent::ReportMeal,
            HELP_INTENT => SkillIntent::Help,
            STOP_INTENT => SkillIntent::Stop,
            CANCEL_INTENT => SkillIntent::Cancel,
            _ => SkillIntent::Unsupported,
        }
    }
}
