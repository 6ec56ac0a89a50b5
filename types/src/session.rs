use serde_json::{Map, Value};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a conversation.
    #[serde(default)]
    pub new: bool,

    /// Platform identifier of the conversation, stable across its turns.
    pub session_id: String,

    /// The skill the request was addressed to.
    pub application: Option<Application>,

    /// Attributes returned by the skill on the previous turn, empty on the first one.
    #[serde(default)]
    pub attributes: Map<String, Value>,

    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// ex: "amzn1.ask.skill.8b837fd9-b936-407a-a730-dea97915822d"
    pub application_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable per-account identifier assigned by the platform.
    pub user_id: String,

    /// Present once the user linked an account. Carried through, never inspected.
    pub access_token: Option<String>,
}

impl Session {
    pub fn application_id(&self) -> Option<&str> {
        self.application
            .as_ref()
            .map(|application| application.application_id.as_str())
    }

    pub fn user_id(&self) -> &str {
        &self.user.user_id
    }
}
