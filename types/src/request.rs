use std::collections::HashMap;

use crate::session::{Application, Session, User};

/// A single turn as delivered by the voice platform.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: String,

    /// Absent for requests that are not part of a conversation.
    pub session: Option<Session>,

    pub context: Option<Context>,

    pub request: Request,
}

impl RequestEnvelope {
    /// The calling application, taken from the session and falling back to the device context.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(Session::application_id)
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|context| context.system.application.as_ref())
                    .map(|application| application.application_id.as_str())
            })
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(Session::user_id).or_else(|| {
            self.context
                .as_ref()
                .and_then(|context| context.system.user.as_ref())
                .map(|user| user.user_id.as_str())
        })
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.session_id.as_str())
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemState,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SystemState {
    pub application: Option<Application>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch(LaunchRequest),
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded(SessionEndedRequest),
}

impl Request {
    pub fn request_id(&self) -> &str {
        match self {
            Request::Launch(request) => &request.request_id,
            Request::Intent(request) => &request.request_id,
            Request::SessionEnded(request) => &request.request_id,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,

    /// ISO 8601 time the platform sent the request.
    pub timestamp: Option<String>,

    /// ex: "en-US"
    pub locale: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
    pub intent: Intent,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Intent {
    /// ex: "ThinuIntent", "AMAZON.HelpIntent"
    pub name: String,

    /// Slots declared by the interaction model. A declared slot the user did not fill has no value.
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    pub timestamp: Option<String>,
    pub locale: Option<String>,

    /// "USER_INITIATED", "ERROR" or "EXCEEDED_MAX_REPROMPTS"
    pub reason: Option<String>,
}
