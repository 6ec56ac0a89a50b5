use std::collections::HashSet;

use thinu_types::{Request, RequestEnvelope, ResponseEnvelope};
use tracing::warn;

use crate::intent::IntentEvent;
use crate::session_state::MealReport;
use crate::speechlet::{RequestContext, Speechlet};

/// Application ids the skill answers to. Fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedApplications {
    ids: HashSet<String>,
}

impl SupportedApplications {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, application_id: &str) -> bool {
        self.ids.contains(application_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Request does not name a calling application")]
    MissingApplicationId,
    #[error("Unsupported application id: {0}")]
    UnsupportedApplication(String),
    #[error("Request has no session")]
    MissingSession,
}

/// Validates incoming envelopes and drives a `Speechlet` with them.
///
/// Requests from applications outside the allow-list are refused before the
/// speechlet sees them. An empty allow-list refuses everything.
pub struct SpeechletRequestHandler<S> {
    speechlet: S,
    supported: SupportedApplications,
}

impl<S: Speechlet> SpeechletRequestHandler<S> {
    pub fn new(speechlet: S, supported: SupportedApplications) -> Self {
        Self {
            speechlet,
            supported,
        }
    }

    pub fn handle(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, HandlerError> {
        self.verify_application(&envelope)?;

        let session_id = envelope
            .session_id()
            .ok_or(HandlerError::MissingSession)?
            .to_string();
        let ctx = RequestContext {
            request_id: envelope.request.request_id().to_string(),
            session_id,
            user_id: envelope.user_id().unwrap_or_default().to_string(),
        };

        let RequestEnvelope {
            session, request, ..
        } = envelope;
        let session = session.ok_or(HandlerError::MissingSession)?;
        let mut report = MealReport::from_attributes(&session.attributes);

        if session.new {
            self.speechlet.on_session_started(&ctx);
        }

        let response = match &request {
            Request::Launch(_) => self.speechlet.on_launch(&ctx),
            Request::Intent(intent_request) => {
                let event = IntentEvent::from(&intent_request.intent);
                self.speechlet.on_intent(&ctx, &event, &mut report)
            }
            Request::SessionEnded(ended) => {
                self.speechlet.on_session_ended(&ctx, ended.reason.clone());
                return Ok(ResponseEnvelope::empty());
            }
        };

        // Attributes the dialogue does not know about are passed through untouched.
        let mut attributes = session.attributes;
        attributes.extend(report.to_attributes());

        Ok(response.into_envelope(attributes))
    }

    fn verify_application(&self, envelope: &RequestEnvelope) -> Result<(), HandlerError> {
        let Some(application_id) = envelope.application_id() else {
            warn!(
                request_id = envelope.request.request_id(),
                "Rejecting request without an application id"
            );
            return Err(HandlerError::MissingApplicationId);
        };

        if !self.supported.contains(application_id) {
            warn!(
                request_id = envelope.request.request_id(),
                application_id, "Rejecting request from unsupported application"
            );
            return Err(HandlerError::UnsupportedApplication(application_id.to_string()));
        }

        Ok(())
    }
}
