use crate::intent::IntentEvent;
use crate::response::SpeechletResponse;
use crate::session_state::MealReport;
#[cfg(test)]
use mockall::automock;

/// Identifies the turn being handled. Used for logging and for the default person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
    pub session_id: String,
    pub user_id: String,
}

// The `Speechlet` trait is the seam between the request handler and the
// dialogue. The handler owns validation and the wire format, implementations
// only see typed turns. `TracedSpeechlet` wraps any implementation to add
// logging, and tests swap in `MockSpeechlet`.
#[cfg_attr(test, automock)]
pub trait Speechlet {
    /// Called once before the first turn of a new conversation.
    fn on_session_started(&self, ctx: &RequestContext);

    /// The user opened the skill without saying what they want.
    fn on_launch(&self, ctx: &RequestContext) -> SpeechletResponse;

    /// `report` holds the fields remembered for this conversation and may be updated in place.
    fn on_intent(
        &self,
        ctx: &RequestContext,
        event: &IntentEvent,
        report: &mut MealReport,
    ) -> SpeechletResponse;

    /// The platform closed the conversation. Nothing can be said back.
    fn on_session_ended(&self, ctx: &RequestContext, reason: Option<String>);
}
