use tracing::{debug, info, info_span};

use crate::intent::IntentEvent;
use crate::response::SpeechletResponse;
use crate::session_state::MealReport;
use crate::speechlet::{RequestContext, Speechlet};

/// Logs every entry point of the wrapped speechlet and forwards the call unchanged.
#[derive(Debug, Clone)]
pub struct TracedSpeechlet<S> {
    inner: S,
}

impl<S: Speechlet> TracedSpeechlet<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Speechlet> Speechlet for TracedSpeechlet<S> {
    fn on_session_started(&self, ctx: &RequestContext) {
        info!(
            request_id = %ctx.request_id,
            session_id = %ctx.session_id,
            "onSessionStarted"
        );
        self.inner.on_session_started(ctx);
    }

    fn on_launch(&self, ctx: &RequestContext) -> SpeechletResponse {
        let span = info_span!("on_launch", request_id = %ctx.request_id, session_id = %ctx.session_id);
        let _guard = span.enter();

        info!("onLaunch");
        let response = self.inner.on_launch(ctx);
        debug!(speech = response.speech(), "launch answered");
        response
    }

    fn on_intent(
        &self,
        ctx: &RequestContext,
        event: &IntentEvent,
        report: &mut MealReport,
    ) -> SpeechletResponse {
        let span = info_span!(
            "on_intent",
            request_id = %ctx.request_id,
            session_id = %ctx.session_id,
            intent = %event.name,
        );
        let _guard = span.enter();

        info!(slots = ?event.slots, "onIntent");
        let response = self.inner.on_intent(ctx, event, report);
        debug!(
            person = ?report.person,
            meal = ?report.meal,
            food = ?report.food,
            place = ?report.place,
            time = ?report.time,
            "fields after turn"
        );
        info!(
            ends_session = response.ends_session(),
            speech = response.speech(),
            "intent answered"
        );
        response
    }

    fn on_session_ended(&self, ctx: &RequestContext, reason: Option<String>) {
        info!(
            request_id = %ctx.request_id,
            session_id = %ctx.session_id,
            reason = ?reason,
            "onSessionEnded"
        );
        self.inner.on_session_ended(ctx, reason);
    }
}
