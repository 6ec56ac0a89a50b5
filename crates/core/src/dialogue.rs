use crate::intent::{IntentEvent, SkillIntent};
use crate::response::SpeechletResponse;
use crate::session_state::{MealReport, MealState};
use crate::speechlet::{RequestContext, Speechlet};

const WELCOME: &str = "What did you eat ?";
const HELP: &str = "You can say what you have eaten!";
const GOODBYE: &str = "Goodbye";
const UNSUPPORTED: &str = "This is unsupported.  Please try something else.";
const ASK_PERSON: &str = "Who are you ?";
const ASK_MEAL: &str = "Is it breakfast, or lunch or dinner ?";
const ASK_PLACE: &str = "Where did you eat ? home or restaurant";

/// The meal report dialogue.
///
/// Stateless: everything it remembers lives in the `MealReport` the caller
/// passes in, so a replayed turn always produces the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealSpeechlet;

impl MealSpeechlet {
    pub fn new() -> Self {
        Self
    }

    fn report_meal(
        &self,
        ctx: &RequestContext,
        event: &IntentEvent,
        report: &mut MealReport,
    ) -> SpeechletResponse {
        report.merge(MealReport::from_slots(event), &ctx.user_id);

        match report.state() {
            MealState::NeedPerson => SpeechletResponse::ask("person", ASK_PERSON),
            MealState::NeedMeal => SpeechletResponse::ask("meal", ASK_MEAL),
            MealState::NeedPlace => SpeechletResponse::ask("place", ASK_PLACE),
            MealState::Done { meal } => {
                SpeechletResponse::tell(&format!("Ok. I hope you enjoyed your {meal}"))
            }
        }
    }
}

impl Speechlet for MealSpeechlet {
    fn on_session_started(&self, _ctx: &RequestContext) {}

    fn on_launch(&self, _ctx: &RequestContext) -> SpeechletResponse {
        SpeechletResponse::ask("Ok", WELCOME)
    }

    fn on_intent(
        &self,
        ctx: &RequestContext,
        event: &IntentEvent,
        report: &mut MealReport,
    ) -> SpeechletResponse {
        match event.intent() {
            SkillIntent::ReportMeal => self.report_meal(ctx, event, report),
            SkillIntent::Help => SpeechletResponse::ask("Ok", HELP),
            SkillIntent::Stop | SkillIntent::Cancel => SpeechletResponse::tell(GOODBYE),
            SkillIntent::Unsupported => SpeechletResponse::ask("Ok", UNSUPPORTED),
        }
    }

    fn on_session_ended(&self, _ctx: &RequestContext, _reason: Option<String>) {}
}
