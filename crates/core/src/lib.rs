pub mod dialogue;
pub mod handler;
pub mod intent;
pub mod response;
pub mod session_state;
pub mod speechlet;
pub mod traced;

pub use dialogue::MealSpeechlet;
pub use handler::{HandlerError, SpeechletRequestHandler, SupportedApplications};
pub use intent::{IntentEvent, SkillIntent};
pub use response::{SimpleCard, SpeechletResponse};
pub use session_state::{MealReport, MealState};
pub use speechlet::{RequestContext, Speechlet};
pub use traced::TracedSpeechlet;
