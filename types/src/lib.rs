pub mod request;
pub mod response;
pub mod session;

pub use request::{Intent, IntentRequest, LaunchRequest, Request, RequestEnvelope, SessionEndedRequest, Slot};
pub use response::{Card, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope};
pub use session::{Application, Session, User};

/// Envelope version understood and emitted by the skill.
pub const ENVELOPE_VERSION: &str = "1.0";
