use serde_json::{Map, Value};
use thinu_types::ResponseEnvelope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCard {
    pub title: String,
    pub content: String,
}

/// What the skill says back on one turn.
///
/// An `Ask` keeps the conversation open and is repeated as the reprompt if
/// the user stays silent. A `Tell` ends the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechletResponse {
    Ask {
        speech: String,
        reprompt: String,
        card: SimpleCard,
    },
    Tell {
        speech: String,
    },
}

impl SpeechletResponse {
    /// An ask whose card body and reprompt repeat the speech.
    pub fn ask(card_title: &str, speech: &str) -> Self {
        SpeechletResponse::Ask {
            speech: speech.to_string(),
            reprompt: speech.to_string(),
            card: SimpleCard {
                title: card_title.to_string(),
                content: speech.to_string(),
            },
        }
    }

    pub fn tell(speech: &str) -> Self {
        SpeechletResponse::Tell {
            speech: speech.to_string(),
        }
    }

    pub fn speech(&self) -> &str {
        match self {
            SpeechletResponse::Ask { speech, .. } | SpeechletResponse::Tell { speech } => speech,
        }
    }

    pub fn card(&self) -> Option<&SimpleCard> {
        match self {
            SpeechletResponse::Ask { card, .. } => Some(card),
            SpeechletResponse::Tell { .. } => None,
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, SpeechletResponse::Tell { .. })
    }

    pub fn into_envelope(self, session_attributes: Map<String, Value>) -> ResponseEnvelope {
        let builder = ResponseEnvelope::builder().with_session_attributes(session_attributes);
        match self {
            SpeechletResponse::Ask {
                speech,
                reprompt,
                card,
            } => builder
                .with_speech(&speech)
                .with_simple_card(&card.title, &card.content)
                .with_reprompt(&reprompt)
                .with_should_end_session(false)
                .build(),
            SpeechletResponse::Tell { speech } => builder
                .with_speech(&speech)
                .with_should_end_session(true)
                .build(),
        }
    }
}
