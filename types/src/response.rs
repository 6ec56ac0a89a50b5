use serde_json::{Map, Value};

use crate::ENVELOPE_VERSION;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,

    /// Attributes the platform hands back on the next turn of the same conversation.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,

    pub response: ResponseBody,
}

impl ResponseEnvelope {
    pub fn builder() -> ResponseEnvelopeBuilder {
        ResponseEnvelopeBuilder::new()
    }

    /// Acknowledgement for requests the platform does not expect speech for.
    pub fn empty() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    /// Spoken if the user says nothing after an ask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain_text(text: &str) -> Self {
        OutputSpeech::PlainText {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

impl Card {
    pub fn simple(title: &str, content: &str) -> Self {
        Card::Simple {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Card::Simple { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

pub struct ResponseEnvelopeBuilder {
    envelope: ResponseEnvelope,
}

impl Default for ResponseEnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEnvelopeBuilder {
    pub fn new() -> Self {
        Self {
            envelope: ResponseEnvelope {
                version: ENVELOPE_VERSION.to_string(),
                session_attributes: Map::new(),
                response: ResponseBody::default(),
            },
        }
    }

    pub fn with_session_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.envelope.session_attributes = attributes;
        self
    }

    pub fn with_speech(mut self, text: &str) -> Self {
        self.envelope.response.output_speech = Some(OutputSpeech::plain_text(text));
        self
    }

    pub fn with_simple_card(mut self, title: &str, content: &str) -> Self {
        self.envelope.response.card = Some(Card::simple(title, content));
        self
    }

    pub fn with_reprompt(mut self, text: &str) -> Self {
        self.envelope.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::plain_text(text),
        });
        self
    }

    pub fn with_should_end_session(mut self, should_end_session: bool) -> Self {
        self.envelope.response.should_end_session = Some(should_end_session);
        self
    }

    pub fn build(self) -> ResponseEnvelope {
        self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ask_response_wire_shape() {
        let mut attributes = Map::new();
        attributes.insert("meal".to_string(), json!("lunch"));

        let envelope = ResponseEnvelope::builder()
            .with_session_attributes(attributes)
            .with_speech("Where did you eat ? home or restaurant")
            .with_simple_card("place", "Where did you eat ? home or restaurant")
            .with_reprompt("Where did you eat ? home or restaurant")
            .with_should_end_session(false)
            .build();

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "sessionAttributes": { "meal": "lunch" },
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Where did you eat ? home or restaurant" },
                    "card": { "type": "Simple", "title": "place", "content": "Where did you eat ? home or restaurant" },
                    "reprompt": { "outputSpeech": { "type": "PlainText", "text": "Where did you eat ? home or restaurant" } },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_empty_response_omits_everything_optional() {
        let value = serde_json::to_value(ResponseEnvelope::empty()).unwrap();

        assert_eq!(value, json!({ "version": "1.0", "response": {} }));
    }
}
