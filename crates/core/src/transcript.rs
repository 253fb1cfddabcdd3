use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single line of dialogue in a conversation transcript.
///
/// The speaker is carried as a free string and trusted as-is on input;
/// turn scheduling only ever distinguishes the literal `"Alex"` from
/// everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    #[schema(example = "Alex")]
    pub speaker: String,
    #[schema(example = "What do you think gives life meaning?")]
    pub text: String,
}

impl Message {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Renders a transcript as `speaker: text` lines, one message per line.
/// This is the exact form embedded into every prompt.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.speaker, msg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_speaker_prefixed_lines() {
        let messages = vec![
            Message::new("Alex", "Do you ever think about time?"),
            Message::new("Jordan", "Only when I'm late for a flight!"),
        ];

        assert_eq!(
            render_transcript(&messages),
            "Alex: Do you ever think about time?\nJordan: Only when I'm late for a flight!"
        );
    }

    #[test]
    fn renders_empty_transcript_as_empty_string() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn message_round_trips_through_json() {
        let msg = Message::new("Jordan", "Let's go climbing.");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"speaker":"Jordan","text":"Let's go climbing."}"#);

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
