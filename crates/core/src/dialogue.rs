//! Turn scheduling for the scripted Alex/Jordan exchange.
//!
//! One scheduling pass always produces exactly two new messages, one from
//! each persona, generated sequentially because the second prompt embeds
//! the first reply. Whose turn comes first depends on who spoke last in the
//! supplied history.

use anyhow::Result;
use tracing::debug;

use crate::completion::CompletionClient;
use crate::persona::Personas;
use crate::transcript::{Message, render_transcript};

/// The two freshly generated replies from one scheduling pass.
///
/// The caller owns the transcript: appending these in conversational order
/// and resubmitting them as history is the client's job, not the server's.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnPair {
    pub alex_message: String,
    pub jordan_message: String,
}

const ALEX_STYLE: &str = "Be thoughtful and philosophical.";
const JORDAN_STYLE: &str = "Be true to your adventurous, energetic personality.";
const TONE: &str = "Keep it under 100 words and make it conversational.";

/// Generates the next two messages of the conversation.
///
/// With no history, `starter` is treated as Alex's opening line: Jordan
/// replies to it first, then Alex replies to Jordan. With history, the last
/// message's speaker decides the order: a last word from `"Alex"` means
/// Jordan replies first; any other speaker value (Jordan or otherwise)
/// means Alex replies first. Any completion failure aborts the whole pass
/// with no partial pair.
pub async fn generate_turn(
    client: &dyn CompletionClient,
    personas: &Personas,
    starter: &str,
    history: &[Message],
) -> Result<TurnPair> {
    match history.last() {
        None => {
            debug!("Scheduling first exchange from starter");
            let jordan_prompt = format!(
                "Respond to Alex's message: \"{starter}\"\n\n\
                 Your response should be authentic to your adventurous, energetic personality.\n\
                 {TONE}"
            );
            let jordan_message = client.complete(&personas.jordan, &jordan_prompt).await?;

            let alex_prompt = format!(
                "The conversation so far:\n\
                 Alex: {starter}\n\
                 Jordan: {jordan_message}\n\n\
                 Now respond to Jordan's message. {ALEX_STYLE}\n\
                 {TONE}"
            );
            let alex_message = client.complete(&personas.alex, &alex_prompt).await?;

            Ok(TurnPair {
                alex_message,
                jordan_message,
            })
        }
        Some(last) if last.speaker == "Alex" => {
            debug!(last_speaker = %last.speaker, "Scheduling Jordan to reply first");
            let previous = render_transcript(history);

            let jordan_prompt = format!(
                "The conversation so far:\n{previous}\n\n\
                 Now respond to Alex's last message: \"{}\"\n\
                 {JORDAN_STYLE}\n\
                 {TONE}",
                last.text
            );
            let jordan_message = client.complete(&personas.jordan, &jordan_prompt).await?;

            let alex_prompt = format!(
                "The conversation so far:\n{previous}\n\
                 Jordan: {jordan_message}\n\n\
                 Now respond to Jordan's message. {ALEX_STYLE}\n\
                 {TONE}"
            );
            let alex_message = client.complete(&personas.alex, &alex_prompt).await?;

            Ok(TurnPair {
                alex_message,
                jordan_message,
            })
        }
        Some(last) => {
            debug!(last_speaker = %last.speaker, "Scheduling Alex to reply first");
            let previous = render_transcript(history);

            let alex_prompt = format!(
                "The conversation so far:\n{previous}\n\n\
                 Now respond to Jordan's last message: \"{}\"\n\
                 {ALEX_STYLE}\n\
                 {TONE}",
                last.text
            );
            let alex_message = client.complete(&personas.alex, &alex_prompt).await?;

            let jordan_prompt = format!(
                "The conversation so far:\n{previous}\n\
                 Alex: {alex_message}\n\n\
                 Now respond to Alex's message. {JORDAN_STYLE}\n\
                 {TONE}"
            );
            let jordan_message = client.complete(&personas.jordan, &jordan_prompt).await?;

            Ok(TurnPair {
                alex_message,
                jordan_message,
            })
        }
    }
}
