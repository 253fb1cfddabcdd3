//! Best-effort structured critique of a finished transcript.
//!
//! The model is asked for four labeled sections; whatever comes back is
//! split on blank lines and matched against the literal headings. Parsing
//! never fails: a field the reply did not cover falls back to its
//! documented default, so every report is fully populated.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::completion::CompletionClient;
use crate::persona::Persona;
use crate::transcript::{Message, render_transcript};

/// The analyst's verdict on a conversation. Every field always holds a
/// value; see the module docs for the fallback guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub chemistry: String,
    pub connection_points: Vec<String>,
    pub potential_issues: Vec<String>,
    pub overall_assessment: String,
}

const CHEMISTRY_HEADING: &str = "Chemistry:";
const CONNECTION_POINTS_HEADING: &str = "Connection Points:";
const POTENTIAL_ISSUES_HEADING: &str = "Potential Issues:";
const OVERALL_ASSESSMENT_HEADING: &str = "Overall Assessment:";

const DEFAULT_CHEMISTRY: &str =
    "Alex and Jordan show an interesting dynamic with complementary conversation styles.";
const DEFAULT_CONNECTION_POINTS: [&str; 3] = [
    "Shared interest in meaningful experiences",
    "Different perspectives that could lead to mutual growth",
    "Respectful engagement with each other's ideas",
];
const DEFAULT_POTENTIAL_ISSUES: [&str; 2] = [
    "Different approaches to finding meaning",
    "Varying energy levels and communication styles",
];
const DEFAULT_OVERALL_ASSESSMENT: &str = "This match shows potential for a balanced relationship \
     where each person brings different but complementary strengths to the conversation.";

fn analysis_prompt(transcript: &str) -> String {
    format!(
        "Analyze the following conversation between Alex and Jordan:\n\n\
         {transcript}\n\n\
         Based on this conversation, provide:\n\
         1. An assessment of their conversational chemistry\n\
         2. 3-4 potential connection points between them\n\
         3. 2-3 potential issues or incompatibilities\n\
         4. An overall assessment of their compatibility (2-3 sentences)\n\n\
         Begin each section with its heading: \"Chemistry:\", \"Connection Points:\", \
         \"Potential Issues:\", \"Overall Assessment:\".\n\n\
         Your analysis should be balanced, insightful, and focused on interpersonal dynamics."
    )
}

/// Splits a list section into entries: one per non-empty line, with a
/// leading `- ` bullet stripped when present.
fn list_items(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("- ").unwrap_or(line).trim().to_string())
        .collect()
}

/// Extracts the four report fields from the model's free-form reply.
///
/// Blocks are blank-line separated; headings must match as exact prefixes,
/// including case and spacing. Anything unmatched is ignored, and a field
/// left empty takes its default. This function cannot fail.
pub fn parse_analysis(raw: &str) -> AnalysisReport {
    let mut chemistry = String::new();
    let mut connection_points = Vec::new();
    let mut potential_issues = Vec::new();
    let mut overall_assessment = String::new();

    for block in raw.split("\n\n") {
        if let Some(rest) = block.strip_prefix(CHEMISTRY_HEADING) {
            chemistry = rest.trim().to_string();
        } else if let Some(rest) = block.strip_prefix(CONNECTION_POINTS_HEADING) {
            connection_points = list_items(rest);
        } else if let Some(rest) = block.strip_prefix(POTENTIAL_ISSUES_HEADING) {
            potential_issues = list_items(rest);
        } else if let Some(rest) = block.strip_prefix(OVERALL_ASSESSMENT_HEADING) {
            overall_assessment = rest.trim().to_string();
        }
    }

    if chemistry.is_empty() {
        chemistry = DEFAULT_CHEMISTRY.to_string();
    }
    if connection_points.is_empty() {
        connection_points = DEFAULT_CONNECTION_POINTS.map(String::from).to_vec();
    }
    if potential_issues.is_empty() {
        potential_issues = DEFAULT_POTENTIAL_ISSUES.map(String::from).to_vec();
    }
    if overall_assessment.is_empty() {
        overall_assessment = DEFAULT_OVERALL_ASSESSMENT.to_string();
    }

    AnalysisReport {
        chemistry,
        connection_points,
        potential_issues,
        overall_assessment,
    }
}

/// Asks the model to critique the transcript and parses the reply.
///
/// One completion call under an ad-hoc analyst persona. A completion
/// failure aborts; a malformed reply does not.
pub async fn analyze(
    client: &dyn CompletionClient,
    messages: &[Message],
) -> Result<AnalysisReport> {
    let transcript = render_transcript(messages);
    let analyst = Persona::analyst();

    debug!(message_count = messages.len(), "Requesting transcript analysis");
    let raw = client
        .complete(&analyst, &analysis_prompt(&transcript))
        .await?;

    Ok(parse_analysis(&raw))
}
