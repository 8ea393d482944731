//! Request/response contract of the remote article analysis service.
//!
//! The service itself (an LLM endpoint) is called by the host application.
//! This module owns what crosses the boundary: the prompt built around the
//! extracted text, the JSON schema the response must follow, and validation
//! of the payload that comes back.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Error, Result};

/// Overall tone of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Structured analysis of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Concise summary of the main points.
    pub summary: String,
    /// Drivers, teams, circuits, personnel and technical terms.
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    /// One-sentence justification of `sentiment`.
    pub sentiment_reason: String,
}

/// Prompt sent to the analysis service for `article_text`.
#[must_use]
pub fn analysis_prompt(article_text: &str) -> String {
    format!(
        "Analyze the following Formula 1 news article. Extract the key information and present it in a structured JSON format.\n\
         \n\
         Provide:\n\
         1. A concise summary of the article, capturing the main points.\n\
         2. An array of keywords or \"hot topics\": drivers, teams, circuits, key personnel and significant technical terms mentioned.\n\
         3. The overall sentiment of the article, one of 'Positive', 'Neutral' or 'Negative'.\n\
         4. A brief, one-sentence explanation of that sentiment.\n\
         \n\
         Article text:\n\
         ---\n\
         {article_text}\n\
         ---\n\
         \n\
         Respond ONLY with a valid JSON object that follows the provided schema, with no text, markdown or code fences around it."
    )
}

/// JSON schema the service is asked to follow.
#[must_use]
pub fn response_schema() -> Value {
    let sentiments: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A concise summary of the article."
            },
            "keywords": {
                "type": "array",
                "items": { "type": "string", "description": "A keyword or hot topic." },
                "description": "Keywords or hot topics from the article (drivers, teams, circuits, etc.)."
            },
            "sentiment": {
                "type": "string",
                "enum": sentiments,
                "description": "The overall sentiment of the article."
            },
            "sentimentReason": {
                "type": "string",
                "description": "A brief, one-sentence explanation for the sentiment classification."
            }
        },
        "required": ["summary", "keywords", "sentiment", "sentimentReason"]
    })
}

/// Parse and validate a raw response body from the analysis service.
pub fn parse_analysis_response(raw: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult = serde_json::from_str(raw.trim())
        .map_err(|err| Error::InvalidAnalysisResponse(err.to_string()))?;

    if result.summary.trim().is_empty() {
        return Err(Error::InvalidAnalysisResponse("empty summary".to_string()));
    }
    if result.sentiment_reason.trim().is_empty() {
        return Err(Error::InvalidAnalysisResponse("empty sentimentReason".to_string()));
    }

    Ok(result)
}
