//! Prompt that asks the model for an [`AnalysisResult`](super::AnalysisResult).
//!
//! The JSON structure described in the template must stay in sync with the
//! result model; `test_template_mentions_every_field` guards that.

pub const SYSTEM_PROMPT: &str = "You are a professional support ticket analyzer. Your role is to analyze support tickets and provide structured insights WITHOUT hallucinating or making assumptions beyond what is explicitly stated in the ticket.

IMPORTANT RULES:
1. Only analyze what is explicitly written in the ticket
2. Do NOT invent information or make assumptions about missing data
3. Do NOT categorize based on assumptions - suggest categories based ONLY on what's mentioned
4. Provide factual analysis based solely on the ticket content
5. Be conservative in your assessments

Respond with a JSON object containing your analysis.";

const TEMPLATE: &str = r#"Analyze the following support ticket and provide insights in JSON format.

TICKET SUBJECT: {subject}

TICKET DESCRIPTION:
{description}

Provide a JSON response with the following structure (ONLY include these fields):
{
    "summary": "A concise 2-3 sentence summary of the ticket issue (based ONLY on what's stated)",
    "possible_categories": [
        {
            "category": "Category name",
            "confidence": "high/medium/low",
            "reason": "Why this category based on ticket content"
        }
    ],
    "possible_automations": [
        {
            "automation": "What could be automated",
            "description": "How it would work",
            "feasibility": "high/medium/low"
        }
    ],
    "user_sentiment": {
        "overall_feeling": "positive/neutral/negative/frustrated/urgent",
        "indicators": ["List of text indicators that suggest this feeling"],
        "urgency_level": "low/medium/high/critical"
    }
}

IMPORTANT:
- summary: Extract only what's explicitly mentioned, don't infer additional problems
- possible_categories: Only suggest categories that are clearly hinted at or mentioned in the ticket
- possible_automations: Suggest automations that would directly solve or help with the stated issue
- user_sentiment: Analyze tone and language - look for keywords indicating emotion, frustration, politeness, etc.
- confidence/feasibility: Be conservative - use "low" if not clear"#;

/// A ready-to-send prompt pair
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnalysisPrompt {
    pub system: String,
    pub user: String,
}

/// Fill the analysis template with a ticket's subject and description.
///
/// The description is inserted after the subject so that a literal
/// `{subject}` inside a description is left untouched.
pub fn render_prompt(subject: &str, description: &str) -> AnalysisPrompt {
    let (head, tail) = TEMPLATE
        .split_once("{description}")
        .unwrap_or((TEMPLATE, ""));
    let user = format!("{}{}{}", head.replace("{subject}", subject), description, tail);

    AnalysisPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
