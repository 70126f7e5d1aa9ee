use serde::Serialize;

use crate::data::types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, Datasets, HiringRecord,
    InterviewRecord, LoaRecord,
};
use crate::error::AppError;

/// The datasets sent along with every question. Always the full generated
/// collections, never the filtered subset shown on screen.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext<'a> {
    pub hiring: &'a [HiringRecord],
    pub attrition: &'a [AttritionRecord],
    pub loa: &'a [LoaRecord],
    pub candidate_pool: &'a [CandidatePoolRecord],
    pub interview: &'a [InterviewRecord],
    pub candidate_profile: &'a [CandidateProfileRecord],
}

impl<'a> ChatContext<'a> {
    pub fn from_datasets(datasets: &'a Datasets) -> Self {
        Self {
            hiring: &datasets.hiring,
            attrition: &datasets.attrition,
            loa: &datasets.loa,
            candidate_pool: &datasets.candidate_pool,
            interview: &datasets.interview,
            candidate_profile: &datasets.candidate_profile,
        }
    }
}

/// Builds the user message: analyst instructions, the datasets as JSON,
/// the question, then the expected answer layout.
pub fn compose_prompt(context: &ChatContext<'_>, question: &str) -> Result<String, AppError> {
    let hiring = serde_json::to_string(context.hiring)?;
    let attrition = serde_json::to_string(context.attrition)?;
    let loa = serde_json::to_string(context.loa)?;
    let pool = serde_json::to_string(context.candidate_pool)?;
    let interview = serde_json::to_string(context.interview)?;
    let profile = serde_json::to_string(context.candidate_profile)?;

    let data_len = hiring.len()
        + attrition.len()
        + loa.len()
        + pool.len()
        + interview.len()
        + profile.len();
    let mut prompt = String::with_capacity(1024 + data_len);

    prompt.push_str(
        "You are an advanced HR analytics assistant focused on providing insights and \
         recommendations from the following dataset. Analyze the data and answer the user's \
         question, highlighting actionable insights and trends.\n\n",
    );

    prompt.push_str("**Dataset Overview:**\n");
    prompt.push_str(&format!("- **Hiring Data:** {}\n", hiring));
    prompt.push_str(&format!("- **Attrition Data:** {}\n", attrition));
    prompt.push_str(&format!("- **LOA (Leave of Absence) Data:** {}\n", loa));
    prompt.push_str(&format!("- **Candidate Pool Data:** {}\n", pool));
    prompt.push_str(&format!("- **Interview Data:** {}\n", interview));
    prompt.push_str(&format!("- **Candidate Profile Data:** {}\n\n", profile));

    prompt.push_str(
        "Consider the following when generating your response:\n\
         1. **Identify Key Issues**: which trends in attrition, LOA, candidate pools or \
         interviews explain delays or inefficiencies in hiring?\n\
         2. **Provide Actionable Insights**: which steps would improve the hiring process?\n\
         3. **Be Concise and Clear**: stay focused on the question.\n\n",
    );

    prompt.push_str(&format!("**User's Question:** {}\n\n", question.trim()));

    prompt.push_str(
        "Back every conclusion with the data points that inform it.\n\n\
         Format your response in this structure:\n\
         1. Key Findings (bullet points)\n\
         2. Analysis (2-3 short paragraphs)\n\
         3. Recommendations (numbered list)\n\n\
         Use markdown formatting for headers and lists.",
    );

    Ok(prompt)
}
