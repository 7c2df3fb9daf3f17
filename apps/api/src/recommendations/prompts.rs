// All LLM prompt constants for the Recommendations module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, LEGITIMACY_INSTRUCTION};
use crate::models::recommendation::RecommendationCategory;

/// Sampling temperature for award lookups. Low, to keep the model close to
/// well-known programs.
pub const AWARDS_TEMPERATURE: f64 = 0.3;

/// System prompt template for award lookups.
/// Replace: {json_only}, {categories}, {legitimacy}
const AWARDS_SYSTEM_TEMPLATE: &str = "You are an assistant that helps underserved people in the United States \
    discover scholarships, education awards, housing support, and food/nutrition \
    assistance programs. {json_only} \
    For each item, include: name, category, description, link, why_it_matches. \
    Categories must be one of: {categories}. \
    Prioritize: Indigenous/Native heritage, low-income households, first-generation \
    students, rural families, recent immigrants, and single-parent households when relevant. \
    {legitimacy}";

/// User prompt template for award lookups.
/// Replace: {profile_json}, {categories}
const AWARDS_PROMPT_TEMPLATE: &str = r#"Given this user profile:

{profile_json}

Return a JSON object with the following structure:

{
  "awards": [
    {
      "name": "string",
      "category": "one of {categories}",
      "description": "short, clear description (max 60 words)",
      "link": "direct URL to learn/apply",
      "why_it_matches": "1–2 sentences tying the program to the user's background"
    }
  ]
}

Include 8–15 high-quality items. Focus on relevance over quantity.
If the user is in a particular state, try to include that state's programs when possible.
If a well-known national program applies, include it too."#;

/// `['scholarship','grant',...]`, the form the model sees in both prompts.
fn category_list() -> String {
    let quoted: Vec<String> = RecommendationCategory::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect();
    format!("[{}]", quoted.join(","))
}

pub fn awards_system_prompt() -> String {
    AWARDS_SYSTEM_TEMPLATE
        .replace("{json_only}", JSON_ONLY_SYSTEM)
        .replace("{categories}", &category_list())
        .replace("{legitimacy}", LEGITIMACY_INSTRUCTION)
}

pub fn awards_user_prompt(profile_json: &str) -> String {
    AWARDS_PROMPT_TEMPLATE
        .replace("{categories}", &category_list())
        .replace("{profile_json}", profile_json)
}
