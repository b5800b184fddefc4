//! Prompt construction for scope evaluation.
//!
//! Pure string building, no I/O. The system directive is identical across all
//! calls; the user payload interpolates the request fields verbatim between
//! section markers the model is instructed to parse.

use super::types::EvaluationRequest;

/// Fixed system directive embedding the task, decision rules, and the exact
/// output schema.
pub const SYSTEM_PROMPT: &str = r#"You are an expert technical project manager interpreting software contracts and scope documents.

Your task is to:
1. Compare a FEATURE REQUEST against a PROJECT SCOPE (contract/requirements).
2. Determine scope alignment: in_scope, out_of_scope, or partial.
3. If in_scope: state clearly that the feature is covered; tasks and price are optional (price 0 or included).
4. If out_of_scope or partial: explain why, list missing scope items, and provide a full estimation (task breakdown, hours, total price using the given hourly rate).

RULES:
- Base your decision ONLY on the contract/scope text and the feature description.
- Be conservative: when in doubt between in_scope and partial, choose partial.
- Round hours to 0.5.
- Currency: EUR. Use the freelancer's hourly rate for price.
- Output ONLY valid JSON, no markdown or extra text.

You MUST respond with exactly this JSON structure (no other keys, no comments):
{
  "scope_status": "in_scope" | "out_of_scope" | "partial",
  "scope_reasoning": "string explaining your decision",
  "missing_scope_items": ["item1", "item2"],
  "tasks": [
    { "name": "string", "hours": number, "skills": ["string"] }
  ],
  "total_hours": number,
  "hourly_rate": number,
  "total_price": number,
  "confidence": "low" | "medium" | "high",
  "assumptions": ["string"]
}

When scope_status is "in_scope", set total_hours and total_price to 0 and tasks can be empty or minimal.
When out_of_scope or partial, fill all fields."#;

/// Build the user payload for one evaluation request.
///
/// Plain interpolation only; the delimited sections are the contract with the
/// model, no escaping is performed.
pub fn build_user_message(request: &EvaluationRequest) -> String {
    let skills = if request.skills.is_empty() {
        "Not specified".to_string()
    } else {
        request.skills.join(", ")
    };

    format!(
        "PROJECT SCOPE (contract/requirements):\n\
         ---\n\
         {}\n\
         ---\n\
         \n\
         FEATURE REQUEST:\n\
         ---\n\
         {}\n\
         ---\n\
         \n\
         FREELANCER:\n\
         - Hourly rate (EUR): {}\n\
         - Skills: {}\n\
         \n\
         Respond with ONLY the JSON object, no other text.",
        request.project_scope, request.feature_description, request.hourly_rate, skills
    )
}
