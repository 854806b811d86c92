// LLM prompt constants for the fit-analysis endpoint.

/// Fit-analysis prompt template.
/// Replace: {profile}, {job_description}, {json_only_instruction}
pub const FIT_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an AI assistant for AI Tech Magic, an AI consulting firm led by Virginia. Analyze this job description against Virginia's professional profile and determine fit.

VIRGINIA'S PROFILE:
{profile}

JOB DESCRIPTION:
{job_description}

{json_only_instruction}
{
  "overallFit": <number 0-100>,
  "fitLabel": "<Strong Match|Good Match|Moderate Match|Weak Match>",
  "headline": "<one compelling sentence about why Virginia fits>",
  "strengthAreas": [{"requirement": "<req>", "evidence": "<Virginia's experience>", "matchLevel": "strong"}],
  "partialAreas": [{"requirement": "<req>", "evidence": "<related experience>", "matchLevel": "partial"}],
  "gaps": [{"requirement": "<req>", "note": "<brief note>", "matchLevel": "gap"}],
  "skillTags": [{"skill": "<n>", "match": "strong|partial|gap"}],
  "summary": "<2-3 sentence fit summary>",
  "callToAction": "<suggested next step>"
}"#;
