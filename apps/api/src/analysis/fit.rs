//! Fit analysis — job description in, structured fit report out.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::FIT_ANALYSIS_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::extract::parse_json;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::Message;
use crate::pipeline::sanitize::{ensure_max_chars, require_text};
use crate::pipeline::{Endpoint, Pipeline};
use crate::profile::PROFILE;

pub const MAX_JOB_DESCRIPTION_CHARS: usize = 15_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFitRequest {
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLabel {
    #[serde(rename = "Strong Match")]
    Strong,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Weak Match")]
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Strong,
    Partial,
    Gap,
}

/// A requirement the profile covers fully or partly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementMatch {
    pub requirement: String,
    pub evidence: String,
    pub match_level: MatchLevel,
}

/// A requirement the profile does not cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub requirement: String,
    pub note: String,
    pub match_level: MatchLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTag {
    pub skill: String,
    #[serde(rename = "match")]
    pub level: MatchLevel,
}

/// Full fit report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitAnalysis {
    pub overall_fit: u32, // 0 – 100
    pub fit_label: FitLabel,
    pub headline: String,
    pub strength_areas: Vec<RequirementMatch>,
    pub partial_areas: Vec<RequirementMatch>,
    pub gaps: Vec<Gap>,
    pub skill_tags: Vec<SkillTag>,
    pub summary: String,
    pub call_to_action: String,
}

pub struct FitAnalysisPipeline;

impl Pipeline for FitAnalysisPipeline {
    const ENDPOINT: Endpoint = Endpoint::FitAnalysis;
    const MAX_TOKENS: u32 = 1000;

    type Request = AnalyzeFitRequest;
    type Input = String;
    type Output = FitAnalysis;

    fn validate(request: AnalyzeFitRequest) -> Result<String, AppError> {
        let job_description =
            require_text(request.job_description, "Job description is required")?;
        ensure_max_chars(
            &job_description,
            MAX_JOB_DESCRIPTION_CHARS,
            "Job description too long. Please limit to 15,000 characters.",
        )?;
        Ok(job_description)
    }

    fn system_prompt(_job_description: &String) -> Option<String> {
        None
    }

    fn messages(job_description: String) -> Vec<Message> {
        vec![Message::user(build_fit_prompt(&job_description))]
    }

    fn normalize(text: &str) -> anyhow::Result<FitAnalysis> {
        let analysis: FitAnalysis = parse_json(text)?;
        ensure!(
            analysis.overall_fit <= 100,
            "overallFit out of range: {}",
            analysis.overall_fit
        );
        Ok(analysis)
    }
}

pub fn build_fit_prompt(job_description: &str) -> String {
    FIT_ANALYSIS_PROMPT_TEMPLATE
        .replace("{profile}", PROFILE)
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const FIT_JSON: &str = r#"{
        "overallFit": 86,
        "fitLabel": "Strong Match",
        "headline": "Virginia has already built the team this role describes.",
        "strengthAreas": [
            {"requirement": "Lead ML teams", "evidence": "15+ person global team", "matchLevel": "strong"}
        ],
        "partialAreas": [
            {"requirement": "Healthcare AI", "evidence": "Medtronic background", "matchLevel": "partial"}
        ],
        "gaps": [
            {"requirement": "PhD", "note": "Engineering background instead", "matchLevel": "gap"}
        ],
        "skillTags": [
            {"skill": "LLMs", "match": "strong"},
            {"skill": "Kubernetes", "match": "gap"}
        ],
        "summary": "Strong leadership fit.",
        "callToAction": "Book a discovery call."
    }"#;

    fn request(jd: Option<&str>) -> AnalyzeFitRequest {
        AnalyzeFitRequest {
            job_description: jd.map(str::to_string),
        }
    }

    #[test]
    fn test_fit_analysis_deserializes_documented_shape() {
        let analysis = FitAnalysisPipeline::normalize(FIT_JSON).unwrap();
        assert_eq!(analysis.overall_fit, 86);
        assert_eq!(analysis.fit_label, FitLabel::Strong);
        assert_eq!(analysis.strength_areas[0].match_level, MatchLevel::Strong);
        assert_eq!(analysis.gaps[0].note, "Engineering background instead");
        assert_eq!(analysis.skill_tags[1].level, MatchLevel::Gap);
    }

    #[test]
    fn test_fit_analysis_serializes_camel_case() {
        let analysis = FitAnalysisPipeline::normalize(FIT_JSON).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["overallFit"], 86);
        assert_eq!(value["fitLabel"], "Strong Match");
        assert_eq!(value["skillTags"][0]["match"], "strong");
        assert_eq!(value["callToAction"], "Book a discovery call.");
    }

    #[test]
    fn test_normalize_accepts_fenced_reply() {
        let fenced = format!("```json\n{FIT_JSON}\n```");
        assert_eq!(
            FitAnalysisPipeline::normalize(&fenced).unwrap().overall_fit,
            86
        );
    }

    #[test]
    fn test_normalize_skips_citation_brackets_before_object() {
        let reply = format!("Ranked [1]:\n{FIT_JSON}\nSee [2] for sources.");
        let analysis = FitAnalysisPipeline::normalize(&reply).unwrap();
        assert_eq!(analysis.overall_fit, 86);
        assert_eq!(analysis.fit_label, FitLabel::Strong);
    }

    #[test]
    fn test_normalize_rejects_out_of_range_score() {
        let bad = FIT_JSON.replace("\"overallFit\": 86", "\"overallFit\": 140");
        assert!(FitAnalysisPipeline::normalize(&bad).is_err());
    }

    #[test]
    fn test_normalize_rejects_unknown_label() {
        let bad = FIT_JSON.replace("Strong Match", "Perfect Match");
        assert!(FitAnalysisPipeline::normalize(&bad).is_err());
    }

    #[test]
    fn test_normalize_rejects_prose() {
        assert!(FitAnalysisPipeline::normalize("I think she is a great fit!").is_err());
    }

    #[test]
    fn test_validate_requires_job_description() {
        for jd in [None, Some(""), Some("   \n ")] {
            let err = FitAnalysisPipeline::validate(request(jd)).unwrap_err();
            assert_eq!(err.public_message(), "Job description is required");
        }
    }

    #[test]
    fn test_validate_length_boundary() {
        let at_limit = "a".repeat(MAX_JOB_DESCRIPTION_CHARS);
        assert!(FitAnalysisPipeline::validate(request(Some(&at_limit))).is_ok());

        let over = "a".repeat(MAX_JOB_DESCRIPTION_CHARS + 1);
        let err = FitAnalysisPipeline::validate(request(Some(&over))).unwrap_err();
        assert_eq!(
            err.public_message(),
            "Job description too long. Please limit to 15,000 characters."
        );
    }

    #[test]
    fn test_prompt_embeds_profile_and_job_description() {
        let prompt = build_fit_prompt("Head of AI at a robotics startup");
        assert!(prompt.contains(PROFILE));
        assert!(prompt.contains("JOB DESCRIPTION:\nHead of AI at a robotics startup"));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
        assert!(!prompt.contains("{profile}"));
        assert!(!prompt.contains("{json_only_instruction}"));
    }

    #[test]
    fn test_prompt_does_not_expand_placeholders_inside_job_description() {
        let prompt = build_fit_prompt("literal {profile} token");
        assert!(prompt.contains("literal {profile} token"));
    }
}
