// Fit analysis: scores a job description against the static profile.
// Strict normalization — a reply that is not a valid FitAnalysis fails the request.

pub mod fit;
pub mod handlers;
pub mod prompts;
