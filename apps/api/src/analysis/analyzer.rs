//! Compensation analysis — the narrow seam in front of the external model.
//!
//! `AppState` holds an `Arc<dyn CompensationAnalyzer>`. Production uses
//! `LlmAnalyzer`; tests swap in stubs so the rest of the pipeline stays
//! deterministic.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::analysis::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_OUTPUT_RULES;
use crate::llm_client::LlmClient;
use crate::models::employee::{AnalysisResult, Employee};

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to get analysis from AI. Please check the data format or try again later.";

/// Every analysis failure, whatever the cause, renders as the same generic
/// message. The cause is kept for logging only.
#[derive(Debug, Error)]
#[error("{}", ANALYSIS_FAILED_MESSAGE)]
pub struct AnalysisError {
    #[source]
    cause: anyhow::Error,
}

impl AnalysisError {
    pub fn new(cause: impl Into<anyhow::Error>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

/// Records in, analysis out. Implement this to swap the backend without
/// touching the handlers.
#[async_trait]
pub trait CompensationAnalyzer: Send + Sync {
    async fn analyze(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError>;
}

/// Analyzer backed by the generative-AI completion service.
///
/// The returned numbers are trusted verbatim: salary bounds ordering and
/// distribution totals are not re-checked.
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl CompensationAnalyzer for LlmAnalyzer {
    async fn analyze(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError> {
        let result = async {
            let prompt = build_analysis_prompt(employees)?;
            let result: AnalysisResult = self.0.call_json(&prompt).await?;
            Ok::<_, anyhow::Error>(result)
        }
        .await;

        match result {
            Ok(result) => {
                info!(
                    employees = result.analyzed_employees.len(),
                    equity_score = result.equity_score,
                    "Compensation analysis received"
                );
                Ok(result)
            }
            Err(e) => {
                error!("Error analyzing compensation data: {e:#}");
                Err(AnalysisError::new(e))
            }
        }
    }
}

/// Builds the single analysis prompt with the records embedded as pretty JSON.
pub fn build_analysis_prompt(employees: &[Employee]) -> Result<String, serde_json::Error> {
    let employees_json = serde_json::to_string_pretty(employees)?;
    Ok(ANALYSIS_PROMPT_TEMPLATE
        .replace("{json_output_rules}", JSON_OUTPUT_RULES)
        .replace("{employees_json}", &employees_json))
}
