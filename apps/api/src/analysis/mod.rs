// Compensation analysis: CSV intake, the model call, and the derived views.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analyzer;
pub mod box_plot;
pub mod csv_parser;
pub mod dashboard;
pub mod export;
pub mod handlers;
pub mod prompts;
pub mod session;
