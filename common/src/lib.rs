//! Smart Size Common Library
//!
//! CLIとWeb(WASM)で共有される型・送信契約・状態機械

pub mod types;
pub mod error;
pub mod form;
pub mod parser;
pub mod flow;
pub mod render;

pub use types::{Category, FormInputs, Privacy, Recommendation, RecommendationDetails, RecommendationResult, DEFAULT_BRAND};
pub use error::{Error, Result};
pub use form::{analyze_url, text_fields, FormField, DEFAULT_BACKEND_URL, IMAGE_FIELD};
pub use parser::parse_recommendation;
pub use flow::{AnalyzeRequest, SubmissionState, SubmitRejected, UploadFlow};
pub use render::{submit_label, ResultLines};
