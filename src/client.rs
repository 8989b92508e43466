//! Recommendation Service クライアント
//!
//! `POST {backend}/analyze` へmultipartで1回だけ送信する。
//! リトライ・タイムアウト指定は行わない（reqwestの既定に従う）

use crate::error::{Result, SmartSizeError};
use crate::photo::SelectedImage;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use smart_size_common::{analyze_url, parse_recommendation, AnalyzeRequest, RecommendationResult, IMAGE_FIELD};
use tracing::{debug, info, warn};

#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn analyze(&self, request: AnalyzeRequest<SelectedImage>) -> Result<RecommendationResult>;
}

pub struct HttpRecommendationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecommendationService {
    pub fn new(backend_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url)
    }

    pub fn with_client(client: reqwest::Client, backend_url: &str) -> Self {
        Self {
            client,
            endpoint: analyze_url(backend_url),
        }
    }
}

/// 画像パート + テキストフィールドのmultipartフォーム
pub fn build_form(request: AnalyzeRequest<SelectedImage>) -> Result<Form> {
    let AnalyzeRequest { image, fields } = request;

    let part = Part::bytes(image.bytes.to_vec())
        .file_name(image.file_name)
        .mime_str(image.mime_type)?;

    let form = fields
        .into_iter()
        .fold(Form::new().part(IMAGE_FIELD, part), |form, field| {
            form.text(field.name, field.value)
        });

    Ok(form)
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn analyze(&self, request: AnalyzeRequest<SelectedImage>) -> Result<RecommendationResult> {
        debug!(
            endpoint = %self.endpoint,
            file = %request.image.file_name,
            bytes = request.image.len(),
            fields = ?request.fields,
            "sending analyze request"
        );

        let form = build_form(request)?;
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "analyze request failed");
            return Err(SmartSizeError::RequestFailed(status.as_u16()));
        }

        let body = response.text().await?;
        let result = parse_recommendation(&body)?;
        info!(
            size = %result.recommendation.suggested_size,
            confidence = result.recommendation.confidence,
            "recommendation received"
        );
        Ok(result)
    }
}
