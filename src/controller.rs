//! アップロードフローコントローラ
//!
//! 状態機械（`smart_size_common::UploadFlow`）をMutexで保持し、送信を非同期に実行する。
//! ロックは `.await` をまたいで保持しない。送信中は再入を拒否する

use crate::client::{HttpRecommendationService, RecommendationService};
use crate::photo::SelectedImage;
use smart_size_common::{Category, FormInputs, RecommendationResult, SubmissionState, SubmitRejected, UploadFlow};
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// 送信が完了前に破棄された場合のメッセージ
pub const INTERRUPTED_MESSAGE: &str = "Request was interrupted";

/// submit() の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// ガードにより送信しなかった
    Rejected(SubmitRejected),
    /// 送信して完了した（Succeeded または Failed）
    Settled(SubmissionState),
}

pub struct UploadController<S> {
    service: S,
    flow: Mutex<UploadFlow<SelectedImage>>,
}

impl UploadController<HttpRecommendationService> {
    /// 設定済みのバックエンドURLから構築
    pub fn with_backend_url(backend_url: &str) -> Self {
        Self::new(HttpRecommendationService::new(backend_url))
    }
}

impl<S: RecommendationService> UploadController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            flow: Mutex::new(UploadFlow::new()),
        }
    }

    fn lock_flow(&self) -> MutexGuard<'_, UploadFlow<SelectedImage>> {
        lock(&self.flow)
    }

    /// 画像を選択し、置き換えられた画像を返す
    pub fn select_image(&self, image: SelectedImage) -> Option<SelectedImage> {
        debug!(file = %image.file_name, bytes = image.len(), "image selected");
        self.lock_flow().select_image(image)
    }

    pub fn set_height(&self, height: impl Into<String>) {
        self.lock_flow().set_height(height);
    }

    pub fn set_category(&self, category: Category) {
        self.lock_flow().set_category(category);
    }

    pub fn set_brand(&self, brand: impl Into<String>) {
        self.lock_flow().set_brand(brand);
    }

    pub fn set_consent(&self, consent: bool) {
        self.lock_flow().set_consent(consent);
    }

    pub fn inputs(&self) -> FormInputs {
        self.lock_flow().inputs().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_flow().state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_flow().is_loading()
    }

    /// 送信する
    ///
    /// 画像未選択・送信中は何もせず `Rejected` を返す。
    /// それ以外は必ずLoadingを抜けた状態で戻る
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.lock_flow().begin_submit();
        let request = match begun {
            Ok(request) => request,
            Err(rejected) => {
                debug!(%rejected, "submit ignored");
                return SubmitOutcome::Rejected(rejected);
            }
        };

        let settlement = Settlement::new(&self.flow);
        let outcome = self.service.analyze(request).await;
        let state = settlement.finish(outcome);

        match &state {
            SubmissionState::Succeeded(_) => info!("submission succeeded"),
            SubmissionState::Failed(message) => info!(%message, "submission failed"),
            _ => {}
        }
        SubmitOutcome::Settled(state)
    }
}

fn lock(flow: &Mutex<UploadFlow<SelectedImage>>) -> MutexGuard<'_, UploadFlow<SelectedImage>> {
    flow.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 送信の後始末
///
/// `finish` されずに破棄された場合（futureのdrop、panic）もLoadingを解除する
struct Settlement<'a> {
    flow: &'a Mutex<UploadFlow<SelectedImage>>,
    settled: bool,
}

impl<'a> Settlement<'a> {
    fn new(flow: &'a Mutex<UploadFlow<SelectedImage>>) -> Self {
        Self { flow, settled: false }
    }

    fn finish<E: Display>(mut self, outcome: Result<RecommendationResult, E>) -> SubmissionState {
        let mut flow = lock(self.flow);
        flow.settle(outcome);
        self.settled = true;
        flow.state().clone()
    }
}

impl Drop for Settlement<'_> {
    fn drop(&mut self) {
        if !self.settled {
            lock(self.flow).settle::<&str>(Err(INTERRUPTED_MESSAGE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SmartSizeError};
    use async_trait::async_trait;
    use smart_size_common::AnalyzeRequest;
    use std::sync::Arc;

    struct FailingService;

    #[async_trait]
    impl RecommendationService for FailingService {
        async fn analyze(&self, _request: AnalyzeRequest<SelectedImage>) -> Result<RecommendationResult> {
            Err(SmartSizeError::RequestFailed(502))
        }
    }

    struct PendingService;

    #[async_trait]
    impl RecommendationService for PendingService {
        async fn analyze(&self, _request: AnalyzeRequest<SelectedImage>) -> Result<RecommendationResult> {
            std::future::pending::<Result<RecommendationResult>>().await
        }
    }

    fn image() -> SelectedImage {
        SelectedImage {
            file_name: "body.jpg".into(),
            mime_type: "image/jpeg",
            bytes: Arc::from(&b"jpeg"[..]),
        }
    }

    #[tokio::test]
    async fn test_failure_clears_loading() {
        let controller = UploadController::new(FailingService);
        controller.select_image(image());

        let outcome = controller.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Settled(SubmissionState::Failed("Request failed: 502".into()))
        );
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_submit_clears_loading() {
        let controller = UploadController::new(PendingService);
        controller.select_image(image());

        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(20), controller.submit()).await;
        assert!(timed_out.is_err());

        assert!(!controller.is_loading());
        assert_eq!(
            controller.state().error(),
            Some(INTERRUPTED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_submit_without_image_rejected() {
        let controller = UploadController::new(FailingService);
        let outcome = controller.submit().await;
        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejected::NoImageSelected));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
