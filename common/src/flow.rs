//! アップロードフローの状態機械
//!
//! 画像選択・フォーム入力・送信状態を保持し、遷移は純粋な関数として提供する。
//! UI（Leptos）やHTTPクライアント（reqwest）には依存しない。
//!
//! ```text
//! Idle ──submit──▶ Loading ──settle──▶ Succeeded | Failed
//!                     ▲                      │
//!                     └───────submit─────────┘
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::form::{text_fields, FormField};
use crate::types::{Category, FormInputs, RecommendationResult};

/// 送信状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded(RecommendationResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// リクエスト完了時の遷移先
    pub fn settled<E: Display>(outcome: Result<RecommendationResult, E>) -> Self {
        match outcome {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(e) => SubmissionState::Failed(e.to_string()),
        }
    }
}

/// 送信がガードで弾かれた理由（エラー表示はしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("no image selected")]
    NoImageSelected,

    #[error("a request is already in flight")]
    RequestInFlight,
}

/// 送信内容（画像 + テキストフィールド）
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest<I> {
    pub image: I,
    pub fields: Vec<FormField>,
}

/// アップロードフロー
///
/// `I` は選択画像の表現（CLIではファイル内容、Webでは `web_sys::File`）
#[derive(Debug, Clone)]
pub struct UploadFlow<I> {
    image: Option<I>,
    inputs: FormInputs,
    state: SubmissionState,
}

impl<I> Default for UploadFlow<I> {
    fn default() -> Self {
        Self {
            image: None,
            inputs: FormInputs::default(),
            state: SubmissionState::Idle,
        }
    }
}

impl<I: Clone> UploadFlow<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を選択し、置き換えられた画像を返す
    ///
    /// 呼び出し側は戻り値のプレビュー資源を解放すること
    pub fn select_image(&mut self, image: I) -> Option<I> {
        self.image.replace(image)
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.inputs.height = height.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.inputs.category = category;
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.inputs.brand = brand.into();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.inputs.consent = consent;
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// 送信ボタンが押せるか
    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    fn check_submit(&self) -> Result<&I, SubmitRejected> {
        if self.state.is_loading() {
            return Err(SubmitRejected::RequestInFlight);
        }
        self.image.as_ref().ok_or(SubmitRejected::NoImageSelected)
    }

    /// 送信開始: Loadingへ遷移し、前回の結果を破棄して送信内容を返す
    ///
    /// 画像未選択または送信中の場合は状態を変えずに拒否する
    pub fn begin_submit(&mut self) -> Result<AnalyzeRequest<I>, SubmitRejected> {
        let image = self.check_submit()?.clone();
        let fields = text_fields(&self.inputs);
        self.state = SubmissionState::Loading;
        Ok(AnalyzeRequest { image, fields })
    }

    /// リクエスト完了を反映する
    ///
    /// Loading中でなければ何もせず `false` を返す
    pub fn settle<E: Display>(&mut self, outcome: Result<RecommendationResult, E>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = SubmissionState::settled(outcome);
        true
    }
}
