//! 解析結果パネル

use leptos::prelude::*;
use smart_size_common::{RecommendationResult, ResultLines};

#[component]
pub fn ResultPanel(result: RecommendationResult) -> impl IntoView {
    let lines = ResultLines::new(&result);

    view! {
        <div class="result">
            <div class="result-size">{lines.size}</div>
            <div class="result-confidence">{lines.confidence}</div>
            <div class="result-detail">{lines.metric}</div>
            <div class="result-detail">{lines.range}</div>
            <div class="result-detail">{lines.privacy}</div>
        </div>
    }
}

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="result">
            <p class="error">{message}</p>
        </div>
    }
}
