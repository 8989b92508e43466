//! Recommendation Service 呼び出し（fetch + FormData）

use smart_size_common::{analyze_url, parse_recommendation, AnalyzeRequest, RecommendationResult, IMAGE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// `POST {backend}/analyze` を1回だけ実行する
///
/// 失敗時は1行の表示用メッセージを返す
pub async fn analyze(
    backend_url: &str,
    request: AnalyzeRequest<File>,
) -> Result<RecommendationResult, String> {
    let body = post_form(&analyze_url(backend_url), &request)
        .await
        .map_err(|e| js_error_message(&e))??;

    parse_recommendation(&body).map_err(|e| e.to_string())
}

/// 外側のErrは通信失敗、内側のErrは非2xxステータス
async fn post_form(
    url: &str,
    request: &AnalyzeRequest<File>,
) -> Result<Result<String, String>, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &request.image, &request.image.name())?;
    for field in &request.fields {
        form.append_with_str(field.name, &field.value)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let fetch_request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if let Err(message) = check_status(resp.status()) {
        return Ok(Err(message));
    }

    let text = JsFuture::from(resp.text()?).await?;
    Ok(Ok(text.as_string().unwrap_or_default()))
}

/// 2xx以外は `Request failed: <status>` とする
fn check_status(status: u16) -> Result<(), String> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(format!("Request failed: {}", status))
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_accepts_2xx() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
    }

    #[test]
    fn test_check_status_message() {
        assert_eq!(check_status(500), Err("Request failed: 500".to_string()));
        assert_eq!(check_status(422), Err("Request failed: 422".to_string()));
        assert_eq!(check_status(304), Err("Request failed: 304".to_string()));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_error_message_from_string() {
        let value = JsValue::from_str("Failed to fetch");
        assert_eq!(js_error_message(&value), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_js_error_message_from_error() {
        let value: JsValue = js_sys::Error::new("NetworkError when attempting to fetch resource.").into();
        assert_eq!(
            js_error_message(&value),
            "NetworkError when attempting to fetch resource."
        );
    }

    #[wasm_bindgen_test]
    fn test_js_error_message_fallback() {
        let message = js_error_message(&JsValue::from_f64(42.0));
        assert!(message.contains("42"));
    }

    #[wasm_bindgen_test]
    async fn test_analyze_unreachable_backend() {
        let file = web_sys::File::new_with_str_sequence(
            &js_sys::Array::of1(&JsValue::from_str("x")),
            "body.png",
        )
        .unwrap();
        let mut flow = smart_size_common::UploadFlow::new();
        flow.select_image(file);
        flow.set_height("172".to_string());
        let request = flow.begin_submit().unwrap();

        // 接続できないポートへの送信は1行のエラーメッセージになる
        let message = analyze("http://127.0.0.1:9", request).await.unwrap_err();
        assert!(!message.is_empty());
        assert!(!message.contains('\n'));
    }
}
