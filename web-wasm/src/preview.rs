//! 選択画像のプレビューURL
//!
//! `URL.createObjectURL` で作ったURLをdrop時に `revokeObjectURL` で解放する

use web_sys::{File, Url};

pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn from_file(file: &File) -> Option<Self> {
        Url::create_object_url_with_blob(file).ok().map(ObjectUrl)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// 現在表示中のプレビュー。新しい画像を選ぶと古いURLは解放される
#[derive(Default)]
pub struct PreviewSlot {
    current: Option<ObjectUrl>,
}

impl PreviewSlot {
    /// 新しいURLを返す（作成できなければNone）
    pub fn replace(&mut self, file: &File) -> Option<String> {
        self.current = ObjectUrl::from_file(file);
        self.current_url()
    }

    pub fn current_url(&self) -> Option<String> {
        self.current.as_ref().map(|url| url.as_str().to_string())
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn photo(name: &str) -> File {
        File::new_with_str_sequence(&js_sys::Array::of1(&JsValue::from_str("x")), name).unwrap()
    }

    /// 解放済みのblob URLはfetchできない
    async fn is_live(url: &str) -> bool {
        let window = web_sys::window().unwrap();
        JsFuture::from(window.fetch_with_str(url)).await.is_ok()
    }

    #[wasm_bindgen_test]
    async fn test_object_url_revoked_on_drop() {
        let url = ObjectUrl::from_file(&photo("body.png")).unwrap();
        let href = url.as_str().to_string();
        assert!(href.starts_with("blob:"));
        assert!(is_live(&href).await);

        drop(url);
        assert!(!is_live(&href).await);
    }

    #[wasm_bindgen_test]
    async fn test_preview_slot_revokes_superseded_url() {
        let mut slot = PreviewSlot::default();
        assert_eq!(slot.current_url(), None);

        let first = slot.replace(&photo("first.png")).unwrap();
        assert!(is_live(&first).await);

        let second = slot.replace(&photo("second.png")).unwrap();
        assert_ne!(first, second);
        assert_eq!(slot.current_url().as_deref(), Some(second.as_str()));
        assert!(!is_live(&first).await);
        assert!(is_live(&second).await);

        drop(slot);
        assert!(!is_live(&second).await);
    }
}
