//! メインアプリケーションコンポーネント（ページ外枠）

use leptos::prelude::*;
use smart_size_common::DEFAULT_BACKEND_URL;
use crate::components::{
    header::{Footer, Header},
    privacy::PrivacySection,
    upload_flow::UploadFlow,
};

/// ビルド時の `SMART_SIZE_BACKEND_URL`（未設定ならローカル開発用）
const BACKEND_URL: &str = match option_env!("SMART_SIZE_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Header />

            <main class="main">
                <section class="hero">
                    <div class="hero-text">
                        <h1>"Find your perfect size with one photo"</h1>
                        <p class="text-muted">
                            "Upload a full\u{2011}body picture, add your height for accuracy, and get precise clothing sizes instantly. Photos are processed in memory \u{2014} nothing is stored without consent."
                        </p>
                        <ul class="features">
                            <li>"Mobile\u{2011}friendly capture"</li>
                            <li>"GDPR/CCPA compliant by design"</li>
                            <li>"Works across categories and brands"</li>
                        </ul>
                    </div>

                    <UploadFlow backend_url=BACKEND_URL.to_string() />
                </section>

                <PrivacySection />
            </main>

            <Footer />
        </div>
    }
}
