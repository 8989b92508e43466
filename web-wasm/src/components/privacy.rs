use leptos::prelude::*;

#[component]
pub fn PrivacySection() -> impl IntoView {
    view! {
        <section class="privacy">
            <h2>"Privacy"</h2>
            <p class="text-muted">
                "We follow privacy by design. Images never leave your session nor get stored on our servers. With explicit consent, we may save only derived measurements and the recommendation to improve your next visit. You can request deletion anytime."
            </p>
        </section>
    }
}
