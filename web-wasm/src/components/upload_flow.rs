//! アップロードフォームコンポーネント
//!
//! 状態は `smart_size_common::UploadFlow` に集約し、ここでは入力イベントを遷移に渡すだけ

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use smart_size_common::{submit_label, Category, SubmissionState, UploadFlow as Flow};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::api;
use crate::components::result_panel::{ErrorPanel, ResultPanel};
use crate::preview::PreviewSlot;

#[component]
pub fn UploadFlow(backend_url: String) -> impl IntoView {
    let flow = RwSignal::new_local(Flow::<File>::new());
    // 破棄時はStoredValueごとdropされ、URLも解放される
    let preview = StoredValue::new_local(PreviewSlot::default());
    let (preview_src, set_preview_src) = signal(None::<String>);
    let backend_url = StoredValue::new(backend_url);

    let on_pick = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // 旧URLはここでrevokeされる
        let src = preview.try_update_value(|slot| slot.replace(&file)).flatten();
        set_preview_src.set(src);
        flow.update(|f| {
            f.select_image(file);
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(request) = flow.try_update(|f| f.begin_submit().ok()).flatten() else {
            return;
        };
        let url = backend_url.get_value();

        spawn_local(async move {
            let outcome = api::analyze(&url, request).await;
            flow.try_update(|f| {
                f.settle(outcome);
            });
        });
    };

    let category_options = Category::ALL
        .iter()
        .map(|&category| {
            view! {
                <option
                    value=category.key()
                    selected=move || flow.with(|f| f.inputs().category == category)
                >
                    {category.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="upload-flow">
            <form class="upload-form" on:submit=on_submit>
                <div class="card">
                    <label class="card-label">"Full\u{2011}body photo"</label>
                    <input
                        type="file"
                        accept="image/*"
                        capture="environment"
                        on:change=on_pick
                    />
                    <Show when=move || preview_src.get().is_some()>
                        <img
                            class="preview"
                            alt="preview"
                            src=move || preview_src.get().unwrap_or_default()
                        />
                    </Show>
                    <p class="text-muted">
                        "Photos are processed in memory and not stored. Enable consent below to save derived measurements."
                    </p>
                </div>

                <div class="card-grid">
                    <div class="card">
                        <label class="card-label" for="height">"Your height (cm)"</label>
                        <input
                            id="height"
                            type="number"
                            inputmode="decimal"
                            placeholder="e.g. 172"
                            prop:value=move || flow.with(|f| f.inputs().height.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                flow.update(|f| f.set_height(value));
                            }
                        />
                    </div>

                    <div class="card">
                        <label class="card-label" for="category">"Category"</label>
                        <select
                            id="category"
                            on:change=move |ev| {
                                if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                                    flow.update(|f| f.set_category(category));
                                }
                            }
                        >
                            {category_options}
                        </select>
                    </div>
                </div>

                <div class="card">
                    <label class="card-label" for="brand">"Brand (optional)"</label>
                    <input
                        id="brand"
                        placeholder="generic"
                        prop:value=move || flow.with(|f| f.inputs().brand.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            flow.update(|f| f.set_brand(value));
                        }
                    />
                </div>

                <label class="card consent">
                    <input
                        type="checkbox"
                        prop:checked=move || flow.with(|f| f.inputs().consent)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            flow.update(|f| f.set_consent(checked));
                        }
                    />
                    <span>
                        "I agree to the processing of this photo solely to compute measurements and receive size recommendations. Save derived measurements to improve future suggestions. You can request deletion at any time."
                    </span>
                </label>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !flow.with(|f| f.can_submit())
                >
                    {move || flow.with(|f| submit_label(f.state()))}
                </button>
            </form>

            {move || match flow.with(|f| f.state().clone()) {
                SubmissionState::Succeeded(result) => view! { <ResultPanel result=result /> }.into_any(),
                SubmissionState::Failed(message) => view! { <ErrorPanel message=message /> }.into_any(),
                SubmissionState::Idle | SubmissionState::Loading => ().into_any(),
            }}
        </div>
    }
}
