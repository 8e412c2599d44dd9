use crate::clipboard::{self, CopyConfirmation, CONFIRMATION_WINDOW_MS};
use crate::data::{SampleId, CODE_SAMPLES};
use leptos::prelude::*;

#[component]
pub fn CodeExamples() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(SampleId::ALL[0]);
    let (confirmation, set_confirmation) = signal(CopyConfirmation::new());

    let copy_sample = move |id: SampleId| {
        clipboard::write_sample_to_clipboard(id);
        let mut token = None;
        set_confirmation.update(|c| token = Some(c.mark_copied(id)));
        if let Some(token) = token {
            set_timeout(
                move || {
                    set_confirmation.update(|c| {
                        c.clear_if_current(token);
                    });
                },
                std::time::Duration::from_millis(CONFIRMATION_WINDOW_MS),
            );
        }
    };

    view! {
        <section id="examples" class="code-examples fade-on-scroll">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Code examples"</p>
                    <h2 class="section-title">"Learn by doing"</h2>
                    <p class="section-description">
                        "Copy the code and start experimenting right now."
                    </p>
                </div>

                <div class="examples-box">
                    <div class="example-tabs">
                        {CODE_SAMPLES
                            .iter()
                            .map(|sample| {
                                let id = sample.id;
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab.get() == id {
                                                "example-tab active"
                                            } else {
                                                "example-tab"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(id)
                                    >
                                        {sample.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    {CODE_SAMPLES
                        .iter()
                        .map(|sample| {
                            let id = sample.id;
                            view! {
                                <Show when=move || active_tab.get() == id>
                                    <div class="example-panel">
                                        <div class="example-panel-header">
                                            <span class="example-panel-title">
                                                {format!("{} example", sample.label)}
                                            </span>
                                            <button
                                                class="example-copy-btn"
                                                on:click=move |_| copy_sample(id)
                                            >
                                                {move || {
                                                    if confirmation
                                                        .with(|c| c.last_copied() == Some(id))
                                                    {
                                                        "Copied!"
                                                    } else {
                                                        "Copy"
                                                    }
                                                }}
                                            </button>
                                        </div>
                                        <pre class="example-code">
                                            <code>{sample.source}</code>
                                        </pre>
                                    </div>
                                </Show>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
