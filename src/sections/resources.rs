use crate::data::RESOURCES;
use leptos::prelude::*;

#[component]
pub fn ResourcesSection() -> impl IntoView {
    view! {
        <section class="resources fade-on-scroll">
            <div class="container">
                <div class="resources-box">
                    <div class="resources-banner">
                        <h2 class="resources-title">"Web development fundamentals"</h2>
                        <p class="resources-subtitle">
                            "Everything you need to build modern websites."
                        </p>
                    </div>
                    <div class="resources-grid">
                        {RESOURCES
                            .iter()
                            .map(|resource| {
                                view! {
                                    <div class="resource-item">
                                        <div class=format!(
                                            "resource-icon {}",
                                            resource.theme,
                                        )>{resource.icon}</div>
                                        <div>
                                            <h3 class="resource-title">{resource.title}</h3>
                                            <p class="resource-description">
                                                {resource.description}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
