use crate::data::STEPS;
use leptos::prelude::*;

#[component]
pub fn StepsSection() -> impl IntoView {
    view! {
        <section id="steps" class="steps fade-on-scroll">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Step-by-step guide"</p>
                    <h2 class="section-title">"How do you build a site?"</h2>
                    <p class="section-description">
                        "Follow four simple steps and ship your first project."
                    </p>
                </div>
                <div class="steps-grid">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <article class="step-card">
                                    <div class=format!("step-accent {}", step.theme)></div>
                                    <div class=format!("step-icon {}", step.theme)>
                                        {step.icon}
                                    </div>
                                    <div class="step-number">
                                        {format!("{:02}", step.ordinal)}
                                    </div>
                                    <h3 class="step-title">{step.title}</h3>
                                    <p class="step-description">{step.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
