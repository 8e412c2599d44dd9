use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta fade-on-scroll">
            <div class="container cta-inner">
                <span class="hero-badge">"Start today"</span>
                <h2 class="cta-title">"Ready to build your first site?"</h2>
                <p class="cta-description">
                    "Join thousands of developers who started their journey into the web."
                </p>
                <div class="hero-actions">
                    <a href="#steps" class="btn btn-primary">
                        "Start learning"
                    </a>
                    <a href="mailto:hello@weblearn.dev" class="btn btn-secondary">
                        "Get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
