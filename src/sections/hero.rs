use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-inner">
                <div class="hero-badge-wrap">
                    <span class="hero-badge">"🚀 Learn to build websites"</span>
                </div>
                <h1 class="hero-title">
                    "Create your first"
                    <span class="hero-title-accent">"website"</span>
                </h1>
                <p class="hero-description">
                    "A step-by-step guide for beginner developers. "
                    "From HTML basics to interactive projects."
                </p>
                <div class="hero-actions">
                    <a href="#steps" class="btn btn-primary">
                        "Start learning"
                    </a>
                    <a href="#examples" class="btn btn-secondary">
                        "See the examples"
                    </a>
                </div>
            </div>
            <div class="hero-fade"></div>
        </section>
    }
}
