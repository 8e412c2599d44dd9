use leptos::prelude::*;

#[component]
pub fn LiveDemos() -> impl IntoView {
    let celebrate = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .alert_with_message("🎉 Nice! You just wired up an interactive button!");
        }
    };

    view! {
        <section class="demos fade-on-scroll">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Live demo"</p>
                    <h2 class="section-title">"Try it right now"</h2>
                    <p class="section-description">
                        "Interactive examples of HTML, CSS and JavaScript at work."
                    </p>
                </div>

                <div class="demos-grid">
                    <article class="demo-card">
                        <header class="demo-card-header theme-purple-pink">
                            "Button with an effect"
                        </header>
                        <div class="demo-card-body">
                            <p class="demo-hint">"Hover over the button and click:"</p>
                            <button class="demo-button" on:click=celebrate>
                                "Click me!"
                            </button>
                        </div>
                    </article>

                    <article class="demo-card">
                        <header class="demo-card-header theme-orange-red">
                            "Animated text"
                        </header>
                        <div class="demo-card-body">
                            <p class="demo-hint">"Text with a gradient:"</p>
                            <div class="demo-gradient-text">"Living gradient!"</div>
                        </div>
                    </article>

                    <article class="demo-card">
                        <header class="demo-card-header theme-blue-cyan">
                            "Floating element"
                        </header>
                        <div class="demo-card-body">
                            <p class="demo-hint">"An element with an animation:"</p>
                            <div class="demo-float-wrap">
                                <div class="demo-float-box"></div>
                            </div>
                        </div>
                    </article>
                </div>
            </div>
        </section>
    }
}
