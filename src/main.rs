// WebLearn Landing Page — Leptos 0.8 Edition

mod clipboard;
mod data;
mod reveal;
mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // One shared observer for every .fade-on-scroll section. Teardown on
    // unmount stops all further marking.
    Effect::new(move || {
        print_console_banner();
        reveal::install();
    });
    on_cleanup(reveal::teardown);

    view! {
        <main>
            <Hero />
            <StepsSection />
            <CodeExamples />
            <LiveDemos />
            <ProjectsSection />
            <ResourcesSection />
            <CallToAction />
        </main>
        <Footer />
    }
}

/// Short greeting for anyone who opens the console
fn print_console_banner() {
    if web_sys::window().is_some() {
        web_sys::console::log_2(
            &JsValue::from_str("%cWebLearn — learn to build the web, one step at a time."),
            &JsValue::from_str("color: #a855f7; font-weight: bold;"),
        );
        web_sys::console::log_2(
            &JsValue::from_str("%cCurious how this page works? It's Rust + Leptos, compiled to WASM."),
            &JsValue::from_str("color: #888;"),
        );
    }
}
