use leptos::prelude::*;

struct LinkColumn {
    heading: &'static str,
    items: &'static [&'static str],
}

static LINK_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        heading: "Learning",
        items: &["HTML basics", "CSS styles", "JavaScript", "Projects"],
    },
    LinkColumn {
        heading: "Resources",
        items: &["Documentation", "Code examples", "Video lessons", "FAQ"],
    },
    LinkColumn {
        heading: "Contact",
        items: &["About", "Get in touch", "Community", "Support"],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">"WebLearn"</h3>
                        <p class="footer-tagline">
                            "Web development education for beginners"
                        </p>
                    </div>
                    {LINK_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="footer-heading">{column.heading}</h4>
                                    <ul class="footer-list">
                                        {column
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! { <li class="footer-link">{*item}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="footer-copyright">
                    "© 2024 WebLearn. Made with ❤ for beginner developers"
                </p>
            </div>
        </footer>
    }
}
