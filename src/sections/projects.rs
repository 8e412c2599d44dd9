use crate::data::PROJECTS;
use leptos::prelude::*;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="projects fade-on-scroll">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Ready-made projects"</p>
                    <h2 class="section-title">"Practice assignments"</h2>
                    <p class="section-description">
                        "Build real projects and grow your portfolio."
                    </p>
                </div>

                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <div class=format!("project-cover {}", project.theme)>
                                        <span class="project-cover-icon">"</>"</span>
                                    </div>
                                    <div class="project-body">
                                        <div class="project-meta">
                                            <span class="project-difficulty">
                                                {project.difficulty}
                                            </span>
                                            <span class="project-star">"★"</span>
                                        </div>
                                        <h3 class="project-title">{project.title}</h3>
                                        <p class="project-description">{project.description}</p>
                                        <div class="project-tags">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="project-tag">{*tag}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a href="#steps" class="btn btn-primary project-start">
                                            "Start the project →"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
