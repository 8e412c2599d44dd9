// Landing page sections

mod code_examples;
mod cta;
mod demos;
mod footer;
mod hero;
mod projects;
mod resources;
mod steps;

pub use code_examples::CodeExamples;
pub use cta::CallToAction;
pub use demos::LiveDemos;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::ProjectsSection;
pub use resources::ResourcesSection;
pub use steps::StepsSection;
