// Static page content — the whole payload is literal data baked in at
// compile time and handed to the section components explicitly.

/// Identifier for one of the three fixed code samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleId {
    Html,
    Css,
    Js,
}

impl SampleId {
    pub const ALL: [SampleId; 3] = [SampleId::Html, SampleId::Css, SampleId::Js];

    pub fn as_str(self) -> &'static str {
        match self {
            SampleId::Html => "html",
            SampleId::Css => "css",
            SampleId::Js => "js",
        }
    }

    /// Parse an id string; anything outside the closed set is rejected.
    pub fn parse(s: &str) -> Option<SampleId> {
        match s {
            "html" => Some(SampleId::Html),
            "css" => Some(SampleId::Css),
            "js" => Some(SampleId::Js),
            _ => None,
        }
    }
}

/// One static code snippet shown in the tabbed examples section.
pub struct CodeSample {
    pub id: SampleId,
    pub label: &'static str,
    pub source: &'static str,
}

pub static CODE_SAMPLES: [CodeSample; 3] = [
    CodeSample {
        id: SampleId::Html,
        label: "HTML",
        source: r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>My first website</title>
</head>
<body>
  <h1>Hello, world!</h1>
  <p>This is my first website</p>
</body>
</html>"#,
    },
    CodeSample {
        id: SampleId::Css,
        label: "CSS",
        source: r#".container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 20px;
}

.button {
  background: linear-gradient(135deg, #8B5CF6, #D946EF);
  color: white;
  padding: 12px 24px;
  border-radius: 8px;
  border: none;
  cursor: pointer;
  transition: transform 0.2s;
}

.button:hover {
  transform: translateY(-2px);
}"#,
    },
    CodeSample {
        id: SampleId::Js,
        label: "JavaScript",
        source: r##"// An interactive button
const button = document.querySelector('.button');

button.addEventListener('click', () => {
  alert('Hi! You clicked the button');
});

// Smooth scrolling
document.querySelectorAll('a[href^="#"]').forEach(anchor => {
  anchor.addEventListener('click', function (e) {
    e.preventDefault();
    const target = document.querySelector(this.getAttribute('href'));
    target.scrollIntoView({ behavior: 'smooth' });
  });
});"##,
    },
];

/// Look up a sample by id. Total over the closed set.
pub fn sample(id: SampleId) -> &'static CodeSample {
    CODE_SAMPLES
        .iter()
        .find(|s| s.id == id)
        .unwrap_or(&CODE_SAMPLES[0])
}

/// One entry in the four-step "how to build a site" guide.
pub struct Step {
    pub ordinal: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub theme: &'static str,
}

pub static STEPS: [Step; 4] = [
    Step {
        ordinal: 1,
        title: "HTML structure",
        description: "Lay the foundation of your site with HTML tags",
        icon: "</>",
        theme: "theme-purple-pink",
    },
    Step {
        ordinal: 2,
        title: "CSS styling",
        description: "Add beautiful styles and animations",
        icon: "{#}",
        theme: "theme-pink-orange",
    },
    Step {
        ordinal: 3,
        title: "JavaScript logic",
        description: "Make the site interactive",
        icon: "(f)",
        theme: "theme-orange-blue",
    },
    Step {
        ordinal: 4,
        title: "Publishing",
        description: "Put your site on the internet",
        icon: "[^]",
        theme: "theme-blue-purple",
    },
];

/// One card in the practice-project showcase.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub tags: &'static [&'static str],
    pub theme: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Personal portfolio",
        description: "A modern business-card site with animations",
        difficulty: "Beginner",
        tags: &["HTML", "CSS", "JavaScript"],
        theme: "theme-purple-pink",
    },
    Project {
        title: "Landing page",
        description: "A vivid product landing page",
        difficulty: "Intermediate",
        tags: &["HTML", "CSS", "JS", "Forms"],
        theme: "theme-pink-orange",
    },
    Project {
        title: "Interactive gallery",
        description: "An image gallery with modal windows",
        difficulty: "Advanced",
        tags: &["HTML", "CSS", "JS", "API"],
        theme: "theme-blue-purple",
    },
];

/// One row in the web-dev fundamentals panel.
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub theme: &'static str,
}

pub static RESOURCES: [Resource; 6] = [
    Resource {
        title: "HTML",
        description: "Page structure and markup, semantic tags",
        icon: "</>",
        theme: "theme-purple",
    },
    Resource {
        title: "CSS",
        description: "Styling, animations, responsive design",
        icon: "{#}",
        theme: "theme-pink",
    },
    Resource {
        title: "JavaScript",
        description: "Interactivity, DOM manipulation, events",
        icon: "(f)",
        theme: "theme-orange",
    },
    Resource {
        title: "Responsive design",
        description: "Sites for every device and screen",
        icon: "[::]",
        theme: "theme-blue",
    },
    Resource {
        title: "Publishing",
        description: "Hosting, domains, deploying projects",
        icon: "(@)",
        theme: "theme-green",
    },
    Resource {
        title: "Optimization",
        description: "Load speed, SEO, performance",
        icon: "[^]",
        theme: "theme-purple",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_ids_are_distinct_and_parse_round_trips() {
        for id in SampleId::ALL {
            assert_eq!(SampleId::parse(id.as_str()), Some(id));
        }
        assert_eq!(SampleId::parse("python"), None);
        assert_eq!(SampleId::parse(""), None);
        assert_eq!(SampleId::parse("HTML"), None);
    }

    #[test]
    fn sample_lookup_is_total_over_the_closed_set() {
        for id in SampleId::ALL {
            let s = sample(id);
            assert_eq!(s.id, id);
            assert!(!s.source.is_empty());
        }
    }

    #[test]
    fn steps_are_ordered_one_through_four() {
        assert_eq!(STEPS.len(), 4);
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.ordinal as usize, i + 1);
        }
    }

    #[test]
    fn projects_and_resources_have_fixed_lengths() {
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(RESOURCES.len(), 6);
        for p in &PROJECTS {
            assert!(!p.tags.is_empty());
        }
    }
}
