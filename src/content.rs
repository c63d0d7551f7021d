//! Portfolio content assembled from a translation table plus
//! language-invariant data (tech stacks, external URLs, contact details).
//!
//! ERROR HANDLING
//! ==============
//! `projects` refuses to hand the view an empty displayed field. The error
//! surfaces through the page's error boundary instead of rendering a card
//! with blank headings.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::i18n::Translations;

/// Owner details shown in the hero and contact sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Wanil Parfait",
    headline: "Front-End · UX/UI",
    location: "Montréal, QC",
    email: "maiwanpar@gmail.com",
    phone: "+1 579-368-5230",
    linkedin: "https://www.linkedin.com/in/wanil-parfait-b26889108/",
    github: "https://github.com/",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with spaces and dashes stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// Tech badges in the hero profile card.
pub const HERO_STACK: &[&str] = &["Vue.js", "React", "Laravel", "Tailwind", "Figma", "WordPress"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: Vec<&'static str>,
    pub links: Vec<ProjectLink>,
    pub image: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("project {index} has an empty {field}")]
pub struct ContentError {
    pub index: usize,
    pub field: &'static str,
}

/// Section anchors in page order.
pub fn nav_items(t: &'static Translations) -> [NavItem; 5] {
    [
        NavItem { id: "projects", label: t.nav.projects },
        NavItem { id: "skills", label: t.nav.skills },
        NavItem { id: "experience", label: t.nav.experience },
        NavItem { id: "education", label: t.nav.education },
        NavItem { id: "contact", label: t.nav.contact },
    ]
}

/// Featured projects for the active language.
///
/// # Errors
///
/// Returns [`ContentError`] if a displayed field is empty.
pub fn projects(t: &'static Translations) -> Result<Vec<ProjectDescriptor>, ContentError> {
    let projects = vec![
        ProjectDescriptor {
            title: t.projects.festival.title,
            role: t.projects.festival.role,
            description: t.projects.festival.desc,
            tech: &["Laravel", "Tailwind", "MySQL", "JavaScript", "Adobe XD"],
            features: vec![
                t.features.booking,
                t.features.roles,
                t.features.dashboard,
                t.features.analytics,
                t.features.map,
            ],
            links: vec![ProjectLink { href: "https://projet-web2-e4.cpsw-fcsei.com/", label: t.common.live_demo }],
            image: None,
        },
        ProjectDescriptor {
            title: t.projects.g6.title,
            role: t.projects.g6.role,
            description: t.projects.g6.desc,
            tech: &["Laravel", "HTML", "CSS", "JavaScript", "Bootstrap", "Adobe XD"],
            features: vec![t.features.responsive, t.features.map, t.features.form, t.features.menu],
            links: vec![ProjectLink {
                href: "https://1771399.cpsw-fcsei.com/fc1771399_pub_g6/index",
                label: t.common.live_demo,
            }],
            image: None,
        },
    ];
    for (index, project) in projects.iter().enumerate() {
        validate(index, project)?;
    }
    Ok(projects)
}

fn validate(index: usize, project: &ProjectDescriptor) -> Result<(), ContentError> {
    let blank = |s: &str| s.trim().is_empty();
    let field = if blank(project.title) {
        Some("title")
    } else if blank(project.role) {
        Some("role")
    } else if blank(project.description) {
        Some("description")
    } else if project.features.iter().copied().any(blank) {
        Some("feature")
    } else if project.links.iter().any(|l| blank(l.label) || blank(l.href)) {
        Some("link")
    } else {
        None
    };
    match field {
        Some(field) => Err(ContentError { index, field }),
        None => Ok(()),
    }
}

/// Skill groups; item lists are language-invariant except the CI label.
pub fn skill_groups(t: &'static Translations) -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            label: t.skills.front,
            items: vec![
                "HTML5",
                "CSS3",
                "Tailwind",
                "Bootstrap",
                "JavaScript (ES6+)",
                "Vue.js",
                "React",
                "Figma",
                "Adobe XD",
                "WordPress",
            ],
        },
        SkillGroup { label: t.skills.back, items: vec!["PHP", "Laravel", "MySQL", "REST APIs"] },
        SkillGroup {
            label: t.skills.tools,
            items: vec!["Git", "GitHub", "Jira", "VS Code", "Netlify", t.skills.ci, "Agile/Scrum"],
        },
    ]
}
