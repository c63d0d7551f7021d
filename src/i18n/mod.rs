//! Static display-string tables, one per supported language.
//!
//! DESIGN
//! ======
//! Every table is the same typed struct, so a key present in one language is
//! present in all of them by construction. `select` is an exhaustive match
//! over [`Language`]; adding a language without a table does not compile.
//! The presentation layer takes one `&'static Translations` per render pass
//! and never mixes tables.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod en;
mod fr;
mod ja;

use serde::Serialize;

use crate::state::preferences::Language;

#[derive(Debug, Serialize)]
pub struct Translations {
    pub common: Common,
    pub nav: Nav,
    pub hero: Hero,
    pub cta: Cta,
    pub sections: Sections,
    pub features: Features,
    pub projects: ProjectTexts,
    pub skills: SkillLabels,
    pub exp: ExperienceText,
    pub edu: EducationText,
    pub resume: ResumeText,
    pub footer: FooterText,
    pub chrome: Chrome,
}

#[derive(Debug, Serialize)]
pub struct Common {
    pub live_demo: &'static str,
    pub intern: &'static str,
    pub work_together: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Nav {
    pub projects: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
    pub pitch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Cta {
    pub view_projects: &'static str,
    pub contact: &'static str,
    pub resume: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Sections {
    pub projects: &'static str,
    pub projects_sub: &'static str,
    pub skills: &'static str,
    pub skills_sub: &'static str,
    pub experience: &'static str,
    pub experience_sub: &'static str,
    pub education: &'static str,
    pub education_sub: &'static str,
    pub contact: &'static str,
    pub contact_sub: &'static str,
    pub resume: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Features {
    pub booking: &'static str,
    pub roles: &'static str,
    pub dashboard: &'static str,
    pub analytics: &'static str,
    pub map: &'static str,
    pub responsive: &'static str,
    pub form: &'static str,
    pub menu: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectTexts {
    pub festival: ProjectText,
    pub g6: ProjectText,
}

#[derive(Debug, Serialize)]
pub struct ProjectText {
    pub title: &'static str,
    pub role: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillLabels {
    pub front: &'static str,
    pub back: &'static str,
    pub tools: &'static str,
    pub ci: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExperienceText {
    pub period: &'static str,
    pub item1: &'static str,
    pub item2: &'static str,
    pub item3: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EducationText {
    pub program: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResumeText {
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterText {
    pub made: &'static str,
}

/// Interface strings outside the portfolio copy.
#[derive(Debug, Serialize)]
pub struct Chrome {
    pub site_title: &'static str,
    pub toggle_theme: &'static str,
    pub language_picker: &'static str,
    pub crash_title: &'static str,
    pub crash_message: &'static str,
    pub reload: &'static str,
}

/// Table for `language`.
pub fn select(language: Language) -> &'static Translations {
    match language {
        Language::Fr => &fr::FR,
        Language::En => &en::EN,
        Language::Ja => &ja::JA,
    }
}

/// Resolve a dotted semantic key such as `"nav.projects"` in the table for
/// `language`. Returns `None` for unknown paths or non-leaf keys.
pub fn lookup(language: Language, path: &str) -> Option<String> {
    let table = match serde_json::to_value(select(language)) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("translation table for {language} failed to serialize: {e}");
            return None;
        }
    };
    let node = path
        .split('.')
        .try_fold(&table, |node, segment| node.get(segment))?;
    node.as_str().map(str::to_owned)
}
