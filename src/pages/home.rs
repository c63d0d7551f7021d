//! The single scrolling portfolio page.

use leptos::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::sections::{ContactSection, EducationSection, ExperienceSection, ProjectsSection, SkillsSection};
use crate::state::context::Preferences;

#[component]
pub fn HomePage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-slate-50 to-white dark:from-slate-950 dark:to-slate-900 text-slate-900 dark:text-slate-100">
            <div class="pointer-events-none fixed inset-0 -z-10 blur-3xl opacity-40" aria-hidden="true">
                <div class="absolute -top-20 -left-20 h-72 w-72 rounded-full bg-violet-400/30 dark:bg-violet-600/25 animate-drift"></div>
                <div class="absolute top-40 right-10 h-80 w-80 rounded-full bg-blue-400/20 dark:bg-cyan-600/20 animate-drift"></div>
            </div>
            // Re-runs only when the language changes; the whole page reads one table.
            {move || {
                let t = prefs.translations();
                view! {
                    <SiteHeader t=t/>
                    <main>
                        <Hero t=t/>
                        <ProjectsSection t=t/>
                        <SkillsSection t=t/>
                        <ExperienceSection t=t/>
                        <EducationSection t=t/>
                        <ContactSection t=t/>
                    </main>
                }
            }}
        </div>
    }
}
