//! Page sections below the hero.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section receives the one translation table selected for the current
//! render pass. `ProjectsSection` forwards content validation errors to the
//! enclosing error boundary.

use leptos::prelude::*;

use super::project_card::ProjectCard;
use super::resume_button::ResumeButton;
use super::section_title::SectionTitle;
use super::ui::{Badge, ButtonVariant, Card, CardContent, CardFooter, CardHeader, LinkButton};
use crate::content::{PROFILE, projects, skill_groups};
use crate::i18n::Translations;
use crate::util::dom;

const SECTION_CLASS: &str = "mx-auto max-w-6xl px-4 py-14";
const CARD_CLASS: &str = "bg-white/70 dark:bg-slate-900/60 border-slate-200/60 dark:border-slate-800/60";

#[component]
pub fn ProjectsSection(t: &'static Translations) -> impl IntoView {
    let cards = projects(t).map(|items| {
        items
            .into_iter()
            .map(|project| view! { <ProjectCard project=project/> })
            .collect_view()
    });

    view! {
        <section id="projects" class=SECTION_CLASS>
            <SectionTitle icon="▣" title=t.sections.projects subtitle=t.sections.projects_sub/>
            <div class="mt-8 grid gap-6 sm:grid-cols-2">{cards}</div>
        </section>
    }
}

#[component]
pub fn SkillsSection(t: &'static Translations) -> impl IntoView {
    view! {
        <section id="skills" class=SECTION_CLASS>
            <SectionTitle icon="</>" title=t.sections.skills subtitle=t.sections.skills_sub/>
            <div class="mt-8 grid gap-6 md:grid-cols-3">
                {skill_groups(t)
                    .into_iter()
                    .map(|group| {
                        view! {
                            <Card class=CARD_CLASS>
                                <CardHeader class="pb-2">
                                    <div class="text-sm uppercase tracking-wide text-slate-500 dark:text-slate-400">
                                        {group.label}
                                    </div>
                                </CardHeader>
                                <CardContent class="flex flex-wrap gap-2">
                                    {group.items.into_iter().map(|item| view! { <Badge>{item}</Badge> }).collect_view()}
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(t: &'static Translations) -> impl IntoView {
    view! {
        <section id="experience" class=SECTION_CLASS>
            <SectionTitle icon="▣" title=t.sections.experience subtitle=t.sections.experience_sub/>
            <Card class=format!("mt-8 {CARD_CLASS}")>
                <CardHeader>
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                        <div class="font-semibold">"Lien MULTIMÉDIA – Qui fait Quoi (Montréal)"</div>
                        <div class="text-sm text-slate-500 dark:text-slate-400">
                            {t.exp.period} " · " {t.common.intern}
                        </div>
                    </div>
                </CardHeader>
                <CardContent class="space-y-2 text-sm">
                    <ul class="list-disc pl-5 space-y-1">
                        <li>{t.exp.item1}</li>
                        <li>{t.exp.item2}</li>
                        <li>{t.exp.item3}</li>
                    </ul>
                </CardContent>
            </Card>
        </section>
    }
}

#[component]
pub fn EducationSection(t: &'static Translations) -> impl IntoView {
    view! {
        <section id="education" class=SECTION_CLASS>
            <SectionTitle icon="◆" title=t.sections.education subtitle=t.sections.education_sub/>
            <Card class=format!("mt-8 {CARD_CLASS}")>
                <CardHeader>
                    <div class="font-semibold">"Cégep de Saint-Jérôme"</div>
                    <div class="text-sm text-slate-500 dark:text-slate-400">{t.edu.program} " · 2023–2024"</div>
                </CardHeader>
                <CardContent class="text-sm text-slate-700 dark:text-slate-300">{t.edu.details}</CardContent>
            </Card>
        </section>
    }
}

#[component]
pub fn ContactSection(t: &'static Translations) -> impl IntoView {
    view! {
        <section id="contact" class=SECTION_CLASS>
            <SectionTitle icon="✉" title=t.sections.contact subtitle=t.sections.contact_sub/>
            <Card class=format!("mt-8 {CARD_CLASS}")>
                <CardContent class="grid gap-4 md:grid-cols-3 items-center">
                    <div class="space-y-2">
                        <div class="font-semibold">{PROFILE.name}</div>
                        <div class="text-sm text-slate-600 dark:text-slate-400">{PROFILE.location}</div>
                        <div class="text-sm">
                            <a class="hover:underline" href=PROFILE.mailto()>{PROFILE.email}</a>
                        </div>
                        <div class="text-sm">
                            <a class="hover:underline" href=PROFILE.tel()>{PROFILE.phone}</a>
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-3 md:justify-center">
                        <LinkButton href=PROFILE.github variant=ButtonVariant::Outline external=true>"GitHub"</LinkButton>
                        <LinkButton href=PROFILE.linkedin variant=ButtonVariant::Outline external=true>"LinkedIn"</LinkButton>
                        <LinkButton href="#projects">{t.common.work_together}</LinkButton>
                        <ResumeButton label=t.cta.resume/>
                    </div>
                    <div class="text-sm text-slate-600 dark:text-slate-400 md:text-right">
                        <div id="resume" class="font-medium mb-1">{t.sections.resume}</div>
                        <p>{t.resume.note}</p>
                    </div>
                </CardContent>
                <CardFooter class="text-xs text-slate-500 flex justify-between">
                    <span>{format!("© {} {}", dom::current_year(), PROFILE.name)}</span>
                    <span>{t.footer.made}</span>
                </CardFooter>
            </Card>
        </section>
    }
}
