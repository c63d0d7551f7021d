//! Landing block: name, lead, calls to action and the profile card.

use leptos::prelude::*;

use super::resume_button::ResumeButton;
use super::ui::{Badge, ButtonVariant, Card, CardContent, CardHeader, LinkButton};
use crate::content::{HERO_STACK, PROFILE};
use crate::i18n::Translations;

#[component]
pub fn Hero(t: &'static Translations) -> impl IntoView {
    view! {
        <section id="home" class="mx-auto max-w-6xl px-4 pt-16 pb-8 md:pt-24">
            <div class="grid md:grid-cols-5 gap-8 items-center">
                <div class="md:col-span-3 animate-rise">
                    <p class="text-sm uppercase tracking-widest text-slate-500 dark:text-slate-400">{t.hero.badge}</p>
                    <h1 class="mt-2 text-4xl md:text-6xl font-extrabold leading-tight">{PROFILE.name}</h1>
                    <p class="mt-4 text-lg md:text-xl text-slate-700 dark:text-slate-300 max-w-2xl">{t.hero.lead}</p>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <LinkButton href="#projects">{t.cta.view_projects}</LinkButton>
                        <LinkButton href=PROFILE.mailto() variant=ButtonVariant::Secondary>
                            <span aria-hidden="true" class="mr-2">"✉"</span>
                            {t.cta.contact}
                        </LinkButton>
                        <ResumeButton label=t.cta.resume/>
                    </div>
                    <div class="mt-6 flex flex-wrap items-center gap-4 text-sm text-slate-600 dark:text-slate-400">
                        <span>{PROFILE.location}</span>
                        <a class="hover:text-violet-600 dark:hover:text-violet-400" href=PROFILE.tel()>
                            {PROFILE.phone}
                        </a>
                        <a
                            class="hover:text-violet-600 dark:hover:text-violet-400"
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noreferrer"
                        >
                            "LinkedIn"
                        </a>
                    </div>
                </div>

                <div class="md:col-span-2 animate-pop">
                    <Card class="bg-white/70 dark:bg-slate-900/60 backdrop-blur border-slate-200/60 dark:border-slate-800/60 shadow-sm">
                        <CardHeader>
                            <div class="text-sm font-medium text-slate-500 dark:text-slate-400">{t.hero.title}</div>
                            <div class="text-xl font-semibold">{PROFILE.headline}</div>
                        </CardHeader>
                        <CardContent class="space-y-3">
                            <div class="flex flex-wrap gap-2">
                                {HERO_STACK.iter().map(|tech| view! { <Badge>{*tech}</Badge> }).collect_view()}
                            </div>
                            <p class="text-sm text-slate-600 dark:text-slate-400">{t.hero.pitch}</p>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}
