//! Card for a single featured project.

use leptos::prelude::*;

use super::ui::{Badge, BadgeVariant, ButtonVariant, Card, CardContent, CardFooter, CardHeader, LinkButton};
use crate::content::ProjectDescriptor;

#[component]
pub fn ProjectCard(project: ProjectDescriptor) -> impl IntoView {
    let ProjectDescriptor { title, role, description, tech, features, links, image } = project;

    view! {
        <div class="animate-rise">
            <Card class="group h-full bg-white/70 dark:bg-slate-900/60 border-slate-200/60 dark:border-slate-800/60 overflow-hidden">
                {image.map(|src| view! { <img src=src alt=title class="h-40 w-full object-cover" loading="lazy"/> })}
                <CardHeader>
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <Badge variant=BadgeVariant::Primary>{role}</Badge>
                            <h3 class="text-lg font-semibold leading-snug mt-2">{title}</h3>
                        </div>
                        <div class="h-10 w-10 rounded-full bg-gradient-to-br from-violet-500/60 to-cyan-500/60 group-hover:from-violet-500 group-hover:to-cyan-500 transition-all"></div>
                    </div>
                </CardHeader>
                <CardContent>
                    <p class="text-sm text-slate-700 dark:text-slate-300 mb-3">{description}</p>
                    <div class="flex flex-wrap gap-2 mb-3">
                        {tech.iter().map(|item| view! { <Badge>{*item}</Badge> }).collect_view()}
                    </div>
                    <ul class="list-disc pl-5 space-y-1 text-sm text-slate-700 dark:text-slate-300">
                        {features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
                    </ul>
                </CardContent>
                <CardFooter class="flex items-center gap-3">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <LinkButton href=link.href variant=ButtonVariant::Outline external=true>
                                    <span aria-hidden="true" class="mr-2">"↗"</span>
                                    {link.label}
                                </LinkButton>
                            }
                        })
                        .collect_view()}
                </CardFooter>
            </Card>
        </div>
    }
}
