use leptos::prelude::*;

/// Heading shared by every page section.
#[component]
pub fn SectionTitle(
    icon: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <div class="mt-1" aria-hidden="true">{icon}</div>
            <div>
                <h2 class="text-2xl md:text-3xl font-bold">{title}</h2>
                {subtitle
                    .map(|sub| {
                        view! { <p class="text-sm text-slate-600 dark:text-slate-400 mt-1 max-w-2xl">{sub}</p> }
                    })}
            </div>
        </div>
    }
}
