//! Small styled primitives: buttons, link buttons, cards and badges.
//!
//! Class strings are Tailwind utilities; the `dark:` variants key off the
//! `dark` class the preference controller toggles on `<html>`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-2xl px-4 py-2 text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none ring-offset-white dark:ring-offset-slate-900 shadow-sm";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

pub fn button_class(variant: ButtonVariant) -> String {
    let palette = match variant {
        ButtonVariant::Primary => "bg-violet-600 text-white hover:bg-violet-700",
        ButtonVariant::Secondary => {
            "bg-slate-100 text-slate-900 hover:bg-slate-200 dark:bg-slate-800 dark:text-slate-100 dark:hover:bg-slate-700"
        }
        ButtonVariant::Outline => "border border-slate-300 hover:bg-slate-100 dark:border-slate-700 dark:hover:bg-slate-800",
    };
    format!("{BUTTON_BASE} {palette}")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    #[default]
    Secondary,
}

pub fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Primary => "inline-flex items-center rounded-full px-2.5 py-1 text-xs font-medium bg-violet-600 text-white",
        BadgeVariant::Secondary => {
            "inline-flex items-center rounded-full px-2.5 py-1 text-xs font-medium bg-slate-100 text-slate-900 dark:bg-slate-800 dark:text-slate-100"
        }
    }
}

/// Clickable `<button>` styled by variant.
#[component]
pub fn Button(on_click: Callback<()>, #[prop(optional)] variant: ButtonVariant, children: Children) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant) on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

/// Anchor rendered with button styling. External links open in a new tab.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let target = external.then_some("_blank");
    let rel = external.then_some("noreferrer");
    view! {
        <a class=button_class(variant) href=href target=target rel=rel>
            {children()}
        </a>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("rounded-2xl border bg-white dark:bg-slate-900 {class}")>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("px-4 pt-4 pb-2 {class}")>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("px-4 py-2 {class}")>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("px-4 pb-4 pt-2 {class}")>{children()}</div> }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=badge_class(variant)>{children()}</span> }
}
