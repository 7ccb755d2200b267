use leptos::prelude::*;

use crate::i18n::StackStrings;

use super::settings::use_settings;

struct StackGroup {
    title: fn(&StackStrings) -> &'static str,
    items: &'static [&'static str],
    accent: &'static str,
}

const GROUPS: &[StackGroup] = &[
    StackGroup {
        title: |s| s.backend,
        items: &["Java", "Quarkus", "Spring Boot"],
        accent: "border-l-orange-500",
    },
    StackGroup {
        title: |s| s.data,
        items: &["PostgreSQL", "MySQL"],
        accent: "border-l-sky-500",
    },
    StackGroup {
        title: |s| s.security,
        items: &["Keycloak", "OAuth2 / JWT"],
        accent: "border-l-emerald-500",
    },
    StackGroup {
        title: |s| s.observability,
        items: &["Prometheus", "Grafana"],
        accent: "border-l-amber-500",
    },
    StackGroup {
        title: |s| s.infra,
        items: &["Docker", "AWS", "GCP"],
        accent: "border-l-indigo-500",
    },
    StackGroup {
        title: |s| s.frontend,
        items: &["React", "TypeScript"],
        accent: "border-l-cyan-500",
    },
];

#[component]
pub fn TechStack() -> impl IntoView {
    let settings = use_settings();
    let stack = move || &settings.strings().stack;

    view! {
        <section id="stack" class="scroll-mt-24 py-16">
            <h2 class="text-2xl font-bold">{move || stack().title}</h2>
            <p class="mt-2 text-muted">{move || stack().subtitle}</p>
            <div class="mt-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class=format!(
                                "glass rounded-xl border-l-4 p-5 {}",
                                group.accent,
                            )>
                                <h3 class="font-semibold">{move || (group.title)(stack())}</h3>
                                <ul class="mt-3 flex flex-wrap gap-2 text-sm">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li class="rounded bg-surface px-2 py-1 font-mono text-xs">
                                                    {*item}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
