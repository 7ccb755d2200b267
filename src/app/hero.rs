use leptos::prelude::*;

use super::settings::use_settings;

#[component]
pub fn Hero() -> impl IntoView {
    let settings = use_settings();
    let hero = move || &settings.strings().hero;

    view! {
        <section class="grid gap-10 py-16 lg:grid-cols-[1.2fr_1fr] lg:py-24 items-center">
            <div>
                <div class="flex flex-wrap items-center gap-3 text-xs">
                    <span class="glass rounded-full px-3 py-1 font-semibold text-accent">
                        <span class="mr-2 inline-block h-2 w-2 rounded-full bg-accent"></span>
                        {move || hero().badge}
                    </span>
                    <span class="text-muted">{move || hero().micro_proof}</span>
                </div>
                <h1 class="mt-6 text-4xl font-bold leading-tight sm:text-5xl">
                    {move || hero().headline_a}
                    " "
                    <span class="text-primary">{move || hero().headline_accent}</span>
                    " "
                    {move || hero().headline_b}
                </h1>
                <p class="mt-4 max-w-xl text-lg text-muted">{move || hero().subtitle}</p>
                <ul class="mt-6 flex flex-wrap gap-2 text-sm">
                    {move || {
                        hero()
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <li class="rounded-full border border-border px-3 py-1">
                                        {*h}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <div class="mt-8 flex flex-wrap gap-3">
                    <a
                        href="#projects"
                        class="rounded-md bg-primary px-5 py-3 font-medium text-bg hover:opacity-90"
                    >
                        {move || hero().cta_primary}
                    </a>
                    <a
                        href="#contact"
                        class="rounded-md border border-border px-5 py-3 font-medium hover:bg-surface"
                    >
                        {move || hero().cta_secondary}
                    </a>
                </div>
            </div>
            <aside class="glass rounded-2xl p-6">
                <div class="flex items-center justify-between">
                    <h2 class="font-semibold">{move || hero().card_title}</h2>
                    <span class="rounded bg-surface px-2 py-0.5 font-mono text-xs text-muted">
                        {move || hero().card_tag}
                    </span>
                </div>
                <ul class="mt-4 space-y-2 text-sm">
                    {move || {
                        hero()
                            .card_bullets
                            .iter()
                            .map(|b| view! { <li class="before:content-['▹_'] before:text-accent">{*b}</li> })
                            .collect_view()
                    }}
                </ul>
                <div class="mt-6 rounded-lg border border-border p-4">
                    <p class="text-xs uppercase tracking-wide text-muted">
                        {move || hero().card_metric_label}
                    </p>
                    <p class="mt-1 text-lg font-semibold">{move || hero().card_metric_value}</p>
                </div>
            </aside>
            <a href="#stack" class="text-sm text-muted hover:text-text lg:col-span-2">
                {move || hero().scroll}
                " ↓"
            </a>
        </section>
    }
}
