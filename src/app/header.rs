use leptos::prelude::*;

use crate::{i18n::Lang, prefs::Theme};

use super::{hooks::use_scrolled, settings::use_settings};

#[component]
pub fn Header() -> impl IntoView {
    let settings = use_settings();
    let scrolled = use_scrolled(10.0);

    view! {
        <header class=move || {
            if scrolled.get() {
                "sticky top-0 z-50 border-b border-border bg-bg/80 backdrop-blur shadow-lg transition-shadow"
            } else {
                "sticky top-0 z-50 border-b border-transparent bg-bg/60 backdrop-blur transition-shadow"
            }
        }>
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between gap-4">
                <a href="#top" class="text-lg font-bold tracking-tight">
                    {move || settings.strings().site.brand}
                </a>
                <nav class="flex items-center gap-4 text-sm">
                    <a href="#projects" class="text-muted hover:text-text">
                        {move || settings.strings().nav.projects}
                    </a>
                    <a href="#contact" class="text-muted hover:text-text">
                        {move || settings.strings().nav.contact}
                    </a>
                    <LangToggle />
                    <ThemeToggle />
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn LangToggle() -> impl IntoView {
    let settings = use_settings();
    let opacity = move |lang: Lang| {
        if settings.lang() == lang {
            "opacity-100"
        } else {
            "opacity-50"
        }
    };

    view! {
        <button
            type="button"
            class="glass rounded-full px-3 py-1 text-xs font-semibold"
            aria-label=move || settings.strings().site.change_language
            title=move || settings.strings().site.change_language
            on:click=move |_| settings.toggle_lang()
        >
            <span class=move || opacity(Lang::Es)>"ES"</span>
            " / "
            <span class=move || opacity(Lang::En)>"EN"</span>
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let settings = use_settings();

    view! {
        <button
            type="button"
            class="glass rounded-full px-3 py-1 text-xs font-semibold"
            aria-label=move || settings.strings().site.toggle_theme
            title=move || settings.strings().site.toggle_theme
            on:click=move |_| settings.toggle_theme()
        >
            {move || match settings.theme() {
                Theme::Dark => "☾ ",
                Theme::Light => "☀ ",
            }}
            {move || settings.theme().label()}
        </button>
    }
}
