use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::contact::{copy_script, mailto, COPIED_RESET_MS, EMAIL, GITHUB, LINKEDIN, RESUME};

use super::settings::use_settings;

#[component]
pub fn Contact() -> impl IntoView {
    let settings = use_settings();
    let contact = move || &settings.strings().contact;
    let (copied, set_copied) = signal(false);

    let on_copy = move |_: ev::MouseEvent| {
        set_copied.set(true);
        set_timeout(
            move || set_copied.set(false),
            Duration::from_millis(COPIED_RESET_MS),
        );
    };

    view! {
        <section id="contact" class="scroll-mt-24 py-16">
            <h2 class="text-2xl font-bold">{move || contact().title}</h2>
            <p class="mt-2 max-w-2xl text-muted">{move || contact().subtitle}</p>
            <div class="mt-8 grid gap-6 lg:grid-cols-2">
                <div class="glass rounded-2xl p-6">
                    <p class="text-xs uppercase tracking-wide text-muted">
                        {move || contact().email_label}
                    </p>
                    <p class="mt-1 font-mono text-lg">{EMAIL}</p>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <a
                            href=move || mailto(EMAIL, contact().mail_subject)
                            class="rounded-md bg-primary px-5 py-3 font-medium text-bg hover:opacity-90"
                        >
                            {move || contact().cta_email}
                        </a>
                        <button
                            type="button"
                            class="rounded-md border border-border px-5 py-3 font-medium hover:bg-surface"
                            onclick=move || copy_script(EMAIL, contact().copy_fallback)
                            on:click=on_copy
                        >
                            {move || if copied.get() { contact().copied } else { contact().copy }}
                        </button>
                    </div>
                    <h3 class="mt-8 font-semibold">{move || contact().quick_title}</h3>
                    <ul class="mt-3 space-y-2 text-sm text-muted">
                        {move || {
                            contact()
                                .quick
                                .iter()
                                .map(|note| view! { <li>{*note}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
                <div class="glass rounded-2xl p-6">
                    <h3 class="font-semibold">{move || contact().links_title}</h3>
                    <p class="mt-1 text-sm text-muted">{move || contact().links_body}</p>
                    <ul class="mt-6 space-y-3">
                        <ContactLink
                            href=LINKEDIN
                            label=Signal::derive(move || contact().linkedin)
                            hint=Signal::derive(move || contact().linkedin_hint)
                        />
                        <ContactLink
                            href=GITHUB
                            label=Signal::derive(move || contact().github)
                            hint=Signal::derive(move || contact().github_hint)
                        />
                        <ContactLink
                            href=RESUME
                            label=Signal::derive(move || contact().resume)
                            hint=Signal::derive(move || contact().resume_hint)
                        />
                    </ul>
                </div>
            </div>
            <p class="mt-8 text-sm text-muted">{move || contact().footer_note}</p>
        </section>
    }
}

#[component]
fn ContactLink(
    href: &'static str,
    label: Signal<&'static str>,
    hint: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <li>
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center justify-between rounded-lg border border-border px-4 py-3 hover:bg-surface"
            >
                <span class="font-medium">{move || label.get()}</span>
                <span class="text-sm text-muted">{move || hint.get()}</span>
            </a>
        </li>
    }
}
