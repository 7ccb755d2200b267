use leptos::{either::EitherOf3, html, prelude::*};
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::{
    observe::ObserveConfig,
    projects::{find_project, Project},
};

use super::{
    footer::Footer,
    header::{LangToggle, ThemeToggle},
    hooks::{use_reading_progress, use_scroll_spy},
    media::ProjectVideo,
    settings::use_settings,
};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || params.with(|p| p.get("id")).and_then(|id| find_project(&id));

    view! {
        <TopBar />
        {move || match project() {
            None => EitherOf3::A(view! { <NotFound /> }),
            Some(project) if !project.is_browsable() => {
                EitherOf3::B(view! { <InProgress project=project /> })
            }
            Some(project) => EitherOf3::C(view! { <ProjectDetail project=project /> }),
        }}
        <Footer />
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let settings = use_settings();
    view! {
        <header class="sticky top-0 z-40 border-b border-border bg-bg/80 backdrop-blur">
            <div class="mx-auto flex max-w-4xl items-center justify-between gap-4 px-4 py-3">
                <a href="/#projects" class="text-sm text-muted hover:text-text">
                    "← "
                    {move || settings.strings().project.back}
                </a>
                <div class="flex items-center gap-2">
                    <LangToggle />
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let settings = use_settings();
    view! {
        <main class="mx-auto max-w-4xl px-4 py-24 text-center">
            <p class="text-lg">{move || settings.strings().project.not_found}</p>
            <a href="/" class="mt-6 inline-block text-primary hover:underline">
                {move || settings.strings().project.back_home}
            </a>
        </main>
    }
}

#[component]
fn InProgress(project: &'static Project) -> impl IntoView {
    let settings = use_settings();
    view! {
        <Title text=move || project.title.get(settings.lang()) />
        <main class="mx-auto max-w-4xl px-4 py-24">
            <h1 class="text-3xl font-bold">{move || project.title.get(settings.lang())}</h1>
            <p class="glass mt-6 rounded-xl p-6 text-muted">
                {move || settings.strings().project.coming_soon}
            </p>
        </main>
    }
}

/// `year • duration • role`, skipping what the project does not declare.
fn meta_line(project: &Project, lang: crate::i18n::Lang) -> String {
    [
        project.year,
        project.duration.map(|d| d.get(lang)),
        project.role.map(|r| r.get(lang)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" • ")
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let settings = use_settings();
    let lang = move || settings.lang();
    let main_ref = NodeRef::<html::Main>::new();
    let progress = use_reading_progress(main_ref);
    let active = use_scroll_spy(
        Signal::derive(move || project.section_ids()),
        ObserveConfig::section_band(),
    );
    let active_title = move || {
        active
            .with(|id| project.section(id))
            .map(|s| s.title.get(lang()))
    };

    view! {
        <Title text=move || project.title.get(lang()) />
        <div
            class="fixed left-0 top-0 z-50 h-1 w-full origin-left bg-primary"
            style=move || format!("transform: scaleX({:.4})", progress.get())
        ></div>
        <main node_ref=main_ref class="mx-auto max-w-4xl px-4 py-12">
            <nav class="text-sm text-muted">
                <a href="/" class="hover:text-text">{move || settings.strings().site.brand}</a>
                " / "
                <a href="/#projects" class="hover:text-text">
                    {move || settings.strings().nav.projects}
                </a>
                " / "
                <span class="text-text">{move || project.title.get(lang())}</span>
            </nav>
            <h1 class="mt-4 text-4xl font-bold">{move || project.title.get(lang())}</h1>
            <p class="mt-2 text-sm text-muted">{move || meta_line(project, lang())}</p>
            <p class="mt-4 text-lg">{move || project.description.get(lang())}</p>

            {(!project.sections.is_empty())
                .then(|| {
                    view! {
                        <div class="sticky top-16 z-30 mt-6">
                            <span class="glass inline-block rounded-full px-3 py-1 text-xs">
                                <span class="text-muted">
                                    {move || settings.strings().project.section}
                                    ": "
                                </span>
                                {active_title}
                            </span>
                        </div>
                    }
                })}

            {(!project.links.is_empty())
                .then(|| {
                    view! {
                        <section class="mt-8">
                            <h2 class="text-sm font-semibold uppercase tracking-wide text-muted">
                                {move || settings.strings().project.links}
                            </h2>
                            <div class="mt-2 flex flex-wrap gap-2">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="rounded-md border border-border px-3 py-1.5 text-sm hover:bg-surface"
                                            >
                                                {link.kind.label()}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })}

            {(!project.metrics.is_empty())
                .then(|| {
                    view! {
                        <section class="mt-8">
                            <h2 class="text-sm font-semibold uppercase tracking-wide text-muted">
                                {move || settings.strings().project.metrics}
                            </h2>
                            <dl class="mt-2 grid gap-3 sm:grid-cols-3">
                                {project
                                    .metrics
                                    .iter()
                                    .map(|metric| {
                                        view! {
                                            <div class="glass rounded-xl p-4">
                                                <dt class="text-xs text-muted">
                                                    {move || metric.label.get(lang())}
                                                </dt>
                                                <dd class="mt-1 font-semibold">
                                                    {move || metric.value.get(lang())}
                                                </dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </section>
                    }
                })}

            {(!project.media.is_empty())
                .then(|| {
                    view! {
                        <section class="mt-10 space-y-6">
                            {project
                                .media
                                .videos
                                .iter()
                                .enumerate()
                                .map(|(i, video)| {
                                    view! {
                                        <ProjectVideo video=video dom_id=format!("{}-video-{i}", project.id) />
                                    }
                                })
                                .collect_view()}
                            {project
                                .media
                                .images
                                .iter()
                                .map(|image| {
                                    view! {
                                        <figure class="space-y-2">
                                            <img
                                                src=image.src
                                                alt=move || image.alt.get(lang())
                                                loading="lazy"
                                                class="w-full rounded-xl border border-border"
                                            />
                                            <figcaption class="text-sm text-muted">
                                                {move || image.alt.get(lang())}
                                            </figcaption>
                                        </figure>
                                    }
                                })
                                .collect_view()}
                        </section>
                    }
                })}

            <div class="mt-10 space-y-10">
                {project
                    .sections
                    .iter()
                    .map(|section| {
                        view! {
                            <section id=section.id.anchor() class="scroll-mt-28">
                                <h2 class="text-2xl font-semibold">
                                    {move || section.title.get(lang())}
                                </h2>
                                <p class="mt-3 leading-relaxed">
                                    {move || section.body.get(lang())}
                                </p>
                                {section
                                    .bullets
                                    .map(|bullets| {
                                        view! {
                                            <ul class="mt-3 list-disc space-y-1 pl-6">
                                                {move || {
                                                    bullets
                                                        .get(lang())
                                                        .iter()
                                                        .map(|b| view! { <li>{*b}</li> })
                                                        .collect_view()
                                                }}
                                            </ul>
                                        }
                                    })}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="mt-10">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-muted">
                    {move || settings.strings().project.stack}
                </h2>
                <ul class="mt-2 flex flex-wrap gap-2">
                    {project
                        .stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class="rounded bg-surface px-2 py-1 font-mono text-xs">{*tech}</li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Lang, Localized};

    #[test]
    fn test_meta_line_skips_missing_fields() {
        let mut project = *find_project("cinema-management-system").unwrap();
        project.year = Some("2025");
        project.duration = None;
        project.role = Some(Localized::new("Backend", "Backend dev"));
        assert_eq!(meta_line(&project, Lang::En), "2025 • Backend dev");

        project.year = None;
        project.role = None;
        assert_eq!(meta_line(&project, Lang::Es), "");
    }
}
