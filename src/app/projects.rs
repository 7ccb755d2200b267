use leptos::{either::Either, prelude::*};

use crate::{
    i18n::Lang,
    projects::{featured_projects, listed_projects, Category, Filter, Project},
};

use super::settings::use_settings;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let settings = use_settings();
    let (filter, set_filter) = signal(Filter::All);
    let strings = move || &settings.strings().projects;

    let chip = move |value: Filter, label: fn(Lang) -> &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if filter.get() == value {
                        "rounded-full border border-primary bg-primary/10 px-3 py-1 text-sm text-primary"
                    } else {
                        "rounded-full border border-border px-3 py-1 text-sm text-muted hover:text-text"
                    }
                }
                aria-pressed=move || (filter.get() == value).to_string()
                on:click=move |_| set_filter.set(value)
            >
                {move || label(settings.lang())}
            </button>
        }
    };

    view! {
        <section id="projects" class="scroll-mt-24 py-16">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold">{move || strings().title}</h2>
                    <p class="mt-2 text-muted">{move || strings().subtitle}</p>
                </div>
                <div class="flex gap-2">
                    {chip(Filter::All, |l| crate::i18n::strings(l).projects.filter_all)}
                    {chip(
                        Filter::Only(Category::Backend),
                        |l| crate::i18n::strings(l).projects.filter_backend,
                    )}
                    {chip(
                        Filter::Only(Category::Fullstack),
                        |l| crate::i18n::strings(l).projects.filter_fullstack,
                    )}
                </div>
            </div>
            <div class="mt-8 grid gap-6 lg:grid-cols-2">
                {featured_projects()
                    .into_iter()
                    .map(|project| view! { <FeaturedProjectCard project=project /> })
                    .collect_view()}
            </div>
            <div class="mt-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {move || {
                    listed_projects(filter.get())
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn StackChips(project: &'static Project, max: usize) -> impl IntoView {
    let (shown, extra) = project.stack_chips(max);
    view! {
        <ul class="flex flex-wrap gap-1.5 text-xs">
            {shown
                .iter()
                .map(|tech| {
                    view! { <li class="rounded bg-surface px-2 py-0.5 font-mono">{*tech}</li> }
                })
                .collect_view()}
            {(extra > 0)
                .then(|| view! { <li class="px-1 py-0.5 text-muted">{format!("+{extra}")}</li> })}
        </ul>
    }
}

/// Wraps a card in a link only when the project has a detail page.
#[component]
fn CardLink(project: &'static Project, children: Children) -> impl IntoView {
    if project.is_browsable() {
        Either::Left(view! {
            <a href=project.href() class="block h-full">
                {children()}
            </a>
        })
    } else {
        Either::Right(view! { <div class="h-full cursor-default">{children()}</div> })
    }
}

#[component]
fn InProgressBadge(project: &'static Project) -> impl IntoView {
    let settings = use_settings();
    (!project.is_browsable()).then(|| {
        view! {
            <span class="rounded-full bg-amber-500/15 px-2 py-0.5 text-xs font-medium text-amber-600 dark:text-amber-400">
                {move || settings.strings().projects.in_progress}
            </span>
        }
    })
}

#[component]
fn FeaturedProjectCard(project: &'static Project) -> impl IntoView {
    let settings = use_settings();

    view! {
        <article class="glass overflow-hidden rounded-2xl">
            <CardLink project=project>
                {project
                    .media
                    .cover()
                    .map(|image| {
                        view! {
                            <img
                                src=image.src
                                alt=move || image.alt.get(settings.lang())
                                loading="lazy"
                                class="aspect-video w-full object-cover"
                            />
                        }
                    })}
                <div class="p-6">
                    <div class="flex items-center gap-2 text-xs">
                        <span class="font-semibold uppercase tracking-wide text-primary">
                            {move || settings.strings().projects.featured}
                        </span>
                        {project.year.map(|y| view! { <span class="text-muted">{y}</span> })}
                        <InProgressBadge project=project />
                    </div>
                    <h3 class="mt-2 text-xl font-semibold">
                        {move || project.title.get(settings.lang())}
                    </h3>
                    <p class="mt-2 text-sm text-muted">
                        {move || project.description.get(settings.lang())}
                    </p>
                    <div class="mt-4">
                        <StackChips project=project max=6 />
                    </div>
                </div>
            </CardLink>
        </article>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let settings = use_settings();

    view! {
        <article class="rounded-xl border border-border p-5 transition-colors hover:bg-surface">
            <CardLink project=project>
                <div class="flex items-center justify-between gap-2 text-xs text-muted">
                    <span class="uppercase tracking-wide">{project.category.slug()}</span>
                    {project.year}
                </div>
                <h3 class="mt-2 font-semibold">{move || project.title.get(settings.lang())}</h3>
                <p class="mt-1 text-sm text-muted">
                    {move || project.description.get(settings.lang())}
                </p>
                <div class="mt-3 flex flex-wrap items-center gap-2">
                    <InProgressBadge project=project />
                </div>
                <div class="mt-3">
                    <StackChips project=project max=4 />
                </div>
            </CardLink>
        </article>
    }
}
