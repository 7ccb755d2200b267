use leptos::{either::EitherOf4, prelude::*};

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::{
    media::GateState,
    observe::{browser::BrowserObserver, ObserveConfig, Subscription},
};
use crate::{
    i18n::{strings, Lang},
    media::{MediaGate, MediaView, VideoRef},
};

use super::settings::use_settings;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Accessible name and visible text of the click-to-load button.
fn placeholder_labels(lang: Lang) -> (&'static str, &'static str) {
    let media = &strings(lang).media;
    (media.load_video, media.load_demo)
}

/// A project video behind a click-to-load gate.
///
/// Third-party players stay unmounted until the visitor clicks the
/// placeholder. Scrolling near the placeholder only arms it, which lets the
/// thumbnail load. Local files render a native player straight away, and an
/// unresolvable reference renders nothing.
#[component]
pub fn ProjectVideo(video: &'static VideoRef, dom_id: String) -> impl IntoView {
    let settings = use_settings();
    let (gate, set_gate) = signal(MediaGate::new(&video.source));
    let resolvable = gate.with_untracked(|g| g.playback().is_some());
    let title = move || video.title.get(settings.lang());
    let aria_label = move || placeholder_labels(settings.lang()).0;
    let load_label = move || placeholder_labels(settings.lang()).1;

    #[cfg(feature = "hydrate")]
    {
        let watcher = StoredValue::new_local(None::<Subscription>);
        let target = dom_id.clone();
        Effect::new(move |_| {
            let idle = gate.with(|g| g.is_gated() && g.state() == GateState::Idle);
            if !idle {
                // released here rather than inside the observer callback
                watcher.set_value(None);
                return;
            }
            if watcher.with_value(Option::is_some) {
                return;
            }
            let started = Subscription::start(
                Rc::new(BrowserObserver::default()),
                &[target.clone()],
                &ObserveConfig::media_lookahead(),
                Box::new(move |batch| {
                    if batch.iter().any(|e| e.is_intersecting) {
                        set_gate.maybe_update(MediaGate::arm);
                    }
                }),
            );
            match started {
                Ok(sub) => watcher.set_value(Some(sub)),
                Err(e) => log::debug!("video {target} stays idle until clicked: {e}"),
            }
        });
    }

    let player = move || {
        gate.with(|g| match g.view() {
            MediaView::Empty => EitherOf4::A(()),
            MediaView::Placeholder { thumbnail } => {
                let thumbnail = thumbnail.map(str::to_string);
                EitherOf4::B(view! {
                    <button
                        type="button"
                        class="group relative flex aspect-video w-full items-center justify-center overflow-hidden rounded-xl bg-surface"
                        aria-label=aria_label
                        on:click=move |_| set_gate.maybe_update(MediaGate::activate)
                    >
                        {thumbnail
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt=""
                                        loading="lazy"
                                        class="absolute inset-0 h-full w-full object-cover opacity-80 group-hover:opacity-100"
                                    />
                                }
                            })}
                        <span class="relative rounded-full bg-bg/80 px-4 py-2 text-sm font-semibold backdrop-blur">
                            "▶ "
                            {load_label}
                        </span>
                    </button>
                })
            }
            MediaView::Embed { src } => EitherOf4::C(view! {
                <iframe
                    src=src.to_string()
                    title=title
                    class="aspect-video w-full rounded-xl"
                    allow=IFRAME_ALLOW
                    allowfullscreen=true
                ></iframe>
            }),
            MediaView::Native { src } => EitherOf4::D(view! {
                <video
                    src=src.to_string()
                    title=title
                    class="aspect-video w-full rounded-xl bg-black"
                    controls=true
                    preload="metadata"
                ></video>
            }),
        })
    };

    resolvable
        .then(|| {
            view! {
                <figure id=dom_id class="space-y-2">
                    {player}
                    <figcaption class="text-sm text-muted">{title}</figcaption>
                </figure>
            }
        })
}
