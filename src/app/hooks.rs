use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::{observe::browser::BrowserObserver, scroll_spy::SectionObserver};
use crate::{observe::ObserveConfig, reading::reading_progress};

/// Reports the id of the section nearest the reading line.
///
/// Starts out as the first id. Observation is restarted whenever `ids`
/// changes and released when the calling component is disposed.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_scroll_spy(ids: Signal<Vec<String>>, config: ObserveConfig) -> ReadSignal<String> {
    let (active, set_active) =
        signal(ids.with_untracked(|ids| ids.first().cloned().unwrap_or_default()));

    #[cfg(feature = "hydrate")]
    {
        // disposed with the owner, which drops the subscription
        let spy = StoredValue::new_local(None::<SectionObserver>);
        Effect::new(move |_| {
            let ids = ids.get();
            spy.update_value(|slot| {
                slot.get_or_insert_with(|| {
                    SectionObserver::new(
                        Rc::new(BrowserObserver::default()),
                        config.clone(),
                        move |id| set_active.set(id.to_string()),
                    )
                })
                .watch(ids);
            });
        });
    }

    active
}

/// Whether the window has scrolled past `threshold` pixels.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let (_, y) = use_window_scroll();
    Signal::derive(move || y.get() > threshold)
}

/// Reading progress through `target`, see [`reading_progress`].
pub fn use_reading_progress(target: NodeRef<html::Main>) -> Signal<f64> {
    let (_, y) = use_window_scroll();
    Signal::derive(move || {
        y.track();
        target
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                let viewport = window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or_default();
                reading_progress(rect.top(), rect.height(), viewport)
            })
            .unwrap_or_default()
    })
}
