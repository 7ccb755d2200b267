use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{
    ObserveConfig, ObserveError, SubscriptionId, ViewportObserver, VisibilityCallback,
    VisibilityEntry,
};

type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Live {
    observer: IntersectionObserver,
    // must outlive the observer or the browser calls into a freed closure
    _callback: EntriesClosure,
}

/// [`ViewportObserver`] backed by the browser's `IntersectionObserver`.
#[derive(Default)]
pub struct BrowserObserver {
    next_id: Cell<u64>,
    live: RefCell<HashMap<SubscriptionId, Live>>,
}

fn to_entry(entry: IntersectionObserverEntry) -> VisibilityEntry {
    VisibilityEntry {
        id: entry.target().id(),
        is_intersecting: entry.is_intersecting(),
        top: entry.bounding_client_rect().top(),
    }
}

impl ViewportObserver for BrowserObserver {
    fn observe(
        &self,
        targets: &[String],
        config: &ObserveConfig,
        mut callback: VisibilityCallback,
    ) -> Result<SubscriptionId, ObserveError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ObserveError::NoDocument)?;
        let elements = targets
            .iter()
            .filter_map(|id| document.get_element_by_id(id))
            .collect::<Vec<_>>();
        if elements.is_empty() {
            return Err(ObserveError::NoTargets);
        }

        let closure = EntriesClosure::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(to_entry)
                    .collect::<Vec<_>>();
                callback(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin);
        let thresholds = config
            .thresholds
            .iter()
            .copied()
            .map(JsValue::from_f64)
            .collect::<js_sys::Array>();
        init.set_threshold(&thresholds);

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserveError::Unsupported(format!("{e:?}")))?;
        for el in &elements {
            observer.observe(el);
        }

        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        log::debug!(
            "observing {} of {} targets (margin {})",
            elements.len(),
            targets.len(),
            config.root_margin
        );
        self.live.borrow_mut().insert(
            id,
            Live {
                observer,
                _callback: closure,
            },
        );
        Ok(id)
    }

    fn unobserve(&self, id: SubscriptionId) {
        if let Some(live) = self.live.borrow_mut().remove(&id) {
            live.observer.disconnect();
        }
    }
}

impl Drop for BrowserObserver {
    fn drop(&mut self) {
        for (_, live) in self.live.get_mut().drain() {
            live.observer.disconnect();
        }
    }
}
