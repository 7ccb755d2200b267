//! Tracks which page section is nearest the reading line.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::observe::{ObserveConfig, Subscription, ViewportObserver, VisibilityEntry};

/// The pure part of the scroll-spy: section ids and the currently active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSection {
    ids: Vec<String>,
    active: String,
}

impl ActiveSection {
    pub fn new(ids: Vec<String>) -> Self {
        let active = ids.first().cloned().unwrap_or_default();
        Self { ids, active }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Replaces the id list. The active id survives if it is still listed,
    /// otherwise it falls back to the first id. Returns whether it changed.
    pub fn reset(&mut self, ids: Vec<String>) -> bool {
        self.ids = ids;
        if self.ids.iter().any(|id| *id == self.active) {
            return false;
        }
        let next = self.ids.first().cloned().unwrap_or_default();
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Applies one batch of visibility changes. The topmost intersecting
    /// listed section wins. Equal tops fall back to list order. A batch
    /// without any intersecting section keeps the current pick.
    pub fn apply(&mut self, batch: &[VisibilityEntry]) -> bool {
        let winner = batch
            .iter()
            .filter(|e| e.is_intersecting)
            .filter_map(|e| {
                self.ids
                    .iter()
                    .position(|id| *id == e.id)
                    .map(|pos| (e.top, pos))
            })
            .min_by(|(top_a, pos_a), (top_b, pos_b)| {
                top_a.total_cmp(top_b).then(pos_a.cmp(pos_b))
            });

        match winner {
            Some((_, pos)) if self.ids[pos] != self.active => {
                self.active = self.ids[pos].clone();
                true
            }
            _ => false,
        }
    }
}

/// Keeps an [`ActiveSection`] in sync with a [`ViewportObserver`].
///
/// Each call to [`SectionObserver::watch`] releases the previous
/// subscription before starting a new one. Batches that arrive late from a
/// released subscription are dropped.
pub struct SectionObserver {
    observer: Rc<dyn ViewportObserver>,
    config: ObserveConfig,
    state: Rc<RefCell<ActiveSection>>,
    generation: Rc<Cell<u64>>,
    on_change: Rc<dyn Fn(&str)>,
    subscription: Option<Subscription>,
}

impl SectionObserver {
    pub fn new(
        observer: Rc<dyn ViewportObserver>,
        config: ObserveConfig,
        on_change: impl Fn(&str) + 'static,
    ) -> Self {
        Self {
            observer,
            config,
            state: Rc::new(RefCell::new(ActiveSection::new(Vec::new()))),
            generation: Rc::new(Cell::new(0)),
            on_change: Rc::new(on_change),
            subscription: None,
        }
    }

    pub fn active(&self) -> String {
        self.state.borrow().active().to_string()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn watch(&mut self, ids: Vec<String>) {
        self.stop();
        let generation = self.generation.get();

        let changed = self.state.borrow_mut().reset(ids.clone());
        if changed {
            (self.on_change)(&self.active());
        }
        if ids.is_empty() {
            return;
        }

        let callback = {
            let state = self.state.clone();
            let current = self.generation.clone();
            let on_change = self.on_change.clone();
            Box::new(move |batch: Vec<VisibilityEntry>| {
                if current.get() != generation {
                    return;
                }
                let active = {
                    let mut state = state.borrow_mut();
                    if !state.apply(&batch) {
                        return;
                    }
                    state.active().to_string()
                };
                on_change(&active);
            })
        };

        match Subscription::start(self.observer.clone(), &ids, &self.config, callback) {
            Ok(sub) => self.subscription = Some(sub),
            Err(err) => log::debug!("section tracking inactive: {err}"),
        }
    }

    /// Releases the current subscription, if any.
    pub fn stop(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.subscription = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::testing::*;
    use crate::observe::SubscriptionId;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn tracked(spy: &Rc<SpyObserver>) -> (SectionObserver, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let observer = SectionObserver::new(spy.clone(), ObserveConfig::default(), move |id| {
            sink.borrow_mut().push(id.to_string())
        });
        (observer, seen)
    }

    #[test]
    fn test_topmost_intersecting_wins_regardless_of_order() {
        let mut state = ActiveSection::new(ids(&["overview", "problem", "solution"]));
        let batch = vec![
            entry("solution", true, 300.0),
            entry("problem", true, 120.0),
            entry("overview", false, -50.0),
        ];
        assert!(state.apply(&batch));
        assert_eq!(state.active(), "problem");

        let mut reversed = ActiveSection::new(ids(&["overview", "problem", "solution"]));
        let mut batch = batch;
        batch.reverse();
        reversed.apply(&batch);
        assert_eq!(reversed.active(), "problem");
    }

    #[test]
    fn test_equal_tops_use_list_order() {
        let mut state = ActiveSection::new(ids(&["a", "b", "c"]));
        state.apply(&[entry("c", true, 10.0), entry("b", true, 10.0)]);
        assert_eq!(state.active(), "b");
    }

    #[test]
    fn test_empty_batch_keeps_active() {
        let mut state = ActiveSection::new(ids(&["a", "b"]));
        state.apply(&[entry("b", true, 5.0)]);
        assert!(!state.apply(&[entry("a", false, 0.0), entry("b", false, 700.0)]));
        assert!(!state.apply(&[]));
        assert_eq!(state.active(), "b");
    }

    #[test]
    fn test_unlisted_ids_are_ignored() {
        let mut state = ActiveSection::new(ids(&["a", "b"]));
        assert!(!state.apply(&[entry("stranger", true, 0.0)]));
        assert_eq!(state.active(), "a");
    }

    #[test]
    fn test_reset_keeps_listed_active_and_falls_back_otherwise() {
        let mut state = ActiveSection::new(ids(&["a", "b"]));
        state.apply(&[entry("b", true, 0.0)]);
        assert!(!state.reset(ids(&["b", "c"])));
        assert_eq!(state.active(), "b");
        assert!(state.reset(ids(&["x", "y"])));
        assert_eq!(state.active(), "x");
        assert!(state.reset(Vec::new()));
        assert_eq!(state.active(), "");
    }

    #[test]
    fn test_empty_list_never_observes() {
        let spy = Rc::new(SpyObserver::with_elements(&["a"]));
        let (mut observer, _) = tracked(&spy);
        observer.watch(Vec::new());
        assert_eq!(observer.active(), "");
        assert!(!observer.is_observing());
        assert!(spy.calls.borrow().is_empty());
    }

    #[test]
    fn test_single_id_is_active() {
        let spy = Rc::new(SpyObserver::with_elements(&["only"]));
        let (mut observer, seen) = tracked(&spy);
        observer.watch(ids(&["only"]));
        assert_eq!(observer.active(), "only");
        assert_eq!(*seen.borrow(), vec!["only".to_string()]);
        assert!(observer.is_observing());
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let spy = Rc::new(SpyObserver::with_elements(&["b"]));
        let (mut observer, _) = tracked(&spy);
        observer.watch(ids(&["a", "b", "c"]));
        assert_eq!(
            *spy.calls.borrow(),
            vec![Call::Observe(SubscriptionId(0), ids(&["b"]))]
        );
    }

    #[test]
    fn test_no_resolvable_elements_keeps_default() {
        let spy = Rc::new(SpyObserver::with_elements(&[]));
        let (mut observer, _) = tracked(&spy);
        observer.watch(ids(&["a", "b"]));
        assert!(!observer.is_observing());
        assert_eq!(observer.active(), "a");
    }

    #[test]
    fn test_batches_drive_active_and_notify() {
        let spy = Rc::new(SpyObserver::with_elements(&["a", "b", "c"]));
        let (mut observer, seen) = tracked(&spy);
        observer.watch(ids(&["a", "b", "c"]));
        let sub = spy.live()[0];

        spy.deliver(sub, vec![entry("c", true, 400.0), entry("b", true, 200.0)]);
        assert_eq!(observer.active(), "b");
        spy.deliver(sub, vec![entry("b", false, -10.0)]);
        assert_eq!(observer.active(), "b");
        spy.deliver(sub, vec![entry("b", true, 200.0)]);

        assert_eq!(*seen.borrow(), ids(&["a", "b"]));
    }

    #[test]
    fn test_old_subscription_stops_before_new_one_starts() {
        let spy = Rc::new(SpyObserver::with_elements(&["a", "b", "x", "y"]));
        let (mut observer, _) = tracked(&spy);
        observer.watch(ids(&["a", "b"]));
        let first = spy.live()[0];
        observer.watch(ids(&["x", "y"]));
        let second = spy.live()[0];

        assert_eq!(
            *spy.calls.borrow(),
            vec![
                Call::Observe(first, ids(&["a", "b"])),
                Call::Unobserve(first),
                Call::Observe(second, ids(&["x", "y"])),
            ]
        );
        assert_eq!(spy.live(), vec![second]);
    }

    #[test]
    fn test_stale_batches_are_ignored() {
        let spy = Rc::new(SpyObserver::with_elements(&["a", "b", "x", "y"]));
        let (mut observer, seen) = tracked(&spy);
        observer.watch(ids(&["a", "b"]));
        let first = spy.live()[0];
        observer.watch(ids(&["a", "y"]));

        spy.deliver_stale(first, vec![entry("b", true, 0.0)]);
        spy.deliver_stale(first, vec![entry("a", false, 0.0), entry("y", true, 0.0)]);
        assert_eq!(observer.active(), "a");
        assert_eq!(*seen.borrow(), ids(&["a"]));
    }

    #[test]
    fn test_drop_releases_subscription() {
        let spy = Rc::new(SpyObserver::with_elements(&["a"]));
        let (mut observer, _) = tracked(&spy);
        observer.watch(ids(&["a"]));
        assert_eq!(spy.live().len(), 1);
        drop(observer);
        assert!(spy.live().is_empty());
    }

    #[test]
    fn test_uses_configured_band() {
        let spy = Rc::new(SpyObserver::with_elements(&["a"]));
        let config = ObserveConfig::new("0px 0px -50% 0px", vec![0.0, 0.5]);
        let mut observer = SectionObserver::new(spy.clone(), config.clone(), |_| {});
        observer.watch(ids(&["a"]));
        assert_eq!(spy.last_config(), Some(config));
    }
}
