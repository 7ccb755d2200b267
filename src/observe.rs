//! Viewport intersection observation, behind a trait so the section and
//! media logic can be driven by a fake in tests.

#[cfg(feature = "hydrate")]
pub mod browser;

use std::rc::Rc;

use thiserror::Error;

/// Default "reading band" for section tracking: 20% below the top edge to
/// 65% above the bottom edge of the viewport.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -65% 0px";
/// How far ahead of the viewport media starts to pre-arm.
pub const MEDIA_LOOKAHEAD_MARGIN: &str = "200px 0px";

#[derive(Debug, Clone, PartialEq)]
pub struct ObserveConfig {
    /// CSS-style margin applied to the root (viewport) box.
    pub root_margin: String,
    /// Intersection ratios at which a batch is delivered.
    pub thresholds: Vec<f64>,
}

impl ObserveConfig {
    pub fn new(root_margin: impl Into<String>, thresholds: Vec<f64>) -> Self {
        Self {
            root_margin: root_margin.into(),
            thresholds,
        }
    }

    pub fn section_band() -> Self {
        Self::new(SECTION_ROOT_MARGIN, vec![0.0])
    }

    pub fn media_lookahead() -> Self {
        Self::new(MEDIA_LOOKAHEAD_MARGIN, vec![0.0])
    }
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self::section_band()
    }
}

/// One element's visibility change, as delivered in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    /// DOM id of the observed element.
    pub id: String,
    pub is_intersecting: bool,
    /// Distance of the element's top edge from the viewport top, in CSS px.
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserveError {
    #[error("no document available to observe")]
    NoDocument,
    #[error("none of the requested elements exist")]
    NoTargets,
    #[error("intersection observer unavailable: {0}")]
    Unsupported(String),
}

pub type VisibilityCallback = Box<dyn FnMut(Vec<VisibilityEntry>)>;

pub trait ViewportObserver {
    /// Starts observing the elements with the given ids. Ids that don't
    /// resolve to an element are skipped; if none resolve, observation
    /// fails with [`ObserveError::NoTargets`].
    fn observe(
        &self,
        targets: &[String],
        config: &ObserveConfig,
        callback: VisibilityCallback,
    ) -> Result<SubscriptionId, ObserveError>;

    /// Stops a subscription. Unknown ids are ignored.
    fn unobserve(&self, id: SubscriptionId);
}

/// A live observation. Dropping it stops the subscription.
pub struct Subscription {
    observer: Rc<dyn ViewportObserver>,
    id: SubscriptionId,
}

impl Subscription {
    pub fn start(
        observer: Rc<dyn ViewportObserver>,
        targets: &[String],
        config: &ObserveConfig,
        callback: VisibilityCallback,
    ) -> Result<Self, ObserveError> {
        let id = observer.observe(targets, config, callback)?;
        Ok(Self { observer, id })
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.unobserve(self.id);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Observe(SubscriptionId, Vec<String>),
        Unobserve(SubscriptionId),
    }

    /// Records every call and lets a test deliver batches by hand.
    #[derive(Default)]
    pub struct SpyObserver {
        pub known: Vec<String>,
        pub calls: RefCell<Vec<Call>>,
        callbacks: RefCell<BTreeMap<SubscriptionId, VisibilityCallback>>,
        retired: RefCell<BTreeMap<SubscriptionId, VisibilityCallback>>,
        configs: RefCell<Vec<ObserveConfig>>,
    }

    impl SpyObserver {
        pub fn with_elements(ids: &[&str]) -> Self {
            Self {
                known: ids.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn live(&self) -> Vec<SubscriptionId> {
            self.callbacks.borrow().keys().copied().collect()
        }

        pub fn last_config(&self) -> Option<ObserveConfig> {
            self.configs.borrow().last().cloned()
        }

        /// Delivers to a live subscription.
        pub fn deliver(&self, id: SubscriptionId, batch: Vec<VisibilityEntry>) {
            let mut callback = self
                .callbacks
                .borrow_mut()
                .remove(&id)
                .expect("subscription should be live");
            callback(batch);
            self.callbacks.borrow_mut().insert(id, callback);
        }

        /// Delivers to a subscription that has already been stopped, the
        /// way a late browser callback would.
        pub fn deliver_stale(&self, id: SubscriptionId, batch: Vec<VisibilityEntry>) {
            let mut callback = self
                .retired
                .borrow_mut()
                .remove(&id)
                .expect("subscription should have been stopped");
            callback(batch);
            self.retired.borrow_mut().insert(id, callback);
        }
    }

    impl ViewportObserver for SpyObserver {
        fn observe(
            &self,
            targets: &[String],
            config: &ObserveConfig,
            callback: VisibilityCallback,
        ) -> Result<SubscriptionId, ObserveError> {
            let resolved = targets
                .iter()
                .filter(|t| self.known.contains(t))
                .cloned()
                .collect::<Vec<_>>();
            if resolved.is_empty() {
                return Err(ObserveError::NoTargets);
            }
            let id = SubscriptionId(self.calls.borrow().len() as u64);
            self.calls.borrow_mut().push(Call::Observe(id, resolved));
            self.configs.borrow_mut().push(config.clone());
            self.callbacks.borrow_mut().insert(id, callback);
            Ok(id)
        }

        fn unobserve(&self, id: SubscriptionId) {
            self.calls.borrow_mut().push(Call::Unobserve(id));
            if let Some(cb) = self.callbacks.borrow_mut().remove(&id) {
                self.retired.borrow_mut().insert(id, cb);
            }
        }
    }

    pub fn entry(id: &str, is_intersecting: bool, top: f64) -> VisibilityEntry {
        VisibilityEntry {
            id: id.to_string(),
            is_intersecting,
            top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_subscription_stops_on_drop() {
        let spy = Rc::new(SpyObserver::with_elements(&["a"]));
        let sub = Subscription::start(
            spy.clone(),
            &["a".to_string()],
            &ObserveConfig::default(),
            Box::new(|_| {}),
        )
        .expect("should subscribe");
        let id = sub.id();
        assert_eq!(spy.live(), vec![id]);

        drop(sub);
        assert!(spy.live().is_empty());
        assert_eq!(spy.calls.borrow().last(), Some(&Call::Unobserve(id)));
    }

    #[test]
    fn test_failed_start_leaves_nothing_behind() {
        let spy = Rc::new(SpyObserver::with_elements(&["a"]));
        let res = Subscription::start(
            spy.clone(),
            &["missing".to_string()],
            &ObserveConfig::default(),
            Box::new(|_| {}),
        );
        assert_eq!(res.err(), Some(ObserveError::NoTargets));
        assert!(spy.calls.borrow().is_empty());
    }

    #[test]
    fn test_default_configs() {
        let band = ObserveConfig::default();
        assert_eq!(band.root_margin, "-20% 0px -65% 0px");
        assert_eq!(band.thresholds, vec![0.0]);
        assert_eq!(ObserveConfig::media_lookahead().root_margin, "200px 0px");
    }
}
