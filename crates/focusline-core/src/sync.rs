//! Focus/context domain synchronization.
//!
//! The overview (context) chart always spans the whole dataset. The focus
//! chart spans whatever the brush currently selects, or the whole overview
//! when nothing is selected. [`on_selection_changed`] is that rule as a pure
//! function; [`DomainSynchronizer`] holds the selection between gestures and
//! tells observers about every recomputed focus domain.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::{Domain, DomainValue, Selection};

/// Focus domain for `selection` over a fixed `overview` domain.
///
/// # Panics
///
/// When `selection` is an interval that reaches outside `overview`. Brush
/// gestures are clamped before they get here, so an escaping interval is a
/// bug in the caller.
pub fn on_selection_changed<T: DomainValue>(
    selection: &Selection<T>,
    overview: &Domain<T>,
) -> Domain<T> {
    match selection {
        Selection::Empty => *overview,
        Selection::Interval(interval) => {
            assert!(
                overview.contains_domain(interval),
                "selection {interval:?} escapes overview domain {overview:?}"
            );
            *interval
        }
    }
}

/// Receives every focus domain the synchronizer computes.
pub trait FocusObserver<T> {
    fn focus_changed(&mut self, selection: &Selection<T>, focus: &Domain<T>);
}

/// Logs focus changes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<T: DomainValue> FocusObserver<T> for TracingObserver {
    fn focus_changed(&mut self, selection: &Selection<T>, focus: &Domain<T>) {
        tracing::debug!(
            zoomed = !selection.is_empty(),
            min = ?focus.min(),
            max = ?focus.max(),
            "focus domain changed"
        );
    }
}

/// Shared, append-only record of focus domains.
#[derive(Debug)]
pub struct FocusLog<T>(Rc<RefCell<Vec<Domain<T>>>>);

impl<T> Clone for FocusLog<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Copy> FocusLog<T> {
    pub fn snapshot(&self) -> Vec<Domain<T>> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Observer that appends each focus domain to a [`FocusLog`].
#[derive(Debug)]
pub struct RecordingObserver<T> {
    log: FocusLog<T>,
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self {
            log: FocusLog(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    /// Handle that stays readable after the observer is handed off.
    pub fn log(&self) -> FocusLog<T> {
        self.log.clone()
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> FocusObserver<T> for RecordingObserver<T> {
    fn focus_changed(&mut self, _selection: &Selection<T>, focus: &Domain<T>) {
        self.log.0.borrow_mut().push(*focus);
    }
}

/// Holds the current selection and recomputes the focus domain on change.
pub struct DomainSynchronizer<T> {
    overview: Domain<T>,
    selection: Selection<T>,
    observers: Vec<Box<dyn FocusObserver<T>>>,
}

impl<T: DomainValue> DomainSynchronizer<T> {
    /// Start with nothing selected.
    pub fn new(overview: Domain<T>) -> Self {
        Self {
            overview,
            selection: Selection::Empty,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FocusObserver<T> + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Store `selection`, notify observers and return the new focus domain.
    pub fn apply(&mut self, selection: Selection<T>) -> Domain<T> {
        let focus = on_selection_changed(&selection, &self.overview);
        self.selection = selection;
        for observer in &mut self.observers {
            observer.focus_changed(&self.selection, &focus);
        }
        focus
    }

    pub fn focus(&self) -> Domain<T> {
        on_selection_changed(&self.selection, &self.overview)
    }

    pub fn overview(&self) -> &Domain<T> {
        &self.overview
    }

    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    pub fn is_zoomed(&self) -> bool {
        !self.selection.is_empty()
    }
}

impl<T: Debug> Debug for DomainSynchronizer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainSynchronizer")
            .field("overview", &self.overview)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview() -> Domain<f64> {
        Domain::new(0.0, 100.0).expect("valid")
    }

    #[test]
    fn empty_selection_yields_overview() {
        assert_eq!(on_selection_changed(&Selection::Empty, &overview()), overview());
    }

    #[test]
    fn interval_selection_passes_through() {
        let selection = Selection::interval(10.0, 20.0).expect("valid");
        let focus = on_selection_changed(&selection, &overview());
        assert_eq!((focus.min(), focus.max()), (10.0, 20.0));
    }

    #[test]
    fn selection_touching_both_edges_is_accepted() {
        let selection = Selection::interval(0.0, 100.0).expect("valid");
        assert_eq!(on_selection_changed(&selection, &overview()), overview());
    }

    #[test]
    #[should_panic(expected = "escapes overview domain")]
    fn out_of_bounds_interval_panics() {
        let selection = Selection::interval(50.0, 150.0).expect("valid");
        on_selection_changed(&selection, &overview());
    }

    #[test]
    fn synchronizer_starts_unzoomed() {
        let sync = DomainSynchronizer::new(overview());
        assert!(!sync.is_zoomed());
        assert_eq!(sync.focus(), overview());
    }

    #[test]
    fn observers_see_every_apply_in_order() {
        let recorder = RecordingObserver::new();
        let log = recorder.log();
        let mut sync = DomainSynchronizer::new(overview());
        sync.subscribe(recorder);
        sync.subscribe(TracingObserver);

        sync.apply(Selection::interval(5.0, 6.0).expect("valid"));
        sync.apply(Selection::Empty);

        let seen = log.snapshot();
        assert_eq!(seen.len(), 2);
        assert_eq!((seen[0].min(), seen[0].max()), (5.0, 6.0));
        assert_eq!(seen[1], overview());
        assert!(!sync.is_zoomed());
    }
}
