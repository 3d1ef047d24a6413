// A resource that announces its own lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::trace::{self, TraceKind};

static NEXT_MARKER: AtomicU64 = AtomicU64::new(1);

/// A named resource that traces acquisition, use, and release.
///
/// The marker identifies the instance for its whole life. It is stored in the
/// value rather than derived from an address, so it survives moves: every
/// owner of the same resource prints the same marker.
pub struct Resource {
    name: String,
    marker: u64,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let marker = NEXT_MARKER.fetch_add(1, Ordering::Relaxed);
        trace::record(TraceKind::Acquire, &name, marker);
        Resource { name, marker }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> u64 {
        self.marker
    }

    /// Uses the resource. Reachable only through an owner or a borrow, so a
    /// released resource can never be touched.
    pub fn touch(&self) {
        trace::record(TraceKind::Use, &self.name, self.marker);
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        trace::record(TraceKind::Release, &self.name, self.marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::take_events;
    use std::rc::Rc;

    #[test]
    fn test_lifecycle_traces_acquire_use_release_once() {
        take_events();
        {
            let res = Resource::new("lifecycle");
            res.touch();
        }

        let events = take_events();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![TraceKind::Acquire, TraceKind::Use, TraceKind::Release]
        );
        assert!(events.iter().all(|e| e.name == "lifecycle"));
        assert!(events.iter().all(|e| e.marker == events[0].marker));
    }

    #[test]
    fn test_markers_are_distinct_per_instance() {
        take_events();
        let a = Resource::new("a");
        let b = Resource::new("b");
        assert_ne!(a.marker(), b.marker());
        assert_eq!(a.name(), "a");
        assert_eq!(b.name(), "b");
    }

    #[test]
    fn test_marker_survives_a_move() {
        take_events();
        let res = Resource::new("moved");
        let before = res.marker();
        let boxed = Box::new(res);
        assert_eq!(boxed.marker(), before);
    }

    #[test]
    fn test_shared_owner_count_transitions() {
        take_events();
        let res = Rc::new(Resource::new("counted"));
        assert_eq!(Rc::strong_count(&res), 1);

        let second = Rc::clone(&res);
        assert_eq!(Rc::strong_count(&res), 2);

        drop(second);
        assert_eq!(Rc::strong_count(&res), 1);

        // Dropping a non-last owner must not release the resource.
        let kinds: Vec<_> = take_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![TraceKind::Acquire]);

        drop(res);
        let kinds: Vec<_> = take_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![TraceKind::Release]);
    }
}
