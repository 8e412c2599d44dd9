// Scroll-reveal controller: one shared IntersectionObserver marks sections
// the first time they become 10% visible. The transition is one-way.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Visibility ratio that triggers the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Elements carrying this class are reveal-eligible.
pub const ELIGIBLE_SELECTOR: &str = ".fade-on-scroll";

/// Class added exactly once when an element first crosses the threshold.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Per-target reveal guards. The observer callback may fire several times
/// for the same element; each target is marked at most once, and never
/// after shutdown.
#[derive(Debug)]
pub struct RevealSet {
    marked: Vec<bool>,
    active: bool,
}

impl RevealSet {
    pub fn new(targets: usize) -> Self {
        Self {
            marked: vec![false; targets],
            active: true,
        }
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    /// Mark a target revealed. Returns true only on the first call for
    /// that target while the set is still active.
    pub fn mark(&mut self, index: usize) -> bool {
        if !self.active {
            return false;
        }
        match self.marked.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Stop all further marking. Called on unmount.
    pub fn shutdown(&mut self) {
        self.active = false;
    }
}

/// Owns the live observer and its JS callback. Dropping the handle without
/// calling `disconnect` keeps the closure alive until the page goes away,
/// so the App component disconnects it in `on_cleanup`.
pub struct RevealHandle {
    observer: Option<IntersectionObserver>,
    state: Rc<RefCell<RevealSet>>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl RevealHandle {
    /// Deregister the watcher: no further intersection callbacks and no
    /// further marker mutations.
    pub fn disconnect(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.state.borrow_mut().shutdown();
    }
}

thread_local! {
    static ACTIVE_HANDLE: RefCell<Option<RevealHandle>> = const { RefCell::new(None) };
}

/// Create the shared observer and stash its handle for `teardown`.
pub fn install() {
    let handle = RevealController::mount();
    ACTIVE_HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
}

/// Disconnect the active observer, if any. Idempotent.
pub fn teardown() {
    ACTIVE_HANDLE.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.disconnect();
        }
    });
}

pub struct RevealController;

impl RevealController {
    /// Register every reveal-eligible element with one shared observer.
    /// If the observer cannot be created, every section is revealed
    /// immediately instead — the page never fails over this.
    pub fn mount() -> RevealHandle {
        let elements = collect_eligible();
        let state = Rc::new(RefCell::new(RevealSet::new(elements.len())));

        match observe_all(&elements, Rc::clone(&state)) {
            Ok((observer, callback)) => RevealHandle {
                observer: Some(observer),
                state,
                _callback: Some(callback),
            },
            Err(_) => {
                reveal_everything(&elements, &state);
                RevealHandle {
                    observer: None,
                    state,
                    _callback: None,
                }
            }
        }
    }
}

fn collect_eligible() -> Vec<Element> {
    let mut elements = Vec::new();
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(list) = document.query_selector_all(ELIGIBLE_SELECTOR) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        elements.push(el);
                    }
                }
            }
        }
    }
    elements
}

fn observe_all(
    elements: &[Element],
    state: Rc<RefCell<RevealSet>>,
) -> Result<
    (
        IntersectionObserver,
        Closure<dyn FnMut(Array, IntersectionObserver)>,
    ),
    JsValue,
> {
    let targets = elements.to_vec();
    let callback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if state.borrow_mut().mark(index) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in elements {
        observer.observe(el);
    }
    Ok((observer, callback))
}

fn reveal_everything(elements: &[Element], state: &Rc<RefCell<RevealSet>>) {
    let mut set = state.borrow_mut();
    for (index, el) in elements.iter().enumerate() {
        if set.mark(index) {
            let _ = el.class_list().add_1(REVEALED_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_set_has_no_marks() {
        let set = RevealSet::new(5);
        assert_eq!(set.len(), 5);
        for i in 0..5 {
            assert!(!set.is_marked(i));
        }
    }

    #[test]
    fn marking_is_idempotent_per_target() {
        let mut set = RevealSet::new(3);
        assert!(set.mark(1));
        // Repeated callbacks for the same element change nothing.
        assert!(!set.mark(1));
        assert!(!set.mark(1));
        assert!(set.is_marked(1));
        assert!(!set.is_marked(0));
    }

    #[test]
    fn no_marking_after_shutdown() {
        let mut set = RevealSet::new(2);
        assert!(set.mark(0));
        set.shutdown();
        assert!(!set.mark(1));
        assert!(!set.is_marked(1));
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let mut set = RevealSet::new(1);
        assert!(!set.mark(7));
    }

    #[test]
    fn empty_set_is_harmless() {
        let mut set = RevealSet::new(0);
        assert!(set.is_empty());
        assert!(!set.mark(0));
        set.shutdown();
    }
}
