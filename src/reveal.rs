use std::collections::HashSet;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "revealed";
const INDEX_ATTR: &str = "data-reveal-index";

/// Remembers which elements have already played their reveal.
#[derive(Debug)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
    stagger_ms: u32,
}

impl RevealTracker {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            revealed: HashSet::new(),
            stagger_ms,
        }
    }

    /// Takes one observer batch and returns the keys to reveal now with their
    /// delay. Elements entering together are staggered in batch order.
    pub fn on_intersections(&mut self, batch: &[(u32, bool)]) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for &(key, intersecting) in batch {
            if intersecting && self.revealed.insert(key) {
                out.push((key, out.len() as u32 * self.stagger_ms));
            }
        }
        out
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }
}

/// Keeps the observer and its callback alive; disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Starts watching every `.reveal` element currently in the document.
/// Returns `None` (and does nothing) when there is nothing to watch.
pub fn observe(stagger_ms: u32, threshold: f64) -> Option<RevealObserver> {
    let document = web_sys::window()?.document()?;
    let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
    if nodes.length() == 0 {
        return None;
    }

    let mut tracker = RevealTracker::new(stagger_ms);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();

            let batch: Vec<(u32, bool)> = entries
                .iter()
                .filter_map(|entry| {
                    let key = reveal_index(&entry.target())?;
                    Some((key, entry.is_intersecting()))
                })
                .collect();

            for (key, delay) in tracker.on_intersections(&batch) {
                let Some(entry) = entries
                    .iter()
                    .find(|e| reveal_index(&e.target()) == Some(key))
                else {
                    continue;
                };
                let target = entry.target();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    let _ = html
                        .style()
                        .set_property("transition-delay", &format!("{}ms", delay));
                }
                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = el.set_attribute(INDEX_ATTR, &i.to_string());
            observer.observe(&el);
        }
    }
    info!("Watching {} reveal elements", nodes.length());

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn reveal_index(el: &Element) -> Option<u32> {
    el.get_attribute(INDEX_ATTR)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_each_element_at_most_once() {
        let mut tracker = RevealTracker::new(100);
        assert_eq!(tracker.on_intersections(&[(3, true)]), vec![(3, 0)]);
        assert!(tracker.is_revealed(3));

        // Leaves and re-enters the viewport a few times.
        for _ in 0..3 {
            assert!(tracker.on_intersections(&[(3, false)]).is_empty());
            assert!(tracker.on_intersections(&[(3, true)]).is_empty());
        }
    }

    #[test]
    fn simultaneous_entries_are_staggered_in_batch_order() {
        let mut tracker = RevealTracker::new(100);
        let batch = [(0, true), (1, false), (2, true), (5, true)];
        assert_eq!(tracker.on_intersections(&batch), vec![(0, 0), (2, 100), (5, 200)]);
        assert!(!tracker.is_revealed(1));

        // Already-revealed elements don't take a stagger slot.
        assert_eq!(tracker.on_intersections(&[(2, true), (1, true)]), vec![(1, 0)]);
    }

    #[test]
    fn duplicate_key_in_one_batch_is_revealed_once() {
        let mut tracker = RevealTracker::new(50);
        assert_eq!(tracker.on_intersections(&[(7, true), (7, true)]), vec![(7, 0)]);
    }
}
