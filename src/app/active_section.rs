use leptos::prelude::*;

use crate::tracker::{SectionId, SectionRegistry, TrackerConfig};

/// Read-only handle on the section currently in view.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection(ReadSignal<SectionId>);

impl ActiveSection {
    pub fn is(&self, id: &SectionId) -> bool {
        self.0.with(|active| active == id)
    }
}

/// Creates the active section state, starts watching the page regions once
/// mounted and provides the handle as context. Observation stops when the
/// calling component is cleaned up.
pub fn provide_active_section(registry: SectionRegistry, config: TrackerConfig) -> ActiveSection {
    let initial = registry.initial(config.default_section.as_ref()).clone();
    let (active, set_active) = signal(initial);

    observe_sections(registry, config, set_active);

    let handle = ActiveSection(active);
    provide_context(handle);
    handle
}

#[cfg(not(feature = "hydrate"))]
fn observe_sections(
    _registry: SectionRegistry,
    _config: TrackerConfig,
    _set_active: WriteSignal<SectionId>,
) {
    // regions only exist in the browser
}

#[cfg(feature = "hydrate")]
fn observe_sections(
    registry: SectionRegistry,
    config: TrackerConfig,
    set_active: WriteSignal<SectionId>,
) {
    use crate::tracker::{ActiveSectionTracker, VisibilityEntry};
    use browser::SectionObserver;

    let threshold = config.threshold;
    let tracker = StoredValue::new_local(ActiveSectionTracker::new(config));
    let observer = StoredValue::new_local(None::<SectionObserver>);

    Effect::new(move |_| {
        let document = document();
        let regions = registry
            .iter()
            .filter_map(|id| document.get_element_by_id(id.as_str()))
            .collect::<Vec<_>>();

        let started = tracker.try_update_value(|t| {
            t.init(registry.clone(), |id| {
                regions.iter().any(|r| r.id() == id.as_str())
            })
        });
        match started {
            Some(Ok(initial)) => set_active.set(initial),
            Some(Err(e)) => {
                log::warn!("active section tracker not started: {e}");
                return;
            }
            None => return,
        }

        let on_batch = move |batch: Vec<VisibilityEntry>| {
            if let Some(Some(id)) = tracker.try_update_value(|t| t.apply(&batch).cloned()) {
                set_active.set(id);
            }
        };
        match SectionObserver::new(threshold, &regions, on_batch) {
            Ok(o) => observer.set_value(Some(o)),
            Err(e) => log::error!("couldn't observe sections: {e:?}"),
        }
    });

    on_cleanup(move || {
        // drop disconnects before the tracker stops taking batches
        observer.try_update_value(|o| o.take());
        tracker.try_update_value(|t| t.teardown());
    });
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::tracker::{SectionId, VisibilityEntry};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// One `IntersectionObserver` over every section region, so a batch of
    /// entries is exactly one delivery. Disconnects on drop.
    pub struct SectionObserver {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl SectionObserver {
        pub fn new<F>(threshold: f64, regions: &[Element], mut on_batch: F) -> Result<Self, JsValue>
        where
            F: FnMut(Vec<VisibilityEntry>) + 'static,
        {
            let callback =
                ObserverCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                    let batch = entries
                        .iter()
                        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                        .map(|e| visibility(&e))
                        .collect::<Vec<_>>();
                    on_batch(batch);
                });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            for region in regions {
                observer.observe(region);
            }
            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SectionObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn visibility(entry: &IntersectionObserverEntry) -> VisibilityEntry {
        VisibilityEntry {
            section: SectionId::from(entry.target().id()),
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
            top: entry.bounding_client_rect().top(),
        }
    }
}
