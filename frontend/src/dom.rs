//! Browser calls used by the hooks. Everything here is fallible; callers log
//! and carry on without the effect.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::config;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_offset() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_into_view(id: &str) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Watches every element carrying [`config::REVEAL_ATTRIBUTE`] and reports each
/// one once, the first time it intersects the viewport. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach<F>(on_reveal: F) -> Result<Self, DomError>
    where
        F: Fn(String) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(region) = target.get_attribute(config::REVEAL_ATTRIBUTE) {
                    on_reveal(region);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(config::REVEAL_ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        // From here on Drop tears the observer down, including on the `?` paths below.
        let guard = RevealObserver {
            observer,
            _callback: callback,
        };

        let regions = document()?.query_selector_all(&format!("[{}]", config::REVEAL_ATTRIBUTE))?;
        for index in 0..regions.length() {
            if let Some(element) = regions.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                guard.observer.observe(&element);
            }
        }

        Ok(guard)
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
