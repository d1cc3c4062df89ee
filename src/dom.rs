// DOM helpers shared by the components.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, HtmlAnchorElement, TouchList};

use crate::error::{LibraryError, Result};
use crate::state::Point;

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::with_passive(target, kind, true, handler)
    }

    /// Non-passive listeners may call `prevent_default` (wheel, touchmove).
    pub fn active<E, F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::with_passive(target, kind, false, handler)
    }

    fn with_passive<E, F>(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                handler(e);
            }
        });
        let opts = AddEventListenerOptions::new();
        opts.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn contacts(touches: &TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

/// Hands `src` to the browser's download handling.
pub fn save_file(src: &str, file_name: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(LibraryError::MissingWindow)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(src);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
