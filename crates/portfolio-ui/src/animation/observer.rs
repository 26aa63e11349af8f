//! Viewport entry detection
//!
//! Wraps `IntersectionObserver` into a one-shot "has this element been seen"
//! signal. When the browser cannot provide an observer the section is shown
//! immediately so content is never stuck invisible.

use leptos::html::Div;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::{RevealLatch, RevealPhase};
use crate::config::RevealConfig;
use crate::error::{Result, UiError};

/// Observer callback signature
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Check that the running browser exposes `IntersectionObserver`
///
/// # Errors
///
/// Returns `UiError::WindowNotAvailable` outside a browser and
/// `UiError::ObserverUnavailable` when the constructor is missing.
pub fn ensure_supported() -> Result<()> {
    let window = web_sys::window().ok_or(UiError::WindowNotAvailable)?;
    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
        .map_err(|e| UiError::ObserverUnavailable(format!("{e:?}")))?;

    if supported {
        Ok(())
    } else {
        Err(UiError::ObserverUnavailable(
            "IntersectionObserver is not defined".to_string(),
        ))
    }
}

/// Owns an attached observer and its callback
///
/// Dropping the handle disconnects the observer before the callback is
/// freed, so the browser never calls into a dropped closure.
pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealHandle {
    /// Stop observing; safe to call more than once
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_enter` the first time `element` intersects the viewport
///
/// The observer disconnects itself after firing. Keep the returned handle
/// alive for as long as the element may still be observed.
///
/// # Errors
///
/// Returns an error if the observer API is missing or construction fails.
pub fn observe_once<F>(
    element: &Element,
    root_margin: &str,
    on_enter: F,
) -> Result<RevealHandle>
where
    F: Fn() + 'static,
{
    ensure_supported()?;

    let mut latch = RevealLatch::new();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if latch.observe(intersecting) {
                observer.disconnect();
                on_enter();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| UiError::ObserverFailed(format!("{e:?}")))?;
    observer.observe(element);

    Ok(RevealHandle {
        observer,
        _callback: callback,
    })
}

/// Reveal phase for the element behind `target`
///
/// Starts `Hidden` and flips to `Visible` once the element enters the
/// viewport shrunk by `config.root_margin`. An invalid config or missing
/// observer support reveals immediately. The observer is disconnected when
/// the owning component unmounts.
pub fn use_reveal(target: NodeRef<Div>, config: &RevealConfig) -> ReadSignal<RevealPhase> {
    let (phase, set_phase) = signal(RevealPhase::Hidden);
    let handle = StoredValue::new_local(None::<RevealHandle>);
    let root_margin = config.root_margin.clone();
    let validation = config.validate();

    on_cleanup(move || {
        if let Some(Some(attached)) = handle.try_update_value(Option::take) {
            attached.disconnect();
        }
    });

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if phase.get_untracked().is_visible() {
            return;
        }

        if let Err(err) = &validation {
            warn!("reveal disabled, showing projects: {err}");
            set_phase.set(RevealPhase::Visible);
            return;
        }

        let observed = observe_once(&element, &root_margin, move || {
            log!("projects section entered viewport");
            set_phase.set(RevealPhase::Visible);
        });

        match observed {
            Ok(attached) => {
                handle.try_update_value(|slot| *slot = Some(attached));
            }
            Err(err @ UiError::ObserverFailed(_)) => {
                error!("reveal observer failed, showing projects: {err}");
                set_phase.set(RevealPhase::Visible);
            }
            Err(err) => {
                warn!("reveal observer unavailable, showing projects: {err}");
                set_phase.set(RevealPhase::Visible);
            }
        }
    });

    phase
}
