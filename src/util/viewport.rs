//! Narrow/wide viewport classification.
//!
//! The panel only needs one bit: is the window narrower than the configured
//! breakpoint. Callers get it either as an injected [`ViewportClassifier`] or
//! as a reactive signal from [`use_is_narrow`]. Requires a browser environment
//! for live values; SSR always reports wide.
//!
//! TRADE-OFFS
//! ==========
//! The signal starts wide and is corrected in an effect after hydration, so
//! server and client markup agree on first paint.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Source of the current narrow/wide classification.
pub trait ViewportClassifier {
    fn is_narrow(&self) -> bool;
}

/// Classification pinned to a fixed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedViewport(pub bool);

impl FixedViewport {
    pub const NARROW: Self = Self(true);
    pub const WIDE: Self = Self(false);
}

impl ViewportClassifier for FixedViewport {
    fn is_narrow(&self) -> bool {
        self.0
    }
}

impl ViewportClassifier for Signal<bool> {
    fn is_narrow(&self) -> bool {
        self.get()
    }
}

/// Whether a viewport `width_px` wide counts as narrow.
pub fn is_narrow_width(width_px: f64, breakpoint_px: u32) -> bool {
    width_px.is_finite() && width_px < f64::from(breakpoint_px)
}

/// Reactive narrow flag that follows window resizes.
pub fn use_is_narrow(breakpoint_px: u32) -> Signal<bool> {
    let narrow = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let refresh = move || {
            let next = current_is_narrow(breakpoint_px);
            if narrow.get_untracked() != next {
                narrow.set(next);
            }
        };
        Effect::new(move || refresh());
        let handle = window_event_listener(leptos::ev::resize, move |_| refresh());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        _ = breakpoint_px;
    }

    narrow.into()
}

#[cfg(feature = "hydrate")]
fn current_is_narrow(breakpoint_px: u32) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.inner_width() {
        Ok(width) => width.as_f64().map_or(false, |w| is_narrow_width(w, breakpoint_px)),
        Err(_) => false,
    }
}
