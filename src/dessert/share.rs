//! Sharing the sales summary.
//!
//! The core only builds the message and branches once on whether the
//! platform could present a share chooser.

use std::fmt;

use super::state::DessertUiState;

/// Notice shown when no share handler exists.
pub const SHARING_NOT_AVAILABLE: &str = "Sharing not available";

pub fn compose_share_text(desserts_sold: u64, revenue: u64) -> String {
    format!("I've clicked {desserts_sold} desserts for a total of ${revenue} #DessertClicker")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareError {
    /// Nothing on this platform can handle a "send text" action.
    NoHandler,
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::NoHandler => write!(f, "no share handler available"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Platform capabilities used by [`dispatch_share`].
pub trait SharePlatform {
    /// Present a chooser for sharing `text`.
    fn present_share_chooser(&self, text: &str) -> Result<(), ShareError>;

    /// Show a short-lived message to the user.
    fn show_notice(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Presented,
    NoticeShown,
}

/// Ask the platform to share `text`. A missing handler becomes a notice;
/// nothing is returned as an error.
pub fn dispatch_share(text: &str, platform: &impl SharePlatform) -> ShareOutcome {
    match platform.present_share_chooser(text) {
        Ok(()) => ShareOutcome::Presented,
        Err(ShareError::NoHandler) => {
            platform.show_notice(SHARING_NOT_AVAILABLE);
            ShareOutcome::NoticeShown
        }
    }
}

/// Share the totals from a snapshot.
pub fn share_sold_desserts(state: &DessertUiState, platform: &impl SharePlatform) -> ShareOutcome {
    let text = compose_share_text(state.desserts_sold, state.revenue);
    dispatch_share(&text, platform)
}

/// Whether a rejected `navigator.share` promise means sharing failed.
///
/// `AbortError` is the user dismissing the sheet. Every other rejection
/// (`NotAllowedError` from a permissions policy, `DataError`, `TypeError`,
/// or a value without a name) is treated as no usable handler.
pub fn rejection_is_failure(error_name: Option<&str>) -> bool {
    error_name != Some("AbortError")
}

/// Call `navigator.share({ text })` and return its promise.
///
/// `share` and `canShare` are not in the stable web-sys bindings, so they
/// are looked up by reflection. A missing `share`, `canShare` answering
/// false, or a synchronous throw all count as "no handler".
#[cfg(target_arch = "wasm32")]
pub fn navigator_share(text: &str) -> Result<js_sys::Promise, ShareError> {
    use js_sys::{Function, JsString, Object, Promise, Reflect};
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(ShareError::NoHandler)?;
    let navigator = window.navigator();

    let data = Object::new();
    Reflect::set(&data, &JsString::from("text"), &JsString::from(text))
        .map_err(|_| ShareError::NoHandler)?;

    let can_share = Reflect::get(&navigator, &JsString::from("canShare"))
        .map_err(|_| ShareError::NoHandler)?;
    if can_share.is_function() {
        let verdict = Function::from(can_share)
            .call1(&navigator, &data)
            .map_err(|_| ShareError::NoHandler)?;
        if verdict.as_bool() == Some(false) {
            return Err(ShareError::NoHandler);
        }
    }

    let share = Reflect::get(&navigator, &JsString::from("share"))
        .map_err(|_| ShareError::NoHandler)?;
    if !share.is_function() {
        return Err(ShareError::NoHandler);
    }
    Function::from(share)
        .call1(&navigator, &data)
        .map_err(|_| ShareError::NoHandler)?
        .dyn_into::<Promise>()
        .map_err(|_| ShareError::NoHandler)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigator_share(_text: &str) -> Result<js_sys::Promise, ShareError> {
    Err(ShareError::NoHandler)
}

/// Await a share promise in the background and call `on_failure` if it
/// rejects with anything other than a dismissal.
#[cfg(target_arch = "wasm32")]
pub fn watch_share(promise: js_sys::Promise, on_failure: impl FnOnce(ShareError) + 'static) {
    use js_sys::{JsString, Reflect};

    wasm_bindgen_futures::spawn_local(async move {
        let Err(error) = wasm_bindgen_futures::JsFuture::from(promise).await else {
            return;
        };
        let name = Reflect::get(&error, &JsString::from("name"))
            .ok()
            .and_then(|v| v.as_string());
        if rejection_is_failure(name.as_deref()) {
            crate::logging::warn(&format!(
                "navigator.share rejected: {}",
                name.as_deref().unwrap_or("unknown error")
            ));
            on_failure(ShareError::NoHandler);
        } else {
            crate::logging::info("share sheet dismissed");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_share(_promise: js_sys::Promise, _on_failure: impl FnOnce(ShareError) + 'static) {}
