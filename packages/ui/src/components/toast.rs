//! Transient notifications, provided by `dioxus-primitives`.
//!
//! Wrap the router in [`ToastProvider`]; components call [`use_toast`] and
//! `success` / `error` on the handle.

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
