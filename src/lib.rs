//! Client-side behaviors for the static landing page.
//!
//! The crate compiles to WebAssembly and runs in the browser, but every
//! behavior lives behind small capability traits so it can be exercised
//! natively in tests. The browser binding in [`web`] only wires DOM events to
//! [`page::PageCore`] and renders what it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Event dispatch over owned page state ([`page::PageCore`]) |
//! | [`form`] | Form validation flow: per-field checks and submission |
//! | [`validation`] | Pure field rules and their failure messages |
//! | [`theme`] | Persisted light/dark mode toggle |
//! | [`counter`] | Bounded counter widget |
//! | [`accordion`] | Single-open FAQ accordion |
//! | [`storage`] | Key-value store capability and in-memory store |
//! | [`config`] | Page configuration (storage key, thresholds, element ids) |
//! | [`error`] | Infrastructure error types |
//! | [`consts`] | User-facing messages and CSS class names |
//! | `web` | DOM binding, compiled with the `hydrate` feature |

pub mod accordion;
pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod form;
pub mod page;
pub mod storage;
pub mod theme;
pub mod validation;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod test_support;
