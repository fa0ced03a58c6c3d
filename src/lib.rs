//! OnBrand: tool invocation display and branded image generation.
//!
//! A chat assistant's model runtime emits tool "call" and "result" parts whose
//! shape differs between SDK revisions. This crate turns those parts into a
//! stable, typed view and into presentation records a UI can paint, and ships
//! the `generateImage` tool the runtime invokes.
//!
//! # Quick Start
//!
//! ```
//! use onbrand::invocation::normalize;
//! use onbrand::render::render_call;
//!
//! let part = serde_json::json!({
//!     "type": "tool-generateImage",
//!     "input": { "prompt": "poster" }
//! });
//! let call = render_call(&normalize(&part));
//! assert_eq!(call.arg_summary, "poster");
//! ```

pub mod config;
pub mod contracts;
pub mod conversation;
pub mod error;
pub mod invocation;
pub mod prelude;
pub mod provider;
pub mod render;
pub mod tools;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
