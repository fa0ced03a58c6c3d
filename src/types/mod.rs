//! Core types for OnBrand.

pub mod image;
pub mod message;

pub use image::*;
pub use message::*;
