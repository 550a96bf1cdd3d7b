//! Core types and utilities for the block-DCT compression engine
//!
//! This crate provides the fundamental data structures shared by the rest of
//! the workspace: 8-bit images and floating point sample planes, the
//! reduction mode selecting how coefficients are discarded, constants, and
//! the error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{DctError, DctResult};
pub use image::*;
pub use types::*;
