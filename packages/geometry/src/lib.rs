#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Planar geometry for risk zone construction.
//!
//! Operates entirely in projected (Web Mercator meter) space: [`buffer`]
//! tessellates an impact disc around a projected epicenter, [`ops`]
//! provides the rectangle-clip / union / translate primitives, and
//! [`antimeridian`] splits discs that overflow the projection's ±180°
//! edge into parts on opposite sides of the map.

pub mod antimeridian;
pub mod buffer;
pub mod ops;

use thiserror::Error;

/// Errors from disc buffering and polygon correction.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Buffer radius was zero, negative, or non-finite.
    #[error("buffer radius must be positive, got {radius_m} m")]
    InvalidRadius {
        /// Offending radius in meters.
        radius_m: f64,
    },

    /// A buffered disc overflowed both projection edges at once, meaning
    /// the radius is too large relative to the world width for a
    /// unilateral split to be correct.
    #[error("buffered geometry spans {width_m} m and overflows both projection edges")]
    OversizedBuffer {
        /// Horizontal extent of the offending geometry in meters.
        width_m: f64,
    },

    /// A clip or union produced geometry that cannot be passed
    /// downstream (empty, open ring, or non-finite coordinates).
    #[error("degenerate geometry: {message}")]
    Degenerate {
        /// Description of what went wrong.
        message: String,
    },
}
