//! Digit-grouping formatters for human-readable numbers.
//!
//! # Overview
//! Renders integers and floats in base 10 with a comma after every three
//! orders of magnitude: `834142` becomes `"834,142"`.
//!
//! # Design
//! - Every function is pure: no state, no I/O, no locale lookup.
//! - Integer and float paths share one grouping routine that works on the
//!   ASCII digits of the magnitude, so the sign is handled exactly once.
//! - A decimal limit on floats truncates. It never rounds and never pads.

mod comma;
mod commaf;

pub use comma::{comma, comma_u64};
pub use commaf::commaf;
