//! # pixcmp-ops
//!
//! Difference scoring between two decoded images, for visual-regression
//! testing.
//!
//! # Modules
//!
//! - [`normalize`] - Convert any [`DecodedImage`](pixcmp_core::DecodedImage) to canonical bytes
//! - [`compare`] - Precise (per-pixel, 16-bit) and fast (byte scan) comparators
//! - [`kernel`] - Squared-difference kernels and the score type
//! - [`guard`] - Bounds equality checks
//! - [`parallel`] - Rayon row-partitioned comparators (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use pixcmp_core::{Bounds, RgbaBuffer};
//! use pixcmp_ops::{compare_fast, compare_precise, normalize};
//!
//! let a = RgbaBuffer::filled(Bounds::from_size(8, 8), [200, 100, 50, 255]);
//! let mut b = a.clone();
//! b.set_pixel(3, 3, [0, 0, 0, 255]);
//!
//! let precise = compare_precise(&a, &b)?;
//! let fast = compare_fast(&normalize(&a), &normalize(&b))?;
//! assert!(precise > 0 && fast > 0);
//! # Ok::<(), pixcmp_ops::OpsError>(())
//! ```
//!
//! Scores from the two methods live on different scales; see
//! [`compare`] for details.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod compare;
pub mod guard;
pub mod kernel;
pub mod normalize;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use compare::{compare_fast, compare_precise, compare_precise_with, CompareOptions};
pub use error::{OpsError, OpsResult};
pub use kernel::ErrorScore;
pub use normalize::{normalize, normalize_owned};

#[cfg(feature = "parallel")]
pub use parallel::{compare_fast_par, compare_precise_par, compare_precise_par_with};
