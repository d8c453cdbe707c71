//! Ownership-aware numerical vectors backed by level-1 BLAS kernels.
//!
//! [`Vector`] is a contiguous container of `f32`/`f64`/[`Complex`] elements
//! that either owns its buffer or borrows one supplied by the caller, and
//! delegates scaling and accumulation to vendor-tuned BLAS routines selected
//! at compile time.
//!
//! A BLAS provider is chosen with a cargo feature (`openblas`, `netlib`,
//! `blis`, `accelerate` or `intel-mkl`). With no provider enabled, a portable
//! Rust backend implements the same kernels.
//!
//! ```
//! use vecblas::Vector;
//!
//! let mut v = Vector::from_slice(&[1.0f64, 2.0, 3.0]);
//! v *= 2.0;
//! v.try_add_assign(&Vector::filled(3, 1.0))?;
//! assert_eq!(v.as_slice(), &[3.0, 5.0, 7.0]);
//! # Ok::<(), vecblas::VectorError>(())
//! ```
//!
//! A single vector is not safe for unsynchronized concurrent mutation, and
//! borrowed views can alias each other; the type is deliberately neither
//! `Send` nor `Sync`.
//!
//! [`Complex`]: num_complex::Complex

/// Traits and implementations of the level-1 BLAS kernels
pub mod blas;

/// Error taxonomy for vector operations
pub mod error;

/// The dual-mode (owned/borrowed) storage backing a vector
pub mod storage;

/// The vector container and its operators
pub mod vector;

pub use error::VectorError;
pub use storage::{RawParts, Storage};
pub use vector::Vector;
