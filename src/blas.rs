//! The level-1 kernel boundary.
//!
//! Each scalar type maps to exactly one external kernel per operation; the
//! mapping is a compile-time trait-bound selection, never a runtime branch.
//! All raw-pointer marshaling happens in the backend modules below so the
//! vector logic itself never touches raw pointers directly.

#[cfg(feature = "blas-sys")]
mod sys;

#[cfg(not(feature = "blas-sys"))]
mod native;

/// Scaling of a vector by a scalar, `x = alpha * x`.
///
/// `A` is the scalar type, which may differ from the element type: complex
/// elements support scaling by their real component type through dedicated
/// kernels (`csscal`/`zdscal`) in addition to full complex scaling.
pub trait Scal<A: Copy>: Copy {
    /// # Safety
    /// `x` must point to at least `1 + (n - 1) * incx` valid elements, with
    /// `n >= 1` and `incx >= 1`. This is often a call across an FFI barrier,
    /// so violations are UB unchecked by rust.
    unsafe fn scal(n: i32, alpha: A, x: *mut Self, incx: i32);
}

/// Scaled accumulation of one vector into another, `y = alpha * x + y`.
pub trait Axpy: Copy {
    /// # Safety
    /// `x` must point to at least `1 + (n - 1) * incx` valid elements and `y`
    /// to at least `1 + (n - 1) * incy`, with `n >= 1` and positive
    /// increments. `x` and `y` must not overlap.
    unsafe fn axpy(n: i32, alpha: Self, x: *const Self, incx: i32, y: *mut Self, incy: i32);
}
