extern crate blas_src;
extern crate blas_sys;

use num_complex::Complex;

use crate::blas::{Axpy, Scal};

// `Complex<T>` is `#[repr(C)] { re, im }`, identical to the Fortran complex
// layout and to blas-sys's `[T; 2]` complex aliases, so the pointer casts
// below are sound.

macro_rules! impl_scal {
    ($t:ty, $alpha:ty => $scal:path) => {
        impl Scal<$alpha> for $t {
            unsafe fn scal(n: i32, alpha: $alpha, x: *mut Self, incx: i32) {
                $scal(&n, (&alpha as *const $alpha).cast(), x.cast(), &incx);
            }
        }
    };
}

macro_rules! impl_axpy {
    ($t:ty => $axpy:path) => {
        impl Axpy for $t {
            unsafe fn axpy(
                n: i32,
                alpha: Self,
                x: *const Self,
                incx: i32,
                y: *mut Self,
                incy: i32,
            ) {
                $axpy(&n, (&alpha as *const Self).cast(), x.cast(), &incx, y.cast(), &incy);
            }
        }
    };
}

impl_scal!(f32, f32 => blas_sys::sscal_);
impl_scal!(f64, f64 => blas_sys::dscal_);
impl_scal!(Complex<f32>, f32 => blas_sys::csscal_);
impl_scal!(Complex<f32>, Complex<f32> => blas_sys::cscal_);
impl_scal!(Complex<f64>, f64 => blas_sys::zdscal_);
impl_scal!(Complex<f64>, Complex<f64> => blas_sys::zscal_);

impl_axpy!(f32 => blas_sys::saxpy_);
impl_axpy!(f64 => blas_sys::daxpy_);
impl_axpy!(Complex<f32> => blas_sys::caxpy_);
impl_axpy!(Complex<f64> => blas_sys::zaxpy_);
