//! Portable fallback kernels, used when no BLAS provider feature is enabled.
//!
//! Same signatures and stride semantics as the Fortran routines, so the
//! dispatch layer is identical either way.

use num_complex::Complex;

use crate::blas::{Axpy, Scal};

macro_rules! impl_scal {
    ($t:ty, $alpha:ty) => {
        impl Scal<$alpha> for $t {
            unsafe fn scal(n: i32, alpha: $alpha, x: *mut Self, incx: i32) {
                let incx = incx as isize;
                for i in 0..n as isize {
                    let xi = x.offset(i * incx);
                    *xi = *xi * alpha;
                }
            }
        }
    };
}

macro_rules! impl_axpy {
    ($t:ty) => {
        impl Axpy for $t {
            unsafe fn axpy(
                n: i32,
                alpha: Self,
                x: *const Self,
                incx: i32,
                y: *mut Self,
                incy: i32,
            ) {
                let (incx, incy) = (incx as isize, incy as isize);
                for i in 0..n as isize {
                    let yi = y.offset(i * incy);
                    *yi = alpha * *x.offset(i * incx) + *yi;
                }
            }
        }
    };
}

impl_scal!(f32, f32);
impl_scal!(f64, f64);
impl_scal!(Complex<f32>, f32);
impl_scal!(Complex<f32>, Complex<f32>);
impl_scal!(Complex<f64>, f64);
impl_scal!(Complex<f64>, Complex<f64>);

impl_axpy!(f32);
impl_axpy!(f64);
impl_axpy!(Complex<f32>);
impl_axpy!(Complex<f64>);
