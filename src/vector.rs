use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign};
use std::ptr::NonNull;

use num_traits::{Inv, One, Zero};

use crate::blas::{Axpy, Scal};
use crate::error::VectorError;
use crate::storage::{RawParts, Storage};

/// A contiguous numerical vector whose elementwise operations are delegated
/// to level-1 BLAS kernels.
///
/// A vector either owns its buffer or is a borrowed view over memory owned by
/// someone else (see [`Storage`]). Both modes expose the same operations;
/// mutating a borrowed vector writes through to the aliased memory, which is
/// the point of a view. Cloning always produces an owning deep copy.
pub struct Vector<T> {
    data: Storage<T>,
}

impl<T> Vector<T> {
    /// Creates a zero-filled vector of `len` elements.
    pub fn zeroed(len: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self::filled(len, T::zero())
    }

    /// Creates a vector of `len` elements, each set to `value`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Copy,
    {
        Self::from_boxed(vec![value; len].into_boxed_slice())
    }

    /// Creates an owning vector by copying the elements of `v`.
    pub fn from_slice(v: &[T]) -> Self
    where
        T: Copy,
    {
        Self::from_boxed(v.into())
    }

    /// Fallible [`zeroed`](Self::zeroed); reports [`VectorError::AllocationFailure`]
    /// instead of aborting when the buffer cannot be obtained.
    pub fn try_zeroed(len: usize) -> Result<Self, VectorError>
    where
        T: Zero + Copy,
    {
        Self::try_filled(len, T::zero())
    }

    /// Fallible [`filled`](Self::filled).
    pub fn try_filled(len: usize, value: T) -> Result<Self, VectorError>
    where
        T: Copy,
    {
        let mut buf = std::vec::Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| VectorError::AllocationFailure { len })?;
        buf.resize(len, value);
        Ok(Self::from_boxed(buf.into_boxed_slice()))
    }

    /// Fallible [`from_slice`](Self::from_slice).
    pub fn try_from_slice(v: &[T]) -> Result<Self, VectorError>
    where
        T: Copy,
    {
        let mut buf = std::vec::Vec::new();
        buf.try_reserve_exact(v.len())
            .map_err(|_| VectorError::AllocationFailure { len: v.len() })?;
        buf.extend_from_slice(v);
        Ok(Self::from_boxed(buf.into_boxed_slice()))
    }

    fn from_boxed(buf: Box<[T]>) -> Self {
        Self {
            data: Storage::Owned(buf),
        }
    }

    /// Creates a borrowed, non-owning view over `len` elements at `ptr`.
    ///
    /// No allocation takes place and dropping the view never frees the
    /// memory. Mutation through the view mutates the aliased memory.
    ///
    /// # Safety
    /// `ptr` must be non-null, properly aligned, and valid for reads and
    /// writes of `len` elements for the lifetime of the returned vector. The
    /// caller is responsible for lifetime ordering and for any aliasing this
    /// creates; use of the view after the memory goes away is UB.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        Self {
            data: Storage::borrowed(NonNull::new_unchecked(ptr), len),
        }
    }

    /// Creates a borrowed view over this vector's storage.
    ///
    /// Well-defined regardless of `self`'s mode: aliasing a borrowed vector
    /// yields a second view of the same underlying memory. The view's
    /// pointer is taken through `&mut self` so it carries write provenance.
    ///
    /// # Safety
    /// The returned view must not outlive the storage `self` references.
    /// For an owned source, accessing `self` directly invalidates the alias
    /// under pointer provenance rules; interleave accesses through one
    /// handle at a time. Unsynchronized mutation through both handles is a
    /// data race.
    pub unsafe fn alias(&mut self) -> Vector<T> {
        Self::from_raw_parts(self.data.as_mut_ptr(), self.data.len())
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether this vector owns its storage (`false` for borrowed views).
    pub fn is_owned(&self) -> bool {
        self.data.is_owned()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<&T, VectorError> {
        self.as_slice().get(index).ok_or(VectorError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// The raw view of the storage, for collaborating types that need
    /// zero-copy access to the buffer. See [`RawParts`] for the lifetime
    /// obligations this hands over.
    pub fn raw_parts(&mut self) -> RawParts<T> {
        let owned = self.is_owned();
        let len = self.len();
        RawParts {
            // owned boxes and borrowed views are both non-null
            ptr: unsafe { NonNull::new_unchecked(self.data.as_mut_ptr()) },
            len,
            owned,
        }
    }

    /// Converts into an owning vector, deep-copying if currently borrowed.
    pub fn into_owned(self) -> Self
    where
        T: Copy,
    {
        if self.is_owned() {
            self
        } else {
            Self::from_slice(self.as_slice())
        }
    }

    /// Scales every element by `alpha` in place, `x = alpha * x`.
    ///
    /// The scalar type may differ from the element type: complex vectors can
    /// be scaled by a real scalar through the dedicated kernels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn scale<A: Copy>(&mut self, alpha: A)
    where
        T: Scal<A>,
    {
        let n = self.len();
        if n == 0 {
            return;
        }
        debug_assert!(n <= i32::MAX as usize, "element count exceeds kernel range");
        unsafe { T::scal(n as i32, alpha, self.data.as_mut_ptr(), 1) }
    }

    /// Scaled accumulation in place, `self = alpha * x + self`.
    ///
    /// # Errors
    /// [`VectorError::DimensionMismatch`] if the lengths differ.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn try_axpy(&mut self, alpha: T, x: &Vector<T>) -> Result<(), VectorError>
    where
        T: Axpy,
    {
        let n = self.len();
        if n != x.len() {
            return Err(VectorError::DimensionMismatch {
                left: n,
                right: x.len(),
            });
        }
        if n == 0 {
            return Ok(());
        }
        debug_assert!(n <= i32::MAX as usize, "element count exceeds kernel range");
        unsafe { T::axpy(n as i32, alpha, x.data.as_ptr(), 1, self.data.as_mut_ptr(), 1) }
        Ok(())
    }

    /// Elementwise addition in place.
    ///
    /// # Errors
    /// [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn try_add_assign(&mut self, rhs: &Vector<T>) -> Result<(), VectorError>
    where
        T: Axpy + One,
    {
        self.try_axpy(T::one(), rhs)
    }

    /// Elementwise addition into a new owning vector.
    ///
    /// # Errors
    /// [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn try_add(&self, rhs: &Vector<T>) -> Result<Vector<T>, VectorError>
    where
        T: Axpy + One,
    {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }
}

/// An empty owning vector.
impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::from_boxed(std::vec::Vec::new().into_boxed_slice())
    }
}

/// Deep copy: the result always owns its storage, even when `self` is a
/// borrowed view.
impl<T: Copy> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        match &mut self.data {
            // reuse the allocation when the lengths already match
            Storage::Owned(buf) if buf.len() == source.len() => {
                buf.copy_from_slice(source.as_slice());
            }
            _ => *self = source.clone(),
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<std::vec::Vec<T>> for Vector<T> {
    fn from(v: std::vec::Vec<T>) -> Self {
        Self::from_boxed(v.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for Vector<T> {
    fn from(buf: Box<[T]>) -> Self {
        Self::from_boxed(buf)
    }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    fn from(v: &[T]) -> Self {
        Self::from_slice(v)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

impl<T, A> MulAssign<A> for Vector<T>
where
    T: Scal<A>,
    A: Copy,
{
    fn mul_assign(&mut self, alpha: A) {
        self.scale(alpha);
    }
}

impl<T, A> Mul<A> for Vector<T>
where
    T: Scal<A>,
    A: Copy,
{
    type Output = Vector<T>;

    fn mul(self, alpha: A) -> Vector<T> {
        let mut out = self.into_owned();
        out.scale(alpha);
        out
    }
}

impl<T, A> Mul<A> for &Vector<T>
where
    T: Scal<A>,
    A: Copy,
{
    type Output = Vector<T>;

    fn mul(self, alpha: A) -> Vector<T> {
        let mut out = self.clone();
        out.scale(alpha);
        out
    }
}

/// Division is scaling by the reciprocal; division by zero follows the scalar
/// type's IEEE-754 semantics and is never an error here.
impl<T, A> DivAssign<A> for Vector<T>
where
    T: Scal<A>,
    A: Copy + Inv<Output = A>,
{
    fn div_assign(&mut self, alpha: A) {
        self.scale(alpha.inv());
    }
}

impl<T, A> Div<A> for Vector<T>
where
    T: Scal<A>,
    A: Copy + Inv<Output = A>,
{
    type Output = Vector<T>;

    fn div(self, alpha: A) -> Vector<T> {
        let mut out = self.into_owned();
        out /= alpha;
        out
    }
}

impl<T, A> Div<A> for &Vector<T>
where
    T: Scal<A>,
    A: Copy + Inv<Output = A>,
{
    type Output = Vector<T>;

    fn div(self, alpha: A) -> Vector<T> {
        let mut out = self.clone();
        out /= alpha;
        out
    }
}

impl<T> AddAssign<&Vector<T>> for Vector<T>
where
    T: Axpy + One,
{
    /// # Panics
    /// If the vectors do not have the same length. Use
    /// [`try_add_assign`](Vector::try_add_assign) to handle the mismatch as
    /// an error value.
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl<T> Add<&Vector<T>> for &Vector<T>
where
    T: Axpy + One,
{
    type Output = Vector<T>;

    /// # Panics
    /// If the vectors do not have the same length.
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        match self.try_add(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Add<&Vector<T>> for Vector<T>
where
    T: Axpy + One,
{
    type Output = Vector<T>;

    /// # Panics
    /// If the vectors do not have the same length.
    fn add(mut self, rhs: &Vector<T>) -> Vector<T> {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;
    use crate::error::VectorError;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    #[test]
    fn zeroed_is_zero_filled() {
        let v = Vector::<f64>::zeroed(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0.0));

        let c = Vector::<Complex<f32>>::zeroed(2);
        assert_eq!(c.as_slice(), &[Complex::new(0.0, 0.0); 2]);
    }

    #[test]
    fn empty_vector() {
        let mut v = Vector::<f32>::zeroed(0);
        assert!(v.is_empty());
        // no kernel call for empty vectors; these are no-ops
        v *= 2.0f32;
        v.try_add_assign(&Vector::zeroed(0)).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn deep_copy_is_independent_of_source() {
        let mut buf = [1.0f64, 2.0, 3.0];
        let v = Vector::from_slice(&buf);
        buf[0] = 100.0;
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn shallow_view_aliases_the_buffer() {
        let mut buf = [1.0f64, 2.0, 3.0];
        {
            let mut v = unsafe { Vector::from_raw_parts(buf.as_mut_ptr(), 3) };
            assert!(!v.is_owned());
            v *= 2.0;
        }
        // writes are visible through the buffer, and dropping the view
        // did not free it
        assert_eq!(buf, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn alias_of_borrowed_vector() {
        let mut buf = [1.0f32, 1.0];
        let mut v = unsafe { Vector::from_raw_parts(buf.as_mut_ptr(), 2) };
        let mut w = unsafe { v.alias() };
        assert!(!w.is_owned());
        w[1] = 5.0;
        assert_eq!(v.as_slice(), &[1.0, 5.0]);
    }

    #[test]
    fn alias_of_owned_vector_writes_through() {
        let mut v = Vector::from_slice(&[1.0f64, 2.0]);
        {
            let mut w = unsafe { v.alias() };
            assert!(!w.is_owned());
            w[0] = 9.0;
        }
        assert_eq!(v.as_slice(), &[9.0, 2.0]);
    }

    #[test]
    fn clone_is_deep_and_owning() {
        let mut buf = [1.0f64, 2.0];
        let view = unsafe { Vector::from_raw_parts(buf.as_mut_ptr(), 2) };
        let copy = view.clone();
        assert!(copy.is_owned());
        drop(view);
        buf[0] = 9.0;
        assert_eq!(copy.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn clone_from_replaces_length_and_contents() {
        let mut dst = Vector::from_slice(&[0.0f64; 2]);
        let src = Vector::from_slice(&[1.0, 2.0, 3.0]);
        dst.clone_from(&src);
        assert_eq!(dst, src);

        // matching length reuses the allocation
        let src2 = Vector::from_slice(&[7.0, 8.0, 9.0]);
        let ptr = dst.as_ptr();
        dst.clone_from(&src2);
        assert_eq!(dst.as_ptr(), ptr);
        assert_eq!(dst, src2);
    }

    #[test]
    fn scale_then_unscale_round_trips() {
        let orig = [0.5f64, -1.25, 3.0, 0.0];
        let mut v = Vector::from_slice(&orig);
        v *= 3.7;
        v /= 3.7;
        for (a, b) in v.iter().zip(orig) {
            assert_relative_eq!(*a, b, max_relative = 1e-12);
        }
    }

    #[test]
    fn scale_and_accumulate_scenario() {
        let mut v = Vector::from_slice(&[1.0f64, 2.0, 3.0]);
        v *= 2.0;
        assert_eq!(v.as_slice(), &[2.0, 4.0, 6.0]);
        v += &Vector::filled(3, 1.0);
        assert_eq!(v.as_slice(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn addition_is_elementwise() {
        let v = Vector::from_slice(&[1.0f32, 2.0]);
        let w = Vector::from_slice(&[0.5f32, -2.0]);
        let sum = (&v + &w).into_owned();
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.as_slice(), &[1.5, 0.0]);
    }

    #[test]
    fn mismatched_addition_is_an_error() {
        let mut v = Vector::<f64>::zeroed(3);
        let w = Vector::<f64>::zeroed(4);
        assert_eq!(
            v.try_add_assign(&w),
            Err(VectorError::DimensionMismatch { left: 3, right: 4 })
        );
        // the failed call left the operand untouched
        assert_eq!(v, Vector::zeroed(3));
    }

    #[test]
    fn complex_scaled_by_real() {
        let mut v = Vector::filled(2, Complex::new(1.0f32, 1.0));
        v *= 2.0f32;
        assert_eq!(v.as_slice(), &[Complex::new(2.0, 2.0), Complex::new(2.0, 2.0)]);
    }

    #[test]
    fn complex_scaled_by_complex() {
        let mut v = Vector::from_slice(&[Complex::new(1.0f64, 2.0)]);
        v *= Complex::new(0.0, 1.0);
        assert_eq!(v.as_slice(), &[Complex::new(-2.0, 1.0)]);
    }

    #[test]
    fn axpy_with_explicit_alpha() {
        let mut y = Vector::from_slice(&[1.0f64, 1.0]);
        let x = Vector::from_slice(&[10.0, 20.0]);
        y.try_axpy(0.5, &x).unwrap();
        assert_eq!(y.as_slice(), &[6.0, 11.0]);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let v = Vector::from_slice(&[1.0f64, -2.0]) / 0.0;
        assert_eq!(v.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn checked_access() {
        let mut v = Vector::from_slice(&[1.0f64]);
        assert_eq!(*v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(1), Err(VectorError::OutOfRange { index: 1, len: 1 }));
        *v.get_mut(0).unwrap() = 4.0;
        assert_eq!(v[0], 4.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "element count exceeds kernel range")]
    fn scale_rejects_counts_beyond_kernel_range() {
        // the guard fires before any element is touched, so the dangling
        // pointer is never dereferenced
        let ptr = std::ptr::NonNull::<f64>::dangling().as_ptr();
        let mut v = unsafe { Vector::from_raw_parts(ptr, i32::MAX as usize + 1) };
        v.scale(2.0);
    }

    #[test]
    fn fallible_constructors() {
        let v = Vector::try_filled(3, 1.5f64).unwrap();
        assert_eq!(v.as_slice(), &[1.5; 3]);
        let w = Vector::try_from_slice(v.as_slice()).unwrap();
        assert_eq!(w, v);
        assert_eq!(
            Vector::<f64>::try_zeroed(usize::MAX),
            Err(VectorError::AllocationFailure { len: usize::MAX })
        );
    }

    #[test]
    fn adopting_a_std_vec() {
        let v: Vector<f64> = vec![1.0, 2.0].into();
        assert!(v.is_owned());
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn raw_parts_exposes_the_buffer() {
        let mut v = Vector::from_slice(&[3.0f64]);
        let parts = v.raw_parts();
        assert_eq!(parts.len, 1);
        assert!(parts.owned);
        assert_eq!(parts.ptr.as_ptr() as *const f64, v.as_ptr());
    }

    #[test]
    fn non_mutating_ops_return_owning_vectors() {
        let mut buf = [1.0f64, 2.0];
        let view = unsafe { Vector::from_raw_parts(buf.as_mut_ptr(), 2) };
        let scaled = &view * 2.0;
        assert!(scaled.is_owned());
        assert_eq!(scaled.as_slice(), &[2.0, 4.0]);
        // the view's buffer was not touched
        assert_eq!(view.as_slice(), &[1.0, 2.0]);
    }
}
