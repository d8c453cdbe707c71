use std::fmt;
use std::ptr::NonNull;
use std::slice;

/// The buffer behind a [`Vector`](crate::Vector): either exclusively owned,
/// or a borrowed view into memory owned by someone else.
///
/// Release logic dispatches on the variant: dropping `Owned` frees the buffer
/// exactly once, dropping `Borrowed` never frees anything. Borrowed storage
/// can only be produced through `unsafe` constructors, which carry the
/// lifetime obligations.
pub enum Storage<T> {
    /// Exclusively owned, freed on drop.
    Owned(Box<[T]>),
    /// Non-owning view; the referenced memory must outlive this value.
    Borrowed(BorrowedBuf<T>),
}

/// The payload of [`Storage::Borrowed`]. Its fields are private so that
/// [`Storage::borrowed`] is the only way to produce a view; safe code cannot
/// conjure a borrowed storage out of an arbitrary pointer.
pub struct BorrowedBuf<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> Storage<T> {
    /// # Safety
    /// `ptr` must be valid for reads and writes of `len` elements for the
    /// lifetime of the returned storage, and properly aligned. The caller is
    /// responsible for any aliasing this creates.
    pub unsafe fn borrowed(ptr: NonNull<T>, len: usize) -> Self {
        Storage::Borrowed(BorrowedBuf { ptr, len })
    }

    pub fn len(&self) -> usize {
        match self {
            Storage::Owned(buf) => buf.len(),
            Storage::Borrowed(view) => view.len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Storage::Owned(_))
    }

    pub fn as_ptr(&self) -> *const T {
        match self {
            Storage::Owned(buf) => buf.as_ptr(),
            Storage::Borrowed(view) => view.ptr.as_ptr(),
        }
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self {
            Storage::Owned(buf) => buf.as_mut_ptr(),
            Storage::Borrowed(view) => view.ptr.as_ptr(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Storage::Owned(buf) => buf,
            Storage::Borrowed(view) => unsafe {
                slice::from_raw_parts(view.ptr.as_ptr(), view.len)
            },
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Owned(buf) => buf,
            Storage::Borrowed(view) => unsafe {
                slice::from_raw_parts_mut(view.ptr.as_ptr(), view.len)
            },
        }
    }
}

impl<T> From<Box<[T]>> for Storage<T> {
    fn from(buf: Box<[T]>) -> Self {
        Storage::Owned(buf)
    }
}

impl<T: fmt::Debug> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_owned() { "Owned" } else { "Borrowed" };
        f.debug_tuple(tag).field(&self.as_slice()).finish()
    }
}

/// The privileged raw view of a vector's storage, for collaborating types
/// that need zero-copy access to the buffer (e.g. a matrix wrapping a row).
///
/// Holding a `RawParts` does not extend the storage's lifetime; any use of
/// `ptr` after the vector is dropped (or, for borrowed vectors, after the
/// underlying memory goes away) is undefined behavior.
#[derive(Debug, Clone, Copy)]
pub struct RawParts<T> {
    pub ptr: NonNull<T>,
    pub len: usize,
    pub owned: bool,
}
