//! Reinterpretation between a plain-data value and its raw bytes

use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::mem::size_of;
use core::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};

use crate::error::Error;

struct SizeOf<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> SizeOf<T, N> {
    // Evaluated per instantiation, so a mismatch fails the build
    const MATCHES: () = assert!(size_of::<T>() == N, "array length differs from size of value");
}

/// Bytes of `value` in memory order, `N` must equal `size_of::<T>()`
#[inline]
pub fn to_byte_array<T: Pod, const N: usize>(value: T) -> [u8; N] {
    let () = SizeOf::<T, N>::MATCHES;
    bytemuck::cast(value)
}

/// Inverse of [`to_byte_array`]
#[inline]
pub fn from_byte_array<T: Pod, const N: usize>(bytes: [u8; N]) -> T {
    let () = SizeOf::<T, N>::MATCHES;
    bytemuck::cast(bytes)
}

/// Owns the `size_of::<T>()` bytes of a `T`.
///
/// Alignment is 1, so it can be placed at any offset of a `#[repr(C)]` record
/// without introducing padding.
#[repr(C, packed)]
pub struct ByteArray<T: Pod>(T);

impl<T: Pod> Clone for ByteArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Pod> Copy for ByteArray<T> {}

// Single Pod field with packed(1): no padding, every bit pattern valid
unsafe impl<T: Pod> Zeroable for ByteArray<T> {}
unsafe impl<T: Pod> Pod for ByteArray<T> {}

impl<T: Pod> ByteArray<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn zeroed() -> Self {
        Zeroable::zeroed()
    }

    /// Builds the value in place and captures its bytes
    pub fn with<F: FnOnce() -> T>(f: F) -> Self {
        Self(f())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.len() == size_of::<T>() {
            true => Ok(Self(bytemuck::pod_read_unaligned(bytes))),
            false => Err(Error::LengthMismatch { expected: size_of::<T>(), actual: bytes.len() }),
        }
    }

    pub fn from_array<const N: usize>(bytes: [u8; N]) -> Self {
        Self(from_byte_array(bytes))
    }

    #[inline]
    pub fn get(&self) -> T {
        bytemuck::pod_read_unaligned(self.as_bytes())
    }

    pub fn to_array<const N: usize>(&self) -> [u8; N] {
        to_byte_array(*self)
    }

    pub const fn len(&self) -> usize {
        size_of::<T>()
    }

    pub const fn is_empty(&self) -> bool {
        size_of::<T>() == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::bytes_of_mut(self)
    }

    /// Reverses byte order in place
    #[inline]
    pub fn reverse(&mut self) {
        self.as_bytes_mut().reverse()
    }
}

impl<T: Pod> Default for ByteArray<T> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Pod> From<T> for ByteArray<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Pod> Deref for ByteArray<T> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: Pod> DerefMut for ByteArray<T> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl<T: Pod> AsRef<[u8]> for ByteArray<T> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: Pod> AsMut<[u8]> for ByteArray<T> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl<'a, T: Pod> IntoIterator for &'a ByteArray<T> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

impl<'a, T: Pod> IntoIterator for &'a mut ByteArray<T> {
    type Item = &'a mut u8;
    type IntoIter = core::slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes_mut().iter_mut()
    }
}

impl<T: Pod> PartialEq for ByteArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<T: Pod> Eq for ByteArray<T> {}

impl<T: Pod> core::hash::Hash for ByteArray<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(self.as_bytes(), state)
    }
}

impl<T: Pod> Debug for ByteArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:02X?}", self.as_bytes())
    }
}
