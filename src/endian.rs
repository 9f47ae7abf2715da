use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::bytes::{from_byte_array, to_byte_array, ByteArray};
use crate::types::U24;

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("Only little or big endian targets are supported");

#[derive(Copy, Clone, Debug, derive_more::Display, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    pub const fn is_native(self) -> bool {
        matches!((self, Self::NATIVE), (Self::Little, Self::Little) | (Self::Big, Self::Big))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time byte order tag
pub trait ByteOrder: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    const ENDIANNESS: Endianness;
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Little;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Big;

impl sealed::Sealed for Little {}
impl sealed::Sealed for Big {}

impl ByteOrder for Little {
    const ENDIANNESS: Endianness = Endianness::Little;
}

impl ByteOrder for Big {
    const ENDIANNESS: Endianness = Endianness::Big;
}

#[cfg(target_endian = "little")]
pub type Native = Little;
#[cfg(target_endian = "big")]
pub type Native = Big;

#[inline]
fn reorder<T: Pod>(bytes: &mut ByteArray<T>, from: Endianness, to: Endianness) {
    if from != to && size_of::<T>() > 1 {
        bytes.reverse()
    }
}

/// A `T` whose bytes are stored in order `O` regardless of host byte order.
///
/// Bytes are reordered only when crossing between `O` and another order,
/// i.e. on [`Endian::new`], [`Endian::get`] and [`Endian::from_endian`].
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Endian<T: Pod, O: ByteOrder> {
    bytes: ByteArray<T>,
    order: PhantomData<O>,
}

// Transparent over ByteArray<T>, PhantomData is zero sized
unsafe impl<T: Pod, O: ByteOrder> Zeroable for Endian<T, O> {}
unsafe impl<T: Pod, O: ByteOrder> Pod for Endian<T, O> {}

pub type LittleEndian<T> = Endian<T, Little>;
pub type BigEndian<T> = Endian<T, Big>;

impl<T: Pod, O: ByteOrder> Endian<T, O> {
    #[inline]
    pub fn new(value: T) -> Self {
        let mut bytes = ByteArray::new(value);
        reorder(&mut bytes, Endianness::NATIVE, O::ENDIANNESS);
        Self::from_byte_array(bytes)
    }

    /// Takes bytes already laid out in order `O`
    #[inline]
    pub const fn from_byte_array(bytes: ByteArray<T>) -> Self {
        Self { bytes, order: PhantomData }
    }

    pub fn from_raw_bytes<const N: usize>(bytes: [u8; N]) -> Self {
        from_byte_array(bytes)
    }

    pub fn from_endian<P: ByteOrder>(other: Endian<T, P>) -> Self {
        let mut bytes = other.bytes;
        reorder(&mut bytes, P::ENDIANNESS, O::ENDIANNESS);
        Self::from_byte_array(bytes)
    }

    pub fn endianness(&self) -> Endianness {
        O::ENDIANNESS
    }

    #[inline]
    pub fn get(self) -> T {
        let mut bytes = self.bytes;
        reorder(&mut bytes, O::ENDIANNESS, Endianness::NATIVE);
        bytes.get()
    }

    #[inline]
    pub fn to_ne(self) -> T {
        self.get()
    }

    pub fn set(&mut self, value: T) {
        *self = Self::new(value)
    }

    pub fn assign<P: ByteOrder>(&mut self, other: Endian<T, P>) {
        *self = Self::from_endian(other)
    }

    pub fn convert<P: ByteOrder>(self) -> Endian<T, P> {
        Endian::from_endian(self)
    }

    pub fn byte_array(&self) -> &ByteArray<T> {
        &self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Bytes in order `O`, as they would be written out
    pub fn to_raw_bytes<const N: usize>(self) -> [u8; N] {
        to_byte_array(self)
    }
}

impl<T: Pod, O: ByteOrder> Default for Endian<T, O> {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

impl<T: Pod, O: ByteOrder> From<T> for Endian<T, O> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Pod> From<BigEndian<T>> for LittleEndian<T> {
    fn from(other: BigEndian<T>) -> Self {
        Self::from_endian(other)
    }
}

impl<T: Pod> From<LittleEndian<T>> for BigEndian<T> {
    fn from(other: LittleEndian<T>) -> Self {
        Self::from_endian(other)
    }
}

impl<T: Pod + PartialEq, O: ByteOrder, P: ByteOrder> PartialEq<Endian<T, P>> for Endian<T, O> {
    fn eq(&self, other: &Endian<T, P>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Pod + Eq, O: ByteOrder> Eq for Endian<T, O> {}

impl<T: Pod + PartialEq, O: ByteOrder> PartialEq<T> for Endian<T, O> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: Pod + PartialOrd, O: ByteOrder, P: ByteOrder> PartialOrd<Endian<T, P>> for Endian<T, O> {
    fn partial_cmp(&self, other: &Endian<T, P>) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: Pod + Ord, O: ByteOrder> Ord for Endian<T, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T: Pod + Hash, O: ByteOrder> Hash for Endian<T, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<T: Pod + Debug, O: ByteOrder> Debug for Endian<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}({:?})", O::ENDIANNESS, self.get())
    }
}

impl<T: Pod + Display, O: ByteOrder> Display for Endian<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.get(), f)
    }
}

macro_rules! define {
    ($type:ty, $little:ident, $big:ident) => {
        pub type $little = LittleEndian<$type>;
        pub type $big = BigEndian<$type>;

        impl<O: ByteOrder> From<Endian<$type, O>> for $type {
            #[inline]
            fn from(endian: Endian<$type, O>) -> $type {
                endian.get()
            }
        }
    };
}

define!(u8, LeU8, BeU8);
define!(u16, LeU16, BeU16);
define!(u32, LeU32, BeU32);
define!(u64, LeU64, BeU64);
define!(i8, LeI8, BeI8);
define!(i16, LeI16, BeI16);
define!(i32, LeI32, BeI32);
define!(i64, LeI64, BeI64);
define!(f32, LeF32, BeF32);
define!(f64, LeF64, BeF64);
define!(U24, LeU24, BeU24);
