use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::error::Error;

// Slot 1 always holds bits 8..16, the other two follow host byte order
const MIDDLE: usize = 1;
#[cfg(target_endian = "little")]
const LOW: usize = 0;
#[cfg(target_endian = "little")]
const HIGH: usize = 2;
#[cfg(target_endian = "big")]
const LOW: usize = 2;
#[cfg(target_endian = "big")]
const HIGH: usize = 0;

const MASK: u32 = 0xFF_FFFF;

/// 24-bit unsigned integer stored as 3 bytes in host byte order
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U24([u8; 3]);

impl U24 {
    pub const BITS: u32 = 24;
    pub const MIN: Self = Self::new(0);
    pub const MAX: Self = Self::new(MASK);

    /// Wraps modulo 2^24
    pub const fn new(value: u32) -> Self {
        let mut bytes = [0u8; 3];
        bytes[LOW] = value as u8;
        bytes[MIDDLE] = (value >> 8) as u8;
        bytes[HIGH] = (value >> 16) as u8;
        Self(bytes)
    }

    pub const fn get(self) -> u32 {
        (self.0[HIGH] as u32) << 16 | (self.0[MIDDLE] as u32) << 8 | self.0[LOW] as u32
    }

    pub const fn from_ne_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    pub const fn to_ne_bytes(self) -> [u8; 3] {
        self.0
    }

    pub const fn from_le_bytes(bytes: [u8; 3]) -> Self {
        Self::new((bytes[2] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[0] as u32)
    }

    pub const fn to_le_bytes(self) -> [u8; 3] {
        [self.0[LOW], self.0[MIDDLE], self.0[HIGH]]
    }

    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self::new((bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32)
    }

    pub const fn to_be_bytes(self) -> [u8; 3] {
        [self.0[HIGH], self.0[MIDDLE], self.0[LOW]]
    }
}

impl From<u8> for U24 {
    fn from(value: u8) -> Self {
        Self::new(value as u32)
    }
}

impl From<u16> for U24 {
    fn from(value: u16) -> Self {
        Self::new(value as u32)
    }
}

impl TryFrom<u32> for U24 {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value > MASK {
            true => Err(Error::OutOfRange(value)),
            false => Ok(Self::new(value)),
        }
    }
}

impl From<U24> for u32 {
    fn from(value: U24) -> u32 {
        value.get()
    }
}

impl From<U24> for u64 {
    fn from(value: U24) -> u64 {
        value.get() as u64
    }
}

impl From<U24> for i32 {
    fn from(value: U24) -> i32 {
        value.get() as i32
    }
}

impl From<U24> for i64 {
    fn from(value: U24) -> i64 {
        value.get() as i64
    }
}

impl PartialOrd for U24 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U24 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl Debug for U24 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.get(), f)
    }
}

impl Display for U24 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.get(), f)
    }
}

impl LowerHex for U24 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        LowerHex::fmt(&self.get(), f)
    }
}

impl UpperHex for U24 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        UpperHex::fmt(&self.get(), f)
    }
}

impl ops::Not for U24 {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(!self.get())
    }
}

// Computed on u32 then wrapped back, 2^24 divides 2^32 so wrapping u32
// arithmetic agrees with arithmetic modulo 2^24
macro_rules! binary_op {
    (
        $trait:ident, $method:ident, $assign_trait:ident, $assign:ident, $rhs:ty,
        |$a:ident, $b:ident| $op:expr
    ) => {
        impl ops::$trait<$rhs> for U24 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self {
                let ($a, $b) = (self.get(), u32::from(rhs));
                Self::new($op)
            }
        }

        impl ops::$assign_trait<$rhs> for U24 {
            #[inline]
            fn $assign(&mut self, rhs: $rhs) {
                *self = ops::$trait::$method(*self, rhs)
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, U24, |a, b| a.wrapping_add(b));
binary_op!(Sub, sub, SubAssign, sub_assign, U24, |a, b| a.wrapping_sub(b));
binary_op!(Mul, mul, MulAssign, mul_assign, U24, |a, b| a.wrapping_mul(b));
binary_op!(Div, div, DivAssign, div_assign, U24, |a, b| a / b);
binary_op!(Rem, rem, RemAssign, rem_assign, U24, |a, b| a % b);
binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, U24, |a, b| a & b);
binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, U24, |a, b| a | b);
binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, U24, |a, b| a ^ b);
binary_op!(Shl, shl, ShlAssign, shl_assign, U24, |a, b| a.checked_shl(b).unwrap_or(0));
binary_op!(Shr, shr, ShrAssign, shr_assign, U24, |a, b| a.checked_shr(b).unwrap_or(0));
binary_op!(Shl, shl, ShlAssign, shl_assign, u32, |a, b| a.checked_shl(b).unwrap_or(0));
binary_op!(Shr, shr, ShrAssign, shr_assign, u32, |a, b| a.checked_shr(b).unwrap_or(0));

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::U24;
    use crate::endian::{BeU24, LeU24};
    use crate::error::Error;

    #[test]
    fn test_wraparound() {
        assert_eq!(U24::new(0).get(), 0);
        assert_eq!(U24::new(0xFF_FFFF).get(), 0xFF_FFFF);
        assert_eq!(U24::new(1 << 24).get(), 0);
        assert_eq!(U24::new((1 << 24) + 5).get(), 5);
        assert_eq!(U24::new(u32::MAX), U24::MAX);
        assert_eq!(U24::try_from(0x1000000u32), Err(Error::OutOfRange(0x1000000)));
        assert_eq!(U24::try_from(0xABCDEFu32), Ok(U24::new(0xABCDEF)));
        assert_eq!(U24::from(0xFFFFu16).get(), 0xFFFF);
    }

    #[test]
    fn test_packing() {
        let value = U24::new(0x010203);
        assert_eq!(value.to_ne_bytes()[1], 0x02);
        #[cfg(target_endian = "little")]
        assert_eq!(value.to_ne_bytes(), hex!("03 02 01"));
        #[cfg(target_endian = "big")]
        assert_eq!(value.to_ne_bytes(), hex!("01 02 03"));
        assert_eq!(value.to_le_bytes(), hex!("03 02 01"));
        assert_eq!(value.to_be_bytes(), hex!("01 02 03"));
        assert_eq!(U24::from_le_bytes(hex!("03 02 01")), value);
        assert_eq!(U24::from_be_bytes(hex!("01 02 03")), value);
        assert_eq!(U24::from_ne_bytes(value.to_ne_bytes()), value);
        assert_eq!(bytemuck::bytes_of(&value), &value.to_ne_bytes());
    }

    #[test]
    fn test_endian() {
        let little = LeU24::new(U24::new(0x010203));
        let big = BeU24::new(U24::new(0x010203));
        assert_eq!(little.to_raw_bytes::<3>(), hex!("03 02 01"));
        assert_eq!(big.to_raw_bytes::<3>(), hex!("01 02 03"));
        assert_eq!(little.get().get(), 0x010203);
        assert_eq!(u32::from(U24::from(big)), 0x010203);
        assert_eq!(BeU24::from(little).as_bytes(), big.as_bytes());
    }

    #[test]
    fn test_arithmetic() {
        let max = U24::MAX;
        assert_eq!(max + U24::new(1), U24::MIN);
        assert_eq!(U24::MIN - U24::new(1), U24::MAX);
        assert_eq!(U24::new(0x800000) * U24::new(2), U24::MIN);
        assert_eq!(U24::new(100) / U24::new(7), U24::new(14));
        assert_eq!(U24::new(100) % U24::new(7), U24::new(2));
        assert_eq!(U24::new(0xF0F0F0) & U24::new(0x0FF00F), U24::new(0x00F000));
        assert_eq!(U24::new(0xF00000) | U24::new(0x00000F), U24::new(0xF0000F));
        assert_eq!(U24::new(0xFFFF00) ^ U24::new(0x0F0F0F), U24::new(0xF0F00F));
        assert_eq!(!U24::new(0), U24::MAX);
        assert_eq!(U24::new(0x800001) << 1u32, U24::new(2));
        assert_eq!(U24::new(0x800000) >> U24::new(23), U24::new(1));
        assert_eq!(U24::new(1) << 40u32, U24::MIN);

        let mut value = U24::new(10);
        value += U24::new(5);
        value -= U24::new(20);
        assert_eq!(value, U24::new(0xFF_FFFB));
        value *= U24::new(2);
        value /= U24::new(2);
        assert_eq!(value, U24::new(0x7F_FFFB));
        value %= U24::new(0x10);
        value |= U24::new(0x100);
        value &= U24::new(0x10F);
        value ^= U24::new(0x001);
        value <<= 4u32;
        value >>= U24::new(8);
        assert_eq!(value, U24::new(0x10));
    }

    #[test]
    fn test_format() {
        let value = U24::new(0xABCDEF);
        assert_eq!(format!("{}", value), "11259375");
        assert_eq!(format!("{:?}", value), "11259375");
        assert_eq!(format!("{:x}", value), "abcdef");
        assert_eq!(format!("{:#X}", value), "0xABCDEF");
        assert!(U24::new(0x010000) > U24::new(0x00FFFF));
    }
}
