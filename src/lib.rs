#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[macro_use]
extern crate log;

pub mod batch;
pub mod bytes;
pub mod endian;
pub mod error;
pub mod types;

pub use bytes::{from_byte_array, to_byte_array, ByteArray};
pub use endian::{BeF32, BeF64, BeI16, BeI32, BeI64, BeI8, BeU16, BeU24, BeU32, BeU64, BeU8};
pub use endian::{Big, BigEndian, ByteOrder, Endian, Endianness, Little, LittleEndian, Native};
pub use endian::{LeF32, LeF64, LeI16, LeI32, LeI64, LeI8, LeU16, LeU24, LeU32, LeU64, LeU8};
pub use error::Error;
pub use types::U24;
