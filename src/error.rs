use displaydoc::Display;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum Error {
    /// Expected {expected} bytes but got {actual}
    LengthMismatch { expected: usize, actual: usize },
    /// Output holds {available} elements but {needed} are required
    OutputTooShort { needed: usize, available: usize },
    /// Capacity {capacity} exceeded, {needed} elements required
    CapacityExceeded { needed: usize, capacity: usize },
    /// Value {0} out of 24-bit range
    OutOfRange(u32),
}
