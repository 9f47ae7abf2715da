//! Element-wise byte array conversion over sequences of values

use alloc::vec::Vec;

use bytemuck::Pod;

use crate::bytes::{from_byte_array, to_byte_array};
use crate::error::Error;

pub fn to_byte_arrays<I, T, const N: usize>(values: I) -> impl Iterator<Item = [u8; N]>
where
    I: IntoIterator<Item = T>,
    T: Pod,
{
    values.into_iter().map(to_byte_array::<T, N>)
}

pub fn from_byte_arrays<I, T, const N: usize>(arrays: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = [u8; N]>,
    T: Pod,
{
    arrays.into_iter().map(from_byte_array::<T, N>)
}

/// Writes one array per value into `output` and returns the unwritten rest,
/// nothing is written if `output` is too short
pub fn write_byte_arrays<'a, T: Pod, const N: usize>(
    values: &[T],
    output: &'a mut [[u8; N]],
) -> Result<&'a mut [[u8; N]], Error> {
    trace!("Write {} values into {} arrays of {} bytes", values.len(), output.len(), N);
    if output.len() < values.len() {
        debug!("Output too short, {} < {}", output.len(), values.len());
        return Err(Error::OutputTooShort { needed: values.len(), available: output.len() });
    }
    let (head, rest) = output.split_at_mut(values.len());
    for (array, &value) in head.iter_mut().zip(values) {
        *array = to_byte_array(value);
    }
    Ok(rest)
}

/// Inverse of [`write_byte_arrays`]
pub fn read_byte_arrays<'a, T: Pod, const N: usize>(
    arrays: &[[u8; N]],
    output: &'a mut [T],
) -> Result<&'a mut [T], Error> {
    trace!("Read {} arrays of {} bytes into {} values", arrays.len(), N, output.len());
    if output.len() < arrays.len() {
        debug!("Output too short, {} < {}", output.len(), arrays.len());
        return Err(Error::OutputTooShort { needed: arrays.len(), available: output.len() });
    }
    let (head, rest) = output.split_at_mut(arrays.len());
    for (value, &array) in head.iter_mut().zip(arrays) {
        *value = from_byte_array(array);
    }
    Ok(rest)
}

pub fn to_byte_array_vec<T: Pod, const N: usize>(values: &[T]) -> Vec<[u8; N]> {
    trace!("Convert {} values to arrays of {} bytes", values.len(), N);
    let mut vec = Vec::with_capacity(values.len());
    vec.extend(values.iter().map(|&value| to_byte_array::<T, N>(value)));
    vec
}

pub fn from_byte_array_vec<T: Pod, const N: usize>(arrays: &[[u8; N]]) -> Vec<T> {
    trace!("Convert {} arrays of {} bytes to values", arrays.len(), N);
    let mut vec = Vec::with_capacity(arrays.len());
    vec.extend(arrays.iter().map(|&array| from_byte_array::<T, N>(array)));
    vec
}

/// Same as [`to_byte_array_vec`] without allocation
pub fn collect_byte_arrays<T: Pod, const N: usize, const CAP: usize>(
    values: &[T],
) -> Result<heapless::Vec<[u8; N], CAP>, Error> {
    trace!("Collect {} values into capacity {}", values.len(), CAP);
    if values.len() > CAP {
        debug!("Capacity exceeded, {} > {}", values.len(), CAP);
        return Err(Error::CapacityExceeded { needed: values.len(), capacity: CAP });
    }
    let mut vec = heapless::Vec::new();
    vec.extend(values.iter().map(|&value| to_byte_array::<T, N>(value)));
    Ok(vec)
}

/// All values as one contiguous byte slice
pub fn as_flat_bytes<T: Pod>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}
