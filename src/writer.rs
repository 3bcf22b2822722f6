#[cfg(feature = "std")]
use std::io;

use crate::pack::Pack;

pub type Result<T> = core::result::Result<T, WriteError>;

/// Writes `values` to `stream`, one write per value, in argument order.
///
/// The destination is probed before any payload byte is emitted; a stream
/// that cannot accept data fails with [`WriteError::InvalidDestination`]
/// and nothing is written. Success returns the same stream reference, so
/// further writes can be chained onto it. No flush is implied.
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// let out = fixed_layout_io::write_to_stream(&mut out, (7u16, true)).unwrap();
/// assert_eq!(out.len(), 3);
/// ```
#[cfg(feature = "std")]
pub fn write_to_stream<W: io::Write, P: Pack>(stream: &mut W, values: P) -> Result<&mut W> {
    // A dead destination must fail before the first payload byte goes out.
    if stream.write(&[]).is_err() {
        return Err(WriteError::InvalidDestination);
    }
    values.write_to(stream).map_err(WriteError::Io)?;
    Ok(stream)
}

/// Writes `values` to the memory region starting at `dst` and returns the
/// address one past the last byte written, so a chained call continues
/// contiguously.
///
/// A null `dst` fails with [`WriteError::InvalidDestination`] before
/// anything is copied.
///
/// # Safety
///
/// `dst` must point to at least [`Pack::SIZE`] writable bytes for the
/// concrete pack type `P`. The region's actual size is not checked here;
/// it cannot be known from the pointer alone.
///
/// ```
/// let mut region = [0u8; 6];
/// let base = region.as_mut_ptr();
/// let next = unsafe { fixed_layout_io::write_to_memory(base, 0xAA55u16) }.unwrap();
/// assert_eq!(next as usize - base as usize, 2);
/// ```
#[allow(unsafe_code)]
pub unsafe fn write_to_memory<P: Pack>(dst: *mut u8, values: P) -> Result<*mut u8> {
    if dst.is_null() {
        return Err(WriteError::InvalidDestination);
    }
    let len = P::SIZE;
    // SAFETY: `dst` is non-null and the caller guarantees at least `len`
    // writable bytes behind it.
    let window = unsafe { core::slice::from_raw_parts_mut(dst, len) };
    values.write_into(window);
    // SAFETY: advancing by `len` lands at most one past the caller's
    // region, which is a valid address to compute.
    Ok(unsafe { dst.add(len) })
}

/// Writes `values` into `buf` starting at `offset` and returns the new
/// offset for the next write.
///
/// The buffer must already be sized to hold the pack: if fewer than
/// [`Pack::SIZE`] bytes remain between `offset` and the end of the buffer,
/// the call fails with [`WriteError::CapacityExceeded`] and the buffer is
/// left untouched. The buffer is never grown; its length and capacity do
/// not change.
///
/// ```
/// let mut buf = vec![0u8; 10];
/// let next = fixed_layout_io::write_to_buffer(&mut buf, 0, (42i32, 3.14f32)).unwrap();
/// assert_eq!(next, 8);
/// ```
pub fn write_to_buffer<P: Pack>(buf: &mut [u8], offset: usize, values: P) -> Result<usize> {
    let needed = P::SIZE;
    let available = buf.len().saturating_sub(offset);
    if needed > available {
        return Err(WriteError::CapacityExceeded { needed, available });
    }
    values.write_into(&mut buf[offset..offset + needed]);
    Ok(offset + needed)
}

/// Error type for the `write_to_*` entry points.
#[derive(Debug)]
pub enum WriteError {
    /// The destination cannot accept data: the stream is not open for
    /// writing, or the destination pointer is null. Raised before any
    /// byte is written.
    InvalidDestination,

    /// The buffer does not have room for the pack between the current
    /// offset and the end of the buffer. Raised before any byte is
    /// written; the buffer is left unmodified.
    CapacityExceeded {
        /// Total byte width of the pack.
        needed: usize,
        /// Bytes remaining between the offset and the end of the buffer.
        available: usize,
    },

    /// The underlying stream reported an error while the pack was being
    /// emitted.
    #[cfg(feature = "std")]
    Io(io::Error),
}

impl core::fmt::Display for WriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDestination => f.write_str("the destination cannot accept data"),
            Self::CapacityExceeded { needed, available } => {
                write!(
                    f,
                    "buffer capacity exceeded: the pack needs {needed} bytes but only {available} are available from the offset"
                )
            }
            #[cfg(feature = "std")]
            Self::Io(err) => write!(f, "stream write failed: {err}"),
        }
    }
}

impl core::error::Error for WriteError {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
