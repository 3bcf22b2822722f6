use core::mem::size_of;

use zerocopy::{Immutable, IntoBytes};

#[cfg(feature = "std")]
use std::io;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the closed set of primitive scalar types the writers accept:
/// integers of every standard width, `usize`/`isize`, `f32`/`f64`, `bool`,
/// and `char`.
///
/// The trait is sealed. Pointers, references, and aggregate types cannot
/// implement it, so passing one to a writer is a compile-time error rather
/// than a runtime one.
pub trait Scalar: sealed::Sealed + IntoBytes + Immutable + Copy {}

/// An ordered, non-empty sequence of [`Scalar`] values, written
/// back-to-back with no padding, length prefix, or framing.
///
/// A single scalar is a pack of one. Tuples of up to twelve scalars are
/// packs and their elements are written in declaration order. The trait is
/// sealed along with [`Scalar`], so aggregates cannot opt in directly.
pub trait Pack: sealed::Sealed {
    /// Total number of bytes the pack occupies: the sum of each value's
    /// in-memory width.
    const SIZE: usize;

    /// Copies every value's native byte representation, in order, into
    /// the front of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than [`Self::SIZE`]. The `write_to_*`
    /// entry points validate the destination before calling this.
    fn write_into(&self, dst: &mut [u8]);

    /// Writes every value, in order, to `out`, one write per value.
    #[cfg(feature = "std")]
    fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()>;
}

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {}

            impl Pack for $ty {
                const SIZE: usize = size_of::<$ty>();

                #[inline]
                fn write_into(&self, dst: &mut [u8]) {
                    dst[..Self::SIZE].copy_from_slice(self.as_bytes());
                }

                #[cfg(feature = "std")]
                #[inline]
                fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
                    out.write_all(self.as_bytes())
                }
            }
        )+
    };
}

impl_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

macro_rules! impl_pack_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Scalar),+> sealed::Sealed for ($($name,)+) {}

        impl<$($name: Scalar),+> Pack for ($($name,)+) {
            const SIZE: usize = 0 $(+ size_of::<$name>())+;

            fn write_into(&self, dst: &mut [u8]) {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                let mut at = 0;
                $(
                    let bytes = $name.as_bytes();
                    dst[at..at + bytes.len()].copy_from_slice(bytes);
                    at += bytes.len();
                )+
                debug_assert_eq!(at, Self::SIZE);
            }

            #[cfg(feature = "std")]
            fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                $(out.write_all($name.as_bytes())?;)+
                Ok(())
            }
        }
    };
}

impl_pack_for_tuple!(A);
impl_pack_for_tuple!(A, B);
impl_pack_for_tuple!(A, B, C);
impl_pack_for_tuple!(A, B, C, D);
impl_pack_for_tuple!(A, B, C, D, E);
impl_pack_for_tuple!(A, B, C, D, E, F);
impl_pack_for_tuple!(A, B, C, D, E, F, G);
impl_pack_for_tuple!(A, B, C, D, E, F, G, H);
impl_pack_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_pack_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_pack_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_pack_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
