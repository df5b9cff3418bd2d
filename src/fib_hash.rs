//! Fibonacci (multiplicative) hashing of `u64` keys.
//!
//! The key is multiplied by `2^64 / φ` and the top `64 - shift` bits of the
//! product are used as the slot index. For a table of `2^n` home slots the
//! shift is `64 - n`, which spreads keys uniformly across `[0, 2^n)`. See
//! <https://probablydance.com/2018/06/16/fibonacci-hashing-the-optimization-that-the-world-forgot-or-a-better-alternative-to-integer-modulo/>.

/// `2^64 / φ`, rounded to the nearest odd integer.
pub const FIB_MULTIPLIER: u64 = 11_400_714_819_323_198_485;

/// Hashes `key` to an index in `[0, 2^(64 - shift))`.
///
/// The low bit of the key is forced on before multiplying so that keys which
/// differ only in that bit land on the same home slot.
///
/// A `shift` of 64 or more maps every key to slot 0.
///
/// # Examples
///
/// ```rust
/// use robin_hash::fib_hash::hash;
/// use robin_hash::fib_hash::shift_for_size;
///
/// let shift = shift_for_size(1024);
/// assert_eq!(shift, 54);
/// assert!(hash(0xdead_beef, shift) < 1024);
///
/// // 4 and 5 only differ in the bit that is forced on.
/// assert_eq!(hash(4, shift), hash(5, shift));
/// ```
#[inline(always)]
pub fn hash(key: u64, shift: u32) -> u32 {
    let key = key | 1;
    key.wrapping_mul(FIB_MULTIPLIER).checked_shr(shift).unwrap_or(0) as u32
}

/// Returns the shift that maps [`hash`] onto `size` home slots.
///
/// `size` must be a power of two.
#[inline]
pub fn shift_for_size(size: usize) -> u32 {
    debug_assert!(size.is_power_of_two());
    64 - size.trailing_zeros()
}
