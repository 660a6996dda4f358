//! Common types.
//!
//! This module contains the container types used to hold I/NAV pages and words,
//! together with their sizes.

/// Number of bits in an I/NAV page (one half of a nominal page pair).
pub const PAGE_BITS: usize = 120;
/// Number of bytes needed to hold an I/NAV page.
pub const PAGE_BYTES: usize = PAGE_BITS / 8;
/// I/NAV page.
///
/// A 120-bit even or odd page, as given by the demodulator after
/// deinterleaving and Viterbi decoding. The first transmitted bit is the MSB of
/// the first byte.
pub type InavPage = [u8; PAGE_BYTES];

/// Number of bytes needed to hold an even page followed by its odd page.
pub const PAGE_PAIR_BYTES: usize = 2 * PAGE_BYTES;
/// Even page concatenated with its odd page.
pub type PagePair = [u8; PAGE_PAIR_BYTES];

/// Number of bits in an I/NAV word.
pub const WORD_BITS: usize = 128;
/// Number of bytes needed to hold an I/NAV word.
pub const WORD_BYTES: usize = WORD_BITS / 8;
/// I/NAV word.
///
/// The 128-bit word (Data_jk in the ICD) obtained by joining the 112 data bits
/// of an even page with the 16 data bits of its odd page. The 6-bit word type
/// occupies the first bits.
pub type InavWord = [u8; WORD_BYTES];

/// Number of SVNs in the Galileo constellation.
pub const NUM_SVNS: usize = 36;

/// Issue of data of the navigation batch (IOD_nav, 10 bits).
pub type IodNav = u16;
/// Issue of data of the almanac batch (IODa, 4 bits).
pub type IodA = u8;

/// Bit slice used to access I/NAV data.
pub type BitSlice = bitvec::slice::BitSlice<u8, bitvec::order::Msb0>;
