//! CRC-24Q.
//!
//! I/NAV page pairs are protected by a CRC-24Q, computed over the even page
//! (excluding its tail bits) followed by the odd page up to and including its
//! spare bits. See Section 4.3.2.4 of the Galileo OS SIS ICD.

use crate::layout::page::{CRC, CRC_PROTECTED};
use crate::types::{BitSlice, PagePair};

const CRC24Q_POLY: u32 = 0x86_4cfb;
const CRC24Q_MASK: u32 = 0xff_ffff;
const PROTECTED_BYTES: usize = 25;

/// Computes the CRC-24Q of a bit sequence.
///
/// The computation is done bit by bit, so `bits` does not need to be a
/// multiple of 8 bits long. The initial value of the register is zero and no
/// final XOR or bit reflection is used.
pub fn crc24q(bits: &BitSlice) -> u32 {
    bits.iter().by_vals().fold(0, |crc, bit| {
        let feedback = ((crc >> 23) & 1 == 1) ^ bit;
        let crc = (crc << 1) & CRC24Q_MASK;
        if feedback {
            crc ^ CRC24Q_POLY
        } else {
            crc
        }
    })
}

/// Computes the CRC-24Q of a page pair.
///
/// Only the protected bits are used. The contents of the CRC field of the
/// page pair are ignored.
pub fn compute_page_pair(pair: &PagePair) -> u32 {
    let mut protected = [0u8; PROTECTED_BYTES];
    let protected = &mut BitSlice::from_slice_mut(&mut protected)[..CRC_PROTECTED.len()];
    CRC_PROTECTED.copy_to(BitSlice::from_slice(pair), protected);
    crc24q(protected)
}

/// Checks the CRC-24Q of a page pair.
///
/// Returns `true` if the CRC field transmitted in the odd page matches the
/// CRC computed over the protected bits.
pub fn check_page_pair(pair: &PagePair) -> bool {
    let transmitted = CRC.read_unsigned(BitSlice::from_slice(pair));
    let computed = compute_page_pair(pair);
    log::trace!("CRC transmitted = {transmitted:06x}, computed = {computed:06x}");
    u64::from(computed) == transmitted
}
