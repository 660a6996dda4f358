//! I/NAV page assembly.
//!
//! This module contains [`CollectWord`], which joins an even page and the
//! following odd page into an [`InavWord`], checking the framing of the
//! pages and the CRC of the page pair.

use crate::crc;
use crate::layout::page::{
    CRC, DATA, EVEN_ODD, EVEN_ODD_EVEN_PAGE, EVEN_ODD_ODD_PAGE, PAGE_TYPE_EVEN_PAGE,
    PAGE_TYPE_ODD_PAGE,
};
use crate::types::{BitSlice, InavPage, InavWord, PagePair, PAGE_BYTES, WORD_BYTES};

/// Result of feeding a page to [`CollectWord`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Assembled {
    /// An even page has been stored. Its odd page is awaited.
    Pending,
    /// An even page has been received while an odd page was awaited. The new
    /// even page replaces the one that was stored.
    Resync,
    /// A nominal page pair has been received and its CRC is correct.
    Word(InavWord),
}

/// Page assembly error.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PageError {
    /// The even/odd bit of the page does not match the page parity given
    /// by the caller, or an odd page has been received without a preceding
    /// even page. The page is discarded.
    Framing,
    /// The CRC of the page pair is wrong. The page pair is discarded.
    Crc,
    /// The page pair is an alert page. Alert pages do not carry an I/NAV
    /// word, so the page pair is discarded.
    Alert,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
enum State {
    AwaitingEven,
    AwaitingOdd { even: InavPage },
}

/// I/NAV word collector.
///
/// This joins each even page with the odd page that follows it. The state
/// machine waits for an even page, then for an odd page. Pages that break
/// this sequence are reported as errors or cause a resynchronization.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CollectWord {
    state: State,
}

impl CollectWord {
    /// Constructs a new collector, which waits for an even page.
    pub fn new() -> CollectWord {
        CollectWord {
            state: State::AwaitingEven,
        }
    }

    /// Feeds a page into the collector.
    ///
    /// The parameter `is_odd` indicates whether the page is an odd page
    /// according to the receiver timing. It must agree with the even/odd bit
    /// of the page.
    pub fn feed(&mut self, page: &InavPage, is_odd: bool) -> Result<Assembled, PageError> {
        log::trace!("feeding {} page {:02x?}", parity(is_odd), page);
        if EVEN_ODD.read_bool(BitSlice::from_slice(page)) != is_odd {
            log::warn!(
                "even/odd bit of {} page does not match; discarding page",
                parity(is_odd)
            );
            return Err(PageError::Framing);
        }
        match (self.state, is_odd) {
            (State::AwaitingEven, false) => {
                self.state = State::AwaitingOdd { even: *page };
                Ok(Assembled::Pending)
            }
            (State::AwaitingEven, true) => {
                log::warn!("odd page received without an even page; discarding page");
                Err(PageError::Framing)
            }
            (State::AwaitingOdd { .. }, false) => {
                log::debug!("even page received while waiting for odd page; resynchronizing");
                self.state = State::AwaitingOdd { even: *page };
                Ok(Assembled::Resync)
            }
            (State::AwaitingOdd { even }, true) => {
                self.state = State::AwaitingEven;
                Self::assemble(&even, page)
            }
        }
    }

    fn assemble(even: &InavPage, odd: &InavPage) -> Result<Assembled, PageError> {
        let mut pair = [0u8; 2 * PAGE_BYTES];
        pair[..PAGE_BYTES].copy_from_slice(even);
        pair[PAGE_BYTES..].copy_from_slice(odd);
        if !crc::check_page_pair(&pair) {
            log::warn!("wrong CRC in page pair; discarding page pair");
            return Err(PageError::Crc);
        }
        let bits = BitSlice::from_slice(&pair);
        if PAGE_TYPE_EVEN_PAGE.read_bool(bits) || PAGE_TYPE_ODD_PAGE.read_bool(bits) {
            log::debug!("received alert page pair");
            return Err(PageError::Alert);
        }
        let mut word = [0u8; WORD_BYTES];
        DATA.copy_to(bits, BitSlice::from_slice_mut(&mut word));
        log::trace!("assembled word {:02x?}", word);
        Ok(Assembled::Word(word))
    }

    /// Returns `true` if an even page is stored and its odd page is awaited.
    pub fn is_awaiting_odd(&self) -> bool {
        matches!(self.state, State::AwaitingOdd { .. })
    }

    /// Discards the stored even page, if any.
    pub fn reset(&mut self) {
        self.state = State::AwaitingEven;
    }
}

impl Default for CollectWord {
    fn default() -> CollectWord {
        CollectWord::new()
    }
}

fn parity(is_odd: bool) -> &'static str {
    if is_odd {
        "odd"
    } else {
        "even"
    }
}

/// Builds the nominal page pair that transmits an I/NAV word.
///
/// The even/odd bits and the CRC are filled in. The page type bits and the
/// OSNMA, SAR, spare, SSP and tail fields are set to zero. This is the
/// inverse of [`CollectWord`] and is useful to simulate a signal.
///
/// # Examples
/// ```
/// use galileo_inav::page::{encode_page_pair, Assembled, CollectWord};
///
/// let word = [0x55; 16];
/// let (even, odd) = encode_page_pair(&word);
/// let mut collect = CollectWord::new();
/// assert_eq!(collect.feed(&even, false), Ok(Assembled::Pending));
/// assert_eq!(collect.feed(&odd, true), Ok(Assembled::Word(word)));
/// ```
pub fn encode_page_pair(word: &InavWord) -> (InavPage, InavPage) {
    let mut pair: PagePair = [0; 2 * PAGE_BYTES];
    let bits = BitSlice::from_slice_mut(&mut pair);
    EVEN_ODD_EVEN_PAGE.write_unsigned(bits, 0);
    EVEN_ODD_ODD_PAGE.write_unsigned(bits, 1);
    DATA.copy_from(BitSlice::from_slice(word), bits);
    let crc = crc::compute_page_pair(&pair);
    CRC.write_unsigned(BitSlice::from_slice_mut(&mut pair), crc.into());
    let mut even = [0; PAGE_BYTES];
    let mut odd = [0; PAGE_BYTES];
    even.copy_from_slice(&pair[..PAGE_BYTES]);
    odd.copy_from_slice(&pair[PAGE_BYTES..]);
    (even, odd)
}
