//! I/NAV decoder.
//!
//! This module contains [`InavDecoder`], which is the main entry point of the
//! crate. It joins the [`page`](crate::page), [`words`](crate::words) and
//! [`navmessage`](crate::navmessage) stages into a single object that is fed
//! with pages and returns navigation data records.

use crate::gst::Gst;
use crate::navmessage::CollectNavMessage;
use crate::page::{Assembled, CollectWord, PageError};
use crate::records::{Almanac, Ephemeris, Iono, UtcModel};
use crate::types::{InavPage, InavWord};
use crate::words::{UnknownWordType, Word, WordType};

/// Outcome of feeding a page or word to an [`InavDecoder`].
///
/// Only [`FrameOutcome::Accepted`] means that navigation data has been
/// updated. All the other outcomes are recoverable, and the decoder can
/// keep being fed with pages after any of them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FrameOutcome {
    /// An even page has been stored and its odd page is awaited.
    Pending,
    /// An even page has replaced the even page that was stored.
    Resync,
    /// A word has been decoded and fed to the navigation message.
    Accepted(WordType),
    /// The page does not fit the even/odd page sequence and has been
    /// discarded.
    FramingError,
    /// The CRC of the page pair is wrong. No data has been updated.
    CrcError,
    /// The page pair is an alert page. No data has been updated.
    AlertPage,
    /// The word has a word type that is not decoded. No data has been updated.
    UnknownWordType(u8),
}

impl FrameOutcome {
    /// Returns `true` if the outcome indicates a discarded page or word.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            FrameOutcome::FramingError
                | FrameOutcome::CrcError
                | FrameOutcome::AlertPage
                | FrameOutcome::UnknownWordType(_)
        )
    }
}

impl From<PageError> for FrameOutcome {
    fn from(error: PageError) -> FrameOutcome {
        match error {
            PageError::Framing => FrameOutcome::FramingError,
            PageError::Crc => FrameOutcome::CrcError,
            PageError::Alert => FrameOutcome::AlertPage,
        }
    }
}

impl From<UnknownWordType> for FrameOutcome {
    fn from(error: UnknownWordType) -> FrameOutcome {
        FrameOutcome::UnknownWordType(error.0)
    }
}

/// Galileo I/NAV decoder.
///
/// An `InavDecoder` decodes the I/NAV message of a single signal (for
/// instance, E1-B of a particular satellite). It is fed with the 120-bit
/// pages given by the demodulator using [`InavDecoder::submit_page`]. When
/// a complete record becomes available, the corresponding `has_new_*`
/// method returns `true` once, and the record can be obtained with the
/// corresponding `get_*` method.
///
/// The decoder does not allocate and does not use internal synchronization.
/// Several signals are decoded by using one decoder for each.
///
/// # Examples
/// ```
/// use galileo_inav::{FrameOutcome, InavDecoder};
/// use galileo_inav::words::WordType;
/// use hex_literal::hex;
///
/// // Word type 1 broadcast by E21
/// let even = hex!("01 12 07 d0 ec 19 90 2e 00 1f e1 06 aa 04 c0");
/// let odd = hex!("ad 97 00 00 00 00 00 00 00 00 07 46 f1 00 00");
///
/// let mut decoder = InavDecoder::new();
/// assert_eq!(decoder.submit_page(&even, false), FrameOutcome::Pending);
/// assert_eq!(
///     decoder.submit_page(&odd, true),
///     FrameOutcome::Accepted(WordType::Ephemeris1)
/// );
/// // words 2 to 4 are still missing
/// assert!(!decoder.has_new_ephemeris());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InavDecoder {
    collect_word: CollectWord,
    navmessage: CollectNavMessage,
}

impl InavDecoder {
    /// Constructs a new decoder with no navigation data.
    pub fn new() -> InavDecoder {
        InavDecoder::default()
    }

    /// Submits a page to the decoder.
    ///
    /// The parameter `is_odd` indicates whether the page is expected to be
    /// an odd page, according to the page timing of the receiver.
    pub fn submit_page(&mut self, page: &InavPage, is_odd: bool) -> FrameOutcome {
        match self.collect_word.feed(page, is_odd) {
            Ok(Assembled::Pending) => FrameOutcome::Pending,
            Ok(Assembled::Resync) => FrameOutcome::Resync,
            Ok(Assembled::Word(word)) => self.submit_word(&word),
            Err(e) => e.into(),
        }
    }

    /// Submits a complete I/NAV word to the decoder.
    ///
    /// This can be used when the receiver already joins the pages and
    /// checks the CRC. The word is decoded and fed to the navigation message.
    pub fn submit_word(&mut self, word: &InavWord) -> FrameOutcome {
        match Word::decode(word) {
            Ok(decoded) => {
                self.navmessage.feed(&decoded);
                FrameOutcome::Accepted(decoded.word_type())
            }
            Err(e) => {
                log::warn!("{}; discarding word", e);
                e.into()
            }
        }
    }

    /// Returns `true` if there is a new ephemeris.
    ///
    /// A new ephemeris becomes available when all the words 1 to 4 have been
    /// received since the last ephemeris was committed and the stored words
    /// share the same IODnav. This function clears the new data flag,
    /// so subsequent calls return `false` until a new ephemeris is available.
    pub fn has_new_ephemeris(&mut self) -> bool {
        self.navmessage.take_new_ephemeris()
    }

    /// Returns `true` if there is a new word type 5, clearing the new data
    /// flag.
    pub fn has_new_iono(&mut self) -> bool {
        self.navmessage.take_new_iono()
    }

    /// Returns `true` if there is a new word type 6, clearing the new data
    /// flag.
    pub fn has_new_utc_model(&mut self) -> bool {
        self.navmessage.take_new_utc_model()
    }

    /// Returns `true` if a new satellite almanac has been stored, clearing the
    /// new data flag.
    pub fn has_new_almanac(&mut self) -> bool {
        self.navmessage.take_new_almanac()
    }

    /// Returns the last consistent ephemeris.
    ///
    /// This is returned regardless of the new data flag. If no ephemeris has
    /// been obtained, all its parameters are zero.
    pub fn get_ephemeris(&self) -> Ephemeris {
        *self.navmessage.ephemeris()
    }

    /// Returns the last ionospheric correction and signal health.
    pub fn get_iono(&self) -> Iono {
        *self.navmessage.iono()
    }

    /// Returns the last UTC model.
    pub fn get_utc_model(&self) -> UtcModel {
        *self.navmessage.utc_model()
    }

    /// Returns the almanac.
    pub fn get_almanac(&self) -> Almanac {
        *self.navmessage.almanac()
    }

    /// Returns the last GST broadcast in the navigation message.
    pub fn gst(&self) -> Option<Gst> {
        self.navmessage.gst()
    }

    /// Clears all the navigation data, the new data flags and any stored
    /// page.
    ///
    /// This should be called when the signal is reacquired.
    pub fn reset(&mut self) {
        log::debug!("resetting I/NAV decoder");
        self.collect_word.reset();
        self.navmessage.reset();
    }
}
