//! Navigation message accumulation.
//!
//! This module contains [`CollectNavMessage`], which accumulates the decoded
//! I/NAV words of a satellite into the [`records`](crate::records), checks
//! the consistency between the words that form each record and tracks whether
//! each record has new data.

use crate::gst::Gst;
use crate::records::{Almanac, Ephemeris, Iono, UtcModel};
use crate::words::{
    EphemerisWord1, EphemerisWord2, EphemerisWord3, EphemerisWord4, Word, WordType,
};
use crate::Svn;

/// Checks whether a set of optional values is consistent.
///
/// Returns `true` if `values` is non-empty, all the values are present and
/// they are all equal. This is used to check that all the words that form a
/// record have the same issue of data.
///
/// # Examples
/// ```
/// use galileo_inav::navmessage::is_consistent;
///
/// assert!(is_consistent(&[Some(5), Some(5), Some(5)]));
/// assert!(!is_consistent(&[Some(5), None, Some(5)]));
/// assert!(!is_consistent(&[Some(5), Some(6)]));
/// assert!(!is_consistent::<u16>(&[]));
/// ```
pub fn is_consistent<T: PartialEq + Copy>(values: &[Option<T>]) -> bool {
    match values.first() {
        Some(Some(first)) => values.iter().all(|v| *v == Some(*first)),
        _ => false,
    }
}

/// Navigation message accumulator.
///
/// This holds the latest copy of the words of each record, the last record
/// that has been committed for each kind, and a flag per record kind that
/// indicates whether the record has new data that has not been read yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectNavMessage {
    ephemeris_words: EphemerisWords,
    ephemeris_consistent: bool,
    ephemeris: Ephemeris,
    iono: Iono,
    utc_model: UtcModel,
    previous_almanac_word: Option<Word>,
    almanac: Almanac,
    gst: Option<Gst>,
    new_ephemeris: bool,
    new_iono: bool,
    new_utc_model: bool,
    new_almanac: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct EphemerisWords {
    word1: Option<EphemerisWord1>,
    word2: Option<EphemerisWord2>,
    word3: Option<EphemerisWord3>,
    word4: Option<EphemerisWord4>,
    // words received since the last commit
    received: [bool; 4],
}

impl EphemerisWords {
    fn feed(&mut self, word: &Word) {
        let index = match *word {
            Word::Ephemeris1(w) => {
                self.word1 = Some(w);
                0
            }
            Word::Ephemeris2(w) => {
                self.word2 = Some(w);
                1
            }
            Word::Ephemeris3(w) => {
                self.word3 = Some(w);
                2
            }
            Word::Ephemeris4(w) => {
                self.word4 = Some(w);
                3
            }
            _ => return,
        };
        self.received[index] = true;
    }

    fn all_received(&self) -> bool {
        self.received.iter().all(|&r| r)
    }

    fn iod_navs(&self) -> [Option<u16>; 4] {
        [
            self.word1.map(|w| w.iod_nav),
            self.word2.map(|w| w.iod_nav),
            self.word3.map(|w| w.iod_nav),
            self.word4.map(|w| w.iod_nav),
        ]
    }

    fn ephemeris(&self) -> Option<Ephemeris> {
        if !is_consistent(&self.iod_navs()) {
            return None;
        }
        let (w1, w2, w3, w4) = (self.word1?, self.word2?, self.word3?, self.word4?);
        Some(Ephemeris {
            iod_nav: w1.iod_nav,
            svn: Svn::try_from(w4.svid).ok(),
            t0e: w1.t0e,
            m0: w1.m0,
            e: w1.e,
            sqrt_a: w1.sqrt_a,
            omega_0: w2.omega_0,
            i_0: w2.i_0,
            omega: w2.omega,
            i_dot: w2.i_dot,
            omega_dot: w3.omega_dot,
            delta_n: w3.delta_n,
            cuc: w3.cuc,
            cus: w3.cus,
            crc: w3.crc,
            crs: w3.crs,
            cic: w4.cic,
            cis: w4.cis,
            sisa: w3.sisa,
            t0c: w4.t0c,
            af0: w4.af0,
            af1: w4.af1,
            af2: w4.af2,
        })
    }
}

impl CollectNavMessage {
    /// Constructs a new, empty accumulator.
    pub fn new() -> CollectNavMessage {
        CollectNavMessage::default()
    }

    /// Feeds a decoded word into the accumulator.
    pub fn feed(&mut self, word: &Word) {
        log::trace!("feeding {} into the navigation message", word.word_type());
        if let Some(gst) = word.gst() {
            log::trace!("GST updated to {:?}", gst);
            self.gst = Some(gst);
        }
        match word {
            Word::Spare(_) => (),
            Word::Ephemeris1(_)
            | Word::Ephemeris2(_)
            | Word::Ephemeris3(_)
            | Word::Ephemeris4(_) => self.feed_ephemeris(word),
            Word::Iono(iono) => {
                log::debug!("new ionospheric correction and signal health: {:?}", iono);
                self.iono = *iono;
                self.new_iono = true;
            }
            Word::Utc(utc) => {
                log::debug!("new UTC model: {:?}", utc);
                self.utc_model = *utc;
                self.new_utc_model = true;
            }
            Word::Almanac7(_) | Word::Almanac8(_) | Word::Almanac9(_) | Word::Almanac10(_) => {
                self.feed_almanac(word)
            }
        }
    }

    fn feed_ephemeris(&mut self, word: &Word) {
        self.ephemeris_words.feed(word);
        match self.ephemeris_words.ephemeris() {
            Some(ephemeris) => {
                if self.ephemeris_words.all_received() {
                    log::debug!("new ephemeris: {:?}", ephemeris);
                    self.new_ephemeris = true;
                    self.ephemeris_words.received = [false; 4];
                } else {
                    log::trace!("ephemeris refreshed (IODnav {})", ephemeris.iod_nav);
                }
                self.ephemeris = ephemeris;
                self.ephemeris_consistent = true;
            }
            None => {
                if self.ephemeris_consistent || self.new_ephemeris {
                    log::debug!(
                        "ephemeris words have become inconsistent (IODnavs {:?})",
                        self.ephemeris_words.iod_navs()
                    );
                }
                self.ephemeris_consistent = false;
                self.new_ephemeris = false;
            }
        }
    }

    fn feed_almanac(&mut self, word: &Word) {
        let slot = match (self.previous_almanac_word, word) {
            (Some(Word::Almanac7(w7)), Word::Almanac8(w8)) => w7.slot_1(w8),
            (Some(Word::Almanac8(w8)), Word::Almanac9(w9)) => w8.slot_2(w9),
            (Some(Word::Almanac9(w9)), Word::Almanac10(w10)) => w9.slot_3(w10),
            (previous, _) => {
                if let Some(previous) = previous {
                    log::trace!(
                        "{} does not follow {}; no almanac slot formed",
                        word.word_type(),
                        previous.word_type()
                    );
                }
                None
            }
        };
        if let Some(slot) = slot {
            log::debug!("new almanac for {}: {:?}", slot.svn, slot);
            self.almanac.store(slot);
            self.new_almanac = true;
        }
        if let Word::Almanac10(w10) = word {
            self.almanac.gst_gps = Some(w10.gst_gps);
        }
        self.previous_almanac_word = Some(*word);
    }

    /// Returns and clears the new data flag of the ephemeris.
    pub fn take_new_ephemeris(&mut self) -> bool {
        core::mem::take(&mut self.new_ephemeris)
    }

    /// Returns and clears the new data flag of the ionospheric correction.
    pub fn take_new_iono(&mut self) -> bool {
        core::mem::take(&mut self.new_iono)
    }

    /// Returns and clears the new data flag of the UTC model.
    pub fn take_new_utc_model(&mut self) -> bool {
        core::mem::take(&mut self.new_utc_model)
    }

    /// Returns and clears the new data flag of the almanac.
    pub fn take_new_almanac(&mut self) -> bool {
        core::mem::take(&mut self.new_almanac)
    }

    /// Returns the last consistent ephemeris.
    ///
    /// If the stored ephemeris words have become inconsistent, this is still
    /// the ephemeris that was last committed.
    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    /// Returns `true` if the ephemeris words that are currently stored are
    /// consistent.
    pub fn ephemeris_is_consistent(&self) -> bool {
        self.ephemeris_consistent
    }

    /// Returns the last ionospheric correction and signal health.
    pub fn iono(&self) -> &Iono {
        &self.iono
    }

    /// Returns the last UTC model.
    pub fn utc_model(&self) -> &UtcModel {
        &self.utc_model
    }

    /// Returns the almanac.
    pub fn almanac(&self) -> &Almanac {
        &self.almanac
    }

    /// Returns the last GST received in word type 0 or 5.
    pub fn gst(&self) -> Option<Gst> {
        self.gst
    }

    /// Returns the type of the last almanac word that was fed.
    pub fn last_almanac_word_type(&self) -> Option<WordType> {
        self.previous_almanac_word.map(|w| w.word_type())
    }

    /// Clears all the accumulated data and new data flags.
    pub fn reset(&mut self) {
        log::trace!("resetting navigation message");
        *self = CollectNavMessage::default();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::{word1, word2, word3, word4, word7, word8, word9, word10};
    use crate::words::test::{
        build_word, WORD1, WORD10, WORD2, WORD3, WORD4, WORD5, WORD6, WORD7, WORD8, WORD9,
    };

    fn decode(word: &crate::types::InavWord) -> Word {
        Word::decode(word).unwrap()
    }

    fn ephemeris_word(word_type: u8, iod_nav: u64) -> Word {
        let field = match word_type {
            1 => word1::IOD_NAV,
            2 => word2::IOD_NAV,
            3 => word3::IOD_NAV,
            4 => word4::IOD_NAV,
            _ => unreachable!(),
        };
        let fields = [(field, iod_nav), (word4::SVID, 11)];
        decode(&build_word(word_type, &fields))
    }

    fn almanac_word(word_type: u8, iod_a: u64, svid: u64) -> Word {
        let fields = match word_type {
            7 => [(word7::IOD_A, iod_a), (word7::SVID_1, svid)],
            8 => [(word8::IOD_A, iod_a), (word8::SVID_2, svid)],
            9 => [(word9::IOD_A, iod_a), (word9::SVID_3, svid)],
            10 => [(word10::IOD_A, iod_a), (word10::WN0G, svid)],
            _ => unreachable!(),
        };
        decode(&build_word(word_type, &fields))
    }

    #[test]
    fn consistency() {
        assert!(is_consistent(&[Some(1u8)]));
        assert!(!is_consistent::<u8>(&[None]));
        assert!(!is_consistent(&[None, Some(1u8)]));
    }

    #[test]
    fn ephemeris_iod_change() {
        let mut nav = CollectNavMessage::new();
        for wt in 1..=3 {
            nav.feed(&ephemeris_word(wt, 5));
            assert!(!nav.ephemeris_is_consistent());
        }
        nav.feed(&ephemeris_word(4, 5));
        assert!(nav.ephemeris_is_consistent());
        assert_eq!(nav.ephemeris().iod_nav, 5);
        assert_eq!(nav.ephemeris().svn, Svn::try_from(11u8).ok());
        assert!(nav.take_new_ephemeris());
        assert!(!nav.take_new_ephemeris());

        // a single retransmitted word does not raise the flag again
        nav.feed(&ephemeris_word(2, 5));
        assert!(!nav.take_new_ephemeris());

        // a word from a new batch makes the stored words inconsistent
        nav.feed(&ephemeris_word(4, 6));
        assert!(!nav.ephemeris_is_consistent());
        assert!(!nav.take_new_ephemeris());
        assert_eq!(nav.ephemeris().iod_nav, 5);
    }

    #[test]
    fn ephemeris_retransmission() {
        let mut nav = CollectNavMessage::new();
        for w in [WORD1, WORD2, WORD3, WORD4] {
            nav.feed(&decode(&w));
        }
        assert!(nav.take_new_ephemeris());
        // after the flag has been read, a complete retransmission of the
        // batch raises it again
        for w in [WORD3, WORD1, WORD2] {
            nav.feed(&decode(&w));
            assert!(!nav.take_new_ephemeris());
        }
        nav.feed(&decode(&WORD4));
        assert!(nav.take_new_ephemeris());
        assert_eq!(nav.ephemeris().iod_nav, 72);
        // retransmitting the batch before the flag is read leaves it raised
        for w in [WORD1, WORD2, WORD3, WORD4] {
            nav.feed(&decode(&w));
        }
        assert!(nav.take_new_ephemeris());
        assert!(!nav.take_new_ephemeris());
    }

    #[test]
    fn ephemeris_flag_withdrawn() {
        let mut nav = CollectNavMessage::new();
        for wt in 1..=4 {
            nav.feed(&ephemeris_word(wt, 5));
        }
        // the flag has not been read when the new batch starts
        nav.feed(&ephemeris_word(4, 6));
        assert!(!nav.take_new_ephemeris());
        for wt in 1..=3 {
            nav.feed(&ephemeris_word(wt, 6));
        }
        assert!(nav.take_new_ephemeris());
        assert_eq!(nav.ephemeris().iod_nav, 6);
    }

    #[test]
    fn real_ephemeris() {
        let mut nav = CollectNavMessage::new();
        for w in [WORD1, WORD2, WORD3, WORD4] {
            nav.feed(&decode(&w));
        }
        assert!(nav.take_new_ephemeris());
        let eph = nav.ephemeris();
        assert_eq!(eph.iod_nav, 72);
        assert_eq!(eph.svn, Svn::try_from(21u8).ok());
        assert_eq!(eph.t0e, 120000.0);
        assert_eq!(eph.sqrt_a, 5440.616010665894);
        assert_eq!(eph.omega_0, 0.5605879412032664);
        assert_eq!(eph.crc, 236.71875);
        assert_eq!(eph.sisa, 107);
        assert_eq!(eph.af0, -0.0007211104966700077);
    }

    #[test]
    fn iono_and_utc() {
        let mut nav = CollectNavMessage::new();
        nav.feed(&decode(&WORD5));
        assert!(nav.take_new_iono());
        assert!(!nav.take_new_iono());
        assert!(!nav.take_new_utc_model());
        assert_eq!(nav.iono().ai0, 99.25);
        // WN 0 and TOW 0 is a valid GST
        assert_eq!(nav.gst(), Some(Gst::new(0, 0)));

        nav.feed(&decode(&WORD6));
        assert!(nav.take_new_utc_model());
        assert_eq!(nav.utc_model().delta_t_lsf, 19);
        // the same word twice raises the flag twice
        nav.feed(&decode(&WORD6));
        assert!(nav.take_new_utc_model());
    }

    #[test]
    fn almanac_batch() {
        let mut nav = CollectNavMessage::new();
        nav.feed(&decode(&WORD7));
        assert!(!nav.take_new_almanac());
        nav.feed(&decode(&WORD8));
        assert!(nav.take_new_almanac());
        // non-almanac words in between do not break the sequence
        nav.feed(&decode(&WORD5));
        nav.feed(&decode(&WORD9));
        assert!(nav.take_new_almanac());
        nav.feed(&decode(&WORD10));
        assert!(nav.take_new_almanac());
        assert_eq!(nav.last_almanac_word_type(), Some(WordType::Almanac10));

        let svns: Vec<u8> = nav.almanac().iter().map(|a| a.svn.into()).collect();
        assert_eq!(svns, vec![3, 7, 12]);
        let e12 = nav.almanac().get(Svn::try_from(12u8).unwrap()).unwrap();
        assert_eq!(e12.omega_0, 0.999969482421875);
        assert_eq!(e12.af0, -0.0625);
        let gst_gps = nav.almanac().gst_gps.unwrap();
        assert_eq!(gst_gps.a0g, -4.3655745685100555e-08);
        assert_eq!(gst_gps.a1g, -3.1086244689504383e-15);
        assert_eq!(gst_gps.t0g, 619200.0);
        assert_eq!(gst_gps.wn0g, 24);
    }

    #[test]
    fn almanac_pairing() {
        let mut nav = CollectNavMessage::new();
        // word 9 does not follow word 7, so no slot is formed
        nav.feed(&almanac_word(7, 3, 1));
        nav.feed(&almanac_word(9, 3, 3));
        assert!(!nav.take_new_almanac());
        // mismatched IODa
        nav.feed(&almanac_word(10, 4, 0));
        assert!(!nav.take_new_almanac());
        assert!(nav.almanac().is_empty());
        // GST-GPS parameters are taken regardless
        assert!(nav.almanac().gst_gps.is_some());
        // a new word 7 discards the pending words of the old batch
        nav.feed(&almanac_word(7, 5, 4));
        nav.feed(&almanac_word(8, 5, 0));
        assert!(nav.take_new_almanac());
        assert!(nav.almanac().get(Svn::try_from(4u8).unwrap()).is_some());
        // SVID 0 marks an empty slot
        nav.feed(&almanac_word(9, 5, 0));
        assert!(!nav.take_new_almanac());
    }

    #[test]
    fn reset() {
        let mut nav = CollectNavMessage::new();
        for w in [WORD1, WORD2, WORD3, WORD4, WORD5] {
            nav.feed(&decode(&w));
        }
        nav.feed(&almanac_word(7, 3, 1));
        nav.feed(&almanac_word(8, 3, 2));
        nav.reset();
        assert!(!nav.take_new_ephemeris());
        assert!(!nav.take_new_iono());
        assert!(!nav.take_new_utc_model());
        assert!(!nav.take_new_almanac());
        assert_eq!(nav.ephemeris(), &Ephemeris::default());
        assert_eq!(nav.iono(), &Iono::default());
        assert!(nav.almanac().is_empty());
        assert_eq!(nav.gst(), None);
        assert_eq!(nav.last_almanac_word_type(), None);
        // words fed before the reset are not used to form records
        nav.feed(&almanac_word(8, 3, 2));
        assert!(!nav.take_new_almanac());
    }
}
