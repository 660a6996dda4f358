//! I/NAV words.
//!
//! This module contains [`Word`], which is the decoded contents of an
//! [`InavWord`], and [`WordType`], which identifies each of the word types
//! that are decoded.
//!
//! Decoding a word only applies the field maps of its word type. It does not
//! check whether the parameters are consistent with other words. That is done
//! by [`CollectNavMessage`](crate::navmessage::CollectNavMessage).

use crate::bitfields::Field;
use crate::gst::{Gst, Tow, Wn};
use crate::layout::{
    self, word0, word1, word10, word2, word3, word4, word5, word6, word7, word8, word9,
};
use crate::records::{GstGpsConversion, Iono, SatelliteAlmanac, UtcModel};
use crate::types::{BitSlice, InavWord, IodA, IodNav};
use crate::Svn;
use core::fmt;

/// I/NAV word type.
///
/// Only the word types that carry navigation data for the decoder are listed
/// here. Other word types (reduced CED, FEC2 Reed-Solomon, dummy words, etc.)
/// give an [`UnknownWordType`] error.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WordType {
    /// Word type 0: spare word, possibly carrying GST.
    Spare = 0,
    /// Word type 1: ephemeris (1/4).
    Ephemeris1 = 1,
    /// Word type 2: ephemeris (2/4).
    Ephemeris2 = 2,
    /// Word type 3: ephemeris (3/4) and SISA.
    Ephemeris3 = 3,
    /// Word type 4: ephemeris (4/4) and clock correction.
    Ephemeris4 = 4,
    /// Word type 5: ionospheric correction, BGD, health and GST.
    Iono = 5,
    /// Word type 6: GST-UTC conversion.
    Utc = 6,
    /// Word type 7: almanac (1/4).
    Almanac7 = 7,
    /// Word type 8: almanac (2/4).
    Almanac8 = 8,
    /// Word type 9: almanac (3/4).
    Almanac9 = 9,
    /// Word type 10: almanac (4/4) and GST-GPS conversion.
    Almanac10 = 10,
}

impl WordType {
    /// Returns the numeric word type.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the word types 1 to 4.
    pub fn is_ephemeris(self) -> bool {
        (1..=4).contains(&self.id())
    }

    /// Returns `true` for the word types 7 to 10.
    pub fn is_almanac(self) -> bool {
        (7..=10).contains(&self.id())
    }
}

impl TryFrom<u8> for WordType {
    type Error = UnknownWordType;
    fn try_from(id: u8) -> Result<WordType, UnknownWordType> {
        Ok(match id {
            0 => WordType::Spare,
            1 => WordType::Ephemeris1,
            2 => WordType::Ephemeris2,
            3 => WordType::Ephemeris3,
            4 => WordType::Ephemeris4,
            5 => WordType::Iono,
            6 => WordType::Utc,
            7 => WordType::Almanac7,
            8 => WordType::Almanac8,
            9 => WordType::Almanac9,
            10 => WordType::Almanac10,
            _ => return Err(UnknownWordType(id)),
        })
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word type {}", self.id())
    }
}

/// Unknown word type error.
///
/// Contains the word type that was found in the word.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct UnknownWordType(pub u8);

impl fmt::Display for UnknownWordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown word type {}", self.0)
    }
}

/// Reads the word type field of a word.
///
/// The value is in the range 0 to 63, regardless of whether the word type is
/// known.
pub fn word_type(word: &InavWord) -> u8 {
    layout::WORD_TYPE.read_unsigned(BitSlice::from_slice(word)) as u8
}

/// Decoded I/NAV word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Word {
    /// Word type 0.
    Spare(SpareWord),
    /// Word type 1.
    Ephemeris1(EphemerisWord1),
    /// Word type 2.
    Ephemeris2(EphemerisWord2),
    /// Word type 3.
    Ephemeris3(EphemerisWord3),
    /// Word type 4.
    Ephemeris4(EphemerisWord4),
    /// Word type 5.
    Iono(Iono),
    /// Word type 6.
    Utc(UtcModel),
    /// Word type 7.
    Almanac7(AlmanacWord7),
    /// Word type 8.
    Almanac8(AlmanacWord8),
    /// Word type 9.
    Almanac9(AlmanacWord9),
    /// Word type 10.
    Almanac10(AlmanacWord10),
}

impl Word {
    /// Decodes an I/NAV word.
    ///
    /// The word type is read from the word and the field maps of that word
    /// type are applied to obtain the parameters. An error is returned if the
    /// word type is not one of the types listed in [`WordType`].
    ///
    /// # Examples
    /// ```
    /// use galileo_inav::words::{UnknownWordType, Word, WordType};
    ///
    /// let mut word = [0u8; 16];
    /// word[0] = 10 << 2;
    /// let decoded = Word::decode(&word).unwrap();
    /// assert_eq!(decoded.word_type(), WordType::Almanac10);
    ///
    /// word[0] = 63 << 2; // dummy word
    /// assert_eq!(Word::decode(&word), Err(UnknownWordType(63)));
    /// ```
    pub fn decode(word: &InavWord) -> Result<Word, UnknownWordType> {
        let bits = BitSlice::from_slice(word);
        let word_type = WordType::try_from(word_type(word))?;
        Ok(match word_type {
            WordType::Spare => Word::Spare(SpareWord::decode(bits)),
            WordType::Ephemeris1 => Word::Ephemeris1(EphemerisWord1::decode(bits)),
            WordType::Ephemeris2 => Word::Ephemeris2(EphemerisWord2::decode(bits)),
            WordType::Ephemeris3 => Word::Ephemeris3(EphemerisWord3::decode(bits)),
            WordType::Ephemeris4 => Word::Ephemeris4(EphemerisWord4::decode(bits)),
            WordType::Iono => Word::Iono(decode_iono(bits)),
            WordType::Utc => Word::Utc(decode_utc(bits)),
            WordType::Almanac7 => Word::Almanac7(AlmanacWord7::decode(bits)),
            WordType::Almanac8 => Word::Almanac8(AlmanacWord8::decode(bits)),
            WordType::Almanac9 => Word::Almanac9(AlmanacWord9::decode(bits)),
            WordType::Almanac10 => Word::Almanac10(AlmanacWord10::decode(bits)),
        })
    }

    /// Returns the type of the word.
    pub fn word_type(&self) -> WordType {
        match self {
            Word::Spare(_) => WordType::Spare,
            Word::Ephemeris1(_) => WordType::Ephemeris1,
            Word::Ephemeris2(_) => WordType::Ephemeris2,
            Word::Ephemeris3(_) => WordType::Ephemeris3,
            Word::Ephemeris4(_) => WordType::Ephemeris4,
            Word::Iono(_) => WordType::Iono,
            Word::Utc(_) => WordType::Utc,
            Word::Almanac7(_) => WordType::Almanac7,
            Word::Almanac8(_) => WordType::Almanac8,
            Word::Almanac9(_) => WordType::Almanac9,
            Word::Almanac10(_) => WordType::Almanac10,
        }
    }

    /// Returns the GST carried by the word, if any.
    ///
    /// Only word type 0 (when its time field indicates so) and word type 5
    /// carry the GST.
    pub fn gst(&self) -> Option<Gst> {
        match self {
            Word::Spare(w) => w.gst(),
            Word::Iono(w) => w.gst(),
            _ => None,
        }
    }
}

fn unsigned(field: Field, bits: &BitSlice) -> u64 {
    field.read_unsigned(bits)
}

fn signed_scaled(field: Field, bits: &BitSlice) -> f64 {
    field.read_signed_scaled(bits)
}

fn unsigned_scaled(field: Field, bits: &BitSlice) -> f64 {
    field.read_unsigned_scaled(bits)
}

/// Word type 0: spare word.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SpareWord {
    /// Time field. WN and TOW are only meaningful when this is `0b10`.
    pub time: u8,
    /// Week number.
    pub wn: Wn,
    /// Time of week (s).
    pub tow: Tow,
}

impl SpareWord {
    const TIME_VALID: u8 = 0b10;

    fn decode(bits: &BitSlice) -> SpareWord {
        SpareWord {
            time: unsigned(word0::TIME, bits) as u8,
            wn: unsigned(word0::WN, bits) as Wn,
            tow: unsigned(word0::TOW, bits) as Tow,
        }
    }

    /// Returns the GST carried in the word.
    ///
    /// Returns `None` if the time field indicates that the word does not
    /// carry GST or if the TOW is not valid.
    pub fn gst(&self) -> Option<Gst> {
        if self.time == Self::TIME_VALID {
            Gst::checked_new(self.wn, self.tow)
        } else {
            None
        }
    }
}

/// Word type 1: ephemeris (1/4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisWord1 {
    /// Issue of data of the navigation batch.
    pub iod_nav: IodNav,
    /// Ephemeris reference time (s).
    pub t0e: f64,
    /// Mean anomaly at reference time (semi-circles).
    pub m0: f64,
    /// Eccentricity.
    pub e: f64,
    /// Square root of the semi-major axis (m^1/2).
    pub sqrt_a: f64,
}

impl EphemerisWord1 {
    fn decode(bits: &BitSlice) -> EphemerisWord1 {
        EphemerisWord1 {
            iod_nav: unsigned(word1::IOD_NAV, bits) as IodNav,
            t0e: unsigned_scaled(word1::T0E, bits),
            m0: signed_scaled(word1::M0, bits),
            e: unsigned_scaled(word1::E, bits),
            sqrt_a: unsigned_scaled(word1::SQRT_A, bits),
        }
    }
}

/// Word type 2: ephemeris (2/4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisWord2 {
    /// Issue of data of the navigation batch.
    pub iod_nav: IodNav,
    /// Longitude of ascending node at weekly epoch (semi-circles).
    pub omega_0: f64,
    /// Inclination angle at reference time (semi-circles).
    pub i_0: f64,
    /// Argument of perigee (semi-circles).
    pub omega: f64,
    /// Rate of change of inclination angle (semi-circles/s).
    pub i_dot: f64,
}

impl EphemerisWord2 {
    fn decode(bits: &BitSlice) -> EphemerisWord2 {
        EphemerisWord2 {
            iod_nav: unsigned(word2::IOD_NAV, bits) as IodNav,
            omega_0: signed_scaled(word2::OMEGA_0, bits),
            i_0: signed_scaled(word2::I_0, bits),
            omega: signed_scaled(word2::OMEGA, bits),
            i_dot: signed_scaled(word2::I_DOT, bits),
        }
    }
}

/// Word type 3: ephemeris (3/4) and SISA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisWord3 {
    /// Issue of data of the navigation batch.
    pub iod_nav: IodNav,
    /// Rate of change of right ascension (semi-circles/s).
    pub omega_dot: f64,
    /// Mean motion difference (semi-circles/s).
    pub delta_n: f64,
    /// Cosine correction to the argument of latitude (rad).
    pub cuc: f64,
    /// Sine correction to the argument of latitude (rad).
    pub cus: f64,
    /// Cosine correction to the orbit radius (m).
    pub crc: f64,
    /// Sine correction to the orbit radius (m).
    pub crs: f64,
    /// Signal in space accuracy index for E1/E5b.
    pub sisa: u8,
}

impl EphemerisWord3 {
    fn decode(bits: &BitSlice) -> EphemerisWord3 {
        EphemerisWord3 {
            iod_nav: unsigned(word3::IOD_NAV, bits) as IodNav,
            omega_dot: signed_scaled(word3::OMEGA_DOT, bits),
            delta_n: signed_scaled(word3::DELTA_N, bits),
            cuc: signed_scaled(word3::CUC, bits),
            cus: signed_scaled(word3::CUS, bits),
            crc: signed_scaled(word3::CRC, bits),
            crs: signed_scaled(word3::CRS, bits),
            sisa: unsigned(word3::SISA, bits) as u8,
        }
    }
}

/// Word type 4: ephemeris (4/4) and clock correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisWord4 {
    /// Issue of data of the navigation batch.
    pub iod_nav: IodNav,
    /// Satellite identifier, as broadcast.
    pub svid: u8,
    /// Cosine correction to the inclination (rad).
    pub cic: f64,
    /// Sine correction to the inclination (rad).
    pub cis: f64,
    /// Clock correction reference time (s).
    pub t0c: f64,
    /// Clock bias (s).
    pub af0: f64,
    /// Clock drift (s/s).
    pub af1: f64,
    /// Clock drift rate (s/s^2).
    pub af2: f64,
}

impl EphemerisWord4 {
    fn decode(bits: &BitSlice) -> EphemerisWord4 {
        EphemerisWord4 {
            iod_nav: unsigned(word4::IOD_NAV, bits) as IodNav,
            svid: unsigned(word4::SVID, bits) as u8,
            cic: signed_scaled(word4::CIC, bits),
            cis: signed_scaled(word4::CIS, bits),
            t0c: unsigned_scaled(word4::T0C, bits),
            af0: signed_scaled(word4::AF0, bits),
            af1: signed_scaled(word4::AF1, bits),
            af2: signed_scaled(word4::AF2, bits),
        }
    }
}

fn decode_iono(bits: &BitSlice) -> Iono {
    let mut region_flags = [false; 5];
    for (flag, field) in region_flags.iter_mut().zip(word5::REGION.iter()) {
        *flag = field.read_bool(bits);
    }
    Iono {
        ai0: unsigned_scaled(word5::AI0, bits),
        ai1: signed_scaled(word5::AI1, bits),
        ai2: signed_scaled(word5::AI2, bits),
        region_flags,
        bgd_e1_e5a: signed_scaled(word5::BGD_E1_E5A, bits),
        bgd_e1_e5b: signed_scaled(word5::BGD_E1_E5B, bits),
        e5b_hs: unsigned(word5::E5B_HS, bits) as u8,
        e1b_hs: unsigned(word5::E1B_HS, bits) as u8,
        e5b_dvs: word5::E5B_DVS.read_bool(bits),
        e1b_dvs: word5::E1B_DVS.read_bool(bits),
        wn: unsigned(word5::WN, bits) as Wn,
        tow: unsigned(word5::TOW, bits) as Tow,
    }
}

fn decode_utc(bits: &BitSlice) -> UtcModel {
    UtcModel {
        a0: signed_scaled(word6::A0, bits),
        a1: signed_scaled(word6::A1, bits),
        delta_t_ls: word6::DELTA_T_LS.read_signed(bits) as i8,
        t0t: unsigned_scaled(word6::T0T, bits),
        wn0t: unsigned(word6::WN0T, bits) as u8,
        wn_lsf: unsigned(word6::WN_LSF, bits) as u8,
        dn: unsigned(word6::DN, bits) as u8,
        delta_t_lsf: word6::DELTA_T_LSF.read_signed(bits) as i8,
        tow: unsigned(word6::TOW, bits) as Tow,
    }
}

/// Orbital parameters of an almanac slot.
///
/// Each almanac slot has its orbital parameters split between two words.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlmanacOrbit {
    /// Delta square root of the semi-major axis (m^1/2).
    pub delta_sqrt_a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Argument of perigee (semi-circles).
    pub omega: f64,
    /// Delta inclination (semi-circles).
    pub delta_i: f64,
}

/// Clock correction and health of an almanac slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlmanacClock {
    /// Clock bias (s).
    pub af0: f64,
    /// Clock drift (s/s).
    pub af1: f64,
    /// E5b signal health status.
    pub e5b_hs: u8,
    /// E1-B signal health status.
    pub e1b_hs: u8,
}

/// Word type 7: almanac for SVID1 (1/2) and almanac reference time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacWord7 {
    /// Issue of data of the almanac batch.
    pub iod_a: IodA,
    /// Almanac reference week number (2 bits).
    pub wn_a: u8,
    /// Almanac reference time (s).
    pub t0a: f64,
    /// Satellite identifier of the first slot.
    pub svid_1: u8,
    /// Orbit of the first slot.
    pub orbit_1: AlmanacOrbit,
    /// Longitude of ascending node of the first slot (semi-circles).
    pub omega_0_1: f64,
    /// Rate of change of right ascension of the first slot (semi-circles/s).
    pub omega_dot_1: f64,
    /// Mean anomaly of the first slot (semi-circles).
    pub m0_1: f64,
}

impl AlmanacWord7 {
    fn decode(bits: &BitSlice) -> AlmanacWord7 {
        AlmanacWord7 {
            iod_a: unsigned(word7::IOD_A, bits) as IodA,
            wn_a: unsigned(word7::WN_A, bits) as u8,
            t0a: unsigned_scaled(word7::T0A, bits),
            svid_1: unsigned(word7::SVID_1, bits) as u8,
            orbit_1: AlmanacOrbit {
                delta_sqrt_a: signed_scaled(word7::DELTA_SQRT_A, bits),
                e: unsigned_scaled(word7::E, bits),
                omega: signed_scaled(word7::OMEGA, bits),
                delta_i: signed_scaled(word7::DELTA_I, bits),
            },
            omega_0_1: signed_scaled(word7::OMEGA_0, bits),
            omega_dot_1: signed_scaled(word7::OMEGA_DOT, bits),
            m0_1: signed_scaled(word7::M0, bits),
        }
    }

    /// Assembles the first almanac slot from this word and word 8.
    ///
    /// Returns `None` if the IODa of both words differ or if SVID1 is not a
    /// valid SVN (a zero SVID means that the slot is empty).
    pub fn slot_1(&self, word8: &AlmanacWord8) -> Option<SatelliteAlmanac> {
        if self.iod_a != word8.iod_a {
            return None;
        }
        let svn = Svn::try_from(self.svid_1).ok()?;
        Some(satellite_almanac(
            svn,
            self.iod_a,
            self.wn_a,
            self.t0a,
            &self.orbit_1,
            [self.omega_0_1, self.omega_dot_1, self.m0_1],
            &word8.clock_1,
        ))
    }
}

/// Word type 8: almanac for SVID1 (2/2) and SVID2 (1/2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacWord8 {
    /// Issue of data of the almanac batch.
    pub iod_a: IodA,
    /// Clock and health of the first slot.
    pub clock_1: AlmanacClock,
    /// Satellite identifier of the second slot.
    pub svid_2: u8,
    /// Orbit of the second slot.
    pub orbit_2: AlmanacOrbit,
    /// Longitude of ascending node of the second slot (semi-circles).
    pub omega_0_2: f64,
    /// Rate of change of right ascension of the second slot (semi-circles/s).
    pub omega_dot_2: f64,
}

impl AlmanacWord8 {
    fn decode(bits: &BitSlice) -> AlmanacWord8 {
        AlmanacWord8 {
            iod_a: unsigned(word8::IOD_A, bits) as IodA,
            clock_1: AlmanacClock {
                af0: signed_scaled(word8::AF0_1, bits),
                af1: signed_scaled(word8::AF1_1, bits),
                e5b_hs: unsigned(word8::E5B_HS_1, bits) as u8,
                e1b_hs: unsigned(word8::E1B_HS_1, bits) as u8,
            },
            svid_2: unsigned(word8::SVID_2, bits) as u8,
            orbit_2: AlmanacOrbit {
                delta_sqrt_a: signed_scaled(word8::DELTA_SQRT_A, bits),
                e: unsigned_scaled(word8::E, bits),
                omega: signed_scaled(word8::OMEGA, bits),
                delta_i: signed_scaled(word8::DELTA_I, bits),
            },
            omega_0_2: signed_scaled(word8::OMEGA_0, bits),
            omega_dot_2: signed_scaled(word8::OMEGA_DOT, bits),
        }
    }

    /// Assembles the second almanac slot from this word and word 9.
    ///
    /// The almanac reference time of the slot is the one given in word 9.
    pub fn slot_2(&self, word9: &AlmanacWord9) -> Option<SatelliteAlmanac> {
        if self.iod_a != word9.iod_a {
            return None;
        }
        let svn = Svn::try_from(self.svid_2).ok()?;
        Some(satellite_almanac(
            svn,
            self.iod_a,
            word9.wn_a,
            word9.t0a,
            &self.orbit_2,
            [self.omega_0_2, self.omega_dot_2, word9.m0_2],
            &word9.clock_2,
        ))
    }
}

/// Word type 9: almanac for SVID2 (2/2) and SVID3 (1/2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacWord9 {
    /// Issue of data of the almanac batch.
    pub iod_a: IodA,
    /// Almanac reference week number (2 bits).
    pub wn_a: u8,
    /// Almanac reference time (s).
    pub t0a: f64,
    /// Mean anomaly of the second slot (semi-circles).
    pub m0_2: f64,
    /// Clock and health of the second slot.
    pub clock_2: AlmanacClock,
    /// Satellite identifier of the third slot.
    pub svid_3: u8,
    /// Orbit of the third slot.
    pub orbit_3: AlmanacOrbit,
}

impl AlmanacWord9 {
    fn decode(bits: &BitSlice) -> AlmanacWord9 {
        AlmanacWord9 {
            iod_a: unsigned(word9::IOD_A, bits) as IodA,
            wn_a: unsigned(word9::WN_A, bits) as u8,
            t0a: unsigned_scaled(word9::T0A, bits),
            m0_2: signed_scaled(word9::M0_2, bits),
            clock_2: AlmanacClock {
                af0: signed_scaled(word9::AF0_2, bits),
                af1: signed_scaled(word9::AF1_2, bits),
                e5b_hs: unsigned(word9::E5B_HS_2, bits) as u8,
                e1b_hs: unsigned(word9::E1B_HS_2, bits) as u8,
            },
            svid_3: unsigned(word9::SVID_3, bits) as u8,
            orbit_3: AlmanacOrbit {
                delta_sqrt_a: signed_scaled(word9::DELTA_SQRT_A, bits),
                e: unsigned_scaled(word9::E, bits),
                omega: signed_scaled(word9::OMEGA, bits),
                delta_i: signed_scaled(word9::DELTA_I, bits),
            },
        }
    }

    /// Assembles the third almanac slot from this word and word 10.
    pub fn slot_3(&self, word10: &AlmanacWord10) -> Option<SatelliteAlmanac> {
        if self.iod_a != word10.iod_a {
            return None;
        }
        let svn = Svn::try_from(self.svid_3).ok()?;
        Some(satellite_almanac(
            svn,
            self.iod_a,
            self.wn_a,
            self.t0a,
            &self.orbit_3,
            [word10.omega_0_3, word10.omega_dot_3, word10.m0_3],
            &word10.clock_3,
        ))
    }
}

/// Word type 10: almanac for SVID3 (2/2) and GST-GPS conversion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacWord10 {
    /// Issue of data of the almanac batch.
    pub iod_a: IodA,
    /// Longitude of ascending node of the third slot (semi-circles).
    pub omega_0_3: f64,
    /// Rate of change of right ascension of the third slot (semi-circles/s).
    pub omega_dot_3: f64,
    /// Mean anomaly of the third slot (semi-circles).
    pub m0_3: f64,
    /// Clock and health of the third slot.
    pub clock_3: AlmanacClock,
    /// GST-GPS conversion parameters.
    pub gst_gps: GstGpsConversion,
}

impl AlmanacWord10 {
    fn decode(bits: &BitSlice) -> AlmanacWord10 {
        AlmanacWord10 {
            iod_a: unsigned(word10::IOD_A, bits) as IodA,
            omega_0_3: signed_scaled(word10::OMEGA_0_3, bits),
            omega_dot_3: signed_scaled(word10::OMEGA_DOT_3, bits),
            m0_3: signed_scaled(word10::M0_3, bits),
            clock_3: AlmanacClock {
                af0: signed_scaled(word10::AF0_3, bits),
                af1: signed_scaled(word10::AF1_3, bits),
                e5b_hs: unsigned(word10::E5B_HS_3, bits) as u8,
                e1b_hs: unsigned(word10::E1B_HS_3, bits) as u8,
            },
            gst_gps: GstGpsConversion {
                a0g: signed_scaled(word10::A0G, bits),
                a1g: signed_scaled(word10::A1G, bits),
                t0g: unsigned_scaled(word10::T0G, bits),
                wn0g: unsigned(word10::WN0G, bits) as u8,
            },
        }
    }
}

// omega_0, omega_dot and m0 are passed as an array in this order
fn satellite_almanac(
    svn: Svn,
    iod_a: IodA,
    wn_a: u8,
    t0a: f64,
    orbit: &AlmanacOrbit,
    [omega_0, omega_dot, m0]: [f64; 3],
    clock: &AlmanacClock,
) -> SatelliteAlmanac {
    SatelliteAlmanac {
        svn,
        iod_a,
        wn_a,
        t0a,
        delta_sqrt_a: orbit.delta_sqrt_a,
        e: orbit.e,
        omega: orbit.omega,
        delta_i: orbit.delta_i,
        omega_0,
        omega_dot,
        m0,
        af0: clock.af0,
        af1: clock.af1,
        e5b_hs: clock.e5b_hs,
        e1b_hs: clock.e1b_hs,
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use hex_literal::hex;

    // Words broadcast by E21 on 2022-03-07, with reserved and spare bits
    // set to zero
    pub const WORD1: InavWord = hex!("04 48 1f 43 b0 66 40 b8 00 7f 84 1a a8 13 b6 5c");
    pub const WORD2: InavWord = hex!("08 48 47 c1 58 7d 27 ab 39 9e 21 34 61 5e 06 7c");
    pub const WORD3: InavWord = hex!("0c 48 ff c0 dd 22 4d 0b 0f 0a 5b 1d 97 0e 0c 6b");
    pub const WORD4: InavWord = hex!("10 48 54 00 17 ff d8 7d 0f e8 5e e3 1f ff 62 00");
    pub const WORD5: InavWord = hex!("14 c6 80 bf e4 80 05 01 40 00 00 00 00 00 00 00");

    // Words with hand-picked field values, with spare bits set to one. Both
    // signs are used in the signed fields
    pub const WORD6: InavWord = hex!("1b ff b4 a5 e7 f9 f8 cc 48 62 62 27 89 8e c3 b7");
    pub const WORD7: InavWord = hex!("1d 61 90 3c 18 2b cc fc 7c 18 b7 41 af e2 b4 3f");
    pub const WORD8: InavWord = hex!("21 7b c7 c9 a4 e3 97 71 ff a7 10 38 4c 56 8a 89");
    pub const WORD9: InavWord = hex!("25 71 97 86 7c ad 9e ea 50 67 ac ee e4 00 04 00");
    pub const WORD10: InavWord = hex!("29 5f ff d1 5f ff fc 00 03 ff f7 e8 93 fe 6b 18");

    pub fn build_word(word_type: u8, fields: &[(Field, u64)]) -> InavWord {
        let mut word = [0u8; 16];
        let bits = BitSlice::from_slice_mut(&mut word);
        layout::WORD_TYPE.write_unsigned(bits, word_type.into());
        for &(field, value) in fields {
            field.write_unsigned(bits, value);
        }
        word
    }

    #[test]
    fn word_types() {
        for id in 0..=10 {
            let wt = WordType::try_from(id).unwrap();
            assert_eq!(wt.id(), id);
            assert_eq!(wt.is_ephemeris(), (1..=4).contains(&id));
            assert_eq!(wt.is_almanac(), (7..=10).contains(&id));
        }
        for id in [11, 16, 17, 20, 22, 63] {
            assert_eq!(WordType::try_from(id), Err(UnknownWordType(id)));
        }
        assert_eq!(word_type(&WORD3), 3);
    }

    #[test]
    fn ephemeris_1() {
        let Word::Ephemeris1(w) = Word::decode(&WORD1).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(w.iod_nav, 72);
        assert_eq!(w.t0e, 120000.0);
        assert_eq!(w.m0, -0.15546987298876047);
        assert_eq!(w.e, 0.0002432174514979124);
        assert_eq!(w.sqrt_a, 5440.616010665894);
    }

    #[test]
    fn ephemeris_2() {
        let Word::Ephemeris2(w) = Word::decode(&WORD2).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(w.iod_nav, 72);
        assert_eq!(w.omega_0, 0.5605879412032664);
        assert_eq!(w.i_0, 0.3099128743633628);
        assert_eq!(w.omega, 0.25941102113574743);
        assert_eq!(w.i_dot, 4.718003765447065e-11);
    }

    #[test]
    fn ephemeris_3() {
        let Word::Ephemeris3(w) = Word::decode(&WORD3).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(w.iod_nav, 72);
        assert_eq!(w.omega_dot, -1.8375203580944799e-09);
        assert_eq!(w.delta_n, 9.982841220335104e-10);
        assert_eq!(w.cuc, 5.273148417472839e-06);
        assert_eq!(w.cus, 4.937872290611267e-06);
        assert_eq!(w.crc, 236.71875);
        assert_eq!(w.crs, 112.375);
        assert_eq!(w.sisa, 107);
    }

    #[test]
    fn ephemeris_4() {
        let Word::Ephemeris4(w) = Word::decode(&WORD4).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(w.iod_nav, 72);
        assert_eq!(w.svid, 21);
        assert_eq!(w.cic, 9.313225746154785e-09);
        assert_eq!(w.cis, -1.862645149230957e-08);
        assert_eq!(w.t0c, 120000.0);
        assert_eq!(w.af0, -0.0007211104966700077);
        assert_eq!(w.af1, -2.2453150450019166e-12);
        assert_eq!(w.af2, 0.0);
    }

    #[test]
    fn iono() {
        let Word::Iono(w) = Word::decode(&WORD5).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(w.ai0, 99.25);
        assert_eq!(w.ai1, 0.04296875);
        assert_eq!(w.ai2, -0.00335693359375);
        assert_eq!(w.region_flags, [false; 5]);
        assert_eq!(w.bgd_e1_e5a, 2.3283064365386963e-09);
        assert_eq!(w.bgd_e1_e5b, 2.3283064365386963e-09);
        assert_eq!((w.e5b_hs, w.e1b_hs), (0, 0));
        assert!(!w.e5b_dvs && !w.e1b_dvs);
    }

    #[test]
    fn spare_word_gst() {
        // spare bits set to one
        let word = hex!("02 ff ff ff ff ff ff ff ff ff ff ff 49 81 d8 62");
        let decoded = Word::decode(&word).unwrap();
        assert_eq!(decoded.word_type(), WordType::Spare);
        assert_eq!(
            decoded,
            Word::Spare(SpareWord {
                time: 2,
                wn: 1176,
                tow: 120930,
            })
        );
        assert_eq!(decoded.gst(), Some(Gst::new(1176, 120930)));

        // time field 0b01: no GST
        let word = hex!("01 ff ff ff ff ff ff ff ff ff ff ff 49 81 d8 62");
        assert_eq!(Word::decode(&word).unwrap().gst(), None);
    }

    #[test]
    fn utc() {
        let Word::Utc(w) = Word::decode(&WORD6).unwrap() else {
            panic!("wrong word type");
        };
        assert_eq!(
            w,
            UtcModel {
                a0: -0.0011497801169753075,
                a1: -8.772094162168287e-11,
                delta_t_ls: 18,
                t0t: 86400.0,
                wn0t: 152,
                wn_lsf: 137,
                dn: 7,
                delta_t_lsf: 19,
                tow: 120950,
            }
        );
    }

    fn almanac_words() -> (AlmanacWord7, AlmanacWord8, AlmanacWord9, AlmanacWord10) {
        let (
            Ok(Word::Almanac7(w7)),
            Ok(Word::Almanac8(w8)),
            Ok(Word::Almanac9(w9)),
            Ok(Word::Almanac10(w10)),
        ) = (
            Word::decode(&WORD7),
            Word::decode(&WORD8),
            Word::decode(&WORD9),
            Word::decode(&WORD10),
        )
        else {
            panic!("wrong word types");
        };
        (w7, w8, w9, w10)
    }

    #[test]
    fn almanac_words_fields() {
        let (w7, w8, w9, w10) = almanac_words();
        assert_eq!(
            w7,
            AlmanacWord7 {
                iod_a: 5,
                wn_a: 2,
                t0a: 60000.0,
                svid_1: 3,
                orbit_1: AlmanacOrbit {
                    delta_sqrt_a: -3.90625,
                    e: 0.01068115234375,
                    omega: -0.376739501953125,
                    delta_i: -0.030517578125,
                },
                omega_0_1: 0.7158203125,
                omega_dot_1: -3.7369318306446075e-08,
                m0_1: -0.91552734375,
            }
        );
        assert_eq!(
            w8,
            AlmanacWord8 {
                iod_a: 5,
                clock_1: AlmanacClock {
                    af0: -0.008241653442382812,
                    af1: 4.489265847951174e-09,
                    e5b_hs: 1,
                    e1b_hs: 3,
                },
                svid_2: 7,
                orbit_2: AlmanacOrbit {
                    delta_sqrt_a: 2.9296875,
                    e: 0.0156097412109375,
                    omega: 0.6103515625,
                    delta_i: 0.054931640625,
                },
                omega_0_2: -0.457763671875,
                omega_dot_2: -8.149072527885437e-08,
            }
        );
        assert_eq!(
            w9,
            AlmanacWord9 {
                iod_a: 5,
                wn_a: 3,
                t0a: 60600.0,
                m0_2: -0.237335205078125,
                clock_2: AlmanacClock {
                    af0: 0.021192550659179688,
                    af1: -8.083588909357786e-09,
                    e5b_hs: 2,
                    e1b_hs: 0,
                },
                svid_3: 12,
                orbit_3: AlmanacOrbit {
                    delta_sqrt_a: -0.650390625,
                    e: 0.02288818359375,
                    omega: -1.0,
                    delta_i: -0.0625,
                },
            }
        );
        assert_eq!(
            w10,
            AlmanacWord10 {
                iod_a: 5,
                omega_0_3: 0.999969482421875,
                omega_dot_3: 6.461050361394882e-08,
                m0_3: -3.0517578125e-05,
                clock_3: AlmanacClock {
                    af0: -0.0625,
                    af1: 1.4897523215040565e-08,
                    e5b_hs: 3,
                    e1b_hs: 1,
                },
                gst_gps: GstGpsConversion {
                    a0g: -4.3655745685100555e-08,
                    a1g: -3.1086244689504383e-15,
                    t0g: 619200.0,
                    wn0g: 24,
                },
            }
        );
    }

    #[test]
    fn almanac_slots() {
        let (w7, w8, w9, w10) = almanac_words();

        assert_eq!(
            w7.slot_1(&w8),
            Some(SatelliteAlmanac {
                svn: Svn::try_from(3u8).unwrap(),
                iod_a: 5,
                wn_a: 2,
                t0a: 60000.0,
                delta_sqrt_a: -3.90625,
                e: 0.01068115234375,
                omega: -0.376739501953125,
                delta_i: -0.030517578125,
                omega_0: 0.7158203125,
                omega_dot: -3.7369318306446075e-08,
                m0: -0.91552734375,
                af0: -0.008241653442382812,
                af1: 4.489265847951174e-09,
                e5b_hs: 1,
                e1b_hs: 3,
            })
        );

        // the reference time of the second slot comes from word 9
        assert_eq!(
            w8.slot_2(&w9),
            Some(SatelliteAlmanac {
                svn: Svn::try_from(7u8).unwrap(),
                iod_a: 5,
                wn_a: 3,
                t0a: 60600.0,
                delta_sqrt_a: 2.9296875,
                e: 0.0156097412109375,
                omega: 0.6103515625,
                delta_i: 0.054931640625,
                omega_0: -0.457763671875,
                omega_dot: -8.149072527885437e-08,
                m0: -0.237335205078125,
                af0: 0.021192550659179688,
                af1: -8.083588909357786e-09,
                e5b_hs: 2,
                e1b_hs: 0,
            })
        );

        assert_eq!(
            w9.slot_3(&w10),
            Some(SatelliteAlmanac {
                svn: Svn::try_from(12u8).unwrap(),
                iod_a: 5,
                wn_a: 3,
                t0a: 60600.0,
                delta_sqrt_a: -0.650390625,
                e: 0.02288818359375,
                omega: -1.0,
                delta_i: -0.0625,
                omega_0: 0.999969482421875,
                omega_dot: 6.461050361394882e-08,
                m0: -3.0517578125e-05,
                af0: -0.0625,
                af1: 1.4897523215040565e-08,
                e5b_hs: 3,
                e1b_hs: 1,
            })
        );

        // SVID 0 means an empty slot
        let empty = AlmanacWord9 { svid_3: 0, ..w9 };
        assert!(empty.slot_3(&w10).is_none());

        // mismatched IODa
        let w8 = AlmanacWord8 { iod_a: 6, ..w8 };
        assert!(w7.slot_1(&w8).is_none());
        assert!(w8.slot_2(&w9).is_none());
    }

    #[test]
    fn unknown() {
        let word = build_word(16, &[]);
        assert_eq!(Word::decode(&word), Err(UnknownWordType(16)));
    }
}
