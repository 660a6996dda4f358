//! I/NAV field maps.
//!
//! This module contains the location and scale factor of every field of the
//! I/NAV pages and words, as given in Section 4.3 of the
//! [Galileo OS SIS ICD](https://www.gsc-europa.eu/sites/default/files/sites/all/files/Galileo_OS_SIS_ICD_v2.0.pdf).
//!
//! Bit offsets are 0-based and refer to the start of the container (a page
//! pair for [`page`], an [`InavWord`](crate::types::InavWord) for the word
//! modules). Scale factors convert the raw values to the units given in the
//! documentation of each field. Angles are kept in semi-circles, as broadcast.

use crate::bitfields::{Field, Segment};

// Powers of two used as scale factors
const P2_M2: f64 = 0.25;
const P2_M5: f64 = 0.03125;
const P2_M8: f64 = 0.00390625;
const P2_M9: f64 = 0.001953125;
const P2_M14: f64 = 6.103515625e-05;
const P2_M15: f64 = 3.0517578125e-05;
const P2_M16: f64 = 1.52587890625e-05;
const P2_M19: f64 = 1.9073486328125e-06;
const P2_M29: f64 = 1.862645149230957e-09;
const P2_M30: f64 = 9.313225746154785e-10;
const P2_M31: f64 = 4.656612873077393e-10;
const P2_M32: f64 = 2.3283064365386963e-10;
const P2_M33: f64 = 1.1641532182693481e-10;
const P2_M34: f64 = 5.820766091346741e-11;
const P2_M35: f64 = 2.9103830456733704e-11;
const P2_M38: f64 = 3.637978807091713e-12;
const P2_M43: f64 = 1.1368683772161603e-13;
const P2_M46: f64 = 1.4210854715202004e-14;
const P2_M50: f64 = 8.881784197001252e-16;
const P2_M51: f64 = 4.440892098500626e-16;
const P2_M59: f64 = 1.734723475976807e-18;

// Single segment field, optionally scaled
macro_rules! field {
    ($start:expr, $len:expr) => {
        Field::new(&[Segment::new($start, $len)])
    };
    ($start:expr, $len:expr, $scale:expr) => {
        Field::new(&[Segment::new($start, $len)]).scaled($scale)
    };
}

/// Word type, common to all the words.
pub const WORD_TYPE: Field = field!(0, 6);

/// Fields of a nominal page pair.
///
/// The offsets refer to the even page followed by the odd page (240 bits).
pub mod page {
    use super::*;
    use crate::types::PAGE_BITS;

    /// Even/odd bit of a single page, relative to the start of that page.
    pub const EVEN_ODD: Field = field!(0, 1);
    /// Even/odd bit of the even page.
    pub const EVEN_ODD_EVEN_PAGE: Field = field!(0, 1);
    /// Page type bit of the even page.
    pub const PAGE_TYPE_EVEN_PAGE: Field = field!(1, 1);
    /// Even/odd bit of the odd page.
    pub const EVEN_ODD_ODD_PAGE: Field = field!(PAGE_BITS, 1);
    /// Page type bit of the odd page.
    pub const PAGE_TYPE_ODD_PAGE: Field = field!(PAGE_BITS + 1, 1);
    /// Data_j (112 bits of the even page) followed by Data_k (16 bits of the
    /// odd page). This forms the I/NAV word.
    pub const DATA: Field = Field::new(&[Segment::new(2, 112), Segment::new(PAGE_BITS + 2, 16)]);
    /// OSNMA field (Reserved 1 in older ICD versions).
    pub const OSNMA: Field = field!(PAGE_BITS + 18, 40);
    /// Search and rescue field.
    pub const SAR: Field = field!(PAGE_BITS + 58, 22);
    /// Spare bits of the odd page.
    pub const SPARE: Field = field!(PAGE_BITS + 80, 2);
    /// Bits protected by the CRC: the even page without its tail and the odd
    /// page up to the spare field.
    pub const CRC_PROTECTED: Field =
        Field::new(&[Segment::new(0, 114), Segment::new(PAGE_BITS, 82)]);
    /// CRC-24Q.
    pub const CRC: Field = field!(PAGE_BITS + 82, 24);
    /// Secondary synchronisation pattern (Reserved 2 in older ICD versions).
    pub const SSP: Field = field!(PAGE_BITS + 106, 8);
}

/// Word type 0: spare word.
pub mod word0 {
    use super::*;

    /// Time field. The WN and TOW fields are valid when this is `0b10`.
    pub const TIME: Field = field!(6, 2);
    /// Week number.
    pub const WN: Field = field!(96, 12);
    /// Time of week (s).
    pub const TOW: Field = field!(108, 20);
}

/// Word type 1: ephemeris (1/4).
pub mod word1 {
    use super::*;

    /// Issue of data of the navigation batch.
    pub const IOD_NAV: Field = field!(6, 10);
    /// Ephemeris reference time (s).
    pub const T0E: Field = field!(16, 14, 60.0);
    /// Mean anomaly at reference time (semi-circles). Signed.
    pub const M0: Field = field!(30, 32, P2_M31);
    /// Eccentricity.
    pub const E: Field = field!(62, 32, P2_M33);
    /// Square root of the semi-major axis (m^1/2).
    pub const SQRT_A: Field = field!(94, 32, P2_M19);
}

/// Word type 2: ephemeris (2/4).
pub mod word2 {
    use super::*;

    /// Issue of data of the navigation batch.
    pub const IOD_NAV: Field = field!(6, 10);
    /// Longitude of ascending node at weekly epoch (semi-circles). Signed.
    pub const OMEGA_0: Field = field!(16, 32, P2_M31);
    /// Inclination angle at reference time (semi-circles). Signed.
    pub const I_0: Field = field!(48, 32, P2_M31);
    /// Argument of perigee (semi-circles). Signed.
    pub const OMEGA: Field = field!(80, 32, P2_M31);
    /// Rate of change of inclination angle (semi-circles/s). Signed.
    pub const I_DOT: Field = field!(112, 14, P2_M43);
}

/// Word type 3: ephemeris (3/4) and SISA.
pub mod word3 {
    use super::*;

    /// Issue of data of the navigation batch.
    pub const IOD_NAV: Field = field!(6, 10);
    /// Rate of change of right ascension (semi-circles/s). Signed.
    pub const OMEGA_DOT: Field = field!(16, 24, P2_M43);
    /// Mean motion difference (semi-circles/s). Signed.
    pub const DELTA_N: Field = field!(40, 16, P2_M43);
    /// Cosine correction to the argument of latitude (rad). Signed.
    pub const CUC: Field = field!(56, 16, P2_M29);
    /// Sine correction to the argument of latitude (rad). Signed.
    pub const CUS: Field = field!(72, 16, P2_M29);
    /// Cosine correction to the orbit radius (m). Signed.
    pub const CRC: Field = field!(88, 16, P2_M5);
    /// Sine correction to the orbit radius (m). Signed.
    pub const CRS: Field = field!(104, 16, P2_M5);
    /// Signal in space accuracy for E1/E5b (index).
    pub const SISA: Field = field!(120, 8);
}

/// Word type 4: ephemeris (4/4) and clock correction.
pub mod word4 {
    use super::*;

    /// Issue of data of the navigation batch.
    pub const IOD_NAV: Field = field!(6, 10);
    /// Satellite identifier.
    pub const SVID: Field = field!(16, 6);
    /// Cosine correction to the inclination (rad). Signed.
    pub const CIC: Field = field!(22, 16, P2_M29);
    /// Sine correction to the inclination (rad). Signed.
    pub const CIS: Field = field!(38, 16, P2_M29);
    /// Clock correction reference time (s).
    pub const T0C: Field = field!(54, 14, 60.0);
    /// Clock bias (s). Signed.
    pub const AF0: Field = field!(68, 31, P2_M34);
    /// Clock drift (s/s). Signed.
    pub const AF1: Field = field!(99, 21, P2_M46);
    /// Clock drift rate (s/s^2). Signed.
    pub const AF2: Field = field!(120, 6, P2_M59);
}

/// Word type 5: ionospheric correction, BGD, signal health, data validity
/// status and GST.
pub mod word5 {
    use super::*;

    /// Effective ionisation level 1st order parameter (sfu).
    pub const AI0: Field = field!(6, 11, P2_M2);
    /// Effective ionisation level 2nd order parameter (sfu/degree). Signed.
    pub const AI1: Field = field!(17, 11, P2_M8);
    /// Effective ionisation level 3rd order parameter (sfu/degree^2). Signed.
    pub const AI2: Field = field!(28, 14, P2_M15);
    /// Ionospheric disturbance flags for regions 1 to 5.
    pub const REGION: [Field; 5] = [
        field!(42, 1),
        field!(43, 1),
        field!(44, 1),
        field!(45, 1),
        field!(46, 1),
    ];
    /// E1-E5a broadcast group delay (s). Signed.
    pub const BGD_E1_E5A: Field = field!(47, 10, P2_M32);
    /// E1-E5b broadcast group delay (s). Signed.
    pub const BGD_E1_E5B: Field = field!(57, 10, P2_M32);
    /// E5b signal health status.
    pub const E5B_HS: Field = field!(67, 2);
    /// E1-B signal health status.
    pub const E1B_HS: Field = field!(69, 2);
    /// E5b data validity status.
    pub const E5B_DVS: Field = field!(71, 1);
    /// E1-B data validity status.
    pub const E1B_DVS: Field = field!(72, 1);
    /// Week number.
    pub const WN: Field = field!(73, 12);
    /// Time of week (s).
    pub const TOW: Field = field!(85, 20);
}

/// Word type 6: GST-UTC conversion parameters.
pub mod word6 {
    use super::*;

    /// Constant term of the polynomial (s). Signed.
    pub const A0: Field = field!(6, 32, P2_M30);
    /// First order term of the polynomial (s/s). Signed.
    pub const A1: Field = field!(38, 24, P2_M50);
    /// Leap second count before leap second adjustment (s). Signed.
    pub const DELTA_T_LS: Field = field!(62, 8);
    /// UTC data reference time of week (s).
    pub const T0T: Field = field!(70, 8, 3600.0);
    /// UTC data reference week number (truncated to 8 bits).
    pub const WN0T: Field = field!(78, 8);
    /// Week number of leap second adjustment (truncated to 8 bits).
    pub const WN_LSF: Field = field!(86, 8);
    /// Day number at the end of which the leap second adjustment becomes
    /// effective (1 to 7).
    pub const DN: Field = field!(94, 3);
    /// Leap second count after leap second adjustment (s). Signed.
    pub const DELTA_T_LSF: Field = field!(97, 8);
    /// Time of week (s).
    pub const TOW: Field = field!(105, 20);
}

/// Word type 7: almanac for SVID1 (1/2) and almanac reference time.
pub mod word7 {
    use super::*;

    /// Issue of data of the almanac batch.
    pub const IOD_A: Field = field!(6, 4);
    /// Almanac reference week number (2 bits).
    pub const WN_A: Field = field!(10, 2);
    /// Almanac reference time (s).
    pub const T0A: Field = field!(12, 10, 600.0);
    /// Satellite identifier of the first almanac slot.
    pub const SVID_1: Field = field!(22, 6);
    /// Difference with respect to the square root of the nominal semi-major
    /// axis (m^1/2). Signed.
    pub const DELTA_SQRT_A: Field = field!(28, 13, P2_M9);
    /// Eccentricity.
    pub const E: Field = field!(41, 11, P2_M16);
    /// Argument of perigee (semi-circles). Signed.
    pub const OMEGA: Field = field!(52, 16, P2_M15);
    /// Difference with respect to the nominal inclination (semi-circles).
    /// Signed.
    pub const DELTA_I: Field = field!(68, 11, P2_M14);
    /// Longitude of ascending node at weekly epoch (semi-circles). Signed.
    pub const OMEGA_0: Field = field!(79, 16, P2_M15);
    /// Rate of change of right ascension (semi-circles/s). Signed.
    pub const OMEGA_DOT: Field = field!(95, 11, P2_M33);
    /// Mean anomaly at reference time (semi-circles). Signed.
    pub const M0: Field = field!(106, 16, P2_M15);
}

/// Word type 8: almanac for SVID1 (2/2) and SVID2 (1/2).
pub mod word8 {
    use super::*;

    /// Issue of data of the almanac batch.
    pub const IOD_A: Field = field!(6, 4);
    /// Clock bias of SVID1 (s). Signed.
    pub const AF0_1: Field = field!(10, 16, P2_M19);
    /// Clock drift of SVID1 (s/s). Signed.
    pub const AF1_1: Field = field!(26, 13, P2_M38);
    /// E5b signal health status of SVID1.
    pub const E5B_HS_1: Field = field!(39, 2);
    /// E1-B signal health status of SVID1.
    pub const E1B_HS_1: Field = field!(41, 2);
    /// Satellite identifier of the second almanac slot.
    pub const SVID_2: Field = field!(43, 6);
    /// Delta square root of the semi-major axis of SVID2 (m^1/2). Signed.
    pub const DELTA_SQRT_A: Field = field!(49, 13, P2_M9);
    /// Eccentricity of SVID2.
    pub const E: Field = field!(62, 11, P2_M16);
    /// Argument of perigee of SVID2 (semi-circles). Signed.
    pub const OMEGA: Field = field!(73, 16, P2_M15);
    /// Delta inclination of SVID2 (semi-circles). Signed.
    pub const DELTA_I: Field = field!(89, 11, P2_M14);
    /// Longitude of ascending node of SVID2 (semi-circles). Signed.
    pub const OMEGA_0: Field = field!(100, 16, P2_M15);
    /// Rate of change of right ascension of SVID2 (semi-circles/s). Signed.
    pub const OMEGA_DOT: Field = field!(116, 11, P2_M33);
}

/// Word type 9: almanac for SVID2 (2/2) and SVID3 (1/2).
pub mod word9 {
    use super::*;

    /// Issue of data of the almanac batch.
    pub const IOD_A: Field = field!(6, 4);
    /// Almanac reference week number (2 bits).
    pub const WN_A: Field = field!(10, 2);
    /// Almanac reference time (s).
    pub const T0A: Field = field!(12, 10, 600.0);
    /// Mean anomaly of SVID2 (semi-circles). Signed.
    pub const M0_2: Field = field!(22, 16, P2_M15);
    /// Clock bias of SVID2 (s). Signed.
    pub const AF0_2: Field = field!(38, 16, P2_M19);
    /// Clock drift of SVID2 (s/s). Signed.
    pub const AF1_2: Field = field!(54, 13, P2_M38);
    /// E5b signal health status of SVID2.
    pub const E5B_HS_2: Field = field!(67, 2);
    /// E1-B signal health status of SVID2.
    pub const E1B_HS_2: Field = field!(69, 2);
    /// Satellite identifier of the third almanac slot.
    pub const SVID_3: Field = field!(71, 6);
    /// Delta square root of the semi-major axis of SVID3 (m^1/2). Signed.
    pub const DELTA_SQRT_A: Field = field!(77, 13, P2_M9);
    /// Eccentricity of SVID3.
    pub const E: Field = field!(90, 11, P2_M16);
    /// Argument of perigee of SVID3 (semi-circles). Signed.
    pub const OMEGA: Field = field!(101, 16, P2_M15);
    /// Delta inclination of SVID3 (semi-circles). Signed.
    pub const DELTA_I: Field = field!(117, 11, P2_M14);
}

/// Word type 10: almanac for SVID3 (2/2) and GST-GPS conversion parameters.
pub mod word10 {
    use super::*;

    /// Issue of data of the almanac batch.
    pub const IOD_A: Field = field!(6, 4);
    /// Longitude of ascending node of SVID3 (semi-circles). Signed.
    pub const OMEGA_0_3: Field = field!(10, 16, P2_M15);
    /// Rate of change of right ascension of SVID3 (semi-circles/s). Signed.
    pub const OMEGA_DOT_3: Field = field!(26, 11, P2_M33);
    /// Mean anomaly of SVID3 (semi-circles). Signed.
    pub const M0_3: Field = field!(37, 16, P2_M15);
    /// Clock bias of SVID3 (s). Signed.
    pub const AF0_3: Field = field!(53, 16, P2_M19);
    /// Clock drift of SVID3 (s/s). Signed.
    pub const AF1_3: Field = field!(69, 13, P2_M38);
    /// E5b signal health status of SVID3.
    pub const E5B_HS_3: Field = field!(82, 2);
    /// E1-B signal health status of SVID3.
    pub const E1B_HS_3: Field = field!(84, 2);
    /// Constant term of the GST-GPS offset polynomial (s). Signed.
    pub const A0G: Field = field!(86, 16, P2_M35);
    /// First order term of the GST-GPS offset polynomial (s/s). Signed.
    pub const A1G: Field = field!(102, 12, P2_M51);
    /// GST-GPS reference time (s).
    pub const T0G: Field = field!(114, 8, 3600.0);
    /// GST-GPS reference week number (truncated to 6 bits).
    pub const WN0G: Field = field!(122, 6);
}
