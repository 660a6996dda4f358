//! Navigation data records.
//!
//! This module contains the records that are produced by the
//! [`InavDecoder`](crate::InavDecoder): [`Ephemeris`], [`Iono`], [`UtcModel`]
//! and [`Almanac`]. These are plain values that hold a snapshot of the
//! navigation data at the time they were obtained from the decoder.
//!
//! All the parameters are given in the units defined in the Galileo OS SIS
//! ICD after applying the scale factor. Angles are given in semi-circles.

use crate::gst::{Gst, Tow, Wn};
use crate::types::{IodA, IodNav, NUM_SVNS};
use crate::Svn;

/// Ephemeris and clock correction parameters.
///
/// These are transmitted in I/NAV words 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ephemeris {
    /// Issue of data of the navigation batch.
    pub iod_nav: IodNav,
    /// Satellite transmitting the ephemeris.
    ///
    /// This is `None` if the SVID field does not contain a valid SVN.
    pub svn: Option<Svn>,
    /// Ephemeris reference time (s).
    pub t0e: f64,
    /// Mean anomaly at reference time (semi-circles).
    pub m0: f64,
    /// Eccentricity.
    pub e: f64,
    /// Square root of the semi-major axis (m^1/2).
    pub sqrt_a: f64,
    /// Longitude of ascending node at weekly epoch (semi-circles).
    pub omega_0: f64,
    /// Inclination angle at reference time (semi-circles).
    pub i_0: f64,
    /// Argument of perigee (semi-circles).
    pub omega: f64,
    /// Rate of change of inclination angle (semi-circles/s).
    pub i_dot: f64,
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
    /// Cosine correction to the inclination (rad).
    pub cic: f64,
    /// Sine correction to the inclination (rad).
    pub cis: f64,
    /// Signal in space accuracy index for E1/E5b.
    pub sisa: u8,
    /// Clock correction reference time (s).
    pub t0c: f64,
    /// Clock bias (s).
    pub af0: f64,
    /// Clock drift (s/s).
    pub af1: f64,
    /// Clock drift rate (s/s^2).
    pub af2: f64,
}

/// Ionospheric correction, BGD, signal health and data validity status.
///
/// These are transmitted in I/NAV word 5, together with the GST.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Iono {
    /// Effective ionisation level 1st order parameter (sfu).
    pub ai0: f64,
    /// Effective ionisation level 2nd order parameter (sfu/degree).
    pub ai1: f64,
    /// Effective ionisation level 3rd order parameter (sfu/degree^2).
    pub ai2: f64,
    /// Ionospheric disturbance flags for regions 1 to 5.
    pub region_flags: [bool; 5],
    /// E1-E5a broadcast group delay (s).
    pub bgd_e1_e5a: f64,
    /// E1-E5b broadcast group delay (s).
    pub bgd_e1_e5b: f64,
    /// E5b signal health status.
    pub e5b_hs: u8,
    /// E1-B signal health status.
    pub e1b_hs: u8,
    /// E5b data validity status. `true` means "working without guarantee".
    pub e5b_dvs: bool,
    /// E1-B data validity status. `true` means "working without guarantee".
    pub e1b_dvs: bool,
    /// Week number.
    pub wn: Wn,
    /// Time of week (s).
    pub tow: Tow,
}

impl Iono {
    /// Returns the GST at which word 5 was transmitted.
    ///
    /// Returns `None` if the broadcast TOW is not valid.
    pub fn gst(&self) -> Option<Gst> {
        Gst::checked_new(self.wn, self.tow)
    }
}

/// GST-UTC conversion parameters.
///
/// These are transmitted in I/NAV word 6.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UtcModel {
    /// Constant term of the polynomial (s).
    pub a0: f64,
    /// First order term of the polynomial (s/s).
    pub a1: f64,
    /// Leap second count before leap second adjustment (s).
    pub delta_t_ls: i8,
    /// UTC data reference time of week (s).
    pub t0t: f64,
    /// UTC data reference week number, truncated to 8 bits.
    pub wn0t: u8,
    /// Week number of leap second adjustment, truncated to 8 bits.
    pub wn_lsf: u8,
    /// Day number at the end of which the leap second adjustment becomes
    /// effective (1 to 7).
    pub dn: u8,
    /// Leap second count after leap second adjustment (s).
    pub delta_t_lsf: i8,
    /// Time of week at which word 6 was transmitted (s).
    pub tow: Tow,
}

impl UtcModel {
    /// Computes the GST-UTC offset at `gst`.
    ///
    /// The result, in seconds, is ΔtUTC = ΔtLS + A0 + A1 (t - t0t), so
    /// that UTC = GST - ΔtUTC. After the end of the day `dn` of the week
    /// `wn_lsf`, ΔtLSF is used instead of ΔtLS.
    ///
    /// The 6-hour window around the leap second event, in which the UTC time
    /// of day has to be computed modulo 86400 + ΔtLSF - ΔtLS, is not handled
    /// here.
    pub fn delta_t_utc(&self, gst: Gst) -> f64 {
        let leap_seconds = if self.leap_second_applied(gst) {
            self.delta_t_lsf
        } else {
            self.delta_t_ls
        };
        let dt = gst.seconds_since(self.wn0t.into(), 8, self.t0t);
        f64::from(leap_seconds) + self.a0 + self.a1 * dt
    }

    /// Returns `true` if the leap second adjustment announced in this model is
    /// already effective at `gst`.
    pub fn leap_second_applied(&self, gst: Gst) -> bool {
        let event_tow = f64::from(self.dn) * 86400.0;
        gst.seconds_since(self.wn_lsf.into(), 8, event_tow) >= 0.0
    }
}

/// GST-GPS conversion parameters.
///
/// These are transmitted in I/NAV word 10.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GstGpsConversion {
    /// Constant term of the polynomial (s).
    pub a0g: f64,
    /// First order term of the polynomial (s/s).
    pub a1g: f64,
    /// Reference time of week (s).
    pub t0g: f64,
    /// Reference week number, truncated to 6 bits.
    pub wn0g: u8,
}

impl GstGpsConversion {
    /// Computes the GST-GPS time offset at `gst`.
    ///
    /// The result, in seconds, is ΔtSystems = A0G + A1G (t - t0G), so
    /// that GPS time = GST - ΔtSystems.
    pub fn offset(&self, gst: Gst) -> f64 {
        let dt = gst.seconds_since(self.wn0g.into(), 6, self.t0g);
        self.a0g + self.a1g * dt
    }
}

/// Almanac of a single satellite.
///
/// Each almanac batch transmitted in words 7 to 10 contains the almanacs of
/// three satellites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteAlmanac {
    /// Satellite to which this almanac refers.
    pub svn: Svn,
    /// Issue of data of the almanac batch.
    pub iod_a: IodA,
    /// Almanac reference week number, truncated to 2 bits.
    pub wn_a: u8,
    /// Almanac reference time (s).
    pub t0a: f64,
    /// Difference between the square root of the semi-major axis and the
    /// square root of the nominal semi-major axis (m^1/2).
    pub delta_sqrt_a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Argument of perigee (semi-circles).
    pub omega: f64,
    /// Difference between the inclination and the nominal inclination
    /// (semi-circles).
    pub delta_i: f64,
    /// Longitude of ascending node at weekly epoch (semi-circles).
    pub omega_0: f64,
    /// Rate of change of right ascension (semi-circles/s).
    pub omega_dot: f64,
    /// Mean anomaly at reference time (semi-circles).
    pub m0: f64,
    /// Clock bias (s).
    pub af0: f64,
    /// Clock drift (s/s).
    pub af1: f64,
    /// E5b signal health status.
    pub e5b_hs: u8,
    /// E1-B signal health status.
    pub e1b_hs: u8,
}

/// Almanac.
///
/// Collection of the satellite almanacs that have been received, indexed by
/// SVN, together with the GST-GPS conversion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Almanac {
    satellites: [Option<SatelliteAlmanac>; NUM_SVNS],
    /// GST-GPS conversion parameters.
    ///
    /// This is `None` if word 10 has not been received.
    pub gst_gps: Option<GstGpsConversion>,
}

impl Almanac {
    /// Constructs an empty almanac.
    pub fn new() -> Almanac {
        Almanac {
            satellites: [None; NUM_SVNS],
            gst_gps: None,
        }
    }

    /// Returns the almanac for the satellite `svn`, if it has been received.
    pub fn get(&self, svn: Svn) -> Option<&SatelliteAlmanac> {
        self.satellites[svn.index()].as_ref()
    }

    /// Iterates over the satellite almanacs that have been received, in
    /// increasing SVN order.
    pub fn iter(&self) -> impl Iterator<Item = &SatelliteAlmanac> {
        self.satellites.iter().flatten()
    }

    /// Returns `true` if no satellite almanacs have been received.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub(crate) fn store(&mut self, almanac: SatelliteAlmanac) {
        self.satellites[almanac.svn.index()] = Some(almanac);
    }
}

impl Default for Almanac {
    fn default() -> Almanac {
        Almanac::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn utc_model() -> UtcModel {
        UtcModel {
            a0: 1e-9,
            a1: 1e-14,
            delta_t_ls: 18,
            t0t: 86400.0,
            wn0t: 152,
            wn_lsf: 153,
            dn: 2,
            delta_t_lsf: 19,
            tow: 0,
        }
    }

    #[test]
    fn delta_t_utc() {
        let utc = utc_model();
        // week 1176 is 152 modulo 256
        let gst = Gst::new(1176, 86400 + 1000);
        let expected = 18.0 + 1e-9 + 1e-14 * 1000.0;
        assert!((utc.delta_t_utc(gst) - expected).abs() < 1e-15);
        assert!(!utc.leap_second_applied(gst));
    }

    #[test]
    fn leap_second() {
        let utc = utc_model();
        let before = Gst::new(1177, 2 * 86400 - 1);
        let after = Gst::new(1177, 2 * 86400);
        assert!(!utc.leap_second_applied(before));
        assert!(utc.leap_second_applied(after));
        let dt = 604800.0 + 2.0 * 86400.0 - 86400.0;
        let expected = 19.0 + 1e-9 + 1e-14 * dt;
        assert!((utc.delta_t_utc(after) - expected).abs() < 1e-12);
    }

    #[test]
    fn gst_gps_offset() {
        let conversion = GstGpsConversion {
            a0g: 2e-9,
            a1g: -1e-15,
            t0g: 3600.0,
            wn0g: 24,
        };
        let gst = Gst::new(1176, 7200);
        let expected = 2e-9 - 1e-15 * 3600.0;
        assert!((conversion.offset(gst) - expected).abs() < 1e-20);
    }

    #[test]
    fn iono_gst() {
        let iono = Iono {
            wn: 1176,
            tow: 121000,
            ..Default::default()
        };
        assert_eq!(iono.gst(), Some(Gst::new(1176, 121000)));
        let iono = Iono {
            tow: 0xfffff,
            ..iono
        };
        assert_eq!(iono.gst(), None);
    }

    #[test]
    fn almanac_table() {
        let mut almanac = Almanac::default();
        assert!(almanac.is_empty());
        let e11 = Svn::try_from(11u8).unwrap();
        let e05 = Svn::try_from(5u8).unwrap();
        let sat = SatelliteAlmanac {
            svn: e11,
            iod_a: 3,
            wn_a: 1,
            t0a: 6000.0,
            delta_sqrt_a: 0.0,
            e: 0.0,
            omega: 0.0,
            delta_i: 0.0,
            omega_0: 0.0,
            omega_dot: 0.0,
            m0: 0.0,
            af0: 0.0,
            af1: 0.0,
            e5b_hs: 0,
            e1b_hs: 0,
        };
        almanac.store(sat);
        almanac.store(SatelliteAlmanac { svn: e05, ..sat });
        assert_eq!(almanac.get(e11), Some(&sat));
        assert!(almanac.get(Svn::try_from(12u8).unwrap()).is_none());
        let svns: Vec<_> = almanac.iter().map(|a| a.svn).collect();
        assert_eq!(svns, vec![e05, e11]);
    }
}
