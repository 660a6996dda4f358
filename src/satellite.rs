//! Satellite identity.
//!
//! This module contains a small lookup of the GNSS constellations and the
//! satellite block (or, for GLONASS, the frequency channel) that corresponds
//! to each PRN. The tables give the status of the constellations around the
//! time the first Galileo IOV satellites were launched. Satellites that are
//! not listed give [`Block::Unknown`].

use core::fmt;
use core::str::FromStr;

/// GNSS constellation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Constellation {
    /// GPS.
    Gps,
    /// GLONASS.
    Glonass,
    /// SBAS (WAAS, EGNOS).
    Sbas,
    /// Galileo.
    Galileo,
    /// Compass (BeiDou).
    Compass,
}

impl Constellation {
    fn name(self) -> &'static str {
        match self {
            Constellation::Gps => "GPS",
            Constellation::Glonass => "GLONASS",
            Constellation::Sbas => "SBAS",
            Constellation::Galileo => "Galileo",
            Constellation::Compass => "Compass",
        }
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown constellation name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct UnknownConstellation;

impl fmt::Display for UnknownConstellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("constellation is not one of GPS, GLONASS, SBAS, Galileo, Compass")
    }
}

/// Parses a constellation name.
///
/// The comparison is case-insensitive, so both `"GLONASS"` and `"Glonass"`
/// are accepted. `"BeiDou"` is accepted as a synonym of `"Compass"`.
///
/// # Examples
/// ```
/// use galileo_inav::satellite::Constellation;
///
/// assert_eq!("Galileo".parse(), Ok(Constellation::Galileo));
/// assert_eq!("glonass".parse(), Ok(Constellation::Glonass));
/// assert!("QZSS".parse::<Constellation>().is_err());
/// ```
impl FromStr for Constellation {
    type Err = UnknownConstellation;
    fn from_str(s: &str) -> Result<Constellation, UnknownConstellation> {
        [
            Constellation::Gps,
            Constellation::Glonass,
            Constellation::Sbas,
            Constellation::Galileo,
            Constellation::Compass,
        ]
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(s))
        .or_else(|| {
            s.eq_ignore_ascii_case("BeiDou")
                .then_some(Constellation::Compass)
        })
        .ok_or(UnknownConstellation)
    }
}

/// Satellite block.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Block {
    /// GPS block IIA.
    GpsIIA,
    /// GPS block IIR.
    GpsIIR,
    /// GPS block IIR-M.
    GpsIIRM,
    /// GPS block IIF.
    GpsIIF,
    /// GLONASS satellite transmitting in the given frequency channel.
    GlonassChannel(i8),
    /// WAAS geostationary satellite.
    Waas,
    /// EGNOS geostationary satellite.
    Egnos,
    /// Galileo In-Orbit Validation satellite.
    GalileoIov,
    /// The satellite is not in the tables.
    Unknown,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::GpsIIA => f.write_str("IIA"),
            Block::GpsIIR => f.write_str("IIR"),
            Block::GpsIIRM => f.write_str("IIR-M"),
            Block::GpsIIF => f.write_str("IIF"),
            Block::GlonassChannel(k) => write!(f, "{}", k),
            Block::Waas => f.write_str("WAAS"),
            Block::Egnos => f.write_str("EGNOS"),
            Block::GalileoIov => f.write_str("IOV"),
            Block::Unknown => f.write_str("Unknown"),
        }
    }
}

// Indexed by PRN - 1
const GPS_BLOCKS: [Block; 32] = {
    use Block::*;
    [
        GpsIIF, GpsIIR, GpsIIA, GpsIIA, GpsIIRM, GpsIIA, GpsIIRM, GpsIIA, // 1-8
        GpsIIA, GpsIIA, GpsIIR, GpsIIRM, GpsIIR, GpsIIR, GpsIIRM, GpsIIR, // 9-16
        GpsIIRM, GpsIIR, GpsIIR, GpsIIR, GpsIIR, GpsIIR, GpsIIR, GpsIIA, // 17-24
        GpsIIF, GpsIIA, GpsIIA, GpsIIR, GpsIIRM, GpsIIA, GpsIIRM, GpsIIA, // 25-32
    ]
};

// Frequency channel of each orbital slot, indexed by slot - 1. Satellites in
// antipodal slots of the same plane share the channel.
const GLONASS_CHANNELS: [i8; 24] = [
    1, -4, 5, 6, 1, -4, 5, 6, // plane 1
    -2, -7, 0, -1, -2, -7, 0, -1, // plane 2
    4, -3, 3, 2, 4, -3, 3, 2, // plane 3
];

const WAAS_PRNS: [u16; 2] = [122, 134];
const EGNOS_PRNS: [u16; 3] = [120, 124, 126];
const GALILEO_IOV_PRNS: [u16; 4] = [11, 12, 19, 20];
const GALILEO_MAX_PRN: u16 = 36;

/// Checks whether `prn` is a valid PRN of `constellation`.
///
/// For SBAS, only the WAAS and EGNOS PRNs are valid. No PRNs are valid for
/// Compass.
pub fn is_valid_prn(constellation: Constellation, prn: u16) -> bool {
    match constellation {
        Constellation::Gps => (1..=GPS_BLOCKS.len() as u16).contains(&prn),
        Constellation::Glonass => (1..=GLONASS_CHANNELS.len() as u16).contains(&prn),
        Constellation::Sbas => WAAS_PRNS.contains(&prn) || EGNOS_PRNS.contains(&prn),
        Constellation::Galileo => (1..=GALILEO_MAX_PRN).contains(&prn),
        Constellation::Compass => false,
    }
}

/// Returns the block of the satellite with PRN `prn` in `constellation`.
///
/// # Examples
/// ```
/// use galileo_inav::satellite::{block, Block, Constellation};
///
/// assert_eq!(block(Constellation::Gps, 1), Block::GpsIIF);
/// assert_eq!(block(Constellation::Glonass, 10), Block::GlonassChannel(-7));
/// assert_eq!(block(Constellation::Galileo, 11), Block::GalileoIov);
/// assert_eq!(block(Constellation::Galileo, 21), Block::Unknown);
/// ```
pub fn block(constellation: Constellation, prn: u16) -> Block {
    let index = usize::from(prn).wrapping_sub(1);
    match constellation {
        Constellation::Gps => GPS_BLOCKS.get(index).copied().unwrap_or(Block::Unknown),
        Constellation::Glonass => GLONASS_CHANNELS
            .get(index)
            .map(|&k| Block::GlonassChannel(k))
            .unwrap_or(Block::Unknown),
        Constellation::Sbas if WAAS_PRNS.contains(&prn) => Block::Waas,
        Constellation::Sbas if EGNOS_PRNS.contains(&prn) => Block::Egnos,
        Constellation::Galileo if GALILEO_IOV_PRNS.contains(&prn) => Block::GalileoIov,
        _ => Block::Unknown,
    }
}
