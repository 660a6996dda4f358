//! # Galileo I/NAV
//!
//! galileo-inav is a Rust implementation of a decoder for the Galileo I/NAV
//! navigation message, which is broadcast by the Galileo satellites in the E1-B
//! and E5b-I signals. It takes the 120-bit pages produced by the demodulator of
//! a receiver and obtains the navigation data records: ephemeris, ionospheric
//! correction and signal health, GST-UTC conversion parameters and almanac.
//!
//! This library provides an [`InavDecoder`] struct that implements the
//! decoding as a black box. A user can feed I/NAV pages into [`InavDecoder`]
//! and then request the records that have new data. Additionally, the lower
//! level stages of the decoder (page assembly and CRC checking, bit field
//! extraction, word decoding and accumulation of the words into records) are
//! accessible in case finer control is needed.
//!
//! The layout of the pages and words follows the
//! [Galileo OS SIS ICD](https://www.gsc-europa.eu/sites/default/files/sites/all/files/Galileo_OS_SIS_ICD_v2.0.pdf).
//!
//! This crate does not depend on `std` and does not allocate, so it can be used
//! in small embedded microcontrollers.
//!
//! ## Logging
//!
//! The galileo-inav crate uses the [log](https://docs.rs/log/latest/log/)
//! crate to log events related to the processing of the pages and words, such
//! as framing and CRC errors and the completion of new records.
//!
//! ## Features
//!
//! When built with the default features, the crate does not require
//! `std`. Additionally, the crate supports the following features:
//! * `std`. This links the standard library.
//! * `cli`. This builds the `inav-decode` binary, which runs the pages of an
//!   OSNMA test vector CSV file through one decoder per satellite and logs the
//!   records obtained. It requires `std`.

#![warn(missing_docs)]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod bitfields;
pub mod crc;
pub mod decoder;
pub use decoder::{FrameOutcome, InavDecoder};
mod gst;
pub use gst::{Gst, Tow, Wn, SECS_IN_WEEK};
pub mod layout;
pub mod navmessage;
pub mod page;
pub mod records;
pub mod satellite;
mod svn;
pub use svn::{Svn, SvnError};
pub mod types;
pub mod words;
