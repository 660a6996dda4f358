/// Galileo week number.
pub type Wn = u16;
/// Time of week.
///
/// This represents the time of week in seconds.
pub type Tow = u32;

/// Number of seconds in a week.
pub const SECS_IN_WEEK: Tow = 24 * 3600 * 7;

/// GST (Galileo System Time)
///
/// The Galileo System Time, stored as a week number and a time of week.
///
/// # Examples
/// ```
/// use galileo_inav::Gst;
///
/// let gst = Gst::new(1176, 120930);
/// assert_eq!(gst.wn(), 1176);
/// assert_eq!(gst.tow(), 120930);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Gst {
    wn: Wn,
    tow: Tow,
}

impl Gst {
    /// Constructs a new GST from a week number and TOW.
    ///
    /// # Panics
    ///
    /// Panics if `tow` is greater or equal to 604800 (the number of
    /// seconds in a week).
    pub fn new(wn: Wn, tow: Tow) -> Self {
        assert!(tow < SECS_IN_WEEK);
        Gst { wn, tow }
    }

    /// Constructs a new GST from broadcast WN and TOW fields.
    ///
    /// The TOW field of the navigation message is 20 bits wide, so it can
    /// hold values that are not a valid time of week. This returns `None` in
    /// that case.
    ///
    /// # Examples
    /// ```
    /// use galileo_inav::Gst;
    ///
    /// assert_eq!(Gst::checked_new(1176, 604799), Some(Gst::new(1176, 604799)));
    /// assert_eq!(Gst::checked_new(1176, 604800), None);
    /// ```
    pub fn checked_new(wn: Wn, tow: Tow) -> Option<Self> {
        if tow < SECS_IN_WEEK {
            Some(Gst { wn, tow })
        } else {
            None
        }
    }

    /// Returns the week number of the GST.
    pub fn wn(&self) -> Wn {
        self.wn
    }

    /// Returns the time of week of the GST.
    pub fn tow(&self) -> Tow {
        self.tow
    }

    /// Returns the number of seconds elapsed since a reference time.
    ///
    /// The reference is given by a week number truncated to `wn_bits` bits and
    /// a time of week. The truncated week is resolved to the week closest to
    /// the week of `self`, which is how the truncated week numbers in the
    /// navigation message are meant to be interpreted.
    ///
    /// # Examples
    /// ```
    /// use galileo_inav::Gst;
    ///
    /// let gst = Gst::new(1280, 100);
    /// // 1280 = 5 * 256, so the truncated week 255 refers to week 1279
    /// assert_eq!(gst.seconds_since(255, 8, 604000.0), 900.0);
    /// ```
    pub fn seconds_since(&self, truncated_wn: u16, wn_bits: u32, tow: f64) -> f64 {
        let weeks = self.weeks_since(truncated_wn, wn_bits);
        f64::from(self.tow) - tow + f64::from(SECS_IN_WEEK) * f64::from(weeks)
    }

    /// Returns the number of weeks between a truncated week number and the
    /// week of `self`.
    ///
    /// The result is in the range `-2^(wn_bits - 1)..2^(wn_bits - 1)`.
    pub fn weeks_since(&self, truncated_wn: u16, wn_bits: u32) -> i32 {
        let modulus = 1i32 << wn_bits;
        let diff = (i32::from(self.wn) - i32::from(truncated_wn)).rem_euclid(modulus);
        if diff >= modulus / 2 {
            diff - modulus
        } else {
            diff
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[should_panic]
    fn invalid_tow() {
        let _ = Gst::new(1176, SECS_IN_WEEK);
    }

    #[test]
    fn weeks_since() {
        let gst = Gst::new(1176, 0);
        // 1176 = 4 * 256 + 152
        assert_eq!(gst.weeks_since(152, 8), 0);
        assert_eq!(gst.weeks_since(150, 8), 2);
        assert_eq!(gst.weeks_since(160, 8), -8);
        // 1176 = 18 * 64 + 24
        assert_eq!(gst.weeks_since(24, 6), 0);
        assert_eq!(gst.weeks_since(63, 6), 25);
        assert_eq!(gst.weeks_since(0, 6), 24);
        assert_eq!(Gst::new(1183, 0).weeks_since(0, 6), 31);
        assert_eq!(Gst::new(1184, 0).weeks_since(0, 6), -32);
    }

    #[test]
    fn seconds_since() {
        let gst = Gst::new(1176, 120930);
        assert_eq!(gst.seconds_since(152, 8, 118800.0), 2130.0);
        assert_eq!(gst.seconds_since(151, 8, 604800.0 - 70.0), 121000.0);
        assert_eq!(gst.seconds_since(153, 8, 0.0), -483870.0);
    }
}
