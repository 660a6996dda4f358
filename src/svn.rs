use crate::types::NUM_SVNS;
use core::fmt;
use core::num::NonZeroU8;

/// Galileo SVN.
///
/// The SVN is the Galileo satellite number, which is a number between 1 and
/// 36. The I/NAV message refers to satellites by this number in the SVID
/// fields of the ephemeris and almanac words. This struct guarantees at
/// construction that the value is always in range.
///
/// SVNs are typically written as Exx (E21, for instance). The `Display`
/// implementation of `Svn` does this.
///
/// # Examples
///
/// ```
/// use galileo_inav::Svn;
///
/// let svn = Svn::try_from(21u8).unwrap();
/// assert_eq!(format!("{}", svn), "E21");
/// assert!(Svn::try_from(0u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Svn(NonZeroU8);

impl Svn {
    /// Iterate over all the SVNs, from E01 to E36.
    pub fn iter() -> impl Iterator<Item = Svn> {
        (1..=NUM_SVNS).filter_map(|x| Svn::try_from(x).ok())
    }

    /// Returns the 0-based index of the SVN, which is in the range 0 to 35.
    pub fn index(&self) -> usize {
        usize::from(self.0.get()) - 1
    }
}

macro_rules! impl_conv {
    ($t:ty) => {
        impl From<Svn> for $t {
            fn from(svn: Svn) -> $t {
                svn.0.get().into()
            }
        }

        impl TryFrom<$t> for Svn {
            type Error = SvnError;
            fn try_from(value: $t) -> Result<Svn, SvnError> {
                u8::try_from(value)
                    .ok()
                    .filter(|&v| usize::from(v) <= NUM_SVNS)
                    .and_then(NonZeroU8::new)
                    .map(Svn)
                    .ok_or(SvnError::OutOfRange)
            }
        }
    };
}

impl_conv!(u8);
impl_conv!(u16);
impl_conv!(u32);
impl_conv!(u64);
impl_conv!(usize);

/// Formats an SVN as Exx.
impl fmt::Display for Svn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:02}", self.0)
    }
}

/// SVN construction error.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SvnError {
    /// The value is outside the range 1-36.
    OutOfRange,
}
