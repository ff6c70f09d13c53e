use std::cmp::Ordering;
use std::fmt;

/// A non-negative version component with no fixed-width ceiling.
///
/// Stored as its canonical decimal digits: `"0"` or a digit run that does not
/// start with `0`. Canonical form makes ordering a comparison of length first,
/// then of the digits themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber {
    digits: String,
}

impl VersionNumber {
    /// The number zero
    pub fn zero() -> Self {
        VersionNumber {
            digits: "0".to_string(),
        }
    }

    /// Accepts canonical decimal digits only (no sign, no leading zeros).
    pub(crate) fn from_canonical(digits: &str) -> Option<Self> {
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        canonical.then(|| VersionNumber {
            digits: digits.to_string(),
        })
    }

    /// Returns this number plus one.
    pub fn incremented(&self) -> Self {
        let mut digits = self.digits.clone().into_bytes();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
        VersionNumber {
            digits: digits.into_iter().map(char::from).collect(),
        }
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl From<u64> for VersionNumber {
    fn from(value: u64) -> Self {
        VersionNumber {
            digits: value.to_string(),
        }
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
