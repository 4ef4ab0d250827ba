use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when trying to construct an invalid phone number.
///
/// Each variant names the rejected component and carries the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("area code must be greater than 0 (got {0})")]
    AreaCode(i32),
    #[error("number must be greater than 0 (got {0})")]
    Number(i32),
}

/// An immutable phone number: area code plus line number.
///
/// Both components are strictly positive. You cannot create an invalid
/// `PhoneNumber`; deserialization funnels through the same validation.
///
/// Field order matters: the derived `Ord` compares area code first, then
/// number, which is the intended total order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawPhoneNumber", into = "RawPhoneNumber")]
pub struct PhoneNumber {
    area_code: i32,
    number: i32,
}

impl PhoneNumber {
    /// Create a phone number, validating both components.
    ///
    /// The area code is checked first, so when both components are out of
    /// range the error reports the area code.
    pub fn new(area_code: i32, number: i32) -> Result<Self, PhoneNumberError> {
        if area_code <= 0 {
            return Err(PhoneNumberError::AreaCode(area_code));
        }
        if number <= 0 {
            return Err(PhoneNumberError::Number(number));
        }
        Ok(Self { area_code, number })
    }

    #[must_use]
    pub const fn area_code(self) -> i32 {
        self.area_code
    }

    #[must_use]
    pub const fn number(self) -> i32 {
        self.number
    }
}

/// Renders `(area_code) number`. Width, fill, alignment, and precision flags
/// apply to the rendered string as a whole.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({}) {}", self.area_code, self.number))
    }
}

/// Unvalidated wire shape for serde.
#[derive(Serialize, Deserialize)]
struct RawPhoneNumber {
    area_code: i32,
    number: i32,
}

impl TryFrom<RawPhoneNumber> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(raw: RawPhoneNumber) -> Result<Self, Self::Error> {
        Self::new(raw.area_code, raw.number)
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self {
            area_code: value.area_code,
            number: value.number,
        }
    }
}
