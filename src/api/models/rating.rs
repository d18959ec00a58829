//! Star ratings and their display classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest rating a user can give.
pub const MIN_RATING: u8 = 1;
/// Highest rating a user can give.
pub const MAX_RATING: u8 = 5;

/// A star rating guaranteed to lie in `1..=5`.
///
/// Construction is fallible everywhere, including JSON decoding, so a value of
/// this type can never represent "no rating" or an out-of-range score.
///
/// # Examples
///
/// ```
/// use feedback_console::api::Rating;
///
/// let rating = Rating::new(4).expect("4 is a valid rating");
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(0).is_err());
/// assert_eq!(Rating::default().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Raised when a rating falls outside `1..=5`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("rating must be between {MIN_RATING} and {MAX_RATING}, got {value}")]
pub struct RatingError {
    /// The rejected value.
    pub value: u8,
}

impl Rating {
    /// The five valid ratings in ascending order.
    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Creates a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] when `value` is out of range.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= MIN_RATING && value <= MAX_RATING {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the next rating up, saturating at five stars.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= MAX_RATING {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// Returns the next rating down, saturating at one star.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 <= MIN_RATING {
            self
        } else {
            Self(self.0 - 1)
        }
    }

    /// Returns the display class for this rating.
    #[must_use]
    pub fn class(self) -> RatingClass {
        RatingClass::classify(f64::from(self.0))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(MAX_RATING)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Colour class used when displaying a rating or an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingClass {
    /// Scores of four and above.
    Positive,
    /// Scores in `[3, 4)`.
    Neutral,
    /// Scores below three.
    Negative,
}

impl RatingClass {
    /// Classifies a score. Total over all inputs; `NaN` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedback_console::api::RatingClass;
    ///
    /// assert_eq!(RatingClass::classify(4.0), RatingClass::Positive);
    /// assert_eq!(RatingClass::classify(3.5), RatingClass::Neutral);
    /// assert_eq!(RatingClass::classify(2.99), RatingClass::Negative);
    /// ```
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= 4.0 {
            Self::Positive
        } else if score >= 3.0 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    /// Returns the class name used by views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Returns the ANSI SGR colour code for this class.
    #[must_use]
    pub const fn ansi_colour(self) -> &'static str {
        match self {
            Self::Positive => "32",
            Self::Neutral => "33",
            Self::Negative => "31",
        }
    }
}
