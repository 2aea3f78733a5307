use thiserror::Error;

use findroots_core::Point;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints share a sign.
    #[error("no sign change: f({left}) = {left_value}, f({right}) = {right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

/// Current bracket bounds and the sign of `f` at the left bound.
///
/// The right sign is always the opposite of the left sign, so only the left
/// one is tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a validated bracket from evaluated endpoints.
    ///
    /// Both endpoint values must be nonzero; exact roots are handled before
    /// a bracket is formed.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the values share a sign.
    pub(super) fn new(left: Point, right: Point) -> Result<Self, BracketError> {
        let left_sign = Sign::of(left.fx);
        if left_sign == Sign::of(right.fx) {
            return Err(BracketError::NoSignChange {
                left: left.x,
                right: right.x,
                left_value: left.fx,
                right_value: right.fx,
            });
        }

        Ok(Self {
            left: left.x,
            right: right.x,
            left_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.left + self.half_width()
    }

    /// Returns half the bracket width.
    ///
    /// Each bound is halved before subtracting so that wide finite brackets
    /// do not overflow.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.right / 2.0 - self.left / 2.0
    }

    /// Shrinks the bracket onto the half that still holds a sign change.
    pub(super) fn shrink(&mut self, point: Point) {
        if Sign::of(point.fx) == self.left_sign {
            self.left = point.x;
        } else {
            self.right = point.x;
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive (or zero).
    Positive,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.left, 1.0);
        assert_relative_eq!(bounds.right, 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn new_bracket_rejects_no_sign_change() {
        let err = Bracket::new(Point::new(5.0, 21.0), Point::new(6.0, 32.0));
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));
    }

    #[test]
    fn midpoint_and_half_width() {
        let bracket = Bracket::new(Point::new(0.0, -4.0), Point::new(3.0, 5.0))
            .expect("valid bracket");
        assert_relative_eq!(bracket.midpoint(), 1.5);
        assert_relative_eq!(bracket.half_width(), 1.5);
    }

    #[test]
    fn wide_bracket_stays_finite() {
        let bracket = Bracket::new(
            Point::new(-f64::MAX, -1.0),
            Point::new(f64::MAX, 1.0),
        )
        .expect("valid bracket");

        assert_relative_eq!(bracket.half_width(), f64::MAX);
        assert_relative_eq!(bracket.midpoint(), 0.0);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = Bracket::new(Point::new(0.0, -1.0), Point::new(2.0, 1.0))
            .expect("valid bracket");

        bracket.shrink(Point::new(1.0, -0.5));
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 2.0);

        bracket.shrink(Point::new(1.5, 0.25));
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 1.5);
    }
}
