use thiserror::Error;

/// Error returned by [`IntervalSet::insert`](crate::IntervalSet::insert) when
/// the requested interval is empty, reversed, or has incomparable endpoints
/// (e.g. a `NaN` float). The set is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid interval: low must be strictly less than high")]
pub struct InvalidIntervalError;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_precondition() {
        assert_eq!(
            InvalidIntervalError.to_string(),
            "invalid interval: low must be strictly less than high"
        );
    }
}
