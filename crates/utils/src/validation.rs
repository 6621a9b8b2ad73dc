//! Runs named validators over a value.

use strictkit_core::{Outcome, Validator};

/// Checks `value` against each validator in order.
///
/// Fails with `"<name> failed"` on the first rejection; otherwise succeeds
/// with `value` itself.
pub fn validate_all<'a, T: ?Sized>(
    value: &'a T,
    validators: &[(&str, &dyn Validator<T>)],
) -> Outcome<&'a T> {
    for (name, validator) in validators {
        if !validator.validate(value) {
            tracing::debug!(validator = *name, "validation rejected value");
            return Outcome::failure(format!("{name} failed"));
        }
    }
    Outcome::success(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::is_not_empty;

    fn max_len_8(s: &str) -> bool {
        s.chars().count() <= 8
    }

    #[test]
    fn accepts_when_every_validator_passes() {
        let checks: [(&str, &dyn Validator<str>); 2] =
            [("not_empty", &is_not_empty), ("max_len", &max_len_8)];
        assert_eq!(validate_all("name", &checks), Outcome::success("name"));
    }

    #[test]
    fn reports_first_rejecting_validator() {
        let checks: [(&str, &dyn Validator<str>); 2] =
            [("not_empty", &is_not_empty), ("max_len", &max_len_8)];
        assert_eq!(
            validate_all("   ", &checks),
            Outcome::failure("not_empty failed")
        );
        assert_eq!(
            validate_all("far too long", &checks),
            Outcome::failure("max_len failed")
        );
    }

    #[test]
    fn empty_validator_list_accepts() {
        let value = 3u8;
        assert_eq!(validate_all(&value, &[]), Outcome::success(&3u8));
    }
}
