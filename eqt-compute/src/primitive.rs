//! Functions to construct exact [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rat<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Parses a decimal literal, such as `12`, `2.5`, `.5` or `3.`, into an exact [`Rational`].
///
/// Returns [`None`] if the string contains anything other than ASCII digits and at most one
/// decimal point, or contains no digits at all.
pub fn rational_from_decimal(s: &str) -> Option<Rational> {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{}{}", whole, frac);
    if digits.is_empty() {
        return None;
    }

    let numer = Integer::from_str_radix(&digits, 10).ok()?;
    let denom = Integer::from(Integer::u_pow_u(10, u32::try_from(frac.len()).ok()?));
    Some(Rational::from((numer, denom)))
}

/// Returns the exact square root of the given rational, if both its numerator and denominator are
/// perfect squares.
pub fn exact_sqrt(value: &Rational) -> Option<Rational> {
    if value.cmp0().is_lt() {
        return None;
    }

    let (numer, denom) = (value.numer(), value.denom());
    if numer.is_perfect_square() && denom.is_perfect_square() {
        Some(Rational::from((numer.clone().sqrt(), denom.clone().sqrt())))
    } else {
        None
    }
}

/// Splits a non-negative integer `n` into `(k, m)` with `n = k^2 m`, moving every square factor
/// below `limit^2` out of `m`. Square factors of larger primes are left in `m`.
pub fn split_square(n: &Integer, limit: u16) -> (Integer, Integer) {
    let mut outside = Integer::from(1);
    let mut inside = n.clone();
    let mut d = 2u32;
    while d <= u32::from(limit) && inside >= d * d {
        let square = d * d;
        while inside.is_divisible_u(square) {
            inside.div_exact_u_mut(square);
            outside *= d;
        }
        d += 1;
    }
    (outside, inside)
}

/// Returns the rational as an [`i64`], if it is an integer that fits.
pub fn to_i64(value: &Rational) -> Option<i64> {
    if *value.denom() == 1 {
        value.numer().to_i64()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn decimal_integer() {
        assert_eq!(rational_from_decimal("25"), Some(rat(25)));
    }

    #[test]
    fn decimal_fraction() {
        assert_eq!(rational_from_decimal("2.5"), Some(rat((5, 2))));
        assert_eq!(rational_from_decimal(".25"), Some(rat((1, 4))));
        assert_eq!(rational_from_decimal("3."), Some(rat(3)));
        assert_eq!(rational_from_decimal("0.10"), Some(rat((1, 10))));
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(rational_from_decimal("."), None);
        assert_eq!(rational_from_decimal("1.2.3"), None);
        assert_eq!(rational_from_decimal("1e5"), None);
    }

    #[test]
    fn square_roots() {
        assert_eq!(exact_sqrt(&rat((9, 4))), Some(rat((3, 2))));
        assert_eq!(exact_sqrt(&rat(0)), Some(rat(0)));
        assert_eq!(exact_sqrt(&rat(8)), None);
        assert_eq!(exact_sqrt(&rat(-4)), None);
    }

    #[test]
    fn square_parts() {
        assert_eq!(split_square(&int(8), 1000), (int(2), int(2)));
        assert_eq!(split_square(&int(72), 1000), (int(6), int(2)));
        assert_eq!(split_square(&int(5), 1000), (int(1), int(5)));
        assert_eq!(split_square(&int(49), 1000), (int(7), int(1)));
        assert_eq!(split_square(&int(49), 5), (int(1), int(49)));
    }
}
