//! Property-based tests for canonical rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::{gcd, Rational, RationalError, Step};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn hash_of(value: &Rational) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
            prop_assume!(d != 0);
            match Rational::new(n, d) {
                Ok(x) => {
                    prop_assert!(x.denominator() > 0);
                    prop_assert_eq!(
                        gcd(x.numerator().unsigned_abs(), x.denominator().unsigned_abs()),
                        1
                    );
                }
                // only a reduced magnitude of 2^63 is unrepresentable
                Err(err) => {
                    prop_assert_eq!(err, RationalError::Overflow);
                    prop_assert!(n == i64::MIN || d == i64::MIN);
                }
            }
        }

        #[test]
        fn zero_is_unique(d in non_zero_int()) {
            let z = Rational::new(0, d).unwrap();
            prop_assert_eq!((z.numerator(), z.denominator()), (0, 1));
            prop_assert_eq!(z, Rational::ZERO);
        }

        #[test]
        fn scaling_preserves_value(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Rational::new(n * k, d * k).unwrap(), Rational::new(n, d).unwrap());
        }

        #[test]
        fn zero_denominator_rejected(n in any::<i64>()) {
            prop_assert_eq!(Rational::new(n, 0), Err(RationalError::ZeroDenominator));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn identities(a in rational()) {
            prop_assert_eq!(a + Rational::from_int(0), a);
            prop_assert_eq!(a * Rational::from_int(1), a);
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert_eq!(a - a, Rational::ZERO);
            prop_assert_eq!(a + (-a), Rational::ZERO);
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            prop_assert_eq!(a * a.inverse().unwrap(), Rational::ONE);
        }

        #[test]
        fn inverse_round_trip(a in non_zero_rational()) {
            prop_assert_eq!(a.inverse().unwrap().inverse().unwrap(), a);
        }

        #[test]
        fn division_undoes_multiplication(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn division_by_zero_fails(a in rational()) {
            prop_assert_eq!(a.try_div(Rational::ZERO), Err(RationalError::DivisionByZero));
        }

        // Ordering and hashing

        #[test]
        fn ordering_matches_difference(a in rational(), b in rational()) {
            prop_assert_eq!(a < b, (b - a).is_positive());
        }

        #[test]
        fn hash_consistent_with_eq(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let a = Rational::new(n, d).unwrap();
            let b = Rational::new(n * k, d * k).unwrap();
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        // Conversions

        #[test]
        fn display_parses_back(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
        }

        #[test]
        fn slash_form_parses(n in small_int(), d in non_zero_int()) {
            prop_assert_eq!(format!("{n}/{d}").parse::<Rational>(), Ok(Rational::new(n, d).unwrap()));
        }

        #[test]
        fn hundredths_from_float(n in small_int()) {
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64 / 100.0;
            prop_assert_eq!(Rational::from_f64(value), Ok(Rational::new(n, 100).unwrap()));
        }

        // Stepping

        #[test]
        fn advance_by_distance(a in rational(), b in rational()) {
            let distance = a.distance_to(&b).unwrap();
            prop_assert_eq!(a.advanced_by(&distance), Ok(b));
        }
    }
}
