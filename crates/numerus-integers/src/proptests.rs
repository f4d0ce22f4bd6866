//! Property-based tests for the number types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::arith::{gcd, gcd_ex, icbrt, isqrt, pow_mod};
    use crate::modular::Mod998244353;
    use crate::{Integer, Modulo, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_division_identity(a in small_int(), b in non_zero_int()) {
            let ia = Integer::new(a);
            let ib = Integer::new(b);
            let q = ia.clone() / ib.clone();
            let r = ia.clone() % ib.clone();
            prop_assert_eq!(q.to_i64(), Some(a / b));
            prop_assert_eq!(q * ib + r, ia);
        }

        #[test]
        fn rational_mul_recip(a in non_zero_int(), b in non_zero_int()) {
            let r = Rational::from_i64(a, b);
            prop_assert_eq!(r.clone() * r.recip(), Rational::from(1));
        }

        #[test]
        fn modint_inverse(a in 1u64..998_244_353u64) {
            let x = Mod998244353::new(a);
            let inv = x.inv().unwrap();
            prop_assert_eq!((x * inv).value(), 1);
        }

        #[test]
        fn modulo_matches_wide_arithmetic(a in any::<u64>(), b in any::<u64>(), m in 1u64..u64::MAX) {
            let x = Modulo::new(a, m);
            let y = Modulo::new(b, m);
            let wide = |v: u128| u64::try_from(v % u128::from(m)).unwrap();
            prop_assert_eq!((x * y).value(), wide(u128::from(a % m) * u128::from(b % m)));
            prop_assert_eq!((x + y).value(), wide(u128::from(a % m) + u128::from(b % m)));
            prop_assert_eq!((x - y + y), x);
        }

        #[test]
        fn modulo_inverse_iff_coprime(a in 0u64..500, m in 1u64..500) {
            let x = Modulo::new(a, m);
            match x.inv() {
                Some(inv) => prop_assert_eq!((x * inv).value(), 1 % m),
                None => prop_assert!(gcd(a, m) != 1),
            }
        }

        #[test]
        fn bezout_holds(a in -100_000i64..100_000, b in -100_000i64..100_000) {
            let (g, x, y) = gcd_ex(i128::from(a), i128::from(b));
            prop_assert_eq!(i128::from(a) * x + i128::from(b) * y, g);
            prop_assert_eq!(g, i128::from(gcd(a.unsigned_abs(), b.unsigned_abs())));
        }

        #[test]
        fn roots_are_floors(n in any::<u64>()) {
            let s = u128::from(isqrt(n));
            prop_assert!(s * s <= u128::from(n) && (s + 1) * (s + 1) > u128::from(n));
            let c = u128::from(icbrt(n));
            prop_assert!(c * c * c <= u128::from(n) && (c + 1) * (c + 1) * (c + 1) > u128::from(n));
        }

        #[test]
        fn pow_mod_matches_modulo(b in any::<u64>(), e in 0u64..1000, m in 1u64..1_000_000_000) {
            prop_assert_eq!(pow_mod(b, e, m), Modulo::new(b, m).pow(e).value());
        }
    }
}
