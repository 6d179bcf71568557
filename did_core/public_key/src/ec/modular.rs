use num_bigint::BigUint;

/// Square root of `n` modulo the odd prime `p`.
///
/// `n` must be a quadratic residue. For a non-residue the result `r` does not satisfy
/// `r² ≡ n (mod p)`; callers check the square when the input is untrusted.
pub fn sqrt_mod(n: &BigUint, p: &BigUint) -> BigUint {
    let zero = BigUint::from(0u32);
    let one = BigUint::from(1u32);
    let four = BigUint::from(4u32);

    let n = n % p;
    if n == zero {
        return zero;
    }

    if p % &four == BigUint::from(3u32) {
        return n.modpow(&((p + &one) / &four), p);
    }

    tonelli_shanks(&n, p)
}

fn tonelli_shanks(n: &BigUint, p: &BigUint) -> BigUint {
    let one = BigUint::from(1u32);
    let p_minus_one = p - &one;

    // p - 1 = q * 2^s with q odd
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    let euler_exponent = &p_minus_one >> 1u32;
    let mut z = BigUint::from(2u32);
    while z.modpow(&euler_exponent, p) != p_minus_one {
        z += &one;
    }
    log::trace!("tonelli_shanks >> s: {s}, non-residue: {z}");

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + &one) >> 1u32), p);

    while t != one {
        let mut i = 0;
        let mut t_squared = t.clone();
        while t_squared != one {
            t_squared = &t_squared * &t_squared % p;
            i += 1;
            if i == m {
                // n is a non-residue
                return r;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = &b * &b % p;
        }

        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn p224() -> BigUint {
        (big(1) << 224u32) - (big(1) << 96u32) + big(1)
    }

    fn curve25519_prime() -> BigUint {
        (big(1) << 255u32) - big(19)
    }

    fn assert_root(n: &BigUint, p: &BigUint) {
        let r = sqrt_mod(n, p);
        assert!(&r < p);
        assert_eq!(&r * &r % p, n % p, "sqrt of {n} mod {p}");
    }

    #[test]
    fn zero_has_root_zero() {
        assert_eq!(sqrt_mod(&big(0), &big(17)), big(0));
        assert_eq!(sqrt_mod(&big(0), &big(23)), big(0));
    }

    #[test]
    fn closed_form_for_three_mod_four() {
        for p in [7u64, 11, 19, 23, 43] {
            let p = big(p);
            for k in 1..10u64 {
                assert_root(&(big(k * k) % &p), &p);
            }
        }
    }

    #[test]
    fn tonelli_shanks_small_primes() {
        assert_eq!(sqrt_mod(&big(4), &big(17)), big(2));
        assert_eq!(sqrt_mod(&big(2), &big(17)), big(6));
        assert_eq!(sqrt_mod(&big(13), &big(17)), big(8));
        assert_eq!(sqrt_mod(&big(10), &big(13)), big(7));

        for p in [13u64, 17, 41, 73, 97] {
            let p = big(p);
            for k in 1..20u64 {
                assert_root(&(big(k * k) % &p), &p);
            }
        }
    }

    #[test]
    fn tonelli_shanks_large_two_adicity() {
        let p = p224();
        assert_eq!(sqrt_mod(&big(4), &p), &p - big(2));
        for k in [2u64, 3, 5, 7, 12345, u64::MAX] {
            let n = big(k) * big(k) % &p;
            assert_root(&n, &p);
        }
        let k = (big(1) << 200u32) + big(7);
        assert_root(&(&k * &k % &p), &p);
    }

    #[test]
    fn tonelli_shanks_curve25519_prime() {
        let p = curve25519_prime();
        for k in [2u64, 3, 99, 1 << 40] {
            assert_root(&(big(k) * big(k) % &p), &p);
        }
    }

    #[test]
    fn non_residue_yields_wrong_root() {
        // 3 is a non-residue mod 17 and mod 7
        for p in [17u64, 7] {
            let r = sqrt_mod(&big(3), &big(p));
            assert_ne!(&r * &r % big(p), big(3));
        }
    }
}
