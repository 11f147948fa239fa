//! End-to-end golden scenarios, cross-checked against num-bigint where
//! the expected value is too large to inline.

use num_bigint::BigUint;

use decint::{Error, Signed, Unsigned};

fn u(text: &str) -> Unsigned {
    text.parse().unwrap()
}

fn s(text: &str) -> Signed {
    text.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Arithmetic scenarios
// ---------------------------------------------------------------------------

#[test]
fn addition_across_many_limbs() {
    let sum = u("1000000000000000000000000000") + u("1");
    assert_eq!(sum.to_string(), "1000000000000000000000000001");
}

#[test]
fn multiplication_known_product() {
    let product = u("123456789") * u("987654321");
    assert_eq!(product.to_string(), "121932631112635269");
}

#[test]
fn divmod_known_quotient_and_remainder() {
    // 10^6 == 17 (mod 999983), so 10^20 == 17^3 * 100 == 491300.
    let a = u("100000000000000000000");
    let b = u("999983");
    let (q, r) = a.divmod(&b).unwrap();
    assert_eq!(q.to_string(), "100001700028900");
    assert_eq!(r.to_string(), "491300");
    assert!(r < b);
    assert_eq!(&(&q * &b) + &r, a);

    let ref_a: BigUint = "100000000000000000000".parse().unwrap();
    let ref_b: BigUint = "999983".parse().unwrap();
    assert_eq!(q.to_string(), (&ref_a / &ref_b).to_string());
    assert_eq!(r.to_string(), (&ref_a % &ref_b).to_string());
}

#[test]
fn factorial_100() {
    let mut factorial = Unsigned::one();
    for i in 2u32..=100 {
        factorial *= &Unsigned::from(i);
    }
    let rendered = factorial.to_string();

    let mut reference = BigUint::from(1u32);
    for i in 2u32..=100 {
        reference *= i;
    }
    assert_eq!(rendered, reference.to_string());
    assert_eq!(rendered.len(), 158);
    assert!(rendered.ends_with(&"0".repeat(20)));
}

#[test]
fn fibonacci_1000() {
    let (mut previous, mut current) = (Unsigned::zero(), Unsigned::one());
    for _ in 0..999 {
        let next = &previous + &current;
        previous = current;
        current = next;
    }
    let rendered = current.to_string();

    let (mut ref_previous, mut ref_current) = (BigUint::from(0u32), BigUint::from(1u32));
    for _ in 0..999 {
        let next = &ref_previous + &ref_current;
        ref_previous = ref_current;
        ref_current = next;
    }
    assert_eq!(rendered, ref_current.to_string());
    assert_eq!(rendered.len(), 209);
    assert!(rendered.starts_with("4346655768"));
}

#[test]
fn signed_modulus_follows_dividend() {
    let remainder = s("-5") % s("3");
    assert_eq!(remainder.to_string(), "-2");
    let reconstructed = (s("-5") / s("3")) * s("3") + s("-2");
    assert_eq!(reconstructed, s("-5"));
}

// ---------------------------------------------------------------------------
// Boundary behaviors
// ---------------------------------------------------------------------------

#[test]
fn zero_identities() {
    let zero = Unsigned::zero();
    let x = u("123456789012345678901234567890");
    assert_eq!(&zero + &zero, zero);
    assert_eq!(&zero * &x, zero);
    assert_eq!(&x - &x, zero);
    assert_eq!((&x / &x).to_string(), "1");
    assert_eq!(&x % &x, zero);
}

#[test]
fn decrementing_zero_raises() {
    let mut zero = Unsigned::zero();
    assert_eq!(zero.decrement().unwrap_err(), Error::DecrementZero);
}

#[test]
fn carries_at_the_limb_base() {
    assert_eq!((u("99999999") + u("1")).to_string(), "100000000");
    assert_eq!((u("100000000") - u("1")).to_string(), "99999999");
    assert_eq!(
        (u("9999999999999999") + u("1")).to_string(),
        "10000000000000000"
    );
}

#[test]
fn products_agree_across_the_algorithm_threshold() {
    // 63, 64 and 65 limbs straddle the schoolbook/transform switch.
    for digits in [503, 504, 511, 512, 513, 520] {
        let a_text = "9".repeat(digits);
        let b_text = format!("1{}", "0".repeat(digits - 1));
        let product = u(&a_text) * u(&b_text);

        let ref_a: BigUint = a_text.parse().unwrap();
        let ref_b: BigUint = b_text.parse().unwrap();
        assert_eq!(
            product.to_string(),
            (ref_a * ref_b).to_string(),
            "{digits}-digit operands diverged"
        );
    }
}

#[test]
fn long_chain_of_operations_stays_canonical() {
    // (x^2 + x) / x - 1 == x for a 2000-digit x.
    let x = u(&"123456789".repeat(223)[..2000]);
    let square = &x * &x;
    let sum = &square + &x;
    let quotient = &sum / &x;
    let result = quotient - Unsigned::one();
    assert_eq!(result, x);
}
