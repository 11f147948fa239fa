#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use decint::Unsigned;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First byte picks the split point between the two operands.
    let split = 1 + data[0] as usize % (data.len() - 2);
    let (left, right) = data[1..].split_at(split);

    let a_digits: String = left.iter().map(|b| char::from(b'0' + b % 10)).collect();
    let b_digits: String = right.iter().map(|b| char::from(b'0' + b % 10)).collect();

    let a: Unsigned = a_digits.parse().unwrap();
    let b: Unsigned = b_digits.parse().unwrap();
    let ref_a: BigUint = a_digits.parse().unwrap();
    let ref_b: BigUint = b_digits.parse().unwrap();

    assert_eq!((&a + &b).to_string(), (&ref_a + &ref_b).to_string());
    assert_eq!((&a * &b).to_string(), (&ref_a * &ref_b).to_string());
    assert_eq!(a.cmp(&b), ref_a.cmp(&ref_b));

    let (big, small, ref_big, ref_small) = if a >= b {
        (&a, &b, &ref_a, &ref_b)
    } else {
        (&b, &a, &ref_b, &ref_a)
    };
    assert_eq!(
        (big - small).to_string(),
        (ref_big - ref_small).to_string()
    );

    if !b.is_zero() {
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(q.to_string(), (&ref_a / &ref_b).to_string());
        assert_eq!(r.to_string(), (&ref_a % &ref_b).to_string());
    }
});
