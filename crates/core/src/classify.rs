use serde::{Deserialize, Serialize};

/// Mathematical properties of a single integer
///
/// `properties` is ordered: the optional `"armstrong"` tag always precedes
/// the parity tag, and exactly one parity tag is always present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
}

/// Check whether a number is prime using trial division.
///
/// Divisors are scanned over `[2, isqrt(n)]`. The bound is expressed as
/// `i <= n / i` instead of a floating-point square root, so perfect squares
/// like 49 cannot slip through on a rounding error and `i * i` can never
/// overflow.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Check whether a number equals the sum of its proper divisors.
///
/// Divisors are collected in pairs `(i, n / i)` up to the integer square
/// root, counting a divisor only once when `i == n / i` (e.g. 6 for 36).
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut sum = 1;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i;
            let pair = n / i;
            if pair != i {
                sum += pair;
            }
        }
        i += 1;
    }

    sum == n
}

/// Check whether a number is an Armstrong (narcissistic) number.
///
/// A number with d digits is Armstrong when it equals the sum of its digits
/// each raised to the d-th power: 371 = 3^3 + 7^3 + 1^3. Zero counts as a
/// one-digit number, and 0^1 == 0, so `is_armstrong(0)` is true. Negative
/// numbers are excluded by the parameter type; callers decide how to
/// normalize signed input before asking.
///
/// The power sum accumulates in `u128`: nineteen 9^19 terms exceed
/// `u64::MAX`, the digits of `u64::MAX` itself included.
pub fn is_armstrong(n: u64) -> bool {
    let digits = count_digits(n);

    let mut sum: u128 = 0;
    let mut m = n;
    loop {
        sum += u128::from(m % 10).pow(digits);
        m /= 10;
        if m == 0 {
            break;
        }
    }

    sum == u128::from(n)
}

/// Sum of the decimal digits of `abs(n)`. Returns 0 for n = 0.
pub fn digit_sum(n: i64) -> u32 {
    let mut m = n.unsigned_abs();
    let mut sum = 0;
    while m > 0 {
        sum += (m % 10) as u32;
        m /= 10;
    }
    sum
}

/// Parity tag for any integer; sign does not affect parity.
pub fn parity(n: i64) -> &'static str {
    if n % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

/// Decimal digit count by repeated division; 0 is a one-digit number.
fn count_digits(n: u64) -> u32 {
    let mut digits = 1;
    let mut m = n / 10;
    while m > 0 {
        digits += 1;
        m /= 10;
    }
    digits
}

/// Classify a number, assembling all of its properties into one value.
///
/// Negative numbers never carry the `"armstrong"` tag; parity and digit sum
/// are computed on the absolute value where sign is irrelevant.
pub fn classify(n: i64) -> Classification {
    let mut properties = Vec::with_capacity(2);
    if n >= 0 && is_armstrong(n as u64) {
        properties.push("armstrong".to_string());
    }
    properties.push(parity(n).to_string());

    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties,
        digit_sum: digit_sum(n),
    }
}
