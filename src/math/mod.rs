//! Number theory, exact combinatorics, small dense linear algebra and numeric integration.
//!
//! Modular arithmetic lives in [`modular`].

pub mod linear_algebra;
pub mod modular;
mod primes;

pub use primes::*;

pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Least common multiple, `0` if either argument is `0`.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Solves `a * x + b * y = gcd(a, b)` for non-negative `a` and `b`.
///
/// Returns `(gcd(a, b), x, y)` with `|x| <= b` and `|y| <= a`.
pub fn extgcd(a: i64, b: i64) -> (i64, i64, i64) {
    assert!(a >= 0 && b >= 0, "extgcd({a}, {b}) needs non-negative arguments");
    if b == 0 {
        return (a, 1, 0);
    }
    let (d, x, y) = extgcd(b, a % b);
    (d, y, x - a / b * y)
}

/// Whether `i * i <= n`, for any `n` up to `u64::MAX`. `i` must be positive.
pub(crate) fn square_at_most(i: u64, n: u64) -> bool {
    i <= n / i
}

/// All the divisors of `n`, in no particular order.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut divisors = Vec::new();
    let mut i = 1;
    while square_at_most(i, n) {
        if n % i == 0 {
            divisors.push(i);
            if i != n / i {
                divisors.push(n / i);
            }
        }
        i += 1;
    }
    divisors
}

/// Exact `n choose k`, `0` when `k` is out of `0..=n`. `O(min(k, n - k))`.
///
/// The intermediate product must fit in an `i64`.
pub fn comb(n: i64, k: i64) -> i64 {
    let k = k.min(n - k);
    if k < 0 {
        return 0;
    }
    let mut ret = 1;
    for i in 0..k {
        ret = ret * (n - i) / (i + 1);
    }
    ret
}

/// Rearranges `data` into the next lexicographically greater permutation.
///
/// When `data` is already the greatest one, it is sorted back to the smallest
/// and `false` is returned. Repeated values are enumerated once, so this also
/// walks through combinations.
pub fn next_permutation<T: Ord>(data: &mut [T]) -> bool {
    for i in (0..data.len().saturating_sub(1)).rev() {
        if data[i] < data[i + 1] {
            // the suffix is non-increasing: find its last element above data[i]
            let mut swap_index = i + 1;
            while swap_index + 1 < data.len() && data[i] < data[swap_index + 1] {
                swap_index += 1;
            }
            data.swap(i, swap_index);
            data[i + 1..].reverse();
            return true;
        }
    }
    data.sort();
    false
}

/// Approximates the double integral of `f` over `[x1, x2] x [y1, y2]` with
/// Simpson's rule on a `m` by `n` grid. Both `n` and `m` must be even.
pub fn simpson2<F>(f: F, x1: f64, x2: f64, y1: f64, y2: f64, n: usize, m: usize) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    assert!(
        n > 0 && m > 0 && n % 2 == 0 && m % 2 == 0,
        "Simpson's rule needs a positive even grid, got {n}x{m}"
    );
    // weights are 1 4 2 4 ... 2 4 1 along each axis
    let weight = |i: usize, len: usize| -> f64 {
        if i == 0 || i == len {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        }
    };
    let mut ret = 0.0;
    for i in 0..=n {
        let y = y1 + (y2 - y1) * i as f64 / n as f64;
        for j in 0..=m {
            let x = x1 + (x2 - x1) * j as f64 / m as f64;
            ret += weight(i, n) * weight(j, m) * f(x, y);
        }
    }
    (x2 - x1) * (y2 - y1) / (9 * n * m) as f64 * ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcds() {
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(72657, 60021), 3159);
        assert_eq!(gcd(63537, 8379), 3);
        assert_eq!(gcd(698823, 76249354), 77647);
        assert_eq!(gcd(1095, 563), 1);
        assert_eq!(gcd(19683, 65536), 1);
        assert_eq!(gcd(0, 100), 100);
        assert_eq!(gcd(31, 0), 31);
        assert_eq!(gcd(0, 0), 0);

        assert_eq!(lcm(12, 15), 60);
        assert_eq!(lcm(2773, 826), 38822);
        assert_eq!(lcm(100, 0), 0);
    }

    #[test]
    fn extended_gcd() {
        for (a, b, expected) in [
            (6, 8, 2),
            (8937, 1929276, 9),
            (654, 55, 1),
            (627532, 18103, 1),
            (0, 5, 5),
            (3, 3, 3),
        ] {
            let (d, x, y) = extgcd(a, b);
            assert_eq!(d, expected);
            assert_eq!(a * x + b * y, d);
            assert!(a * b == 0 || (x.abs() <= b && y.abs() <= a));
        }
    }

    #[test]
    fn divisors_of() {
        let mut divs = divisors(132);
        divs.sort();
        assert_eq!(divs, vec![1, 2, 3, 4, 6, 11, 12, 22, 33, 44, 66, 132]);

        let mut divs = divisors(10080);
        divs.sort();
        assert_eq!(divs.len(), 72);
        assert_eq!(&divs[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&divs[68..], &[2520, 3360, 5040, 10080]);
        assert!(divs.iter().all(|d| 10080 % d == 0));

        let mut divs = divisors(121);
        divs.sort();
        assert_eq!(divs, vec![1, 11, 121]);
        let mut divs = divisors(107);
        divs.sort();
        assert_eq!(divs, vec![1, 107]);
    }

    #[test]
    fn square_bounds_near_the_top() {
        assert!(square_at_most(4_294_967_295, u64::MAX));
        assert!(!square_at_most(4_294_967_296, u64::MAX));
        assert!(square_at_most(1, 1));
        assert!(!square_at_most(1, 0));
        assert!(square_at_most(3, 9));
        assert!(!square_at_most(4, 15));
    }

    #[test]
    fn combinations() {
        assert_eq!(comb(100, 0), 1);
        assert_eq!(comb(100, 100), 1);
        assert_eq!(comb(100, 101), 0);
        assert_eq!(comb(100, -1), 0);
        assert_eq!(comb(3, 2), 3);
        assert_eq!(comb(6, 1), 6);
        assert_eq!(comb(7, 3), 35);
        assert_eq!(comb(15, 8), 6435);
        assert_eq!(comb(107, 98), 3585446225075);
        assert_eq!(comb(960, 5), 6724251264192);
        assert_eq!(comb(51, 25), 247959266474052);
        assert_eq!(comb(62, 21), 18412956934908690);
    }

    #[test]
    fn permutations() {
        let mut p: Vec<i32> = (0..10).collect();
        assert!(next_permutation(&mut p));
        assert_eq!(p, vec![0, 1, 2, 3, 4, 5, 6, 7, 9, 8]);
        for _ in 0..10 {
            next_permutation(&mut p);
        }
        assert_eq!(p, vec![0, 1, 2, 3, 4, 5, 7, 9, 8, 6]);
        for _ in 0..57 {
            next_permutation(&mut p);
        }
        assert_eq!(p, vec![0, 1, 2, 3, 4, 7, 9, 6, 5, 8]);

        let mut p: Vec<i32> = (0..4).collect();
        for _ in 0..23 {
            assert!(next_permutation(&mut p));
        }
        assert_eq!(p, vec![3, 2, 1, 0]);
        assert!(!next_permutation(&mut p));
        assert_eq!(p, vec![0, 1, 2, 3]);
    }

    #[test]
    fn permutations_of_repeated_values_enumerate_combinations() {
        let mut p = vec![0, 0, 0, 0, 1, 1, 1];
        assert!(next_permutation(&mut p));
        assert_eq!(p, vec![0, 0, 0, 1, 0, 1, 1]);
        assert!(next_permutation(&mut p));
        assert_eq!(p, vec![0, 0, 0, 1, 1, 0, 1]);
        assert!(next_permutation(&mut p));
        assert_eq!(p, vec![0, 0, 0, 1, 1, 1, 0]);
        assert!(next_permutation(&mut p));
        assert_eq!(p, vec![0, 0, 1, 0, 0, 1, 1]);
        for _ in 0..35 - 5 {
            assert!(next_permutation(&mut p));
        }
        assert_eq!(p, vec![1, 1, 1, 0, 0, 0, 0]);
        assert!(!next_permutation(&mut p));
    }

    #[test]
    fn empty_and_single_permutations() {
        let mut empty: Vec<u8> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut single = vec![7];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn simpson_is_exact_on_polynomials() {
        let integral = simpson2(|x, y| x * y, 0.0, 2.0, 1.0, 3.0, 4, 6);
        // (2^2 / 2) * ((9 - 1) / 2)
        assert!((integral - 8.0).abs() < 1e-9);
        let integral = simpson2(|x, y| x * x + y * y * y, -1.0, 1.0, 0.0, 2.0, 2, 2);
        // 2/3 * 2 + 2 * 4
        assert!((integral - (4.0 / 3.0 + 8.0)).abs() < 1e-9);
    }
}
