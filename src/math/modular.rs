//! Arithmetic modulo an integer: powers, inverses, factorials and binomials.
//!
//! Residues are `i64`. Moduli must be small enough for the product of two
//! residues to fit, i.e. below `2^31.5`.

use super::extgcd;
use crate::{Error, Result};

/// A source of `n! mod p`.
pub trait FactorialFactory {
    fn fact(&self, n: usize) -> i64;
}

/// Factorials precomputed up to `min(modulus, n)`.
#[derive(Clone, Debug)]
pub struct FactorialCache {
    modulus: i64,
    table: Vec<i64>,
}

impl FactorialCache {
    pub fn new(modulus: i64, n: usize) -> Self {
        let size = n.min(modulus as usize);
        let mut table = Vec::with_capacity(size);
        let mut f = 1;
        for i in 0..size {
            if i > 0 {
                f = f * i as i64 % modulus;
            }
            table.push(f);
        }
        FactorialCache { modulus, table }
    }
}

impl FactorialFactory for FactorialCache {
    /// Panics if `n` is past the table, unless `n!` is a multiple of the modulus anyway.
    fn fact(&self, n: usize) -> i64 {
        if let Some(&f) = self.table.get(n) {
            return f;
        }
        assert!(
            n as i64 >= self.modulus,
            "Index {n} is out of bounds of factorial table length {}",
            self.table.len()
        );
        0
    }
}

/// Computes every factorial from scratch in `O(n)`.
#[derive(Clone, Copy, Debug)]
pub struct LinearFactorial {
    modulus: i64,
}

impl LinearFactorial {
    pub fn new(modulus: i64) -> Self {
        LinearFactorial { modulus }
    }
}

impl FactorialFactory for LinearFactorial {
    fn fact(&self, n: usize) -> i64 {
        (2..=n as i64).fold(1 % self.modulus, |f, i| f * i % self.modulus)
    }
}

/// Binomial coefficients `iCj mod m` for `i < n`, from Pascal's triangle.
#[derive(Clone, Debug)]
pub struct CombinationCache {
    table: Vec<Vec<i64>>,
}

impl CombinationCache {
    pub fn new(modulus: i64, n: usize) -> Self {
        assert!(
            modulus > n as i64,
            "the modulus {modulus} must exceed the table size {n}"
        );
        let mut table: Vec<Vec<i64>> = Vec::with_capacity(n);
        for i in 0..n {
            // only j <= i / 2 is stored; the rest follows by symmetry
            let row: Vec<i64> = (0..=i / 2)
                .map(|j| match j {
                    0 => 1,
                    _ => {
                        let prev = &table[i - 1];
                        let get = |j: usize| prev[j.min(i - 1 - j)];
                        (get(j - 1) + get(j)) % modulus
                    }
                })
                .collect();
            table.push(row);
        }
        CombinationCache { table }
    }

    pub fn combination(&self, n: usize, k: usize) -> i64 {
        assert!(
            n < self.table.len(),
            "Index {n} is out of bounds of combination table length {}",
            self.table.len()
        );
        assert!(k <= n, "cannot choose {k} out of {n}");
        self.table[n][k.min(n - k)]
    }
}

/// The matrix product `a * b`, entrywise modulo `m`.
pub fn mat_mul(a: &[Vec<i64>], b: &[Vec<i64>], m: i64) -> Vec<Vec<i64>> {
    let inner = b.len();
    let width = b.first().map_or(0, Vec::len);
    a.iter()
        .map(|row| {
            assert_eq!(row.len(), inner, "cannot multiply matrices of mismatched shapes");
            (0..width)
                .map(|j| (0..inner).fold(0, |acc, k| (acc + row[k] * b[k][j] % m) % m))
                .collect::<Vec<i64>>()
        })
        .collect()
}

pub fn identity(n: usize) -> Vec<Vec<i64>> {
    (0..n)
        .map(|i| (0..n).map(|j| i64::from(i == j)).collect::<Vec<i64>>())
        .collect()
}

/// `x^n mod m` by repeated squaring.
pub fn pow(mut x: i64, mut n: u64, m: i64) -> i64 {
    let mut ret = 1;
    x %= m;
    while n > 0 {
        if n % 2 == 1 {
            ret = ret * x % m;
        }
        x = x * x % m;
        n /= 2;
    }
    ret
}

/// `x^n`, entrywise modulo `m`, for a square matrix `x`.
pub fn mat_pow(x: &[Vec<i64>], mut n: u64, m: i64) -> Vec<Vec<i64>> {
    let mut ret = identity(x.len());
    let mut x = x.to_vec();
    while n > 0 {
        if n % 2 == 1 {
            ret = mat_mul(&ret, &x, m);
        }
        x = mat_mul(&x, &x, m);
        n /= 2;
    }
    ret
}

/// The `x` in `0..m` with `a * x = 1 (mod m)`.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    let (d, x, _) = extgcd(a.rem_euclid(m), m);
    if d != 1 {
        return Err(Error::NoInverse { value: a, modulus: m });
    }
    Ok(x.rem_euclid(m))
}

/// `inv[i]` is the inverse of `i` modulo the prime `p`, for `1 <= i <= size < p`.
pub fn mod_inverse_table(size: usize, p: i64) -> Vec<i64> {
    assert!((size as i64) < p, "the table size {size} must stay below the prime {p}");
    let mut inv = vec![0; size + 1];
    if size >= 1 {
        inv[1] = 1;
    }
    for i in 2..=size {
        // p = (p / i) * i + p % i, so inv(i) = -(p / i) * inv(p % i)
        inv[i] = inv[(p % i as i64) as usize] * (p - p / i as i64) % p;
    }
    inv
}

/// Finds the `x` satisfying `a[i] * x = b[i] (mod mods[i])` for every `i`.
///
/// Returns `(x, m)`: the solutions are exactly `x + m * t`. Coefficients may be negative,
/// moduli must be positive.
pub fn solve_linear_congruence(a: &[i64], b: &[i64], mods: &[i64]) -> Result<(i64, i64)> {
    assert!(
        a.len() == b.len() && b.len() == mods.len(),
        "a congruence system needs as many coefficients as moduli"
    );
    let (mut x, mut m) = (0, 1);
    for ((&a, &b), &modulus) in a.iter().zip(b).zip(mods) {
        // substituting x + m * k: a * m * k = b - a * x (mod modulus)
        let a = a.rem_euclid(modulus);
        let rhs = (b - a * x).rem_euclid(modulus);
        let lhs = a * m % modulus;
        let d = super::gcd(lhs, modulus);
        if rhs % d != 0 {
            log::debug!("no solution to {a} * x = {b} (mod {modulus}) with x = {x} (mod {m})");
            return Err(Error::NoCongruenceSolution);
        }
        let step = modulus / d;
        let k = rhs / d % step * mod_inverse(lhs / d, step)? % step;
        x += m * k;
        m *= step;
    }
    Ok((x % m, m))
}

/// Writes `n!` as `a * p^e` with `a` coprime to the prime `p`, and returns `(a mod p, e)`.
///
/// `factory` must know the factorials below `p`. `O(log_p n)` calls to it.
pub fn mod_fact<F: FactorialFactory>(n: u64, p: i64, factory: &F) -> (i64, u64) {
    if n == 0 {
        return (1, 0);
    }
    let pu = p as u64;
    let (a, e) = mod_fact(n / pu, p, factory);
    let tail = factory.fact((n % pu) as usize);
    // (p - 1)! = -1 (mod p), once per full block of p
    let a = if (n / pu) % 2 == 1 {
        a * (p - tail) % p
    } else {
        a * tail % p
    };
    (a, e + n / pu)
}

/// `nCk mod p` for a prime `p`, `0` when `k` is out of `0..=n`.
pub fn mod_comb<F: FactorialFactory>(n: i64, k: i64, p: i64, factory: &F) -> i64 {
    if n < 0 || k < 0 || n < k {
        return 0;
    }
    let (a1, e1) = mod_fact(n as u64, p, factory);
    let (a2, e2) = mod_fact(k as u64, p, factory);
    let (a3, e3) = mod_fact((n - k) as u64, p, factory);
    if e1 > e2 + e3 {
        return 0;
    }
    // a2 and a3 are coprime to p, so Fermat's little theorem inverts them
    a1 * pow(a2 * a3 % p, (p - 2) as u64, p) % p
}

/// `nCk mod m` for any modulus, by cancelling the fraction before reducing.
/// `O(k log log k)` with `k = min(k, n - k)`.
pub fn mod_comb_composite(n: i64, k: i64, m: i64) -> i64 {
    let k = k.min(n - k);
    if k < 0 {
        return 0;
    }
    let k = k as usize;
    let mut numerator: Vec<i64> = (0..k).map(|i| n - k as i64 + i as i64 + 1).collect();
    let mut denominator: Vec<i64> = (1..=k as i64).collect();
    for i in 2..=k {
        let pivot = denominator[i - 1];
        if pivot == 1 {
            continue;
        }
        // numerator[j - offset] is a multiple of i whenever j + 1 is
        let offset = ((n - k as i64) % i as i64) as usize;
        for j in (i - 1..k).step_by(i) {
            numerator[j - offset] /= pivot;
            denominator[j] /= pivot;
        }
    }
    numerator.iter().fold(1 % m, |c, &x| c * (x % m) % m)
}
