//! Primality, factorization and the functions built on them.

use std::collections::BTreeMap;

use super::square_at_most;

/// The sieve of Eratosthenes over `0..=n`.
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    is_prime: Vec<bool>,
    primes: Vec<u64>,
}

impl PrimeSieve {
    pub fn new(n: usize) -> Self {
        let mut is_prime = vec![true; n + 1];
        is_prime[0] = false;
        if n >= 1 {
            is_prime[1] = false;
        }
        let mut primes = Vec::new();
        for i in 2..=n {
            if !is_prime[i] {
                continue;
            }
            primes.push(i as u64);
            if i * i <= n {
                for j in (i * i..=n).step_by(i) {
                    is_prime[j] = false;
                }
            }
        }
        PrimeSieve { is_prime, primes }
    }

    /// The largest number covered by the table.
    pub fn limit(&self) -> usize {
        self.is_prime.len() - 1
    }

    pub fn is_prime(&self, i: usize) -> bool {
        self.is_prime[i]
    }

    /// All primes up to the limit, in increasing order.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }
}

/// `result[i]` is true iff `a + i` is prime, for `a + i` in `a..b`.
pub fn segment_sieve(a: u64, b: u64) -> Vec<bool> {
    assert!(2 <= a && a < b, "segment {a}..{b} must be non-empty and start at 2 or later");
    let sieve = PrimeSieve::new(integer_sqrt(b) as usize);
    let mut is_prime = vec![true; (b - a) as usize];
    for &p in sieve.primes() {
        let mut j = ((a + p - 1) / p).max(2) * p;
        while j < b {
            is_prime[(j - a) as usize] = false;
            j += p;
        }
    }
    is_prime
}

fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Trial division. `O(sqrt(n))`.
pub fn is_prime(n: u64) -> bool {
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    while square_at_most(i, n) {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    n > 1
}

/// Trial division by the primes of `sieve`, whose limit squared must reach `n`.
pub fn is_prime_with_primes(n: u64, sieve: &PrimeSieve) -> bool {
    assert_sieve_covers(n, sieve);
    for &p in sieve.primes() {
        if !square_at_most(p, n) {
            break;
        }
        if n % p == 0 {
            return false;
        }
    }
    n > 1
}

fn assert_sieve_covers(n: u64, sieve: &PrimeSieve) {
    let limit = sieve.limit() as u64;
    assert!(
        limit.saturating_mul(limit) >= n,
        "a sieve up to {limit} cannot decide numbers as large as {n}"
    );
}

/// Maps each prime factor of `n` to its multiplicity.
pub fn prime_factors(n: u64) -> BTreeMap<u64, u32> {
    factorize((2..).take_while(|&i| square_at_most(i, n)), n)
}

/// [`prime_factors`], dividing only by the primes of `sieve`.
pub fn prime_factors_with_primes(n: u64, sieve: &PrimeSieve) -> BTreeMap<u64, u32> {
    assert_sieve_covers(n, sieve);
    factorize(sieve.primes().iter().copied(), n)
}

fn factorize(candidates: impl Iterator<Item = u64>, mut n: u64) -> BTreeMap<u64, u32> {
    let mut factors = BTreeMap::new();
    for p in candidates {
        if !square_at_most(p, n) {
            break;
        }
        let mut count = 0;
        while n % p == 0 {
            n /= p;
            count += 1;
        }
        if count > 0 {
            factors.insert(p, count);
        }
    }
    if n > 1 {
        factors.insert(n, 1);
    }
    factors
}

/// The distinct prime factors of `n`, in increasing order.
pub fn distinct_prime_factors(n: u64) -> Vec<u64> {
    prime_factors(n).into_keys().collect()
}

/// The Möbius function on the squarefree divisors of `n`.
/// The other divisors, where it is `0`, are left out.
pub fn moebius_map(n: u64) -> BTreeMap<u64, i32> {
    let factors = distinct_prime_factors(n);
    let mut moebius = BTreeMap::new();
    for subset in 0..1usize << factors.len() {
        let mut mu = 1;
        let mut d = 1;
        for (j, &p) in factors.iter().enumerate() {
            if subset >> j & 1 != 0 {
                mu = -mu;
                d *= p;
            }
        }
        moebius.insert(d, mu);
    }
    moebius
}

/// The number of integers in `1..=n` coprime with `n`.
pub fn euler_phi(n: u64) -> u64 {
    distinct_prime_factors(n)
        .into_iter()
        .fold(n, |phi, p| phi / p * (p - 1))
}

/// [`euler_phi`] of every number in `0..n`.
pub fn euler_phi_table(n: usize) -> Vec<u64> {
    let mut phi: Vec<u64> = (0..n as u64).collect();
    for i in 2..n {
        if phi[i] == i as u64 {
            for j in (i..n).step_by(i) {
                phi[j] = phi[j] / i as u64 * (i as u64 - 1);
            }
        }
    }
    phi
}
