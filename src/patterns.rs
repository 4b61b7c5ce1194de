//! Provides a set of input patterns useful for testing and benchmarking the sorts.
//! Currently limited to i32 values.
//!
//! All random patterns derive from one seed per process, see [`random_init_seed`]. Setting the
//! `OVERRIDE_SEED` environment variable replays a previous run.

use std::cmp::Reverse;
use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seed();
    let dist = ZipfDistribution::new(len, exponent).expect("Zipf exponent must be positive");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, equal_chunks(len, saw_count), |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, equal_chunks(len, saw_count), |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let chunk_lens = equal_chunks(len, saw_count);
    let directions = random_uniform(chunk_lens.len(), 0..=1);

    saws(len, chunk_lens, |i| directions[i] == 0)
}

pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Chunk lengths are picked from `range`, the last chunk is cut short at `len`.
    let max_chunks = len / range.start.max(1) + 1;
    let directions = random_uniform(max_chunks, 0..=1);
    let chunk_lens = random_uniform(max_chunks, (range.start as i32)..(range.end as i32))
        .into_iter()
        .map(|chunk_len| chunk_len as usize)
        .collect();

    saws(len, chunk_lens, |i| directions[i] == 0)
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| Reverse(e));

    vals
}

/// Input that drives middle-pivot quicksort into its quadratic worst-case.
///
/// Built with M. D. McIlroy's "A Killer Adversary for Quicksort": values are assigned lazily while
/// [`crate::quicksort`] runs. Unassigned elements compare greater than every assigned one, and
/// whenever two unassigned elements meet, the one not suspected to be the pivot keeps floating.
/// The pivot therefore ends up as the smallest value of nearly every partition step. The result
/// does not depend on the seed.
pub fn quicksort_killer(len: usize) -> Vec<i32> {
    let gas = len as i32;
    let mut vals = vec![gas; len];
    let mut next_solid = 0;
    let mut candidate = 0;

    let mut indices = (0..len).collect::<Vec<usize>>();
    crate::quicksort::sort_by(&mut indices, |&a, &b| {
        if vals[a] == gas && vals[b] == gas {
            if a == candidate {
                vals[a] = next_solid;
            } else {
                vals[b] = next_solid;
            }
            next_solid += 1;
        }

        if vals[a] == gas {
            candidate = a;
        } else if vals[b] == gas {
            candidate = b;
        }

        vals[a].cmp(&vals[b])
    });

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes each call to a random derived pattern yield new values, instead of re-using the per
/// process seed. Advised for benchmarks.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 {
            env::var("OVERRIDE_SEED")
                .ok()
                .and_then(|seed| u64::from_str(&seed).ok())
                .unwrap_or_else(|| thread_rng().gen())
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

/// `saw_count` chunks of equal length, plus a shorter remainder chunk.
fn equal_chunks(len: usize, saw_count: usize) -> Vec<usize> {
    let chunk_len = (len / saw_count.max(1)).max(1);

    (0..len)
        .step_by(chunk_len)
        .map(|chunk_start| chunk_len.min(len - chunk_start))
        .collect()
}

/// Random values split into consecutive chunks of `chunk_lens`, chunk `i` sorted ascending if
/// `ascending(i)` and descending otherwise. Chunks past `len` are ignored.
fn saws(
    len: usize,
    chunk_lens: Vec<usize>,
    mut ascending: impl FnMut(usize) -> bool,
) -> Vec<i32> {
    let mut vals = random_vec(len);

    let mut chunk_start = 0;
    for (i, chunk_len) in chunk_lens.into_iter().enumerate() {
        if chunk_start >= len {
            break;
        }

        let chunk = &mut vals[chunk_start..(chunk_start + chunk_len).min(len)];
        if ascending(i) {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| Reverse(e));
        }

        chunk_start += chunk_len;
    }

    vals
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
