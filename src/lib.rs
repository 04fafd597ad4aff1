mod disjoint_sets;

pub use disjoint_sets::{DisjointSets, DisjointSetsError, Result};

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[cfg(test)]
fn bench_disjoint_sets_dstruct() {
    use rand::prelude::*;

    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 20;

    let pairs: Vec<(usize, usize)> = (0..2 * N)
        .map(|_| (rng.gen_range(0..N), rng.gen_range(0..N)))
        .collect();
    let mut queries: Vec<usize> = (0..N).collect();
    queries.shuffle(&mut rng);

    let mut ds = DisjointSets::new(N);
    let mut merged = 0;
    bench("DisjointSets::merge", 2, || {
        for &(x, y) in pairs.iter() {
            if ds.merge(x, y).is_ok() {
                merged += 1;
            }
        }
    });
    assert_eq!(ds.get_k(), N - merged);

    let mut checksum = 0;
    bench("DisjointSets::find", 2, || {
        for &i in queries.iter() {
            if let Ok(root) = ds.find(i) {
                assert!(root <= i);
                checksum ^= root;
            }
        }
    });
    bench("DisjointSets::find(compressed)", 1, || {
        for &i in queries.iter() {
            if let Ok(root) = ds.find(i) {
                checksum ^= root;
            }
        }
    });
    println!();

    // Every root was xor-ed in twice.
    assert_eq!(checksum, 0);
    assert_eq!(ds.roots().count(), ds.get_k());
}

#[test]
#[ignore]
pub fn main() {
    bench_disjoint_sets_dstruct();
}
