use rand::Rng;

/// Fisher–Yates shuffle driven by a caller-supplied random source.
///
/// Every permutation is equally likely given a uniform `Rng`. Taking
/// the source as a parameter keeps topic selection deterministic in
/// tests under a seeded `StdRng`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
