/// Index pairs `(i, len - 1 - i)` walking inwards from both ends, plus the
/// unpaired middle index when `len` is odd.
#[must_use]
pub fn mirrored_pairs(len: usize) -> (Vec<(usize, usize)>, Option<usize>) {
    let pairs = (0..len / 2).map(|i| (i, len - 1 - i)).collect();
    let middle = (len % 2 == 1).then_some(len / 2);
    (pairs, middle)
}

/// Inside/outside state of the `index`-th piece when states alternate at
/// every crossing, starting from `seed`.
#[must_use]
pub fn parity_at(seed: bool, index: usize) -> bool {
    seed ^ (index % 2 == 1)
}
