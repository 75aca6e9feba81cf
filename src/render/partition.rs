use std::ops::Range;

/// Splits `0..len` into `parts` contiguous ranges whose sizes differ by at
/// most one, the earliest ranges taking the remainder.
pub fn split_evenly(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return vec![];
    }
    let base = len / parts;
    let remainder = len % parts;
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            let range = start..start + size;
            start = range.end;
            range
        })
        .collect()
}
