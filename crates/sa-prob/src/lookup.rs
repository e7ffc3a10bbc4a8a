//! First-match index lookup of one integer sequence in another.

/// For each element of `x`, the 1-based position of its first occurrence in
/// `table`, or the sentinel `0` when it does not occur.
///
/// Positions are 1-based precisely so `0` is unambiguous as "not found";
/// the original left unmatched entries uninitialized, which this pins down.
pub fn match_first(x: &[i64], table: &[i64]) -> Vec<usize> {
    x.iter()
        .map(|&xi| table.iter().position(|&t| t == xi).map_or(0, |j| j + 1))
        .collect()
}
