use std::cmp::Reverse;

use itertools::{process_results, Itertools};

use crate::error::Error;
use crate::groups::Group;

/// Largest group sum. Fails on the first group which doesn't sum cleanly.
pub fn max_group_sum(groups: &[Group]) -> Result<i64, Error> {
    process_results(groups.iter().map(Group::sum), |sums| sums.max())?.ok_or(Error::NoGroups)
}

/// Total of the `n` largest group sums. Equal sums from different groups each count.
pub fn top_n_sum(groups: &[Group], n: usize) -> Result<i64, Error> {
    if groups.len() < n {
        return Err(Error::TooFewGroups {
            wanted: n,
            found: groups.len(),
        });
    }

    let top = process_results(groups.iter().map(Group::sum), |sums| {
        sums.map(Reverse).k_smallest(n).map(|Reverse(s)| s).collect_vec()
    })?;
    log::debug!("largest {} group sums: {:?}", n, top);

    top.into_iter()
        .try_fold(0i64, i64::checked_add)
        .ok_or(Error::TotalOverflow)
}
