use crate::error::Error;
use crate::parser::entry;

/// A run of lines delimited by a blank line, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Group<'p> {
    index: usize,
    text: &'p str,
}

impl<'p> Group<'p> {
    pub fn new(index: usize, text: &'p str) -> Group<'p> {
        Group { index, text }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'p str {
        self.text
    }

    /// Parsed values of the non-blank lines, in order.
    pub fn entries(&self) -> impl Iterator<Item = Result<i64, Error>> + 'p {
        let group = self.index;

        self.text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(move |(i, line)| {
                entry::<i64>(line).ok_or_else(|| Error::MalformedLine {
                    group,
                    line: i + 1,
                    text: line.to_owned(),
                })
            })
    }

    pub fn sum(&self) -> Result<i64, Error> {
        let sum = self.entries().try_fold(0i64, |acc, n| {
            acc.checked_add(n?).ok_or(Error::GroupOverflow { group: self.index })
        })?;
        log::debug!("group {} sums to {}", self.index, sum);

        Ok(sum)
    }
}

/// Splits on blank lines, i.e. two consecutive line terminators (`\n` or `\r\n`).
///
/// Always yields at least one group. A run of three terminators leaves the third at the start of
/// the next group, where it is just a blank line. Four or more produce empty groups in between.
pub fn split_groups(text: &str) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut rest = text;

    while let Some((start, end)) = find_delimiter(rest) {
        groups.push(Group::new(groups.len(), &rest[..start]));
        rest = &rest[end..];
    }
    groups.push(Group::new(groups.len(), rest));

    log::debug!("split input into {} groups", groups.len());
    groups
}

// Byte range of the first blank-line delimiter in `s`.
fn find_delimiter(s: &str) -> Option<(usize, usize)> {
    s.match_indices('\n').find_map(|(i, _)| {
        let after = &s[i + 1..];
        let len = if after.starts_with('\n') {
            1
        } else if after.starts_with("\r\n") {
            2
        } else {
            return None;
        };

        let start = if s[..i].ends_with('\r') { i - 1 } else { i };
        Some((start, i + 1 + len))
    })
}
