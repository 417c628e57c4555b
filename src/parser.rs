use std::path::Path;
use std::str::FromStr;

use nom::character::complete::{digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::{Finish, IResult, Parser};

use crate::error::Error;

/// Decimal integer with an optional leading `+` or `-`.
pub fn signed_base10<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s| {
        N::from_str(s)
    })
    .parse(input)
}

// Leading integer of the line after any indentation; whatever follows it is ignored. Lines with
// no leading digits, or whose value doesn't fit in `N`, give `None`.
pub fn entry<N>(line: &str) -> Option<N>
where
    N: FromStr,
{
    signed_base10::<N>(line.trim_start())
        .finish()
        .ok()
        .map(|(_rest, n)| n)
}

pub fn read_input<P>(path: P) -> Result<String, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());

    Ok(text)
}
