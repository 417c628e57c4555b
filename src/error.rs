use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `group` is the zero-based group index, `line` is one-based within that group.
    #[error("group {group}, line {line}: not an integer: {text:?}")]
    MalformedLine {
        group: usize,
        line: usize,
        text: String,
    },

    #[error("group {group}: sum does not fit in 64 bits")]
    GroupOverflow { group: usize },

    #[error("total of the largest groups does not fit in 64 bits")]
    TotalOverflow,

    #[error("no groups found")]
    NoGroups,

    #[error("wanted the {wanted} largest groups but only found {found}")]
    TooFewGroups { wanted: usize, found: usize },
}
