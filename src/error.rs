use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Errors surfaced by the metadata helpers.
///
/// Nothing here is fatal: the calling tool decides whether to abort or skip
/// the entry and keep listing.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The metadata query itself failed (missing path, permission denied).
    #[error("cannot stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No user is mapped to this uid in the system identity directory.
    #[error("no user mapped to uid {0}")]
    UnknownUser(u32),

    /// No group is mapped to this gid in the system identity directory.
    #[error("no group mapped to gid {0}")]
    UnknownGroup(u32),

    /// The epoch value cannot be represented as a calendar date.
    #[error("timestamp {0} is outside the representable range")]
    TimeOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
