//! Pure formatting helpers: permission letters, humanized sizes, timestamps
//! and rule drawing. No state, no buffers shared between calls.

use crate::common::meta::{S_IFBLK, S_IFCHR, S_IFDIR, S_IFMT};
use crate::error::{Error, Result};
use chrono::{Local, LocalResult, TimeZone};

/// Renders `mode` as the classic ten-character `ls -l` column.
///
/// Position 0 is the entry type (`d` directory, `c` character device, `b`
/// block device, `-` anything else); positions 1-9 are the `rwxrwxrwx` bits
/// for owner/group/other. Any input is accepted.
pub fn mode_letters(mode: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'), // owner
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'), // group
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'), // others
    ];

    let type_letter = match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        _ => '-',
    };

    std::iter::once(type_letter)
        .chain(BITS.iter().map(|&(bit, c)| if mode & bit != 0 { c } else { '-' }))
        .collect()
}

/// Formats epoch seconds as local-time `YYYY-MM-DD HH:MM`.
///
/// Seconds are dropped by design. Values that cannot be represented as a
/// calendar date return an error instead of a garbage string.
pub fn timestamp(epoch_secs: i64) -> Result<String> {
    match Local.timestamp_opt(epoch_secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            Ok(dt.format("%Y-%m-%d %H:%M").to_string())
        }
        LocalResult::None => Err(Error::TimeOutOfRange(epoch_secs)),
    }
}

/// Humanizes a byte count: below 1024 the bare decimal count, otherwise
/// whole kilobytes with truncating division. Deliberately two-tier; there
/// are no MB/GB steps.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes}")
    } else {
        format!("{} KB", bytes / 1024)
    }
}

/// A run of dashes matching the character count of `text`, used to underline
/// headers. Counts characters, not rendered width.
pub fn rule(text: &str) -> String {
    "-".repeat(text.chars().count())
}

// Unit tests for the formatting helpers
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::meta::{S_IFLNK, S_IFREG, S_IFSOCK};

    #[test]
    fn test_mode_letters_empty() {
        assert_eq!(mode_letters(0), "----------");
    }

    #[test]
    fn test_mode_letters_directory() {
        assert_eq!(mode_letters(S_IFDIR | 0o755), "drwxr-xr-x");
    }

    #[test]
    fn test_mode_letters_regular_file() {
        assert_eq!(mode_letters(S_IFREG | 0o644), "-rw-r--r--");
    }

    #[test]
    fn test_mode_letters_devices() {
        assert_eq!(mode_letters(S_IFCHR | 0o620), "crw--w----");
        assert_eq!(mode_letters(S_IFBLK | 0o660), "brw-rw----");
    }

    #[test]
    fn test_mode_letters_collapses_other_types() {
        // Symlinks and sockets share the '-' column with regular files.
        assert_eq!(mode_letters(S_IFLNK | 0o777).chars().next(), Some('-'));
        assert_eq!(mode_letters(S_IFSOCK | 0o755).chars().next(), Some('-'));
    }

    #[test]
    fn test_mode_letters_length() {
        for mode in [0, 0o777, S_IFDIR, S_IFLNK | 0o777, S_IFSOCK, u32::MAX] {
            assert_eq!(mode_letters(mode).chars().count(), 10);
        }
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0");
        assert_eq!(human_size(500), "500");
        assert_eq!(human_size(1023), "1023");
        assert_eq!(human_size(1024), "1 KB");
        // Truncation, not rounding.
        assert_eq!(human_size(2047), "1 KB");
        assert_eq!(human_size(2048), "2 KB");
        assert_eq!(human_size(10 * 1024 * 1024), "10240 KB");
    }

    #[test]
    fn test_timestamp_epoch() {
        let rendered = timestamp(0).unwrap();
        assert_eq!(rendered.len(), 16);
        assert!(chrono::NaiveDateTime::parse_from_str(&rendered, "%Y-%m-%d %H:%M").is_ok());
    }

    #[test]
    fn test_timestamp_round_trips_to_the_minute() {
        use chrono::{NaiveDateTime, Timelike};

        let secs = 1_700_000_000;
        let rendered = timestamp(secs).unwrap();
        let parsed = NaiveDateTime::parse_from_str(&rendered, "%Y-%m-%d %H:%M").unwrap();
        let expected = Local
            .timestamp_opt(secs, 0)
            .unwrap()
            .naive_local()
            .with_second(0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(matches!(timestamp(i64::MAX), Err(Error::TimeOutOfRange(_))));
        assert!(matches!(timestamp(i64::MIN), Err(Error::TimeOutOfRange(_))));
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule("abc"), "---");
        assert_eq!(rule(""), "");
        // Multi-byte characters count once each.
        assert_eq!(rule("héllo"), "-----");
    }
}
