//! Composition of the formatting helpers into printable output. Every writer
//! takes the output sink as an argument, so tests render into a `Vec<u8>` and
//! concurrent callers never share a buffer.

use crate::common::meta::FileMetadata;
use crate::common::owner;
use crate::utils::format;
use std::io::{self, Write};

/// A timestamp for display: formatted when representable, the raw epoch
/// seconds otherwise.
fn time_or_raw(secs: i64) -> String {
    format::timestamp(secs).unwrap_or_else(|_| secs.to_string())
}

/// Writes the labeled multi-line summary for one entry.
pub fn metadata_block(out: &mut impl Write, meta: &FileMetadata) -> io::Result<()> {
    writeln!(out, "    mode: {}", format::mode_letters(meta.mode))?;
    writeln!(out, "   links: {}", meta.links)?;
    writeln!(out, "    user: {}", owner::user_display(meta.uid))?;
    writeln!(out, "   group: {}", owner::group_display(meta.gid))?;
    writeln!(out, "    size: {}", format::human_size(meta.size))?;
    writeln!(out, "accessed: {}", time_or_raw(meta.accessed))?;
    writeln!(out, "modified: {}", time_or_raw(meta.modified))?;
    writeln!(out, " changed: {}", time_or_raw(meta.changed))
}

/// Writes the single-line summary for one entry: mode, links, user, group,
/// size, then a tab, the modify time and the entry name.
pub fn metadata_line(out: &mut impl Write, name: &str, meta: &FileMetadata) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} {} {}\t{} {}",
        format::mode_letters(meta.mode),
        meta.links,
        owner::user_display(meta.uid),
        owner::group_display(meta.gid),
        format::human_size(meta.size),
        time_or_raw(meta.modified),
        name
    )
}

/// Writes `title` underlined by a rule of the same length, followed by a
/// blank line.
pub fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}\n", format::rule(title))
}

/// Writes the underlined entry name and its inode.
pub fn properties(out: &mut impl Write, name: &str, meta: &FileMetadata) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(out, "{}", format::rule(name))?;
    writeln!(out, " > inode: {}", meta.inode)?;
    writeln!(out)
}
