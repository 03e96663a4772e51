//! The listing driver: one directory level per requested path, one metadata
//! query per entry, rendering delegated to `workers::render`.

use crate::app::Args;
use crate::common::meta::{self, FileMetadata};
use crate::workers::render;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Runs the listing over every requested path.
///
/// A path that cannot be queried at all aborts the run; failures on entries
/// inside a directory are reported on stderr and the listing continues.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    for path in &args.paths {
        let metadata = FileMetadata::from_path(path)?;

        if metadata.is_dir() {
            list_directory(&mut stdout, path, args)?;
        } else {
            let name = path.display().to_string();
            render_entry(&mut stdout, &name, &metadata, args)?;
        }
    }

    Ok(())
}

/// Lists one level of `dir`, skipping dot entries and, unless `--all` is
/// given, hidden names.
fn list_directory(out: &mut impl Write, dir: &Path, args: &Args) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| anyhow::anyhow!("cannot read '{}': {e}", dir.display()))? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("statline: {}: {e}", dir.display());
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if meta::is_dot_or_dotdot(&name) || (!args.all && name.starts_with('.')) {
            continue;
        }

        // One query per entry; every predicate and column below reads the
        // same record.
        match FileMetadata::from_path(&entry.path()) {
            Ok(metadata) => render_entry(out, &name, &metadata, args)?,
            Err(e) => eprintln!("statline: {e}"),
        }
    }

    Ok(())
}

fn render_entry(
    out: &mut impl Write,
    name: &str,
    metadata: &FileMetadata,
    args: &Args,
) -> io::Result<()> {
    if args.block {
        render::header(out, name)?;
        render::metadata_block(out, metadata)?;
        writeln!(out)
    } else if args.inode {
        render::properties(out, name, metadata)
    } else {
        render::metadata_line(out, &styled_name(name, metadata), metadata)
    }
}

fn styled_name(name: &str, metadata: &FileMetadata) -> String {
    if metadata.is_dir() {
        name.blue().bold().to_string()
    } else {
        name.to_string()
    }
}
