//! The `FileMetadata` record: a point-in-time snapshot of one filesystem
//! entry, captured immediately before formatting and discarded afterwards.
//!
//! Path-level predicates each perform one fresh metadata query. Callers that
//! need several properties of the same path should capture a `FileMetadata`
//! once and use its methods instead, which cost no further syscalls.

use crate::error::{Error, Result};
use std::fs::{self, Metadata};
use std::path::Path;

// POSIX st_mode type field, tested as (mode & S_IFMT) == S_IFxxx.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;

/// Attributes of one filesystem entry at a point in time.
///
/// A plain value: immutable once captured, never cached, no resource
/// ownership. Timestamps are integer seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub mode: u32,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub accessed: i64,
    pub modified: i64,
    pub changed: i64,
    pub inode: u64,
}

impl FileMetadata {
    /// Captures the metadata of `path`, following symbolic links.
    pub fn from_path(path: &Path) -> Result<Self> {
        let md = fs::metadata(path).map_err(|source| Error::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_std(&md))
    }

    /// Captures the metadata of `path` itself, without following a final
    /// symbolic link.
    pub fn from_symlink(path: &Path) -> Result<Self> {
        let md = fs::symlink_metadata(path).map_err(|source| Error::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_std(&md))
    }

    #[cfg(unix)]
    fn from_std(md: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        FileMetadata {
            mode: md.mode(),
            links: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.size(),
            accessed: md.atime(),
            modified: md.mtime(),
            changed: md.ctime(),
            inode: md.ino(),
        }
    }

    #[cfg(not(unix))]
    fn from_std(md: &Metadata) -> Self {
        // Synthesize the POSIX-only fields from what the platform exposes.
        fn secs(t: std::io::Result<std::time::SystemTime>) -> i64 {
            t.ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0)
        }

        let type_bits = if md.is_dir() {
            S_IFDIR
        } else if md.file_type().is_symlink() {
            S_IFLNK
        } else {
            S_IFREG
        };
        let perm = if md.permissions().readonly() { 0o555 } else { 0o755 };

        FileMetadata {
            mode: type_bits | perm,
            links: 1,
            uid: 0,
            gid: 0,
            size: md.len(),
            accessed: secs(md.accessed()),
            modified: secs(md.modified()),
            changed: secs(md.modified()),
            inode: 0,
        }
    }

    #[inline]
    fn type_bits(&self) -> u32 {
        self.mode & S_IFMT
    }

    pub fn is_dir(&self) -> bool {
        self.type_bits() == S_IFDIR
    }

    pub fn is_regular(&self) -> bool {
        self.type_bits() == S_IFREG
    }

    pub fn is_symlink(&self) -> bool {
        self.type_bits() == S_IFLNK
    }

    pub fn is_socket(&self) -> bool {
        self.type_bits() == S_IFSOCK
    }

    pub fn is_char_device(&self) -> bool {
        self.type_bits() == S_IFCHR
    }

    pub fn is_block_device(&self) -> bool {
        self.type_bits() == S_IFBLK
    }
}

/// True when `path` resolves to a directory. Stats the path on every call.
pub fn is_directory(path: &Path) -> bool {
    FileMetadata::from_path(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// True when `path` resolves to a regular file. Stats the path on every call.
pub fn is_regular_file(path: &Path) -> bool {
    FileMetadata::from_path(path).map(|m| m.is_regular()).unwrap_or(false)
}

/// True when `path` itself is a symbolic link. Queries the link, not its
/// target, since following the link can never observe the link type.
pub fn is_symbolic_link(path: &Path) -> bool {
    FileMetadata::from_symlink(path).map(|m| m.is_symlink()).unwrap_or(false)
}

/// True when `path` resolves to a socket. Stats the path on every call.
pub fn is_socket(path: &Path) -> bool {
    FileMetadata::from_path(path).map(|m| m.is_socket()).unwrap_or(false)
}

/// Existence check; a failed query counts as absent.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// True for the two self-referential directory entries.
pub fn is_dot_or_dotdot(name: &str) -> bool {
    name == "." || name == ".."
}

/// Fresh metadata query returning only the size in bytes.
pub fn size_in_bytes(path: &Path) -> Result<u64> {
    FileMetadata::from_path(path).map(|m| m.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dot_names() {
        assert!(is_dot_or_dotdot("."));
        assert!(is_dot_or_dotdot(".."));
        assert!(!is_dot_or_dotdot("a"));
        assert!(!is_dot_or_dotdot("..."));
        assert!(!is_dot_or_dotdot(".hidden"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = FileMetadata::from_path(Path::new("no/such/entry")).unwrap_err();
        assert!(matches!(err, Error::Stat { .. }));
        assert!(err.to_string().contains("no/such/entry"));
    }

    #[test]
    fn directory_predicates() {
        let dir = tempdir().unwrap();
        assert!(is_directory(dir.path()));
        assert!(!is_regular_file(dir.path()));
        assert!(path_exists(dir.path()));
        assert!(!path_exists(&dir.path().join("absent")));
        assert!(!is_directory(Path::new("no/such/entry")));
    }

    #[test]
    fn size_query() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f");
        fs::write(&path, "hello").unwrap();
        assert_eq!(size_in_bytes(&path).unwrap(), 5);
        assert!(size_in_bytes(&dir.path().join("absent")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn captures_a_regular_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 500]).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let md = FileMetadata::from_path(&path).unwrap();
        assert!(md.is_regular());
        assert!(!md.is_dir());
        assert_eq!(md.size, 500);
        assert_eq!(md.mode & 0o777, 0o644);
        assert!(md.links >= 1);
    }

    #[test]
    #[cfg(unix)]
    fn symlink_predicates() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(is_symbolic_link(&link));
        // The other predicates follow the link to its target.
        assert!(is_regular_file(&link));
        assert!(!is_symbolic_link(&target));
        assert!(FileMetadata::from_symlink(&link).unwrap().is_symlink());
        assert!(FileMetadata::from_path(&link).unwrap().is_regular());
    }
}
