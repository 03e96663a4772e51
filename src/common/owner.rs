//! Resolution of numeric owner/group ids to display names via the system
//! identity directory. An unmapped id is an explicit error, never a crash;
//! the `*_display` wrappers fall back to the decimal id.

use crate::error::{Error, Result};

/// Looks up the user name for `uid`.
#[cfg(unix)]
pub fn user_name(uid: u32) -> Result<String> {
    users::get_user_by_uid(uid)
        .map(|user| user.name().to_string_lossy().into_owned())
        .ok_or(Error::UnknownUser(uid))
}

/// Looks up the group name for `gid`.
#[cfg(unix)]
pub fn group_name(gid: u32) -> Result<String> {
    users::get_group_by_gid(gid)
        .map(|group| group.name().to_string_lossy().into_owned())
        .ok_or(Error::UnknownGroup(gid))
}

#[cfg(not(unix))]
pub fn user_name(uid: u32) -> Result<String> {
    Err(Error::UnknownUser(uid))
}

#[cfg(not(unix))]
pub fn group_name(gid: u32) -> Result<String> {
    Err(Error::UnknownGroup(gid))
}

/// The user name for `uid`, or the decimal id when no user is mapped.
pub fn user_display(uid: u32) -> String {
    user_name(uid).unwrap_or_else(|_| uid.to_string())
}

/// The group name for `gid`, or the decimal id when no group is mapped.
pub fn group_display(gid: u32) -> String {
    group_name(gid).unwrap_or_else(|_| gid.to_string())
}
