//! Low-level copy primitives
//!
//! - Regular files are copied with their permission bits and timestamps
//! - Preserved symlinks are re-created pointing at the original target

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Windows `ERROR_PRIVILEGE_NOT_HELD`, raised when creating a symlink without rights
pub const ERROR_PRIVILEGE_NOT_HELD: i32 = 1314;

/// Copy `source` to `dest`, keeping permissions and access/modification times
///
/// An existing symlink at `dest` is replaced instead of written through.
pub fn copy_with_metadata(source: &Path, dest: &Path) -> io::Result<()> {
    remove_if_symlink(dest)?;
    fs::copy(source, dest)?;

    let meta = fs::metadata(source)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dest, atime, mtime)
}

/// Re-create the symlink `source` at `dest`, pointing at the same target
pub fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let target = fs::read_link(source)?;
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest)?;
    }
    create_symlink(&target, dest)
}

/// Whether both paths are symlinks to the same target
pub fn same_symlink(source: &Path, dest: &Path) -> bool {
    match (fs::read_link(source), fs::read_link(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether `path` itself is a symlink (dangling ones included)
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

/// Whether a copy failure comes from missing symlink privileges on Windows
pub fn is_symlink_privilege_error(err: &io::Error) -> bool {
    cfg!(windows) && err.raw_os_error() == Some(ERROR_PRIVILEGE_NOT_HELD)
}

fn remove_if_symlink(path: &Path) -> io::Result<()> {
    if is_symlink(path) {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
