//! Locale-aware ordering for collected paths
//!
//! Comparison follows the process `LC_COLLATE` category via `strcoll`,
//! which degenerates to plain byte order under the "C" locale. Ties
//! between distinct byte strings are broken by raw bytes, keeping the
//! order total in locales that collate distinct names as equal.

use std::path::PathBuf;

#[cfg(unix)]
use std::cmp::Ordering;
#[cfg(unix)]
use std::ffi::{CStr, CString};
#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;
#[cfg(unix)]
use std::path::Path;

/// Adopt the collation category from the process environment, as
/// `setlocale(LC_COLLATE, "")` does.
///
/// Call once at startup. A no-op on platforms without POSIX locales.
#[cfg(unix)]
pub fn init_locale() {
    // SAFETY: runs before any other thread exists; the empty string
    // asks libc to read the locale from the environment.
    unsafe {
        libc::setlocale(libc::LC_COLLATE, c"".as_ptr());
    }
}

#[cfg(not(unix))]
pub fn init_locale() {}

/// Sort paths into the locale's collation order.
///
/// Sequences shorter than two elements are left untouched. Sorting the
/// same sequence twice yields the identical order.
pub fn sort_paths(paths: &mut Vec<PathBuf>) {
    if paths.len() < 2 {
        return;
    }
    sort_impl(paths);
}

#[cfg(unix)]
fn sort_impl(paths: &mut Vec<PathBuf>) {
    // One NUL-terminated key per path up front; strcoll then runs once
    // per comparison instead of once per conversion.
    let mut keyed: Vec<(CString, PathBuf)> = std::mem::take(paths)
        .into_iter()
        .map(|path| (collation_key(&path), path))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        strcoll_cmp(a, b).then_with(|| a.as_bytes().cmp(b.as_bytes()))
    });
    *paths = keyed.into_iter().map(|(_, path)| path).collect();
}

#[cfg(not(unix))]
fn sort_impl(paths: &mut Vec<PathBuf>) {
    paths.sort_by(|a, b| {
        a.as_os_str()
            .as_encoded_bytes()
            .cmp(b.as_os_str().as_encoded_bytes())
    });
}

/// Build the NUL-terminated key `strcoll` compares.
#[cfg(unix)]
fn collation_key(path: &Path) -> CString {
    // Paths handed back by the kernel never contain NUL; if one shows
    // up anyway, the key is truncated at it rather than rejected.
    let bytes = path.as_os_str().as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default()
}

#[cfg(unix)]
fn strcoll_cmp(a: &CStr, b: &CStr) -> Ordering {
    // SAFETY: both arguments are valid NUL-terminated strings.
    let order = unsafe { libc::strcoll(a.as_ptr(), b.as_ptr()) };
    order.cmp(&0)
}
