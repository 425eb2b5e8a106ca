// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Symbolic permission string in `ls -l` form, e.g. `drwxr-xr-x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FileMode(String);

impl FileMode {
    /// Renders raw `st_mode` bits (file type plus permission bits).
    pub fn from_bits(mode: u32) -> Self {
        let mut out = String::with_capacity(10);
        out.push(type_char(mode));

        out.push(if mode & 0o400 != 0 { 'r' } else { '-' });
        out.push(if mode & 0o200 != 0 { 'w' } else { '-' });
        out.push(exec_char(mode & 0o100 != 0, mode & S_ISUID != 0, 's'));

        out.push(if mode & 0o040 != 0 { 'r' } else { '-' });
        out.push(if mode & 0o020 != 0 { 'w' } else { '-' });
        out.push(exec_char(mode & 0o010 != 0, mode & S_ISGID != 0, 's'));

        out.push(if mode & 0o004 != 0 { 'r' } else { '-' });
        out.push(if mode & 0o002 != 0 { 'w' } else { '-' });
        out.push(exec_char(mode & 0o001 != 0, mode & S_ISVTX != 0, 't'));

        Self(out)
    }

    /// Wraps an already rendered mode string (used on platforms without unix mode bits).
    pub fn from_rendered(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFREG => '-',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        _ => '?',
    }
}

fn exec_char(exec: bool, special: bool, marker: char) -> char {
    match (exec, special) {
        (true, true) => marker,
        (false, true) => marker.to_ascii_uppercase(),
        (true, false) => 'x',
        (false, false) => '-',
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
