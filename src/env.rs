// ── Environment variables ─────────────────────────────────────────────────────

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Outcome of an environment-variable lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvVar {
    /// Not present in the environment.
    Unset,
    /// Present with an empty value.
    Empty,
    /// Present and valid Unicode.
    Value(String),
    /// Present, but the native value is not valid Unicode.
    Undecodable,
}

impl EnvVar {
    /// Classify a raw native value.
    pub fn from_native(raw: Option<OsString>) -> Self {
        match raw {
            None => Self::Unset,
            Some(raw) if raw.is_empty() => Self::Empty,
            Some(raw) => match native_to_utf8(&raw) {
                Some(value) => Self::Value(value),
                None => Self::Undecodable,
            },
        }
    }

    /// The value if it is present, non-empty and decodable.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse to a plain string: empty unless a decodable value is present.
    pub fn into_string(self) -> String {
        match self {
            Self::Value(v) => v,
            _ => String::new(),
        }
    }
}

// Windows keeps environment strings as UTF-16; go through the wide form so
// unpaired surrogates are reported rather than replaced.
#[cfg(windows)]
fn native_to_utf8(raw: &OsStr) -> Option<String> {
    use std::os::windows::ffi::OsStrExt;
    let wide: Vec<u16> = raw.encode_wide().collect();
    crate::encoding::wide_to_utf8(&wide).ok()
}

#[cfg(not(windows))]
fn native_to_utf8(raw: &OsStr) -> Option<String> {
    raw.to_str().map(str::to_owned)
}

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        // `var_os` panics on names containing '=' or NUL; such a variable can
        // never be set, so report it as absent.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name)
    }
}

/// A fixed environment, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.to_owned(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}
