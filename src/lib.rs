// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! Platform services for a game engine: monotonic timing, modal dialogs,
//! environment lookup, opening paths and URLs, microsecond sleeping and the
//! save-directory policy, behind one OS-neutral adapter (`SystemUtils`).

pub mod config;
pub mod dialog;
pub mod encoding;
pub mod env;
pub mod error;
pub mod platform;
pub mod shell;
pub mod system;
pub mod time;

pub use config::{PlatformConfig, SaveMode};
pub use dialog::{DialogResult, DialogType};
pub use env::EnvVar;
pub use error::{PlatformError, Result};
pub use system::{Services, SystemUtils};
pub use time::{TimeStamp, TimeUnit};
