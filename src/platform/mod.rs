// ── Platform abstraction layer ────────────────────────────────────────────────
//
// Exactly one backend is compiled in and re-exported as `native`.  Every
// backend exposes the same free functions:
//
//   counter()                 -> Box<dyn CounterSource>
//   dialog_presenter(shell)   -> Box<dyn DialogPresenter>
//   sleep_micros(usec)        -> Result<()>
//   open_path_command(path)   -> LaunchCommand
//   open_website_command(url) -> LaunchCommand
//   profile_save_dir(env, app)-> Option<PathBuf>
//
// No `unsafe` lives here; all Win32 FFI is confined to the `win32` sub-module
// and never leaks outward.

#[cfg(windows)]
pub mod win32;
#[cfg(windows)]
pub use win32 as native;

#[cfg(not(windows))]
pub mod generic;
#[cfg(not(windows))]
pub use generic as native;
