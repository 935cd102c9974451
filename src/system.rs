// ── Platform services adapter ─────────────────────────────────────────────────
//
// `SystemUtils` is the single object the rest of the application talks to.
// It owns the calibrated clock and the configuration; every OS facility is
// reached through an injected collaborator so the adapter itself stays free
// of `unsafe` and of target-specific code.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{PlatformConfig, SaveMode};
use crate::dialog::{self, DialogPresenter, DialogResult, DialogType};
use crate::env::{EnvSource, EnvVar, ProcessEnv};
use crate::error::Result;
use crate::platform::native;
use crate::shell::{run_opener, ProcessLauncher, ShellLauncher};
use crate::time::{Clock, CounterFrequency, CounterSource, TimeStamp, TimeUnit};

/// The OS-facing collaborators of a `SystemUtils`.
pub struct Services {
    pub counter: Box<dyn CounterSource>,
    pub dialogs: Box<dyn DialogPresenter>,
    pub env: Box<dyn EnvSource>,
    pub launcher: Arc<dyn ShellLauncher>,
}

impl Services {
    /// The backend compiled in for this target.
    pub fn native() -> Self {
        let launcher: Arc<dyn ShellLauncher> = Arc::new(ProcessLauncher);
        Self {
            counter: native::counter(),
            dialogs: native::dialog_presenter(Arc::clone(&launcher)),
            env: Box::new(ProcessEnv),
            launcher,
        }
    }
}

pub struct SystemUtils {
    config: PlatformConfig,
    clock: Clock,
    dialogs: Box<dyn DialogPresenter>,
    env: Box<dyn EnvSource>,
    launcher: Arc<dyn ShellLauncher>,
}

impl SystemUtils {
    /// Build the adapter on the native backend.
    ///
    /// Fails if the monotonic counter reports a zero frequency.
    pub fn initialize(config: PlatformConfig) -> Result<Self> {
        Self::with_services(config, Services::native())
    }

    /// Build the adapter on explicitly supplied collaborators.
    pub fn with_services(config: PlatformConfig, services: Services) -> Result<Self> {
        let clock = Clock::calibrate(services.counter)?;
        Ok(Self {
            config,
            clock,
            dialogs: services.dialogs,
            env: services.env,
            launcher: services.launcher,
        })
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn counter_frequency(&self) -> CounterFrequency {
        self.clock.frequency()
    }

    // ── Dialogs ───────────────────────────────────────────────────────────────

    /// Show a modal dialog and block until the user dismisses it.
    ///
    /// The result is always one the dialog's buttons can produce.
    pub fn show_dialog(&self, kind: DialogType, title: &str, message: &str) -> DialogResult {
        dialog::show_dialog(self.dialogs.as_ref(), kind, title, message)
    }

    // ── Timing ────────────────────────────────────────────────────────────────

    pub fn current_time_stamp(&self) -> TimeStamp {
        self.clock.now()
    }

    pub fn interpolate_time_stamp(&self, a: TimeStamp, b: TimeStamp, fraction: f64) -> TimeStamp {
        Clock::interpolate(a, b, fraction)
    }

    /// Nanoseconds between two stamps; negative if `after` precedes `before`.
    pub fn time_stamp_exact_diff(&self, before: TimeStamp, after: TimeStamp) -> i64 {
        self.clock.exact_diff(before, after)
    }

    pub fn time_stamp_diff(&self, before: TimeStamp, after: TimeStamp, unit: TimeUnit) -> f64 {
        self.clock.diff(before, after, unit)
    }

    /// Block the calling thread for about `usec` microseconds.
    pub fn usleep(&self, usec: u64) -> Result<()> {
        native::sleep_micros(usec)
    }

    // ── Environment ───────────────────────────────────────────────────────────

    pub fn lookup_env_var(&self, name: &str) -> EnvVar {
        let var = EnvVar::from_native(self.env.var(name));
        match &var {
            EnvVar::Value(value) => log::trace!("Detected environment variable {name} = {value}"),
            EnvVar::Undecodable => log::trace!("Environment variable {name} is not valid Unicode"),
            EnvVar::Unset | EnvVar::Empty => {}
        }
        var
    }

    /// The variable's value, or an empty string if it is unset, empty, or
    /// not valid Unicode.
    pub fn get_env_var(&self, name: &str) -> String {
        self.lookup_env_var(name).into_string()
    }

    // ── Save directory ────────────────────────────────────────────────────────

    /// Directory for persisted user data.
    pub fn get_save_dir(&self) -> PathBuf {
        if self.config.save_mode == SaveMode::Portable {
            return self.config.default_save_dir.clone();
        }

        let dir = match native::profile_save_dir(self.env.as_ref(), &self.config.app_dir_name) {
            Some(dir) => dir,
            None => {
                log::warn!("Unable to find directory for saves - using default directory");
                self.config.default_save_dir.clone()
            }
        };
        log::trace!("Saved game files are going to {}", dir.display());
        dir
    }

    // ── Shell ─────────────────────────────────────────────────────────────────

    /// Open `path` in the system file manager.  `false` if the helper could
    /// not be run or exited non-zero.
    pub fn open_path(&self, path: &str) -> bool {
        let command = native::open_path_command(path);
        run_opener(self.launcher.as_ref(), &command, "open path", path)
    }

    /// Open `url` in the default browser.  `false` if the helper could not be
    /// run or exited non-zero.
    pub fn open_website(&self, url: &str) -> bool {
        let command = native::open_website_command(url);
        run_opener(self.launcher.as_ref(), &command, "open website", url)
    }
}

impl std::fmt::Debug for SystemUtils {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemUtils")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
