// ── Generic (non-Windows) platform implementation ─────────────────────────────
//
// Safe Rust only.  Timing uses `Instant`, dialogs go through `zenity`, paths
// and URLs through the desktop's opener command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dialog::{DialogIcon, DialogPresenter, DialogRequest, DialogResult, DialogType};
use crate::env::{EnvSource, EnvVar};
use crate::error::Result;
use crate::shell::{LaunchCommand, ShellLauncher};
use crate::time::CounterSource;

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Nanoseconds elapsed since the counter was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicCounter {
    origin: Instant,
}

impl MonotonicCounter {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for MonotonicCounter {
    fn frequency(&self) -> Result<u64> {
        Ok(1_000_000_000)
    }

    fn read(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(i64::MAX)
    }
}

pub fn counter() -> Box<dyn CounterSource> {
    Box::new(MonotonicCounter::new())
}

// ── Dialogs ───────────────────────────────────────────────────────────────────

/// Presents dialogs with `zenity`.  Exit code 0 is the affirmative button,
/// anything else the negative one.
pub struct ZenityPresenter {
    launcher: Arc<dyn ShellLauncher>,
}

impl ZenityPresenter {
    pub fn new(launcher: Arc<dyn ShellLauncher>) -> Self {
        Self { launcher }
    }
}

/// Freedesktop icon-theme name for a dialog icon.
fn icon_name(icon: DialogIcon) -> &'static str {
    match icon {
        DialogIcon::Information => "dialog-information",
        DialogIcon::Warning => "dialog-warning",
        DialogIcon::Error => "dialog-error",
        DialogIcon::Question => "dialog-question",
    }
}

fn zenity_command(request: &DialogRequest<'_>) -> LaunchCommand {
    let cmd = LaunchCommand::new("zenity");
    let cmd = match request.kind {
        DialogType::Info => cmd.arg("--info"),
        DialogType::Warning => cmd.arg("--warning"),
        DialogType::Error => cmd.arg("--error"),
        // `--question` defaults to a question icon; set it from the type so
        // OK/Cancel keeps its warning icon.
        DialogType::YesNo => cmd
            .arg("--question")
            .arg(format!("--icon-name={}", icon_name(request.kind.icon())))
            .arg("--ok-label=Yes")
            .arg("--cancel-label=No"),
        DialogType::OkCancel => cmd
            .arg("--question")
            .arg(format!("--icon-name={}", icon_name(request.kind.icon())))
            .arg("--ok-label=OK")
            .arg("--cancel-label=Cancel"),
    };
    cmd.arg(format!("--text={}", request.message))
        .arg(format!("--title={}", request.title))
}

impl DialogPresenter for ZenityPresenter {
    fn present(&self, request: &DialogRequest<'_>) -> Option<DialogResult> {
        let buttons = request.kind.buttons();
        match self.launcher.launch(&zenity_command(request)) {
            Ok(status) if status.success() => Some(buttons.affirmative()),
            Ok(_) => Some(buttons.negative()),
            Err(e) => {
                log::warn!(
                    "cannot show dialog ({e}); {:?} \"{}\": {}",
                    request.kind,
                    request.title,
                    request.message
                );
                None
            }
        }
    }
}

pub fn dialog_presenter(launcher: Arc<dyn ShellLauncher>) -> Box<dyn DialogPresenter> {
    Box::new(ZenityPresenter::new(launcher))
}

// ── Sleep ─────────────────────────────────────────────────────────────────────

pub fn sleep_micros(usec: u64) -> Result<()> {
    std::thread::sleep(Duration::from_micros(usec));
    Ok(())
}

// ── Opening paths and URLs ────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

pub fn open_path_command(path: &str) -> LaunchCommand {
    LaunchCommand::new(OPENER).arg(path)
}

pub fn open_website_command(url: &str) -> LaunchCommand {
    LaunchCommand::new(OPENER).arg(url)
}

// ── Save directory ────────────────────────────────────────────────────────────

/// `$XDG_DATA_HOME/<app>`, else `$HOME/.local/share/<app>`.
pub fn profile_save_dir(env: &dyn EnvSource, app_dir_name: &str) -> Option<PathBuf> {
    if let Some(data_home) = EnvVar::from_native(env.var("XDG_DATA_HOME")).value() {
        return Some(PathBuf::from(data_home).join(app_dir_name));
    }
    let home = EnvVar::from_native(env.var("HOME")).into_string();
    if home.is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".local/share").join(app_dir_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::env::MapEnv;
    use crate::shell::tests::RecordingLauncher;
    use crate::shell::LaunchStatus;

    fn request(kind: DialogType) -> DialogRequest<'static> {
        DialogRequest {
            kind,
            title: "Colobot",
            message: "Quit?",
        }
    }

    #[test]
    fn counter_is_nanosecond_based_and_monotonic() {
        let counter = MonotonicCounter::new();
        assert_eq!(counter.frequency().expect("frequency"), 1_000_000_000);
        let a = counter.read();
        sleep_micros(1_000).expect("sleep");
        assert!(counter.read() - a >= 1_000_000);
    }

    #[test]
    fn zenity_arguments_per_type() {
        let cmd = zenity_command(&request(DialogType::YesNo));
        assert_eq!(cmd.program, "zenity");
        assert_eq!(
            cmd.args,
            [
                "--question",
                "--icon-name=dialog-question",
                "--ok-label=Yes",
                "--cancel-label=No",
                "--text=Quit?",
                "--title=Colobot"
            ]
        );
        assert_eq!(zenity_command(&request(DialogType::Error)).args[0], "--error");
        assert_eq!(zenity_command(&request(DialogType::OkCancel)).args[3], "--cancel-label=Cancel");
    }

    #[test]
    fn ok_cancel_question_shows_warning_icon() {
        let cmd = zenity_command(&request(DialogType::OkCancel));
        assert_eq!(cmd.args[..2], ["--question", "--icon-name=dialog-warning"]);
        assert_eq!(icon_name(DialogType::OkCancel.icon()), "dialog-warning");
    }

    #[test]
    fn zenity_exit_code_selects_button() {
        let yes = ZenityPresenter::new(Arc::new(RecordingLauncher::exiting(0)));
        let no = ZenityPresenter::new(Arc::new(RecordingLauncher::exiting(1)));
        assert_eq!(yes.present(&request(DialogType::YesNo)), Some(DialogResult::Yes));
        assert_eq!(no.present(&request(DialogType::YesNo)), Some(DialogResult::No));
        assert_eq!(no.present(&request(DialogType::OkCancel)), Some(DialogResult::Cancel));
        assert_eq!(no.present(&request(DialogType::Info)), Some(DialogResult::Ok));
    }

    #[test]
    fn missing_zenity_gives_no_answer() {
        let launcher = RecordingLauncher::with_outcome(Err(std::io::ErrorKind::NotFound));
        let presenter = ZenityPresenter::new(Arc::new(launcher));
        assert_eq!(presenter.present(&request(DialogType::Warning)), None);
    }

    #[test]
    fn terminated_zenity_is_negative() {
        let launcher = RecordingLauncher::with_outcome(Ok(LaunchStatus::Terminated));
        let presenter = ZenityPresenter::new(Arc::new(launcher));
        assert_eq!(presenter.present(&request(DialogType::YesNo)), Some(DialogResult::No));
    }

    #[test]
    fn opener_commands_pass_target_verbatim() {
        assert_eq!(open_path_command("/tmp/a b").args, ["/tmp/a b"]);
        assert_eq!(open_website_command("https://colobot.info").args, ["https://colobot.info"]);
        assert_eq!(open_path_command("x").program, OPENER);
    }

    #[test]
    fn profile_dir_prefers_xdg_data_home() {
        let env = MapEnv::new()
            .with("XDG_DATA_HOME", "/data")
            .with("HOME", "/home/ada");
        assert_eq!(profile_save_dir(&env, "colobot"), Some(PathBuf::from("/data/colobot")));
    }

    #[test]
    fn profile_dir_falls_back_to_home() {
        let env = MapEnv::new().with("XDG_DATA_HOME", "").with("HOME", "/home/ada");
        assert_eq!(
            profile_save_dir(&env, "colobot"),
            Some(PathBuf::from("/home/ada/.local/share/colobot"))
        );
        assert_eq!(profile_save_dir(&MapEnv::new(), "colobot"), None);
    }
}
