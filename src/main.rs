// Probe binary: exercises every adapter operation on the host and reports
// what it finds.  `RUST_LOG=trace` shows the adapter's own log lines.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use sysbridge::dialog::{self, DialogPresenter};
use sysbridge::platform::native;
use sysbridge::shell::ProcessLauncher;
use sysbridge::{DialogType, PlatformConfig, SystemUtils, TimeUnit};

/// Report what the platform services adapter sees on this machine.
#[derive(Debug, Parser)]
#[command(name = "sysbridge-probe", version, about)]
struct Args {
    /// JSON platform config; build-mode defaults when omitted.
    config: Option<PathBuf>,

    /// Open the resolved save directory in the file manager.
    #[arg(long)]
    open_saves: bool,

    /// Ask a yes/no question in a modal dialog.
    #[arg(long)]
    dialog: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        // Startup failed; the dialog is the only output a GUI user will see.
        // It goes straight to the presenter: the failure may be the clock.
        let presenter = native::dialog_presenter(Arc::new(ProcessLauncher));
        report_fatal(presenter.as_ref(), &e);
        std::process::exit(1);
    }
}

fn report_fatal(presenter: &dyn DialogPresenter, error: &sysbridge::PlatformError) {
    dialog::show_dialog(
        presenter,
        DialogType::Error,
        "sysbridge — Fatal Error",
        &error.to_string(),
    );
}

fn run(args: &Args) -> sysbridge::Result<()> {
    let config = match &args.config {
        Some(path) => PlatformConfig::load(path)?,
        None => PlatformConfig::default(),
    };
    let sys = SystemUtils::initialize(config)?;

    println!("counter frequency : {} ticks/s", sys.counter_frequency().get());

    let before = sys.current_time_stamp();
    sys.usleep(1_000)?;
    let after = sys.current_time_stamp();
    println!(
        "usleep(1000)      : {} ns ({:.3} ms)",
        sys.time_stamp_exact_diff(before, after),
        sys.time_stamp_diff(before, after, TimeUnit::Milliseconds)
    );

    let save_dir = sys.get_save_dir();
    println!("save directory    : {}", save_dir.display());

    for name in ["USERPROFILE", "HOME", "XDG_DATA_HOME"] {
        println!("{name:<18}: {:?}", sys.lookup_env_var(name));
    }

    if args.open_saves {
        let opened = sys.open_path(&save_dir.to_string_lossy());
        println!("open saves        : {opened}");
    }

    if args.dialog {
        let answer = sys.show_dialog(DialogType::YesNo, "sysbridge", "Did this dialog appear?");
        println!("dialog answer     : {answer:?}");
    }

    Ok(())
}
