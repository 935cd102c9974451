use crate::shell::LaunchCommand;

/// `cmd /C start "" explorer "<path>"`, with forward slashes made native.
///
/// `start` returns as soon as explorer is spawned, so the exit code reflects
/// the launch and not explorer's own (unreliable) status.
pub fn open_path_command(path: &str) -> LaunchCommand {
    LaunchCommand::new("cmd")
        .arg("/C")
        .arg("start")
        .arg("")
        .arg("explorer")
        .arg(path.replace('/', "\\"))
}

/// `rundll32 url.dll,FileProtocolHandler "<url>"`.
pub fn open_website_command(url: &str) -> LaunchCommand {
    LaunchCommand::new("rundll32")
        .arg("url.dll,FileProtocolHandler")
        .arg(url)
}
