use atx_shared::KnownCommand;
use clap::error::ErrorKind;
use clap::Parser;

/// Send a command token to the ATX power/reset switch controller.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = vocabulary_help())]
pub struct Args {
    /// Command token, forwarded to the controller unchanged (e.g. S1PS)
    #[arg(value_name = "COMMAND_STRING", allow_hyphen_values = true)]
    pub command: Option<String>,
}

/// Known commands, one per line, for `--help`
pub fn vocabulary_help() -> String {
    let mut help = String::from("Commands understood by the controller:\n");
    for command in KnownCommand::all() {
        help.push_str(&format!(
            "  {}  {} ({} ms)\n",
            command,
            command.describe(),
            command.action.press_ms()
        ));
    }
    help
}

/// Whether clap wants to print something and exit cleanly rather than fail
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// One-line reason for a rejected command line, suitable for the attempt log
pub fn rejection_reason(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
