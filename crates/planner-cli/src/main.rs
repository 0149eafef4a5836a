//! `patch-planner` binary

use planner_cli::{cli, commands, logging};

fn main() {
    let matches = cli::command().get_matches();
    logging::init(
        matches.get_count("verbose"),
        matches.get_one::<String>("log-format").map(String::as_str) == Some("json"),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = commands::run(&matches, &mut out) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
