use std::convert::Infallible;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use singly_linked_list::collections::linked::SinglyLinkedList;
use singly_linked_list::menu::Menu;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// An interactive console menu for building and editing a singly linked list of integers.
#[derive(Parser)]
#[command(name = "list-menu")]
#[command(version)]
struct Cli {
    /// Values to fill the list with before the menu starts, e.g. `--values 1,2,3`.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Log filter used when RUST_LOG isn't set, e.g. `debug` or `singly_linked_list=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Logs go to stderr, keeping stdout for the menu itself.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    // Values that can't be allocated are skipped, leaving a usable, shorter list.
    let preload = cli.values.iter().copied().map(Ok::<_, Infallible>);
    let list = SinglyLinkedList::create_list(cli.values.len(), preload).unwrap_or_else(|stopped| {
        error!("{stopped}");
        stopped.into_list()
    });
    info!(len = list.len(), "starting menu");

    let stdin = io::stdin();
    let mut menu = Menu::with_list(stdin.lock(), io::stdout().lock(), list);
    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("menu stopped: {error}");
            ExitCode::FAILURE
        },
    }
}
