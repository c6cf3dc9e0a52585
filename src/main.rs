use std::env;
use std::process;

use passgauge::{cli, exits, terminal, tui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    };

    if let Err(e) = result {
        terminal::reset_terminal();
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
