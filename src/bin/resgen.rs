use resgen::cli::run_cli;
use resgen::logging::init_logging;

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("warning: {err:#}");
    }
    if let Err(err) = run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
