use clap::Parser;
use rollover::cli::commands::Cli;
use rollover::cli::handlers;

fn main() {
    // RUST_LOG overrides the default level; logs go to stderr
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| eprintln!("warning: could not start logger: {}", e))
        .ok();

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
