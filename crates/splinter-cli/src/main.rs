mod cli;
mod commands;

use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

use cli::{AstParams, CheckParams, InfoParams, PatternsParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        init_tracing(m);
    }

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into());
        }
        Some(("patterns", m)) => {
            let params = PatternsParams::from_matches(m);
            commands::patterns::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr: warn by default, `-v` debug, `-vv` trace.
/// `RUST_LOG` overrides the flag.
fn init_tracing(m: &ArgMatches) {
    let level = match m.get_count("verbose") {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
