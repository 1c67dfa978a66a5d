mod cli;
mod creation;
mod errors;
mod renderer;
mod scanner;
mod size;
mod timestamp;
mod types;

use cli::{ArgsError, parse_args};
use creation::PlatformCreationTime;
use renderer::RenderOptions;
use std::io::{self, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(ArgsError::UnknownFlag(flag)) => {
            println!("unknown flag {flag}");
            std::process::exit(1);
        }
        Err(ArgsError::Clap(e)) => e.exit(),
    };

    // Reserved flag: accepted, nothing reads it yet
    log::debug!("verbose={}", args.verbose);

    let outcomes = match scanner::read_entries(&args.path, &PlatformCreationTime::default()) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.strict
        && let Some(entry) = outcomes.iter().find_map(|o| o.as_ref().err())
    {
        eprintln!("Error: {}", entry.error);
        std::process::exit(1);
    }

    for entry in outcomes.iter().filter_map(|o| o.as_ref().err()) {
        log::warn!("Marking unreadable entry: {}", entry.error);
    }

    let opts = RenderOptions {
        use_created: args.created,
        color: !args.no_color,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = renderer::render(&mut out, &outcomes, &opts).and_then(|()| out.flush());
    if let Err(e) = written {
        // Closed pipe (e.g. `| head`) is not worth a diagnostic
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error: Failed to write listing: {e}");
            std::process::exit(1);
        }
    }
}
