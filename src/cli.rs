use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    version,
    about = "List a directory with sizes and timestamps",
    long_about = None,
    after_help = "Timestamps look like `02 Jan 06 15:04 UTC`. Local zones other than UTC \
                  print as a numeric offset, e.g. `02 Jan 06 15:04 +0100`."
)]
pub struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Reserved; currently has no effect on output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Show creation time instead of modification time
    #[arg(long, short = 'c')]
    pub created: bool,

    /// Abort on the first entry that cannot be read instead of marking it
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug)]
pub enum ArgsError {
    /// A dash-prefixed argument that is not one of ours, exactly as typed.
    UnknownFlag(String),
    /// Anything else clap rejects, including `--help` and `--version`.
    Clap(clap::Error),
}

/// Whether `arg` is a spelling we accept: `--long`, `-s`, or a cluster of known shorts.
fn is_known_flag(arg: &str) -> bool {
    let cmd = Args::command();
    let mut longs: Vec<&str> = cmd.get_arguments().filter_map(|a| a.get_long()).collect();
    let mut shorts: Vec<char> = cmd.get_arguments().filter_map(|a| a.get_short()).collect();
    longs.extend(["help", "version"]);
    shorts.extend(['h', 'V']);

    if let Some(long) = arg.strip_prefix("--") {
        long.is_empty() || longs.contains(&long)
    } else if let Some(cluster) = arg.strip_prefix('-') {
        !cluster.is_empty() && cluster.chars().all(|c| shorts.contains(&c))
    } else {
        true
    }
}

/// First dash-prefixed argument (before any `--`) that we do not accept, as typed.
fn first_unknown_flag(args: &[OsString]) -> Option<String> {
    args.iter()
        .skip(1)
        .map(|a| a.to_string_lossy())
        .take_while(|a| a != "--")
        .find(|a| a.starts_with('-') && !is_known_flag(a))
        .map(std::borrow::Cow::into_owned)
}

pub fn parse_args<I, T>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if let Some(flag) = first_unknown_flag(&args) {
        return Err(ArgsError::UnknownFlag(flag));
    }

    Args::try_parse_from(&args).map_err(ArgsError::Clap)
}
