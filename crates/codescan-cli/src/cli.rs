//! Command-line arguments.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

/// Scan a source tree with a graph-RAG engine and store the findings in Neo4j
#[derive(Parser, Debug)]
#[command(name = "aigraphcodescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse the process arguments, ignoring any the scanner does not know.
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args_os())
    }

    /// Parse `args`, dropping unknown arguments one by one until the rest
    /// parses. Help, version and other errors behave as usual.
    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        loop {
            match Self::try_parse_from(args.iter().cloned()) {
                Ok(cli) => return cli,
                Err(err) => match unknown_position(&err, &args) {
                    Some(pos) => {
                        args.remove(pos);
                    }
                    None => err.exit(),
                },
            }
        }
    }
}

/// Index in `args` of the argument clap rejected as unknown.
fn unknown_position(err: &clap::Error, args: &[OsString]) -> Option<usize> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    let ContextValue::String(bad) = err.get(ContextKind::InvalidArg)? else {
        return None;
    };
    let with_value = format!("{}=", bad);
    // clap names only the first letter of a short bundle like `-xy`.
    let is_short = bad.len() == 2 && bad.starts_with('-') && !bad.starts_with("--");

    let matches = |arg: &str| {
        arg == bad.as_str()
            || arg.starts_with(&with_value)
            || (is_short && !arg.starts_with("--") && arg.starts_with(bad.as_str()))
    };

    let rest = || args.iter().enumerate().skip(1).map(|(i, a)| (i, a.to_string_lossy()));
    rest()
        .find(|(_, arg)| matches(&**arg))
        .or_else(|| rest().find(|(_, arg)| arg.starts_with(bad.as_str())))
        .map(|(i, _)| i)
}
