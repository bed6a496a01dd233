use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "deepform-cli",
    about = "Turn form-encoded input into nested JSON",
    version
)]
struct Args {
    /// Treat each input line as a raw `key=value` pair instead of decoding
    /// the whole input as a query string. Raw lines keep cast prefixes
    /// verbatim; in query strings they arrive percent-encoded (`%2Ba=2`).
    #[arg(short, long)]
    lines: bool,

    /// Drop fields whose value is the empty string
    #[arg(long, default_value_t = false)]
    omit_empty: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = deepform::Options {
        omit_empty_strings: args.omit_empty,
    };

    let pairs: Vec<(String, String)> = if args.lines {
        buf.lines()
            .filter(|line| !line.is_empty())
            .map(|line| match line.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (line.to_string(), String::new()),
            })
            .collect()
    } else {
        form_urlencoded::parse(buf.trim().as_bytes())
            .into_owned()
            .collect()
    };

    let value = deepform::parse(pairs, &options).into_json();
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
