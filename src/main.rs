mod border;
mod cowfile;
mod cowpath;
mod cowsay;
mod error;
mod escape;
mod utils;
mod width;

use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use concat_string::concat_string;
use log::debug;

use crate::cowpath::CowPath;

/// Invoked under this name, the default border is `think`.
const THINK_NAME: &str = "tewithink";

/// Put text in a bubble and have a figure say it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which border to use (try list, preview)
    #[arg(short, long, value_name = "NAME")]
    border: Option<String>,

    /// Change eyes
    #[arg(short, long, default_value = "oo")]
    eyes: String,

    /// Change tongue
    #[arg(short, long, default_value = "  ")]
    tongue: String,

    /// List cowfiles
    #[arg(short, long)]
    list: bool,

    /// Cowfile name or path
    #[arg(short, long, value_name = "COWFILE", default_value = "tes")]
    file: String,

    /// Text to say, read from standard input when absent
    text: Vec<String>,
}

fn main() {
    pretty_env_logger::init();

    let prog = program_name();
    let cows = CowPath::from_env();
    if let Err(err) = run(&prog, Args::parse(), &cows, io::stdin().lock())
        .and_then(|out| write_out(&mut io::stdout().lock(), &out))
    {
        eprintln!("{prog}: {err:#}");
        process::exit(1);
    }
}

/// Everything the program prints for `args`.
///
/// `input` is only read when no text arguments are given, after the style
/// and cowfile have been resolved.
fn run(prog: &str, args: Args, cows: &CowPath, input: impl Read) -> Result<String> {
    debug!("cowfile search path: {:?}", cows.dirs());

    if args.list {
        return Ok(concat_string!(cows.list()?.join(" "), "\n"));
    }

    let default = if prog == THINK_NAME {
        border::THINK
    } else {
        border::DEFAULT
    };
    let name = args.border.as_deref().unwrap_or(default);
    match name {
        "list" => {
            let names: Vec<_> = border::names().collect();
            return Ok(concat_string!(names.join(" "), "\n"));
        }
        "preview" => return Ok(border::all().iter().map(cowsay::preview).collect()),
        _ => {}
    }

    let style = border::lookup(name)?;
    debug!("border style: {}", style.name);

    let cow = cows.read(&args.file)?;

    let lines = if args.text.is_empty() {
        utils::read_text(input).context("reading standard input")?
    } else {
        utils::split_args(&args.text)
    };
    debug!("saying {} line(s)", lines.len());

    let mut out = cowsay::gen_bubble(style, &lines);
    out.push_str(&cowfile::fill(&cow, &args.eyes, &args.tongue, style.pointer));
    Ok(out)
}

fn write_out(w: &mut impl Write, s: &str) -> Result<()> {
    w.write_all(s.as_bytes())
        .and_then(|()| w.flush())
        .context("writing standard output")
}

/// Basename of argv[0].
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
