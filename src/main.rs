// src/main.rs
//
// htmlminify — command-line front end for the minifier library.
//
// CLI flags:
//   --advanced                  : ADVANCED whitespace trimming
//   --keep-comments             : do not strip comments
//   --keep-duplicate-attributes : do not drop repeated attributes
//   --space-before-slash        : write `<br />` instead of `<br/>`
//   --exclude-comment <REGEX>   : keep comments matching REGEX (repeatable)
//   --option KEY=VALUE          : raw option overlay, unknown keys ignored (repeatable)
// Output overwrites the input unless OUTPUT is given; `-` means stdin/stdout.
// Logging goes to stderr, filtered by RUST_LOG (default: warn).

use clap::{ArgAction, Parser};
use htmlminify::{minify, OptimizationLevel, Options, SlashSpacing};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Trim whitespace next to block-level tags too
    #[arg(long, action = ArgAction::SetTrue)]
    advanced: bool,

    /// Keep ordinary comments
    #[arg(long = "keep-comments", action = ArgAction::SetTrue)]
    keep_comments: bool,

    /// Keep repeated attributes on a tag
    #[arg(long = "keep-duplicate-attributes", action = ArgAction::SetTrue)]
    keep_duplicate_attributes: bool,

    /// Write a space before the slash of self-closing tags
    #[arg(long = "space-before-slash", action = ArgAction::SetTrue)]
    space_before_slash: bool,

    /// Keep comments matching this regular expression
    #[arg(long = "exclude-comment", value_name = "REGEX")]
    exclude_comment: Vec<String>,

    /// Raw option as KEY=VALUE, e.g. optimizationLevel=ADVANCED
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    option: Vec<(String, String)>,

    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Output file (default: overwrite input), or `-` for stdout
    output: Option<PathBuf>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = resolve_options(&cli).map_err(invalid_input)?;

    let src = read_input(&cli.input)?;
    let out = minify(&src, options).map_err(invalid_input)?;
    tracing::info!(before = src.len(), after = out.len(), "minified");

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    write_output(out_path, out.as_bytes())
}

/// Flags first, then the raw `--option` overlay in the order given.
fn resolve_options(cli: &Cli) -> htmlminify::Result<Options> {
    let mut options = Options::new()
        .comment(!cli.keep_comments)
        .delete_duplicate_attribute(!cli.keep_duplicate_attributes);
    if cli.advanced {
        options = options.optimization_level(OptimizationLevel::Advanced);
    }
    if cli.space_before_slash {
        options = options.start_tag_before_slash(SlashSpacing::RemoveSpaceOnly);
    }
    for pattern in &cli.exclude_comment {
        options = options.exclude_pattern(pattern)?;
    }
    for (key, value) in &cli.option {
        options.set(key, value)?;
    }
    Ok(options)
}

fn invalid_input(err: htmlminify::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> io::Result<String> {
    if is_stdio(path) {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        return Ok(src);
    }
    fs::read_to_string(path)
}

fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        return stdout.flush();
    }
    fs::write(path, bytes)
}
