mod console;
mod demo;
mod logging;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use cmdtree::{AnsiFormat, CommandRegistry, FormatProvider, PlainFormat, Settings};

use crate::console::ConsoleSender;

#[derive(Parser, Debug)]
#[command(name = "cmdtree")]
#[command(about = "Interactive console for permission-aware command trees")]
#[command(version)]
struct Cli {
    /// Grant a permission to the console sender (repeatable, `cfg.*` covers a subtree)
    #[arg(long = "grant", value_name = "PERMISSION")]
    grants: Vec<String>,

    /// Run as operator: every permission is held
    #[arg(long)]
    op: bool,

    /// Print completion candidates for the tokens instead of running them
    #[arg(long)]
    complete: bool,

    /// Settings file (default: the per-user config path)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colours even on a terminal
    #[arg(long)]
    plain: bool,

    /// Command line to run once; without it, read commands from stdin
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading settings")?;

    let registry = demo::build_registry(settings).context("building command tree")?;

    let format: Box<dyn FormatProvider> = if cli.plain || !io::stdout().is_terminal() {
        Box::new(PlainFormat)
    } else {
        Box::new(AnsiFormat::default())
    };
    let sender = ConsoleSender::new(cli.grants, cli.op, format);

    if cli.complete || !cli.tokens.is_empty() {
        let ok = run_line(&registry, &sender, &cli.tokens, cli.complete);
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    repl(&registry, &sender)
}

/// Dispatch or complete one command line. Returns false on a dispatch error.
fn run_line(
    registry: &CommandRegistry,
    sender: &ConsoleSender,
    tokens: &[String],
    complete: bool,
) -> bool {
    if complete {
        let candidates = registry.complete(tokens, sender);
        println!("{}", candidates.join("  "));
        return true;
    }

    match registry.dispatch(tokens, sender) {
        Ok(Some(output)) => {
            sender.send_message(&output);
            true
        }
        Ok(None) => true,
        Err(err) => {
            sender.send_message(&err.to_component());
            false
        }
    }
}

/// Read commands from stdin until EOF. A line starting with `?` asks for
/// completions of the rest of the line.
fn repl(registry: &CommandRegistry, sender: &ConsoleSender) -> anyhow::Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;

        let (complete, input) = match line.strip_prefix('?') {
            Some(rest) => (true, rest),
            None => (false, line.as_str()),
        };
        let tokens = split_tokens(input, complete);
        if tokens.is_empty() && !complete {
            continue;
        }
        run_line(registry, sender, &tokens, complete);
    }
    Ok(())
}

/// Whitespace-separated tokens. For completion, trailing whitespace means
/// the user is starting a new token, so an empty partial is appended.
fn split_tokens(input: &str, complete: bool) -> Vec<String> {
    let mut tokens: Vec<String> = input.split_whitespace().map(String::from).collect();
    if complete && (input.is_empty() || input.ends_with(char::is_whitespace)) {
        tokens.push(String::new());
    }
    tokens
}
