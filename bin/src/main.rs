use std::{
    io::{stdin, stdout, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;

use interpreter::{CalcError, Value};
use scanner::Token;

/// Evaluate arithmetic expressions.
///
/// Starts an interactive prompt when neither an expression nor a file is given.
#[derive(clap::Parser, Debug)]
#[command(version)]
struct Args {
    /// Expressions to evaluate, one result per line
    expressions: Vec<String>,

    /// Evaluate every non-blank line of a file
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Print the token stream before evaluating
    #[arg(long)]
    tokens: bool,

    /// Print the parsed expression in prefix form before evaluating
    #[arg(long)]
    ast: bool,
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error("{}", render_error(.input, .error))]
    Calc { input: String, error: CalcError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The input line, a caret under the offending column (if there is one) and the message.
fn render_error(input: &str, error: &CalcError) -> String {
    match error.col() {
        Some(col) => format!("{input}\n{}^\n{error}", " ".repeat(col.0.saturating_sub(1))),
        None => format!("{input}\n{error}"),
    }
}

fn run(input: &str, args: &Args, out: &mut impl Write) -> Result<Value, RunError> {
    log::debug!("Evaluating {:?}", input);
    let fail = |error: CalcError| RunError::Calc { input: input.trim_end().to_string(), error };

    let tokens = scanner::tokenize(input).map_err(|e| fail(e.into()))?;
    if args.tokens {
        writeln!(out, "{}", tokens.iter().map(Token::describe).join(" "))?;
    }

    let expr = parser::parse(tokens).map_err(|e| fail(e.into()))?;
    if args.ast {
        writeln!(out, "{expr}")?;
    }

    let value = interpreter::evaluate(&expr).map_err(|e| fail(e.into()))?;
    writeln!(out, "{value}")?;
    Ok(value)
}

fn run_file(path: &Path, args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    for (i, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        run(line, args, out).with_context(|| format!("{}:{}", path.display(), i + 1))?;
    }
    Ok(())
}

fn run_prompt(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            // EOF
            writeln!(out)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        match run(&line, args, out) {
            Ok(_) => (),
            Err(e @ RunError::Calc { .. }) => writeln!(out, "{}", e)?,
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut out = stdout().lock();
    if let Some(path) = &args.file {
        run_file(path, &args, &mut out)
    } else if !args.expressions.is_empty() {
        for expression in &args.expressions {
            run(expression, &args, &mut out)?;
        }
        Ok(())
    } else {
        run_prompt(&args, &mut out)
    }
}
