use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context, Result};
use tomate::{MatchResult, Pattern};

struct Options {
    pattern: String,
    only_matching: bool,
    strict: bool,
    dump: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut pattern = None;
    let mut only_matching = false;
    let mut strict = false;
    let mut dump = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" => {
                let value = args.next().context("expected a pattern after '-E'")?;
                pattern = Some(value);
            }
            "-o" => only_matching = true,
            "--strict" => strict = true,
            "--dump" => dump = true,
            other => bail!("unexpected argument '{other}'"),
        }
    }

    let Some(pattern) = pattern else {
        bail!("expected '-E <pattern>'");
    };
    Ok(Options {
        pattern,
        only_matching,
        strict,
        dump,
    })
}

// Tries the pattern at every character of the line and returns the first hit.
fn find(pattern: &Pattern, line: &str) -> Option<MatchResult> {
    line.char_indices()
        .map(|(start, _)| pattern.match_at(line, start))
        .find(MatchResult::is_success)
}

fn run(options: &Options) -> Result<bool> {
    let pattern = if options.strict {
        Pattern::compile_strict(&options.pattern)
            .with_context(|| format!("invalid pattern '{}'", options.pattern))?
    } else {
        Pattern::compile(&options.pattern)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.dump {
        for item in pattern.items() {
            writeln!(out, "{item}")?;
        }
        return Ok(true);
    }

    let mut matched_any = false;
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        let Some(found) = find(&pattern, &line) else {
            continue;
        };
        matched_any = true;
        if options.only_matching {
            let range = found.range().unwrap_or_default();
            writeln!(out, "{}", line.get(range).unwrap_or_default())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(matched_any)
}

// Usage: echo <input_text> | tomate [-o] [--strict] [--dump] -E <pattern>
fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("tomate: {err:#}");
            process::exit(2);
        }
    };

    match run(&options) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("tomate: {err:#}");
            process::exit(2);
        }
    }
}
