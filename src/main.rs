use std::{fs, process::ExitCode};

use clap::Parser;
use expressions::{Diagnostic, check_length, evaluate_branch, render_excerpt};

/// Evaluates a boolean expression and prints one of two branches depending on
/// its result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the expression from the file named by CONTENTS.
    #[arg(short, long)]
    file: bool,

    /// Refuse expressions longer than this many bytes. Nesting is always
    /// limited to 64 levels of parentheses and prefix operators, and to
    /// expression trees 512 nodes deep.
    #[arg(short, long, default_value_t = 10_000)]
    max_length: usize,

    /// The expression, or a path when `--file` is given.
    contents: String,

    /// Printed when the expression is truthy.
    #[arg(default_value = "true")]
    consequent: String,

    /// Printed when the expression is falsy or empty.
    #[arg(default_value = "false")]
    alternate: String,
}

/// Writes a diagnostic to stderr with an excerpt of the source.
fn report(source: &str, diagnostic: &Diagnostic) {
    eprintln!("error: {diagnostic}");
    for message in [&diagnostic.submessage, &diagnostic.hint].into_iter().flatten() {
        eprintln!("  = {message}");
    }
    eprintln!("{}", render_excerpt(source, diagnostic.span.start, diagnostic.span.len()));
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    log::debug!("read {} bytes of expression", source.len());

    let result = check_length(&source, args.max_length).and_then(|()| {
                     evaluate_branch(&source, &args.consequent, &args.alternate)
                 });

    match result {
        Ok(branch) => {
            println!("{branch}");
            ExitCode::SUCCESS
        },
        Err(diagnostic) => {
            report(&source, &diagnostic);
            ExitCode::FAILURE
        },
    }
}
