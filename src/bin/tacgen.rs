//! Command-line front-end for tacgen.
//!
//! Compiles the expression given on the command line, or every non-blank
//! line of stdin when no expression is given.

use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::process::ExitCode;
use tacgen::{compile, compile_to_postfix, compile_to_tac, compile_with_trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Three-address code
    Tac,
    /// Postfix notation
    Postfix,
    /// Step-by-step translation
    Trace,
    /// All three views
    All,
}

#[derive(Parser, Debug)]
#[command(name = "tacgen", version, about = "Translate infix expressions to three-address code")]
struct Args {
    /// Expression to compile (reads stdin when omitted)
    expression: Option<String>,

    /// Which output to print
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Print per-mnemonic instruction statistics
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn is_error(lines: &[String]) -> bool {
    matches!(lines, [line] if line.starts_with("Error: "))
}

fn print_section(title: &str, lines: &[String]) {
    println!("=== {} ===", title);
    for line in lines {
        println!("{}", line);
    }
    println!();
}

/// Print the requested views; returns false if any of them failed.
fn run(expression: &str, args: &Args) -> bool {
    let mut ok = true;
    let mut emit = |title: &str, lines: Vec<String>| {
        ok &= !is_error(&lines);
        if args.mode == Mode::All {
            print_section(title, &lines);
        } else {
            for line in &lines {
                println!("{}", line);
            }
        }
    };

    if matches!(args.mode, Mode::Tac | Mode::All) {
        emit("Three-Address Code", compile_to_tac(expression));
    }
    if matches!(args.mode, Mode::Postfix | Mode::All) {
        emit("Postfix Notation", compile_to_postfix(expression));
    }
    if matches!(args.mode, Mode::Trace | Mode::All) {
        emit("Translation Steps", compile_with_trace(expression));
    }

    if args.stats {
        if let Ok(compiled) = compile(expression) {
            print!("{}", compiled.stats);
        }
    }

    ok
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let expressions: Vec<String> = match &args.expression {
        Some(expression) => vec![expression.clone()],
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
    };

    log::info!("compiling {} expression(s)", expressions.len());

    let mut ok = true;
    for (index, expression) in expressions.iter().enumerate() {
        if expressions.len() > 1 {
            if index > 0 {
                println!();
            }
            println!("# {}", expression);
        }
        ok &= run(expression, &args);
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
