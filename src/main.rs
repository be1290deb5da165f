use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use dualcalc::{
    interpreter::parser::{
        core::{Grammar, detect_grammar, parse_tokens},
        infix::infix_to_postfix,
    },
    tokenize,
};

/// dualcalc evaluates one arithmetic expression written in infix notation,
/// like `2 * (3 + 4)`, or in prefix notation, like `(* 2 (+ 3 4))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed tree in prefix notation to stderr.
    #[arg(short, long)]
    tree: bool,

    /// Prints the postfix form of an infix expression to stderr.
    #[arg(short, long)]
    postfix: bool,

    /// The expression to evaluate. A single line is read from stdin when
    /// omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> anyhow::Result<f64> {
    let source = match &args.expression {
        Some(expression) => expression.clone(),
        None => read_line()?,
    };

    let tokens = tokenize(&source);

    if args.postfix && detect_grammar(&tokens)? == Grammar::Infix {
        let postfix = infix_to_postfix(&tokens)?;
        let rendered: Vec<String> = postfix.iter().map(|(token, _)| token.to_string()).collect();
        eprintln!("postfix: {}", rendered.join(" "));
    }

    let tree = parse_tokens(&tokens)?;
    if args.tree {
        eprintln!("tree: {tree}");
    }

    Ok(tree.evaluate()?)
}

fn read_line() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin().lock()
               .read_line(&mut line)
               .context("Failed to read the expression from stdin")?;
    Ok(line)
}
