use std::collections::HashMap;

use clap::Parser;
use numstep::{
    number::Number,
    tree::{Constant, Stepper, evaluate},
};

/// numstep reduces a parenthesized prefix arithmetic expression one step at
/// a time, showing how it collapses toward its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to reduce, e.g. "(+ x (* 2 3))".
    expression: String,

    /// Binds an identifier to a numeric value; may be repeated, e.g.
    /// `-b x=1 -b y=2/3`.
    #[arg(short, long = "bind", value_name = "NAME=VALUE")]
    bind: Vec<String>,

    /// Prints only the final value instead of every reduction step.
    #[arg(short, long)]
    evaluate: bool,
}

fn main() {
    let args = Args::parse();

    let mut bindings = HashMap::new();
    for binding in &args.bind {
        let Some((name, value)) = binding.split_once('=') else {
            eprintln!("Binding '{binding}' is not of the form NAME=VALUE.");
            std::process::exit(1);
        };
        let value: Number = value.parse().unwrap_or_else(|e| {
                                              eprintln!("Binding '{binding}': {e}");
                                              std::process::exit(1);
                                          });
        bindings.insert(name.to_string(), value);
    }

    let root = numstep::parse(&args.expression).unwrap_or_else(|e| {
                                                   eprintln!("{e}");
                                                   std::process::exit(1);
                                               });
    let root = Constant::substitute(&root);

    if args.evaluate {
        match evaluate(&root, &bindings) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut stepper = Stepper::new(&root, bindings);
    loop {
        match stepper.next_step() {
            Ok(tokens) => println!("{}", numstep::lexer::render(&tokens)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        if stepper.is_terminal() {
            break;
        }
    }
}
