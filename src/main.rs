//! # Greeter
//!
//! Interactive greeting utility written in Rust. Prompts for a fixed
//! number of names on standard input and prints one greeting line.
//!
//! # Arguments:
//!
//! - **greeting** default: Hello
//! - **count** default: 2

use std::env;
use std::io;
use std::process;

use anyhow::{anyhow, Context, Result};
use env_logger::{Builder, Env};
use log::error;

mod collector;
mod renderer;

const GREETING: &str = "Hello";
const ENTRY_COUNT: usize = 2;
const MAX_ENTRY_LENGTH: usize = 99;

#[derive(Debug)]
struct Options {
    greeting: String,
    count: usize,
}

impl Options {
    fn default() -> Options {
        Options {
            greeting: GREETING.to_string(),
            count: ENTRY_COUNT,
        }
    }
}

fn parse_arguments(arguments: Vec<String>) -> Result<Options> {
    let mut options = Options::default();
    match arguments.len() {
        1 => (),
        2 => options.greeting = arguments[1].clone(),
        3 => {
            options.greeting = arguments[1].clone();
            options.count = arguments[2]
                .parse()
                .with_context(|| format!("Invalid entry count: {}!", arguments[2]))?;
            if options.count < 1 {
                return Err(anyhow!("Entry count must be at least 1!"));
            }
        }
        length => {
            return Err(anyhow!(
                "Expecting at most two arguments, got {}!",
                length - 1
            ))
        }
    }
    Ok(options)
}

/// Runs the greeter pipeline.
///
/// This function parses the arguments, collects the requested number of
/// entries from standard input while prompting on standard output, and
/// returns the rendered greeting. No greeting is produced on failure.
///
/// # Errors
///
/// This function will return an error if the arguments are invalid or if
/// collecting the entries fails.
fn run_greeter() -> Result<String> {
    let options = parse_arguments(env::args().collect())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let entries = collector::collect(
        options.count,
        MAX_ENTRY_LENGTH,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .context("Collecting entries failed!")?;
    Ok(renderer::render(&options.greeting, &entries))
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    match run_greeter() {
        Ok(greeting) => println!("{greeting}"),
        Err(err_msg) => {
            error!("Error: {:#}", err_msg);
            process::exit(1);
        }
    }
}
