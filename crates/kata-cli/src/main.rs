//! Kata CLI
//!
//! Command-line front end for the kata exercises. Values come from arguments
//! or, when omitted, from stdin (or `--input FILE`).

mod input;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use input::{TokenReader, parse_value};
use kata_numeric::{checked_reverse, divide, max_profit, product_except_self, reverse, two_sum};
use kata_parking::{CarType, ParkingSystem};
use kata_text::{find_substring, is_palindrome, reverse_chars};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Car codes admitted by `park` when none are given
const DEMO_CAR_CODES: [i64; 4] = [1, 2, 3, 1];

fn main() {
    let matches = cli().get_matches();
    let (name, sub) = matches.subcommand().unwrap_or(("", &matches));

    initialize_tracing(sub.get_count("verbose"));
    debug!(command = name, "starting");

    let stdout = io::stdout();
    let result = open_input(sub.get_one::<String>("input").map(String::as_str))
        .and_then(|reader| run(&matches, &mut TokenReader::new(reader), &mut stdout.lock()));

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("kata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bounded integer reversal and companion exercises")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (repeatable); RUST_LOG overrides"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .global(true)
                .help("Read omitted values from FILE instead of stdin")
                .num_args(1),
        )
        .subcommand(
            Command::new("reverse")
                .about("Reverse the decimal digits of a 32-bit integer (0 on overflow)")
                .arg(
                    number_arg("number", "N")
                        .help("Integer to reverse; read from input if omitted"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail with ERR_OVERFLOW instead of printing 0"),
                ),
        )
        .subcommand(
            Command::new("divide")
                .about("Truncating division without the division operator")
                .arg(number_arg("dividend", "DIVIDEND").required(true))
                .arg(number_arg("divisor", "DIVISOR").required(true)),
        )
        .subcommand(
            Command::new("product")
                .about("Product of every element except self")
                .arg(number_list_arg("nums", "NUMS")),
        )
        .subcommand(
            Command::new("profit")
                .about("Best profit from one buy and one later sell")
                .arg(number_list_arg("prices", "PRICES")),
        )
        .subcommand(
            Command::new("two-sum")
                .about("Indices of two numbers adding up to a target")
                .arg(number_arg("target", "TARGET").required(true))
                .arg(number_list_arg("nums", "NUMS").required(true)),
        )
        .subcommand(
            Command::new("reverse-string")
                .about("Reverse the characters of a string")
                .arg(Arg::new("text").value_name("TEXT").index(1)),
        )
        .subcommand(
            Command::new("find")
                .about("Byte offset of the first occurrence of NEEDLE, or -1")
                .arg(Arg::new("haystack").value_name("TEXT").required(true).index(1))
                .arg(Arg::new("needle").value_name("NEEDLE").required(true).index(2)),
        )
        .subcommand(
            Command::new("palindrome")
                .about("Check whether text is a palindrome, ignoring case and punctuation")
                .arg(Arg::new("text").value_name("TEXT").index(1)),
        )
        .subcommand(
            Command::new("park")
                .about("Admit cars (1 = big, 2 = medium, 3 = small) into a parking lot")
                .arg(count_arg("big", "1"))
                .arg(count_arg("medium", "1"))
                .arg(count_arg("small", "0"))
                .arg(number_list_arg("codes", "CODES")),
        )
}

fn number_arg(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id)
        .value_name(value_name)
        .allow_negative_numbers(true)
        .num_args(1)
}

fn number_list_arg(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id)
        .value_name(value_name)
        .allow_negative_numbers(true)
        .num_args(1..)
}

fn count_arg(id: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("N")
        .default_value(default)
        .help(format!("Free {id} slots"))
        .num_args(1)
}

/// Initialize the tracing system for logging
fn initialize_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    match std::env::var("RUST_LOG_FORMAT").as_deref() {
        Ok("compact") => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, anyhow::Error> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("kata: cannot open {path}"))?;
            info!(path, "reading input from file");
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn run<R: BufRead, W: Write>(
    matches: &ArgMatches,
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<(), anyhow::Error> {
    match matches.subcommand() {
        Some(("reverse", sub)) => {
            let n: i32 = value_or_read(sub, "number", "an integer", reader)?;
            let reversed = if sub.get_flag("strict") {
                checked_reverse(n)?
            } else {
                reverse(n)
            };
            writeln!(out, "{reversed}")?;
        }
        Some(("divide", sub)) => {
            let dividend: i32 = required_value(sub, "dividend", "dividend")?;
            let divisor: i32 = required_value(sub, "divisor", "divisor")?;
            writeln!(out, "{}", divide(dividend, divisor)?)?;
        }
        Some(("product", sub)) => {
            let nums: Vec<i32> = list_or_read(sub, "nums", reader)?;
            let products = product_except_self(&nums)?;
            writeln!(out, "{}", join(&products))?;
        }
        Some(("profit", sub)) => {
            let prices: Vec<u32> = list_or_read(sub, "prices", reader)?;
            writeln!(out, "{}", max_profit(&prices))?;
        }
        Some(("two-sum", sub)) => {
            let target: i32 = required_value(sub, "target", "target")?;
            let nums: Vec<i32> = parse_list(sub, "nums")?;
            match two_sum(&nums, target) {
                Some((i, j)) => writeln!(out, "{i} {j}")?,
                None => writeln!(out, "none")?,
            }
        }
        Some(("reverse-string", sub)) => {
            let text = text_or_read(sub, reader)?;
            writeln!(out, "{}", reverse_chars(&text))?;
        }
        Some(("find", sub)) => {
            let haystack = string_arg(sub, "haystack");
            let needle = string_arg(sub, "needle");
            match find_substring(haystack, needle) {
                Some(offset) => writeln!(out, "{offset}")?,
                None => writeln!(out, "-1")?,
            }
        }
        Some(("palindrome", sub)) => {
            let text = text_or_read(sub, reader)?;
            if is_palindrome(&text) {
                writeln!(out, "Palindrome")?;
            } else {
                writeln!(out, "Not a palindrome")?;
            }
        }
        Some(("park", sub)) => {
            let mut lot = ParkingSystem::new(
                required_value(sub, "big", "slot count")?,
                required_value(sub, "medium", "slot count")?,
                required_value(sub, "small", "slot count")?,
            );
            let codes: Vec<i64> = if sub.contains_id("codes") {
                parse_list(sub, "codes")?
            } else {
                DEMO_CAR_CODES.to_vec()
            };
            for code in codes {
                let car = CarType::try_from(code)?;
                writeln!(out, "{}", lot.add_car(car))?;
            }
        }
        Some((other, _)) => anyhow::bail!("kata: unknown command {other}"),
        None => anyhow::bail!("kata: no command given"),
    }

    Ok(())
}

fn string_arg<'a>(sub: &'a ArgMatches, id: &str) -> &'a str {
    sub.get_one::<String>(id).map_or("", String::as_str)
}

fn required_value<T>(sub: &ArgMatches, id: &str, what: &str) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = sub
        .get_one::<String>(id)
        .with_context(|| format!("kata: missing {what}"))?;
    Ok(parse_value(token, what)?)
}

fn value_or_read<T, R: BufRead>(
    sub: &ArgMatches,
    id: &str,
    what: &str,
    reader: &mut TokenReader<R>,
) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match sub.get_one::<String>(id) {
        Some(token) => Ok(parse_value(token, what)?),
        None => Ok(reader.next_value(what)?),
    }
}

fn parse_list<T>(sub: &ArgMatches, id: &str) -> Result<Vec<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    sub.get_many::<String>(id)
        .into_iter()
        .flatten()
        .map(|token| parse_value(token, "number").map_err(anyhow::Error::from))
        .collect()
}

/// Values from arguments, or a count followed by that many values from input
fn list_or_read<T, R: BufRead>(
    sub: &ArgMatches,
    id: &str,
    reader: &mut TokenReader<R>,
) -> Result<Vec<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if sub.contains_id(id) {
        return parse_list(sub, id);
    }

    let count: usize = reader.next_value("element count")?;
    (0..count)
        .map(|_| reader.next_value("number").map_err(anyhow::Error::from))
        .collect()
}

fn text_or_read<R: BufRead>(
    sub: &ArgMatches,
    reader: &mut TokenReader<R>,
) -> Result<String, anyhow::Error> {
    match sub.get_one::<String>("text") {
        Some(text) => Ok(text.clone()),
        None => Ok(reader.read_line()?),
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
