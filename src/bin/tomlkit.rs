//! A small CLI over the `tomlite` library.
//!
//! Grounded on the teacher's `src/bin/tomlkit.rs` (option table built with
//! `pirate::{matches, usage, vars}`, `env_logger::init()` at the top of `main`). Trimmed to
//! the read-only commands this crate supports: this library never serializes a document
//! back out, so the teacher's `set-value`/`--output-file`/`--print-doc` machinery has no
//! counterpart here.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use pirate::{matches, usage, vars, Match, Matches, Vars};

fn main() -> ExitCode {
    let options = vec![
        "#Commands",
        "g/get-value#Given a dotted key path, print the value at that path.:",
        "t/get-table#Given a dotted key path, print the keys of the table at that path.:",
        "/validate#Parse the document and print \"valid\" or a parse error; exit non-zero on failure.",
        "#Options",
        "h/help#Show this screen.",
        "i/input-file#The path to the TOML document to read. If omitted, tomlkit reads from stdin.:",
    ];

    env_logger::init();

    let mut vars: Vars = match vars("tomlkit", &options) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error parsing argument definitions: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().collect();
    let matches: Matches = match matches(&args, &mut vars) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {}", e);
            usage(&vars);
            return ExitCode::FAILURE;
        }
    };

    if matches.has_match("help") {
        usage(&vars);
        return ExitCode::SUCCESS;
    }

    let input = match read_input(&matches) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error reading input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let doc = match tomlite::parse(&input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if matches.has_match("validate") {
        println!("valid");
        return ExitCode::SUCCESS;
    }

    if let Some(path) = matches.get("get-value") {
        return match doc.get_value(path) {
            Some(v) => {
                println!("{}", v);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("no value at {:?}", path);
                ExitCode::FAILURE
            }
        };
    }

    if let Some(path) = matches.get("get-table") {
        return match doc.get_table(path) {
            Some(t) => {
                for key in t.keys() {
                    println!("{}", key);
                }
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("no table at {:?}", path);
                ExitCode::FAILURE
            }
        };
    }

    usage(&vars);
    ExitCode::FAILURE
}

fn read_input(matches: &Matches) -> io::Result<String> {
    if let Some(path) = matches.get("input-file") {
        fs::read_to_string(path)
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
