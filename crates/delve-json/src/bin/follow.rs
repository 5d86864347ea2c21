//! `delve-follow` — follow a key path into a JSON document.
//!
//! Usage:
//!   delve-follow '<path>'
//!
//! The document is read from stdin. The path is the first argument, given
//! as `/`-separated keys (`a/g/n1`); canonical integer segments address
//! positional keys. The addressed value is printed as JSON, `null` when
//! the path misses.

use std::io::{self, Read, Write};

use delve_collection::Value;
use delve_json::{parse_path, to_json};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(text) => parse_path(text),
        None => {
            eprintln!("First argument must be a key path.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let leaf = match delve_json::follow(buf.trim(), &path) {
        Ok(leaf) => leaf.unwrap_or(Value::Null),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match to_json(&leaf) {
        Ok(json) => {
            let mut stdout = io::stdout();
            stdout.write_all(json.to_string().as_bytes()).unwrap();
            stdout.write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
