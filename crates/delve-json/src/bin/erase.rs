//! `delve-erase` — remove a key path from a JSON document.
//!
//! Usage:
//!   delve-erase '<path>'
//!
//! The document is read from stdin. The path is the first argument, given
//! as `/`-separated keys (`a/g/n1`). The modified document is printed; a
//! path that misses leaves the document unchanged.

use std::io::{self, Read, Write};

use delve_json::parse_path;

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

    match delve_json::erase(buf.trim(), &path) {
        Ok(document) => {
            let mut stdout = io::stdout();
            stdout.write_all(document.as_bytes()).unwrap();
            stdout.write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
