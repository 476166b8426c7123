//! Command loop demo
//!
//! Reads player commands one per line and uses a `TokenScanner` to pick out
//! the verb and the objects it applies to, the way a text adventure would.
//!
//! Run with `cargo run --example command_words`, or pipe your own commands in
//! with `cargo run --example command_words -- -`.

use std::collections::BTreeSet;
use std::io::{self, BufRead};
use token_scanner::{Category, ScanResult, TokenScanner};

const SCRIPT: &str = "\
TAKE lamp
take key, rope and lamp
LOOK
drop rope
go north // comments are ignored
inventory
DROP \"old map\"
";

fn main() -> ScanResult<()> {
    let from_stdin = std::env::args().nth(1).as_deref() == Some("-");
    let lines: Vec<String> = if from_stdin {
        io::stdin().lock().lines().map_while(Result::ok).collect()
    } else {
        SCRIPT.lines().map(str::to_string).collect()
    };

    let room: BTreeSet<&str> = ["lamp", "key", "rope", "old map"].into_iter().collect();
    let mut carried = BTreeSet::new();

    let mut scanner = TokenScanner::new("");
    scanner.ignore_whitespace();
    scanner.ignore_comments();
    scanner.scan_strings();

    for line in lines {
        scanner.set_input(&line);
        if !scanner.has_more_tokens()? {
            continue;
        }
        let verb = scanner.next_token()?.to_uppercase();
        println!("> {line}");

        match verb.as_str() {
            "TAKE" | "DROP" => {
                let taking = verb == "TAKE";
                while scanner.has_more_tokens()? {
                    let token = scanner.next_token()?;
                    let name = match scanner.token_type(&token) {
                        Category::Word if token != "and" => token,
                        Category::String => scanner.string_value(&token)?,
                        _ => continue,
                    };
                    if taking && room.contains(name.as_str()) && carried.insert(name.clone()) {
                        println!("  took {name}");
                    } else if !taking && carried.remove(&name) {
                        println!("  dropped {name}");
                    } else {
                        println!("  no {name} here");
                    }
                }
            }
            "INVENTORY" => {
                let items: Vec<&str> = carried.iter().map(String::as_str).collect();
                println!("  carrying: {}", items.join(", "));
            }
            _ => {
                let rest: Vec<String> = scanner.by_ref().collect::<ScanResult<_>>()?;
                println!("  {verb} {}", rest.join(" "));
            }
        }
    }
    Ok(())
}
