//! Print the lines of stdin that match a LIKE pattern
//!
//! Usage: like_filter <pattern> [escape]

use sql_like::{init_default_logger, Error, LikePattern};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_default_logger();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <pattern> [escape]", args[0]);
        std::process::exit(1);
    }

    let escape = args.get(2).map(String::as_str).unwrap_or("");
    let pattern = match LikePattern::with_escape(&args[1], escape) {
        Ok(pattern) => pattern,
        Err(e @ Error::InvalidEscape(_)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut matched = 0usize;

    // split on '\n' so lines with invalid UTF-8 are still tested
    for line in stdin.lock().split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if pattern.matches(&line) {
            out.write_all(&line)?;
            out.write_all(b"\n")?;
            matched += 1;
        }
    }

    eprintln!("{} matching line(s) for {}", matched, pattern);
    Ok(())
}
