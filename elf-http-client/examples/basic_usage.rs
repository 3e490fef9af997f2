//! Fetch an input and submit an answer with the raw HTTP client
//!
//! Usage: `AOC_SESSION_COOKIE=... cargo run -p elf-http-client --example basic_usage -- 2024 1 1 42`
//!
//! This bypasses the guess cache entirely; prefer the `elf submit` command.

use elf_http_client::{ElfClient, Verdict};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION_COOKIE")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [year, day, part, answer] = args.as_slice() else {
        eprintln!("usage: basic_usage <year> <day> <part> <answer>");
        std::process::exit(2);
    };
    let (year, day, part): (u16, u8, u8) = (year.parse()?, day.parse()?, part.parse()?);

    let client = ElfClient::builder()
        .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(30)))
        .build()?;

    let input = client.get_input(year, day, &session)?;
    println!("Input for {}/{:02}: {} lines", year, day, input.lines().count());

    let reply = client.submit_answer(year, day, part, answer, &session)?;
    match reply.verdict {
        Verdict::Correct => println!("✓ Correct"),
        Verdict::TooRecent => println!("⏳ Throttled ({:?})", reply.wait_time),
        verdict => println!("{:?}\n{}", verdict, reply.text),
    }
    Ok(())
}
