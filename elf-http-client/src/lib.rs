//! Elf HTTP Client
//!
//! Blocking client for the Advent of Code website: downloads puzzle input
//! and submits answers, classifying the judge's HTML reply.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Answer submission with the reply classified into a [`Verdict`]
//! - Ordered, data-driven classification rules ([`CLASSIFICATION_RULES`])
//! - Rate-limit wait time extraction
//! - Secure TLS using rustls (no OpenSSL dependencies)
//!
//! # Example
//!
//! ```no_run
//! use elf_http_client::{ElfClient, Verdict};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ElfClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let reply = client.submit_answer(2024, 1, 1, "42", session)?;
//! match reply.verdict {
//!     Verdict::Correct => println!("Correct!"),
//!     Verdict::TooHigh | Verdict::TooLow | Verdict::Incorrect => println!("Nope"),
//!     Verdict::TooRecent => println!("Wait {:?}", reply.wait_time),
//!     other => println!("{:?}: {}", other, reply.text),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{DEFAULT_BASE_URL, ElfClient, ElfClientBuilder, Reply, Verdict};
pub use error::ClientError;
pub use parser::{CLASSIFICATION_RULES, classify};
