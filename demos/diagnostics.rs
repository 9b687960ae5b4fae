//! Describing collections of values in error messages.
//!
//! Run with: cargo run --example diagnostics

use seqjoin::{items, join, join_serialize, join_truncated, JoinOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let formats = ["json", "yaml", "toml"];
    let choices = JoinOptions::prose().quoted();
    println!("unknown format 'xml', expected {}", choices.display(&formats));

    let ports: Vec<u16> = (8000..8040).collect();
    println!("ports in use: {}", join_truncated(&ports, &JoinOptions::new()));

    let mixed = items![1, "x", 2.5];
    println!("mixed: {}", join(&mixed, &JoinOptions::new().quoted()));

    let tuple = join_serialize(&("alpha", 2, 'c'), &JoinOptions::prose())?;
    println!("from serde: {}", tuple);

    Ok(())
}
