//! Hashes a fixed demonstration password and immediately verifies the
//! result, exiting non-zero if anything goes wrong.

extern crate pretzel;

use pretzel::errors::Result;

use std::process;

fn main() {
    match run() {
        Ok(true) => println!("Verification test: PASSED"),
        Ok(false) => {
            println!("Verification test: FAILED");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("selfcheck error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let password = "Test123!";

    let hash = pretzel::hash_password(password)?;
    println!("New hash for {}: {}", password, hash);

    pretzel::verify_password(&hash, password)
}
