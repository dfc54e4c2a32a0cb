//! # Checkout Store Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match checkout_store::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("checkout-store: {err}");
            ExitCode::FAILURE
        }
    }
}
