//! # RocketShoes Storefront Entry Point
//!
//! ```text
//! rocketshoes show                 print the persisted cart
//! rocketshoes add <id>             add one unit (checks stock)
//! rocketshoes update <id> <amount> set an amount (checks stock)
//! rocketshoes remove <id>          drop a product
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use clap::Parser;
use rocketshoes_storefront::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    rocketshoes_storefront::run(Cli::parse()).await
}
