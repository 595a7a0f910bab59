/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for covbond-rs

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    covbond_rs::cli::run()
}
