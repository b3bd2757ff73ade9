// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod app_state;
mod catalog;
mod cli;
mod commands;
mod common;
mod deploy;
mod error;
mod mock;
mod model;
mod ui;
mod utils;
mod view;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConsoleArgs, StartView};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up signal handler for clean shutdown
    tokio::spawn(async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        std::process::exit(0);
    });

    match cli.command {
        Some(Commands::Quote(args)) => {
            init_tracing();
            if let Err(e) = commands::run_quote(&args) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Catalog(args)) => {
            init_tracing();
            if let Err(e) = commands::run_catalog(&args) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Console(args)) => {
            view::run_console_mode(&args).await;
        }
        None => {
            // Default to the interactive console when no command is given
            view::run_console_mode(&ConsoleArgs {
                view: StartView::Dashboard,
            })
            .await;
        }
    }
}

/// Log to stderr for the non-interactive commands. The console mode owns
/// the terminal, so it stays silent.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
