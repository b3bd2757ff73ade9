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

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive console. (default)
    Console(ConsoleArgs),
    /// Print a price quote for a deployment configuration.
    Quote(QuoteArgs),
    /// Print the service catalog (GPU specs, storage types, images, partitions).
    Catalog(CatalogArgs),
}

#[derive(Parser, Clone)]
pub struct ConsoleArgs {
    /// The view to open on startup.
    #[arg(long, value_enum, default_value_t = StartView::Dashboard)]
    pub view: StartView,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum StartView {
    Dashboard,
    Instances,
    Clusters,
    Pools,
    Deploy,
}

#[derive(Parser, Clone)]
pub struct QuoteArgs {
    /// GPU spec id (see `ebcon catalog`).
    #[arg(long, default_value = "a100")]
    pub gpu: String,
    /// Number of GPU cards per instance (1, 2, 3, 4 or 8).
    #[arg(long, default_value_t = 1)]
    pub gpus: u32,
    /// Extra data disk as `type:sizeGb`, e.g. `block:50`. May be repeated.
    #[arg(long)]
    pub disk: Vec<String>,
    /// Billing cycle to price against.
    #[arg(long, value_enum, default_value_t = CycleArg::Hourly)]
    pub billing: CycleArg,
    /// Number of instances to deploy.
    #[arg(long, default_value_t = 1)]
    pub instances: u32,
    /// Emit the quote as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum CycleArg {
    Hourly,
    Daily,
    Monthly,
}

#[derive(Parser, Clone)]
pub struct CatalogArgs {
    /// Emit the catalog as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
