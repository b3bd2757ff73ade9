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

//! Non-interactive subcommands: `quote` and `catalog`.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, StorageCategory};
use crate::cli::{CatalogArgs, CycleArg, QuoteArgs};
use crate::deploy::{BillingCycle, DeploymentSelection, PriceBreakdown};
use crate::error::{Error, Result};
use crate::utils::format_yuan;

impl From<CycleArg> for BillingCycle {
    fn from(arg: CycleArg) -> Self {
        match arg {
            CycleArg::Hourly => BillingCycle::Hourly,
            CycleArg::Daily => BillingCycle::Daily,
            CycleArg::Monthly => BillingCycle::Monthly,
        }
    }
}

/// Parses a `--disk` argument of the form `type:sizeGb` (bare `type` is
/// accepted and takes the type's default volume).
fn parse_disk_spec(spec: &str) -> Result<(&str, Option<u64>)> {
    match spec.split_once(':') {
        None => Ok((spec, None)),
        Some((type_id, size)) => {
            let size_gb = size
                .parse::<u64>()
                .map_err(|_| Error::InvalidDiskSpec(spec.to_string()))?;
            Ok((type_id, Some(size_gb)))
        }
    }
}

fn build_selection(args: &QuoteArgs) -> Result<DeploymentSelection> {
    let gpu =
        catalog::gpu(&args.gpu).ok_or_else(|| Error::UnknownGpu(args.gpu.clone()))?;
    if !catalog::GPU_COUNT_CHOICES.contains(&args.gpus) {
        return Err(Error::UnsupportedGpuCount(args.gpus));
    }

    let mut selection = DeploymentSelection::default();
    selection.gpu_id = gpu.id.to_string();
    selection.partition_id = gpu.available_partitions[0].to_string();
    selection.gpu_count = args.gpus;
    selection.billing_cycle = args.billing.into();
    selection.instance_count = args.instances.max(1);

    for spec in &args.disk {
        let (type_id, size_gb) = parse_disk_spec(spec)?;
        let index = selection
            .add_storage(type_id)
            .ok_or_else(|| Error::UnknownStorageType(type_id.to_string()))?;
        if let Some(size_gb) = size_gb {
            // An explicit size means new capacity, so shared items flip
            // from their attach-existing default.
            if !selection.storage_items[index].is_new_volume() {
                selection.toggle_volume_source(index);
            }
            selection.set_volume_size_text(index, &size_gb.to_string());
        }
    }

    Ok(selection)
}

/// Prints a price quote for the given configuration.
pub fn run_quote(args: &QuoteArgs) -> Result<()> {
    let selection = build_selection(args)?;
    let quote = PriceBreakdown::quote(&selection)?;
    debug!(
        "quote: gpu={} x{} instances={}",
        quote.gpu_id, quote.gpu_count, quote.instance_count
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    let gpu_name = catalog::gpu(&quote.gpu_id).map(|g| g.name).unwrap_or("?");
    println!("Quote for {} x {}", gpu_name, quote.gpu_count);
    println!("  GPU          {}/h", format_yuan(quote.gpu_hourly));
    println!("  Storage      {}/h", format_yuan(quote.storage_hourly));
    println!(
        "  Per instance {}/h",
        format_yuan(quote.per_instance_hourly)
    );
    println!("  Instances    {}", quote.instance_count);
    println!("  Billing      {}", quote.billing_cycle.label());
    println!(
        "  Total        {}{}",
        format_yuan(quote.total),
        quote.billing_cycle.unit()
    );
    Ok(())
}

#[derive(Serialize)]
struct CatalogDump {
    gpus: &'static [catalog::GpuSpec],
    storage_types: &'static [catalog::StorageType],
    shared_volumes: &'static [catalog::SharedVolume],
    images: &'static [catalog::ImageSpec],
    partitions: &'static [catalog::Partition],
}

/// Prints the service catalog.
pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    if args.json {
        let dump = CatalogDump {
            gpus: catalog::GPU_SPECS,
            storage_types: catalog::STORAGE_TYPES,
            shared_volumes: catalog::SHARED_VOLUMES,
            images: catalog::IMAGES,
            partitions: catalog::PARTITIONS,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    println!("GPU specs");
    for g in catalog::GPU_SPECS {
        println!(
            "  {:<6} {:<22} {:>3}GB VRAM  {:>8}/h  partitions: {}",
            g.id,
            g.name,
            g.vram_gb,
            format_yuan(g.hourly_price),
            g.available_partitions.join(", ")
        );
    }

    println!("\nStorage types");
    for s in catalog::STORAGE_TYPES {
        let rate = match s.category {
            StorageCategory::Shared => format!(
                "SSD {}/GB/h, HDD {}/GB/h",
                format_yuan(catalog::SHARED_SSD_RATE),
                format_yuan(catalog::SHARED_HDD_RATE)
            ),
            _ if s.unit_price_per_gb_hour > 0.0 => {
                format!("{}/GB/h", format_yuan(s.unit_price_per_gb_hour))
            }
            _ => "free".to_string(),
        };
        println!("  {:<8} {:<24} {}", s.id, s.name, rate);
    }

    println!("\nImages");
    for i in catalog::IMAGES {
        println!(
            "  {:<6} {:<24} [{}] versions: {}",
            i.id,
            i.name,
            i.category.label(),
            i.versions.join(", ")
        );
    }

    println!("\nPartitions");
    for p in catalog::PARTITIONS {
        println!("  {:<4} {:<16} {}", p.id, p.name, p.note);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_args() -> QuoteArgs {
        QuoteArgs {
            gpu: "a100".to_string(),
            gpus: 1,
            disk: Vec::new(),
            billing: CycleArg::Hourly,
            instances: 1,
            json: false,
        }
    }

    #[test]
    fn test_parse_disk_spec() {
        assert_eq!(parse_disk_spec("block:100").unwrap(), ("block", Some(100)));
        assert_eq!(parse_disk_spec("shared").unwrap(), ("shared", None));
        assert!(matches!(
            parse_disk_spec("block:lots"),
            Err(Error::InvalidDiskSpec(_))
        ));
    }

    #[test]
    fn test_build_selection_validates_gpu() {
        let mut args = quote_args();
        args.gpu = "b200".to_string();
        assert!(matches!(
            build_selection(&args),
            Err(Error::UnknownGpu(_))
        ));
    }

    #[test]
    fn test_build_selection_validates_count() {
        let mut args = quote_args();
        args.gpus = 5;
        assert!(matches!(
            build_selection(&args),
            Err(Error::UnsupportedGpuCount(5))
        ));
    }

    #[test]
    fn test_build_selection_with_disks() {
        let mut args = quote_args();
        args.gpus = 2;
        args.disk = vec!["block:50".to_string(), "shared:200".to_string()];
        let sel = build_selection(&args).unwrap();
        assert_eq!(sel.storage_items.len(), 2);
        assert_eq!(sel.storage_items[0].size_gb(), 50);
        // Explicit size on a shared disk means new capacity.
        assert!(sel.storage_items[1].is_new_volume());
        assert_eq!(sel.storage_items[1].size_gb(), 200);
    }

    #[test]
    fn test_build_selection_unknown_storage() {
        let mut args = quote_args();
        args.disk = vec!["tape:10".to_string()];
        assert!(matches!(
            build_selection(&args),
            Err(Error::UnknownStorageType(_))
        ));
    }

    #[test]
    fn test_cycle_arg_conversion() {
        assert_eq!(BillingCycle::from(CycleArg::Monthly), BillingCycle::Monthly);
        assert_eq!(BillingCycle::from(CycleArg::Daily), BillingCycle::Daily);
    }
}
