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

//! Price quote calculation for a deployment configuration.
//!
//! All intermediate figures are hourly; the billing cycle converts the
//! hourly total at the very end so the per-cycle discount never leaks
//! into the line items.

use serde::Serialize;

use crate::catalog::{self, StorageCategory};
use crate::deploy::selection::{BillingCycle, DeploymentSelection, StorageItem, VolumeSource};
use crate::error::{Error, Result};

/// Hourly GPU cost for one instance: per-card price times card count.
pub fn gpu_cost(hourly_price: f64, gpu_count: u32) -> f64 {
    hourly_price * gpu_count as f64
}

/// Hourly cost of one storage item.
///
/// Only newly provisioned capacity is billed; attaching an existing
/// volume is free. Shared storage is rated per media class, every other
/// category by the type's unit price (which is zero for netdisk and
/// local scratch).
pub fn storage_cost(item: &StorageItem) -> f64 {
    let VolumeSource::New { size_gb, media, .. } = &item.volume else {
        return 0.0;
    };
    let rate = match catalog::storage_type(&item.type_id) {
        Some(ty) if ty.category == StorageCategory::Shared => catalog::shared_rate(*media),
        Some(ty) => ty.unit_price_per_gb_hour,
        None => 0.0,
    };
    rate * *size_gb as f64
}

/// Converts an hourly total into the given billing cycle, applying the
/// cycle's commitment discount.
pub fn apply_billing_cycle(hourly_total: f64, cycle: BillingCycle) -> f64 {
    hourly_total * cycle.multiplier() * cycle.discount()
}

/// Rounds to 2 decimals for display and JSON output.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A full quote for the current configuration.
#[derive(Clone, Debug, Serialize)]
pub struct PriceBreakdown {
    pub gpu_id: String,
    pub gpu_count: u32,
    pub gpu_hourly: f64,
    pub storage_hourly: f64,
    /// Hourly cost of one instance before the cycle conversion.
    pub per_instance_hourly: f64,
    pub instance_count: u32,
    pub billing_cycle: BillingCycle,
    /// Total across all instances, converted to the billing cycle.
    pub total: f64,
}

impl PriceBreakdown {
    /// Computes the quote for a selection. Fails only when the selected
    /// GPU id is not in the catalog.
    pub fn quote(selection: &DeploymentSelection) -> Result<PriceBreakdown> {
        let gpu = selection
            .gpu()
            .ok_or_else(|| Error::UnknownGpu(selection.gpu_id.clone()))?;
        let gpu_hourly = gpu_cost(gpu.hourly_price, selection.gpu_count);
        let storage_hourly: f64 = selection.storage_items.iter().map(storage_cost).sum();
        let per_instance_hourly = gpu_hourly + storage_hourly;
        let all_instances = per_instance_hourly * selection.instance_count as f64;
        let total = apply_billing_cycle(all_instances, selection.billing_cycle);
        Ok(PriceBreakdown {
            gpu_id: selection.gpu_id.clone(),
            gpu_count: selection.gpu_count,
            gpu_hourly: round2(gpu_hourly),
            storage_hourly: round2(storage_hourly),
            per_instance_hourly: round2(per_instance_hourly),
            instance_count: selection.instance_count,
            billing_cycle: selection.billing_cycle,
            total: round2(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DiskMedia;

    fn base_selection() -> DeploymentSelection {
        DeploymentSelection::default()
    }

    #[test]
    fn test_gpu_cost_scales_with_count() {
        assert_eq!(gpu_cost(12.80, 1), 12.80);
        assert_eq!(gpu_cost(12.80, 2), 25.60);
        assert_eq!(gpu_cost(28.50, 8), 228.0);
    }

    #[test]
    fn test_two_a100_with_block_disk_is_25_85_hourly() {
        let mut sel = base_selection();
        sel.gpu_id = "a100".to_string();
        sel.gpu_count = 2;
        sel.add_storage("block").unwrap();
        let quote = PriceBreakdown::quote(&sel).unwrap();
        assert_eq!(quote.gpu_hourly, 25.60);
        assert_eq!(quote.storage_hourly, 0.25);
        assert_eq!(quote.total, 25.85);
    }

    #[test]
    fn test_monthly_cycle_applies_discount() {
        let mut sel = base_selection();
        sel.gpu_id = "a100".to_string();
        sel.gpu_count = 2;
        sel.add_storage("block").unwrap();
        sel.billing_cycle = BillingCycle::Monthly;
        let quote = PriceBreakdown::quote(&sel).unwrap();
        // 25.85 * 720 * 0.90
        assert_eq!(quote.total, 16_750.80);
    }

    #[test]
    fn test_daily_cycle() {
        assert_eq!(apply_billing_cycle(10.0, BillingCycle::Daily), 228.0);
        assert_eq!(apply_billing_cycle(10.0, BillingCycle::Hourly), 10.0);
    }

    #[test]
    fn test_existing_volume_costs_nothing() {
        let mut sel = base_selection();
        let idx = sel.add_storage("shared").unwrap();
        assert!(!sel.storage_items[idx].is_new_volume());
        assert_eq!(storage_cost(&sel.storage_items[idx]), 0.0);
    }

    #[test]
    fn test_new_shared_volume_rated_by_media() {
        let mut sel = base_selection();
        let idx = sel.add_storage("shared").unwrap();
        sel.toggle_volume_source(idx);
        sel.set_volume_size_text(idx, "100");
        assert_eq!(storage_cost(&sel.storage_items[idx]), 0.5);
        sel.toggle_volume_media(idx);
        assert_eq!(sel.storage_items[idx].media(), DiskMedia::Hdd);
        assert_eq!(storage_cost(&sel.storage_items[idx]), 0.4);
    }

    #[test]
    fn test_free_categories_cost_nothing() {
        let mut sel = base_selection();
        let net = sel.add_storage("netdisk").unwrap();
        let local = sel.add_storage("local").unwrap();
        assert_eq!(storage_cost(&sel.storage_items[net]), 0.0);
        assert_eq!(storage_cost(&sel.storage_items[local]), 0.0);
    }

    #[test]
    fn test_instance_count_multiplies_before_cycle() {
        let mut sel = base_selection();
        sel.gpu_id = "4090".to_string();
        sel.instance_count = 3;
        sel.billing_cycle = BillingCycle::Daily;
        let quote = PriceBreakdown::quote(&sel).unwrap();
        // 2.50 * 3 * 24 * 0.95
        assert_eq!(quote.total, 171.0);
    }

    #[test]
    fn test_unknown_gpu_is_an_error() {
        let mut sel = base_selection();
        sel.gpu_id = "b200".to_string();
        assert!(matches!(
            PriceBreakdown::quote(&sel),
            Err(Error::UnknownGpu(_))
        ));
    }

    #[test]
    fn test_quote_every_catalog_gpu() {
        for gpu in catalog::GPU_SPECS {
            for &count in catalog::GPU_COUNT_CHOICES {
                let mut sel = base_selection();
                sel.gpu_id = gpu.id.to_string();
                sel.gpu_count = count;
                let quote = PriceBreakdown::quote(&sel).unwrap();
                assert_eq!(quote.gpu_hourly, round2(gpu.hourly_price * count as f64));
            }
        }
    }
}
