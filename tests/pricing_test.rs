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

//! End-to-end pricing checks against the published rate card.

use ebcon::catalog;
use ebcon::deploy::pricing::{apply_billing_cycle, storage_cost};
use ebcon::deploy::{BillingCycle, DeploymentSelection, PriceBreakdown};
use ebcon::utils::format_yuan;

#[test]
fn test_two_a100_with_block_disk_quote() {
    let mut selection = DeploymentSelection::default();
    selection.gpu_id = "a100".to_string();
    selection.gpu_count = 2;
    selection.add_storage("block").expect("block is a known type");

    let quote = PriceBreakdown::quote(&selection).expect("quotable");
    assert_eq!(format_yuan(quote.total), "¥25.85");

    selection.billing_cycle = BillingCycle::Monthly;
    let monthly = PriceBreakdown::quote(&selection).expect("quotable");
    assert_eq!(format_yuan(monthly.total), "¥16,750.80");
}

#[test]
fn test_attached_shared_volume_is_free() {
    let mut selection = DeploymentSelection::default();
    let index = selection.add_storage("shared").expect("shared is a known type");
    assert_eq!(storage_cost(&selection.storage_items[index]), 0.0);

    let with_volume = PriceBreakdown::quote(&selection).unwrap();

    selection.remove_storage(index);
    let without_volume = PriceBreakdown::quote(&selection).unwrap();
    assert_eq!(with_volume.total, without_volume.total);
}

#[test]
fn test_new_shared_capacity_rated_by_media() {
    let mut selection = DeploymentSelection::default();
    let index = selection.add_storage("shared").unwrap();
    selection.toggle_volume_source(index);
    selection.set_volume_size_text(index, "1000");

    // SSD first, then HDD after the media toggle.
    assert_eq!(storage_cost(&selection.storage_items[index]), 5.0);
    selection.toggle_volume_media(index);
    assert_eq!(storage_cost(&selection.storage_items[index]), 4.0);
}

#[test]
fn test_cycle_conversion_factors() {
    // The factors are float products; compare against the same arithmetic
    // rather than decimal literals.
    assert_eq!(apply_billing_cycle(1.0, BillingCycle::Hourly), 1.0);
    assert_eq!(apply_billing_cycle(1.0, BillingCycle::Daily), 24.0 * 0.95);
    assert_eq!(apply_billing_cycle(1.0, BillingCycle::Monthly), 720.0 * 0.90);
}

#[test]
fn test_instance_count_scales_linearly() {
    let mut selection = DeploymentSelection::default();
    selection.gpu_id = "h100".to_string();
    selection.gpu_count = 8;

    let single = PriceBreakdown::quote(&selection).unwrap();
    selection.instance_count = 10;
    let ten = PriceBreakdown::quote(&selection).unwrap();
    assert_eq!(ten.total, single.total * 10.0);
}

#[test]
fn test_quote_serializes_to_json() {
    let selection = DeploymentSelection::default();
    let quote = PriceBreakdown::quote(&selection).unwrap();
    let value = serde_json::to_value(&quote).unwrap();
    assert_eq!(value["gpu_id"], "a100");
    assert_eq!(value["total"], 12.80);
    assert_eq!(value["billing_cycle"], "Hourly");
}

#[test]
fn test_rate_card_matches_catalog() {
    // The quote's GPU line must always mirror the catalog price.
    for gpu in catalog::GPU_SPECS {
        let mut selection = DeploymentSelection::default();
        selection.partition_id = gpu.available_partitions[0].to_string();
        selection.gpu_id = gpu.id.to_string();
        let quote = PriceBreakdown::quote(&selection).unwrap();
        assert_eq!(quote.gpu_hourly, gpu.hourly_price);
        assert_eq!(quote.total, quote.per_instance_hourly);
    }
}
