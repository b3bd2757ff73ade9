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

//! The user's in-progress deployment configuration.

use serde::Serialize;

use crate::catalog::{self, DiskMedia, ImageCategory, StorageCategory};
use crate::deploy::mount;

/// Billing tier applied to the hourly base price. Multipliers and discounts
/// are display constants, not a pricing service contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BillingCycle {
    Hourly,
    Daily,
    Monthly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Hourly,
        BillingCycle::Daily,
        BillingCycle::Monthly,
    ];

    /// Hours billed per cycle unit.
    pub fn multiplier(&self) -> f64 {
        match self {
            BillingCycle::Hourly => 1.0,
            BillingCycle::Daily => 24.0,
            BillingCycle::Monthly => 720.0,
        }
    }

    /// Commitment discount factor.
    pub fn discount(&self) -> f64 {
        match self {
            BillingCycle::Hourly => 1.0,
            BillingCycle::Daily => 0.95,
            BillingCycle::Monthly => 0.90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Hourly => "Hourly",
            BillingCycle::Daily => "Daily",
            BillingCycle::Monthly => "Monthly",
        }
    }

    /// Unit suffix for price display, e.g. "/h".
    pub fn unit(&self) -> &'static str {
        match self {
            BillingCycle::Hourly => "/h",
            BillingCycle::Daily => "/day",
            BillingCycle::Monthly => "/mo",
        }
    }

    pub fn next(&self) -> BillingCycle {
        match self {
            BillingCycle::Hourly => BillingCycle::Daily,
            BillingCycle::Daily => BillingCycle::Monthly,
            BillingCycle::Monthly => BillingCycle::Hourly,
        }
    }
}

/// Where a storage item's capacity comes from. New volumes are billable;
/// attaching an existing volume costs nothing extra. The two cases carry
/// only the fields that are editable for them: an existing volume's size
/// and media are fixed by the volume itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum VolumeSource {
    New {
        name: String,
        size_gb: u64,
        media: DiskMedia,
    },
    Existing {
        volume_id: String,
        name: String,
        size_gb: u64,
        media: DiskMedia,
    },
}

/// One mounted data disk in the deployment configuration.
#[derive(Clone, Debug, Serialize)]
pub struct StorageItem {
    pub id: u32,
    pub type_id: String,
    pub mount_path: String,
    pub volume: VolumeSource,
}

impl StorageItem {
    pub fn is_new_volume(&self) -> bool {
        matches!(self.volume, VolumeSource::New { .. })
    }

    pub fn size_gb(&self) -> u64 {
        match &self.volume {
            VolumeSource::New { size_gb, .. } => *size_gb,
            VolumeSource::Existing { size_gb, .. } => *size_gb,
        }
    }

    pub fn media(&self) -> DiskMedia {
        match &self.volume {
            VolumeSource::New { media, .. } => *media,
            VolumeSource::Existing { media, .. } => *media,
        }
    }

    pub fn display_name(&self) -> &str {
        match &self.volume {
            VolumeSource::New { name, .. } => name,
            VolumeSource::Existing { name, .. } => name,
        }
    }
}

/// Everything the user has chosen in the deployment form.
#[derive(Clone, Debug, Serialize)]
pub struct DeploymentSelection {
    pub partition_id: String,
    pub gpu_id: String,
    pub gpu_count: u32,
    pub driver_version: String,
    pub image_category: ImageCategory,
    pub image_id: String,
    pub image_version: String,
    pub storage_items: Vec<StorageItem>,
    pub billing_cycle: BillingCycle,
    pub instance_count: u32,
    pub namespace: String,
    pub cluster_id: String,
    #[serde(skip)]
    next_item_id: u32,
}

impl Default for DeploymentSelection {
    fn default() -> Self {
        Self {
            partition_id: "hb1".to_string(),
            gpu_id: "a100".to_string(),
            gpu_count: 1,
            driver_version: catalog::DRIVER_VERSIONS[0].to_string(),
            image_category: ImageCategory::Preinstalled,
            image_id: "pt21".to_string(),
            image_version: "cuda12.1-py310".to_string(),
            storage_items: Vec::new(),
            billing_cycle: BillingCycle::Hourly,
            instance_count: 1,
            namespace: "default".to_string(),
            cluster_id: catalog::CLUSTER_CHOICES[0].0.to_string(),
            next_item_id: 1,
        }
    }
}

impl DeploymentSelection {
    pub fn gpu(&self) -> Option<&'static catalog::GpuSpec> {
        catalog::gpu(&self.gpu_id)
    }

    pub fn mount_paths(&self) -> Vec<String> {
        self.storage_items
            .iter()
            .map(|s| s.mount_path.clone())
            .collect()
    }

    /// Adds a data disk of the given type with a collision-free mount path.
    ///
    /// Shared storage starts out attached to the first existing volume in
    /// the account (switching to a new volume is an explicit user action);
    /// everything else starts as a new 50GB SSD volume. Returns the index
    /// of the new item, or None for an unknown type id.
    pub fn add_storage(&mut self, type_id: &str) -> Option<usize> {
        let ty = catalog::storage_type(type_id)?;
        let paths = self.mount_paths();
        let mount_path = mount::next_mount_path(&paths);

        let volume = if ty.category == StorageCategory::Shared {
            let vol = catalog::SHARED_VOLUMES[0];
            VolumeSource::Existing {
                volume_id: vol.id.to_string(),
                name: vol.name.to_string(),
                size_gb: vol.size_gb,
                media: vol.media,
            }
        } else {
            VolumeSource::New {
                name: ty.name.split(" (").next().unwrap_or(ty.name).to_string(),
                size_gb: crate::common::config::AppConfig::DEFAULT_BLOCK_DISK_GB,
                media: DiskMedia::Ssd,
            }
        };

        let item = StorageItem {
            id: self.next_item_id,
            type_id: ty.id.to_string(),
            mount_path,
            volume,
        };
        self.next_item_id += 1;
        self.storage_items.push(item);
        Some(self.storage_items.len() - 1)
    }

    pub fn remove_storage(&mut self, index: usize) {
        if index < self.storage_items.len() {
            self.storage_items.remove(index);
        }
    }

    /// Flips a shared item between "attach existing" and "create new".
    /// Items of other types only support new volumes, so this is a no-op
    /// for them.
    pub fn toggle_volume_source(&mut self, index: usize) {
        let Some(item) = self.storage_items.get_mut(index) else {
            return;
        };
        let shared = catalog::storage_type(&item.type_id)
            .map(|t| t.category == StorageCategory::Shared)
            .unwrap_or(false);
        if !shared {
            return;
        }
        item.volume = match &item.volume {
            VolumeSource::Existing { .. } => VolumeSource::New {
                name: "New-Shared-Volume".to_string(),
                size_gb: crate::common::config::AppConfig::DEFAULT_BLOCK_DISK_GB,
                media: DiskMedia::Ssd,
            },
            VolumeSource::New { .. } => {
                let vol = catalog::SHARED_VOLUMES[0];
                VolumeSource::Existing {
                    volume_id: vol.id.to_string(),
                    name: vol.name.to_string(),
                    size_gb: vol.size_gb,
                    media: vol.media,
                }
            }
        };
    }

    /// Steps an attached item to the next existing volume in the account.
    pub fn cycle_existing_volume(&mut self, index: usize) {
        let Some(item) = self.storage_items.get_mut(index) else {
            return;
        };
        if let VolumeSource::Existing { volume_id, .. } = &item.volume {
            let vols = catalog::SHARED_VOLUMES;
            let pos = vols.iter().position(|v| v.id == *volume_id).unwrap_or(0);
            let vol = vols[(pos + 1) % vols.len()];
            item.volume = VolumeSource::Existing {
                volume_id: vol.id.to_string(),
                name: vol.name.to_string(),
                size_gb: vol.size_gb,
                media: vol.media,
            };
        }
    }

    /// Sets the size of a new volume from free-text input. Invalid numbers
    /// coerce to 0 rather than erroring (form fields never hard-fail).
    pub fn set_volume_size_text(&mut self, index: usize, text: &str) {
        let size = text.trim().parse::<u64>().unwrap_or(0);
        if let Some(item) = self.storage_items.get_mut(index) {
            if let VolumeSource::New { size_gb, .. } = &mut item.volume {
                *size_gb = size;
            }
        }
    }

    pub fn adjust_volume_size(&mut self, index: usize, delta_gb: i64) {
        if let Some(item) = self.storage_items.get_mut(index) {
            if let VolumeSource::New { size_gb, .. } = &mut item.volume {
                *size_gb = size_gb.saturating_add_signed(delta_gb);
            }
        }
    }

    pub fn toggle_volume_media(&mut self, index: usize) {
        if let Some(item) = self.storage_items.get_mut(index) {
            if let VolumeSource::New { media, .. } = &mut item.volume {
                *media = media.toggled();
            }
        }
    }

    pub fn set_mount_path(&mut self, index: usize, path: String) {
        if let Some(item) = self.storage_items.get_mut(index) {
            item.mount_path = path;
        }
    }

    pub fn set_volume_name(&mut self, index: usize, name: String) {
        if let Some(item) = self.storage_items.get_mut(index) {
            if let VolumeSource::New { name: n, .. } = &mut item.volume {
                *n = name;
            }
        }
    }

    pub fn cycle_gpu_count(&mut self) {
        let choices = catalog::GPU_COUNT_CHOICES;
        let pos = choices
            .iter()
            .position(|&c| c == self.gpu_count)
            .unwrap_or(0);
        self.gpu_count = choices[(pos + 1) % choices.len()];
    }

    pub fn cycle_driver_version(&mut self) {
        let versions = catalog::DRIVER_VERSIONS;
        let pos = versions
            .iter()
            .position(|&v| v == self.driver_version)
            .unwrap_or(0);
        self.driver_version = versions[(pos + 1) % versions.len()].to_string();
    }

    pub fn cycle_cluster(&mut self) {
        let choices = catalog::CLUSTER_CHOICES;
        let pos = choices
            .iter()
            .position(|&(id, _)| id == self.cluster_id)
            .unwrap_or(0);
        self.cluster_id = choices[(pos + 1) % choices.len()].0.to_string();
    }

    /// Switches image category and resets the image choice to the first
    /// entry of the new category.
    pub fn set_image_category(&mut self, category: ImageCategory) {
        self.image_category = category;
        if let Some(img) = catalog::images_in(category).next() {
            self.image_id = img.id.to_string();
            self.image_version = img.versions[0].to_string();
        }
    }

    pub fn select_image(&mut self, image_id: &str) {
        if let Some(img) = catalog::image(image_id) {
            self.image_category = img.category;
            self.image_id = img.id.to_string();
            self.image_version = img.versions[0].to_string();
        }
    }

    pub fn cycle_image_version(&mut self) {
        if let Some(img) = catalog::image(&self.image_id) {
            let pos = img
                .versions
                .iter()
                .position(|&v| v == self.image_version)
                .unwrap_or(0);
            self.image_version = img.versions[(pos + 1) % img.versions.len()].to_string();
        }
    }

    pub fn adjust_instance_count(&mut self, delta: i32) {
        let max = crate::common::config::AppConfig::MAX_INSTANCE_COUNT;
        let next = self.instance_count.saturating_add_signed(delta);
        self.instance_count = next.clamp(1, max);
    }

    /// Sets the instance count from free-text input, coercing invalid
    /// numbers to the minimum of 1.
    pub fn set_instance_count_text(&mut self, text: &str) {
        let max = crate::common::config::AppConfig::MAX_INSTANCE_COUNT;
        let n = text.trim().parse::<u32>().unwrap_or(0);
        self.instance_count = n.clamp(1, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_consistent() {
        let sel = DeploymentSelection::default();
        let gpu = sel.gpu().expect("default gpu exists");
        assert!(gpu.available_in(&sel.partition_id));
        assert_eq!(sel.instance_count, 1);
        assert_eq!(sel.billing_cycle, BillingCycle::Hourly);
    }

    #[test]
    fn test_add_storage_assigns_sequential_paths() {
        let mut sel = DeploymentSelection::default();
        sel.add_storage("block").unwrap();
        sel.add_storage("block").unwrap();
        assert_eq!(sel.storage_items[0].mount_path, "/root/data1");
        assert_eq!(sel.storage_items[1].mount_path, "/root/data2");
    }

    #[test]
    fn test_add_storage_unknown_type() {
        let mut sel = DeploymentSelection::default();
        assert!(sel.add_storage("tape").is_none());
        assert!(sel.storage_items.is_empty());
    }

    #[test]
    fn test_shared_defaults_to_existing_volume() {
        let mut sel = DeploymentSelection::default();
        let idx = sel.add_storage("shared").unwrap();
        let item = &sel.storage_items[idx];
        assert!(!item.is_new_volume());
        assert_eq!(item.size_gb(), 1024);
    }

    #[test]
    fn test_toggle_volume_source_only_for_shared() {
        let mut sel = DeploymentSelection::default();
        let block = sel.add_storage("block").unwrap();
        let shared = sel.add_storage("shared").unwrap();

        sel.toggle_volume_source(block);
        assert!(sel.storage_items[block].is_new_volume());

        sel.toggle_volume_source(shared);
        assert!(sel.storage_items[shared].is_new_volume());
        sel.toggle_volume_source(shared);
        assert!(!sel.storage_items[shared].is_new_volume());
    }

    #[test]
    fn test_size_text_coerces_garbage_to_zero() {
        let mut sel = DeploymentSelection::default();
        let idx = sel.add_storage("block").unwrap();
        sel.set_volume_size_text(idx, "abc");
        assert_eq!(sel.storage_items[idx].size_gb(), 0);
        sel.set_volume_size_text(idx, " 200 ");
        assert_eq!(sel.storage_items[idx].size_gb(), 200);
    }

    #[test]
    fn test_instance_count_clamped() {
        let mut sel = DeploymentSelection::default();
        sel.adjust_instance_count(-5);
        assert_eq!(sel.instance_count, 1);
        sel.set_instance_count_text("oops");
        assert_eq!(sel.instance_count, 1);
        sel.set_instance_count_text("9999");
        assert_eq!(
            sel.instance_count,
            crate::common::config::AppConfig::MAX_INSTANCE_COUNT
        );
    }

    #[test]
    fn test_gpu_count_cycles_through_choices() {
        let mut sel = DeploymentSelection::default();
        let mut seen = vec![sel.gpu_count];
        for _ in 0..4 {
            sel.cycle_gpu_count();
            seen.push(sel.gpu_count);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 8]);
        sel.cycle_gpu_count();
        assert_eq!(sel.gpu_count, 1);
    }

    #[test]
    fn test_image_category_switch_resets_image() {
        let mut sel = DeploymentSelection::default();
        sel.set_image_category(ImageCategory::Official);
        assert_eq!(sel.image_id, "u22");
        assert_eq!(sel.image_version, "22.04.4");
    }
}
