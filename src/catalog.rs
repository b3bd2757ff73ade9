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

//! Static service catalog: GPU specs, storage types, images, partitions.
//!
//! In a production deployment these tables come from the control-plane API;
//! the console only assumes records matching these shapes. Everything here
//! is immutable reference data.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A GPU hardware offering. Prices are per card and per hour.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GpuSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub vram_gb: u32,
    pub cores: u32,
    pub ram_gb: u32,
    pub hourly_price: f64,
    /// Partitions this spec can be deployed in, in preference order.
    pub available_partitions: &'static [&'static str],
}

impl GpuSpec {
    pub fn available_in(&self, partition_id: &str) -> bool {
        self.available_partitions.contains(&partition_id)
    }

    /// CPU cores scaled by the number of cards in the selection.
    pub fn scaled_cores(&self, gpu_count: u32) -> u32 {
        self.cores * gpu_count
    }

    /// System RAM scaled by the number of cards in the selection.
    pub fn scaled_ram_gb(&self, gpu_count: u32) -> u32 {
        self.ram_gb * gpu_count
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StorageCategory {
    Block,
    Shared,
    Network,
    Local,
}

/// A mountable storage offering. `unit_price_per_gb_hour` applies to newly
/// provisioned capacity; shared storage is instead rated per media class
/// (see [`shared_rate`]).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StorageType {
    pub id: &'static str,
    pub name: &'static str,
    pub category: StorageCategory,
    pub unit_price_per_gb_hour: f64,
    pub description: &'static str,
}

/// Media class for shared volumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiskMedia {
    Ssd,
    Hdd,
}

impl DiskMedia {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskMedia::Ssd => "SSD",
            DiskMedia::Hdd => "HDD",
        }
    }

    pub fn toggled(&self) -> DiskMedia {
        match self {
            DiskMedia::Ssd => DiskMedia::Hdd,
            DiskMedia::Hdd => DiskMedia::Ssd,
        }
    }
}

/// A shared volume that already exists in the account and can be attached
/// instead of provisioning new capacity.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SharedVolume {
    pub id: &'static str,
    pub name: &'static str,
    pub media: DiskMedia,
    pub size_gb: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ImageCategory {
    Official,
    Preinstalled,
    Community,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 3] = [
        ImageCategory::Official,
        ImageCategory::Preinstalled,
        ImageCategory::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImageCategory::Official => "Base",
            ImageCategory::Preinstalled => "Deep Learning",
            ImageCategory::Community => "Community",
        }
    }
}

/// A bootable image template.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ImageSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ImageCategory,
    pub versions: &'static [&'static str],
    pub downloads: &'static str,
    pub size: &'static str,
    pub author: Option<&'static str>,
}

/// A resource partition (region-level grouping) gating GPU availability.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Partition {
    pub id: &'static str,
    pub name: &'static str,
    pub note: &'static str,
}

pub static GPU_SPECS: &[GpuSpec] = &[
    GpuSpec {
        id: "h100",
        name: "NVIDIA H100",
        vram_gb: 80,
        cores: 96,
        ram_gb: 512,
        hourly_price: 28.50,
        available_partitions: &["hb1", "hb2"],
    },
    GpuSpec {
        id: "a100",
        name: "NVIDIA A100",
        vram_gb: 80,
        cores: 12,
        ram_gb: 64,
        hourly_price: 12.80,
        available_partitions: &["hb1", "hb2"],
    },
    GpuSpec {
        id: "4090",
        name: "NVIDIA RTX 4090",
        vram_gb: 24,
        cores: 8,
        ram_gb: 32,
        hourly_price: 2.50,
        available_partitions: &["hb1", "hd1"],
    },
    GpuSpec {
        id: "4090d",
        name: "NVIDIA RTX 4090D",
        vram_gb: 24,
        cores: 8,
        ram_gb: 32,
        hourly_price: 2.20,
        available_partitions: &["hb1"],
    },
    GpuSpec {
        id: "cpu",
        name: "Intel Xeon Platinum",
        vram_gb: 0,
        cores: 16,
        ram_gb: 64,
        hourly_price: 0.85,
        available_partitions: &["hb1"],
    },
];

pub static STORAGE_TYPES: &[StorageType] = &[
    StorageType {
        id: "block",
        name: "Cloud Disk (Block)",
        category: StorageCategory::Block,
        unit_price_per_gb_hour: 0.005,
        description: "Persistent block storage with snapshot support",
    },
    StorageType {
        id: "shared",
        name: "Shared Storage (NAS)",
        category: StorageCategory::Shared,
        unit_price_per_gb_hour: 0.0,
        description: "Shared file storage, mountable by multiple instances",
    },
    StorageType {
        id: "netdisk",
        name: "Netdisk Sync",
        category: StorageCategory::Network,
        unit_price_per_gb_hour: 0.0,
        description: "Direct netdisk mount for model and dataset sync",
    },
    StorageType {
        id: "local",
        name: "Local NVMe",
        category: StorageCategory::Local,
        unit_price_per_gb_hour: 0.0,
        description: "Host-attached NVMe scratch disk, wiped on release",
    },
];

/// Hourly per-GB rates for newly provisioned shared storage.
pub const SHARED_SSD_RATE: f64 = 0.005;
pub const SHARED_HDD_RATE: f64 = 0.004;

pub fn shared_rate(media: DiskMedia) -> f64 {
    match media {
        DiskMedia::Ssd => SHARED_SSD_RATE,
        DiskMedia::Hdd => SHARED_HDD_RATE,
    }
}

pub static SHARED_VOLUMES: &[SharedVolume] = &[
    SharedVolume {
        id: "vol-sh-881",
        name: "Shared-SSD-ClusterA",
        media: DiskMedia::Ssd,
        size_gb: 1024,
    },
    SharedVolume {
        id: "vol-sh-992",
        name: "Model-Weights-Mirror",
        media: DiskMedia::Hdd,
        size_gb: 512,
    },
];

pub static IMAGES: &[ImageSpec] = &[
    ImageSpec {
        id: "u22",
        name: "Ubuntu 22.04 LTS",
        category: ImageCategory::Official,
        versions: &["22.04.4", "22.04.3"],
        downloads: "1.2M",
        size: "2.1GB",
        author: None,
    },
    ImageSpec {
        id: "u20",
        name: "Ubuntu 20.04 LTS",
        category: ImageCategory::Official,
        versions: &["20.04.6"],
        downloads: "800K",
        size: "1.8GB",
        author: None,
    },
    ImageSpec {
        id: "pt21",
        name: "PyTorch 2.1.0",
        category: ImageCategory::Preinstalled,
        versions: &["cuda12.1-py310", "cuda11.8-py39"],
        downloads: "450K",
        size: "12.4GB",
        author: None,
    },
    ImageSpec {
        id: "tf215",
        name: "TensorFlow 2.15",
        category: ImageCategory::Preinstalled,
        versions: &["cuda11.8-py39"],
        downloads: "210K",
        size: "10.2GB",
        author: None,
    },
    ImageSpec {
        id: "sd-xl",
        name: "Stable Diffusion XL 1.0",
        category: ImageCategory::Community,
        versions: &["webui-1.8", "comfyui-0.3"],
        downloads: "15K",
        size: "18.5GB",
        author: Some("Akiba"),
    },
    ImageSpec {
        id: "llama3",
        name: "Llama-3-70B-Chat",
        category: ImageCategory::Community,
        versions: &["int4-ollama"],
        downloads: "8K",
        size: "42GB",
        author: Some("Llama-Family"),
    },
];

pub static PARTITIONS: &[Partition] = &[
    Partition {
        id: "hb1",
        name: "North China 1",
        note: "Recommended",
    },
    Partition {
        id: "hb2",
        name: "North China 2",
        note: "A800 zone",
    },
    Partition {
        id: "hd1",
        name: "East China 1",
        note: "RTX 4090 zone",
    },
];

pub static DRIVER_VERSIONS: &[&str] = &["550.54.15", "535.161.08", "470.239.06"];

/// Kubernetes clusters offered in the deployment form's advanced settings.
pub static CLUSTER_CHOICES: &[(&str, &str)] = &[
    ("c-sh-01", "SH-Fast-H100-Auto-Scaling-01"),
    ("c-bj-01", "BJ-North-Cluster-GPU-30"),
];

/// Card counts offered by the deployment form.
pub static GPU_COUNT_CHOICES: &[u32] = &[1, 2, 3, 4, 8];

static GPU_INDEX: Lazy<HashMap<&'static str, &'static GpuSpec>> =
    Lazy::new(|| GPU_SPECS.iter().map(|g| (g.id, g)).collect());

static STORAGE_INDEX: Lazy<HashMap<&'static str, &'static StorageType>> =
    Lazy::new(|| STORAGE_TYPES.iter().map(|s| (s.id, s)).collect());

pub fn gpu(id: &str) -> Option<&'static GpuSpec> {
    GPU_INDEX.get(id).copied()
}

pub fn storage_type(id: &str) -> Option<&'static StorageType> {
    STORAGE_INDEX.get(id).copied()
}

pub fn partition(id: &str) -> Option<&'static Partition> {
    PARTITIONS.iter().find(|p| p.id == id)
}

pub fn image(id: &str) -> Option<&'static ImageSpec> {
    IMAGES.iter().find(|i| i.id == id)
}

pub fn images_in(category: ImageCategory) -> impl Iterator<Item = &'static ImageSpec> {
    IMAGES.iter().filter(move |i| i.category == category)
}

pub fn shared_volume(id: &str) -> Option<&'static SharedVolume> {
    SHARED_VOLUMES.iter().find(|v| v.id == id)
}
