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

//! Record shapes shown in the console listings.
//!
//! These mirror what the control-plane API returns for instances, clusters
//! and resource pools. The console never mutates them beyond local UI state.

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceStatus {
    Running,
    Stopped,
    Starting,
    Error,
}

impl InstanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InstanceStatus::Running => "Running",
            InstanceStatus::Stopped => "Stopped",
            InstanceStatus::Starting => "Starting",
            InstanceStatus::Error => "Error",
        }
    }
}

/// A compute instance record.
#[derive(Clone, Debug)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub specs: String,
    pub image: String,
    pub billing_type: String,
    pub cpu: String,
    pub memory: String,
    pub gpu: String,
    pub status: InstanceStatus,
    pub cluster: String,
    pub create_time: String,
}

impl Instance {
    /// Case-insensitive match on name or id, used by the list search box.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.id.to_lowercase().contains(&term)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Offline,
    Maintenance,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Online => "Online",
            NodeStatus::Offline => "Offline",
            NodeStatus::Maintenance => "Maintenance",
        }
    }
}

/// A physical node inside a cluster.
#[derive(Clone, Debug)]
pub struct ClusterNode {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub gpu_type: String,
    pub gpu_count: u32,
    pub cpu_usage: f64,
    pub gpu_usage: f64,
    pub status: NodeStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterStatus {
    Healthy,
    Warning,
    Scaling,
}

impl ClusterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClusterStatus::Healthy => "Healthy",
            ClusterStatus::Warning => "Warning",
            ClusterStatus::Scaling => "Scaling",
        }
    }
}

/// A GPU cluster record with its node inventory.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub region: String,
    pub nodes: u32,
    pub total_gpu: u32,
    pub used_gpu: u32,
    pub status: ClusterStatus,
    pub node_details: Vec<ClusterNode>,
}

impl Cluster {
    pub fn usage_ratio(&self) -> f64 {
        if self.total_gpu == 0 {
            0.0
        } else {
            self.used_gpu as f64 / self.total_gpu as f64
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    Healthy,
    Warning,
    Expired,
}

impl PoolStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PoolStatus::Healthy => "Healthy",
            PoolStatus::Warning => "Warning",
            PoolStatus::Expired => "Expired",
        }
    }
}

/// A pre-purchased allocation of GPU cards with an expiry date.
#[derive(Clone, Debug)]
pub struct ResourcePool {
    pub id: String,
    pub name: String,
    pub region: String,
    pub gpu_type: String,
    pub total_cards: u32,
    pub used_cards: u32,
    pub expiry_date: NaiveDate,
    pub status: PoolStatus,
}

impl ResourcePool {
    /// Pools keep their reported status unless the expiry date has passed.
    pub fn effective_status(&self, today: NaiveDate) -> PoolStatus {
        if self.expiry_date < today {
            PoolStatus::Expired
        } else {
            self.status
        }
    }

    pub fn usage_ratio(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            self.used_cards as f64 / self.total_cards as f64
        }
    }
}

/// A recent-activity feed entry on the dashboard.
#[derive(Clone, Debug)]
pub struct ActivityEvent {
    pub title: String,
    pub detail: String,
    pub when: String,
}

/// List vs. card rendering for the instance view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewType {
    List,
    Card,
}
