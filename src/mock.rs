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

//! Sample account data backing the console views.
//!
//! Everything here stands in for control-plane responses. Records are built
//! once at startup; node utilization figures are randomized so the cluster
//! detail view does not look frozen.

use chrono::NaiveDate;
use rand::{rng, Rng};

use crate::model::{
    ActivityEvent, Cluster, ClusterNode, ClusterStatus, Instance, InstanceStatus, NodeStatus,
    PoolStatus, ResourcePool,
};

fn make_nodes(prefix: &str, count: u32, gpu_type: &str) -> Vec<ClusterNode> {
    let mut r = rng();
    (0..count)
        .map(|i| ClusterNode {
            id: format!("node-{prefix}-{i}"),
            name: format!("{prefix}-node-{:02}", i + 1),
            ip: format!("192.168.1.{}", 10 + i),
            gpu_type: gpu_type.to_string(),
            gpu_count: 8,
            cpu_usage: r.random_range(10..50) as f64,
            gpu_usage: r.random_range(20..80) as f64,
            status: if r.random::<f64>() > 0.1 {
                NodeStatus::Online
            } else {
                NodeStatus::Maintenance
            },
        })
        .collect()
}

pub fn sample_clusters() -> Vec<Cluster> {
    vec![
        Cluster {
            id: "c-hb1".to_string(),
            name: "NorthChina1-Default".to_string(),
            region: "North China 1".to_string(),
            nodes: 12,
            total_gpu: 96,
            used_gpu: 64,
            status: ClusterStatus::Healthy,
            node_details: make_nodes("hb1", 6, "NVIDIA A100"),
        },
        Cluster {
            id: "c-hb2".to_string(),
            name: "NorthChina2-Dedicated".to_string(),
            region: "North China 2".to_string(),
            nodes: 8,
            total_gpu: 32,
            used_gpu: 30,
            status: ClusterStatus::Warning,
            node_details: make_nodes("hb2", 4, "NVIDIA H100"),
        },
        Cluster {
            id: "c-nw1".to_string(),
            name: "NorthWest1-Edge".to_string(),
            region: "North West 1".to_string(),
            nodes: 4,
            total_gpu: 16,
            used_gpu: 2,
            status: ClusterStatus::Healthy,
            node_details: make_nodes("nw1", 2, "NVIDIA H100"),
        },
    ]
}

pub fn sample_instances() -> Vec<Instance> {
    vec![
        Instance {
            id: "ins-82731".to_string(),
            name: "Stable-Diffusion-WebUI".to_string(),
            specs: "NVIDIA A100 80GB x 1".to_string(),
            image: "Ubuntu 22.04 / CUDA 12.1".to_string(),
            billing_type: "Pay-as-you-go".to_string(),
            cpu: "12 cores".to_string(),
            memory: "64 GB".to_string(),
            gpu: "A100 (80G)".to_string(),
            status: InstanceStatus::Running,
            cluster: "NorthChina1-Default".to_string(),
            create_time: "2024-05-20 14:22".to_string(),
        },
        Instance {
            id: "ins-99212".to_string(),
            name: "LLM-Training-Task".to_string(),
            specs: "NVIDIA H100 80GB x 8".to_string(),
            image: "PyTorch 2.1.0 / Python 3.10".to_string(),
            billing_type: "Pay-as-you-go".to_string(),
            cpu: "96 cores".to_string(),
            memory: "512 GB".to_string(),
            gpu: "H100 x 8".to_string(),
            status: InstanceStatus::Starting,
            cluster: "NorthChina2-Dedicated".to_string(),
            create_time: "2024-05-21 09:15".to_string(),
        },
        Instance {
            id: "ins-11203".to_string(),
            name: "Jupyter-Notebook-Dev".to_string(),
            specs: "NVIDIA RTX 4090 x 1".to_string(),
            image: "Deep Learning Base".to_string(),
            billing_type: "Pay-as-you-go".to_string(),
            cpu: "8 cores".to_string(),
            memory: "32 GB".to_string(),
            gpu: "RTX 4090".to_string(),
            status: InstanceStatus::Stopped,
            cluster: "NorthChina1-Default".to_string(),
            create_time: "2024-05-18 11:45".to_string(),
        },
    ]
}

pub fn sample_pools() -> Vec<ResourcePool> {
    vec![
        ResourcePool {
            id: "pool-hb1-h100-4".to_string(),
            name: "NorthChina1-H100-Dedicated".to_string(),
            region: "North China 1".to_string(),
            gpu_type: "NVIDIA H100".to_string(),
            total_cards: 4,
            used_cards: 1,
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
            status: PoolStatus::Healthy,
        },
        ResourcePool {
            id: "pool-hd1-a100-8".to_string(),
            name: "EastChina1-A100-Dedicated".to_string(),
            region: "East China 1".to_string(),
            gpu_type: "NVIDIA A100".to_string(),
            total_cards: 8,
            used_cards: 8,
            expiry_date: NaiveDate::from_ymd_opt(2024, 11, 15).expect("valid date"),
            status: PoolStatus::Warning,
        },
    ]
}

pub fn sample_activity() -> Vec<ActivityEvent> {
    vec![
        ActivityEvent {
            title: "Instance created".to_string(),
            detail: "Stable-Diffusion-WebUI is up".to_string(),
            when: "10 min ago".to_string(),
        },
        ActivityEvent {
            title: "API key issued".to_string(),
            detail: "Production key delivered".to_string(),
            when: "2 h ago".to_string(),
        },
        ActivityEvent {
            title: "Resource alert".to_string(),
            detail: "NorthChina2 GPU load above 90%".to_string(),
            when: "5 h ago".to_string(),
        },
    ]
}

/// Account balance shown on the dashboard.
pub const ACCOUNT_BALANCE_YUAN: f64 = 12_850.42;

/// Inference-call counter shown on the dashboard.
pub const DAILY_API_CALLS: u64 = 42_800;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_node_counts() {
        let clusters = sample_clusters();
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].node_details.len(), 6);
        assert_eq!(clusters[1].node_details.len(), 4);
        assert_eq!(clusters[2].node_details.len(), 2);
    }

    #[test]
    fn test_node_usage_in_range() {
        for cluster in sample_clusters() {
            for node in &cluster.node_details {
                assert!((10.0..50.0).contains(&node.cpu_usage));
                assert!((20.0..80.0).contains(&node.gpu_usage));
            }
        }
    }

    #[test]
    fn test_used_never_exceeds_total() {
        for cluster in sample_clusters() {
            assert!(cluster.used_gpu <= cluster.total_gpu);
        }
        for pool in sample_pools() {
            assert!(pool.used_cards <= pool.total_cards);
        }
    }
}
