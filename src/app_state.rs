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

use chrono::{Local, NaiveDate};

use crate::cli::StartView;
use crate::deploy::{AvailabilityGate, DeploymentSelection};
use crate::mock;
use crate::model::{ActivityEvent, Cluster, Instance, ResourcePool, ViewType};
use crate::ui::notification::NotificationManager;

/// Top-level console views, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Instances,
    Clusters,
    Pools,
    Deploy,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Dashboard,
        ViewKind::Instances,
        ViewKind::Clusters,
        ViewKind::Pools,
        ViewKind::Deploy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Dashboard => "Dashboard",
            ViewKind::Instances => "Instances",
            ViewKind::Clusters => "Clusters",
            ViewKind::Pools => "Pools",
            ViewKind::Deploy => "Deploy",
        }
    }

    pub fn next(&self) -> ViewKind {
        let pos = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl From<StartView> for ViewKind {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Dashboard => ViewKind::Dashboard,
            StartView::Instances => ViewKind::Instances,
            StartView::Clusters => ViewKind::Clusters,
            StartView::Pools => ViewKind::Pools,
            StartView::Deploy => ViewKind::Deploy,
        }
    }
}

/// Local state of the instance list view.
#[derive(Clone, Debug)]
pub struct InstancesViewState {
    pub search: String,
    pub search_active: bool,
    pub selected: usize,
    pub view_type: ViewType,
}

impl InstancesViewState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            search_active: false,
            selected: 0,
            view_type: ViewType::List,
        }
    }
}

/// Local state of the cluster view; `detail` holds the index of the
/// cluster whose node inventory is open.
#[derive(Clone, Debug)]
pub struct ClustersViewState {
    pub selected: usize,
    pub detail: Option<usize>,
}

impl ClustersViewState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            detail: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PoolsViewState {
    pub selected: usize,
}

impl PoolsViewState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

/// Fields of the deployment form, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployField {
    Partition,
    Gpu,
    GpuCount,
    Driver,
    ImageCategory,
    Image,
    ImageVersion,
    Storage,
    Billing,
    InstanceCount,
    Namespace,
    Cluster,
}

impl DeployField {
    pub const ALL: [DeployField; 12] = [
        DeployField::Partition,
        DeployField::Gpu,
        DeployField::GpuCount,
        DeployField::Driver,
        DeployField::ImageCategory,
        DeployField::Image,
        DeployField::ImageVersion,
        DeployField::Storage,
        DeployField::Billing,
        DeployField::InstanceCount,
        DeployField::Namespace,
        DeployField::Cluster,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeployField::Partition => "Partition",
            DeployField::Gpu => "GPU spec",
            DeployField::GpuCount => "GPU count",
            DeployField::Driver => "Driver",
            DeployField::ImageCategory => "Image category",
            DeployField::Image => "Image",
            DeployField::ImageVersion => "Image version",
            DeployField::Storage => "Data disks",
            DeployField::Billing => "Billing cycle",
            DeployField::InstanceCount => "Instance count",
            DeployField::Namespace => "Namespace",
            DeployField::Cluster => "Cluster",
        }
    }

    pub fn next(&self) -> DeployField {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> DeployField {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a free-text edit session is writing into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Namespace,
    InstanceCount,
    MountPath(usize),
    VolumeSize(usize),
    VolumeName(usize),
}

/// An in-progress free-text edit. Committed on Enter, abandoned on Esc.
#[derive(Clone, Debug)]
pub struct EditBuffer {
    pub target: EditTarget,
    pub text: String,
}

/// Local state of the deployment form view.
#[derive(Clone, Debug)]
pub struct DeployState {
    pub selection: DeploymentSelection,
    pub gate: AvailabilityGate,
    pub focus: DeployField,
    /// Cursor into `selection.storage_items` when the disk list has focus.
    pub storage_cursor: usize,
    /// Cursor into the storage-type picker, when it is open.
    pub storage_picker: Option<usize>,
    pub editing: Option<EditBuffer>,
}

impl DeployState {
    pub fn new() -> Self {
        Self {
            selection: DeploymentSelection::default(),
            gate: AvailabilityGate::new(),
            focus: DeployField::Partition,
            storage_cursor: 0,
            storage_picker: None,
            editing: None,
        }
    }

    pub fn clamp_storage_cursor(&mut self) {
        let len = self.selection.storage_items.len();
        if len == 0 {
            self.storage_cursor = 0;
        } else if self.storage_cursor >= len {
            self.storage_cursor = len - 1;
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub view: ViewKind,
    pub instances: Vec<Instance>,
    pub clusters: Vec<Cluster>,
    pub pools: Vec<ResourcePool>,
    pub activity: Vec<ActivityEvent>,
    pub balance_yuan: f64,
    pub daily_api_calls: u64,
    pub today: NaiveDate,
    pub instances_view: InstancesViewState,
    pub clusters_view: ClustersViewState,
    pub pools_view: PoolsViewState,
    pub deploy: DeployState,
    pub notifications: NotificationManager,
    pub show_help: bool,
    pub frame_counter: u64,
}

impl AppState {
    pub fn new(start_view: ViewKind) -> Self {
        AppState {
            view: start_view,
            instances: mock::sample_instances(),
            clusters: mock::sample_clusters(),
            pools: mock::sample_pools(),
            activity: mock::sample_activity(),
            balance_yuan: mock::ACCOUNT_BALANCE_YUAN,
            daily_api_calls: mock::DAILY_API_CALLS,
            today: Local::now().date_naive(),
            instances_view: InstancesViewState::new(),
            clusters_view: ClustersViewState::new(),
            pools_view: PoolsViewState::new(),
            deploy: DeployState::new(),
            notifications: NotificationManager::new(),
            show_help: false,
            frame_counter: 0,
        }
    }

    /// Instances passing the current search filter, with their original
    /// indices for selection bookkeeping.
    pub fn filtered_instances(&self) -> Vec<(usize, &Instance)> {
        self.instances
            .iter()
            .enumerate()
            .filter(|(_, i)| i.matches(&self.instances_view.search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle_wraps() {
        let mut view = ViewKind::Dashboard;
        for _ in 0..ViewKind::ALL.len() {
            view = view.next();
        }
        assert_eq!(view, ViewKind::Dashboard);
    }

    #[test]
    fn test_deploy_field_prev_next_inverse() {
        for field in DeployField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_filtered_instances() {
        let mut state = AppState::new(ViewKind::Instances);
        assert_eq!(state.filtered_instances().len(), 3);
        state.instances_view.search = "llm".to_string();
        let filtered = state.filtered_instances();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].1.id, "ins-99212");
    }

    #[test]
    fn test_storage_cursor_clamped() {
        let mut deploy = DeployState::new();
        deploy.storage_cursor = 5;
        deploy.clamp_storage_cursor();
        assert_eq!(deploy.storage_cursor, 0);

        deploy.selection.add_storage("block");
        deploy.selection.add_storage("block");
        deploy.storage_cursor = 5;
        deploy.clamp_storage_cursor();
        assert_eq!(deploy.storage_cursor, 1);
    }
}
