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

//! Partition/GPU availability gating for the deployment form.
//!
//! Selecting a GPU that is not offered in the current partition must not
//! silently move the deployment elsewhere. The gate holds the request in
//! a pending state until the user confirms the partition switch or
//! cancels, leaving the selection untouched.

use crate::catalog;
use crate::deploy::selection::DeploymentSelection;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Normal,
    /// A GPU outside the current partition was requested; waiting on the
    /// user to confirm the switch.
    ConfirmingSwitch { gpu_id: String },
}

/// Result of a GPU selection attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// GPU was available in the current partition and is now selected.
    Selected,
    /// A partition switch is required; nothing changed yet.
    NeedsConfirmation,
    /// The id is not in the catalog; nothing changed.
    UnknownGpu,
}

#[derive(Clone, Debug, Default)]
pub struct AvailabilityGate {
    state: GateState,
}

impl AvailabilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            GateState::Normal => None,
            GateState::ConfirmingSwitch { gpu_id } => Some(gpu_id),
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, GateState::ConfirmingSwitch { .. })
    }

    /// Attempts to select a GPU. If the spec is available in the current
    /// partition it is applied immediately; otherwise the gate moves to
    /// the confirming state and the selection stays as it was.
    pub fn select_gpu(
        &mut self,
        selection: &mut DeploymentSelection,
        gpu_id: &str,
    ) -> SelectOutcome {
        let Some(gpu) = catalog::gpu(gpu_id) else {
            return SelectOutcome::UnknownGpu;
        };
        if gpu.available_in(&selection.partition_id) {
            selection.gpu_id = gpu.id.to_string();
            self.state = GateState::Normal;
            SelectOutcome::Selected
        } else {
            self.state = GateState::ConfirmingSwitch {
                gpu_id: gpu.id.to_string(),
            };
            SelectOutcome::NeedsConfirmation
        }
    }

    /// Applies a pending switch: the partition becomes the GPU's first
    /// available partition and the GPU is selected. Returns the new
    /// partition id, or None when nothing was pending.
    pub fn confirm(&mut self, selection: &mut DeploymentSelection) -> Option<&'static str> {
        let GateState::ConfirmingSwitch { gpu_id } = std::mem::take(&mut self.state) else {
            return None;
        };
        let gpu = catalog::gpu(&gpu_id)?;
        let partition = gpu.available_partitions[0];
        selection.partition_id = partition.to_string();
        selection.gpu_id = gpu.id.to_string();
        Some(partition)
    }

    /// Drops a pending switch without touching the selection.
    pub fn cancel(&mut self) {
        self.state = GateState::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_gpu_selects_immediately() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        assert_eq!(sel.partition_id, "hb1");
        assert_eq!(gate.select_gpu(&mut sel, "h100"), SelectOutcome::Selected);
        assert_eq!(sel.gpu_id, "h100");
        assert!(!gate.is_confirming());
    }

    #[test]
    fn test_unavailable_gpu_needs_confirmation() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        sel.partition_id = "hd1".to_string();
        sel.gpu_id = "4090".to_string();

        assert_eq!(
            gate.select_gpu(&mut sel, "h100"),
            SelectOutcome::NeedsConfirmation
        );
        // Nothing moves until the user answers.
        assert_eq!(sel.partition_id, "hd1");
        assert_eq!(sel.gpu_id, "4090");
        assert_eq!(gate.pending(), Some("h100"));
    }

    #[test]
    fn test_confirm_switches_to_first_partition() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        sel.partition_id = "hd1".to_string();
        sel.gpu_id = "4090".to_string();

        gate.select_gpu(&mut sel, "h100");
        assert_eq!(gate.confirm(&mut sel), Some("hb1"));
        assert_eq!(sel.partition_id, "hb1");
        assert_eq!(sel.gpu_id, "h100");
        assert!(!gate.is_confirming());
    }

    #[test]
    fn test_cancel_leaves_selection_unchanged() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        sel.partition_id = "hd1".to_string();
        sel.gpu_id = "4090".to_string();

        gate.select_gpu(&mut sel, "4090d");
        gate.cancel();
        assert_eq!(sel.partition_id, "hd1");
        assert_eq!(sel.gpu_id, "4090");
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        assert_eq!(gate.confirm(&mut sel), None);
        assert_eq!(sel.partition_id, "hb1");
    }

    #[test]
    fn test_unknown_gpu_rejected() {
        let mut gate = AvailabilityGate::new();
        let mut sel = DeploymentSelection::default();
        assert_eq!(gate.select_gpu(&mut sel, "mi300"), SelectOutcome::UnknownGpu);
        assert!(!gate.is_confirming());
    }
}
