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

//! Keyboard routing for the console.
//!
//! Modal input (text edits, the search box, the storage picker and the
//! partition-switch prompt) is handled before global keys so that typing
//! `q` into a namespace field does not quit the program.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app_state::{AppState, DeployField, EditBuffer, EditTarget, ViewKind};
use crate::catalog;
use crate::common::config::AppConfig;
use crate::deploy::SelectOutcome;
use crate::model::ViewType;

/// Handles one key event. Returns true when the console should exit.
pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> bool {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key_event.code {
            return true;
        }
    }

    if state.deploy.editing.is_some() {
        handle_edit_key(key_event.code, state);
        return false;
    }

    if state.view == ViewKind::Instances && state.instances_view.search_active {
        handle_search_key(key_event.code, state);
        return false;
    }

    if state.view == ViewKind::Deploy && state.deploy.gate.is_confirming() {
        handle_gate_key(key_event.code, state);
        return false;
    }

    if state.view == ViewKind::Deploy && state.deploy.storage_picker.is_some() {
        handle_picker_key(key_event.code, state);
        return false;
    }

    if state.show_help {
        match key_event.code {
            KeyCode::Char('h') | KeyCode::Esc | KeyCode::Char('q') => state.show_help = false,
            _ => {}
        }
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') => {
            state.show_help = true;
            return false;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            state.view = ViewKind::ALL[index];
            return false;
        }
        KeyCode::Tab => {
            state.view = state.view.next();
            return false;
        }
        _ => {}
    }

    let had_cluster_detail = state.clusters_view.detail.is_some();

    match state.view {
        ViewKind::Dashboard => {
            // No local keys beyond the global set.
        }
        ViewKind::Instances => handle_instances_key(key_event.code, state),
        ViewKind::Clusters => handle_clusters_key(key_event.code, state),
        ViewKind::Pools => handle_pools_key(key_event.code, state),
        ViewKind::Deploy => handle_deploy_key(key_event.code, state),
    }

    // Esc quits unless the cluster view used it to close its drill-down.
    matches!(key_event.code, KeyCode::Esc)
        && !(state.view == ViewKind::Clusters && had_cluster_detail)
}

fn handle_edit_key(code: KeyCode, state: &mut AppState) {
    match code {
        KeyCode::Esc => {
            state.deploy.editing = None;
        }
        KeyCode::Enter => {
            if let Some(edit) = state.deploy.editing.take() {
                commit_edit(edit, state);
            }
        }
        KeyCode::Backspace => {
            if let Some(edit) = state.deploy.editing.as_mut() {
                edit.text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(edit) = state.deploy.editing.as_mut() {
                edit.text.push(c);
            }
        }
        _ => {}
    }
}

fn commit_edit(edit: EditBuffer, state: &mut AppState) {
    let selection = &mut state.deploy.selection;
    match edit.target {
        EditTarget::Namespace => {
            if !edit.text.trim().is_empty() {
                selection.namespace = edit.text.trim().to_string();
            }
        }
        EditTarget::InstanceCount => selection.set_instance_count_text(&edit.text),
        EditTarget::MountPath(i) => {
            if !edit.text.trim().is_empty() {
                selection.set_mount_path(i, edit.text.trim().to_string());
            }
        }
        EditTarget::VolumeSize(i) => selection.set_volume_size_text(i, &edit.text),
        EditTarget::VolumeName(i) => {
            if !edit.text.trim().is_empty() {
                selection.set_volume_name(i, edit.text.trim().to_string());
            }
        }
    }
}

fn handle_search_key(code: KeyCode, state: &mut AppState) {
    let view = &mut state.instances_view;
    match code {
        KeyCode::Esc => {
            view.search_active = false;
            view.search.clear();
            view.selected = 0;
        }
        KeyCode::Enter => {
            view.search_active = false;
        }
        KeyCode::Backspace => {
            view.search.pop();
            view.selected = 0;
        }
        KeyCode::Char(c) => {
            view.search.push(c);
            view.selected = 0;
        }
        _ => {}
    }
}

fn handle_gate_key(code: KeyCode, state: &mut AppState) {
    match code {
        KeyCode::Char('y') | KeyCode::Enter => {
            let deploy = &mut state.deploy;
            if let Some(partition) = deploy.gate.confirm(&mut deploy.selection) {
                let name = catalog::partition(partition)
                    .map(|p| p.name)
                    .unwrap_or(partition);
                state
                    .notifications
                    .status(format!("Switched partition to {name}"));
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            state.deploy.gate.cancel();
        }
        _ => {}
    }
}

fn handle_picker_key(code: KeyCode, state: &mut AppState) {
    let Some(cursor) = state.deploy.storage_picker else {
        return;
    };
    let count = catalog::STORAGE_TYPES.len();
    match code {
        KeyCode::Esc => state.deploy.storage_picker = None,
        KeyCode::Up => {
            state.deploy.storage_picker = Some(cursor.saturating_sub(1));
        }
        KeyCode::Down => {
            state.deploy.storage_picker = Some((cursor + 1).min(count - 1));
        }
        KeyCode::Enter => {
            let type_id = catalog::STORAGE_TYPES[cursor].id;
            if let Some(index) = state.deploy.selection.add_storage(type_id) {
                state.deploy.focus = DeployField::Storage;
                state.deploy.storage_cursor = index;
                let path = state.deploy.selection.storage_items[index].mount_path.clone();
                state.notifications.info(format!("Disk added at {path}"));
            }
            state.deploy.storage_picker = None;
        }
        _ => {}
    }
}

fn handle_instances_key(code: KeyCode, state: &mut AppState) {
    let filtered_len = state.filtered_instances().len();
    let view = &mut state.instances_view;
    match code {
        KeyCode::Char('/') => {
            view.search_active = true;
        }
        KeyCode::Char('v') => {
            view.view_type = match view.view_type {
                ViewType::List => ViewType::Card,
                ViewType::Card => ViewType::List,
            };
        }
        KeyCode::Up => view.selected = view.selected.saturating_sub(1),
        KeyCode::Down => {
            if filtered_len > 0 && view.selected + 1 < filtered_len {
                view.selected += 1;
            }
        }
        _ => {}
    }
}

fn handle_clusters_key(code: KeyCode, state: &mut AppState) {
    let view = &mut state.clusters_view;
    let count = state.clusters.len();
    match code {
        KeyCode::Up => view.selected = view.selected.saturating_sub(1),
        KeyCode::Down => {
            if count > 0 && view.selected + 1 < count {
                view.selected += 1;
            }
        }
        KeyCode::Enter => {
            if view.detail.is_none() && count > 0 {
                view.detail = Some(view.selected);
            }
        }
        KeyCode::Esc => {
            view.detail = None;
        }
        _ => {}
    }
}

fn handle_pools_key(code: KeyCode, state: &mut AppState) {
    let view = &mut state.pools_view;
    let count = state.pools.len();
    match code {
        KeyCode::Up => view.selected = view.selected.saturating_sub(1),
        KeyCode::Down => {
            if count > 0 && view.selected + 1 < count {
                view.selected += 1;
            }
        }
        _ => {}
    }
}

fn handle_deploy_key(code: KeyCode, state: &mut AppState) {
    let deploy = &mut state.deploy;
    match code {
        KeyCode::Up => deploy.focus = deploy.focus.prev(),
        KeyCode::Down => deploy.focus = deploy.focus.next(),
        KeyCode::Left | KeyCode::Right => {
            let forward = code == KeyCode::Right;
            change_focused_value(state, forward);
            return;
        }
        KeyCode::Char('a') => {
            deploy.storage_picker = Some(0);
        }
        KeyCode::Char('x') => {
            if deploy.focus == DeployField::Storage {
                deploy.selection.remove_storage(deploy.storage_cursor);
                deploy.clamp_storage_cursor();
            }
        }
        KeyCode::Char('n') => {
            if deploy.focus == DeployField::Storage {
                deploy.selection.toggle_volume_source(deploy.storage_cursor);
            }
        }
        KeyCode::Char('v') => {
            if deploy.focus == DeployField::Storage {
                deploy.selection.cycle_existing_volume(deploy.storage_cursor);
            }
        }
        KeyCode::Char('m') => {
            if deploy.focus == DeployField::Storage {
                deploy.selection.toggle_volume_media(deploy.storage_cursor);
            }
        }
        KeyCode::Char('+') => match deploy.focus {
            DeployField::Storage => deploy
                .selection
                .adjust_volume_size(deploy.storage_cursor, AppConfig::DISK_SIZE_STEP_GB as i64),
            DeployField::InstanceCount => deploy.selection.adjust_instance_count(1),
            _ => {}
        },
        KeyCode::Char('-') => match deploy.focus {
            DeployField::Storage => deploy
                .selection
                .adjust_volume_size(deploy.storage_cursor, -(AppConfig::DISK_SIZE_STEP_GB as i64)),
            DeployField::InstanceCount => deploy.selection.adjust_instance_count(-1),
            _ => {}
        },
        KeyCode::Char('e') => start_edit(deploy, EditKind::Primary),
        KeyCode::Char('s') => start_edit(deploy, EditKind::Size),
        KeyCode::Char('r') => start_edit(deploy, EditKind::Rename),
        _ => {}
    }
}

enum EditKind {
    Primary,
    Size,
    Rename,
}

fn start_edit(deploy: &mut crate::app_state::DeployState, kind: EditKind) {
    let target = match (deploy.focus, kind) {
        (DeployField::Namespace, EditKind::Primary) => Some((
            EditTarget::Namespace,
            deploy.selection.namespace.clone(),
        )),
        (DeployField::InstanceCount, EditKind::Primary) => Some((
            EditTarget::InstanceCount,
            deploy.selection.instance_count.to_string(),
        )),
        (DeployField::Storage, kind) => {
            let i = deploy.storage_cursor;
            deploy.selection.storage_items.get(i).map(|item| match kind {
                EditKind::Primary => (EditTarget::MountPath(i), item.mount_path.clone()),
                EditKind::Size => (EditTarget::VolumeSize(i), item.size_gb().to_string()),
                EditKind::Rename => (EditTarget::VolumeName(i), item.display_name().to_string()),
            })
        }
        _ => None,
    };

    if let Some((target, text)) = target {
        deploy.editing = Some(EditBuffer { target, text });
    }
}

fn change_focused_value(state: &mut AppState, forward: bool) {
    let deploy = &mut state.deploy;
    match deploy.focus {
        DeployField::Partition => {
            let partitions = catalog::PARTITIONS;
            let pos = partitions
                .iter()
                .position(|p| p.id == deploy.selection.partition_id)
                .unwrap_or(0);
            let next = if forward {
                (pos + 1) % partitions.len()
            } else {
                (pos + partitions.len() - 1) % partitions.len()
            };
            deploy.selection.partition_id = partitions[next].id.to_string();
            // Keep the GPU selection valid in the new partition.
            let available = deploy
                .selection
                .gpu()
                .map(|g| g.available_in(&deploy.selection.partition_id))
                .unwrap_or(false);
            if !available {
                if let Some(gpu) = catalog::GPU_SPECS
                    .iter()
                    .find(|g| g.available_in(&deploy.selection.partition_id))
                {
                    deploy.selection.gpu_id = gpu.id.to_string();
                }
            }
        }
        DeployField::Gpu => {
            let specs = catalog::GPU_SPECS;
            let pos = specs
                .iter()
                .position(|g| g.id == deploy.selection.gpu_id)
                .unwrap_or(0);
            let next = if forward {
                (pos + 1) % specs.len()
            } else {
                (pos + specs.len() - 1) % specs.len()
            };
            let gpu_id = specs[next].id;
            let outcome = deploy.gate.select_gpu(&mut deploy.selection, gpu_id);
            if outcome == SelectOutcome::NeedsConfirmation {
                state
                    .notifications
                    .warning("Not available in this partition".to_string());
            }
        }
        DeployField::GpuCount => deploy.selection.cycle_gpu_count(),
        DeployField::Driver => deploy.selection.cycle_driver_version(),
        DeployField::ImageCategory => {
            let categories = catalog::ImageCategory::ALL;
            let pos = categories
                .iter()
                .position(|c| *c == deploy.selection.image_category)
                .unwrap_or(0);
            let next = if forward {
                (pos + 1) % categories.len()
            } else {
                (pos + categories.len() - 1) % categories.len()
            };
            deploy.selection.set_image_category(categories[next]);
        }
        DeployField::Image => {
            let images: Vec<_> = catalog::images_in(deploy.selection.image_category).collect();
            if images.is_empty() {
                return;
            }
            let pos = images
                .iter()
                .position(|i| i.id == deploy.selection.image_id)
                .unwrap_or(0);
            let next = if forward {
                (pos + 1) % images.len()
            } else {
                (pos + images.len() - 1) % images.len()
            };
            deploy.selection.select_image(images[next].id);
        }
        DeployField::ImageVersion => deploy.selection.cycle_image_version(),
        DeployField::Storage => {
            if forward {
                deploy.storage_cursor += 1;
            } else {
                deploy.storage_cursor = deploy.storage_cursor.saturating_sub(1);
            }
            deploy.clamp_storage_cursor();
        }
        DeployField::Billing => {
            deploy.selection.billing_cycle = deploy.selection.billing_cycle.next();
        }
        DeployField::InstanceCount => {
            deploy.selection.adjust_instance_count(if forward { 1 } else { -1 });
        }
        DeployField::Namespace => {}
        DeployField::Cluster => deploy.selection.cycle_cluster(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_q_quits_and_digits_switch_views() {
        let mut state = AppState::new(ViewKind::Dashboard);
        assert!(!handle_key_event(key(KeyCode::Char('3')), &mut state));
        assert_eq!(state.view, ViewKind::Clusters);
        assert!(handle_key_event(key(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn test_search_consumes_q() {
        let mut state = AppState::new(ViewKind::Instances);
        handle_key_event(key(KeyCode::Char('/')), &mut state);
        assert!(state.instances_view.search_active);
        assert!(!handle_key_event(key(KeyCode::Char('q')), &mut state));
        assert_eq!(state.instances_view.search, "q");
        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(!state.instances_view.search_active);
        assert!(state.instances_view.search.is_empty());
    }

    #[test]
    fn test_cluster_detail_open_close() {
        let mut state = AppState::new(ViewKind::Clusters);
        handle_key_event(key(KeyCode::Down), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.clusters_view.detail, Some(1));
        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(state.clusters_view.detail.is_none());
    }

    #[test]
    fn test_gate_flow_via_keys() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.selection.partition_id = "hd1".to_string();
        state.deploy.selection.gpu_id = "4090".to_string();
        state.deploy.focus = DeployField::Gpu;

        // 4090 -> 4090d which is hb1-only, so the prompt appears.
        handle_key_event(key(KeyCode::Right), &mut state);
        assert!(state.deploy.gate.is_confirming());
        assert_eq!(state.deploy.selection.gpu_id, "4090");

        // 'n' keeps everything as it was.
        handle_key_event(key(KeyCode::Char('n')), &mut state);
        assert!(!state.deploy.gate.is_confirming());
        assert_eq!(state.deploy.selection.partition_id, "hd1");

        // Retry and confirm this time.
        handle_key_event(key(KeyCode::Right), &mut state);
        handle_key_event(key(KeyCode::Char('y')), &mut state);
        assert_eq!(state.deploy.selection.gpu_id, "4090d");
        assert_eq!(state.deploy.selection.partition_id, "hb1");
        assert!(state.notifications.has_notification());
    }

    #[test]
    fn test_storage_picker_adds_disk() {
        let mut state = AppState::new(ViewKind::Deploy);
        handle_key_event(key(KeyCode::Char('a')), &mut state);
        assert_eq!(state.deploy.storage_picker, Some(0));
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert!(state.deploy.storage_picker.is_none());
        assert_eq!(state.deploy.selection.storage_items.len(), 1);
        assert_eq!(state.deploy.focus, DeployField::Storage);
    }

    #[test]
    fn test_edit_namespace_commit() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.focus = DeployField::Namespace;
        handle_key_event(key(KeyCode::Char('e')), &mut state);
        assert!(state.deploy.editing.is_some());
        // Existing text is prefilled; wipe it and type a new name.
        for _ in 0.."default".len() {
            handle_key_event(key(KeyCode::Backspace), &mut state);
        }
        for c in "train".chars() {
            handle_key_event(key(KeyCode::Char(c)), &mut state);
        }
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert!(state.deploy.editing.is_none());
        assert_eq!(state.deploy.selection.namespace, "train");
    }

    #[test]
    fn test_billing_cycle_key() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.focus = DeployField::Billing;
        handle_key_event(key(KeyCode::Right), &mut state);
        assert_eq!(
            state.deploy.selection.billing_cycle,
            crate::deploy::BillingCycle::Daily
        );
    }
}
