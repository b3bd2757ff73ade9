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

//! The instance deployment form and its live price summary.

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::{AppState, DeployField, EditTarget};
use crate::catalog;
use crate::common::config::AppConfig;
use crate::deploy::{PriceBreakdown, VolumeSource};
use crate::ui::text::print_colored_text;
use crate::utils::{format_gb, format_yuan};

pub fn draw_deploy<W: Write>(stdout: &mut W, state: &AppState, _cols: u16) {
    let deploy = &state.deploy;
    let selection = &deploy.selection;

    print_colored_text(stdout, "Deploy instance\r\n\r\n", Color::Cyan, None, None);

    if deploy.gate.is_confirming() {
        draw_gate_prompt(stdout, state);
        queue!(stdout, Print("\r\n")).unwrap();
    }

    for field in DeployField::ALL {
        let focused = deploy.focus == field && deploy.editing.is_none() && !deploy.gate.is_confirming();
        let marker = if focused { " > " } else { "   " };
        print_colored_text(stdout, marker, Color::Cyan, None, None);
        print_colored_text(
            stdout,
            &format!("{:<16}", field.label()),
            if focused { Color::White } else { Color::Grey },
            None,
            None,
        );

        match field {
            DeployField::Partition => {
                let name = catalog::partition(&selection.partition_id)
                    .map(|p| p.name)
                    .unwrap_or("?");
                queue!(stdout, Print(format!("{} ({})", name, selection.partition_id))).unwrap();
            }
            DeployField::Gpu => draw_gpu_line(stdout, state),
            DeployField::GpuCount => {
                queue!(stdout, Print(format!("x {}", selection.gpu_count))).unwrap();
                if let Some(gpu) = selection.gpu() {
                    print_colored_text(
                        stdout,
                        &format!(
                            "   ({} cores, {} RAM)",
                            gpu.scaled_cores(selection.gpu_count),
                            format_gb(gpu.scaled_ram_gb(selection.gpu_count) as u64)
                        ),
                        Color::DarkGrey,
                        None,
                        None,
                    );
                }
            }
            DeployField::Driver => {
                queue!(stdout, Print(selection.driver_version.clone())).unwrap();
            }
            DeployField::ImageCategory => {
                queue!(stdout, Print(selection.image_category.label())).unwrap();
            }
            DeployField::Image => {
                let name = catalog::image(&selection.image_id).map(|i| i.name).unwrap_or("?");
                queue!(stdout, Print(name)).unwrap();
            }
            DeployField::ImageVersion => {
                queue!(stdout, Print(selection.image_version.clone())).unwrap();
            }
            DeployField::Storage => {
                queue!(
                    stdout,
                    Print(format!("{} item(s)  (a: add, x: remove)", selection.storage_items.len()))
                )
                .unwrap();
            }
            DeployField::Billing => {
                queue!(stdout, Print(selection.billing_cycle.label())).unwrap();
            }
            DeployField::InstanceCount => {
                queue!(stdout, Print(format!("{}", selection.instance_count))).unwrap();
            }
            DeployField::Namespace => {
                queue!(stdout, Print(selection.namespace.clone())).unwrap();
            }
            DeployField::Cluster => {
                let name = catalog::CLUSTER_CHOICES
                    .iter()
                    .find(|(id, _)| *id == selection.cluster_id)
                    .map(|(_, name)| *name)
                    .unwrap_or("?");
                queue!(stdout, Print(name)).unwrap();
            }
        }
        queue!(stdout, Print("\r\n")).unwrap();

        if field == DeployField::Storage {
            draw_storage_items(stdout, state);
        }
    }

    if let Some(picker) = deploy.storage_picker {
        queue!(stdout, Print("\r\n")).unwrap();
        draw_storage_picker(stdout, picker);
    }

    if let Some(edit) = &deploy.editing {
        let label = match edit.target {
            EditTarget::Namespace => "namespace",
            EditTarget::InstanceCount => "instance count",
            EditTarget::MountPath(_) => "mount path",
            EditTarget::VolumeSize(_) => "size (GB)",
            EditTarget::VolumeName(_) => "volume name",
        };
        queue!(stdout, Print("\r\n")).unwrap();
        print_colored_text(stdout, &format!("  Edit {label}: "), Color::Cyan, None, None);
        print_colored_text(stdout, &edit.text, Color::White, None, None);
        print_colored_text(stdout, "_  (Enter: apply, Esc: cancel)\r\n", Color::DarkGrey, None, None);
    }

    queue!(stdout, Print("\r\n")).unwrap();
    draw_summary(stdout, state);
}

fn draw_gpu_line<W: Write>(stdout: &mut W, state: &AppState) {
    let selection = &state.deploy.selection;
    for gpu in catalog::GPU_SPECS {
        let available = gpu.available_in(&selection.partition_id);
        let selected = gpu.id == selection.gpu_id;
        let (fg, bg) = if selected {
            (Color::Black, Some(Color::Cyan))
        } else if available {
            (Color::White, None)
        } else {
            // Offered elsewhere; picking it asks for a partition switch.
            (Color::DarkGrey, None)
        };
        print_colored_text(stdout, &format!(" {} ", gpu.id), fg, bg, None);
    }
    if let Some(gpu) = selection.gpu() {
        print_colored_text(
            stdout,
            &format!("  {} {}/card/h", gpu.name, format_yuan(gpu.hourly_price)),
            Color::DarkGrey,
            None,
            None,
        );
    }
}

fn draw_storage_items<W: Write>(stdout: &mut W, state: &AppState) {
    let deploy = &state.deploy;
    for (i, item) in deploy.selection.storage_items.iter().enumerate() {
        let focused = deploy.focus == DeployField::Storage && deploy.storage_cursor == i;
        let marker = if focused { "     * " } else { "       " };
        print_colored_text(stdout, marker, Color::Cyan, None, None);

        let type_name = catalog::storage_type(&item.type_id).map(|t| t.name).unwrap_or("?");
        match &item.volume {
            VolumeSource::New { name, size_gb, media } => {
                queue!(
                    stdout,
                    Print(format!(
                        "{type_name}: new \"{name}\" {} {} at {}",
                        format_gb(*size_gb),
                        media.as_str(),
                        item.mount_path
                    ))
                )
                .unwrap();
            }
            VolumeSource::Existing { volume_id, name, size_gb, media } => {
                queue!(
                    stdout,
                    Print(format!(
                        "{type_name}: attach {volume_id} \"{name}\" {} {} at {}",
                        format_gb(*size_gb),
                        media.as_str(),
                        item.mount_path
                    ))
                )
                .unwrap();
            }
        }
        queue!(stdout, Print("\r\n")).unwrap();
    }
}

fn draw_storage_picker<W: Write>(stdout: &mut W, cursor: usize) {
    print_colored_text(
        stdout,
        "  Add disk (↑↓: choose, Enter: add, Esc: cancel)\r\n",
        Color::Cyan,
        None,
        None,
    );
    for (i, ty) in catalog::STORAGE_TYPES.iter().enumerate() {
        let marker = if i == cursor { "   > " } else { "     " };
        print_colored_text(stdout, marker, Color::Cyan, None, None);
        queue!(stdout, Print(format!("{:<24} ", ty.name))).unwrap();
        print_colored_text(stdout, ty.description, Color::DarkGrey, None, None);
        queue!(stdout, Print("\r\n")).unwrap();
    }
}

fn draw_gate_prompt<W: Write>(stdout: &mut W, state: &AppState) {
    let Some(gpu_id) = state.deploy.gate.pending() else {
        return;
    };
    let Some(gpu) = catalog::gpu(gpu_id) else {
        return;
    };
    let target = gpu.available_partitions[0];
    let target_name = catalog::partition(target).map(|p| p.name).unwrap_or(target);
    let message = format!(
        " {} is not available in this partition. Switch to {target_name}? (y/n) ",
        gpu.name
    );
    print_colored_text(stdout, &message, Color::Black, Some(Color::Yellow), None);
    queue!(stdout, Print("\r\n")).unwrap();
}

fn draw_summary<W: Write>(stdout: &mut W, state: &AppState) {
    let selection = &state.deploy.selection;
    let width = AppConfig::SUMMARY_PANEL_WIDTH;

    let Ok(quote) = PriceBreakdown::quote(selection) else {
        print_colored_text(stdout, "  (no price available)\r\n", Color::DarkGrey, None, None);
        return;
    };

    let line = |stdout: &mut W, label: &str, value: String| {
        queue!(
            stdout,
            Print(format!("  │ {:<14}{:>width$} │\r\n", label, value, width = width - 18))
        )
        .unwrap();
    };

    print_colored_text(
        stdout,
        &format!("  ┌─ Price summary {}┐\r\n", "─".repeat(width.saturating_sub(19))),
        Color::Cyan,
        None,
        None,
    );
    line(stdout, "GPU", format!("{}/h", format_yuan(quote.gpu_hourly)));
    line(stdout, "Storage", format!("{}/h", format_yuan(quote.storage_hourly)));
    line(
        stdout,
        "Per instance",
        format!("{}/h", format_yuan(quote.per_instance_hourly)),
    );
    line(stdout, "Instances", format!("x {}", quote.instance_count));
    line(stdout, "Billing", quote.billing_cycle.label().to_string());
    line(
        stdout,
        "Total",
        format!("{}{}", format_yuan(quote.total), quote.billing_cycle.unit()),
    );
    print_colored_text(
        stdout,
        &format!("  └{}┘\r\n", "─".repeat(width.saturating_sub(4))),
        Color::Cyan,
        None,
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::ViewKind;

    #[test]
    fn test_form_shows_defaults_and_summary() {
        let state = AppState::new(ViewKind::Deploy);
        let mut out: Vec<u8> = Vec::new();
        draw_deploy(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("NVIDIA A100"));
        assert!(rendered.contains("Price summary"));
        assert!(rendered.contains("¥12.80/h"));
    }

    #[test]
    fn test_summary_tracks_selection() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.selection.gpu_count = 2;
        state.deploy.selection.add_storage("block");
        let mut out: Vec<u8> = Vec::new();
        draw_deploy(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("¥25.85/h"));
    }

    #[test]
    fn test_gate_prompt_rendered_while_confirming() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.selection.partition_id = "hd1".to_string();
        state.deploy.selection.gpu_id = "4090".to_string();
        let mut sel = state.deploy.selection.clone();
        state.deploy.gate.select_gpu(&mut sel, "h100");
        state.deploy.selection = sel;
        let mut out: Vec<u8> = Vec::new();
        draw_deploy(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Switch to"));
        assert!(rendered.contains("(y/n)"));
    }

    #[test]
    fn test_storage_items_listed() {
        let mut state = AppState::new(ViewKind::Deploy);
        state.deploy.selection.add_storage("shared");
        let mut out: Vec<u8> = Vec::new();
        draw_deploy(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("vol-sh-881"));
        assert!(rendered.contains("/root/data1"));
    }
}
