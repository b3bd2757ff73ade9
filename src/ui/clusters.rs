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

//! Cluster list and the per-cluster node inventory drill-down.

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::AppState;
use crate::model::{Cluster, ClusterStatus, NodeStatus};
use crate::ui::text::print_colored_text;
use crate::ui::widgets::draw_bar;

fn status_color(status: ClusterStatus) -> Color {
    match status {
        ClusterStatus::Healthy => Color::Green,
        ClusterStatus::Warning => Color::Yellow,
        ClusterStatus::Scaling => Color::Cyan,
    }
}

pub fn draw_clusters<W: Write>(stdout: &mut W, state: &AppState, cols: u16) {
    if let Some(detail_index) = state.clusters_view.detail {
        if let Some(cluster) = state.clusters.get(detail_index) {
            draw_cluster_detail(stdout, cluster, cols);
            return;
        }
    }

    print_colored_text(stdout, "Clusters\r\n\r\n", Color::Cyan, None, None);
    let bar_width = (cols as usize).saturating_sub(64).min(50);

    for (i, cluster) in state.clusters.iter().enumerate() {
        let marker = if i == state.clusters_view.selected {
            " > "
        } else {
            "   "
        };
        print_colored_text(stdout, marker, Color::Cyan, None, None);
        queue!(
            stdout,
            Print(format!(
                "{:<8} {:<24} {:<14} {:>3} nodes  ",
                cluster.id, cluster.name, cluster.region, cluster.nodes
            ))
        )
        .unwrap();
        draw_bar(
            stdout,
            "GPU",
            cluster.used_gpu as f64,
            cluster.total_gpu as f64,
            bar_width,
            Some(format!("{}/{}", cluster.used_gpu, cluster.total_gpu)),
        );
        queue!(stdout, Print("  ")).unwrap();
        print_colored_text(
            stdout,
            cluster.status.label(),
            status_color(cluster.status),
            None,
            None,
        );
        queue!(stdout, Print("\r\n")).unwrap();
    }
}

fn draw_cluster_detail<W: Write>(stdout: &mut W, cluster: &Cluster, cols: u16) {
    print_colored_text(
        stdout,
        &format!("Nodes in {} ({})  -  Esc to go back\r\n\r\n", cluster.name, cluster.region),
        Color::Cyan,
        None,
        None,
    );

    let bar_width = (cols as usize).saturating_sub(70).min(30);
    queue!(
        stdout,
        Print(format!(
            "  {:<16} {:<14} {:<14} {:>4}  {:<12}\r\n",
            "NODE", "IP", "GPU TYPE", "GPUS", "STATUS"
        ))
    )
    .unwrap();

    for node in &cluster.node_details {
        queue!(
            stdout,
            Print(format!(
                "  {:<16} {:<14} {:<14} {:>4}  ",
                node.name, node.ip, node.gpu_type, node.gpu_count
            ))
        )
        .unwrap();
        let node_color = match node.status {
            NodeStatus::Online => Color::Green,
            NodeStatus::Offline => Color::Red,
            NodeStatus::Maintenance => Color::Yellow,
        };
        print_colored_text(
            stdout,
            &format!("{:<12}", node.status.label()),
            node_color,
            None,
            None,
        );
        draw_bar(stdout, "CPU", node.cpu_usage, 100.0, bar_width, None);
        queue!(stdout, Print(" ")).unwrap();
        draw_bar(stdout, "GPU", node.gpu_usage, 100.0, bar_width, None);
        queue!(stdout, Print("\r\n")).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::ViewKind;

    #[test]
    fn test_cluster_list_shows_all_clusters() {
        let state = AppState::new(ViewKind::Clusters);
        let mut out: Vec<u8> = Vec::new();
        draw_clusters(&mut out, &state, 160);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("c-hb1"));
        assert!(rendered.contains("c-hb2"));
        assert!(rendered.contains("c-nw1"));
        assert!(rendered.contains("64/96"));
    }

    #[test]
    fn test_detail_view_lists_nodes() {
        let mut state = AppState::new(ViewKind::Clusters);
        state.clusters_view.detail = Some(0);
        let mut out: Vec<u8> = Vec::new();
        draw_clusters(&mut out, &state, 160);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Nodes in"));
        assert!(rendered.contains("hb1-node-01"));
    }

    #[test]
    fn test_stale_detail_index_falls_back_to_list() {
        let mut state = AppState::new(ViewKind::Clusters);
        state.clusters_view.detail = Some(99);
        let mut out: Vec<u8> = Vec::new();
        draw_clusters(&mut out, &state, 160);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Clusters"));
    }
}
