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

//! Account overview: balance, usage counters and the activity feed.

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::AppState;
use crate::model::InstanceStatus;
use crate::ui::text::print_colored_text;
use crate::ui::widgets::draw_bar;
use crate::utils::format_yuan;

pub fn draw_dashboard<W: Write>(stdout: &mut W, state: &AppState, cols: u16) {
    let running = state
        .instances
        .iter()
        .filter(|i| i.status == InstanceStatus::Running)
        .count();

    print_colored_text(stdout, "Account\r\n", Color::Cyan, None, None);
    queue!(
        stdout,
        Print(format!(
            "  Balance: {}    API calls today: {}\r\n",
            format_yuan(state.balance_yuan),
            state.daily_api_calls
        ))
    )
    .unwrap();
    let gpus_in_use: u32 = state.clusters.iter().map(|c| c.used_gpu).sum();
    queue!(
        stdout,
        Print(format!(
            "  Instances: {} total, {} running    Clusters: {}    GPUs in use: {}    Pools: {}\r\n",
            state.instances.len(),
            running,
            state.clusters.len(),
            gpus_in_use,
            state.pools.len()
        ))
    )
    .unwrap();
    queue!(stdout, Print("\r\n")).unwrap();

    print_colored_text(stdout, "Cluster capacity\r\n", Color::Cyan, None, None);
    let bar_width = (cols as usize).saturating_sub(30).min(60);
    for cluster in &state.clusters {
        queue!(stdout, Print(format!("  {:<24}", cluster.name))).unwrap();
        draw_bar(
            stdout,
            "GPU",
            cluster.used_gpu as f64,
            cluster.total_gpu as f64,
            bar_width,
            Some(format!("{}/{}", cluster.used_gpu, cluster.total_gpu)),
        );
        queue!(stdout, Print("\r\n")).unwrap();
    }
    queue!(stdout, Print("\r\n")).unwrap();

    print_colored_text(stdout, "Recent activity\r\n", Color::Cyan, None, None);
    for event in &state.activity {
        print_colored_text(stdout, &format!("  {:<10}", event.when), Color::DarkGrey, None, None);
        print_colored_text(stdout, &format!("{:<20}", event.title), Color::White, None, None);
        print_colored_text(stdout, &event.detail, Color::DarkGrey, None, None);
        queue!(stdout, Print("\r\n")).unwrap();
    }
}
