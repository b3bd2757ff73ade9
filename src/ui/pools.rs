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

//! Pre-purchased resource pools with card usage and expiry.

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::AppState;
use crate::model::PoolStatus;
use crate::ui::text::print_colored_text;
use crate::ui::widgets::draw_bar;

fn status_color(status: PoolStatus) -> Color {
    match status {
        PoolStatus::Healthy => Color::Green,
        PoolStatus::Warning => Color::Yellow,
        PoolStatus::Expired => Color::Red,
    }
}

pub fn draw_pools<W: Write>(stdout: &mut W, state: &AppState, cols: u16) {
    print_colored_text(stdout, "Resource pools\r\n\r\n", Color::Cyan, None, None);

    if state.pools.is_empty() {
        print_colored_text(stdout, "  No resource pools.\r\n", Color::DarkGrey, None, None);
        return;
    }

    let bar_width = (cols as usize).saturating_sub(90).min(40);

    for (i, pool) in state.pools.iter().enumerate() {
        let marker = if i == state.pools_view.selected {
            " > "
        } else {
            "   "
        };
        // Expiry overrides whatever status the record carries.
        let status = pool.effective_status(state.today);

        print_colored_text(stdout, marker, Color::Cyan, None, None);
        queue!(
            stdout,
            Print(format!(
                "{:<20} {:<28} {:<14} {:<14} ",
                pool.id, pool.name, pool.region, pool.gpu_type
            ))
        )
        .unwrap();
        draw_bar(
            stdout,
            "Cards",
            pool.used_cards as f64,
            pool.total_cards as f64,
            bar_width,
            Some(format!("{}/{}", pool.used_cards, pool.total_cards)),
        );
        queue!(
            stdout,
            Print(format!("  expires {}  ", pool.expiry_date.format("%Y-%m-%d")))
        )
        .unwrap();
        print_colored_text(stdout, status.label(), status_color(status), None, None);
        queue!(stdout, Print("\r\n")).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::ViewKind;
    use chrono::NaiveDate;

    #[test]
    fn test_pools_render_with_expiry() {
        let mut state = AppState::new(ViewKind::Pools);
        state.today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let mut out: Vec<u8> = Vec::new();
        draw_pools(&mut out, &state, 180);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("pool-hb1-h100-4"));
        assert!(rendered.contains("2026-12-31"));
        // The A100 pool expired in 2024 and must not show its stored status.
        assert!(rendered.contains("Expired"));
    }

    #[test]
    fn test_empty_pools_message() {
        let mut state = AppState::new(ViewKind::Pools);
        state.pools.clear();
        let mut out: Vec<u8> = Vec::new();
        draw_pools(&mut out, &state, 120);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("No resource pools"));
    }
}
