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

//! Instance list with search and a list/card display toggle.

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::AppState;
use crate::model::{Instance, InstanceStatus, ViewType};
use crate::ui::text::{print_colored_text, truncate_to_width};

fn status_color(status: InstanceStatus) -> Color {
    match status {
        InstanceStatus::Running => Color::Green,
        InstanceStatus::Starting => Color::Yellow,
        InstanceStatus::Stopped => Color::DarkGrey,
        InstanceStatus::Error => Color::Red,
    }
}

pub fn draw_instances<W: Write>(stdout: &mut W, state: &AppState, cols: u16) {
    let view = &state.instances_view;

    print_colored_text(
        stdout,
        "Pay-as-you-go instances are released after 10 days of continuous \
         shutdown; released data cannot be recovered.\r\n\r\n",
        Color::Yellow,
        None,
        None,
    );

    // Search line doubles as an input field while search is active.
    if view.search_active {
        print_colored_text(stdout, "Search: ", Color::Cyan, None, None);
        print_colored_text(stdout, &view.search, Color::White, None, None);
        print_colored_text(stdout, "_", Color::Cyan, None, None);
    } else if !view.search.is_empty() {
        print_colored_text(
            stdout,
            &format!("Filter: {}  (/ to edit)", view.search),
            Color::DarkGrey,
            None,
            None,
        );
    } else {
        print_colored_text(stdout, "Instances  (/ to search)", Color::Cyan, None, None);
    }
    queue!(stdout, Print("\r\n\r\n")).unwrap();

    let filtered = state.filtered_instances();
    if filtered.is_empty() {
        print_colored_text(stdout, "  No instances match.\r\n", Color::DarkGrey, None, None);
        return;
    }

    match view.view_type {
        ViewType::List => draw_list(stdout, state, &filtered, cols),
        ViewType::Card => draw_cards(stdout, state, &filtered),
    }

    queue!(stdout, Print("\r\n")).unwrap();
    print_colored_text(
        stdout,
        &format!("  {} instance(s) total\r\n", filtered.len()),
        Color::DarkGrey,
        None,
        None,
    );
}

fn draw_list<W: Write>(stdout: &mut W, state: &AppState, filtered: &[(usize, &Instance)], cols: u16) {
    let name_width = 26usize;
    queue!(
        stdout,
        Print(format!(
            "   {:<12} {:<26} {:<10} {:<24} {}\r\n",
            "ID", "NAME", "STATUS", "CLUSTER", "SPECS"
        ))
    )
    .unwrap();

    for (row, (_, instance)) in filtered.iter().enumerate() {
        let selected = row == state.instances_view.selected;
        let marker = if selected { " > " } else { "   " };
        print_colored_text(stdout, marker, Color::Cyan, None, None);
        queue!(
            stdout,
            Print(format!(
                "{:<12} {:<26} ",
                instance.id,
                truncate_to_width(&instance.name, name_width)
            ))
        )
        .unwrap();
        print_colored_text(
            stdout,
            &format!("{:<10}", instance.status.label()),
            status_color(instance.status),
            None,
            None,
        );
        let specs = truncate_to_width(&instance.specs, (cols as usize).saturating_sub(80));
        queue!(
            stdout,
            Print(format!(" {:<24} {specs}\r\n", instance.cluster))
        )
        .unwrap();
    }
}

fn draw_cards<W: Write>(stdout: &mut W, state: &AppState, filtered: &[(usize, &Instance)]) {
    for (row, (_, instance)) in filtered.iter().enumerate() {
        let selected = row == state.instances_view.selected;
        let border_color = if selected { Color::Cyan } else { Color::DarkGrey };

        print_colored_text(stdout, "┌─ ", border_color, None, None);
        print_colored_text(stdout, &instance.name, Color::White, None, None);
        print_colored_text(stdout, &format!(" ({})", instance.id), Color::DarkGrey, None, None);
        queue!(stdout, Print("  ")).unwrap();
        print_colored_text(
            stdout,
            instance.status.label(),
            status_color(instance.status),
            None,
            None,
        );
        queue!(stdout, Print("\r\n")).unwrap();

        print_colored_text(stdout, "│  ", border_color, None, None);
        queue!(
            stdout,
            Print(format!(
                "{}  |  {}  |  {}\r\n",
                instance.specs, instance.image, instance.billing_type
            ))
        )
        .unwrap();

        print_colored_text(stdout, "│  ", border_color, None, None);
        queue!(
            stdout,
            Print(format!(
                "CPU {}  RAM {}  GPU {}  on {}  since {}\r\n",
                instance.cpu, instance.memory, instance.gpu, instance.cluster, instance.create_time
            ))
        )
        .unwrap();

        print_colored_text(stdout, "└─\r\n", border_color, None, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::ViewKind;

    #[test]
    fn test_list_shows_all_sample_instances() {
        let state = AppState::new(ViewKind::Instances);
        let mut out: Vec<u8> = Vec::new();
        draw_instances(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("ins-82731"));
        assert!(rendered.contains("ins-99212"));
        assert!(rendered.contains("ins-11203"));
        assert!(rendered.contains("3 instance(s) total"));
    }

    #[test]
    fn test_search_filters_rendered_rows() {
        let mut state = AppState::new(ViewKind::Instances);
        state.instances_view.search = "jupyter".to_string();
        let mut out: Vec<u8> = Vec::new();
        draw_instances(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("ins-11203"));
        assert!(!rendered.contains("ins-82731"));
    }

    #[test]
    fn test_card_view_renders_details() {
        let mut state = AppState::new(ViewKind::Instances);
        state.instances_view.view_type = ViewType::Card;
        let mut out: Vec<u8> = Vec::new();
        draw_instances(&mut out, &state, 140);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Pay-as-you-go"));
        assert!(rendered.contains("┌─"));
    }
}
