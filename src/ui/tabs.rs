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

use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::{AppState, ViewKind};
use crate::ui::text::print_colored_text;

pub fn draw_tabs<W: Write>(stdout: &mut W, state: &AppState, cols: u16) {
    queue!(stdout, Print("Views: ")).unwrap();
    for (i, view) in ViewKind::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, view.label());
        if *view == state.view {
            // Selected view: white text on blue background for good visibility
            print_colored_text(stdout, &label, Color::White, Some(Color::Blue), None);
        } else {
            print_colored_text(stdout, &label, Color::White, None, None);
        }
        queue!(stdout, Print(" ")).unwrap();
    }
    queue!(stdout, Print("\r\n")).unwrap();

    let separator = "─".repeat(cols as usize);
    print_colored_text(stdout, &separator, Color::DarkGrey, None, None);
    queue!(stdout, Print("\r\n")).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_tabs_lists_every_view() {
        let state = AppState::new(ViewKind::Dashboard);
        let mut out: Vec<u8> = Vec::new();
        draw_tabs(&mut out, &state, 120);
        let rendered = String::from_utf8(out).unwrap();
        for view in ViewKind::ALL {
            assert!(rendered.contains(view.label()), "missing {}", view.label());
        }
    }
}
