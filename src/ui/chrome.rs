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

//! Shared screen chrome: header line, notification line and key hints.

use chrono::Local;
use crossterm::{
    queue,
    style::{Color, Print},
};
use std::io::Write;

use crate::app_state::{AppState, ViewKind};
use crate::ui::notification::NotificationType;
use crate::ui::text::print_colored_text;

pub fn draw_header<W: Write>(stdout: &mut W, cols: u16) {
    let current_time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let header_text = format!("ebcon - {current_time}");
    let version_text = format!("v{}", env!("CARGO_PKG_VERSION"));

    let total_width = cols as usize;
    let content_length = header_text.len() + version_text.len();
    let spacing = if total_width > content_length {
        " ".repeat(total_width - content_length)
    } else {
        " ".to_string()
    };

    print_colored_text(stdout, &header_text, Color::White, None, None);
    print_colored_text(
        stdout,
        &format!("{spacing}{version_text}\r\n"),
        Color::White,
        None,
        None,
    );
}

/// One-line notification banner under the tabs; blank when idle.
pub fn draw_notification<W: Write>(stdout: &mut W, state: &AppState) {
    if let Some(notification) = state.notifications.get_current_notification() {
        let color = match notification.notification_type {
            NotificationType::Info => Color::Cyan,
            NotificationType::Warning => Color::Yellow,
            NotificationType::Error => Color::Red,
            NotificationType::Status => Color::Green,
        };
        print_colored_text(stdout, &format!(" {} ", notification.message), Color::Black, Some(color), None);
    }
    queue!(stdout, Print("\r\n")).unwrap();
}

/// Bottom key hints, varying with the active view.
pub fn draw_key_hints<W: Write>(stdout: &mut W, state: &AppState) {
    let hints = match state.view {
        ViewKind::Dashboard => "1-5/Tab: view  h: help  q: quit",
        ViewKind::Instances => "/: search  v: list/card  ↑↓: select  h: help  q: quit",
        ViewKind::Clusters => "↑↓: select  Enter: nodes  Esc: back  h: help  q: quit",
        ViewKind::Pools => "↑↓: select  h: help  q: quit",
        ViewKind::Deploy => {
            "↑↓: field  ←→: change  a: add disk  x: remove  e: edit  h: help  q: quit"
        }
    };
    print_colored_text(stdout, hints, Color::DarkGrey, None, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_right_aligns_version() {
        let mut out: Vec<u8> = Vec::new();
        draw_header(&mut out, 100);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("ebcon - "));
        assert!(rendered.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_notification_line_renders_message() {
        let mut state = AppState::new(ViewKind::Dashboard);
        state.notifications.info("Instance created".to_string());
        let mut out: Vec<u8> = Vec::new();
        draw_notification(&mut out, &state);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Instance created"));
    }
}
