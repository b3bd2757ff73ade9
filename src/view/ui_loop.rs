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

use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    terminal::size,
};
use tokio::sync::Mutex;

use crate::app_state::{AppState, ViewKind};
use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::ui::buffer::{BufferWriter, DifferentialRenderer};
use crate::ui::chrome::{draw_header, draw_key_hints, draw_notification};
use crate::ui::tabs::draw_tabs;
use crate::view::event_handler::handle_key_event;

pub struct UiLoop {
    app_state: Arc<Mutex<AppState>>,
    differential_renderer: DifferentialRenderer,
    previous_view: ViewKind,
    previous_show_help: bool,
    last_render_time: std::time::Instant,
    resize_occurred: bool,
}

impl UiLoop {
    pub fn new(app_state: Arc<Mutex<AppState>>, start_view: ViewKind) -> Result<Self> {
        let differential_renderer = DifferentialRenderer::new()
            .map_err(|_| Error::Terminal("Failed to create differential renderer".to_string()))?;

        Ok(Self {
            app_state,
            differential_renderer,
            previous_view: start_view,
            previous_show_help: false,
            last_render_time: std::time::Instant::now(),
            resize_occurred: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Handle events with timeout
            if let Ok(has_event) =
                event::poll(Duration::from_millis(AppConfig::EVENT_POLL_TIMEOUT_MS))
            {
                if has_event {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            let mut state = self.app_state.lock().await;
                            if handle_key_event(key_event, &mut state) {
                                break;
                            }
                        }
                        Ok(Event::Resize(_width, _height)) => {
                            self.differential_renderer.force_clear().ok();
                            self.resize_occurred = true;
                        }
                        _ => {
                            // Ignore other event types (focus, paste, mouse)
                        }
                    }
                }
            }

            let mut state = self.app_state.lock().await;
            state.notifications.update();

            // View and help transitions leave stale lines behind, clear fully.
            let force_clear = state.view != self.previous_view
                || state.show_help != self.previous_show_help
                || self.resize_occurred;

            let now = std::time::Instant::now();
            let time_to_render = now.duration_since(self.last_render_time).as_millis()
                >= AppConfig::MIN_RENDER_INTERVAL_MS as u128;

            if !force_clear && !time_to_render {
                continue;
            }

            state.frame_counter += 1;
            self.last_render_time = now;

            let (cols, _rows) = size().unwrap_or((
                AppConfig::DEFAULT_TERMINAL_WIDTH,
                AppConfig::DEFAULT_TERMINAL_HEIGHT,
            ));

            let mut stdout = stdout();
            if queue!(stdout, cursor::Hide).is_err() {
                break;
            }

            if force_clear && self.differential_renderer.force_clear().is_err() {
                break;
            }

            let content = render_frame(&state, cols);
            if self
                .differential_renderer
                .render_differential(&content)
                .is_err()
            {
                break;
            }

            self.previous_view = state.view;
            self.previous_show_help = state.show_help;
            self.resize_occurred = false;

            if queue!(stdout, cursor::Show).is_err() {
                break;
            }
            if stdout.flush().is_err() {
                break;
            }
        }

        Ok(())
    }
}

fn render_frame(state: &AppState, cols: u16) -> String {
    let mut buffer = BufferWriter::new();

    if state.show_help {
        crate::ui::help::draw_help(&mut buffer, cols);
        return buffer.get_buffer().to_string();
    }

    draw_header(&mut buffer, cols);
    draw_tabs(&mut buffer, state, cols);
    draw_notification(&mut buffer, state);

    match state.view {
        ViewKind::Dashboard => crate::ui::dashboard::draw_dashboard(&mut buffer, state, cols),
        ViewKind::Instances => crate::ui::instances::draw_instances(&mut buffer, state, cols),
        ViewKind::Clusters => crate::ui::clusters::draw_clusters(&mut buffer, state, cols),
        ViewKind::Pools => crate::ui::pools::draw_pools(&mut buffer, state, cols),
        ViewKind::Deploy => crate::ui::deploy::draw_deploy(&mut buffer, state, cols),
    }

    writeln!(buffer, "\r").ok();
    draw_key_hints(&mut buffer, state);

    buffer.get_buffer().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_for_every_view() {
        for view in ViewKind::ALL {
            let state = AppState::new(view);
            let content = render_frame(&state, 140);
            assert!(content.contains(view.label()), "frame missing {}", view.label());
        }
    }

    #[test]
    fn test_render_frame_help_overlay() {
        let mut state = AppState::new(ViewKind::Dashboard);
        state.show_help = true;
        let content = render_frame(&state, 140);
        assert!(content.contains("ebcloud console"));
    }
}
