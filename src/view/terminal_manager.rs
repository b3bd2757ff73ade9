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

use std::io::stdout;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use crate::error::{Error, Result};

/// Raw-mode guard. The terminal is restored in Drop, so an early return
/// or panic unwinding still leaves the user's shell usable.
pub struct TerminalManager {
    initialized: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        let mut manager = Self { initialized: false };
        manager.initialize()?;
        Ok(manager)
    }

    fn initialize(&mut self) -> Result<()> {
        if enable_raw_mode().is_err() {
            return Err(Error::Terminal(
                "Failed to enable raw mode - terminal not available".to_string(),
            ));
        }

        let mut stdout = stdout();
        if execute!(
            stdout,
            EnterAlternateScreen,
            crossterm::terminal::Clear(ClearType::All)
        )
        .is_err()
        {
            let _ = disable_raw_mode();
            return Err(Error::Terminal(
                "Failed to initialize terminal display".to_string(),
            ));
        }

        self.initialized = true;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.initialized {
            let mut stdout = stdout();
            // Leave alternate screen first so any farewell output lands in
            // the normal screen
            let _ = execute!(stdout, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}
