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
    cursor, queue,
    style::Print,
    terminal::{size, ClearType},
};
use std::io::{stdout, Write};

/// String-backed writer the views render into. The whole frame is built
/// off-screen and handed to the differential renderer in one piece.
pub struct BufferWriter {
    buffer: String,
    line_count: usize,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(64 * 1024),
            line_count: 0,
        }
    }

    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

impl Default for BufferWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = std::str::from_utf8(buf)
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid UTF-8"))?;
        self.line_count += s.matches('\n').count();
        self.buffer.push_str(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Line-diffing renderer. Only lines that changed since the previous
/// frame are rewritten, which keeps the console flicker-free.
pub struct DifferentialRenderer {
    previous_lines: Vec<String>,
    screen_height: usize,
    screen_width: usize,
}

impl DifferentialRenderer {
    pub fn new() -> std::io::Result<Self> {
        let (width, height) = size().unwrap_or((80, 24));
        Ok(Self {
            previous_lines: Vec::new(),
            screen_height: height as usize,
            screen_width: width as usize,
        })
    }

    pub fn render_differential(&mut self, content: &str) -> std::io::Result<()> {
        let current_lines: Vec<String> = content.lines().map(|line| line.to_string()).collect();

        if self.previous_lines.is_empty() {
            self.previous_lines = vec![String::new(); self.screen_height];
        }

        // Pick up terminal resizes between frames
        let (width, height) = size().unwrap_or((80, 24));
        if width as usize != self.screen_width || height as usize != self.screen_height {
            self.screen_width = width as usize;
            self.screen_height = height as usize;
            self.previous_lines
                .resize(self.screen_height, String::new());
        }

        let mut stdout = stdout();
        let max_lines = current_lines.len().min(self.screen_height);

        for (line_num, current_line) in current_lines.iter().enumerate().take(max_lines) {
            let unchanged = self
                .previous_lines
                .get(line_num)
                .is_some_and(|prev| prev == current_line);
            if !unchanged {
                queue!(
                    stdout,
                    cursor::MoveTo(0, line_num as u16),
                    Print(current_line)
                )?;
            }
        }

        // Clear trailing lines when the new frame is shorter
        if self.previous_lines.len() > current_lines.len() {
            let end = self.previous_lines.len().min(self.screen_height);
            for line_num in current_lines.len()..end {
                if !self.previous_lines[line_num].is_empty() {
                    queue!(
                        stdout,
                        cursor::MoveTo(0, line_num as u16),
                        crossterm::terminal::Clear(ClearType::CurrentLine)
                    )?;
                }
            }
        }

        stdout.flush()?;

        self.previous_lines.clear();
        self.previous_lines.extend(current_lines);
        self.previous_lines
            .resize(self.screen_height, String::new());

        Ok(())
    }

    /// Full-screen clear; used on startup, resize and view switches.
    pub fn force_clear(&mut self) -> std::io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, crossterm::terminal::Clear(ClearType::All))?;
        stdout.flush()?;

        self.previous_lines.clear();
        self.previous_lines
            .resize(self.screen_height, String::new());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_writer_counts_lines() {
        let mut buffer = BufferWriter::new();
        write!(buffer, "one\r\ntwo\r\n").unwrap();
        write!(buffer, "three").unwrap();
        assert_eq!(buffer.line_count(), 2);
        assert!(buffer.get_buffer().starts_with("one"));
    }

    #[test]
    fn test_buffer_writer_rejects_invalid_utf8() {
        let mut buffer = BufferWriter::new();
        assert!(buffer.write(&[0xff, 0xfe]).is_err());
    }
}
