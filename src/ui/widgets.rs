use std::io::Write;

use crossterm::style::Color;

use crate::common::config::ThemeConfig;
use crate::ui::text::{print_colored_text, truncate_to_width};

/// Draws a labeled usage bar, e.g. `GPU : [▬▬▬▬──── 64/96]`.
///
/// The label is padded to 5 characters so stacked bars line up; the value
/// text is right-aligned inside the bar.
pub fn draw_bar<W: Write>(
    stdout: &mut W,
    label: &str,
    value: f64,
    max_value: f64,
    width: usize,
    show_text: Option<String>,
) {
    let formatted_label = if label.len() > 5 {
        label[..5].to_string()
    } else {
        format!("{label:<5}")
    };
    let available_bar_width = width.saturating_sub(9);

    let fill_ratio = if max_value > 0.0 {
        (value / max_value).min(1.0)
    } else {
        0.0
    };
    let filled_width = (available_bar_width as f64 * fill_ratio) as usize;
    let color = ThemeConfig::usage_bar_color(fill_ratio);

    let display_text = show_text.unwrap_or_else(|| format!("{:.1}%", fill_ratio * 100.0));
    let text = truncate_to_width(&display_text, available_bar_width);
    let text_len = text.chars().count();
    let text_pos = available_bar_width - text_len;

    print_colored_text(stdout, &format!("{formatted_label}: ["), Color::White, None, None);

    // Bar cells left of the text, the text in a single run, then the rest.
    draw_cells(stdout, 0, text_pos, filled_width, color);
    print_colored_text(stdout, &text, Color::White, None, None);
    draw_cells(stdout, text_pos + text_len, available_bar_width, filled_width, color);

    print_colored_text(stdout, "]", Color::White, None, None);
}

fn draw_cells<W: Write>(stdout: &mut W, from: usize, to: usize, filled_width: usize, color: Color) {
    if from >= to {
        return;
    }
    let filled_end = filled_width.clamp(from, to);
    if filled_end > from {
        print_colored_text(stdout, &"▬".repeat(filled_end - from), color, None, None);
    }
    if to > filled_end {
        print_colored_text(stdout, &"─".repeat(to - filled_end), Color::DarkGrey, None, None);
    }
}
