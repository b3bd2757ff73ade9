use std::io::Write;

use crossterm::{queue, style::Color};

use crate::ui::text::print_colored_text;

/// Full-screen key-binding cheat sheet, toggled with `h`.
pub fn draw_help<W: Write>(stdout: &mut W, _cols: u16) {
    let sections: &[(&str, &[(&str, &str)])] = &[
        (
            "Global",
            &[
                ("1-5", "jump to a view"),
                ("Tab", "next view"),
                ("h", "toggle this help"),
                ("q / Esc", "quit"),
            ],
        ),
        (
            "Instances",
            &[
                ("/", "search by name or id"),
                ("v", "toggle list / card display"),
                ("↑ ↓", "select instance"),
            ],
        ),
        (
            "Clusters",
            &[
                ("↑ ↓", "select cluster"),
                ("Enter", "open node inventory"),
                ("Esc", "back to the list"),
            ],
        ),
        (
            "Deploy",
            &[
                ("↑ ↓", "move between fields"),
                ("← →", "change the focused value"),
                ("a", "add a data disk"),
                ("x", "remove the selected disk"),
                ("n", "toggle new / existing volume"),
                ("v", "next existing volume"),
                ("m", "toggle SSD / HDD"),
                ("+ -", "adjust size or count"),
                ("e", "edit namespace, count or mount path"),
                ("s", "edit disk size"),
                ("r", "rename a new volume"),
                ("y / n", "answer the partition switch prompt"),
            ],
        ),
    ];

    print_colored_text(stdout, "ebcon - ebcloud console\r\n\r\n", Color::Green, None, None);
    for (title, bindings) in sections {
        print_colored_text(stdout, &format!("{title}\r\n"), Color::Cyan, None, None);
        for (key, what) in *bindings {
            print_colored_text(stdout, &format!("  {key:<10}"), Color::Yellow, None, None);
            queue!(stdout, crossterm::style::Print(format!("{what}\r\n"))).unwrap();
        }
        queue!(stdout, crossterm::style::Print("\r\n")).unwrap();
    }
    print_colored_text(
        stdout,
        "Press h or Esc to close this help\r\n",
        Color::Magenta,
        None,
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_all_sections() {
        let mut out: Vec<u8> = Vec::new();
        draw_help(&mut out, 120);
        let rendered = String::from_utf8(out).unwrap();
        for section in ["Global", "Instances", "Clusters", "Deploy"] {
            assert!(rendered.contains(section));
        }
    }
}
