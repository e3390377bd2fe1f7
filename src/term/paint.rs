use ansi_term::{Colour, Style};
use std::io::Write;
use tmlx::lang::Color;
use tmlx::mach::{Canvas, Runtime};

fn colour(color: Color) -> Colour {
    match color {
        Color::White => Colour::White,
        Color::Black => Colour::Black,
        Color::Red => Colour::Red,
        Color::Green => Colour::Green,
        Color::Blue => Colour::Blue,
        Color::Cyan => Colour::Cyan,
        Color::Magenta => Colour::Purple,
        Color::Yellow => Colour::Yellow,
    }
}

/// Two terminal cells per pixel, top row first. The cursor pixel is
/// drawn as `[]`.
pub fn render(canvas: &Canvas, cursor: Option<(usize, usize)>) -> String {
    let mut s = String::new();
    for y in (0..canvas.height()).rev() {
        for x in 0..canvas.width() {
            let color = canvas.get(x, y).unwrap_or_default();
            let mut style = Style::new().on(colour(color));
            let cell = if cursor == Some((x, y)) {
                style = style.fg(if color == Color::Black {
                    Colour::White
                } else {
                    Colour::Black
                });
                "[]"
            } else {
                "  "
            };
            s.push_str(&style.paint(cell).to_string());
        }
        s.push('\n');
    }
    s
}

/// Clear the terminal and draw the runtime's canvas and status.
pub fn redraw(runtime: &Runtime, ips: Option<f64>) {
    let mut out = std::io::stdout();
    let _ = write!(out, "\x1b[2J\x1b[H");
    let _ = write!(out, "{}", render(runtime.canvas(), Some(runtime.cursor())));
    let _ = write!(out, "line {}", runtime.instruction_index() + 1);
    if let Some(ips) = ips {
        let _ = write!(out, "  {:.1} IPS", ips);
    }
    let _ = writeln!(out);
    let _ = out.flush();
}
