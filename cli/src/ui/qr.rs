//! Terminal QR code rendering.

use qrcode::{Color, QrCode};

/// Render a QR code as unicode block characters.
///
/// Each character covers 2 vertical modules, so the code stays compact
/// enough for a normal terminal window.
pub fn render_terminal(data: &str) -> anyhow::Result<String> {
    let code = QrCode::new(data.as_bytes())?;
    let width = code.width();
    let colors = code.to_colors();
    let rows: Vec<&[Color]> = colors.chunks(width).collect();

    let mut out = String::new();
    let blank_line = " ".repeat(width + 4);

    // Quiet zone above and below, two columns on each side
    out.push_str(&blank_line);
    out.push('\n');

    for pair in rows.chunks(2) {
        out.push_str("  ");
        for x in 0..width {
            let top = pair[0][x] == Color::Dark;
            let bottom = pair.get(1).map(|row| row[x] == Color::Dark).unwrap_or(false);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push_str("  \n");
    }

    out.push_str(&blank_line);
    out.push('\n');

    Ok(out)
}
