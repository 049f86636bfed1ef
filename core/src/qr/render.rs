//! Rasterization of encoded QR matrices.
//!
//! Draws the module matrix directly so the configured width (pixels),
//! margin (modules) and colors are honored in every encoding.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use super::QrOptions;
use crate::{Error, Result};

pub(super) fn to_data_url(code: &QrCode, options: &QrOptions) -> Result<String> {
    let png = to_png(code, options)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
}

pub(super) fn to_png(code: &QrCode, options: &QrOptions) -> Result<Vec<u8>> {
    let dark = parse_color(&options.color.dark)?;
    let light = parse_color(&options.color.light)?;

    let colors = code.to_colors();
    let modules = code.width() as u32;
    let total = modules + 2 * options.margin;
    // Whole pixels per module, scaled up to at least the requested width
    let scale = options.width.div_ceil(total).max(1);
    let size = total * scale;

    let mut img = RgbaImage::from_pixel(size, size, light);
    for y in 0..modules {
        for x in 0..modules {
            if colors[(y * modules + x) as usize] != Color::Dark {
                continue;
            }
            let px = (x + options.margin) * scale;
            let py = (y + options.margin) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, py + dy, dark);
                }
            }
        }
    }

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

pub(super) fn to_svg(code: &QrCode, options: &QrOptions) -> String {
    let colors = code.to_colors();
    let modules = code.width() as u32;
    let total = modules + 2 * options.margin;

    let mut path = String::new();
    for y in 0..modules {
        for x in 0..modules {
            if colors[(y * modules + x) as usize] == Color::Dark {
                path.push_str(&format!(
                    "M{} {}h1v1h-1z",
                    x + options.margin,
                    y + options.margin
                ));
            }
        }
    }

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{w}\" ",
            "viewBox=\"0 0 {t} {t}\" shape-rendering=\"crispEdges\">",
            "<rect width=\"{t}\" height=\"{t}\" fill=\"{light}\"/>",
            "<path d=\"{path}\" fill=\"{dark}\"/>",
            "</svg>"
        ),
        w = options.width,
        t = total,
        light = options.color.light,
        dark = options.color.dark,
        path = path,
    )
}

// Accepts #rrggbb (the leading # is optional)
fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Validation(format!("invalid hex color '{value}'")));
    }

    let channel =
        |i: usize| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("checked hex digits");
    Ok(Rgba([channel(0), channel(1), channel(2), 0xff]))
}
