//! Screen fade-in.

use ratatui::style::Color;

use crate::theme::Palette;

/// Palette with every foreground blended toward the background by `opacity`.
#[must_use]
pub fn faded_palette(palette: Palette, opacity: f32) -> Palette {
    if opacity >= 1.0 {
        return palette;
    }
    let t = ease_out_cubic(opacity);
    let bg = palette.bg_dark;
    Palette {
        bg_border: blend(bg, palette.bg_border, t),
        text_primary: blend(bg, palette.text_primary, t),
        text_secondary: blend(bg, palette.text_secondary, t),
        text_muted: blend(bg, palette.text_muted, t),
        primary: blend(bg, palette.primary, t),
        accent: blend(bg, palette.accent, t),
        peach: blend(bg, palette.peach, t),
        green: blend(bg, palette.green, t),
        ..palette
    }
}

/// Linear RGB blend. Named colors cannot be interpolated, so they switch at the midpoint.
fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            Color::Rgb(mix(r0, r1, t), mix(g0, g1, t), mix(b0, b1, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
