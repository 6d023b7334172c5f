//! Colour palettes used by the charts.

use plotters::prelude::*;

const COOLWARM_ANCHORS: [RGBColor; 3] = [
    RGBColor(59, 76, 192),
    RGBColor(221, 221, 221),
    RGBColor(180, 4, 38),
];

const BLUES_ANCHORS: [RGBColor; 3] = [
    RGBColor(247, 251, 255),
    RGBColor(107, 174, 214),
    RGBColor(8, 48, 107),
];

const SET2: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Evenly spaced sample positions in `[0, 1]`.
fn positions(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| {
        if n <= 1 {
            0.5
        } else {
            i as f64 / (n - 1) as f64
        }
    })
}

/// `n` colours from the blue-to-red diverging map.
pub fn coolwarm(n: usize) -> Vec<RGBColor> {
    let map = DerivedColorMap::new(&COOLWARM_ANCHORS);
    positions(n).map(|t| map.get_color(t)).collect()
}

/// `n` colours from the viridis map.
pub fn viridis(n: usize) -> Vec<RGBColor> {
    positions(n).map(ViridisRGB::get_color).collect()
}

/// `n` colours from the qualitative Set2 palette, cycling after eight.
pub fn set2(n: usize) -> Vec<RGBColor> {
    (0..n).map(|i| SET2[i % SET2.len()]).collect()
}

/// Sequential blue for a value in `[min, max]`.
pub fn blues(value: f64, min: f64, max: f64) -> RGBColor {
    let map = DerivedColorMap::new(&BLUES_ANCHORS);
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    map.get_color(t)
}

/// Text colour readable on top of `background`.
pub fn contrast_text(background: &RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = *background;
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance < 140.0 { WHITE } else { BLACK }
}
