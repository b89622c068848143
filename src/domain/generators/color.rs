//! Deterministic color derivations used by the style generator.
//!
//! All math runs in HSL with lightness and saturation in percent. Inputs that
//! are not `#rgb` or `#rrggbb` hex colors are passed through unchanged; the
//! style generator discards them before they reach these helpers.

/// Foreground used on light surfaces.
pub const DARK_TEXT: &str = "#0a0a0a";
/// Foreground used on dark surfaces.
pub const LIGHT_TEXT: &str = "#fafafa";

/// WCAG relative luminance above which dark text is used.
const LUMINANCE_THRESHOLD: f64 = 0.179;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Degrees, 0..360.
    pub h: f64,
    /// Percent, 0..=100.
    pub s: f64,
    /// Percent, 0..=100.
    pub l: f64,
}

impl Rgb {
    pub fn parse(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#').unwrap_or(raw.trim());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Some(Self { r: expand(0)?, g: expand(1)?, b: expand(2)? })
            }
            6 => Some(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l > 0.5 { delta / (2.0 - max - min) } else { delta / (max + min) };
        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl { h: h * 60.0, s: s * 100.0, l: l * 100.0 }
    }

    /// WCAG 2.x relative luminance.
    pub fn relative_luminance(self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;
        let h = self.h.rem_euclid(360.0) / 360.0;

        if s == 0.0 {
            let v = to_channel(l);
            return Rgb { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb {
            r: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: to_channel(hue_to_rgb(p, q, h)),
            b: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }

    /// `H S% L%` triplet for CSS custom properties.
    pub fn css_triplet(self) -> String {
        format!("{:.0} {:.0}% {:.0}%", self.h.round() % 360.0, self.s.round(), self.l.round())
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Normalize to lowercase `#rrggbb`, or return the input unchanged.
pub fn normalize(color: &str) -> String {
    Rgb::parse(color).map(Rgb::to_hex).unwrap_or_else(|| color.to_string())
}

/// Shift HSL lightness by `percent` points, clamped to 0..=100.
pub fn adjust_color(color: &str, percent: f64) -> String {
    match Rgb::parse(color) {
        Some(rgb) => {
            let mut hsl = rgb.to_hsl();
            hsl.l = (hsl.l + percent).clamp(0.0, 100.0);
            hsl.to_rgb().to_hex()
        }
        None => color.to_string(),
    }
}

/// Readable text color for a surface of the given color.
pub fn foreground_for(color: &str) -> &'static str {
    match Rgb::parse(color) {
        Some(rgb) if rgb.relative_luminance() <= LUMINANCE_THRESHOLD => LIGHT_TEXT,
        _ => DARK_TEXT,
    }
}

pub fn is_dark(color: &str) -> bool {
    foreground_for(color) == LIGHT_TEXT
}

/// Mirror lightness (`L' = 100 - L`), keeping hue and saturation.
pub fn invert_color(color: &str) -> String {
    match Rgb::parse(color) {
        Some(rgb) => {
            let mut hsl = rgb.to_hsl();
            hsl.l = 100.0 - hsl.l;
            hsl.to_rgb().to_hex()
        }
        None => color.to_string(),
    }
}

/// CSS `H S% L%` triplet, or the raw value for non-hex input.
pub fn css_hsl(color: &str) -> String {
    match Rgb::parse(color) {
        Some(rgb) => rgb.to_hsl().css_triplet(),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::parse("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::parse("F97316"), Some(Rgb { r: 0xf9, g: 0x73, b: 0x16 }));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("rgb(0,0,0)"), None);
    }

    #[test]
    fn hsl_round_trip_is_stable() {
        for hex in ["#f97316", "#2563eb", "#111827", "#ffffff", "#000000", "#16a34a"] {
            let rgb = Rgb::parse(hex).unwrap();
            assert_eq!(rgb.to_hsl().to_rgb().to_hex(), hex);
        }
    }

    #[test]
    fn adjust_clamps_lightness() {
        assert_eq!(adjust_color("#ffffff", 20.0), "#ffffff");
        assert_eq!(adjust_color("#000000", -20.0), "#000000");
        assert_eq!(adjust_color("#000000", 50.0), "#808080");
    }

    #[test]
    fn adjust_passes_through_invalid_colors() {
        assert_eq!(adjust_color("tomato", 10.0), "tomato");
    }

    #[test]
    fn foreground_contrast() {
        assert_eq!(foreground_for("#ffffff"), DARK_TEXT);
        assert_eq!(foreground_for("#000000"), LIGHT_TEXT);
        assert_eq!(foreground_for("#2563eb"), LIGHT_TEXT);
        assert_eq!(foreground_for("#facc15"), DARK_TEXT);
    }

    #[test]
    fn invert_mirrors_lightness() {
        assert_eq!(invert_color("#ffffff"), "#000000");
        assert_eq!(invert_color("#0a0a0a"), "#f5f5f5");
        assert_eq!(invert_color("not-a-color"), "not-a-color");
    }

    #[test]
    fn css_triplet_format() {
        assert_eq!(css_hsl("#ffffff"), "0 0% 100%");
        assert_eq!(css_hsl("#000000"), "0 0% 0%");
        assert_eq!(css_hsl("#ff0000"), "0 100% 50%");
    }
}
