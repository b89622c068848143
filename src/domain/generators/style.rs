//! Style generator: visual tokens -> theme config and global stylesheet.

use tracing::debug;

use crate::domain::analysis::{ButtonShape, CardShape, InputShape, VisualTokens};
use crate::domain::generators::color::{
    Rgb, adjust_color, css_hsl, foreground_for, invert_color, is_dark, normalize,
};
use crate::domain::project::{GeneratedFile, ProjectConfig};

pub const THEME_CONFIG_PATH: &str = "tailwind.config.ts";
pub const GLOBAL_STYLESHEET_PATH: &str = "app/globals.css";

const FALLBACK_PRIMARY: &str = "#2563eb";
const FALLBACK_BACKGROUND: &str = "#ffffff";
const FALLBACK_SUCCESS: &str = "#16a34a";
const FALLBACK_WARNING: &str = "#f59e0b";
const FALLBACK_DESTRUCTIVE: &str = "#dc2626";
const FALLBACK_FONT: &str = "Inter";

/// Surface and brand colors before contrast colors are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub destructive: String,
}

impl BaseColors {
    /// Fill gaps in the sampled tokens from branding, then from fixed defaults.
    ///
    /// A value that is not a hex color counts as missing.
    pub fn derive(tokens: &VisualTokens, config: &ProjectConfig) -> Self {
        let colors = &tokens.colors;
        let branding = &config.branding;

        let primary = usable(colors.primary.as_deref(), "primary")
            .or_else(|| usable(Some(branding.primary_color.as_str()), "branding.primaryColor"))
            .map(normalize)
            .unwrap_or_else(|| FALLBACK_PRIMARY.to_string());
        let secondary = usable(colors.secondary.as_deref(), "secondary")
            .or_else(|| usable(branding.secondary_color.as_deref(), "branding.secondaryColor"))
            .map(normalize)
            .unwrap_or_else(|| adjust_color(&primary, -15.0));
        let accent = usable(colors.accent.as_deref(), "accent")
            .map(normalize)
            .unwrap_or_else(|| adjust_color(&primary, 20.0));
        let background = usable(colors.background.as_deref(), "background")
            .or_else(|| usable(branding.background_color.as_deref(), "branding.backgroundColor"))
            .map(normalize)
            .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string());
        let foreground = usable(colors.foreground.as_deref(), "foreground")
            .or_else(|| usable(branding.text_color.as_deref(), "branding.textColor"))
            .map(normalize)
            .unwrap_or_else(|| foreground_for(&background).to_string());

        let toward_contrast = |color: &str, amount: f64| {
            if is_dark(color) { adjust_color(color, amount) } else { adjust_color(color, -amount) }
        };

        let muted = usable(colors.muted.as_deref(), "muted")
            .map(normalize)
            .unwrap_or_else(|| toward_contrast(&background, 4.0));
        let muted_foreground = toward_contrast(&foreground, 40.0);
        let border = usable(colors.border.as_deref(), "border")
            .map(normalize)
            .unwrap_or_else(|| toward_contrast(&background, 10.0));
        let or_default = |sampled: &Option<String>, role: &str, fallback: &str| {
            usable(sampled.as_deref(), role).map(normalize).unwrap_or_else(|| fallback.to_string())
        };

        Self {
            primary,
            secondary,
            accent,
            background,
            foreground,
            muted,
            muted_foreground,
            border,
            success: or_default(&colors.success, "success", FALLBACK_SUCCESS),
            warning: or_default(&colors.warning, "warning", FALLBACK_WARNING),
            destructive: or_default(&colors.error, "error", FALLBACK_DESTRUCTIVE),
        }
    }

    /// Dark variant: surfaces mirror their lightness, brand colors lighten by 10 points.
    pub fn inverted(&self) -> Self {
        Self {
            primary: adjust_color(&self.primary, 10.0),
            secondary: adjust_color(&self.secondary, 10.0),
            accent: adjust_color(&self.accent, 10.0),
            background: invert_color(&self.background),
            foreground: invert_color(&self.foreground),
            muted: invert_color(&self.muted),
            muted_foreground: invert_color(&self.muted_foreground),
            border: invert_color(&self.border),
            success: adjust_color(&self.success, 10.0),
            warning: adjust_color(&self.warning, 10.0),
            destructive: adjust_color(&self.destructive, 10.0),
        }
    }

    /// Complete semantic palette as ordered `(token, color)` pairs.
    pub fn palette(&self) -> Vec<(&'static str, String)> {
        let with_fg = |color: &str| foreground_for(color).to_string();
        vec![
            ("background", self.background.clone()),
            ("foreground", self.foreground.clone()),
            ("primary", self.primary.clone()),
            ("primary-foreground", with_fg(&self.primary)),
            ("secondary", self.secondary.clone()),
            ("secondary-foreground", with_fg(&self.secondary)),
            ("accent", self.accent.clone()),
            ("accent-foreground", with_fg(&self.accent)),
            ("muted", self.muted.clone()),
            ("muted-foreground", self.muted_foreground.clone()),
            ("border", self.border.clone()),
            ("success", self.success.clone()),
            ("success-foreground", with_fg(&self.success)),
            ("warning", self.warning.clone()),
            ("warning-foreground", with_fg(&self.warning)),
            ("destructive", self.destructive.clone()),
            ("destructive-foreground", with_fg(&self.destructive)),
        ]
    }
}

fn usable<'a>(value: Option<&'a str>, role: &str) -> Option<&'a str> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    if Rgb::parse(value).is_none() {
        debug!(role, value, "ignoring color that is not hex");
        return None;
    }
    Some(value)
}

/// Corner-radius and shadow tokens derived from component shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTokens {
    pub button_radius: &'static str,
    pub card_radius: &'static str,
    pub card_shadow: &'static str,
    pub card_border_width: &'static str,
    pub input_radius: &'static str,
    pub input_border_width: &'static str,
}

impl ShapeTokens {
    pub fn derive(buttons: ButtonShape, cards: CardShape, inputs: InputShape) -> Self {
        let button_radius = match buttons {
            ButtonShape::Square => "0px",
            ButtonShape::Rounded => "0.5rem",
            ButtonShape::Pill => "9999px",
        };
        let (card_radius, card_shadow, card_border_width) = match cards {
            CardShape::Flat => ("0.5rem", "none", "0px"),
            CardShape::Bordered => ("0.75rem", "none", "1px"),
            CardShape::Elevated => (
                "0.75rem",
                "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
                "0px",
            ),
        };
        let (input_radius, input_border_width) = match inputs {
            InputShape::Square => ("0px", "1px"),
            InputShape::Rounded => ("0.375rem", "1px"),
            InputShape::Underlined => ("0px", "0 0 1px 0"),
        };

        Self {
            button_radius,
            card_radius,
            card_shadow,
            card_border_width,
            input_radius,
            input_border_width,
        }
    }

    fn css_variables(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("radius-button", self.button_radius),
            ("radius-card", self.card_radius),
            ("radius-input", self.input_radius),
            ("shadow-card", self.card_shadow),
            ("border-card", self.card_border_width),
            ("border-input", self.input_border_width),
        ]
    }
}

/// Resolved theme for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub light: BaseColors,
    pub dark: Option<BaseColors>,
    pub shapes: ShapeTokens,
    pub heading_font: String,
    pub body_font: String,
}

impl Theme {
    pub fn derive(tokens: &VisualTokens, config: &ProjectConfig) -> Self {
        let light = BaseColors::derive(tokens, config);
        let dark = tokens.dark_mode().then(|| light.inverted());
        let shapes = ShapeTokens::derive(
            tokens.components.buttons,
            tokens.components.cards,
            tokens.components.inputs,
        );

        let branded_font = config.branding.font_family.as_deref();
        let heading_font = tokens
            .typography
            .heading_font
            .as_deref()
            .or(branded_font)
            .unwrap_or(FALLBACK_FONT)
            .to_string();
        let body_font = tokens
            .typography
            .body_font
            .as_deref()
            .or(branded_font)
            .unwrap_or(heading_font.as_str())
            .to_string();

        Self { light, dark, shapes, heading_font, body_font }
    }
}

/// Produce the theme config and the global stylesheet. Both replace template defaults.
pub fn generate_style(tokens: &VisualTokens, config: &ProjectConfig) -> Vec<GeneratedFile> {
    let theme = Theme::derive(tokens, config);
    vec![
        GeneratedFile::replacing(THEME_CONFIG_PATH, render_theme_config(&theme)),
        GeneratedFile::replacing(GLOBAL_STYLESHEET_PATH, render_stylesheet(&theme)),
    ]
}

const PAIRED_COLORS: [&str; 7] =
    ["primary", "secondary", "accent", "muted", "success", "warning", "destructive"];

fn render_theme_config(theme: &Theme) -> String {
    let mut colors = String::new();
    for single in ["border", "background", "foreground"] {
        colors.push_str(&format!("        {single}: \"hsl(var(--{single}))\",\n"));
    }
    for name in PAIRED_COLORS {
        colors.push_str(&format!(
            "        {name}: {{\n          DEFAULT: \"hsl(var(--{name}))\",\n          foreground: \"hsl(var(--{name}-foreground))\",\n        }},\n"
        ));
    }

    let dark_mode = if theme.dark.is_some() { "[\"class\"]" } else { "\"media\"" };

    THEME_CONFIG_TEMPLATE
        .replace("__DARK_MODE__", dark_mode)
        .replace("__COLORS__", colors.trim_end_matches('\n'))
}

const THEME_CONFIG_TEMPLATE: &str = r#"import type { Config } from "tailwindcss";

const config: Config = {
  darkMode: __DARK_MODE__,
  content: ["./app/**/*.{ts,tsx}", "./components/**/*.{ts,tsx}", "./lib/**/*.{ts,tsx}"],
  theme: {
    extend: {
      colors: {
__COLORS__
      },
      borderRadius: {
        button: "var(--radius-button)",
        card: "var(--radius-card)",
        input: "var(--radius-input)",
      },
      boxShadow: {
        card: "var(--shadow-card)",
      },
      fontFamily: {
        heading: ["var(--font-heading)", "sans-serif"],
        body: ["var(--font-body)", "sans-serif"],
      },
    },
  },
  plugins: [],
};

export default config;
"#;

fn render_color_block(selector: &str, colors: &BaseColors, extra: &[(String, String)]) -> String {
    let mut block = format!("  {selector} {{\n");
    for (name, value) in colors.palette() {
        block.push_str(&format!("    --{}: {};\n", name, css_hsl(&value)));
    }
    for (name, value) in extra {
        block.push_str(&format!("    --{}: {};\n", name, value));
    }
    block.push_str("  }\n");
    block
}

fn render_stylesheet(theme: &Theme) -> String {
    let mut extra: Vec<(String, String)> = theme
        .shapes
        .css_variables()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    extra.push(("font-heading".to_string(), format!("\"{}\", sans-serif", theme.heading_font)));
    extra.push(("font-body".to_string(), format!("\"{}\", sans-serif", theme.body_font)));

    let mut out =
        String::from("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n@layer base {\n");
    out.push_str(&render_color_block(":root", &theme.light, &extra));
    if let Some(dark) = &theme.dark {
        out.push('\n');
        out.push_str(&render_color_block(".dark", dark, &[]));
    }
    out.push_str(STYLESHEET_BASE_RULES);
    out.push_str("}\n");
    out
}

const STYLESHEET_BASE_RULES: &str = r#"
  body {
    @apply bg-background text-foreground font-body antialiased;
  }

  h1,
  h2,
  h3,
  h4 {
    @apply font-heading;
  }

  button {
    border-radius: var(--radius-button);
  }

  input,
  textarea,
  select {
    border-radius: var(--radius-input);
    border-width: var(--border-input);
  }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ColorTokens;
    use crate::domain::generators::color::{DARK_TEXT, LIGHT_TEXT};
    use crate::domain::project::Branding;

    fn config() -> ProjectConfig {
        ProjectConfig::new("Acme", Branding::new("#F97316"))
    }

    #[test]
    fn emits_exactly_two_replacing_files() {
        let files = generate_style(&VisualTokens::default(), &config());

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec![THEME_CONFIG_PATH, GLOBAL_STYLESHEET_PATH]);
        assert!(files.iter().all(|f| f.overwrite));
    }

    #[test]
    fn missing_tokens_fall_back_to_branding() {
        let colors = BaseColors::derive(&VisualTokens::default(), &config());

        assert_eq!(colors.primary, "#f97316");
        assert_eq!(colors.background, "#ffffff");
        assert_eq!(colors.foreground, DARK_TEXT);
    }

    #[test]
    fn sampled_tokens_take_precedence() {
        let tokens = VisualTokens {
            colors: ColorTokens {
                primary: Some("#2563EB".to_string()),
                background: Some("#0b0b0f".to_string()),
                ..ColorTokens::default()
            },
            ..VisualTokens::default()
        };

        let colors = BaseColors::derive(&tokens, &config());

        assert_eq!(colors.primary, "#2563eb");
        assert_eq!(colors.foreground, LIGHT_TEXT);
    }

    #[test]
    fn functional_color_notation_falls_back_to_branding() {
        let tokens = VisualTokens {
            colors: ColorTokens {
                primary: Some("rgb(37, 99, 235)".to_string()),
                success: Some("hsl(142 71% 45%)".to_string()),
                ..ColorTokens::default()
            },
            ..VisualTokens::default()
        };

        let colors = BaseColors::derive(&tokens, &config());
        assert_eq!(colors.primary, "#f97316");
        assert_eq!(colors.success, FALLBACK_SUCCESS);

        let stylesheet = &generate_style(&tokens, &config())[1].content;
        assert!(!stylesheet.contains("rgb("));
        assert!(stylesheet.contains(&format!("--primary: {};", css_hsl("#f97316"))));
    }

    #[test]
    fn palette_has_all_semantic_roles() {
        let palette = BaseColors::derive(&VisualTokens::default(), &config()).palette();
        let names: Vec<&str> = palette.iter().map(|(name, _)| *name).collect();

        for role in [
            "primary", "secondary", "accent", "background", "foreground", "muted", "border",
            "success", "warning", "destructive",
        ] {
            assert!(names.contains(&role), "missing {role}");
        }
        assert!(names.contains(&"destructive-foreground"));
    }

    #[test]
    fn dark_mode_adds_inverted_block() {
        let tokens = VisualTokens { dark_mode: Some(true), ..VisualTokens::default() };

        let files = generate_style(&tokens, &config());

        assert!(files[1].content.contains(".dark {"));
        assert!(files[1].content.contains("--background: 0 0% 0%;"));
        assert!(files[0].content.contains("darkMode: [\"class\"]"));
    }

    #[test]
    fn light_only_theme_has_no_dark_block() {
        let files = generate_style(&VisualTokens::default(), &config());
        assert!(!files[1].content.contains(".dark"));
        assert!(files[0].content.contains("darkMode: \"media\""));
    }

    #[test]
    fn shapes_map_to_radius_tokens() {
        let shapes =
            ShapeTokens::derive(ButtonShape::Pill, CardShape::Elevated, InputShape::Underlined);

        assert_eq!(shapes.button_radius, "9999px");
        assert_ne!(shapes.card_shadow, "none");
        assert_eq!(shapes.input_border_width, "0 0 1px 0");
    }

    #[test]
    fn fonts_fall_back_from_heading_to_body() {
        let mut cfg = config();
        cfg.branding.font_family = None;
        let mut tokens = VisualTokens::default();
        tokens.typography.heading_font = Some("Poppins".to_string());

        let theme = Theme::derive(&tokens, &cfg);

        assert_eq!(theme.heading_font, "Poppins");
        assert_eq!(theme.body_font, "Poppins");
    }
}
