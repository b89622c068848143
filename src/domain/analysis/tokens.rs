use serde::{Deserialize, Deserializer, Serialize};

/// Colors sampled from the reference site. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub muted: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyTokens {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
}

macro_rules! shape_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Parse a shape name, falling back to the default for unknown values.
            pub fn parse(raw: &str) -> Self {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::$default,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok($name::parse(&raw))
            }
        }
    };
}

shape_enum!(
    /// Button corner style.
    ButtonShape { Square => "square", Rounded => "rounded", Pill => "pill" } default Rounded
);

shape_enum!(
    /// Card surface style.
    CardShape { Flat => "flat", Bordered => "bordered", Elevated => "elevated" } default Bordered
);

shape_enum!(
    /// Form input style.
    InputShape { Square => "square", Rounded => "rounded", Underlined => "underlined" } default Rounded
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentShapes {
    pub buttons: ButtonShape,
    pub cards: CardShape,
    pub inputs: InputShape,
}

/// Visual language of the reference site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualTokens {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub components: ComponentShapes,
    pub dark_mode: Option<bool>,
}

impl VisualTokens {
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }
}
