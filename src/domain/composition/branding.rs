//! Branding substitution over merged file contents.

use std::borrow::Cow;

use crate::domain::project::{GeneratedFile, ProjectConfig};

/// Placeholder vocabulary recognised in template bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingToken {
    ProjectName,
    PrimaryColor,
    SecondaryColor,
    BackgroundColor,
    TextColor,
    FontFamily,
}

impl BrandingToken {
    pub const ALL: [BrandingToken; 6] = [
        BrandingToken::ProjectName,
        BrandingToken::PrimaryColor,
        BrandingToken::SecondaryColor,
        BrandingToken::BackgroundColor,
        BrandingToken::TextColor,
        BrandingToken::FontFamily,
    ];

    /// Literal placeholder as it appears in content.
    pub fn placeholder(&self) -> &'static str {
        match self {
            BrandingToken::ProjectName => "{{projectName}}",
            BrandingToken::PrimaryColor => "{{primaryColor}}",
            BrandingToken::SecondaryColor => "{{secondaryColor}}",
            BrandingToken::BackgroundColor => "{{backgroundColor}}",
            BrandingToken::TextColor => "{{textColor}}",
            BrandingToken::FontFamily => "{{fontFamily}}",
        }
    }
}

/// Resolved token values for one project. Undefined fields have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingValues<'a> {
    values: Vec<(BrandingToken, &'a str)>,
}

impl<'a> BrandingValues<'a> {
    pub fn from_config(config: &'a ProjectConfig) -> Self {
        let branding = &config.branding;
        let candidates = [
            (BrandingToken::ProjectName, Some(config.project_name.as_str())),
            (BrandingToken::PrimaryColor, Some(branding.primary_color.as_str())),
            (BrandingToken::SecondaryColor, branding.secondary_color.as_deref()),
            (BrandingToken::BackgroundColor, branding.background_color.as_deref()),
            (BrandingToken::TextColor, branding.text_color.as_deref()),
            (BrandingToken::FontFamily, branding.font_family.as_deref()),
        ];

        let values = candidates
            .into_iter()
            .filter_map(|(token, value)| value.map(|v| (token, v)))
            .collect();
        Self { values }
    }

    pub fn get(&self, token: BrandingToken) -> Option<&'a str> {
        self.values.iter().find(|(t, _)| *t == token).map(|(_, v)| *v)
    }

    /// Replace every defined token in one left-to-right scan.
    ///
    /// Substituted values are never rescanned, and tokens without a value stay as-is.
    pub fn apply<'c>(&self, content: &'c str) -> Cow<'c, str> {
        if !content.contains("{{") || self.values.is_empty() {
            return Cow::Borrowed(content);
        }

        let mut output = String::with_capacity(content.len());
        let mut rest = content;
        let mut changed = false;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];

            let hit = self
                .values
                .iter()
                .find(|(token, _)| candidate.starts_with(token.placeholder()));

            match hit {
                Some((token, value)) => {
                    output.push_str(value);
                    rest = &candidate[token.placeholder().len()..];
                    changed = true;
                }
                None => {
                    output.push('{');
                    rest = &candidate[1..];
                }
            }
        }
        output.push_str(rest);

        if changed { Cow::Owned(output) } else { Cow::Borrowed(content) }
    }
}

/// Run the substitution over every merged file.
pub fn apply_branding(files: &mut [GeneratedFile], config: &ProjectConfig) {
    let values = BrandingValues::from_config(config);
    for file in files.iter_mut() {
        if let Cow::Owned(rewritten) = values.apply(&file.content) {
            file.content = rewritten;
        }
    }
}
