//! Options of the Text panel.
//!
//! The panel renders `content` either as markdown, as raw HTML, or as source
//! code with the editor settings in [`CodeOptions`]. Persisted options travel
//! inside a [`PanelOptionsDoc`] stamped with [`PANEL_MODEL_VERSION`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ModelError, ModelResult};
use crate::schema::validate::validate_panel_options_json;
use crate::schema::version::{Compatibility, SchemaVersion};

/// Version of the panel options shape written by this crate.
pub const PANEL_MODEL_VERSION: SchemaVersion = SchemaVersion::new(0, 0);

/// Content shown by a freshly added Text panel.
pub const DEFAULT_CONTENT: &str =
    "# Title\n\nFor markdown syntax help: [commonmark.org/help](https://commonmark.org/help/)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Code,
    Html,
    #[default]
    Markdown,
}

impl TextMode {
    pub const ALL: [TextMode; 3] = [TextMode::Code, TextMode::Html, TextMode::Markdown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl FromStr for TextMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModelError::unknown_literal("text mode", s))
    }
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Go,
    Html,
    Json,
    Markdown,
    #[default]
    Plaintext,
    Sql,
    Typescript,
    Xml,
    Yaml,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 9] = [
        CodeLanguage::Go,
        CodeLanguage::Html,
        CodeLanguage::Json,
        CodeLanguage::Markdown,
        CodeLanguage::Plaintext,
        CodeLanguage::Sql,
        CodeLanguage::Typescript,
        CodeLanguage::Xml,
        CodeLanguage::Yaml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Html => "html",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Plaintext => "plaintext",
            Self::Sql => "sql",
            Self::Typescript => "typescript",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for CodeLanguage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ModelError::unknown_literal("code language", s))
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor settings used when the panel is in [`TextMode::Code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeOptions {
    pub language: CodeLanguage,
    pub show_line_numbers: bool,
    pub show_mini_map: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCodeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_line_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_mini_map: Option<bool>,
}

impl PartialCodeOptions {
    pub fn defaults() -> Self {
        Self {
            language: Some(CodeLanguage::Plaintext),
            show_line_numbers: Some(false),
            show_mini_map: Some(false),
        }
    }

    pub fn complete(self) -> CodeOptions {
        let d = CodeOptions::default();
        CodeOptions {
            language: self.language.unwrap_or(d.language),
            show_line_numbers: self.show_line_numbers.unwrap_or(d.show_line_numbers),
            show_mini_map: self.show_mini_map.unwrap_or(d.show_mini_map),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeOptions>,
    pub content: String,
    pub mode: TextMode,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            code: None,
            content: DEFAULT_CONTENT.to_string(),
            mode: TextMode::Markdown,
        }
    }
}

impl PanelOptions {
    /// Code settings in effect, or `None` unless the panel renders code.
    pub fn effective_code_options(&self) -> Option<CodeOptions> {
        match self.mode {
            TextMode::Code => Some(self.code.unwrap_or_default()),
            TextMode::Html | TextMode::Markdown => None,
        }
    }

    /// Decode from JSON, reporting every shape problem at once.
    pub fn from_value(value: serde_json::Value) -> ModelResult<Self> {
        validate_panel_options_json(&value).map_err(|e| {
            ModelError::validation(format!("text panel options validation failed: {e}"))
        })?;
        let opts: PanelOptions = serde_json::from_value(value)?;
        if opts.code.is_some() && opts.mode != TextMode::Code {
            tracing::warn!(mode = %opts.mode, "code options set but ignored outside code mode");
        }
        Ok(opts)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPanelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TextMode>,
}

impl PartialPanelOptions {
    /// Only `content` and `mode` carry defaults; `code` stays unset.
    pub fn defaults() -> Self {
        Self {
            code: None,
            content: Some(DEFAULT_CONTENT.to_string()),
            mode: Some(TextMode::Markdown),
        }
    }

    pub fn complete(self) -> PanelOptions {
        let d = PanelOptions::default();
        PanelOptions {
            code: self.code,
            content: self.content.unwrap_or(d.content),
            mode: self.mode.unwrap_or(d.mode),
        }
    }
}

/// Persisted Text panel options together with the version they were written at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelOptionsDoc {
    #[serde(default, deserialize_with = "version_or_default")]
    pub version: SchemaVersion,
    pub options: PanelOptions,
}

fn version_or_default<'de, D>(deserializer: D) -> Result<SchemaVersion, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<SchemaVersion>::deserialize(deserializer)?.unwrap_or_default())
}

impl PanelOptionsDoc {
    pub fn new(options: PanelOptions) -> Self {
        Self {
            version: PANEL_MODEL_VERSION,
            options,
        }
    }

    pub fn from_value(mut value: serde_json::Value) -> ModelResult<Self> {
        let options = value
            .get_mut("options")
            .map(serde_json::Value::take)
            .ok_or_else(|| ModelError::validation("$.options: required field is missing"))?;
        let version = match value.get("version") {
            None | Some(serde_json::Value::Null) => SchemaVersion::default(),
            Some(v) => serde_json::from_value(v.clone())?,
        };
        Ok(Self {
            version,
            options: PanelOptions::from_value(options)?,
        })
    }

    /// Classify the stored version. Outdated documents are only reported; the
    /// upgrade itself belongs to whatever migrates persisted dashboards. Only a
    /// newer major version is unsupported.
    pub fn check_version(&self) -> ModelResult<Compatibility> {
        let compat = PANEL_MODEL_VERSION.compatibility(self.version);
        match compat {
            Compatibility::Current => {}
            Compatibility::Outdated => {
                tracing::warn!(
                    stored = %self.version,
                    current = %PANEL_MODEL_VERSION,
                    "text panel options need migration"
                );
            }
            Compatibility::Newer if self.version.major > PANEL_MODEL_VERSION.major => {
                return Err(ModelError::validation(format!(
                    "text panel options version {} is newer than supported {}",
                    self.version, PANEL_MODEL_VERSION
                )));
            }
            // Minor bumps only add optional fields, which decode fine.
            Compatibility::Newer => {
                tracing::debug!(stored = %self.version, "text panel options from newer minor");
            }
        }
        Ok(compat)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/text.rs"]
mod tests;
