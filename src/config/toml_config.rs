use crate::core::ConfigProvider;
use crate::domain::model::{GroupId, LayoutOptions, SceneStyle};
use crate::utils::error::{LayoutError, Result};
use crate::utils::validation::{
    validate_allowed_values, validate_non_empty_string, validate_path, validate_range,
    validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const SUPPORTED_FORMATS: &[&str] = &["json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub style: SceneStyle,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_jitter")]
    pub jitter_strength: f64,
    pub group_order: Option<Vec<GroupId>>,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            jitter_strength: default_jitter(),
            group_order: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
        }
    }
}

fn default_jitter() -> f64 {
    LayoutOptions::default().jitter_strength
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["json".to_string()]
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl LayoutConfig {
    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LayoutError::ConfigError {
            message: format!("could not read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML after substituting `${VAR}` placeholders.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| LayoutError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let input = validate_required_field("source.path", &self.source.path)?;
        validate_path("source.path", input)?;
        validate_path("output.path", &self.output.path)?;
        validate_range("layout.jitter_strength", self.layout.jitter_strength, 0.0, 1.0)?;
        validate_allowed_values("output.formats", &self.output.formats, SUPPORTED_FORMATS)?;

        if let Some(order) = &self.layout.group_order {
            for group in order {
                validate_non_empty_string("layout.group_order", group)?;
            }
        }

        for color in &self.style.palette {
            validate_non_empty_string("style.palette", color)?;
        }
        validate_non_empty_string("style.summary_color", &self.style.summary_color)?;
        validate_non_empty_string("style.bracket_color", &self.style.bracket_color)?;

        Ok(())
    }
}

impl ConfigProvider for LayoutConfig {
    fn input_path(&self) -> &str {
        self.source.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            group_order: self.layout.group_order.clone(),
            jitter_strength: self.layout.jitter_strength,
            style: self.style.clone(),
        }
    }
}

impl Validate for LayoutConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
