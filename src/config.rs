//! Engine configuration
//!
//! All fields have defaults, so an empty document (or none at all) yields the
//! standard 210px layout.

use serde::{Serialize, Deserialize};
use crate::errors::ConfigError;
use crate::layout::LayoutConfig;
use crate::renderers::RenderConfig;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl EngineConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AfterTemplateSelector;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml_str(
            "layout:\n  after_template_selector: vowel_count\nrender:\n  glyph_size: 100\n",
        )
        .unwrap();
        assert_eq!(config.layout.after_template_selector, AfterTemplateSelector::VowelCount);
        assert_eq!(config.render.glyph_size, 100);
        assert_eq!(config.render.diacritic_unit, 42);
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(EngineConfig::from_yaml_str("").unwrap(), EngineConfig::default());
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = EngineConfig::from_json_str("{\"render\": {\"glyph_size\": \"big\"}}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
