//! Config schema and deserialization

use serde::{Deserialize, Serialize};

use crate::AnalysisInput;

/// Default form values. Any field left out stays unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl InputDefaults {
    /// Fill unset fields from `base`
    fn merge_from(&mut self, base: InputDefaults) {
        self.domain = self.domain.take().or(base.domain);
        self.keywords = self.keywords.take().or(base.keywords);
        self.competitor = self.competitor.take().or(base.competitor);
        self.audience = self.audience.take().or(base.audience);
    }
}

/// Root config structure for .seorankrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum opportunity score (exit 1 if below)
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Values used for any field not given on the command line
    #[serde(default)]
    pub defaults: InputDefaults,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        self.defaults.merge_from(base.defaults);
    }

    /// Resolve the analysis input: explicit values first, then config
    /// defaults, then `fallback`.
    pub fn resolve_input(&self, explicit: PartialInput, fallback: AnalysisInput) -> AnalysisInput {
        let d = &self.defaults;
        AnalysisInput {
            domain: explicit
                .domain
                .or_else(|| d.domain.clone())
                .unwrap_or(fallback.domain),
            keywords: explicit
                .keywords
                .or_else(|| d.keywords.clone())
                .unwrap_or(fallback.keywords),
            competitor: explicit
                .competitor
                .or_else(|| d.competitor.clone())
                .unwrap_or(fallback.competitor),
            audience: explicit
                .audience
                .or_else(|| d.audience.clone())
                .unwrap_or(fallback.audience),
        }
    }
}

/// Fields supplied explicitly (e.g. as command-line flags)
pub type PartialInput = InputDefaults;
