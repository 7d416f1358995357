//! Seorank: SEO opportunity analyzer
//!
//! This library turns four free-text inputs (domain, keywords, competitor and
//! audience) into a synthetic opportunity score, a difficulty label, quick
//! wins, a three-sprint roadmap and projected metrics.

pub mod analyzer;
pub mod config;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// The four form fields an analysis is computed from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisInput {
    /// Site under analysis, loosely a hostname (may carry a scheme)
    pub domain: String,
    /// Comma-separated keyword phrases
    pub keywords: String,
    /// Direct competitor domain (may be empty)
    pub competitor: String,
    /// Free-text description of the target audience (may be empty)
    pub audience: String,
}

impl AnalysisInput {
    pub fn new(
        domain: impl Into<String>,
        keywords: impl Into<String>,
        competitor: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            keywords: keywords.into(),
            competitor: competitor.into(),
            audience: audience.into(),
        }
    }

    /// Values the landing page form is prefilled with
    pub fn sample() -> Self {
        Self::new(
            "midominio.com",
            "seo b2b, marketing digital, agencia inbound",
            "competidor-top.com",
            "CMOs de empresas SaaS en LatAm que buscan generar pipeline sin escalar paid ads",
        )
    }

    /// Keywords split on commas, trimmed, empty fragments dropped, order kept
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .collect()
    }
}

/// Result of a single analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Opportunity score (18-98)
    pub score: u8,
    /// Difficulty label derived from the score
    pub difficulty: Difficulty,
    /// Exactly three actionable recommendations
    pub quick_wins: Vec<String>,
    /// Exactly three sprints of three tasks each
    pub roadmap: Vec<RoadmapPhase>,
    /// Exactly three projected metric cards
    pub projections: Vec<Projection>,
}

/// Ranking difficulty. Lower difficulty means a higher opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Alta,
    Media,
    Baja,
}

impl Difficulty {
    pub fn from_score(score: u8) -> Self {
        match score {
            79..=u8::MAX => Difficulty::Baja,
            63..=78 => Difficulty::Media,
            _ => Difficulty::Alta,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Alta => write!(f, "Alta"),
            Difficulty::Media => write!(f, "Media"),
            Difficulty::Baja => write!(f, "Baja"),
        }
    }
}

/// One labeled sprint of the roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub title: String,
    pub items: Vec<String>,
}

/// A projected metric card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub label: String,
    /// Formatted value including its unit
    pub value: String,
    pub description: String,
}

/// Analyze the given input. Never fails; empty fields degrade to defaults.
pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    analyzer::ScoreEngine::analyze(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_list_trims_and_drops_empty() {
        let input = AnalysisInput::new("", " seo , ,marketing,, b2b ", "", "");
        assert_eq!(input.keyword_list(), vec!["seo", "marketing", "b2b"]);
    }

    #[test]
    fn test_keyword_list_empty() {
        let input = AnalysisInput::default();
        assert!(input.keyword_list().is_empty());
        let commas = AnalysisInput::new("", ",,, ,", "", "");
        assert!(commas.keyword_list().is_empty());
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::from_score(98), Difficulty::Baja);
        assert_eq!(Difficulty::from_score(79), Difficulty::Baja);
        assert_eq!(Difficulty::from_score(78), Difficulty::Media);
        assert_eq!(Difficulty::from_score(63), Difficulty::Media);
        assert_eq!(Difficulty::from_score(62), Difficulty::Alta);
        assert_eq!(Difficulty::from_score(18), Difficulty::Alta);
    }

    #[test]
    fn test_difficulty_serializes_as_label() {
        let json = serde_json::to_string(&Difficulty::Media).unwrap();
        assert_eq!(json, "\"Media\"");
        assert_eq!(Difficulty::Baja.to_string(), "Baja");
    }

    #[test]
    fn test_result_json_uses_camel_case() {
        let result = analyze(&AnalysisInput::sample());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("quickWins").is_some());
        assert!(value.get("quick_wins").is_none());
        assert_eq!(value["roadmap"][0]["title"], "Sprint técnico");
    }

    #[test]
    fn test_input_deserializes_partial() {
        let input: AnalysisInput = serde_json::from_str(r#"{ "domain": "a.com" }"#).unwrap();
        assert_eq!(input.domain, "a.com");
        assert!(input.keywords.is_empty());
    }
}
