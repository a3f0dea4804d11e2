//! Assignment categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assignment category chosen for a submission.
///
/// Serialized with its display name (`"Web Development"`); parsed from either
/// the display name or a kebab-case slug (`web-development`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssignmentType {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Generative AI")]
    GenerativeAi,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "Graphics/Design")]
    GraphicsDesign,
}

impl AssignmentType {
    pub const ALL: [AssignmentType; 5] = [
        AssignmentType::WebDevelopment,
        AssignmentType::DataAnalysis,
        AssignmentType::GenerativeAi,
        AssignmentType::Cybersecurity,
        AssignmentType::GraphicsDesign,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AssignmentType::WebDevelopment => "Web Development",
            AssignmentType::DataAnalysis => "Data Analysis",
            AssignmentType::GenerativeAi => "Generative AI",
            AssignmentType::Cybersecurity => "Cybersecurity",
            AssignmentType::GraphicsDesign => "Graphics/Design",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AssignmentType::WebDevelopment => "web-development",
            AssignmentType::DataAnalysis => "data-analysis",
            AssignmentType::GenerativeAi => "generative-ai",
            AssignmentType::Cybersecurity => "cybersecurity",
            AssignmentType::GraphicsDesign => "graphics-design",
        }
    }

    /// Built-in required rules for this category.
    pub fn default_rules(self) -> &'static [&'static str] {
        match self {
            AssignmentType::WebDevelopment => &[".html", ".css", ".js", "README.md"],
            AssignmentType::DataAnalysis => &[".ipynb", ".csv", "README.md"],
            AssignmentType::GenerativeAi => &[".py", ".txt", "README.md"],
            AssignmentType::Cybersecurity => &[".txt", ".py", "README.md"],
            AssignmentType::GraphicsDesign => &[".png", ".psd", "README.md"],
        }
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssignmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AssignmentType::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = AssignmentType::ALL.iter().map(|a| a.slug()).collect();
                format!("unknown assignment type '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
