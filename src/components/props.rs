use super::status::VineyardStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grove tools that get a Vineyard showcase page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroveTool {
    Amber,
    Ivy,
    Foliage,
    Meadow,
    Rings,
    Trails,
    Heartwood,
    Forage,
}

impl GroveTool {
    pub const ALL: [GroveTool; 8] = [
        GroveTool::Amber,
        GroveTool::Ivy,
        GroveTool::Foliage,
        GroveTool::Meadow,
        GroveTool::Rings,
        GroveTool::Trails,
        GroveTool::Heartwood,
        GroveTool::Forage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GroveTool::Amber => "amber",
            GroveTool::Ivy => "ivy",
            GroveTool::Foliage => "foliage",
            GroveTool::Meadow => "meadow",
            GroveTool::Rings => "rings",
            GroveTool::Trails => "trails",
            GroveTool::Heartwood => "heartwood",
            GroveTool::Forage => "forage",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GroveTool::Amber => "Amber",
            GroveTool::Ivy => "Ivy",
            GroveTool::Foliage => "Foliage",
            GroveTool::Meadow => "Meadow",
            GroveTool::Rings => "Rings",
            GroveTool::Trails => "Trails",
            GroveTool::Heartwood => "Heartwood",
            GroveTool::Forage => "Forage",
        }
    }
}

impl fmt::Display for GroveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VineyardLayoutProps {
    pub tool: GroveTool,
    /// Shown in the hero.
    pub tagline: String,
    pub status: VineyardStatus,
}

impl VineyardLayoutProps {
    /// Document title for the showcase page.
    #[must_use]
    pub fn page_title(&self) -> String {
        format!("{} · Grove Vineyard", self.tool)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCardProps {
    pub title: String,
    pub description: String,
    pub status: VineyardStatus,
    /// Lucide icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoContainerProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Demo runs against mock data rather than a live backend.
    #[serde(default)]
    pub mock_data: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExampleProps {
    /// Syntax highlighting language.
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl CodeExampleProps {
    /// Header caption: the filename when present, the language otherwise.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.language)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSectionProps {
    pub built: Vec<String>,
    pub in_progress: Vec<String>,
    pub planned: Vec<String>,
}

impl RoadmapSectionProps {
    #[must_use]
    pub fn total(&self) -> usize {
        self.built.len() + self.in_progress.len() + self.planned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of roadmap items already built, in whole percent.
    #[must_use]
    pub fn percent_built(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        u8::try_from(self.built.len() * 100 / total).unwrap_or(100)
    }
}
