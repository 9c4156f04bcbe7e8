use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle badge shown on tools and features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VineyardStatus {
    Ready,
    Preview,
    Demo,
    ComingSoon,
    InDevelopment,
}

impl VineyardStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VineyardStatus::Ready => "ready",
            VineyardStatus::Preview => "preview",
            VineyardStatus::Demo => "demo",
            VineyardStatus::ComingSoon => "coming-soon",
            VineyardStatus::InDevelopment => "in-development",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            VineyardStatus::Ready => "Ready",
            VineyardStatus::Preview => "Preview",
            VineyardStatus::Demo => "Demo",
            VineyardStatus::ComingSoon => "Coming Soon",
            VineyardStatus::InDevelopment => "In Development",
        }
    }

    /// Utility classes for the badge pill.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            VineyardStatus::Ready => {
                "rounded-full border border-emerald-200 bg-emerald-50 px-2.5 py-0.5 text-xs font-medium text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
            VineyardStatus::Preview => {
                "rounded-full border border-blue-200 bg-blue-50 px-2.5 py-0.5 text-xs font-medium text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
            VineyardStatus::Demo => {
                "rounded-full border border-violet-200 bg-violet-50 px-2.5 py-0.5 text-xs font-medium text-violet-700 dark:border-violet-400 dark:bg-violet-900/30 dark:text-violet-200"
            }
            VineyardStatus::ComingSoon => {
                "rounded-full border border-amber-200 bg-amber-50 px-2.5 py-0.5 text-xs font-medium text-amber-700 dark:border-amber-400 dark:bg-amber-900/30 dark:text-amber-200"
            }
            VineyardStatus::InDevelopment => {
                "rounded-full border border-gray-200 bg-gray-50 px-2.5 py-0.5 text-xs font-medium text-gray-700 dark:border-gray-500 dark:bg-gray-800 dark:text-gray-300"
            }
        }
    }
}

impl fmt::Display for VineyardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadgeProps {
    pub status: VineyardStatus,
}

impl StatusBadgeProps {
    #[must_use]
    pub const fn new(status: VineyardStatus) -> Self {
        Self { status }
    }
}
