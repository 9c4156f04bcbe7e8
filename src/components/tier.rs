//! Tier gating. Tiers are ordered, but whether a gate compares them by rank or
//! by an explicit allow-list is the caller's call: there is no default rule.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroveTier {
    Seedling,
    Sapling,
    Oak,
    Grove,
}

impl GroveTier {
    pub const ALL: [GroveTier; 4] = [
        GroveTier::Seedling,
        GroveTier::Sapling,
        GroveTier::Oak,
        GroveTier::Grove,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GroveTier::Seedling => "Seedling",
            GroveTier::Sapling => "Sapling",
            GroveTier::Oak => "Oak",
            GroveTier::Grove => "Grove",
        }
    }
}

impl fmt::Display for GroveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a [`TierGateProps`] decides access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TierRule {
    /// `current >= required` by tier rank.
    AtLeast,
    /// `current == required`.
    Exact,
    /// `current` must be listed; `required` is ignored.
    AllowList(Vec<GroveTier>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierGateProps {
    pub required: GroveTier,
    pub current: GroveTier,
}

impl TierGateProps {
    #[must_use]
    pub const fn new(required: GroveTier, current: GroveTier) -> Self {
        Self { required, current }
    }

    #[must_use]
    pub fn is_unlocked(&self, rule: &TierRule) -> bool {
        match rule {
            TierRule::AtLeast => self.current >= self.required,
            TierRule::Exact => self.current == self.required,
            TierRule::AllowList(allowed) => allowed.contains(&self.current),
        }
    }

    /// Upsell text for a locked gate.
    #[must_use]
    pub fn locked_message(&self) -> String {
        format!("Available on the {} plan", self.required)
    }
}
