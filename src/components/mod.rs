//! View models for the Vineyard showcase components. Host UIs render these;
//! the types only carry props and the small amount of derived display data
//! (labels, badge styles, tier access) the components need.

mod account;
mod props;
mod status;
mod tier;

pub use account::{AuthButtonProps, UserMenuProps};
pub use props::{
    CodeExampleProps, DemoContainerProps, FeatureCardProps, GroveTool, RoadmapSectionProps,
    VineyardLayoutProps,
};
pub use status::{StatusBadgeProps, VineyardStatus};
pub use tier::{GroveTier, TierGateProps, TierRule};
