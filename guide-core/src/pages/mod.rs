//! Page view models
//!
//! Each page is a plain serializable struct with every display string already
//! resolved, so a renderer only has to lay it out.

pub mod devices;
pub mod essentials;
pub mod index;
pub mod navigation;
pub mod recommendations;

pub use devices::{DeviceDetail, DeviceItem, DevicesPage, device_detail, device_icon};
pub use essentials::{AccessView, EssentialsPage, HouseRuleView, HouseRulesView, WifiView};
pub use index::{IndexPage, NavTile, PropertyCard};
pub use navigation::{LanguageOption, NavLink, NavTarget};
pub use recommendations::{
    Notice, PartnerBlock, PartnerCard, RecommendationsPage, SectionLayout, SectionView,
    SpotlightView, ZoneSummary,
};
