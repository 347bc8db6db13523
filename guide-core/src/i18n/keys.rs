//! Static page strings
//!
//! Keys known at compile time. Generated keys (per device, per section,
//! per house rule) go through [`Translator::resolve`](super::Translator::resolve).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Navigation
    NavHome,
    NavDevices,
    NavRecommendations,
    NavTourism,
    NavContact,
    NavEssentials,
    NavDevicesDesc,
    NavRecommendationsDesc,
    NavTourismDesc,
    NavContactDesc,
    NavEssentialsDesc,

    // Index
    HeroSubtitle,
    WelcomeTitle,
    WelcomeBold,
    SelectLanguageTitle,
    SelectLanguageDesc,
    StartGuide,
    HostedBy,
    AppVersion,

    // Essentials
    EssentialsTitle,
    AccessTitle,
    AccessCode,
    AccessInstructions,
    AccessKeybox,
    AccessKeypad,
    AccessSmart,
    AccessDefault,
    InstructionsNote,
    NoInstructions,
    WifiTitle,
    WifiNetwork,
    WifiPassword,
    HouseRules,

    // Devices
    DevicesTitle,
    DevicesSubtitle,
    AppliancesTitle,
    ContactHost,
    UnlockDoor,
    UnlockDoorDesc,
    WifiCode,
    WifiCodeDesc,
    KeyboxHint,
    CardHint,

    // Recommendations
    RecommendationsTitle,
    PremiumTitle,
    LocalOffersIn,
    NoZoneTitle,
    NoZoneDesc,
    NoContentTitle,
    NoContentDesc,
    OfferAvailable,

    // Door control
    DoorsNotConfigured,
    DoorsLoadFailed,
    PortalOpening,
    PortalOpened,
    PortalUnavailable,
    HouseOpening,
    HouseOpened,
    HouseUnavailable,
    DoorOpenFailed,

    // Common
    Copied,
}

impl TextKey {
    /// Dotted path into the translation tree
    pub fn path(self) -> &'static str {
        match self {
            Self::NavHome => "navigation.nav_home",
            Self::NavDevices => "navigation.devices_title",
            Self::NavRecommendations => "navigation.recommendations_title",
            Self::NavTourism => "navigation.tourism_title",
            Self::NavContact => "navigation.contact_title",
            Self::NavEssentials => "navigation.essentials_title",
            Self::NavDevicesDesc => "navigation.devices_desc",
            Self::NavRecommendationsDesc => "navigation.recommendations_desc",
            Self::NavTourismDesc => "navigation.tourism_desc",
            Self::NavContactDesc => "navigation.contact_desc",
            Self::NavEssentialsDesc => "navigation.essentials_desc",

            Self::HeroSubtitle => "index.hero_subtitle",
            Self::WelcomeTitle => "index.welcome_title",
            Self::WelcomeBold => "index.welcome_bold",
            Self::SelectLanguageTitle => "index.select_language_title",
            Self::SelectLanguageDesc => "index.select_language_desc",
            Self::StartGuide => "index.start_guide",
            Self::HostedBy => "index.hosted_by",
            Self::AppVersion => "index.app_version",

            Self::EssentialsTitle => "essentials.title",
            Self::AccessTitle => "essentials.access_title",
            Self::AccessCode => "essentials.access_code",
            Self::AccessInstructions => "essentials.access_instructions",
            Self::AccessKeybox => "essentials.access_keybox",
            Self::AccessKeypad => "essentials.access_keypad",
            Self::AccessSmart => "essentials.access_smart",
            Self::AccessDefault => "essentials.access_default",
            Self::InstructionsNote => "essentials.instructions_note",
            Self::NoInstructions => "essentials.no_instructions",
            Self::WifiTitle => "essentials.wifi_title",
            Self::WifiNetwork => "essentials.wifi_network",
            Self::WifiPassword => "essentials.wifi_password",
            Self::HouseRules => "essentials.house_rules",

            Self::DevicesTitle => "devices.title",
            Self::DevicesSubtitle => "devices.subtitle",
            Self::AppliancesTitle => "devices.appliances_title",
            Self::ContactHost => "devices.contact_host",
            Self::UnlockDoor => "devices.unlock_door",
            Self::UnlockDoorDesc => "devices.unlock_door_desc",
            Self::WifiCode => "devices.wifi_code",
            Self::WifiCodeDesc => "devices.wifi_code_desc",
            Self::KeyboxHint => "devices.access_keybox_hint",
            Self::CardHint => "devices.access_card_hint",

            Self::RecommendationsTitle => "recommendations.title",
            Self::PremiumTitle => "recommendations.premium_title",
            Self::LocalOffersIn => "recommendations.local_offers_in",
            Self::NoZoneTitle => "recommendations.no_zone_title",
            Self::NoZoneDesc => "recommendations.no_zone_desc",
            Self::NoContentTitle => "recommendations.no_content_title",
            Self::NoContentDesc => "recommendations.no_content_desc",
            Self::OfferAvailable => "recommendations.offer_available",

            Self::DoorsNotConfigured => "doors.not_configured",
            Self::DoorsLoadFailed => "doors.load_failed",
            Self::PortalOpening => "doors.portal_opening",
            Self::PortalOpened => "doors.portal_opened",
            Self::PortalUnavailable => "doors.portal_unavailable",
            Self::HouseOpening => "doors.house_opening",
            Self::HouseOpened => "doors.house_opened",
            Self::HouseUnavailable => "doors.house_unavailable",
            Self::DoorOpenFailed => "doors.open_failed",

            Self::Copied => "common.copied",
        }
    }
}
