//! Door-lock Models
//!
//! Payloads of the door-lock vendor API and the rules that map its doors onto
//! the two buttons of the essentials page.

use serde::{Deserialize, Serialize};

/// Door attached to a lock controller (`GET /devices/{id}/doors`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    /// Vendor usage tag: `street`, `home`, ...
    #[serde(default, rename = "use")]
    pub usage: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Door {
    /// Identifier used in the open-door path: the usage tag, else the id
    pub fn reference(&self) -> Option<&str> {
        self.usage
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(self.id.as_deref())
    }

    fn matches(&self, usage: &str, name_hints: &[&str]) -> bool {
        if self
            .usage
            .as_deref()
            .is_some_and(|u| u.eq_ignore_ascii_case(usage))
        {
            return true;
        }
        let name = self.name.as_deref().unwrap_or_default().to_lowercase();
        name_hints.iter().any(|hint| name.contains(hint))
    }
}

/// Controller status (`GET /devices/{id}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceStatus {
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

impl DeviceStatus {
    pub fn is_online(&self) -> bool {
        self.online.unwrap_or(false) || self.status.as_deref() == Some("online")
    }
}

/// The two doors a guest can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorRole {
    /// Street door of the building
    Portal,
    /// Apartment door
    House,
}

impl DoorRole {
    pub const ALL: [DoorRole; 2] = [DoorRole::Portal, DoorRole::House];

    /// First door in `doors` that plays this role
    pub fn find(self, doors: &[Door]) -> Option<&Door> {
        match self {
            Self::Portal => doors.iter().find(|d| d.matches("street", &["calle", "portal"])),
            Self::House => doors.iter().find(|d| d.matches("home", &["casa", "interior"])),
        }
    }
}
