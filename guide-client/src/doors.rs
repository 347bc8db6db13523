//! Door control
//!
//! Talks to the door-lock vendor API and drives the two door buttons of the
//! essentials page. Every call is bounded by a timeout and never retried; the
//! guest gets a one-line [`Notification`] for each outcome.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use guide_core::models::{Apartment, DeviceStatus, Door, DoorRole};
use guide_core::{TextKey, Translator};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::DoorApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::handle_json;

/// Door-lock vendor API
#[async_trait]
pub trait DoorLockApi: Send + Sync {
    /// `GET /devices/{id}`
    async fn device_status(&self, device_id: &str) -> ClientResult<DeviceStatus>;

    /// `GET /devices/{id}/doors`
    async fn doors(&self, device_id: &str) -> ClientResult<Vec<Door>>;

    /// `POST /devices/{id}/open-door/{door}`
    async fn open_door(&self, device_id: &str, door: &str) -> ClientResult<Value>;
}

/// Raixer REST client with Basic authentication
#[derive(Clone)]
pub struct RaixerClient {
    client: Client,
    base_url: String,
    user: String,
    secret: String,
}

impl std::fmt::Debug for RaixerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaixerClient")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl RaixerClient {
    pub fn new(config: &DoorApiConfig, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user: config.user.clone(),
            secret: config.secret.clone(),
        })
    }

    fn device_url(&self, device_id: &str) -> String {
        format!("{}/devices/{}", self.base_url, urlencoding::encode(device_id))
    }
}

#[async_trait]
impl DoorLockApi for RaixerClient {
    async fn device_status(&self, device_id: &str) -> ClientResult<DeviceStatus> {
        let response = self
            .client
            .get(self.device_url(device_id))
            .basic_auth(&self.user, Some(&self.secret))
            .send()
            .await?;
        handle_json(response).await
    }

    async fn doors(&self, device_id: &str) -> ClientResult<Vec<Door>> {
        let response = self
            .client
            .get(format!("{}/doors", self.device_url(device_id)))
            .basic_auth(&self.user, Some(&self.secret))
            .send()
            .await?;
        handle_json(response).await
    }

    async fn open_door(&self, device_id: &str, door: &str) -> ClientResult<Value> {
        let url = format!(
            "{}/open-door/{}",
            self.device_url(device_id),
            urlencoding::encode(door)
        );
        let response = self
            .client
            .post(url)
            .basic_auth(&self.user, Some(&self.secret))
            .send()
            .await?;
        handle_json(response).await
    }
}

// =============================================================================
// Door panel
// =============================================================================

/// Status light next to a door button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LedState {
    /// No such door on this apartment
    Unavailable,
    Checking,
    Online,
    Offline,
    /// Door was just opened
    Opened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// One-line message shown to the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Result of pressing a door button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoorOutcome {
    pub notification: Notification,
    pub led: LedState,
}

/// Serializable state of one door button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoorButton {
    pub role: DoorRole,
    pub enabled: bool,
    pub led: LedState,
}

/// Door buttons of one apartment
pub struct DoorPanel {
    api: Arc<dyn DoorLockApi>,
    device_id: Option<String>,
    portal: Option<Door>,
    house: Option<Door>,
    timeout: Duration,
}

impl DoorPanel {
    /// Discover the apartment's doors.
    ///
    /// The returned notification is set when door control is not configured
    /// or the door list could not be loaded; both leave every button disabled.
    pub async fn load(
        api: Arc<dyn DoorLockApi>,
        apartment: &Apartment,
        translator: &Translator,
        timeout: Duration,
    ) -> (Self, Option<Notification>) {
        let mut panel = Self {
            api,
            device_id: apartment.door_device_id().map(str::to_string),
            portal: None,
            house: None,
            timeout,
        };

        let Some(device_id) = panel.device_id.clone() else {
            tracing::info!(apartment = %apartment.id, "Door control not configured");
            let notice = Notification::new(
                NotificationLevel::Info,
                translator.text_or(
                    TextKey::DoorsNotConfigured,
                    "Control de puertas no configurado en este apartamento",
                ),
            );
            return (panel, Some(notice));
        };

        let doors = match panel.bounded(panel.api.doors(&device_id)).await {
            Ok(doors) => doors,
            Err(e) => {
                tracing::error!(device_id = %device_id, error = %e, "Failed to list doors");
                let notice = Notification::new(
                    NotificationLevel::Error,
                    translator.text_or(
                        TextKey::DoorsLoadFailed,
                        "No se pudieron cargar las puertas (contacta al anfitrión)",
                    ),
                );
                return (panel, Some(notice));
            }
        };

        tracing::debug!(device_id = %device_id, count = doors.len(), "Doors loaded");
        panel.portal = DoorRole::Portal.find(&doors).cloned();
        panel.house = DoorRole::House.find(&doors).cloned();
        (panel, None)
    }

    pub fn door(&self, role: DoorRole) -> Option<&Door> {
        match role {
            DoorRole::Portal => self.portal.as_ref(),
            DoorRole::House => self.house.as_ref(),
        }
    }

    pub fn is_enabled(&self, role: DoorRole) -> bool {
        self.device_id.is_some() && self.door(role).is_some()
    }

    /// Light for `role`: `Unavailable` without a door, otherwise the controller status
    pub async fn status(&self, role: DoorRole) -> LedState {
        let (Some(device_id), true) = (self.device_id.as_deref(), self.is_enabled(role)) else {
            return LedState::Unavailable;
        };
        match self.bounded(self.api.device_status(device_id)).await {
            Ok(status) if status.is_online() => LedState::Online,
            Ok(_) => LedState::Offline,
            Err(e) => {
                tracing::warn!(device_id = %device_id, error = %e, "Device status check failed");
                LedState::Offline
            }
        }
    }

    /// Both buttons with their current lights
    pub async fn buttons(&self) -> Vec<DoorButton> {
        let mut buttons = Vec::with_capacity(DoorRole::ALL.len());
        for role in DoorRole::ALL {
            buttons.push(DoorButton {
                role,
                enabled: self.is_enabled(role),
                led: self.status(role).await,
            });
        }
        buttons
    }

    /// Notification shown while the open request is in flight
    pub fn opening_notice(&self, role: DoorRole, translator: &Translator) -> Notification {
        let text = match role {
            DoorRole::Portal => translator.text_or(TextKey::PortalOpening, "Abriendo portal..."),
            DoorRole::House => {
                translator.text_or(TextKey::HouseOpening, "Abriendo puerta interior...")
            }
        };
        Notification::new(NotificationLevel::Info, text)
    }

    /// Open the door playing `role`. One attempt only.
    pub async fn open(&self, role: DoorRole, translator: &Translator) -> DoorOutcome {
        let target = self
            .device_id
            .as_deref()
            .zip(self.door(role).and_then(Door::reference));
        let Some((device_id, reference)) = target else {
            let text = match role {
                DoorRole::Portal => {
                    translator.text_or(TextKey::PortalUnavailable, "Portal no disponible")
                }
                DoorRole::House => {
                    translator.text_or(TextKey::HouseUnavailable, "Puerta interior no disponible")
                }
            };
            return DoorOutcome {
                notification: Notification::new(NotificationLevel::Error, text),
                led: LedState::Unavailable,
            };
        };

        tracing::info!(device_id = %device_id, door = %reference, ?role, "Opening door");
        match self.bounded(self.api.open_door(device_id, reference)).await {
            Ok(_) => {
                let text = match role {
                    DoorRole::Portal => {
                        translator.text_or(TextKey::PortalOpened, "Portal abierto correctamente")
                    }
                    DoorRole::House => {
                        translator.text_or(TextKey::HouseOpened, "Puerta abierta correctamente")
                    }
                };
                DoorOutcome {
                    notification: Notification::new(NotificationLevel::Success, text),
                    led: LedState::Opened,
                }
            }
            Err(e) => {
                tracing::error!(device_id = %device_id, door = %reference, error = %e, "Door open failed");
                let prefix = translator.text_or(TextKey::DoorOpenFailed, "Error");
                DoorOutcome {
                    notification: Notification::new(
                        NotificationLevel::Error,
                        format!("{prefix}: {e}"),
                    ),
                    led: self.status(role).await,
                }
            }
        }
    }

    async fn bounded<T>(&self, call: impl Future<Output = ClientResult<T>>) -> ClientResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))?
    }
}
