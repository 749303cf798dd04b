use crate::domain::model::{parse_event_date, Event};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The portal's TOML events file: portal metadata, registration-service
/// settings, and the event records the inventory is seeded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub portal: PortalMeta,
    pub registration: Option<RegistrationConfig>,
    #[serde(default)]
    pub events: Vec<EventEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalMeta {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationConfig {
    pub endpoint: Option<String>,
    pub submit_delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    pub name: String,
    pub date: String,
    pub seats: u32,
    pub category: Option<String>,
}

impl PortalConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortalError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REGISTRATION_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The built-in configuration used when no events file exists.
    pub fn sample() -> Self {
        let entry = |name: &str, date: &str, seats: u32, category: &str| EventEntry {
            name: name.to_string(),
            date: date.to_string(),
            seats,
            category: Some(category.to_string()),
        };

        Self {
            portal: PortalMeta {
                name: "community-event-portal".to_string(),
                description: "Community event listings and registration".to_string(),
                version: "1.0.0".to_string(),
            },
            registration: None,
            events: vec![
                entry("Art Festival", "2025-06-10", 10, "Art"),
                entry("Cleanup Day", "2023-01-01", 5, "Cleanup"),
                entry("Book Exchange", "2025-07-20", 0, "Book"),
                entry("Food Drive", "2025-07-10", 50, "Food"),
                entry("Community Walk", "2025-07-10", 50, "Walk"),
            ],
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("registration.endpoint", self.registration_endpoint())?;
        validation::validate_positive_number(
            "registration.timeout_secs",
            self.request_timeout_secs() as usize,
            1,
        )?;

        if self.events.is_empty() {
            return Err(PortalError::MissingConfigError {
                field: "events".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for event in &self.events {
            validation::validate_non_empty_string("events.name", &event.name)?;
            parse_event_date(&event.date)?;

            if !seen.insert(event.name.as_str()) {
                return Err(PortalError::DuplicateEvent {
                    name: event.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Materialize the seed records for the inventory.
    pub fn seed_events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .map(|entry| {
                Ok(Event::new(
                    entry.name.clone(),
                    parse_event_date(&entry.date)?,
                    entry.seats,
                    entry.category.clone().unwrap_or_else(|| "General".to_string()),
                ))
            })
            .collect()
    }

    /// 覆寫報名服務端點 (命令列 --endpoint)
    pub fn set_endpoint(&mut self, endpoint: String) {
        self.registration
            .get_or_insert_with(RegistrationConfig::default)
            .endpoint = Some(endpoint);
    }

    pub fn registration_endpoint(&self) -> &str {
        self.registration
            .as_ref()
            .and_then(|r| r.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn submit_delay_ms(&self) -> u64 {
        self.registration
            .as_ref()
            .and_then(|r| r.submit_delay_ms)
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.registration
            .as_ref()
            .and_then(|r| r.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl ConfigProvider for PortalConfig {
    fn registration_endpoint(&self) -> &str {
        self.registration_endpoint()
    }

    fn submit_delay_ms(&self) -> u64 {
        self.submit_delay_ms()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs()
    }
}

impl Validate for PortalConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
