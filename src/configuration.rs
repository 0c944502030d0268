use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::contact::models::email::{ContactEmail, EmailError};

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub general: GeneralSettings,
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

impl Settings {
    pub fn log_level(&self) -> String {
        self.general.log_level.clone()
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct GeneralSettings {
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<ContactEmail, EmailError> {
        ContactEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Who receives the notifications and signs the auto-replies.
#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    pub operator_email: String,
    pub operator_name: String,
}

impl ContactSettings {
    pub fn operator(&self) -> Result<ContactEmail, EmailError> {
        ContactEmail::parse(self.operator_email.clone())
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN overrides the file value.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}
