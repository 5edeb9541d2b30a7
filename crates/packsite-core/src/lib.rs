pub mod app_config;
pub mod brand;
pub mod config;
pub mod content;
pub mod nav;
pub mod registry;
pub mod seo;
pub mod urls;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use brand::{classify_host, BrandId, DEFAULT_BRAND};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{content_for, ContentError, ContentKey, DomainContent};
pub use nav::{nav_items, NavItem};
pub use registry::{Audience, BrandConfig, BrandRegistry, RegistryError, Tone};
pub use seo::{page_meta, PageMeta};
pub use urls::{HostContext, UrlResolver};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("validation failed: {0}")]
    Validation(String),
}
