pub mod config;
pub mod db;
pub mod i18n;
pub mod security;

pub use config::AppConfig;
pub use i18n::Language;
