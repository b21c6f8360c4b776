pub mod settings;

pub use settings::{AppConfig, DashboardSettings, DataSettings};
