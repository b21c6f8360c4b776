use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub teams_path: PathBuf,
    pub players_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            teams_path: PathBuf::from("team.json"),
            players_path: PathBuf::from("player.json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Rows shown on every ranking page
    pub top_n: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSettings,
    pub dashboard: DashboardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::default(),
            dashboard: DashboardSettings::default(),
        }
    }

    pub fn with_data_paths(mut self, teams_path: PathBuf, players_path: PathBuf) -> Self {
        self.data = DataSettings {
            teams_path,
            players_path,
        };
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.dashboard.top_n = top_n;
        self
    }
}
