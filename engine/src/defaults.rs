use crate::games::connect_four::ConnectFourSettings;

impl ConnectFourSettings {
    pub fn default_settings() -> Self {
        Self {
            columns: 7,
            rows: 6,
            search_depth: 1,
        }
    }
}
