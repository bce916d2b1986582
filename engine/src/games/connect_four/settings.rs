use serde::{Deserialize, Serialize};

pub const MIN_SEARCH_DEPTH: usize = 1;
pub const MAX_SEARCH_DEPTH: usize = 7;

// Search cost grows as columns^depth; the dimension cap keeps the deepest
// level tractable.
pub const MAX_BOARD_DIMENSION: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourSettings {
    pub columns: usize,
    pub rows: usize,
    pub search_depth: usize,
}

impl ConnectFourSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.columns == 0 || self.rows == 0 {
            return Err("Board dimensions must be positive".to_string());
        }
        if self.columns > MAX_BOARD_DIMENSION || self.rows > MAX_BOARD_DIMENSION {
            return Err(format!(
                "Board dimensions cannot exceed {}",
                MAX_BOARD_DIMENSION
            ));
        }
        if self.columns < 4 && self.rows < 4 {
            return Err("Board must fit a line of four in at least one direction".to_string());
        }
        if self.search_depth < MIN_SEARCH_DEPTH || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "Search depth must be between {} and {}",
                MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(ConnectFourSettings::default_settings().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut settings = ConnectFourSettings::default_settings();
        settings.columns = 0;
        assert!(settings.validate().is_err());

        let mut settings = ConnectFourSettings::default_settings();
        settings.rows = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let mut settings = ConnectFourSettings::default_settings();
        settings.columns = MAX_BOARD_DIMENSION + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_board_too_small_for_a_line() {
        let settings = ConnectFourSettings {
            columns: 3,
            rows: 3,
            search_depth: 1,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_accepts_single_column_board_with_tall_rows() {
        let settings = ConnectFourSettings {
            columns: 1,
            rows: 4,
            search_depth: 1,
        };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range_search_depth() {
        let mut settings = ConnectFourSettings::default_settings();
        settings.search_depth = 0;
        assert!(settings.validate().is_err());

        settings.search_depth = MAX_SEARCH_DEPTH + 1;
        assert!(settings.validate().is_err());
    }
}
