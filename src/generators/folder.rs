//! Season folder name generation.

/// Generate a TheTVDB season folder name.
///
/// Format: `Season ${seasonNr2}` (specials land in `Season 00`)
pub fn generate_tvdb_season_folder(season_number: u32) -> String {
    format!("Season {:02}", season_number)
}

/// Generate a TMDB season folder name.
///
/// Format: `Season_${seasonNr2}`
pub fn generate_tmdb_season_folder(season_number: u32) -> String {
    format!("Season_{:02}", season_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_season_folders() {
        assert_eq!(generate_tvdb_season_folder(0), "Season 00");
        assert_eq!(generate_tvdb_season_folder(3), "Season 03");
        assert_eq!(generate_tvdb_season_folder(12), "Season 12");
        assert_eq!(generate_tmdb_season_folder(1), "Season_01");
        assert_eq!(generate_tmdb_season_folder(100), "Season_100");
    }
}
