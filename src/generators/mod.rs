//! Output naming for thumbnails and season folders.

pub mod filename;
pub mod folder;

use crate::models::episode::Episode;

/// Fixed on-disk layout of one provider.
///
/// The two layouts are intentionally different and must stay byte-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `Season 01/s01e02 Title-thumb.jpg`
    Tvdb,
    /// `Season_01/S01E02_Title.jpg`
    Tmdb,
}

impl Layout {
    /// Folder name for a season.
    pub fn season_folder(self, season_number: u32) -> String {
        match self {
            Layout::Tvdb => folder::generate_tvdb_season_folder(season_number),
            Layout::Tmdb => folder::generate_tmdb_season_folder(season_number),
        }
    }

    /// Filename for an episode's thumbnail, given its image reference.
    pub fn thumbnail_filename(self, episode: &Episode, image: &str) -> String {
        match self {
            Layout::Tvdb => filename::generate_tvdb_filename(
                episode.season_number,
                episode.episode_number,
                &episode.name,
                image,
            ),
            Layout::Tmdb => filename::generate_tmdb_filename(
                episode.season_number,
                episode.episode_number,
                &episode.name,
            ),
        }
    }

    /// Short episode code used in console output.
    pub fn episode_code(self, episode: &Episode) -> String {
        match self {
            Layout::Tvdb => format!(
                "s{:02}e{:02}",
                episode.season_number, episode.episode_number
            ),
            Layout::Tmdb => format!(
                "S{:02}E{:02}",
                episode.season_number, episode.episode_number
            ),
        }
    }

    /// Episode title as shown in console output.
    pub fn display_title(self, episode: &Episode) -> String {
        match self {
            Layout::Tvdb => episode.name.replace(':', "-"),
            Layout::Tmdb => episode.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(season: u32, number: u32, name: &str) -> Episode {
        Episode {
            season_number: season,
            episode_number: number,
            name: name.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_layout_paths() {
        let ep = episode(1, 1, "Pilot");
        assert_eq!(Layout::Tmdb.season_folder(1), "Season_01");
        assert_eq!(Layout::Tmdb.thumbnail_filename(&ep, "/abc.jpg"), "S01E01_Pilot.jpg");

        let ep = episode(0, 1, "Making Of: Part 1");
        assert_eq!(Layout::Tvdb.season_folder(0), "Season 00");
        assert_eq!(
            Layout::Tvdb.thumbnail_filename(&ep, "/x.png"),
            "s00e01 Making Of- Part 1-thumb.png"
        );
    }

    #[test]
    fn test_console_labels() {
        let ep = episode(2, 5, "A: B");
        assert_eq!(Layout::Tvdb.episode_code(&ep), "s02e05");
        assert_eq!(Layout::Tvdb.display_title(&ep), "A- B");
        assert_eq!(Layout::Tmdb.episode_code(&ep), "S02E05");
        assert_eq!(Layout::Tmdb.display_title(&ep), "A: B");
    }
}
