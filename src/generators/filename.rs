//! Thumbnail filename generation.

/// Extension used when the image reference has none (and always for TMDB).
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Sanitize an episode title for TheTVDB filenames.
///
/// Keeps alphanumerics, spaces, `_`, `-` and `:`; then turns every `:` into
/// `-` and trims trailing whitespace.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-' | ':'))
        .map(|c| if c == ':' { '-' } else { c })
        .collect();

    kept.trim_end().to_string()
}

/// Sanitize a complete TMDB filename.
///
/// Keeps alphanumerics, spaces, `_`, `-` and `.`, then trims trailing
/// whitespace. Applied to the assembled name, so the extension dot survives.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.'))
        .collect();

    kept.trim_end().to_string()
}

/// File extension (with leading dot) of an image path or URL.
///
/// Query strings and fragments are ignored. Leading dots of the file name do
/// not start an extension, so `/.jpg` has none.
pub fn image_extension(reference: &str) -> Option<&str> {
    let path = reference
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(reference);
    let file_name = path.rsplit('/').next().unwrap_or(path);

    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    let dot = file_name.rfind('.')?;
    if dot < leading_dots || dot + 1 == file_name.len() {
        return None;
    }

    Some(&file_name[dot..])
}

/// Generate a TheTVDB thumbnail filename.
///
/// Format: `s${seasonNr2}e${episodeNr2} ${title}-thumb${ext}`
pub fn generate_tvdb_filename(season: u32, episode: u32, title: &str, image: &str) -> String {
    let ext = image_extension(image).unwrap_or(DEFAULT_EXTENSION);
    format!(
        "s{:02}e{:02} {}-thumb{}",
        season,
        episode,
        sanitize_title(title),
        ext
    )
}

/// Generate a TMDB thumbnail filename.
///
/// Format: `S${seasonNr2}E${episodeNr2}_${title}.jpg`
pub fn generate_tmdb_filename(season: u32, episode: u32, title: &str) -> String {
    sanitize_filename(&format!(
        "S{:02}E{:02}_{}{}",
        season, episode, title, DEFAULT_EXTENSION
    ))
}
