//! Song-list parsing from language-model responses.
//!
//! Two shapes are accepted:
//!
//! - a bare JSON array of song objects ([`parse_song_list`])
//! - the playlist object `{"playlist_title": ..., "songs": [...]}` that the
//!   curation prompt asks for ([`parse_generated_playlist`])
//!
//! Individual items are lenient: the title may live under `title`, `name` or
//! `track`, the artist under `artist` or `artists`. Items that still lack
//! either field are skipped with a warning and never fail the whole list.

use crate::core::error::DomainError;
use crate::core::string::strip_code_fence;
use crate::playlist::entities::GeneratedPlaylist;
use crate::song::entities::Song;
use serde_json::Value;
use tracing::warn;

const TITLE_KEYS: [&str; 3] = ["title", "name", "track"];
const ARTIST_KEYS: [&str; 2] = ["artist", "artists"];

/// Parse a JSON array of song objects, keeping at most `limit` items.
///
/// Fails with [`DomainError::MalformedResponse`] if the text is not JSON or
/// the top-level value is not an array. The result may be shorter than
/// `limit`, or empty.
pub fn parse_song_list(raw: &str, limit: usize) -> Result<Vec<Song>, DomainError> {
    match decode(raw)? {
        Value::Array(items) => Ok(songs_from_items(&items, limit)),
        other => Err(DomainError::MalformedResponse(format!(
            "expected a JSON array of songs, got {}",
            kind_of(&other)
        ))),
    }
}

/// Parse the playlist object returned for a curation prompt.
///
/// A bare array is accepted as the song list with no title. A missing or
/// non-array `songs` value yields an empty list.
pub fn parse_generated_playlist(raw: &str, limit: usize) -> Result<GeneratedPlaylist, DomainError> {
    match decode(raw)? {
        Value::Array(items) => Ok(GeneratedPlaylist::new(None, songs_from_items(&items, limit))),
        Value::Object(map) => {
            let title = map.get("playlist_title").and_then(normalize_field);
            let songs = match map.get("songs") {
                Some(Value::Array(items)) => songs_from_items(items, limit),
                Some(other) => {
                    warn!("Ignoring non-array `songs` value ({})", kind_of(other));
                    Vec::new()
                }
                None => {
                    warn!("Playlist response has no `songs` key");
                    Vec::new()
                }
            };
            Ok(GeneratedPlaylist::new(title, songs))
        }
        other => Err(DomainError::MalformedResponse(format!(
            "expected a playlist object, got {}",
            kind_of(&other)
        ))),
    }
}

fn decode(raw: &str) -> Result<Value, DomainError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        DomainError::MalformedResponse(format!("Failed to decode JSON from model response: {}", e))
    })
}

fn songs_from_items(items: &[Value], limit: usize) -> Vec<Song> {
    items
        .iter()
        .take(limit)
        .enumerate()
        .filter_map(|(i, item)| {
            let song = song_from_item(item);
            if song.is_none() {
                warn!("Skipping item {} missing title/artist: {}", i, item);
            }
            song
        })
        .collect()
}

fn song_from_item(item: &Value) -> Option<Song> {
    let map = item.as_object()?;
    let title = first_field(map, &TITLE_KEYS)?;
    let artist = first_field(map, &ARTIST_KEYS)?;
    Song::new(title, artist)
}

fn first_field(map: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(normalize_field)
}

/// Render a JSON value as a non-empty trimmed string.
///
/// Arrays (e.g. `"artists": ["A", {"name": "B"}]`) are joined with ", ".
fn normalize_field(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(obj) => return obj.get("name").and_then(normalize_field),
        Value::Array(values) => values
            .iter()
            .filter_map(normalize_field)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Bool(_) | Value::Null => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_parse_song_list_keeps_order() {
        let raw = r#"[
            {"title": "A", "artist": "X"},
            {"title": "B", "artist": "Y"},
            {"title": "C", "artist": "Z"}
        ]"#;
        let songs = parse_song_list(raw, 10).unwrap();
        assert_eq!(titles(&songs), vec!["A", "B", "C"]);
        assert_eq!(songs[2].artist, "Z");
    }

    #[test]
    fn test_parse_song_list_caps_at_limit() {
        let raw = r#"[{"title":"A","artist":"X"},{"title":"B","artist":"Y"},{"title":"C","artist":"Z"}]"#;
        let songs = parse_song_list(raw, 2).unwrap();
        assert_eq!(titles(&songs), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_song_list_skips_incomplete_items() {
        let raw = r#"[
            {"title": "A"},
            "not an object",
            {"artist": "nobody"},
            {"title": "   ", "artist": "blank"},
            {"title": "B", "artist": "Y"}
        ]"#;
        let songs = parse_song_list(raw, 10).unwrap();
        assert_eq!(titles(&songs), vec!["B"]);
    }

    #[test]
    fn test_limit_counts_skipped_items() {
        // The cap applies to raw items, so a skipped item uses up a slot
        let raw = r#"[{"title":"A"},{"title":"B","artist":"Y"},{"title":"C","artist":"Z"}]"#;
        let songs = parse_song_list(raw, 2).unwrap();
        assert_eq!(titles(&songs), vec!["B"]);
    }

    #[test]
    fn test_alternate_keys() {
        let raw = r#"[
            {"name": "Name Key", "artist": "X"},
            {"track": "Track Key", "artists": ["Y", "Z"]},
            {"title": "", "name": "Fallback", "artists": [{"name": "Obj"}]},
            {"title": 1999, "artist": "Prince"}
        ]"#;
        let songs = parse_song_list(raw, 10).unwrap();
        assert_eq!(
            titles(&songs),
            vec!["Name Key", "Track Key", "Fallback", "1999"]
        );
        assert_eq!(songs[1].artist, "Y, Z");
        assert_eq!(songs[2].artist, "Obj");
    }

    #[test]
    fn test_parse_song_list_rejects_non_array() {
        let err = parse_song_list(r#"{"songs": []}"#, 5).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_parse_song_list_rejects_invalid_json() {
        let err = parse_song_list("Sure! Here are some songs:", 5).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_song_list_empty_array() {
        assert!(parse_song_list("[]", 5).unwrap().is_empty());
    }

    #[test]
    fn test_parse_generated_playlist() {
        let raw = r#"{"playlist_title":"Rainy Mood","songs":[{"title":"A","artist":"X"},{"title":"B","artist":"Y"},{"title":"C","artist":"Z"}]}"#;
        let playlist = parse_generated_playlist(raw, 3).unwrap();
        assert_eq!(playlist.title.as_deref(), Some("Rainy Mood"));
        assert_eq!(titles(&playlist.songs), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_generated_playlist_fenced() {
        let raw = "```json\n{\"playlist_title\": \"Fenced\", \"songs\": [{\"title\": \"A\", \"artist\": \"X\"}]}\n```";
        let playlist = parse_generated_playlist(raw, 5).unwrap();
        assert_eq!(playlist.title.as_deref(), Some("Fenced"));
        assert_eq!(playlist.songs.len(), 1);
    }

    #[test]
    fn test_parse_generated_playlist_missing_parts() {
        let playlist = parse_generated_playlist(r#"{"songs": "nope"}"#, 5).unwrap();
        assert!(playlist.title.is_none());
        assert!(playlist.songs.is_empty());

        let playlist = parse_generated_playlist(r#"{"playlist_title": "Only Title"}"#, 5).unwrap();
        assert_eq!(playlist.title.as_deref(), Some("Only Title"));
        assert!(playlist.songs.is_empty());
    }

    #[test]
    fn test_parse_generated_playlist_accepts_bare_array() {
        let playlist = parse_generated_playlist(r#"[{"title":"A","artist":"X"}]"#, 5).unwrap();
        assert!(playlist.title.is_none());
        assert_eq!(playlist.songs.len(), 1);
    }

    #[test]
    fn test_parse_generated_playlist_rejects_scalar() {
        assert!(parse_generated_playlist("42", 5).unwrap_err().is_malformed());
    }
}
