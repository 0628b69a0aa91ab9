//! Prompt templates for playlist generation

use crate::chat::message::Message;

/// Templates for the song-generation request
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for playlist generation
    pub fn curator_system() -> &'static str {
        "You are an AI music assistant that transforms a user's idea, mood, or theme \
into a curated Spotify playlist. You must respond with a JSON object that \
contains a short and catchy playlist title and a list of real songs likely to exist on Spotify."
    }

    /// User prompt embedding the description and the requested song count
    pub fn curator_request(description: &str, limit: usize) -> String {
        format!(
            r#"Generate a playlist based on the following description: '{description}'.

Return a JSON object with this format:

{{
  "playlist_title": "string",
  "songs": [
    {{ "title": "string", "artist": "string" }}, ... up to {limit} songs
  ]
}}

Make sure the playlist_title is engaging, under 6 words, and fits the theme. Respond with the JSON object only."#
        )
    }

    /// Full conversation for a generation request
    pub fn curator_messages(description: &str, limit: usize) -> Vec<Message> {
        vec![
            Message::system(Self::curator_system()),
            Message::user(Self::curator_request(description, limit)),
        ]
    }
}
