use super::{Catalog, encode};
use crate::{
    error::Result,
    types::{Album, AlbumSearchResponse, Artist, ArtistSearchResponse, Track, TrackSearchResponse},
};

/// Number of items requested by every genre search.
pub const GENRE_LIMIT: u32 = 10;

/// Builds the search path for a `genre:` query of the given item type.
///
/// The whole `genre:<genre>` value is percent-encoded, so spaces and reserved
/// characters in the genre cannot alter the rest of the query.
pub fn genre_search_path(genre: &str, item_type: &str) -> String {
    format!(
        "/search?q={q}&type={item_type}&limit={limit}",
        q = encode(&format!("genre:{genre}")),
        limit = GENRE_LIMIT
    )
}

impl Catalog {
    /// Searches the ten top tracks tagged with `genre`.
    pub async fn search_top_songs_by_genre(&self, genre: &str) -> Result<Vec<Track>> {
        let res: TrackSearchResponse = self.get(&genre_search_path(genre, "track")).await?;
        Ok(res.tracks.items)
    }

    /// Searches the ten top albums tagged with `genre`.
    pub async fn search_top_albums_by_genre(&self, genre: &str) -> Result<Vec<Album>> {
        let res: AlbumSearchResponse = self.get(&genre_search_path(genre, "album")).await?;
        Ok(res.albums.items)
    }

    /// Searches the ten top artists tagged with `genre`.
    pub async fn search_top_artists_by_genre(&self, genre: &str) -> Result<Vec<Artist>> {
        let res: ArtistSearchResponse = self.get(&genre_search_path(genre, "artist")).await?;
        Ok(res.artists.items)
    }
}
