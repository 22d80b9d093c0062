use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::{Catalog, encode};
use crate::{
    error::Result,
    types::{
        Album, AlbumResponse, Artist, ArtistSearchResponse, AudioFeatures, RelatedArtistsResponse,
        TopTracksResponse, TrackWithFeatures,
    },
};

/// Number of albums requested from the artist discography.
pub const ALBUM_LIMIT: u32 = 5;

/// Release groups included in the artist discography.
pub const ALBUM_GROUPS: &str = "album,single";

impl Catalog {
    /// Resolves a free-text artist name to the single best matching artist.
    ///
    /// Searches the catalog with `type=artist&limit=1` and returns the top-ranked
    /// match. The name is percent-encoded before it is placed in the query.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Artist))` - the best match
    /// - `Ok(None)` - no artist matches the name
    /// - `Err(DatifyError)` - request failed or `artists.items` is missing
    ///
    /// # Example
    ///
    /// ```
    /// match catalog.search_for_artist("Queen").await? {
    ///     Some(artist) => println!("{} ({})", artist.name, artist.id),
    ///     None => println!("No artists with this name exists..."),
    /// }
    /// ```
    pub async fn search_for_artist(&self, artist_name: &str) -> Result<Option<Artist>> {
        let path = format!(
            "/search?q={q}&type=artist&limit=1",
            q = encode(artist_name)
        );
        let res: ArtistSearchResponse = self.get(&path).await?;
        Ok(res.artists.items.into_iter().next())
    }

    /// Retrieves the top tracks of an artist together with each track's audio features.
    ///
    /// One request is made for the top tracks and then one `audio-features`
    /// request per returned track, strictly in sequence, so the call costs
    /// `1 + n` requests for `n` tracks. A spinner reports progress while the
    /// features are fetched.
    ///
    /// # Error Handling
    ///
    /// A failure of any audio-feature lookup aborts the whole operation; no
    /// partial result is returned.
    ///
    /// # API Endpoints
    ///
    /// - `GET /artists/{id}/top-tracks?market={market}`
    /// - `GET /audio-features/{track_id}`
    pub async fn get_songs_by_artist(&self, artist_id: &str) -> Result<Vec<TrackWithFeatures>> {
        let path = format!(
            "/artists/{id}/top-tracks?market={market}",
            id = encode(artist_id),
            market = encode(&self.endpoints.market)
        );
        let res: TopTracksResponse = self.get(&path).await?;

        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        let total = res.tracks.len();
        let mut songs = Vec::with_capacity(total);
        for (idx, track) in res.tracks.into_iter().enumerate() {
            pb.set_message(format!(
                "Fetching audio features {current}/{total}...",
                current = idx + 1
            ));

            let features = match self.get_audio_features(&track.id).await {
                Ok(f) => f,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };
            songs.push(TrackWithFeatures { track, features });
        }

        pb.finish_and_clear();
        Ok(songs)
    }

    /// Fetches the audio features (tempo) of a single track.
    pub async fn get_audio_features(&self, track_id: &str) -> Result<AudioFeatures> {
        let path = format!("/audio-features/{id}", id = encode(track_id));
        self.get(&path).await
    }

    /// Retrieves up to five albums and singles of an artist.
    ///
    /// Uses `include_groups=album,single`, the configured market and `limit=5`.
    /// An empty list is returned as is; the caller decides whether that is an error.
    pub async fn get_albums_by_artist(&self, artist_id: &str) -> Result<Vec<Album>> {
        let path = format!(
            "/artists/{id}/albums?include_groups={groups}&market={market}&limit={limit}",
            id = encode(artist_id),
            groups = ALBUM_GROUPS,
            market = encode(&self.endpoints.market),
            limit = ALBUM_LIMIT
        );
        let res: AlbumResponse = self.get(&path).await?;
        Ok(res.items)
    }

    /// Retrieves the artists Spotify considers similar to the given artist.
    pub async fn get_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>> {
        let path = format!("/artists/{id}/related-artists", id = encode(artist_id));
        let res: RelatedArtistsResponse = self.get(&path).await?;
        Ok(res.artists)
    }
}
