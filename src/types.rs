use serde::Deserialize;

/// Bearer token of the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub followers: Followers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: Paging<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSearchResponse {
    pub albums: Paging<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResponse {
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    pub total_tracks: u32,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeatures {
    pub tempo: f64,
}

/// A top track joined with its audio features.
#[derive(Debug, Clone)]
pub struct TrackWithFeatures {
    pub track: Track,
    pub features: AudioFeatures,
}

/// Flat record for one of an artist's top tracks.
///
/// `streams` is a display proxy derived from popularity, not a play count.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRecord {
    pub name: String,
    pub popularity: u32,
    pub duration_ms: u64,
    pub bpm: f64,
    pub streams: u64,
}

/// An album as it appears on one of the two listing paths.
///
/// The artist discography carries a track count, the genre search carries the
/// first credited artist. The upstream objects do not expose both uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum AlbumRecord {
    Discography { name: String, total_tracks: u32 },
    GenreMatch { name: String, artist: String },
}

impl AlbumRecord {
    pub fn name(&self) -> &str {
        match self {
            AlbumRecord::Discography { name, .. } | AlbumRecord::GenreMatch { name, .. } => name,
        }
    }
}

/// Related artists and genre artists.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub name: String,
    pub followers: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreSongRecord {
    pub name: String,
    pub artist: String,
    pub popularity: u32,
    pub preview_url: Option<String>,
}

/// Parallel label/value arrays handed to the chart renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}
