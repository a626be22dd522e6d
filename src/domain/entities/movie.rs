//! Movie summary and detail entities.

use serde::{Deserialize, Serialize};

use super::genre::Genre;

/// A movie summary as returned by upstream list endpoints (search, trending,
/// discover).
///
/// Field defaults mirror the upstream contract: optional fields are `None`
/// when the payload omits them, numeric fields default to zero, and list
/// fields default to empty. The response mappers guarantee these defaults, so
/// a `Movie` can always be built from a partial payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub genre_ids: Vec<i64>,
    pub original_language: Option<String>,
    pub original_title: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub popularity: Option<f64>,
}

/// Full movie detail: the summary fields plus detail-only data.
///
/// This is the shape snapshotted into [`super::FavoriteRecord`] when a user
/// favorites a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub runtime: Option<i64>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub budget: i64,
    pub revenue: i64,
    pub production_companies: Vec<ProductionCompany>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub production_countries: Vec<ProductionCountry>,
}

impl MovieDetail {
    /// Upstream movie id.
    pub fn id(&self) -> i64 {
        self.movie.id
    }
}

/// Production company credited on a movie detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

/// Spoken language entry on a movie detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub name: String,
    pub english_name: Option<String>,
}

/// Production country entry on a movie detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: Some("A hacker discovers reality is a simulation.".to_string()),
            poster_path: Some("/matrix.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("1999-03-31".to_string()),
            vote_average: 8.7,
            vote_count: 25000,
            genre_ids: vec![28, 878],
            original_language: Some("en".to_string()),
            original_title: Some("The Matrix".to_string()),
            adult: Some(false),
            video: Some(false),
            popularity: Some(98.5),
        }
    }

    #[test]
    fn test_detail_flattens_summary_fields() {
        let detail = MovieDetail {
            movie: sample_movie(),
            genres: vec![Genre::new(28, "Action".to_string())],
            runtime: Some(136),
            status: Some("Released".to_string()),
            tagline: None,
            budget: 63_000_000,
            revenue: 463_517_383,
            production_companies: vec![],
            spoken_languages: vec![],
            production_countries: vec![],
        };

        let json = serde_json::to_value(&detail).unwrap();
        // Summary fields must appear at the top level, not nested under "movie".
        assert_eq!(json["id"], 603);
        assert_eq!(json["title"], "The Matrix");
        assert_eq!(json["runtime"], 136);
        assert!(json.get("movie").is_none());
    }

    #[test]
    fn test_detail_round_trips_through_json() {
        let detail = MovieDetail {
            movie: sample_movie(),
            genres: vec![],
            runtime: None,
            status: None,
            tagline: None,
            budget: 0,
            revenue: 0,
            production_companies: vec![],
            spoken_languages: vec![],
            production_countries: vec![],
        };

        let raw = serde_json::to_string(&detail).unwrap();
        let back: MovieDetail = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, detail);
    }
}
