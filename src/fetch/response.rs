//! Decoding of search API responses into stories.
//!
//! The wire types here mirror the Algolia HN payload and stay private; the
//! rest of the crate only sees [`Story`]. Any problem (bad status, invalid
//! JSON, a hit without `objectID`) becomes a [`FetchFailure`].

use crate::domain::{FetchFailure, Story, StoryId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    story_title: Option<String>,
    url: Option<String>,
    story_url: Option<String>,
    author: Option<String>,
    num_comments: Option<u32>,
    points: Option<u32>,
    created_at_i: Option<i64>,
}

impl From<Hit> for Story {
    fn from(hit: Hit) -> Self {
        Self {
            id: StoryId::new(hit.object_id),
            title: hit.title.or(hit.story_title).unwrap_or_default(),
            url: hit.url.or(hit.story_url).unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            comment_count: hit.num_comments.unwrap_or(0),
            points: hit.points.unwrap_or(0),
            created_at: hit.created_at_i,
        }
    }
}

/// Turns an HTTP status and body into the fetched stories.
///
/// # Errors
///
/// Returns [`FetchFailure`] for a non-2xx status or an undecodable body.
///
/// # Example
///
/// ```
/// use hnsearch::fetch::decode_search_response;
///
/// let body = br#"{"hits":[{"objectID":"0","title":"React","url":"https://react.dev",
///     "author":"dan","num_comments":3,"points":5}]}"#;
/// let stories = decode_search_response(200, body)?;
/// assert_eq!(stories[0].title, "React");
/// # Ok::<(), hnsearch::domain::FetchFailure>(())
/// ```
pub fn decode_search_response(status: u16, body: &[u8]) -> Result<Vec<Story>, FetchFailure> {
    if !(200..300).contains(&status) {
        return Err(FetchFailure::new(format!("HTTP {status}")));
    }

    let response: SearchResponse = serde_json::from_slice(body)
        .map_err(|e| FetchFailure::new(format!("malformed payload: {e}")))?;

    tracing::debug!(hit_count = response.hits.len(), "search response decoded");
    Ok(response.hits.into_iter().map(Story::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wire_fields() {
        let body = br#"{
            "hits": [{
                "objectID": "8863",
                "title": "My YC app: Dropbox",
                "url": "http://www.getdropbox.com/u/2/screencast.html",
                "author": "dhouston",
                "num_comments": 71,
                "points": 111,
                "created_at_i": 1175714200
            }],
            "nbHits": 1
        }"#;

        let stories = decode_search_response(200, body).unwrap();
        assert_eq!(stories.len(), 1);
        let story = &stories[0];
        assert_eq!(story.id.as_str(), "8863");
        assert_eq!(story.title, "My YC app: Dropbox");
        assert_eq!(story.author, "dhouston");
        assert_eq!(story.comment_count, 71);
        assert_eq!(story.points, 111);
        assert_eq!(story.created_at, Some(1_175_714_200));
    }

    #[test]
    fn null_fields_fall_back() {
        let body = br#"{"hits":[{
            "objectID":"1","title":null,"story_title":"Parent story",
            "url":null,"story_url":null,"author":"pg","num_comments":null,"points":null
        }]}"#;

        let story = &decode_search_response(200, body).unwrap()[0];
        assert_eq!(story.title, "Parent story");
        assert_eq!(story.url, "");
        assert_eq!(story.comment_count, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    fn keeps_server_order() {
        let body = br#"{"hits":[{"objectID":"b"},{"objectID":"a"},{"objectID":"c"}]}"#;
        let ids: Vec<String> = decode_search_response(200, body)
            .unwrap()
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn non_success_status_is_failure() {
        let err = decode_search_response(503, b"{\"hits\":[]}").unwrap_err();
        assert_eq!(err.message, "HTTP 503");
    }

    #[test]
    fn malformed_payloads_are_failures() {
        assert!(decode_search_response(200, b"not json").is_err());
        assert!(decode_search_response(200, b"{}").is_err());
        assert!(decode_search_response(200, br#"{"hits":[{"title":"no id"}]}"#).is_err());
    }
}
