//! Search term extractor.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::RestError;

#[derive(Debug, Default, Deserialize)]
struct SearchTermQuery {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

/// The raw `searchTerm` query value.
///
/// An empty value is treated as absent. A present value is passed on
/// untouched, including surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(pub Option<String>);

impl SearchTerm {
    /// Returns the term, if any.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<SearchTermQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid search parameters: {}", e.body_text()),
            })?;

        Ok(Self(query.search_term.filter(|term| !term.is_empty())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> SearchTerm {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        SearchTerm::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_absent_and_empty_are_none() {
        assert_eq!(extract("/api/advocates").await, SearchTerm(None));
        assert_eq!(extract("/api/advocates?searchTerm=").await, SearchTerm(None));
    }

    #[tokio::test]
    async fn test_term_is_decoded_untrimmed() {
        assert_eq!(
            extract("/api/advocates?searchTerm=%20Depression%20AND%20Anxiety").await,
            SearchTerm(Some(" Depression AND Anxiety".to_string()))
        );
        assert_eq!(
            extract("/api/advocates?searchTerm=PTSD+OR+Trauma").await,
            SearchTerm(Some("PTSD OR Trauma".to_string()))
        );
    }
}
