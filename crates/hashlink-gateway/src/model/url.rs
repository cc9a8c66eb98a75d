use serde::{Deserialize, Serialize};

/// Body of `POST /v1/short`. Fields other than `url` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ignores_unknown_fields() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url":"https://example.com","extra":1}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn request_without_url_is_rejected() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"link":"x"}"#).is_err());
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"url":42}"#).is_err());
    }

    #[test]
    fn response_uses_short_url_key() {
        let body = serde_json::to_string(&ShortenResponse {
            short_url: "http://localhost:8080/abcd".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"shortURL":"http://localhost:8080/abcd"}"#);
    }
}
