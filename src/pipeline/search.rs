//! DuckDuckGo Instant Answer search.
//!
//! The endpoint returns one abstract plus a tree of related topics; both are
//! flattened into [`SearchHit`]s in document order.

use crate::pipeline::traits::{SearchHit, SearchProvider};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DUCKDUCKGO_API_URL: &str = "https://api.duckduckgo.com/";
const USER_AGENT: &str = concat!("claim-check/", env!("CARGO_PKG_VERSION"));
const TOPIC_TITLE_CHARS: usize = 80;

pub struct DuckDuckGoSearch {
    client: Client,
    endpoint: String,
}

impl DuckDuckGoSearch {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: DUCKDUCKGO_API_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InstantAnswer {
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    Topic {
        #[serde(rename = "Text")]
        text: String,
        #[serde(rename = "FirstURL")]
        first_url: String,
    },
    Group {
        #[serde(rename = "Topics")]
        topics: Vec<RelatedTopic>,
    },
}

/// Topic text reads "Title - description"; the part before the dash is the
/// title when present.
fn topic_title(text: &str) -> String {
    match text.split_once(" - ") {
        Some((title, _)) => title.trim().to_string(),
        None => text.chars().take(TOPIC_TITLE_CHARS).collect(),
    }
}

fn collect_topics(topics: &[RelatedTopic], out: &mut Vec<SearchHit>, max_results: usize) {
    for topic in topics {
        if out.len() >= max_results {
            return;
        }
        match topic {
            RelatedTopic::Topic { text, first_url } => {
                out.push(SearchHit::new(topic_title(text), text.clone(), first_url.clone()));
            }
            RelatedTopic::Group { topics } => collect_topics(topics, out, max_results),
        }
    }
}

pub fn hits_from_answer(answer: &InstantAnswer, max_results: usize) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    if max_results == 0 {
        return hits;
    }
    if !answer.abstract_text.trim().is_empty() {
        hits.push(SearchHit::new(
            answer.heading.clone(),
            answer.abstract_text.clone(),
            answer.abstract_url.clone(),
        ));
    }
    collect_topics(&answer.related_topics, &mut hits, max_results);
    hits
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let answer: InstantAnswer = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let hits = hits_from_answer(&answer, max_results);
        debug!(count = hits.len(), "duckduckgo hits");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::retriever::SourceRetriever;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single HTTP request with the given status line and body.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let mut read = 0;
            while read < buf.len() {
                let n = stream.read(&mut buf[read..]).await.unwrap();
                if n == 0 {
                    break;
                }
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}/")
    }

    fn search_at(endpoint: String) -> DuckDuckGoSearch {
        DuckDuckGoSearch::new(Duration::from_secs(5))
            .unwrap()
            .with_endpoint(endpoint)
    }

    const ANSWER: &str = r#"{
        "Heading": "Jupiter",
        "AbstractText": "Jupiter is the fifth planet from the Sun and the largest in the Solar System.",
        "AbstractURL": "https://en.wikipedia.org/wiki/Jupiter",
        "RelatedTopics": [
            {"Text": "Galilean moons - The four largest moons of Jupiter.", "FirstURL": "https://duckduckgo.com/Galilean_moons", "Result": "<a>x</a>"},
            {"Name": "Exploration", "Topics": [
                {"Text": "Juno (spacecraft) - NASA probe orbiting Jupiter.", "FirstURL": "https://duckduckgo.com/Juno"},
                {"Text": "Galileo (spacecraft) - Earlier orbiter.", "FirstURL": "https://duckduckgo.com/Galileo"}
            ]}
        ]
    }"#;

    #[test]
    fn flattens_abstract_and_topics() {
        let answer: InstantAnswer = serde_json::from_str(ANSWER).unwrap();
        let hits = hits_from_answer(&answer, 6);
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].title, "Jupiter");
        assert_eq!(hits[0].link, "https://en.wikipedia.org/wiki/Jupiter");
        assert_eq!(hits[1].title, "Galilean moons");
        assert_eq!(hits[2].title, "Juno (spacecraft)");
        assert_eq!(hits[3].link, "https://duckduckgo.com/Galileo");
    }

    #[test]
    fn respects_max_results() {
        let answer: InstantAnswer = serde_json::from_str(ANSWER).unwrap();
        assert_eq!(hits_from_answer(&answer, 2).len(), 2);
        assert!(hits_from_answer(&answer, 0).is_empty());
    }

    #[test]
    fn empty_answer_has_no_hits() {
        let answer: InstantAnswer = serde_json::from_str("{}").unwrap();
        assert!(hits_from_answer(&answer, 6).is_empty());
    }

    #[tokio::test]
    async fn search_decodes_live_answer() {
        let search = search_at(serve_once("200 OK", ANSWER).await);
        let hits = search.search("jupiter", 6).await.unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].title, "Jupiter");
        assert_eq!(hits[2].link, "https://duckduckgo.com/Juno");
    }

    #[tokio::test]
    async fn search_passes_max_results_through() {
        let search = search_at(serve_once("200 OK", ANSWER).await);
        assert_eq!(search.search("jupiter", 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let search = search_at(serve_once("503 Service Unavailable", "{}").await);
        assert!(search.search("jupiter", 6).await.is_err());
    }

    #[tokio::test]
    async fn error_status_routes_retrieval_to_store() {
        let search = search_at(serve_once("500 Internal Server Error", "{}").await);
        let retriever = SourceRetriever::new(Some(Arc::new(search)));
        let sources = retriever
            .retrieve_sources("Jupiter is the largest planet in our Solar System.", 6)
            .await;
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].link, "https://www.nasa.gov/jupiter");
    }

    #[test]
    fn untitled_topic_uses_text_prefix() {
        assert_eq!(topic_title("no separator here"), "no separator here");
        assert_eq!(topic_title(&"x".repeat(100)).len(), TOPIC_TITLE_CHARS);
    }
}
