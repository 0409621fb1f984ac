//! HTTP lexical provider
//!
//! Structured definitions come from a dictionaryapi.dev-compatible service.
//! Spelling search, secondary definitions, synonym relations and
//! frequency-ranked word lists come from a Datamuse-compatible service.

use super::source::{LexicalSource, RankedWord, Relation};
use crate::config::LexiconConfig;
use crate::core::{Definition, Meaning, Sense};
use crate::error::{LexiconError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Dictionary entry as served by the structured provider
#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiSense>,
}

#[derive(Debug, Deserialize)]
struct ApiSense {
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

/// One Datamuse result row
#[derive(Debug, Deserialize)]
struct DatamuseWord {
    #[serde(default)]
    word: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    defs: Option<Vec<String>>,
}

/// Read the Zipf frequency from a `f:<value>` tag; 0.0 when absent
fn parse_zipf(tags: &[String]) -> f64 {
    tags.iter()
        .find_map(|tag| tag.strip_prefix("f:"))
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0)
}

impl ApiEntry {
    fn into_definition(self, senses_per_meaning: usize) -> Definition {
        Definition {
            word: self.word,
            phonetic: self.phonetic.unwrap_or_default(),
            meanings: self
                .meanings
                .into_iter()
                .map(|meaning| Meaning {
                    part_of_speech: meaning.part_of_speech,
                    senses: meaning
                        .definitions
                        .into_iter()
                        .take(senses_per_meaning)
                        .map(|sense| Sense {
                            definition: sense.definition,
                            example: sense.example,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Lexical provider backed by public web APIs
pub struct HttpLexicon {
    client: Client,
    config: LexiconConfig,
}

impl HttpLexicon {
    /// Create a provider from configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: LexiconConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    fn entry_url(&self, word: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.dictionary_url).map_err(|e| {
            LexiconError::Unavailable(format!(
                "bad dictionary url {}: {e}",
                self.config.dictionary_url
            ))
        })?;
        url.path_segments_mut()
            .map_err(|()| LexiconError::Unavailable("dictionary url cannot be a base".into()))?
            .pop_if_empty()
            .extend(["api", "v2", "entries", "en", word]);
        Ok(url)
    }

    async fn datamuse(&self, query: &[(&str, String)]) -> Result<Vec<DatamuseWord>> {
        let url = format!("{}/words", self.config.datamuse_url.trim_end_matches('/'));
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LexiconError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LexicalSource for HttpLexicon {
    async fn dictionary_entry(&self, word: &str) -> Result<Option<Definition>> {
        let url = self.entry_url(word)?;
        let response = self.client.get(url).send().await?;

        // Any non-success answer (404 "No Definitions Found" included) is a miss
        if !response.status().is_success() {
            debug!(%word, status = response.status().as_u16(), "dictionary miss");
            return Ok(None);
        }

        let entries: Vec<ApiEntry> = response.json().await?;
        Ok(entries
            .into_iter()
            .next()
            .map(|entry| entry.into_definition(self.config.senses_per_meaning)))
    }

    async fn spelling_matches(&self, word: &str) -> Result<Vec<String>> {
        let rows = self
            .datamuse(&[
                ("sp", word.to_string()),
                ("max", self.config.spelling_limit.to_string()),
            ])
            .await?;
        Ok(rows.into_iter().map(|row| row.word).collect())
    }

    async fn tagged_definitions(&self, word: &str) -> Result<Option<Vec<String>>> {
        let rows = self
            .datamuse(&[
                ("sp", word.to_string()),
                ("md", "d".to_string()),
                ("max", "1".to_string()),
            ])
            .await?;
        Ok(rows.into_iter().next().and_then(|row| row.defs))
    }

    async fn related_words(&self, word: &str, relation: Relation) -> Result<Vec<String>> {
        let key = match relation {
            Relation::Synonym => "rel_syn",
            Relation::MeansLike => "ml",
        };
        let rows = self
            .datamuse(&[
                (key, word.to_string()),
                ("max", self.config.related_limit.to_string()),
            ])
            .await?;
        Ok(rows.into_iter().map(|row| row.word).collect())
    }

    async fn words_of_length(&self, length: usize) -> Result<Vec<RankedWord>> {
        let rows = self
            .datamuse(&[
                ("sp", "?".repeat(length)),
                ("md", "f".to_string()),
                ("max", self.config.ranked_limit.to_string()),
            ])
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let zipf = parse_zipf(&row.tags);
                RankedWord::new(row.word, zipf)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zipf_tag_parsing() {
        let tags = vec!["syn".to_string(), "f:5.12".to_string()];
        assert!((parse_zipf(&tags) - 5.12).abs() < 1e-9);
        assert!(parse_zipf(&[]).abs() < f64::EPSILON);
        assert!(parse_zipf(&["f:abc".to_string()]).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_keeps_two_senses_per_meaning() {
        let json = r#"{
            "word": "cold",
            "phonetic": "/kəʊld/",
            "meanings": [{
                "partOfSpeech": "adjective",
                "definitions": [
                    {"definition": "of low temperature", "example": "a cold day"},
                    {"definition": "lacking affection"},
                    {"definition": "not prepared"}
                ]
            }]
        }"#;
        let entry: ApiEntry = serde_json::from_str(json).unwrap();
        let definition = entry.into_definition(2);

        assert_eq!(definition.phonetic, "/kəʊld/");
        assert_eq!(definition.meanings[0].senses.len(), 2);
        assert_eq!(
            definition.meanings[0].senses[0].example.as_deref(),
            Some("a cold day")
        );
        assert_eq!(definition.meanings[0].senses[1].example, None);
    }

    #[test]
    fn entry_url_encodes_word() {
        let lexicon = HttpLexicon::new(LexiconConfig {
            dictionary_url: "https://dict.example/".to_string(),
            ..LexiconConfig::default()
        })
        .unwrap();
        let url = lexicon.entry_url("gold").unwrap();
        assert_eq!(url.as_str(), "https://dict.example/api/v2/entries/en/gold");
    }
}
