//! Dictionary definitions

/// A fetched definition, immutable once cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    /// May be empty
    pub phonetic: String,
    pub meanings: Vec<Meaning>,
}

/// Senses grouped under one part of speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub definition: String,
    pub example: Option<String>,
}

/// Part of speech used when a provider does not supply one
pub const DEFAULT_PART_OF_SPEECH: &str = "word";

impl Definition {
    /// Placeholder used when no provider can describe the word
    #[must_use]
    pub fn placeholder(word: &str) -> Self {
        Self {
            word: word.to_string(),
            phonetic: String::new(),
            meanings: vec![Meaning {
                part_of_speech: DEFAULT_PART_OF_SPEECH.to_string(),
                senses: vec![Sense {
                    definition: format!("An English word spelled \"{word}\""),
                    example: None,
                }],
            }],
        }
    }

    /// Build a definition from `partOfSpeech\tdefinition` strings
    ///
    /// Missing halves fall back to a generic part of speech and gloss.
    #[must_use]
    pub fn from_tagged(word: &str, tagged: &[String]) -> Self {
        let meanings = tagged
            .iter()
            .map(|entry| {
                let mut parts = entry.split('\t');
                let part_of_speech = parts
                    .next()
                    .filter(|p| !p.is_empty())
                    .unwrap_or(DEFAULT_PART_OF_SPEECH);
                let definition = parts
                    .next()
                    .filter(|d| !d.is_empty())
                    .map_or_else(|| format!("A form of the word \"{word}\""), str::to_string);

                Meaning {
                    part_of_speech: part_of_speech.to_string(),
                    senses: vec![Sense {
                        definition,
                        example: None,
                    }],
                }
            })
            .collect();

        Self {
            word: word.to_string(),
            phonetic: String::new(),
            meanings,
        }
    }

    /// First meaning and its first sense, the headline gloss
    #[must_use]
    pub fn primary(&self) -> Option<(&str, &Sense)> {
        self.meanings.iter().find_map(|meaning| {
            meaning
                .senses
                .first()
                .map(|sense| (meaning.part_of_speech.as_str(), sense))
        })
    }
}
