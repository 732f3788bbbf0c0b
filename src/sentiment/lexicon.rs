// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lexicon-based polarity scoring
//!
//! Each known word carries a polarity in [-1, 1], a subjectivity in [0, 1]
//! and an intensity. Words with zero polarity and an intensity other than 1
//! are intensifiers ("very", "slightly") and scale the next scored word.
//! A negation before a scored word multiplies its polarity by -0.5. The text
//! polarity is the mean over scored words, or 0.0 when none are found.
//!
//! The built-in table is a TSV file. A pattern `en-sentiment.xml` lexicon can
//! be loaded instead; senses of the same word form are averaged.

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use super::SentimentError;

const BUILTIN_LEXICON: &str = include_str!("../../data/sentiment_lexicon.tsv");

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "cannot", "without"];

/// Factor applied to a negated word's polarity
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    fn is_intensifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }
}

/// Polarity and subjectivity of a whole text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LexiconScore {
    /// Signed intensity in [-1, 1]
    pub polarity: f64,
    /// 0.0 is objective, 1.0 fully subjective
    pub subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    word_pattern: Regex,
}

impl Lexicon {
    /// The lexicon shipped with the crate
    pub fn builtin() -> Result<Self, SentimentError> {
        Self::parse(BUILTIN_LEXICON)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SentimentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SentimentError::Lexicon(format!("failed to read {}: {}", path.display(), e))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Self::parse_pattern_xml(&raw),
            _ => Self::parse(&raw),
        }
    }

    /// Parse tab-separated `word polarity subjectivity intensity` lines
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(raw: &str) -> Result<Self, SentimentError> {
        let mut entries = HashMap::new();

        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() != 4 {
                return Err(SentimentError::Lexicon(format!(
                    "line {}: expected 4 tab-separated fields, got {}",
                    line_no + 1,
                    fields.len()
                )));
            }

            let number = |field: &str, name: &str| {
                field.parse::<f64>().map_err(|_| {
                    SentimentError::Lexicon(format!(
                        "line {}: invalid {} '{}'",
                        line_no + 1,
                        name,
                        field
                    ))
                })
            };

            let entry = LexiconEntry {
                polarity: number(fields[1], "polarity")?.clamp(-1.0, 1.0),
                subjectivity: number(fields[2], "subjectivity")?.clamp(0.0, 1.0),
                intensity: number(fields[3], "intensity")?,
            };
            entries.insert(fields[0].to_lowercase(), entry);
        }

        Self::with_entries(entries)
    }

    /// Parse a pattern `en-sentiment.xml` lexicon
    ///
    /// Every `<word form=".." polarity=".." subjectivity=".." intensity=".."/>`
    /// element is one sense; a form's entry is the mean over its senses.
    pub fn parse_pattern_xml(raw: &str) -> Result<Self, SentimentError> {
        let mut reader = Reader::from_str(raw);
        reader.trim_text(true);

        // form -> (sum of polarity, subjectivity, intensity; sense count)
        let mut senses: HashMap<String, ([f64; 3], usize)> = HashMap::new();

        loop {
            let element = match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => e,
                Ok(_) => continue,
                Err(e) => {
                    return Err(SentimentError::Lexicon(format!(
                        "XML error at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
            };
            if element.name().as_ref() != b"word" {
                continue;
            }

            let mut form = None;
            let mut values = [0.0, 0.0, 1.0];
            for attr in element.attributes() {
                let attr = attr.map_err(|e| SentimentError::Lexicon(e.to_string()))?;
                let value = attr
                    .unescape_value()
                    .map_err(|e| SentimentError::Lexicon(e.to_string()))?;
                let slot = match attr.key.as_ref() {
                    b"form" => {
                        form = Some(value.to_lowercase());
                        continue;
                    }
                    b"polarity" => 0,
                    b"subjectivity" => 1,
                    b"intensity" => 2,
                    _ => continue,
                };
                values[slot] = value.trim().parse::<f64>().map_err(|_| {
                    SentimentError::Lexicon(format!("invalid number '{}'", value))
                })?;
            }

            let Some(form) = form else { continue };
            let (sums, count) = senses.entry(form).or_insert(([0.0; 3], 0));
            for (sum, value) in sums.iter_mut().zip(values) {
                *sum += value;
            }
            *count += 1;
        }

        let entries = senses
            .into_iter()
            .map(|(form, (sums, count))| {
                let n = count as f64;
                let entry = LexiconEntry {
                    polarity: (sums[0] / n).clamp(-1.0, 1.0),
                    subjectivity: (sums[1] / n).clamp(0.0, 1.0),
                    intensity: sums[2] / n,
                };
                (form, entry)
            })
            .collect();

        Self::with_entries(entries)
    }

    fn with_entries(entries: HashMap<String, LexiconEntry>) -> Result<Self, SentimentError> {
        if entries.is_empty() {
            return Err(SentimentError::Lexicon("lexicon is empty".to_string()));
        }

        Ok(Self {
            entries,
            word_pattern: Regex::new(r"[\w']+")?,
        })
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score a text
    pub fn score(&self, text: &str) -> LexiconScore {
        let lowered = text.to_lowercase();
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;

        for word in self.word_pattern.find_iter(&lowered).map(|m| m.as_str()) {
            if is_negation(word) {
                negated = true;
                continue;
            }

            match self.entries.get(word) {
                Some(entry) if entry.is_intensifier() => {
                    modifier = Some(modifier.unwrap_or(1.0) * entry.intensity);
                }
                Some(entry) => {
                    let mut polarity = entry.polarity;
                    let mut subjectivity = entry.subjectivity;
                    if let Some(factor) = modifier.take() {
                        polarity = (polarity * factor).clamp(-1.0, 1.0);
                        subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
                    }
                    if negated {
                        polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    assessments.push((polarity, subjectivity));
                }
                // Intensifiers only reach the word right after them
                None => modifier = None,
            }
        }

        if assessments.is_empty() {
            return LexiconScore::default();
        }

        let n = assessments.len() as f64;
        LexiconScore {
            polarity: (assessments.iter().map(|(p, _)| p).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (assessments.iter().map(|(_, s)| s).sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
