use crate::config::RetrievalConfig;
use crate::modules::retrieval::index::display_source;
use crate::modules::retrieval::{DocumentIndex, IngestionError, Passage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

type TermVector = HashMap<String, f32>;

#[derive(Debug, Clone)]
struct IndexedPassage {
    source: PathBuf,
    text: String,
    terms: TermVector,
    norm: f32,
}

#[derive(Debug, Clone)]
pub struct LocalIndexHandle {
    id: Uuid,
    documents: usize,
    passages: Vec<IndexedPassage>,
}

impl LocalIndexHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_count(&self) -> usize {
        self.documents
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }
}

/// In-process lexical index over plain-text documents.
///
/// Documents are cut into passages of at most `chunk_size` characters and
/// ranked by cosine similarity of term-frequency vectors.
#[derive(Debug, Clone)]
pub struct LocalDocumentIndex {
    chunk_size: usize,
    top_k: usize,
}

impl LocalDocumentIndex {
    pub fn new(chunk_size: usize, top_k: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            top_k,
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.chunk_size, config.top_k)
    }

    fn load_document(path: &Path) -> Option<String> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext) => {}
            _ => {
                warn!(path = %path.display(), "skipping document with unsupported format");
                return None;
            }
        }

        match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => {
                warn!(path = %path.display(), "skipping empty document");
                None
            }
            Ok(content) => Some(content),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read document");
                None
            }
        }
    }
}

impl Default for LocalDocumentIndex {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}

impl DocumentIndex for LocalDocumentIndex {
    type Handle = LocalIndexHandle;

    fn ingest(&mut self, paths: &[PathBuf]) -> Result<Self::Handle, IngestionError> {
        let mut documents = 0;
        let mut passages = Vec::new();

        for path in paths {
            let Some(content) = Self::load_document(path) else {
                continue;
            };

            documents += 1;
            for text in split_passages(&content, self.chunk_size) {
                let terms = term_frequencies(&text);
                let norm = vector_norm(&terms);
                passages.push(IndexedPassage {
                    source: path.clone(),
                    text,
                    terms,
                    norm,
                });
            }
        }

        if documents == 0 {
            return Err(IngestionError::NoDocuments {
                attempted: paths.len(),
            });
        }

        let handle = LocalIndexHandle {
            id: Uuid::new_v4(),
            documents,
            passages,
        };

        info!(
            index_id = %handle.id,
            documents = handle.documents,
            passages = handle.passages.len(),
            "document index built"
        );

        Ok(handle)
    }

    fn retrieve(&self, handle: &Self::Handle, query: &str) -> Vec<Passage> {
        let query_terms = term_frequencies(query);
        let query_norm = vector_norm(&query_terms);

        let mut scored: Vec<Passage> = handle
            .passages
            .iter()
            .filter_map(|passage| {
                let score = cosine_similarity(&query_terms, query_norm, &passage.terms, passage.norm);
                (score > 0.0).then(|| Passage::new(passage.source.clone(), passage.text.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.top_k);

        for passage in &scored {
            debug!(source = %display_source(&passage.source), score = passage.score, "retrieved passage");
        }

        scored
    }
}

/// Groups paragraphs into passages of at most `chunk_size` characters.
/// Paragraphs that are too long on their own are split on whitespace.
pub fn split_passages(text: &str, chunk_size: usize) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut passages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let paragraphs = normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty());

    for paragraph in paragraphs {
        for piece in split_long_paragraph(paragraph, chunk_size) {
            let len = piece.chars().count();

            if current_len > 0 && current_len + 2 + len > chunk_size {
                passages.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if current_len > 0 {
                current.push_str("\n\n");
                current_len += 2;
            }

            current.push_str(&piece);
            current_len += len;
        }
    }

    if !current.is_empty() {
        passages.push(current);
    }

    passages
}

fn split_long_paragraph(paragraph: &str, chunk_size: usize) -> Vec<String> {
    if paragraph.chars().count() <= chunk_size {
        return vec![paragraph.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let len = word.chars().count();

        if current_len > 0 && current_len + 1 + len > chunk_size {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }

        current.push_str(word);
        current_len += len;
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Lower-cased word counts. Words outside ASCII also contribute their
/// character bigrams, so inflected Korean forms (`설레요`, `설레는`) still
/// overlap with their stem.
pub fn term_frequencies(text: &str) -> TermVector {
    let mut terms = TermVector::new();

    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase);

    for word in words {
        if !word.is_ascii() {
            let chars: Vec<char> = word.chars().collect();
            for pair in chars.windows(2) {
                *terms.entry(pair.iter().collect()).or_insert(0.0) += 1.0;
            }
        }
        *terms.entry(word).or_insert(0.0) += 1.0;
    }

    terms
}

fn vector_norm(terms: &TermVector) -> f32 {
    terms.values().map(|count| count * count).sum::<f32>().sqrt()
}

fn cosine_similarity(a: &TermVector, norm_a: f32, b: &TermVector, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f32 = small
        .iter()
        .filter_map(|(term, count)| large.get(term).map(|other| count * other))
        .sum();

    dot / (norm_a * norm_b)
}
