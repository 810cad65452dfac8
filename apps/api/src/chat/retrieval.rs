//! Lexical retriever: picks the resume chunks that share the most words with the question.
//! The result only grounds the LLM prompt; deterministic answers never read it.

use std::collections::HashSet;

pub const CHUNK_SIZE: usize = 220;
pub const TOP_K: usize = 2;

/// Splits text into chunks of up to `chunk_size` whitespace-delimited words.
/// A text without any words comes back whole as a single chunk.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![text.to_string()];
    }
    words.chunks(chunk_size).map(|c| c.join(" ")).collect()
}

/// Number of distinct lowercase tokens shared by both sides.
fn overlap_score(question_terms: &HashSet<String>, chunk: &str) -> usize {
    let chunk_terms: HashSet<String> = chunk.split_whitespace().map(str::to_lowercase).collect();
    question_terms.intersection(&chunk_terms).count()
}

/// Returns the `top_k` best-overlapping chunks joined by a blank line.
/// Ties keep document order.
pub fn retrieve(question: &str, resume_text: &str, top_k: usize) -> String {
    let question_terms: HashSet<String> =
        question.split_whitespace().map(str::to_lowercase).collect();

    let mut scored: Vec<(usize, String)> = chunk_text(resume_text, CHUNK_SIZE)
        .into_iter()
        .map(|chunk| (overlap_score(&question_terms, &chunk), chunk))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(top_k)
        .map(|(_, chunk)| chunk)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(prefix: &str, n: usize) -> String {
        (0..n)
            .map(|i| format!("{prefix}{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_chunk_sizes_500_words() {
        let chunks = chunk_text(&words("w", 500), 220);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.split_whitespace().count()).collect();
        assert_eq!(sizes, vec![220, 220, 60]);
    }

    #[test]
    fn test_chunk_empty_text_returns_whole() {
        assert_eq!(chunk_text("   \n", 220), vec!["   \n".to_string()]);
        assert_eq!(chunk_text("", 220), vec![String::new()]);
    }

    #[test]
    fn test_overlap_counts_distinct_terms() {
        let q: HashSet<String> = ["rust", "axum"].iter().map(|s| s.to_string()).collect();
        // "rust" repeated still counts once
        assert_eq!(overlap_score(&q, "Rust rust RUST axum tokio"), 2);
        assert_eq!(overlap_score(&q, "python"), 0);
    }

    #[test]
    fn test_retrieve_picks_highest_overlap() {
        let text = format!(
            "{} {} {}",
            words("a", 220),
            format!("rust axum {}", words("b", 218)),
            format!("rust {}", words("c", 59))
        );
        let context = retrieve("rust axum question", &text, 2);
        let parts: Vec<&str> = context.split("\n\n").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("rust axum b0"));
        assert!(parts[1].starts_with("rust c0"));
        // lowest-scoring chunk is left out
        assert!(!context.contains("a0"));
    }

    #[test]
    fn test_retrieve_ties_keep_document_order() {
        let text = format!("{} {} {}", words("a", 220), words("b", 220), words("c", 10));
        let context = retrieve("nothing matches", &text, 2);
        let parts: Vec<&str> = context.split("\n\n").collect();
        assert!(parts[0].starts_with("a0"));
        assert!(parts[1].starts_with("b0"));
    }

    #[test]
    fn test_retrieve_single_chunk() {
        assert_eq!(retrieve("hi", "just a short resume", 2), "just a short resume");
    }
}
