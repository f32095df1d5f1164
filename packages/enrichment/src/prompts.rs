//! LLM prompt construction for result extraction.
//!
//! The extraction prompt concatenates every search record as
//! `title: link` followed by the snippet, prefixed by the user's
//! instruction text and suffixed by a fixed formatting instruction that
//! keeps the completion to a single bare answer.

use crate::traits::SearchRecord;

/// System message sent with every extraction request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Fixed formatting instruction appended to every extraction prompt.
pub const EXTRACT_FORMAT_INSTRUCTION: &str = "Please extract the information requested and give me one result only, no additional dialogue, just few words/url info. Do not respond with 'here's the information:', just give the result";

/// Render search records as newline-joined `title: link\nsnippet` blocks.
pub fn format_search_text(records: &[SearchRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}: {}\n{}", r.title, r.link, r.snippet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full user prompt for one query's extraction.
pub fn format_extract_prompt(instruction: &str, records: &[SearchRecord]) -> String {
    format!(
        "{} from the following search results:\n\n{}\n\n{}",
        instruction,
        format_search_text(records),
        EXTRACT_FORMAT_INSTRUCTION,
    )
}
