//! Reconstructs a structured document from model output.

use regex::Regex;

use crate::domain::catalog::DocumentTypeDefinition;

use super::generated::{DocumentSection, GeneratedDocument};

/// Parses generated markdown.
///
/// Parsing is total: any input, including the empty string, yields a
/// document. Text before the first heading belongs to no section.
#[derive(Debug, Clone)]
pub struct ResponseParser {
    fence_open: Regex,
    fence_close: Regex,
    heading: Regex,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            fence_open: Regex::new(r"(?i)\A```(?:markdown)?\s*\n").expect("fence opener pattern"),
            fence_close: Regex::new(r"\n```\s*\z").expect("fence closer pattern"),
            heading: Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern"),
        }
    }

    pub fn parse(&self, raw: &str, definition: &DocumentTypeDefinition) -> GeneratedDocument {
        let cleaned = self.strip_fences(raw);
        let sections = self.split_sections(&cleaned);
        let word_count = cleaned.split_whitespace().count();

        let title = sections
            .iter()
            .find(|section| section.level == 1)
            .map(|section| section.title.clone())
            .unwrap_or_else(|| definition.name.to_string());

        GeneratedDocument {
            title,
            content: cleaned,
            sections,
            word_count,
            document_type: definition.name.to_string(),
            category: definition.category.to_string(),
        }
    }

    /// Removes one leading fence opener and one trailing fence closer.
    /// Interior fences are left alone.
    fn strip_fences(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let opened = self.fence_open.replace(trimmed, "");
        self.fence_close.replace(&opened, "").into_owned()
    }

    fn split_sections(&self, markdown: &str) -> Vec<DocumentSection> {
        let mut sections = Vec::new();
        let mut current: Option<(u8, String)> = None;
        let mut body: Vec<&str> = Vec::new();

        for line in markdown.split('\n') {
            if let Some(caps) = self.heading.captures(line) {
                if let Some((level, title)) = current.take() {
                    sections.push(finish_section(level, title, &body));
                }
                // The pattern caps the marker at six characters.
                let level = caps[1].len() as u8;
                current = Some((level, caps[2].trim().to_string()));
                body.clear();
            } else if current.is_some() {
                body.push(line);
            }
        }

        if let Some((level, title)) = current {
            sections.push(finish_section(level, title, &body));
        }

        sections
    }
}

fn finish_section(level: u8, title: String, body: &[&str]) -> DocumentSection {
    DocumentSection {
        level,
        title,
        content: body.join("\n").trim().to_string(),
    }
}
