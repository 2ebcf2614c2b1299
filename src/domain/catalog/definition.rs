//! Document type definitions.
//!
//! A definition is immutable `'static` data: the catalog table is built from
//! `const` records and never mutated at runtime.

use serde::Serialize;

/// Stable keys for document types that other modules branch on.
pub struct DocumentTypeKey;

impl DocumentTypeKey {
    /// The sprint report type. Sprint detail context is only rendered for it.
    pub const SPRINT_REPORT: &'static str = "SPRINT_REPORT";
}

/// A named document template with its ordered section tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentTypeDefinition {
    /// Unique, stable key (e.g. `SRS`).
    #[serde(rename = "id")]
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Icon identifier consumed by the frontend.
    pub icon: &'static str,
    #[serde(rename = "structure")]
    pub sections: &'static [Section],
}

impl DocumentTypeDefinition {
    /// Iterates every subsection across all sections, in document order.
    pub fn subsections(&self) -> impl Iterator<Item = &'static Subsection> {
        self.sections.iter().flat_map(|section| section.subsections.iter())
    }

    /// Finds a subsection by its id.
    pub fn find_subsection(&self, id: &str) -> Option<&'static Subsection> {
        self.subsections().find(|sub| sub.id == id)
    }

    /// Returns the structure view served by the structure endpoints.
    pub fn structure(&self) -> DocumentStructure {
        DocumentStructure {
            name: self.name,
            description: self.description,
            category: self.category,
            structure: self.sections,
        }
    }
}

/// Definition metadata plus sections, without key and icon.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DocumentStructure {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub structure: &'static [Section],
}

/// A top-level section of a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display label, e.g. `"1"` or `"Appendix"`.
    #[serde(rename = "section")]
    pub number: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub subsections: &'static [Subsection],
}

/// An addressable, user-selectable leaf of a document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subsection {
    /// Unique within one document type, e.g. `"1.1"` or `"A"`.
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub required: bool,
    /// Whether a user may pick or omit it when curating a subset.
    pub selectable: bool,
}

impl Subsection {
    /// A required, selectable subsection.
    pub const fn required(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            description: None,
            required: true,
            selectable: true,
        }
    }

    /// An optional, selectable subsection.
    pub const fn optional(id: &'static str, title: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(id, title)
        }
    }

    pub const fn described(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    /// Marks the subsection as always present in the selection UI.
    pub const fn fixed(self) -> Self {
        Self {
            selectable: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBS: &[Subsection] = &[
        Subsection::required("1.1", "Purpose").described("Why").fixed(),
        Subsection::optional("1.2", "Scope"),
    ];

    const DEF: DocumentTypeDefinition = DocumentTypeDefinition {
        key: "TEST",
        name: "Test Document",
        description: "A test",
        category: "Testing",
        icon: "File",
        sections: &[Section {
            number: "1",
            title: "Intro",
            description: Some("Opening"),
            subsections: SUBS,
        }],
    };

    #[test]
    fn const_builders_set_flags() {
        assert!(SUBS[0].required);
        assert!(!SUBS[0].selectable);
        assert_eq!(SUBS[0].description, Some("Why"));
        assert!(!SUBS[1].required);
        assert!(SUBS[1].selectable);
        assert_eq!(SUBS[1].description, None);
    }

    #[test]
    fn find_subsection_by_id() {
        assert_eq!(DEF.find_subsection("1.2").map(|s| s.title), Some("Scope"));
        assert!(DEF.find_subsection("9.9").is_none());
    }

    #[test]
    fn definition_serializes_with_wire_field_names() {
        let json = serde_json::to_value(DEF).unwrap();

        assert_eq!(json["id"], "TEST");
        assert_eq!(json["structure"][0]["section"], "1");
        assert_eq!(json["structure"][0]["description"], "Opening");
        assert_eq!(json["structure"][0]["subsections"][0]["selectable"], false);
        assert!(json["structure"][0]["subsections"][1].get("description").is_none());
    }

    #[test]
    fn structure_view_omits_key_and_icon() {
        let json = serde_json::to_value(DEF.structure()).unwrap();

        assert_eq!(json["name"], "Test Document");
        assert!(json.get("id").is_none());
        assert!(json.get("icon").is_none());
        assert_eq!(json["structure"].as_array().unwrap().len(), 1);
    }
}
