//! User-controlled shaping of a generated document.

/// A subsection the user picked for inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSection {
    pub id: String,
    pub title: String,
}

impl SelectedSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A user-defined section appended after the catalog structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSection {
    pub title: String,
    pub description: Option<String>,
}

impl CustomSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Everything the user can say about the document beyond its type.
///
/// An empty `selected_sections` means "include the whole structure".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCustomization {
    pub user_requirements: Option<String>,
    pub selected_sections: Vec<SelectedSection>,
    pub custom_sections: Vec<CustomSection>,
    pub additional_notes: Option<String>,
    /// Gates the task, sprint, team and activity summaries.
    pub include_data_summary: bool,
}

impl Default for UserCustomization {
    fn default() -> Self {
        Self {
            user_requirements: None,
            selected_sections: Vec::new(),
            custom_sections: Vec::new(),
            additional_notes: None,
            include_data_summary: true,
        }
    }
}

impl UserCustomization {
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.user_requirements = Some(requirements.into());
        self
    }

    pub fn with_selected(mut self, section: SelectedSection) -> Self {
        self.selected_sections.push(section);
        self
    }

    pub fn with_custom_section(mut self, section: CustomSection) -> Self {
        self.custom_sections.push(section);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_notes = Some(notes.into());
        self
    }

    pub fn without_data_summary(mut self) -> Self {
        self.include_data_summary = false;
        self
    }

    /// User requirements, treating blank text as absent.
    pub fn requirements(&self) -> Option<&str> {
        non_blank(self.user_requirements.as_deref())
    }

    /// Additional notes, treating blank text as absent.
    pub fn notes(&self) -> Option<&str> {
        non_blank(self.additional_notes.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_includes_data_summary() {
        let customization = UserCustomization::default();
        assert!(customization.include_data_summary);
        assert!(customization.selected_sections.is_empty());
    }

    #[test]
    fn blank_free_text_counts_as_absent() {
        let customization = UserCustomization::default()
            .with_requirements("   ")
            .with_notes("Keep it short");

        assert_eq!(customization.requirements(), None);
        assert_eq!(customization.notes(), Some("Keep it short"));
    }
}
