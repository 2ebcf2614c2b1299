//! Prompt assembly.
//!
//! Turns a document type, project context and user customization into the
//! single instruction text sent to the generation collaborator. Assembly is
//! deterministic and never fails: missing context degrades to placeholders
//! or omitted blocks.

use std::collections::HashSet;

use crate::domain::catalog::{DocumentTypeDefinition, DocumentTypeKey};
use crate::domain::context::{
    ActivityOverview, BlockerOverview, Distribution, ProjectContext, ProjectInfo, Sprint,
    SprintOverview, TaskOverview, TeamOverview,
};

use super::customization::{non_blank, UserCustomization};

/// Tasks listed individually in the prompt.
pub const PROMPT_TASK_LIMIT: usize = 15;
/// Team members listed individually in the prompt.
pub const PROMPT_MEMBER_LIMIT: usize = 10;
/// Blockers listed individually in the prompt.
pub const PROMPT_BLOCKER_LIMIT: usize = 10;
/// Activity entries listed individually in the prompt.
pub const PROMPT_ACTIVITY_LIMIT: usize = 10;

const NOT_AVAILABLE: &str = "N/A";

const OUTPUT_FORMAT_FOOTER: &str = r#"
---

## OUTPUT FORMAT REQUIREMENTS:

Generate the complete document in **professional Markdown format** following these rules:

1. **Structure**: Follow the required structure exactly, using proper heading levels (##, ###, ####)
2. **Formatting**: Use appropriate markdown formatting:
   - **Bold** for emphasis
   - *Italic* for definitions
   - `Code blocks` for technical terms
   - Tables for structured data
   - Bullet points and numbered lists for clarity
3. **Tone**: Professional, clear, and appropriate for the document type
4. **Completeness**: Fill ALL required sections with actual project data
5. **Accuracy**: Only use information from the project context provided
6. **Missing Data**: If data is unavailable for a section, write "[To be determined - requires stakeholder input]" or similar
7. **Professional Standards**: Follow industry best practices for this document type
8. **No Preamble**: Start directly with the document title and content

**BEGIN GENERATING THE PROFESSIONAL DOCUMENT NOW:**

"#;

/// Builds generation prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the full prompt for one document.
    pub fn build(
        &self,
        definition: &DocumentTypeDefinition,
        context: &ProjectContext,
        customization: &UserCustomization,
    ) -> String {
        let mut prompt = preamble(definition);

        push_structure(&mut prompt, definition, customization);

        prompt.push_str("\n---\n\n## PROJECT CONTEXT AND DATA:\n\n");

        if let Some(project) = &context.project {
            push_project(&mut prompt, project);
        }

        if customization.include_data_summary {
            if let Some(tasks) = &context.tasks {
                push_tasks(&mut prompt, tasks);
            }
            if let Some(sprints) = &context.sprints {
                push_sprints(&mut prompt, sprints);
            }
        }

        if definition.key == DocumentTypeKey::SPRINT_REPORT {
            if let Some(detail) = &context.sprint_detail {
                push_sprint_detail(&mut prompt, detail);
            }
        }

        if customization.include_data_summary {
            if let Some(members) = &context.members {
                push_team(&mut prompt, members);
            }
        }

        if let Some(blockers) = &context.blockers {
            push_blockers(&mut prompt, blockers);
        }

        if customization.include_data_summary {
            if let Some(activity) = &context.activity {
                push_activity(&mut prompt, activity);
            }
        }

        push_user_input(&mut prompt, customization);

        prompt.push_str(OUTPUT_FORMAT_FOOTER);
        prompt
    }
}

fn preamble(definition: &DocumentTypeDefinition) -> String {
    format!(
        r#"You are a world-class professional technical writer and software documentation expert with deep expertise in industry standards (IEEE 830-1998, ISO, arc42, Agile best practices). Generate a comprehensive, accurate, and professional {name}.

**CRITICAL WRITING GUIDELINES:**
1. **PROFESSIONAL TONE**: Write in a clear, authoritative, yet accessible manner similar to official IEEE or ISO documentation
2. **PROPER FORMATTING**: Use proper markdown formatting:
   - Use # for main headings (# 1. Introduction)
   - Use ## for subsections (## 1.1 Purpose)
   - Use ### for sub-subsections if needed
   - Include section numbering (1.1, 1.2, 2.1, etc.)
3. **COMPREHENSIVE CONTENT**: Write detailed paragraphs (minimum 3-5 sentences per subsection)
4. **STRUCTURED DATA**: Use bullet points for lists, tables for structured data, code blocks for technical specs
5. **SPECIFIC DETAILS**: Include concrete numbers, dates, names, and technical specifications from the project context
6. **HUMANIZED WRITING**: Write naturally, avoiding robotic or template-like language while maintaining professionalism
7. **ACCURACY**: Base ALL content on actual project data provided. Mark missing information as "[To be determined]"
8. **CONSISTENCY**: Maintain consistent terminology, style, and formatting throughout

**QUALITY REQUIREMENTS:**
- Follow {description} standards meticulously
- Be specific and avoid vague statements
- Include actionable recommendations where relevant
- Write for both technical and non-technical stakeholders
- Ensure content is thorough and publication-ready

---

## DOCUMENT TYPE: {name}
**Category:** {category}
**Description:** {description}

---

## DOCUMENT STRUCTURE TO GENERATE:

"#,
        name = definition.name,
        category = definition.category,
        description = definition.description,
    )
}

fn push_structure(
    prompt: &mut String,
    definition: &DocumentTypeDefinition,
    customization: &UserCustomization,
) {
    if customization.selected_sections.is_empty() {
        push_full_structure(prompt, definition);
    } else {
        push_selected_structure(prompt, definition, customization);
    }
}

/// Lists every section, tagging each subsection as required or optional.
fn push_full_structure(prompt: &mut String, definition: &DocumentTypeDefinition) {
    for section in definition.sections {
        prompt.push_str(&format!(
            "\n### Section {}: {}\n",
            section.number, section.title
        ));
        match section.description {
            Some(description) => prompt.push_str(&format!("*{}*\n\n", description)),
            None => prompt.push('\n'),
        }

        for sub in section.subsections {
            let tag = if sub.required {
                "**[REQUIRED]**"
            } else {
                "[OPTIONAL]"
            };
            prompt.push_str(&format!("- **{} {}** {}\n", sub.id, sub.title, tag));
            if let Some(description) = sub.description {
                prompt.push_str(&format!("  _{}_\n", description));
            }
        }
    }
}

/// Lists only the user's picks. The selection is the complete picture:
/// required subsections that were not picked are left out.
fn push_selected_structure(
    prompt: &mut String,
    definition: &DocumentTypeDefinition,
    customization: &UserCustomization,
) {
    let selected: HashSet<&str> = customization
        .selected_sections
        .iter()
        .map(|s| s.id.as_str())
        .collect();

    prompt.push_str("\n**GENERATE ONLY THE FOLLOWING SECTIONS (user-selected):**\n\n");

    for section in definition.sections {
        let picks: Vec<_> = section
            .subsections
            .iter()
            .filter(|sub| selected.contains(sub.id))
            .collect();
        if picks.is_empty() {
            continue;
        }

        prompt.push_str(&format!(
            "### Section {}: {}\n",
            section.number, section.title
        ));
        for sub in picks {
            prompt.push_str(&format!(
                "- **{} {}** - {}\n",
                sub.id,
                sub.title,
                sub.description.unwrap_or("")
            ));
        }
        prompt.push('\n');
    }

    prompt.push_str(
        "\n⚠️ **IMPORTANT**: Generate ONLY the sections listed above. Do NOT include any other sections.\n\n",
    );
}

fn push_project(prompt: &mut String, project: &ProjectInfo) {
    prompt.push_str("### Project Information:\n");
    prompt.push_str(&format!(
        "- **Project Name:** {}\n",
        or_na(project.name.as_deref())
    ));
    prompt.push_str(&format!(
        "- **Description:** {}\n",
        or_na(project.description.as_deref())
    ));
    prompt.push_str(&format!(
        "- **Created:** {}\n\n",
        or_na(project.created_at.as_deref())
    ));
}

fn push_tasks(prompt: &mut String, tasks: &TaskOverview) {
    let stats = &tasks.stats;
    prompt.push_str("### Tasks Overview:\n");
    prompt.push_str(&format!("- **Total Tasks:** {}\n", stats.total));
    prompt.push_str(&format!(
        "- **Completion Rate:** {:.1}%\n",
        stats.completion_rate
    ));
    prompt.push_str(&format!(
        "- **Status Distribution:** {}\n",
        distribution(&stats.by_status)
    ));
    prompt.push_str(&format!(
        "- **Priority Distribution:** {}\n",
        distribution(&stats.by_priority)
    ));
    prompt.push_str(&format!(
        "- **Total Estimated Hours:** {}\n\n",
        stats.total_estimated_hours
    ));

    if tasks.items.is_empty() {
        return;
    }
    prompt.push_str("**Key Tasks:**\n");
    for (idx, task) in tasks.items.iter().take(PROMPT_TASK_LIMIT).enumerate() {
        prompt.push_str(&format!(
            "{}. **{}** [{}] - {} priority, {}hrs\n",
            idx + 1,
            or_na(task.title.as_deref()),
            or_na(task.status.as_deref()),
            task.priority.as_deref().unwrap_or("medium"),
            task.estimated_hours.unwrap_or(0.0)
        ));
    }
    prompt.push('\n');
}

fn push_sprints(prompt: &mut String, sprints: &SprintOverview) {
    let stats = &sprints.stats;
    prompt.push_str("### Sprint Information:\n");
    prompt.push_str(&format!("- **Total Sprints:** {}\n", stats.total));
    prompt.push_str(&format!("- **Completed:** {}\n", stats.completed));
    prompt.push_str(&format!("- **Active:** {}\n", stats.active));
    prompt.push_str(&format!(
        "- **Average Velocity:** {:.1}\n",
        stats.avg_velocity
    ));
    prompt.push_str(&format!(
        "- **Average Capacity:** {:.1} hours\n\n",
        stats.avg_capacity
    ));

    let Some(latest) = &sprints.latest else {
        return;
    };
    prompt.push_str("**Latest Sprint:**\n");
    prompt.push_str(&format!("- Sprint ID: {}\n", or_na(latest.label())));
    prompt.push_str(&format!("- Summary: {}\n", or_na(latest.summary.as_deref())));
    prompt.push_str(&format!("- Status: {}\n", or_na(latest.status.as_deref())));
    prompt.push_str(&format!(
        "- Duration: {} to {}\n",
        or_na(latest.start_date.as_deref()),
        or_na(latest.end_date.as_deref())
    ));
    prompt.push_str(&format!("- Goals: {}\n", joined_or(&latest.goals, NOT_AVAILABLE)));
    prompt.push_str(&format!(
        "- Total Effort: {} hours\n",
        latest.total_effort.unwrap_or(0.0)
    ));
    prompt.push_str(&format!(
        "- Predicted Velocity: {}\n\n",
        latest.predicted_velocity.unwrap_or(0.0)
    ));
}

fn push_sprint_detail(prompt: &mut String, sprint: &Sprint) {
    prompt.push_str("### DETAILED SPRINT DATA (For Sprint Report):\n\n");
    prompt.push_str(&format!("**Sprint:** {}\n", or_na(sprint.sprint_id.as_deref())));
    prompt.push_str(&format!("**Summary:** {}\n", or_na(sprint.summary.as_deref())));
    prompt.push_str(&format!("**Status:** {}\n", or_na(sprint.status.as_deref())));
    prompt.push_str(&format!(
        "**Period:** {} to {}\n\n",
        or_na(sprint.start_date.as_deref()),
        or_na(sprint.end_date.as_deref())
    ));

    if !sprint.goals.is_empty() {
        prompt.push_str("**Sprint Goals:**\n");
        for (idx, goal) in sprint.goals.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", idx + 1, goal));
        }
        prompt.push('\n');
    }

    if let Some(capacity) = &sprint.capacity {
        prompt.push_str("**Capacity:**\n");
        prompt.push_str(&format!(
            "- Total Capacity: {} hours\n",
            capacity.total_capacity_hours.unwrap_or(0.0)
        ));
        if !capacity.member_capacities.is_empty() {
            prompt.push_str(&format!(
                "- Team Members: {}\n\n",
                capacity.member_capacities.len()
            ));
        }
    }

    if let Some(risk) = &sprint.risk_analysis {
        prompt.push_str("**Risk Analysis:**\n");
        prompt.push_str(&format!(
            "- Delay Risk: {}%\n",
            risk.delay_risk_percent.unwrap_or(0.0)
        ));
        prompt.push_str(&format!(
            "- Overloaded Members: {}\n",
            joined_or(&risk.overloaded_members, "None")
        ));
        prompt.push_str(&format!(
            "- Critical Dependencies: {}\n\n",
            joined_or(&risk.critical_dependencies, "None")
        ));
    }

    prompt.push_str("**Tasks:**\n");
    prompt.push_str(&format!("- Selected: {} tasks\n", sprint.selected_tasks.len()));
    prompt.push_str(&format!("- Deferred: {} tasks\n\n", sprint.deferred_tasks.len()));

    if let Some(score) = sprint.blocker_health_score {
        prompt.push_str("**Blocker Health:**\n");
        prompt.push_str(&format!("- Health Score: {}\n", score));
        prompt.push_str(&format!(
            "- Status: {}\n\n",
            or_na(sprint.blocker_status.as_deref())
        ));
    }
}

fn push_team(prompt: &mut String, team: &TeamOverview) {
    prompt.push_str("### Team Information:\n");
    prompt.push_str(&format!("- **Total Members:** {}\n", team.stats.total));
    prompt.push_str(&format!(
        "- **Role Distribution:** {}\n\n",
        distribution(&team.stats.by_role)
    ));

    if team.items.is_empty() {
        return;
    }
    prompt.push_str("**Team Members:**\n");
    for member in team.items.iter().take(PROMPT_MEMBER_LIMIT) {
        prompt.push_str(&format!(
            "- {} ({})\n",
            member.display_name(),
            member.role_or_default()
        ));
    }
    prompt.push('\n');
}

fn push_blockers(prompt: &mut String, blockers: &BlockerOverview) {
    if blockers.total == 0 {
        return;
    }

    prompt.push_str("### Current Blockers:\n");
    prompt.push_str(&format!("- **Total Active Blockers:** {}\n", blockers.total));

    if blockers.items.is_empty() {
        prompt.push('\n');
        return;
    }
    prompt.push_str("\n**Active Blockers:**\n");
    for blocker in blockers.items.iter().take(PROMPT_BLOCKER_LIMIT) {
        prompt.push_str(&format!(
            "- [{}] {}\n",
            blocker.severity.as_deref().unwrap_or("Medium"),
            or_na(blocker.reason.as_deref())
        ));
    }
    prompt.push('\n');
}

fn push_activity(prompt: &mut String, activity: &ActivityOverview) {
    if activity.recent.is_empty() {
        return;
    }

    prompt.push_str("### Recent Activity:\n");
    for entry in activity.recent.iter().take(PROMPT_ACTIVITY_LIMIT) {
        prompt.push_str(&format!(
            "- {} {} {}\n",
            entry.actor_name(),
            or_na(entry.action.as_deref()),
            or_na(entry.entity_type.as_deref())
        ));
    }
    prompt.push('\n');
}

fn push_user_input(prompt: &mut String, customization: &UserCustomization) {
    if let Some(requirements) = customization.requirements() {
        prompt.push_str(&format!(
            "\n---\n\n## USER REQUIREMENTS AND FOCUS AREAS:\n\n{}\n\n",
            requirements
        ));
    }

    if !customization.custom_sections.is_empty() {
        prompt.push_str("\n---\n\n## CUSTOM SECTIONS REQUESTED BY USER:\n\n");
        for (idx, section) in customization.custom_sections.iter().enumerate() {
            prompt.push_str(&format!("{}. **{}**\n", idx + 1, section.title));
            if let Some(description) = non_blank(section.description.as_deref()) {
                prompt.push_str(&format!("   Description: {}\n", description));
            }
        }
        prompt.push('\n');
    }

    if let Some(notes) = customization.notes() {
        prompt.push_str(&format!(
            "\n---\n\n## ADDITIONAL INSTRUCTIONS FROM USER:\n\n{}\n\n",
            notes
        ));
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn joined_or<'a>(values: &'a [String], empty: &'a str) -> std::borrow::Cow<'a, str> {
    if values.is_empty() {
        empty.into()
    } else {
        values.join(", ").into()
    }
}

/// Renders `label: count` pairs in label order.
fn distribution(map: &Distribution) -> String {
    if map.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    map.iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}
