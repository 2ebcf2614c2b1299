//! Prompt assembly and response parsing for generated documents.

mod customization;
mod generated;
mod parser;
mod prompt;

pub use customization::{CustomSection, SelectedSection, UserCustomization};
pub use generated::{DocumentSection, GeneratedDocument};
pub use parser::ResponseParser;
pub use prompt::{
    PromptAssembler, PROMPT_ACTIVITY_LIMIT, PROMPT_BLOCKER_LIMIT, PROMPT_MEMBER_LIMIT,
    PROMPT_TASK_LIMIT,
};
