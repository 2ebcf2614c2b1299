//! Project context consumed by prompt assembly.
//!
//! Modelled as explicit optional-field records so that every "missing data"
//! default is decided in one place rather than at each use site.

mod project_context;
mod records;
mod stats;

pub use project_context::{
    ActivityOverview, BlockerOverview, ContextMetadata, ProjectContext, SprintOverview,
    TaskOverview, TeamOverview, UpstreamSnapshot, ACTIVITY_RETENTION, SPRINT_RETENTION,
    TASK_RETENTION,
};
pub use records::{
    ActivityEntry, Blocker, Member, PersonProfile, PersonRef, ProjectInfo, RiskAnalysis, Sprint,
    SprintCapacity, Task,
};
pub use stats::{Distribution, SprintStats, TaskStats, TeamStats};
