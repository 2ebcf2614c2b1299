//! The aggregate context handed to prompt assembly.

use chrono::{DateTime, Utc};

use super::records::{ActivityEntry, Blocker, Member, ProjectInfo, Sprint, Task};
use super::stats::{SprintStats, TaskStats, TeamStats};

/// Number of tasks retained in the context.
pub const TASK_RETENTION: usize = 50;
/// Number of sprints retained in the context.
pub const SPRINT_RETENTION: usize = 10;
/// Number of activity entries retained in the context.
pub const ACTIVITY_RETENTION: usize = 30;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskOverview {
    pub items: Vec<Task>,
    pub stats: TaskStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintOverview {
    pub items: Vec<Sprint>,
    pub stats: SprintStats,
    /// Most recent sprint (first in backend order).
    pub latest: Option<Sprint>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamOverview {
    pub items: Vec<Member>,
    pub stats: TeamStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityOverview {
    pub recent: Vec<ActivityEntry>,
    /// Count before retention was applied.
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockerOverview {
    pub items: Vec<Blocker>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMetadata {
    pub fetched_at: Option<DateTime<Utc>>,
    pub project_id: Option<String>,
    pub sprint_id: Option<String>,
}

/// Project data used to ground generated content.
///
/// Every block is optional. Prompt assembly renders only the blocks that are
/// present, so an empty context is always valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectContext {
    pub project: Option<ProjectInfo>,
    pub tasks: Option<TaskOverview>,
    pub sprints: Option<SprintOverview>,
    pub members: Option<TeamOverview>,
    pub activity: Option<ActivityOverview>,
    pub blockers: Option<BlockerOverview>,
    pub sprint_detail: Option<Sprint>,
    pub metadata: ContextMetadata,
}

/// Raw upstream collections before statistics and retention are applied.
#[derive(Debug, Clone, Default)]
pub struct UpstreamSnapshot {
    pub project: ProjectInfo,
    pub tasks: Vec<Task>,
    pub sprints: Vec<Sprint>,
    pub members: Vec<Member>,
    pub activity: Vec<ActivityEntry>,
    pub blockers: Vec<Blocker>,
    pub sprint_detail: Option<Sprint>,
}

impl ProjectContext {
    /// Builds a context from a full upstream snapshot.
    ///
    /// Statistics are computed over the complete collections; item lists are
    /// then cut to their retention limits.
    pub fn from_snapshot(
        snapshot: UpstreamSnapshot,
        metadata: ContextMetadata,
    ) -> Self {
        let UpstreamSnapshot {
            project,
            mut tasks,
            mut sprints,
            members,
            mut activity,
            blockers,
            sprint_detail,
        } = snapshot;

        let task_stats = TaskStats::from_tasks(&tasks);
        tasks.truncate(TASK_RETENTION);

        let sprint_stats = SprintStats::from_sprints(&sprints);
        let latest = sprints.first().cloned();
        sprints.truncate(SPRINT_RETENTION);

        let team_stats = TeamStats::from_members(&members);

        let activity_total = activity.len();
        activity.truncate(ACTIVITY_RETENTION);

        let blocker_total = blockers.len();

        Self {
            project: Some(project),
            tasks: Some(TaskOverview {
                items: tasks,
                stats: task_stats,
            }),
            sprints: Some(SprintOverview {
                items: sprints,
                stats: sprint_stats,
                latest,
            }),
            members: Some(TeamOverview {
                items: members,
                stats: team_stats,
            }),
            activity: Some(ActivityOverview {
                recent: activity,
                total: activity_total,
            }),
            blockers: Some(BlockerOverview {
                items: blockers,
                total: blocker_total,
            }),
            sprint_detail,
            metadata,
        }
    }

    /// Project id reported by the backend, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.id.as_deref())
    }

    /// Storage id of the sprint detail, if one was fetched.
    pub fn sprint_detail_id(&self) -> Option<&str> {
        self.sprint_detail.as_ref().and_then(|s| s.record_id.as_deref())
    }
}
