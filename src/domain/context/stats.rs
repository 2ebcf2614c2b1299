//! Summary statistics computed over upstream records.

use std::collections::BTreeMap;

use super::records::{Member, Sprint, Task};

/// Ordered count-by-label map.
pub type Distribution = BTreeMap<String, usize>;

fn bump(map: &mut Distribution, label: &str) {
    *map.entry(label.to_string()).or_insert(0) += 1;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub by_status: Distribution,
    pub by_priority: Distribution,
    pub total_estimated_hours: f64,
    /// Percentage of tasks with status `Done`.
    pub completion_rate: f64,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Default::default()
        };

        for task in tasks {
            bump(&mut stats.by_status, task.status.as_deref().unwrap_or("Unassigned"));
            bump(&mut stats.by_priority, task.priority.as_deref().unwrap_or("medium"));
            stats.total_estimated_hours += task.estimated_hours.unwrap_or(0.0);
        }

        if stats.total > 0 {
            let done = stats.by_status.get("Done").copied().unwrap_or(0);
            stats.completion_rate = done as f64 / stats.total as f64 * 100.0;
        }

        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Every sprint that is neither completed nor active.
    pub planned: usize,
    pub avg_velocity: f64,
    /// Average total capacity in hours.
    pub avg_capacity: f64,
}

impl SprintStats {
    pub fn from_sprints(sprints: &[Sprint]) -> Self {
        let mut stats = Self {
            total: sprints.len(),
            ..Default::default()
        };
        let mut velocities = Vec::new();
        let mut capacities = Vec::new();

        for sprint in sprints {
            match sprint.status.as_deref() {
                Some("Completed") => stats.completed += 1,
                Some("Active") => stats.active += 1,
                _ => stats.planned += 1,
            }

            if let Some(velocity) = sprint.effective_velocity() {
                velocities.push(velocity);
            }

            let hours = sprint
                .capacity
                .as_ref()
                .and_then(|c| c.total_capacity_hours)
                .filter(|h| *h != 0.0);
            if let Some(hours) = hours {
                capacities.push(hours);
            }
        }

        stats.avg_velocity = mean(&velocities);
        stats.avg_capacity = mean(&capacities);
        stats
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamStats {
    pub total: usize,
    pub by_role: Distribution,
}

impl TeamStats {
    pub fn from_members(members: &[Member]) -> Self {
        let mut stats = Self {
            total: members.len(),
            ..Default::default()
        };
        for member in members {
            bump(&mut stats.by_role, member.role_or_default());
        }
        stats
    }
}
