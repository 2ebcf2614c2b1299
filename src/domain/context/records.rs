//! Records supplied by the upstream project-management backend.
//!
//! Every field is optional: the backend omits, nulls, or reshapes fields
//! freely, and prompt assembly must degrade to placeholders instead of
//! failing. Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Basic project identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Storage id. A virtual `id` copy, when present, is ignored.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub owner: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub estimated_hours: Option<f64>,
}

/// A sprint as returned by both the sprint list and the sprint detail endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Storage id.
    #[serde(rename = "_id")]
    pub record_id: Option<String>,
    /// Human-facing sprint label.
    pub sprint_id: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: Vec<String>,
    pub total_effort: Option<f64>,
    pub predicted_velocity: Option<f64>,
    pub velocity: Option<f64>,
    pub capacity: Option<SprintCapacity>,
    pub risk_analysis: Option<RiskAnalysis>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_tasks: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deferred_tasks: Vec<serde_json::Value>,
    pub blocker_health_score: Option<f64>,
    pub blocker_status: Option<String>,
}

impl Sprint {
    /// The label to show for this sprint: the sprint label, else the storage id.
    pub fn label(&self) -> Option<&str> {
        self.sprint_id.as_deref().or(self.record_id.as_deref())
    }

    /// Velocity used for averages: predicted velocity when non-zero, else the
    /// recorded velocity when non-zero.
    pub fn effective_velocity(&self) -> Option<f64> {
        self.predicted_velocity
            .filter(|v| *v != 0.0)
            .or(self.velocity.filter(|v| *v != 0.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintCapacity {
    pub total_capacity_hours: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub member_capacities: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub delay_risk_percent: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overloaded_members: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub critical_dependencies: Vec<String>,
}

/// A reference to a person that the backend may or may not have populated.
///
/// Populated references arrive as objects; unpopulated ones as bare ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PersonRef {
    Profile(PersonProfile),
    Reference(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl PersonRef {
    /// The display name, available only for populated references.
    pub fn name(&self) -> Option<&str> {
        match self {
            PersonRef::Profile(profile) => profile.name.as_deref(),
            PersonRef::Reference(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: Option<PersonRef>,
    pub role: Option<String>,
}

impl Member {
    pub fn display_name(&self) -> &str {
        self.member_id
            .as_ref()
            .and_then(PersonRef::name)
            .unwrap_or("N/A")
    }

    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or("Member")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub user: Option<PersonRef>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
}

impl ActivityEntry {
    pub fn actor_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(PersonRef::name)
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blocker {
    pub severity: Option<String>,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_accepts_storage_id_field() {
        let project: ProjectInfo = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Apollo",
            "createdAt": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(project.id.as_deref(), Some("p1"));
        assert_eq!(project.created_at.as_deref(), Some("2024-01-01"));
        assert!(project.description.is_none());
    }

    #[test]
    fn project_with_virtual_id_copy_decodes() {
        let project: ProjectInfo = serde_json::from_value(json!({
            "_id": "p1",
            "id": "p1",
            "name": "Apollo"
        }))
        .unwrap();

        assert_eq!(project.id.as_deref(), Some("p1"));
        assert_eq!(project.name.as_deref(), Some("Apollo"));
    }

    #[test]
    fn sprint_tolerates_null_lists() {
        let sprint: Sprint = serde_json::from_value(json!({
            "sprintId": "S-1",
            "goals": null,
            "selectedTasks": null
        }))
        .unwrap();

        assert!(sprint.goals.is_empty());
        assert!(sprint.selected_tasks.is_empty());
        assert_eq!(sprint.label(), Some("S-1"));
    }

    #[test]
    fn sprint_label_falls_back_to_storage_id() {
        let sprint = Sprint {
            record_id: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(sprint.label(), Some("abc"));
    }

    #[test]
    fn effective_velocity_skips_zero_predictions() {
        let sprint = Sprint {
            predicted_velocity: Some(0.0),
            velocity: Some(12.0),
            ..Default::default()
        };
        assert_eq!(sprint.effective_velocity(), Some(12.0));

        let none = Sprint::default();
        assert_eq!(none.effective_velocity(), None);
    }

    #[test]
    fn member_name_requires_populated_reference() {
        let populated: Member = serde_json::from_value(json!({
            "memberId": {"name": "Ada", "email": "ada@example.com"},
            "role": "Developer"
        }))
        .unwrap();
        let bare: Member = serde_json::from_value(json!({"memberId": "u-42"})).unwrap();

        assert_eq!(populated.display_name(), "Ada");
        assert_eq!(populated.role_or_default(), "Developer");
        assert_eq!(bare.display_name(), "N/A");
        assert_eq!(bare.role_or_default(), "Member");
    }

    #[test]
    fn activity_actor_defaults_to_unknown() {
        let entry: ActivityEntry = serde_json::from_value(json!({
            "user": "u-1",
            "action": "created",
            "entityType": "Task"
        }))
        .unwrap();

        assert_eq!(entry.actor_name(), "Unknown");
        assert_eq!(entry.entity_type.as_deref(), Some("Task"));
    }
}
