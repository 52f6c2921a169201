//! Pure resolution of a leave duration into an ordered approval path.
//!
//! No I/O happens here: the caller fetches (or fails to fetch) the workflow
//! and approver list, and this module merges whatever arrived with the
//! injected fallback dataset into a renderable view.

use crate::api::types::{ApprovalWorkflowResponse, ApproverResponse};

/// Where one of the two resolver inputs came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// Locally bundled preview dataset, substituted whenever the server could
/// not supply the real thing. Injected rather than global so tests and
/// future tenants can swap it.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackData {
    pub workflow: ApprovalWorkflowResponse,
    pub approvers: Vec<ApproverResponse>,
}

impl FallbackData {
    /// The shipped preview dataset: a two-level medium-leave workflow with
    /// one sample approver per level.
    pub fn preview_defaults() -> Self {
        use crate::api::types::ApprovalLevelResponse;
        Self {
            workflow: ApprovalWorkflowResponse {
                id: "fallback-workflow".into(),
                name: "Medium Leave (3-5 days)".into(),
                min_days: 3,
                max_days: 5,
                approval_levels: vec![
                    ApprovalLevelResponse {
                        level: 1,
                        roles: vec!["team_lead".into()],
                        approver_type: Some("teamLead".into()),
                        fallback_roles: vec!["team_lead".into()],
                    },
                    ApprovalLevelResponse {
                        level: 2,
                        roles: vec!["manager".into()],
                        approver_type: Some("manager".into()),
                        fallback_roles: vec!["manager".into()],
                    },
                ],
                is_active: true,
                created_at: None,
                updated_at: None,
            },
            approvers: vec![
                ApproverResponse {
                    id: "fallback-approver-1".into(),
                    first_name: "John".into(),
                    last_name: "Smith".into(),
                    email: Some("john.smith@example.com".into()),
                    role: Some("team_lead".into()),
                    level: Some(1),
                    is_fallback: false,
                },
                ApproverResponse {
                    id: "fallback-approver-2".into(),
                    first_name: "Jane".into(),
                    last_name: "Doe".into(),
                    email: Some("jane.doe@example.com".into()),
                    role: Some("manager".into()),
                    level: Some(2),
                    is_fallback: false,
                },
            ],
        }
    }
}

/// One row of the rendered approval path: a workflow level plus the
/// approvers assigned to it (possibly none).
#[derive(Debug, Clone, PartialEq)]
pub struct LevelView {
    pub level: i64,
    pub approver_type: Option<String>,
    pub approvers: Vec<ApproverResponse>,
}

impl LevelView {
    pub fn has_assignments(&self) -> bool {
        !self.approvers.is_empty()
    }

    /// Humanized level label: "teamLead" -> "Team Lead", absent -> "Approver".
    pub fn label(&self) -> String {
        match &self.approver_type {
            Some(tag) if !tag.is_empty() => humanize_tag(tag),
            _ => "Approver".to_string(),
        }
    }
}

fn humanize_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 4);
    for (i, ch) in tag.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWorkflow {
    pub workflow_name: String,
    pub duration_days: i64,
    pub levels: Vec<LevelView>,
    pub workflow_source: DataSource,
    pub approver_source: DataSource,
}

impl ResolvedWorkflow {
    /// True when any part of the view was built from fallback data; such a
    /// view is labeled a preview, never an authoritative approval path.
    pub fn is_preview(&self) -> bool {
        self.workflow_source == DataSource::Fallback
            || self.approver_source == DataSource::Fallback
    }
}

/// Maps a leave duration plus whatever remote data arrived into the ordered
/// approval path to display.
///
/// * A non-positive `duration` yields `None`; the caller renders nothing.
/// * A missing workflow or approver list is substituted from `fallback`,
///   and the substitution is recorded in the result's source markers.
/// * Levels are emitted in the workflow's own order, one `LevelView` per
///   level, including levels no approver matched.
/// * Approvers without a level are treated as level `0`, so they join no
///   view unless a workflow explicitly defines level `0`.
///
/// Deterministic, allocates its own output, never mutates its inputs.
pub fn resolve(
    duration: i64,
    workflow: Option<&ApprovalWorkflowResponse>,
    approvers: Option<&[ApproverResponse]>,
    fallback: &FallbackData,
) -> Option<ResolvedWorkflow> {
    if duration <= 0 {
        return None;
    }

    let (workflow, workflow_source) = match workflow {
        Some(w) => (w, DataSource::Live),
        None => (&fallback.workflow, DataSource::Fallback),
    };
    let (approvers, approver_source) = match approvers {
        Some(a) => (a, DataSource::Live),
        None => (fallback.approvers.as_slice(), DataSource::Fallback),
    };

    let mut ordered: Vec<&ApproverResponse> = approvers.iter().collect();
    ordered.sort_by_key(|a| a.level.unwrap_or(0));

    let levels = workflow
        .approval_levels
        .iter()
        .map(|level| LevelView {
            level: level.level,
            approver_type: level.approver_type.clone(),
            approvers: ordered
                .iter()
                .filter(|a| a.level.unwrap_or(0) == level.level)
                .map(|a| (*a).clone())
                .collect(),
        })
        .collect();

    Some(ResolvedWorkflow {
        workflow_name: workflow.name.clone(),
        duration_days: duration,
        levels,
        workflow_source,
        approver_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ApprovalLevelResponse, ApprovalWorkflowResponse, ApproverResponse};

    fn approver(id: &str, first: &str, last: &str, level: Option<i64>) -> ApproverResponse {
        ApproverResponse {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: None,
            role: None,
            level,
            is_fallback: false,
        }
    }

    fn level(n: i64, tag: Option<&str>) -> ApprovalLevelResponse {
        ApprovalLevelResponse {
            level: n,
            roles: vec![],
            approver_type: tag.map(Into::into),
            fallback_roles: vec![],
        }
    }

    fn workflow(levels: Vec<ApprovalLevelResponse>) -> ApprovalWorkflowResponse {
        ApprovalWorkflowResponse {
            id: "wf-1".into(),
            name: "Test Workflow".into(),
            min_days: 1,
            max_days: 10,
            approval_levels: levels,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn non_positive_duration_yields_nothing() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, None)]);
        assert!(resolve(0, Some(&wf), Some(&[]), &fallback).is_none());
        assert!(resolve(-3, Some(&wf), Some(&[]), &fallback).is_none());
        assert!(resolve(0, None, None, &fallback).is_none());
    }

    #[test]
    fn level_count_and_order_follow_workflow_exactly() {
        let fallback = FallbackData::preview_defaults();
        // Deliberately out of numeric order; the display order is the
        // workflow's own order.
        let wf = workflow(vec![level(3, None), level(1, None), level(2, None)]);
        let resolved = resolve(5, Some(&wf), Some(&[]), &fallback).unwrap();
        let order: Vec<i64> = resolved.levels.iter().map(|l| l.level).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn resolution_is_deterministic_and_structurally_equal() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, Some("teamLead")), level(2, Some("manager"))]);
        let approvers = vec![
            approver("a1", "John", "Smith", Some(1)),
            approver("a2", "Jane", "Doe", Some(2)),
        ];
        let first = resolve(4, Some(&wf), Some(&approvers), &fallback).unwrap();
        let second = resolve(4, Some(&wf), Some(&approvers), &fallback).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_approvers_substitute_fallback_list() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, Some("teamLead")), level(2, Some("manager"))]);
        let resolved = resolve(4, Some(&wf), None, &fallback).unwrap();

        assert_eq!(resolved.workflow_source, DataSource::Live);
        assert_eq!(resolved.approver_source, DataSource::Fallback);
        assert!(resolved.is_preview());
        assert_eq!(resolved.levels[0].approvers[0].full_name(), "John Smith");
        assert_eq!(resolved.levels[1].approvers[0].full_name(), "Jane Doe");
    }

    #[test]
    fn both_inputs_missing_resolves_fallback_against_fallback() {
        let fallback = FallbackData::preview_defaults();
        let resolved = resolve(4, None, None, &fallback).unwrap();

        assert_eq!(resolved.workflow_source, DataSource::Fallback);
        assert_eq!(resolved.approver_source, DataSource::Fallback);
        assert!(resolved.is_preview());
        assert_eq!(resolved.workflow_name, "Medium Leave (3-5 days)");
        assert_eq!(resolved.levels.len(), 2);
        assert_eq!(resolved.levels[0].label(), "Team Lead");
        assert_eq!(resolved.levels[1].label(), "Manager");
    }

    #[test]
    fn medium_leave_scenario_groups_sample_approvers() {
        let fallback = FallbackData::preview_defaults();
        let wf = fallback.workflow.clone();
        let approvers = fallback.approvers.clone();
        let resolved = resolve(4, Some(&wf), Some(&approvers), &fallback).unwrap();

        assert!(!resolved.is_preview());
        assert_eq!(resolved.duration_days, 4);
        assert_eq!(resolved.levels.len(), 2);
        assert_eq!(resolved.levels[0].approvers.len(), 1);
        assert_eq!(resolved.levels[0].approvers[0].full_name(), "John Smith");
        assert_eq!(resolved.levels[1].approvers.len(), 1);
        assert_eq!(resolved.levels[1].approvers[0].full_name(), "Jane Doe");
    }

    #[test]
    fn empty_approver_list_emits_all_levels_unassigned() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, Some("teamLead")), level(2, Some("manager"))]);
        let resolved = resolve(4, Some(&wf), Some(&[]), &fallback).unwrap();

        assert_eq!(resolved.approver_source, DataSource::Live);
        assert_eq!(resolved.levels.len(), 2);
        assert!(resolved.levels.iter().all(|l| !l.has_assignments()));
    }

    #[test]
    fn approver_without_level_defaults_to_zero_and_matches_no_view() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, None), level(2, None)]);
        let approvers = vec![approver("a1", "No", "Level", None)];
        let resolved = resolve(4, Some(&wf), Some(&approvers), &fallback).unwrap();
        assert!(resolved.levels.iter().all(|l| l.approvers.is_empty()));

        // Unless a workflow explicitly defines level 0.
        let wf_zero = workflow(vec![level(0, None)]);
        let resolved = resolve(4, Some(&wf_zero), Some(&approvers), &fallback).unwrap();
        assert_eq!(resolved.levels[0].approvers.len(), 1);
    }

    #[test]
    fn approvers_within_a_level_keep_input_order() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(1, None)]);
        let approvers = vec![
            approver("a1", "First", "Listed", Some(1)),
            approver("a2", "Second", "Listed", Some(1)),
            approver("a3", "Other", "Level", Some(2)),
        ];
        let resolved = resolve(2, Some(&wf), Some(&approvers), &fallback).unwrap();
        let names: Vec<String> = resolved.levels[0]
            .approvers
            .iter()
            .map(|a| a.full_name())
            .collect();
        assert_eq!(names, vec!["First Listed", "Second Listed"]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![level(2, None), level(1, None)]);
        let approvers = vec![
            approver("a1", "B", "Second", Some(2)),
            approver("a2", "A", "First", Some(1)),
        ];
        let wf_before = wf.clone();
        let approvers_before = approvers.clone();

        let _ = resolve(3, Some(&wf), Some(&approvers), &fallback);

        assert_eq!(wf, wf_before);
        assert_eq!(approvers, approvers_before);
    }

    #[test]
    fn label_humanizes_camel_case_tags() {
        let view = LevelView {
            level: 1,
            approver_type: Some("teamLead".into()),
            approvers: vec![],
        };
        assert_eq!(view.label(), "Team Lead");

        let view = LevelView {
            level: 1,
            approver_type: Some("seniorDepartmentHead".into()),
            approvers: vec![],
        };
        assert_eq!(view.label(), "Senior Department Head");

        let view = LevelView {
            level: 1,
            approver_type: Some("manager".into()),
            approvers: vec![],
        };
        assert_eq!(view.label(), "Manager");
    }

    #[test]
    fn label_defaults_to_generic_approver() {
        for tag in [None, Some(String::new())] {
            let view = LevelView {
                level: 1,
                approver_type: tag,
                approvers: vec![],
            };
            assert_eq!(view.label(), "Approver");
        }
    }

    #[test]
    fn workflow_with_no_levels_resolves_to_empty_path() {
        let fallback = FallbackData::preview_defaults();
        let wf = workflow(vec![]);
        let resolved = resolve(4, Some(&wf), Some(&[]), &fallback).unwrap();
        assert!(resolved.levels.is_empty());
    }
}
