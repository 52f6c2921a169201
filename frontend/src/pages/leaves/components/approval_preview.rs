use crate::components::layout::LoadingSpinner;
use crate::pages::leaves::view_model::PreviewPhase;
use crate::pages::leaves::workflow::{LevelView, ResolvedWorkflow};
use leptos::*;

const UNASSIGNED_HINT: &str =
    "Approver will be assigned based on your department and role hierarchy";

#[component]
pub fn ApprovalWorkflowPreview(
    phase: Memo<PreviewPhase>,
    preview: Memo<Option<ResolvedWorkflow>>,
) -> impl IntoView {
    view! {
        {move || match phase.get() {
            PreviewPhase::Idle => ().into_view(),
            PreviewPhase::LoadingWorkflow | PreviewPhase::LoadingApprovers => view! {
                <div class="bg-white shadow rounded-lg p-6">
                    <LoadingSpinner />
                    <p class="text-sm text-gray-600 text-center">"Loading approval workflow..."</p>
                </div>
            }
            .into_view(),
            PreviewPhase::Ready | PreviewPhase::FallbackReady => preview
                .get()
                .map(render_resolved)
                .unwrap_or_else(|| ().into_view()),
        }}
    }
}

fn render_resolved(resolved: ResolvedWorkflow) -> View {
    let is_preview = resolved.is_preview();
    let intro = format!(
        "Based on your leave duration ({} {}), your request will follow this approval path:",
        resolved.duration_days,
        if resolved.duration_days == 1 { "day" } else { "days" }
    );
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-gray-900">"Approval Workflow"</h3>
                <Show when=move || is_preview>
                    <span class="text-xs font-semibold uppercase tracking-wide bg-amber-100 text-amber-800 px-2 py-1 rounded">
                        "Preview"
                    </span>
                </Show>
            </div>
            <p class="text-sm text-gray-600">{intro}</p>
            {if resolved.levels.is_empty() {
                view! {
                    <p class="text-sm text-gray-500 italic">
                        "No approval levels defined for this leave duration."
                    </p>
                }
                .into_view()
            } else {
                resolved
                    .levels
                    .iter()
                    .map(render_level)
                    .collect_view()
            }}
            <Show when=move || is_preview>
                <p class="text-xs text-gray-500">
                    "Live workflow data is unavailable; sample data is shown instead."
                </p>
            </Show>
        </div>
    }
    .into_view()
}

fn render_level(level: &LevelView) -> View {
    let label = format!("Level {}: {}", level.level, level.label());
    let assignments = if level.has_assignments() {
        level
            .approvers
            .iter()
            .map(|approver| {
                let name = approver.full_name();
                let role = approver.role.clone();
                let is_fallback = approver.is_fallback;
                view! {
                    <li class="flex items-center gap-2 text-sm text-gray-700">
                        <span>{name}</span>
                        {role.map(|role| view! {
                            <span class="text-xs text-gray-500">{format!("({})", role)}</span>
                        })}
                        <Show when=move || is_fallback>
                            <span class="text-xs bg-gray-100 text-gray-600 px-1.5 py-0.5 rounded">
                                "Fallback"
                            </span>
                        </Show>
                    </li>
                }
            })
            .collect_view()
    } else {
        view! {
            <li class="text-sm text-gray-500 italic">{UNASSIGNED_HINT}</li>
        }
        .into_view()
    };
    view! {
        <div class="flex gap-3">
            <div class="flex-shrink-0 h-8 w-8 rounded-full bg-blue-100 text-blue-700 flex items-center justify-center text-sm font-semibold">
                {level.level}
            </div>
            <div>
                <p class="text-sm font-medium text-gray-900">{label}</p>
                <ul class="mt-1 space-y-1">{assignments}</ul>
            </div>
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::leaves::workflow::{resolve, FallbackData};
    use crate::test_support::ssr::render_to_string;

    fn memo_pair(
        phase: PreviewPhase,
        preview: Option<ResolvedWorkflow>,
    ) -> (Memo<PreviewPhase>, Memo<Option<ResolvedWorkflow>>) {
        (
            create_memo(move |_| phase),
            create_memo(move |_| preview.clone()),
        )
    }

    #[test]
    fn idle_phase_renders_nothing() {
        let html = render_to_string(move || {
            let (phase, preview) = memo_pair(PreviewPhase::Idle, None);
            view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
        });
        assert!(!html.contains("Approval Workflow"));
    }

    #[test]
    fn loading_phases_render_spinner() {
        for phase in [PreviewPhase::LoadingWorkflow, PreviewPhase::LoadingApprovers] {
            let html = render_to_string(move || {
                let (phase, preview) = memo_pair(phase, None);
                view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
            });
            assert!(html.contains("Loading approval workflow..."));
            assert!(html.contains("animate-spin"));
        }
    }

    #[test]
    fn ready_phase_renders_levels_without_preview_badge() {
        let fallback = FallbackData::preview_defaults();
        let resolved = resolve(
            4,
            Some(&fallback.workflow),
            Some(&fallback.approvers),
            &fallback,
        )
        .unwrap();
        let html = render_to_string(move || {
            let (phase, preview) = memo_pair(PreviewPhase::Ready, Some(resolved));
            view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
        });
        assert!(html.contains("Approval Workflow"));
        assert!(html.contains("Level 1: Team Lead"));
        assert!(html.contains("Level 2: Manager"));
        assert!(html.contains("John Smith"));
        assert!(html.contains("Jane Doe"));
        assert!(!html.contains("Preview"));
    }

    #[test]
    fn fallback_phase_renders_preview_badge() {
        let fallback = FallbackData::preview_defaults();
        let resolved = resolve(4, None, None, &fallback).unwrap();
        let html = render_to_string(move || {
            let (phase, preview) = memo_pair(PreviewPhase::FallbackReady, Some(resolved));
            view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
        });
        assert!(html.contains("Preview"));
        assert!(html.contains("sample data is shown instead"));
    }

    #[test]
    fn unassigned_level_renders_placeholder() {
        let fallback = FallbackData::preview_defaults();
        let resolved = resolve(4, Some(&fallback.workflow), Some(&[]), &fallback).unwrap();
        let html = render_to_string(move || {
            let (phase, preview) = memo_pair(PreviewPhase::Ready, Some(resolved));
            view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
        });
        assert!(html.contains(UNASSIGNED_HINT));
    }

    #[test]
    fn workflow_without_levels_renders_empty_notice() {
        let fallback = FallbackData::preview_defaults();
        let mut workflow = fallback.workflow.clone();
        workflow.approval_levels.clear();
        let resolved = resolve(4, Some(&workflow), Some(&[]), &fallback).unwrap();
        let html = render_to_string(move || {
            let (phase, preview) = memo_pair(PreviewPhase::Ready, Some(resolved));
            view! { <ApprovalWorkflowPreview phase=phase preview=preview /> }
        });
        assert!(html.contains("No approval levels defined for this leave duration."));
    }
}
