use crate::api::{
    ApiClient, ApiError, ApprovalWorkflowResponse, ApproverResponse, CreateLeaveRequest,
    LeaveRequestResponse,
};
use crate::pages::leaves::{
    repository::LeavesRepository,
    utils::{LeaveFormState, MessageState},
    workflow::{resolve, FallbackData, ResolvedWorkflow},
};
use leptos::*;

/// Display state of the approval preview. Both terminal states drop back to
/// `LoadingWorkflow` when the duration changes, because both resources are
/// keyed on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewPhase {
    Idle,
    LoadingWorkflow,
    LoadingApprovers,
    Ready,
    FallbackReady,
}

pub(crate) fn phase_for(
    duration: Option<i64>,
    workflow_settled: bool,
    approvers_settled: bool,
    is_preview: bool,
) -> PreviewPhase {
    match duration {
        None => PreviewPhase::Idle,
        Some(days) if days <= 0 => PreviewPhase::Idle,
        Some(_) => {
            if !workflow_settled {
                PreviewPhase::LoadingWorkflow
            } else if !approvers_settled {
                PreviewPhase::LoadingApprovers
            } else if is_preview {
                PreviewPhase::FallbackReady
            } else {
                PreviewPhase::Ready
            }
        }
    }
}

fn apply_optional_submit_result(
    result: Option<Result<(), ApiError>>,
    form_message: RwSignal<MessageState>,
    form_state: LeaveFormState,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                form_message.update(|msg| msg.set_success("Leave request submitted."));
                form_state.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => form_message.update(|msg| msg.set_error(err)),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeavesViewModel {
    pub form_state: LeaveFormState,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub duration: Memo<Option<i64>>,
    pub leaves_resource: Resource<u32, Result<Vec<LeaveRequestResponse>, ApiError>>,
    /// `None` inside the loaded value means the fetch failed; the resolver
    /// substitutes the fallback workflow in that case.
    pub workflow_resource: Resource<Option<i64>, Option<ApprovalWorkflowResponse>>,
    /// Keyed by duration and the effective workflow id, so a slow response
    /// for an older duration can never be mistaken for the current one.
    pub approvers_resource: Resource<Option<(i64, String)>, Option<Vec<ApproverResponse>>>,
    pub submit_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
    pub preview: Memo<Option<ResolvedWorkflow>>,
    pub phase: Memo<PreviewPhase>,
}

impl LeavesViewModel {
    pub fn new() -> Self {
        Self::new_with_fallback(FallbackData::preview_defaults())
    }

    pub fn new_with_fallback(fallback: FallbackData) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeavesRepository::new(api));
        let fallback = store_value(fallback);

        let form_state = LeaveFormState::default();
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let duration = create_memo(move |_| form_state.duration_days());

        let leaves_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_my_leaves().await }
            },
        );

        let workflow_resource = create_resource(
            move || duration.get().filter(|days| *days > 0),
            move |days| {
                let repo = repository.get_value();
                async move {
                    match days {
                        Some(days) => repo.fetch_workflow_for_duration(days).await.ok(),
                        None => None,
                    }
                }
            },
        );

        let approvers_resource = create_resource(
            move || -> Option<(i64, String)> {
                let days = duration.get().filter(|days| *days > 0)?;
                let workflow = workflow_resource.get()?;
                let workflow_id = workflow
                    .map(|w| w.id)
                    .unwrap_or_else(|| fallback.with_value(|f| f.workflow.id.clone()));
                Some((days, workflow_id))
            },
            move |key| {
                let repo = repository.get_value();
                async move {
                    match key {
                        Some(_) => repo.fetch_my_approvers().await.ok(),
                        None => None,
                    }
                }
            },
        );

        let preview = create_memo(move |_| -> Option<ResolvedWorkflow> {
            let days = duration.get().filter(|days| *days > 0)?;
            let workflow = workflow_resource.get()?;
            let approvers = approvers_resource.get()?;
            fallback.with_value(|f| resolve(days, workflow.as_ref(), approvers.as_deref(), f))
        });

        let phase = create_memo(move |_| {
            let workflow_settled =
                workflow_resource.get().is_some() && !workflow_resource.loading().get();
            let approvers_settled =
                approvers_resource.get().is_some() && !approvers_resource.loading().get();
            let is_preview = preview
                .get()
                .map(|resolved| resolved.is_preview())
                .unwrap_or(false);
            phase_for(duration.get(), workflow_settled, approvers_settled, is_preview)
        });

        let submit_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_leave(payload).await.map(|_| ()) }
        });

        create_effect(move |_| {
            apply_optional_submit_result(
                submit_action.value().get(),
                form_message,
                form_state,
                reload,
            );
        });

        Self {
            form_state,
            form_message,
            list_message,
            duration,
            leaves_resource,
            workflow_resource,
            approvers_resource,
            submit_action,
            preview,
            phase,
        }
    }

    pub fn my_leaves(&self) -> Signal<Vec<LeaveRequestResponse>> {
        let leaves_resource = self.leaves_resource;
        let list_message = self.list_message;
        Signal::derive(move || match leaves_resource.get() {
            Some(Ok(leaves)) => leaves,
            Some(Err(err)) => {
                list_message.update(|msg| msg.set_error(err));
                Vec::new()
            }
            None => Vec::new(),
        })
    }

    pub fn on_submit(&self) -> Callback<()> {
        let form_state = self.form_state;
        let form_message = self.form_message;
        let submit_action = self.submit_action;
        Callback::new(move |_| match form_state.to_payload() {
            Ok(payload) => {
                form_message.update(|msg| msg.clear());
                submit_action.dispatch(payload);
            }
            Err(err) => form_message.update(|msg| msg.set_error(err)),
        })
    }
}

pub fn use_leaves_view_model() -> LeavesViewModel {
    match use_context::<LeavesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeavesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
