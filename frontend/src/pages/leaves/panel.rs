use crate::pages::leaves::{
    components::{
        approval_preview::ApprovalWorkflowPreview, leave_form::LeaveRequestForm,
        list::LeaveRequestsList,
    },
    layout::LeavesLayout,
    view_model::use_leaves_view_model,
};
use leptos::*;

#[component]
pub fn LeavesPage() -> impl IntoView {
    let vm = use_leaves_view_model();
    let pending = vm.submit_action.pending();
    let leaves_loading = vm.leaves_resource.loading();

    view! {
        <LeavesLayout>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <LeaveRequestForm
                    state=vm.form_state
                    message=vm.form_message
                    pending=pending.into()
                    on_submit=vm.on_submit()
                />
                <ApprovalWorkflowPreview phase=vm.phase preview=vm.preview />
            </div>
            <LeaveRequestsList
                leaves=vm.my_leaves()
                loading=leaves_loading.into()
                message=vm.list_message
            />
        </LeavesLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn leaves_page_renders_form_and_list() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:1/api"));
            view! { <LeavesPage /> }
        });
        assert!(html.contains("Leave Requests"));
        assert!(html.contains("Request Leave"));
        assert!(html.contains("My Requests"));
        // No dates selected yet, so the preview stays hidden.
        assert!(!html.contains("Approval Workflow"));
    }
}
