use crate::api::LeaveRequestResponse;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::leaves::utils::MessageState;
use leptos::*;

#[component]
pub fn LeaveRequestsList(
    leaves: Signal<Vec<LeaveRequestResponse>>,
    loading: Signal<bool>,
    message: RwSignal<MessageState>,
) -> impl IntoView {
    let error_signal = Signal::derive(move || message.get().error);
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">"My Requests"</h3>
            <InlineErrorMessage error=error_signal />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || !leaves.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            title="No leave requests yet"
                            description="Submit your first leave request using the form."
                        />
                    }
                >
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead>
                            <tr>
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Type"</th>
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Dates"</th>
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <For
                                each=move || leaves.get()
                                key=|leave| leave.id.clone()
                                children=move |leave: LeaveRequestResponse| {
                                    let dates = format!("{} - {}", leave.start_date, leave.end_date);
                                    view! {
                                        <tr>
                                            <td class="px-3 py-2 text-sm text-gray-700">{leave.leave_type.clone()}</td>
                                            <td class="px-3 py-2 text-sm text-gray-700">{dates}</td>
                                            <td class="px-3 py-2 text-sm text-gray-700">{leave.status.clone()}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
