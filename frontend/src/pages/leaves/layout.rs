use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeavesLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Leave Requests"</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        "Request time off and see who needs to approve it."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
