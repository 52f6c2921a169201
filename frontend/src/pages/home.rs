use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-lg text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-900">"LeaveDesk"</h1>
                <p class="text-gray-600">
                    "Request time off and see exactly who needs to approve it before you submit."
                </p>
                <Show
                    when=is_authenticated
                    fallback=|| view! {
                        <a href="/login" class="inline-block px-6 py-3 rounded bg-blue-600 text-white font-medium">
                            "Sign in"
                        </a>
                    }
                >
                    <a href="/leaves" class="inline-block px-6 py-3 rounded bg-blue-600 text-white font-medium">
                        "Go to my leave"
                    </a>
                </Show>
            </div>
        </div>
    }
}
