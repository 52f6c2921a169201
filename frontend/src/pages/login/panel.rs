use crate::api::LoginRequest;
use crate::components::error::InlineErrorMessage;
use crate::pages::login::{utils, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let email = vm.form.email;
    let password = vm.form.password;
    let error = vm.error;
    let login_action = vm.login_action;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email_value, &password_value) {
            error.set(Some(crate::api::ApiError::validation(msg)));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    let error_signal = Signal::derive(move || error.get());
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900">"LeaveDesk"</h1>
                    <p class="mt-1 text-sm text-gray-600">"Sign in to manage your leave"</p>
                </div>
                <InlineErrorMessage error=error_signal />
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            type="email"
                            class="mt-1 block w-full border rounded px-3 py-2"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Password"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border rounded px-3 py-2"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
