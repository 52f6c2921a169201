use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository as login_repository,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_auth_for_check = set_auth_state;
    spawn_local(async move {
        match check_auth_status(&api_client).await {
            Ok(user) => set_auth_for_check.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(_) => set_auth_for_check.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            }),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Restores the session: the stored user is trusted immediately, otherwise
/// the profile endpoint decides whether the stored token still works.
async fn check_auth_status(api_client: &ApiClient) -> Result<UserResponse, ApiError> {
    if let Some(user) = ApiClient::stored_user() {
        return Ok(user);
    }
    api_client.get_profile().await
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &login_repository::LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;

    #[test]
    fn auth_context_starts_loading_then_settles_unauthenticated() {
        with_local_runtime_async(|| async {
            let runtime = create_runtime();
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/api/auth/profile");
                then.status(401).json_body(serde_json::json!({
                    "error": "Unauthorized",
                    "code": "UNAUTHORIZED"
                }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let (state, _set_state) = create_auth_context();
            // The profile probe has not run yet.
            assert!(state.get().loading);

            let mut settled = false;
            for _ in 0..100 {
                if !state.get().loading {
                    settled = true;
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            }
            assert!(settled, "auth check should settle");
            assert!(!state.get().is_authenticated);
            assert!(state.get().user.is_none());
            runtime.dispose();
        });
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "message": "Login successful",
                "token": "jwt-abc",
                "user": {
                    "id": "u1",
                    "firstName": "Alice",
                    "lastName": "Example",
                    "email": "alice@example.com",
                    "role": "employee"
                }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

        login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.user.is_some());

        logout(&repo, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_state_unauthenticated() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(serde_json::json!({
                "error": "Invalid credentials",
                "code": "AUTH_FAILED"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

        let err = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, "AUTH_FAILED");
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
