use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::{home::HomePage, leaves::LeavesPage, login::LoginPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/leaves" view=ProtectedLeaves/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

#[component]
fn ProtectedLeaves() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><LeavesPage/></crate::components::guard::RequireAuth> }
}
