// The one mount path: trunk builds this bin, and the app is mounted only
// after the runtime config has loaded. The lib deliberately exports no
// `#[wasm_bindgen(start)]` entry, so nothing mounts twice.
#[cfg(target_arch = "wasm32")]
fn main() {
    use leavedesk_frontend::{config, App};
    use leptos::*;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting LeaveDesk frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}

// The app only runs in the browser; native builds exist for the host test
// suite.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
