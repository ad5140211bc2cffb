use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

use crate::api::ApiClient;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client: ApiClient = expect_context();
    let navigate = use_navigate();

    // Prefilled with the demo student account.
    let (email, set_email) = signal(String::from("student@thesis.local"));
    let (password, set_password) = signal(String::from("student123"));
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        set_error_message.set(None);
        set_is_submitting.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let email = email.get_untracked();
            let password = password.get_untracked();
            match client.login(&email, &password).await {
                Ok(_) => {
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page login-page">
            <h2>"Login"</h2>

            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="text"
                        class="input"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                        }
                        disabled=move || is_submitting.get()
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class="input input-password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                        }
                        disabled=move || is_submitting.get()
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                </button>
                <Show when=move || error_message.get().is_some()>
                    <span class="status-text status-error">
                        {move || error_message.get().unwrap_or_default()}
                    </span>
                </Show>
            </form>

            <p class="page-description">
                "Demo users: admin@thesis.local, uni@thesis.local, company@thesis.local, student@thesis.local"
            </p>
        </div>
    }
}
