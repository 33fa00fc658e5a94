use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::routes::FORGOT_PASSWORD;
use crate::shared::api_client::ApiError;
use crate::shared::form::FieldErrors;
use crate::system::session::{api, use_session};

#[component]
pub fn SignInPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let field_errors = FieldErrors::new();

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        is_loading.set(true);
        error_message.set(None);
        field_errors.clear();

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    // guard сам уведёт на дашборд после смены состояния
                    session.apply_login(response);
                    is_loading.set(false);
                }
                Err(ApiError::Validation(response)) => {
                    field_errors.apply(&response);
                    is_loading.set(false);
                }
                Err(ApiError::Other(err)) => {
                    error_message.set(Some(format!("Не удалось войти: {}", err)));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Реестр активов"</h1>
                <h2>"Вход в систему"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error" id="error-username">
                            {move || field_errors.message("username")}
                        </span>
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error" id="error-password">
                            {move || field_errors.message("password")}
                        </span>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href=FORGOT_PASSWORD>"Забыли пароль?"</A>
                </div>
            </div>
        </div>
    }
}
