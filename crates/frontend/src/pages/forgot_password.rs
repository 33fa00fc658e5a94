use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::routes::SIGN_IN;
use crate::shared::api_client::ApiError;
use crate::shared::form::FieldErrors;
use crate::system::session::api;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let field_errors = FieldErrors::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();

        is_loading.set(true);
        error_message.set(None);
        field_errors.clear();

        spawn_local(async move {
            match api::forgot_password(email_val).await {
                Ok(()) => {
                    sent.set(true);
                    is_loading.set(false);
                }
                Err(ApiError::Validation(response)) => {
                    field_errors.apply(&response);
                    is_loading.set(false);
                }
                Err(ApiError::Other(err)) => {
                    error_message.set(Some(format!("Не удалось отправить письмо: {}", err)));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Реестр активов"</h1>
                <h2>"Восстановление пароля"</h2>

                <Show
                    when=move || !sent.get()
                    fallback=|| view! {
                        <div class="login-info">
                            <p>"Если адрес зарегистрирован, мы отправили на него письмо со ссылкой для сброса пароля."</p>
                            <A href=SIGN_IN>"Вернуться ко входу"</A>
                        </div>
                    }
                >
                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Электронная почта"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="user@example.com"
                                value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                            <span class="field-error" id="error-email">
                                {move || field_errors.message("email")}
                            </span>
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Отправка..." } else { "Отправить ссылку" }}
                        </button>
                    </form>

                    <div class="login-info">
                        <A href=SIGN_IN>"Вернуться ко входу"</A>
                    </div>
                </Show>
            </div>
        </div>
    }
}
