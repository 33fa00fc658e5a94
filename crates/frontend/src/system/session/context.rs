//! Сессия пользователя: единственный владелец состояния аутентификации.
//!
//! Guard-ы и UI читают состояние; пишет его только сервис - восстановление
//! при старте, вход, выход.

use contracts::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<UserInfo>,
}

/// Процесс-wide сервис сессии. Создаётся один раз в корне приложения,
/// дальше живёт до закрытия вкладки.
#[derive(Clone, Copy)]
pub struct SessionService {
    state: RwSignal<SessionState>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState {
                is_authenticated: false,
                is_loading: true,
                user: None,
            }),
        }
    }

    /// Реактивное чтение состояния.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn user_name(&self) -> Option<String> {
        self.state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
        })
    }

    /// Восстановление сессии при старте: проверяем сохранённый токен
    /// запросом текущего пользователя. В любом исходе `is_loading`
    /// становится false ровно один раз.
    fn restore(&self) {
        if storage::get_access_token().is_none() {
            self.state.update(|s| s.is_loading = false);
            return;
        }

        let state = self.state;
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    state.set(SessionState {
                        is_authenticated: true,
                        is_loading: false,
                        user: Some(user),
                    });
                }
                Err(_) => {
                    storage::clear_access_token();
                    state.set(SessionState {
                        is_authenticated: false,
                        is_loading: false,
                        user: None,
                    });
                }
            }
        });
    }

    /// Применить успешный логин: сохранить токен, отметить сессию активной.
    pub fn apply_login(&self, response: LoginResponse) {
        storage::save_access_token(&response.access_token);
        self.state.set(SessionState {
            is_authenticated: true,
            is_loading: false,
            user: Some(response.user),
        });
    }

    /// Выход: чистим токен и состояние. Инвалидация токена на сервере -
    /// забота backend-а.
    pub fn logout(&self) {
        storage::clear_access_token();
        self.state.set(SessionState {
            is_authenticated: false,
            is_loading: false,
            user: None,
        });
    }
}

#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let service = SessionService::new();
    provide_context(service);

    Effect::new(move |_| {
        service.restore();
    });

    children()
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionProvider not found in component tree")
}
