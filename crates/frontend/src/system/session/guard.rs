//! Guard-компоненты маршрутов.
//!
//! Protected-вариант пускает только аутентифицированных, guest-вариант -
//! только гостей. Решение по паре (is_loading, is_authenticated) вынесено в
//! чистые функции; навигация срабатывает из эффекта и только при смене пары
//! (пара мемоизирована), а не на каждом рендере.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::{DASHBOARD, SIGN_IN};

use super::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Показать плейсхолдер загрузки.
    Placeholder,
    /// Рендерить вложенное содержимое.
    Children,
    /// Увести на другой маршрут.
    Redirect,
}

/// Защищённая зона: пока сессия грузится или гость - плейсхолдер,
/// гостя после загрузки уводим на вход.
pub fn protected_outcome(is_loading: bool, is_authenticated: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Placeholder
    } else if is_authenticated {
        GuardOutcome::Children
    } else {
        GuardOutcome::Redirect
    }
}

/// Гостевая зона: аутентифицированного после загрузки уводим на дашборд,
/// ничего не показывая, чтобы гостевой контент не мелькал.
pub fn guest_outcome(is_loading: bool, is_authenticated: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Placeholder
    } else if is_authenticated {
        GuardOutcome::Redirect
    } else {
        GuardOutcome::Children
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let pair = Memo::new(move |_| {
        let state = session.get();
        (state.is_loading, state.is_authenticated)
    });

    // push: после входа кнопка "назад" вернёт на страницу, с которой увело
    Effect::new(move |_| {
        let (is_loading, is_authenticated) = pair.get();
        if protected_outcome(is_loading, is_authenticated) == GuardOutcome::Redirect {
            navigate(SIGN_IN, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || {
                let (is_loading, is_authenticated) = pair.get();
                protected_outcome(is_loading, is_authenticated) == GuardOutcome::Children
            }
            fallback=|| view! { <div class="guard-placeholder">"Загрузка..."</div> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let pair = Memo::new(move |_| {
        let state = session.get();
        (state.is_loading, state.is_authenticated)
    });

    // replace: вход не должен оставаться в истории после редиректа
    Effect::new(move |_| {
        let (is_loading, is_authenticated) = pair.get();
        if guest_outcome(is_loading, is_authenticated) == GuardOutcome::Redirect {
            navigate(
                DASHBOARD,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || {
            let (is_loading, is_authenticated) = pair.get();
            match guest_outcome(is_loading, is_authenticated) {
                GuardOutcome::Placeholder => {
                    view! { <div class="guard-placeholder">"Загрузка..."</div> }.into_any()
                }
                GuardOutcome::Children => children().into_any(),
                GuardOutcome::Redirect => ().into_any(),
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_loading_always_placeholder() {
        assert_eq!(protected_outcome(true, false), GuardOutcome::Placeholder);
        assert_eq!(protected_outcome(true, true), GuardOutcome::Placeholder);
    }

    #[test]
    fn test_protected_guest_redirects_after_loading() {
        assert_eq!(protected_outcome(false, false), GuardOutcome::Redirect);
    }

    #[test]
    fn test_protected_authenticated_renders_children() {
        assert_eq!(protected_outcome(false, true), GuardOutcome::Children);
    }

    #[test]
    fn test_guest_loading_shows_placeholder() {
        assert_eq!(guest_outcome(true, false), GuardOutcome::Placeholder);
        assert_eq!(guest_outcome(true, true), GuardOutcome::Placeholder);
    }

    #[test]
    fn test_guest_authenticated_redirects_without_children() {
        assert_eq!(guest_outcome(false, true), GuardOutcome::Redirect);
    }

    #[test]
    fn test_guest_unauthenticated_renders_children() {
        assert_eq!(guest_outcome(false, false), GuardOutcome::Children);
    }

    #[test]
    fn test_outcomes_never_disagree_on_one_state() {
        // одна и та же пара не может одновременно пускать в обе зоны
        for is_loading in [false, true] {
            for is_authenticated in [false, true] {
                let protected = protected_outcome(is_loading, is_authenticated);
                let guest = guest_outcome(is_loading, is_authenticated);
                assert!(
                    !(protected == GuardOutcome::Children && guest == GuardOutcome::Children),
                    "оба guard-а пустили при loading={}, authenticated={}",
                    is_loading,
                    is_authenticated
                );
            }
        }
    }
}
