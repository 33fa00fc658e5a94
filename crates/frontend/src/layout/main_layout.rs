//! Каркас защищённой части приложения.
//!
//! Структура:
//! - верхняя панель: переключатель навигации, название, пользователь, выход;
//! - тело: навигация слева (скрываемая) и содержимое страницы по центру.

use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::sidebar::Sidebar;
use crate::shared::icons::icon;
use crate::system::session::use_session;

#[component]
pub fn MainLayout(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        session.logout();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="app-layout">
            <div class="top-header">
                <div class="top-header__brand">
                    <button
                        class="top-header__icon-btn"
                        on:click=toggle_sidebar
                        title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                    >
                        {icon("menu")}
                    </button>
                    <span class="top-header__title">"Реестр активов"</span>
                </div>

                <div class="top-header__actions">
                    <div class="top-header__user">
                        {icon("user")}
                        <span>
                            {move || session.user_name().unwrap_or_else(|| "Гость".to_string())}
                        </span>
                    </div>

                    <button class="top-header__icon-btn" on:click=logout title="Выход">
                        {icon("logout")}
                    </button>
                </div>
            </div>

            <div class="app-body">
                // Навигация скрывается переключателем в шапке
                <div data-zone="left" class="left" class:hidden=move || !is_sidebar_visible()>
                    <Sidebar />
                </div>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
