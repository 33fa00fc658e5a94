use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::layout::MainLayout;
use crate::pages::{
    AccountBalancesPage, BankAccountsPage, BuildingsPage, CreditsPage, DashboardPage,
    ForgotPasswordPage, LandParcelsPage, LoansPage, SignInPage, VehiclesPage,
};
use crate::routes::DASHBOARD;
use crate::system::session::{GuestOnly, RequireAuth};

/// Страница под защитой: сначала проверка сессии, затем общий каркас.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout children=children.clone() />
        </RequireAuth>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="page__header">
                <h2 class="page__title">"Страница не найдена"</h2>
            </div>
            <p>
                <A href=DASHBOARD>"Вернуться на главную"</A>
            </p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=path!("/sign-in")
                    view=|| view! { <GuestOnly><SignInPage /></GuestOnly> }
                />
                <Route
                    path=path!("/forgot-password")
                    view=|| view! { <GuestOnly><ForgotPasswordPage /></GuestOnly> }
                />
                <Route
                    path=path!("/")
                    view=|| view! { <Protected><DashboardPage /></Protected> }
                />
                <Route
                    path=path!("/bank-accounts")
                    view=|| view! { <Protected><BankAccountsPage /></Protected> }
                />
                <Route
                    path=path!("/account-balances")
                    view=|| view! { <Protected><AccountBalancesPage /></Protected> }
                />
                <Route
                    path=path!("/loans")
                    view=|| view! { <Protected><LoansPage /></Protected> }
                />
                <Route
                    path=path!("/credits")
                    view=|| view! { <Protected><CreditsPage /></Protected> }
                />
                <Route
                    path=path!("/buildings")
                    view=|| view! { <Protected><BuildingsPage /></Protected> }
                />
                <Route
                    path=path!("/vehicles")
                    view=|| view! { <Protected><VehiclesPage /></Protected> }
                />
                <Route
                    path=path!("/land-parcels")
                    view=|| view! { <Protected><LandParcelsPage /></Protected> }
                />
            </Routes>
        </Router>
    }
}
