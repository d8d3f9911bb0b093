//! Top-level routes. Every page renders inside `AppShell`; module pages add a
//! `RequireModule` gate on top.

pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod health;
#[cfg(target_arch = "wasm32")]
mod module_page;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod setup_password;
#[cfg(target_arch = "wasm32")]
mod students;

#[cfg(target_arch = "wasm32")]
pub(crate) use not_found::NotFoundContent;
#[cfg(target_arch = "wasm32")]
pub(crate) use pages::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod pages {
    use super::{
        dashboard::DashboardPage, health::HealthPage, module_page::ModulePage,
        not_found::NotFoundPage, paths, setup_password::SetupPasswordPage,
        students::StudentsPage,
    };
    use crate::features::modules::ModuleName;
    use leptos::prelude::*;
    use leptos_router::{
        components::{Redirect, Route, Routes},
        path,
    };

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/setup-password") view=SetupPasswordPage />
                <Route path=path!("/health") view=HealthPage />
                <Route path=path!("/students") view=StudentsPage />
                <Route
                    path=path!("/projections")
                    view=|| view! { <ModulePage module=ModuleName::Projections /> }
                />
                <Route path=path!("/paces") view=|| view! { <ModulePage module=ModuleName::Paces /> } />
                <Route
                    path=path!("/monthly-assignments")
                    view=|| view! { <ModulePage module=ModuleName::MonthlyAssignments /> }
                />
                <Route
                    path=path!("/report-cards")
                    view=|| view! { <ModulePage module=ModuleName::ReportCards /> }
                />
                <Route path=path!("/groups") view=|| view! { <ModulePage module=ModuleName::Groups /> } />
                <Route
                    path=path!("/teachers")
                    view=|| view! { <ModulePage module=ModuleName::Teachers /> }
                />
                <Route
                    path=path!("/school-admin")
                    view=|| view! { <ModulePage module=ModuleName::SchoolAdmin /> }
                />
                <Route
                    path=path!("/schools")
                    view=|| view! { <ModulePage module=ModuleName::Schools /> }
                />
                <Route path=path!("/users") view=|| view! { <ModulePage module=ModuleName::Users /> } />
                <Route
                    path=path!("/billing")
                    view=|| view! { <ModulePage module=ModuleName::Billing /> }
                />
                <Route path=path!("/*any") view=NotFoundPage />
            </Routes>
        }
    }
}
