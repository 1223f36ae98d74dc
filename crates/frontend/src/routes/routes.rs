use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::layout::Shell;
use crate::pages::{DashboardPage, NotFoundPage, PlaceholderPage, PlansPage, ZonesPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage />
                    <Route path=StaticSegment(AppRoute::Zones.segment()) view=ZonesPage />
                    <Route path=StaticSegment(AppRoute::Plans.segment()) view=PlansPage />
                    <Route
                        path=StaticSegment(AppRoute::Contact.segment())
                        view=|| view! { <PlaceholderPage route=AppRoute::Contact /> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Users.segment())
                        view=|| view! { <PlaceholderPage route=AppRoute::Users /> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Settings.segment())
                        view=|| view! { <PlaceholderPage route=AppRoute::Settings /> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
