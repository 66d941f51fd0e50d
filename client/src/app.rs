//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    analytics::AnalyticsPage, buddy_detail::BuddyDetailPage, catalog::CatalogPage, dashboard::DashboardPage,
    employee_detail::EmployeeDetailPage, employees::EmployeesPage, gamification::GamificationPage, login::LoginPage,
    match_detail::MatchDetailPage, matches::MatchesPage, matching::MatchingPage, messages::MessagesPage,
};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, applies the stored theme once the
/// browser takes over, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, so SSR always renders the light theme.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/buddy-portal.css"/>
        <Title text="Buddy Portal"/>

        <Router>
            <NavBar/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("employees") view=EmployeesPage/>
                    <Route path=(StaticSegment("employees"), ParamSegment("id")) view=EmployeeDetailPage/>
                    <Route path=StaticSegment("buddies") view=CatalogPage/>
                    <Route path=(StaticSegment("buddies"), ParamSegment("id")) view=BuddyDetailPage/>
                    <Route path=StaticSegment("matching") view=MatchingPage/>
                    <Route path=StaticSegment("matches") view=MatchesPage/>
                    <Route path=(StaticSegment("matches"), ParamSegment("id")) view=MatchDetailPage/>
                    <Route path=StaticSegment("gamification") view=GamificationPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                </Routes>
            </main>
        </Router>
    }
}
