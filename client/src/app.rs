//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::state::weight::WeightLog;

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
/// Provides the shared view state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The stored theme is restored by the page after hydration so the server
    // and first client render agree.
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(WeightLog::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/fitdash.css"/>
        <Link
            rel="stylesheet"
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
        />
        <Title text="FitDash"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
