//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every page request. `App` provides
//! the global state (auth session and color theme) and maps paths to page
//! components. Marketing pages wrap themselves in `MarketingLayout`; account
//! pages nest under `AccountLayout`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::pages::about::AboutPage;
use crate::pages::account::dashboard::DashboardPage;
use crate::pages::account::departments::DepartmentsPage;
use crate::pages::account::kids::KidsPage;
use crate::pages::account::layout::AccountLayout;
use crate::pages::account::organization::OrganizationPage;
use crate::pages::account::people::PeoplePage;
use crate::pages::account::profile::ProfilePage;
use crate::pages::account::team::TeamPage;
use crate::pages::account::training::TrainingPage;
use crate::pages::careers::CareersPage;
use crate::pages::courses::CoursesPage;
use crate::pages::home::HomePage;
use crate::pages::in_person::InPersonPage;
use crate::pages::instruction_design::InstructionDesignPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::online_training::OnlineTrainingPage;
use crate::pages::protected::ProtectedPage;
use crate::pages::schedule_meeting::ScheduleMeetingPage;
use crate::state::auth::AuthState;
use crate::util::dark_mode::{self, Theme};

/// Document shell rendered on the server around `App`.
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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
    provide_context(auth);
    let theme = RwSignal::new(Theme::Light);
    provide_context(theme);

    // Resolved after hydration so the first client render matches the server.
    Effect::new(move |_| {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        theme.set(preferred);
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState::loaded(user));
        });
    }

    view! {
        <Stylesheet id="envesti" href="/pkg/envesti.css"/>
        <Title text="Envesti Solutions"/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/about-us") view=AboutPage/>
                <Route path=path!("/careers") view=CareersPage/>
                <Route path=path!("/courses") view=CoursesPage/>
                <Route path=path!("/in-person") view=InPersonPage/>
                <Route path=path!("/online-training") view=OnlineTrainingPage/>
                <Route path=path!("/instruction-design") view=InstructionDesignPage/>
                <Route path=path!("/schedule-meeting") view=ScheduleMeetingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/protected") view=ProtectedPage/>
                <ParentRoute path=path!("/account") view=AccountLayout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("dashboard") view=DashboardPage/>
                    <Route path=path!("organization") view=OrganizationPage/>
                    <Route path=path!("organization/people") view=PeoplePage/>
                    <Route path=path!("organization/departments") view=DepartmentsPage/>
                    <Route path=path!("team") view=TeamPage/>
                    <Route path=path!("kids") view=KidsPage/>
                    <Route path=path!("training") view=TrainingPage/>
                    <Route path=path!("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
