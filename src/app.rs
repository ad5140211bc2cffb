use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::{api_base, ApiClient};
use crate::components::navbar::Navbar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // One session per page load; a reload drops the token.
    let session = Session::new();
    provide_context(ApiClient::new(api_base(), session));

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LoginPage />
                        <Route path=path!("/dashboard") view=DashboardPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
