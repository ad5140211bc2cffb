use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-header">
                <h1 class="navbar-title">"Smart Internship Engine"</h1>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Login"</a>
                </li>
                <li class="nav-item">
                    <a href="/dashboard" class="nav-link">"Dashboard"</a>
                </li>
            </ul>
        </nav>
    }
}
