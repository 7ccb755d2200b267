mod contact;
mod detail;
mod footer;
mod header;
mod hero;
pub mod hooks;
mod homepage;
mod media;
mod projects;
pub mod settings;
mod stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use detail::ProjectDetailPage;
use homepage::HomePage;
use settings::provide_settings;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-bg text-text antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let settings = provide_settings();

    view! {
        <Title formatter=move |title| {
            format!("{} - {title}", settings.strings().site.brand)
        } />

        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects/:id") view=ProjectDetailPage />
            </Routes>
        </Router>
    }
}
