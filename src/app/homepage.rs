use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact, footer::Footer, header::Header, hero::Hero, projects::ProjectsSection,
    settings::use_settings, stack::TechStack,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_settings();

    view! {
        <Title text=move || settings.strings().nav.projects />
        <div id="top" class="min-h-screen">
            <Header />
            <main class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <Hero />
                <TechStack />
                <ProjectsSection />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
