use leptos::prelude::*;

use crate::build_info::{built_on, copyright_year, BUILD_TIME};

use super::settings::use_settings;

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_settings();
    let year = copyright_year(BUILD_TIME);
    let built = built_on(BUILD_TIME);

    view! {
        <footer class="mt-16 border-t border-border py-8 text-sm text-muted">
            <div class="mx-auto flex max-w-6xl flex-wrap justify-between gap-2 px-4 sm:px-6 lg:px-8">
                <span>
                    {year.map(|y| format!("© {y} "))}
                    {move || settings.strings().site.brand}
                </span>
                {built
                    .map(|date| {
                        view! {
                            <span>{move || settings.strings().site.built} " " {date}</span>
                        }
                    })}
            </div>
        </footer>
    }
}
