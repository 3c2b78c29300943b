use yew::prelude::*;

use folio::data::PersonalInfo;

use crate::components::{ErrorMessage, Loading};
use crate::hooks::use_personal_info;

#[function_component(Hero)]
pub fn hero() -> Html {
    let personal = use_personal_info();

    let body = if let Some(info) = personal.state.data() {
        hero_content(info)
    } else if let Some(error) = personal.state.error() {
        html! { <ErrorMessage error={AttrValue::from(error.to_string())} on_retry={personal.refetch.clone()} /> }
    } else {
        html! { <Loading label="Loading profile..." /> }
    };

    html! {
        <section id="about" class="min-h-screen flex items-center justify-center py-20 px-6">
            <div class="container mx-auto max-w-4xl text-center">
                { body }
            </div>
        </section>
    }
}

fn hero_content(info: &PersonalInfo) -> Html {
    html! {
        <div class="space-y-8">
            <div class="space-y-4">
                <span class="inline-block text-sm px-4 py-2 border rounded-full">{ "Available for opportunities" }</span>
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">{ &info.name }</h1>
                <h2 class="text-xl md:text-2xl text-gray-600 dark:text-gray-400 font-medium">{ &info.title }</h2>
                <p class="text-lg md:text-xl text-gray-600 dark:text-gray-400 max-w-3xl mx-auto leading-relaxed">{ &info.subtitle }</p>
            </div>

            <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                <a class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-md" href={info.linkedin.clone()} target="_blank" rel="noopener noreferrer">
                    { "LinkedIn" }
                </a>
                <a class="px-6 py-3 border border-gray-300 rounded-md" href={info.github.clone()} target="_blank" rel="noopener noreferrer">
                    { "GitHub" }
                </a>
                <a class="px-6 py-3 border border-gray-300 rounded-md" href={format!("mailto:{}", info.email)}>
                    { "Email" }
                </a>
            </div>

            <div class="text-sm text-gray-600 dark:text-gray-400">{ &info.location }</div>
        </div>
    }
}
