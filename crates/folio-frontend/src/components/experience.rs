use yew::prelude::*;

use folio::data::ExperienceEntry;

use crate::components::{ErrorMessage, Loading, TechBadges};
use crate::hooks::use_experience;

#[function_component(Experience)]
pub fn experience() -> Html {
    let experience = use_experience();
    let state = &experience.state;

    let body = if state.is_loading() {
        html! { <Loading label="Loading experience..." /> }
    } else if let Some(error) = state.error() {
        html! { <ErrorMessage error={AttrValue::from(error.to_string())} /> }
    } else {
        let entries = state.data().map(Vec::as_slice).unwrap_or_default();
        if entries.is_empty() {
            html! {
                <div class="text-center py-12">
                    <p class="text-gray-500 text-lg">{ "No work experience available." }</p>
                </div>
            }
        } else {
            html! {
                <div class="space-y-8">
                    { for entries.iter().map(experience_card) }
                </div>
            }
        }
    };

    html! {
        <section id="experience" class="py-20 px-6 bg-gray-50 dark:bg-gray-900/50">
            <div class="container mx-auto max-w-4xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{ "Work Experience" }</h2>
                    <p class="text-xl text-gray-600 dark:text-gray-400">
                        { "Professional internships and hands-on experience in data science and AI" }
                    </p>
                </div>
                { body }
            </div>
        </section>
    }
}

fn experience_card(entry: &ExperienceEntry) -> Html {
    html! {
        <div key={entry.id} class="p-6 rounded-lg shadow-md hover:shadow-lg bg-white dark:bg-gray-800">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                <div>
                    <h3 class="text-xl font-semibold mb-2">{ &entry.title }</h3>
                    <span class="font-medium text-gray-600 dark:text-gray-400">{ &entry.company }</span>
                </div>
                <span class="text-sm text-gray-600 dark:text-gray-400">{ &entry.duration }</span>
            </div>
            <p class="text-base mb-4">{ &entry.description }</p>
            <TechBadges technologies={entry.technologies.clone()} />
        </div>
    }
}
