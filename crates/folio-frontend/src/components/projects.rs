use yew::prelude::*;

use folio::data::{Category, Project};

use crate::components::{ErrorMessage, Loading, TechBadges};
use crate::hooks::use_projects;

#[function_component(Projects)]
pub fn projects() -> Html {
    let selected = use_state(Category::default);
    let projects = use_projects((*selected).clone());
    let state = &projects.state;

    let tabs = Category::presets().into_iter().map(|category| {
        let active = category == *selected;
        let onclick = {
            let selected = selected.clone();
            let category = category.clone();
            Callback::from(move |_: MouseEvent| selected.set(category.clone()))
        };

        html! {
            <button
                key={category.label().to_string()}
                class={classes!(
                    "mb-2", "px-4", "py-2", "rounded-md", "border",
                    if active { "bg-blue-600 text-white border-blue-600" } else { "border-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800" }
                )}
                {onclick}
            >
                { category.label() }
            </button>
        }
    });

    let body = if state.is_loading() {
        html! { <Loading label="Loading projects..." /> }
    } else if let Some(error) = state.error() {
        html! { <ErrorMessage error={AttrValue::from(error.to_string())} on_retry={projects.refetch.clone()} /> }
    } else {
        let items = state.data().map(Vec::as_slice).unwrap_or_default();
        if items.is_empty() {
            html! {
                <div class="text-center py-12">
                    <p class="text-gray-500 text-lg">{ format!("No projects found in {}.", *selected) }</p>
                </div>
            }
        } else {
            html! {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for items.iter().map(project_card) }
                </div>
            }
        }
    };

    html! {
        <section id="projects" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{ "Featured Projects" }</h2>
                    <p class="text-xl text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        { "A showcase of my work in data science, analytics, and machine learning" }
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    { for tabs }
                </div>
                { body }
            </div>
        </section>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <div key={project.id} class="group rounded-lg shadow-md hover:shadow-lg overflow-hidden bg-white dark:bg-gray-800">
            <div class="aspect-video overflow-hidden">
                <img
                    src={project.image.clone()}
                    alt={project.title.clone()}
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                />
            </div>
            <div class="p-6 space-y-4">
                <div>
                    <h3 class="text-xl font-semibold mb-2">{ &project.title }</h3>
                    <span class="px-2 py-0.5 text-xs bg-gray-100 dark:bg-gray-700 rounded-full">{ &project.category }</span>
                </div>
                <p class="text-base text-gray-600 dark:text-gray-400">{ &project.description }</p>
                <TechBadges technologies={project.technologies.clone()} />
                <a
                    class="block text-center px-3 py-1.5 border border-gray-300 rounded-md text-sm hover:bg-gray-100 dark:hover:bg-gray-700"
                    href={project.github.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "View Code" }
                </a>
            </div>
        </div>
    }
}
