use yew::prelude::*;

use crate::hooks::use_portfolio_data;

#[function_component(Header)]
pub fn header() -> Html {
    let portfolio = use_portfolio_data();
    let data = portfolio.state.data();

    let name = data
        .map(|portfolio| portfolio.personal.name.clone())
        .unwrap_or_else(|| "Portfolio".to_string());

    let count = |n: Option<usize>| n.map(|n| format!(" ({n})")).unwrap_or_default();
    let projects = count(data.map(|portfolio| portfolio.projects.len()));
    let experience = count(data.map(|portfolio| portfolio.experience.len()));

    html! {
        <header class="sticky top-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur border-b">
            <nav class="container mx-auto max-w-6xl flex items-center justify-between px-6 py-4">
                <a href="#about" class="text-lg font-bold">{ name }</a>
                <div class="flex gap-6 text-sm">
                    <a href="#about">{ "About" }</a>
                    <a href="#projects">{ format!("Projects{projects}") }</a>
                    <a href="#experience">{ format!("Experience{experience}") }</a>
                    <a href="#contact">{ "Contact" }</a>
                </div>
                if let Some(error) = portfolio.state.error() {
                    <span class="text-xs text-red-600" title={error.to_string()}>{ "data unavailable" }</span>
                }
            </nav>
        </header>
    }
}
