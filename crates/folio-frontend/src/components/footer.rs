use yew::prelude::*;

use crate::hooks::use_personal_info;

#[function_component(Footer)]
pub fn footer() -> Html {
    let personal = use_personal_info();
    let year = js_sys::Date::new_0().get_full_year();

    // The footer is decoration; on failure it simply omits the name.
    let owner = personal
        .state
        .data()
        .map(|info| format!(" {}.", info.name))
        .unwrap_or_default();

    html! {
        <footer class="bg-gray-50 dark:bg-gray-900/50 py-8 px-6 border-t">
            <div class="container mx-auto max-w-6xl text-center">
                <p class="text-gray-600 dark:text-gray-400">
                    { format!("© {year}{owner} All rights reserved.") }
                </p>
                <p class="text-sm text-gray-600 dark:text-gray-400 mt-2">{ "Built with Rust, Yew and Tailwind CSS" }</p>
            </div>
        </footer>
    }
}
