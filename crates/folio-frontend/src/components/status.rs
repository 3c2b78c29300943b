use yew::prelude::*;

/// Shown when an error panel is given nothing to say.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Renders a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    let message = props
        .error
        .as_ref()
        .filter(|error| !error.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| AttrValue::from(GENERIC_ERROR));

    html! {
        <div class="flex items-center justify-between p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
            <span class="text-red-700 dark:text-red-400">{ message }</span>
            {
                if let Some(on_retry) = props.on_retry.clone() {
                    html! {
                        <button
                            class="ml-4 px-3 py-1.5 text-sm border border-red-300 text-red-700 rounded-md hover:bg-red-100 focus:outline-none focus:ring-2 focus:ring-red-500"
                            onclick={move |_| on_retry.emit(())}
                        >
                            { "Retry" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center py-12">
            <div class="flex items-center space-x-2">
                <svg class="animate-spin h-6 w-6 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                if let Some(label) = props.label.clone() {
                    <span class="text-gray-600 dark:text-gray-400">{ label }</span>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechBadgesProps {
    pub technologies: Vec<String>,
}

#[function_component(TechBadges)]
pub fn tech_badges(props: &TechBadgesProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-1">
            { for props.technologies.iter().map(|tech| html! {
                <span class="px-2 py-0.5 text-xs border border-gray-300 dark:border-gray-600 rounded-full">{ tech }</span>
            }) }
        </div>
    }
}
