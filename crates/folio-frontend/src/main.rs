mod components;
mod hooks;
mod providers;

use yew::prelude::*;

use components::{Contact, Experience, Footer, Header, Hero, Projects};

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
            <Header />
            <main>
                <Hero />
                <Projects />
                <Experience />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    folio::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
