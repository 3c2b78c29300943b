#[macro_export]
/// Build a Yew `Callback` that runs an async block on the browser's event loop.
///
/// Each listed variable is cloned into the callback, and again into every
/// spawned task, so handles such as `UseStateHandle` or an `Rc` service can be
/// used inside `$body` without the clone boilerplate. `Callback` must be in
/// scope (`yew::prelude::*`).
///
/// Without an event parameter:
/// ```compile_fail
/// let check = async_callback!([api, healthy] {
///     healthy.set(api.health_check().await.is_ok());
/// });
/// ```
///
/// With an event parameter. The task runs after the event has been dispatched,
/// so calls like `prevent_default` must happen before the callback is reached:
/// ```compile_fail
/// let on_pick = async_callback!([api, projects] |category: Category| {
///     projects.set(api.get_projects(&category).await.ok());
/// });
/// ```
macro_rules! async_callback {
    // The event form must come first: a closure is also a valid `expr`.
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
