use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use folio::api::ApiResult;
use folio::data::{Category, ExperienceEntry, PersonalInfo, Portfolio, Project};
use folio::fetch::{
    EXPERIENCE_FALLBACK, FetchState, PERSONAL_INFO_FALLBACK, PORTFOLIO_FALLBACK,
    PROJECTS_FALLBACK, RequestSequence, latest_only,
};
use folio::log::{debug, warn};

use crate::providers::api::{self, PortfolioApi};

/// What a fetching hook hands to its component.
#[derive(Clone, PartialEq)]
pub struct FetchHandle<T> {
    pub state: FetchState<T>,
    /// Runs the same request again with the current inputs.
    pub refetch: Callback<()>,
}

type FetchFn<T, D> = fn(Rc<PortfolioApi>, D) -> LocalBoxFuture<'static, ApiResult<T>>;

enum FetchAction<T> {
    Begin,
    Settle(ApiResult<T>, &'static str),
}

struct FetchStore<T>(FetchState<T>);

impl<T> Default for FetchStore<T> {
    fn default() -> Self {
        Self(FetchState::default())
    }
}

impl<T: Clone + 'static> Reducible for FetchStore<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = Rc::unwrap_or_clone(self).0;
        let next = match action {
            FetchAction::Begin => current.begin(),
            FetchAction::Settle(result, fallback) => current.resolve(result, fallback),
        };
        Rc::new(Self(next))
    }
}

impl<T: Clone> Clone for FetchStore<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// Fetch on mount and whenever `deps` changes.
///
/// Every request goes through [`latest_only`], so a response is only applied
/// while its ticket is the newest one. Changing `deps` or unmounting
/// invalidates outstanding tickets, so the most recently triggered request
/// always wins and nothing is written after teardown.
#[hook]
fn use_fetch<T, D>(deps: D, fallback: &'static str, fetch: FetchFn<T, D>) -> FetchHandle<T>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
{
    let api = use_memo((), |_| api::create());
    let sequence = use_memo((), |_| RequestSequence::new());
    let store = use_reducer(FetchStore::<T>::default);

    let run = {
        let dispatcher = store.dispatcher();
        let sequence = sequence.clone();
        Rc::new(move |deps: D| {
            let request = latest_only(sequence.clone(), fetch(api.clone(), deps));
            dispatcher.dispatch(FetchAction::Begin);

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match request.await {
                    Some(result) => {
                        if let Err(err) = &result {
                            warn!("{fallback}: {err}");
                        }
                        dispatcher.dispatch(FetchAction::Settle(result, fallback));
                    }
                    None => debug!("Discarding stale response ({fallback})"),
                }
            });
        })
    };

    {
        let run = run.clone();
        let sequence = sequence.clone();
        use_effect_with(deps.clone(), move |deps| {
            run(deps.clone());
            move || sequence.invalidate()
        });
    }

    let refetch = Callback::from(move |_| run(deps.clone()));

    FetchHandle {
        state: store.0.clone(),
        refetch,
    }
}

/// Personal info, projects and experience in one request.
#[hook]
pub fn use_portfolio_data() -> FetchHandle<Portfolio> {
    use_fetch((), PORTFOLIO_FALLBACK, |api, ()| {
        async move { api.get_portfolio().await }.boxed_local()
    })
}

#[hook]
pub fn use_personal_info() -> FetchHandle<PersonalInfo> {
    use_fetch((), PERSONAL_INFO_FALLBACK, |api, ()| {
        async move { api.get_personal_info().await }.boxed_local()
    })
}

/// Projects in `category`, refetched whenever the category changes.
#[hook]
pub fn use_projects(category: Category) -> FetchHandle<Vec<Project>> {
    use_fetch(category, PROJECTS_FALLBACK, |api, category| {
        async move { api.get_projects(&category).await }.boxed_local()
    })
}

#[hook]
pub fn use_experience() -> FetchHandle<Vec<ExperienceEntry>> {
    use_fetch((), EXPERIENCE_FALLBACK, |api, ()| {
        async move { api.get_experience().await }.boxed_local()
    })
}
