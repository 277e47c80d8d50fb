// =============================================================================
// Postline Web - Feed Component
// =============================================================================
// Table of Contents:
// 1. Feed List
// 2. Search Input
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use postline_client::controller::feed::{
    load_feed, FeedMode, FeedState, SearchDebounce, EMPTY_MESSAGE, LOADING_STATUS, SEARCH_DEBOUNCE_MS,
};
use postline_client::controller::Tickets;
use postline_client::routes::PROFILE_HEADER_MOUNT_ID;

use crate::components::{LoadingSpinner, PostCardView};
use crate::state::AppState;
use crate::utils::has_element;

// -----------------------------------------------------------------------------
// 1. Feed List
// -----------------------------------------------------------------------------

/// Post listing with in-memory search.
///
/// Shows one author's posts when the page also renders the profile header
/// mount, the general feed otherwise. The mode is re-resolved whenever
/// `?name=` changes and the list reloads if it moved.
#[component]
pub fn FeedList() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let query_map = use_query_map();
    let feed = RwSignal::new(FeedState::Idle);
    let heading = RwSignal::new(FeedMode::AllPosts.heading());
    let query = RwSignal::new(String::new());
    let loads = RwSignal::new(Tickets::default());

    // Effects first run after the page is mounted, so the mount is queryable.
    let loader_state = app_state.clone();
    Effect::new(move |previous: Option<FeedMode>| {
        let query_name = query_map.with(|q| q.get("name"));
        let client = loader_state.client();
        let local_name = client.session().profile_name();
        let mode = FeedMode::resolve(
            has_element(PROFILE_HEADER_MOUNT_ID),
            query_name.as_deref(),
            local_name.as_deref(),
        );
        if previous.as_ref() == Some(&mode) {
            return mode;
        }
        log::debug!("Loading feed in {:?} mode", mode);

        let mut tickets = loads.get_untracked();
        let ticket = tickets.schedule();
        loads.set(tickets);

        heading.set(mode.heading());
        feed.set(FeedState::Loading);
        let target = mode.clone();
        spawn_local(async move {
            let state = load_feed(&client, &target).await;
            if loads.get_untracked().is_latest(ticket) {
                feed.set(state);
            }
        });
        mode
    });

    let result = Memo::new(move |_| query.with(|q| feed.with(|state| state.search(q))));
    let show_empty = move || {
        feed.with(|state| matches!(state, FeedState::Rendered(_))) && result.with(|r| r.cards.is_empty())
    };

    view! {
        <section class="feed">
            <header class="feed-header">
                <h2 class="feed-heading">{move || heading.get()}</h2>
                <SearchInput query=query />
            </header>

            <p class="feed-status" role="status">{move || result.with(|r| r.status.clone())}</p>

            <Show when=move || feed.with(FeedState::is_loading)>
                <LoadingSpinner message=LOADING_STATUS />
            </Show>
            <Show when=show_empty>
                <p class="feed-empty">{EMPTY_MESSAGE}</p>
            </Show>

            <div class="feed-list">
                <For
                    each=move || result.get().cards
                    key=|card| card.id.clone()
                    children=move |card| view! { <PostCardView card=card /> }
                />
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. Search Input
// -----------------------------------------------------------------------------

/// Search box. Writes to `query` only once typing settles; a newer keystroke
/// discards the pending write.
#[component]
fn SearchInput(query: RwSignal<String>) -> impl IntoView {
    let debounce = RwSignal::new(SearchDebounce::default());

    let on_input = move |e| {
        let value = event_target_value(&e);
        let mut tickets = debounce.get_untracked();
        let ticket = tickets.schedule();
        debounce.set(tickets);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce.get_untracked().is_latest(ticket) {
                query.set(value);
            }
        });
    };

    view! {
        <input
            id="searchInput"
            type="search"
            class="form-input feed-search"
            placeholder="Search posts..."
            aria-label="Search posts"
            on:input=on_input
        />
    }
}
