// =============================================================================
// Postline Web - Profile Header Component
// =============================================================================
// Table of Contents:
// 1. Profile Header
// 2. Follow Toggle
// 3. Header Views
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use postline_client::controller::profile_header::{
    load_profile_header, toggle_follow, HeaderAction, HeaderState, ProfileHeaderView, NO_PROFILE_MESSAGE,
};
use postline_client::controller::Tickets;

use crate::components::ErrorDisplay;
use crate::state::AppState;
use crate::utils::alert;

// -----------------------------------------------------------------------------
// 1. Profile Header
// -----------------------------------------------------------------------------

/// Header for the profile named in the URL (or the signed-in user).
///
/// Reloads whenever `?name=` changes; the router keeps this component alive
/// across query-only navigations. A result for a name the URL has since moved
/// away from is dropped.
#[component]
pub fn ProfileHeader() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let query = use_query_map();

    let initial = {
        let query_name = query.with_untracked(|q| q.get("name"));
        let local_name = app_state.session().profile_name();
        HeaderState::initial(query_name.as_deref(), local_name.as_deref())
    };
    let header = RwSignal::new(initial);
    let loads = RwSignal::new(Tickets::default());

    let loader_state = app_state.clone();
    Effect::new(move |_| {
        let query_name = query.with(|q| q.get("name"));
        let client = loader_state.client();
        let local_name = client.session().profile_name();

        let mut tickets = loads.get_untracked();
        let ticket = tickets.schedule();
        loads.set(tickets);

        let next = HeaderState::initial(query_name.as_deref(), local_name.as_deref());
        let skip_fetch = next == HeaderState::NoProfile;
        header.set(next);
        if skip_fetch {
            return;
        }

        spawn_local(async move {
            let state = load_profile_header(&client, query_name.as_deref()).await;
            if loads.get_untracked().is_latest(ticket) {
                header.set(state);
            }
        });
    });

    let on_follow = {
        let app_state = app_state.clone();
        move |_: leptos::ev::MouseEvent| start_follow_toggle(&app_state, header)
    };

    view! {
        {move || match header.get() {
            HeaderState::Loading => header_skeleton().into_any(),
            HeaderState::NoProfile => view! {
                <p class="profile-empty">{NO_PROFILE_MESSAGE}</p>
            }
            .into_any(),
            HeaderState::Failed(message) => view! {
                <ErrorDisplay message=message />
            }
            .into_any(),
            HeaderState::Ready(profile) => header_view(profile, on_follow.clone()).into_any(),
        }}
    }
}

// -----------------------------------------------------------------------------
// 2. Follow Toggle
// -----------------------------------------------------------------------------

/// Disable the button, issue the call, then flip or restore it.
fn start_follow_toggle(app_state: &AppState, header: RwSignal<HeaderState>) {
    let mut target = None;
    header.update(|state| {
        if let HeaderState::Ready(profile) = state {
            let name = profile.name.clone();
            if let Some(button) = profile.follow_button_mut() {
                let following = button.following;
                if button.begin() {
                    target = Some((name, following));
                }
            }
        }
    });
    let Some((name, following)) = target else {
        return;
    };

    let client = app_state.client();
    spawn_local(async move {
        let result = toggle_follow(&client, &name, following).await;
        header.update(|state| match state {
            HeaderState::Ready(profile) if profile.name == name => {
                if let Some(button) = profile.follow_button_mut() {
                    button.finish(result.is_ok());
                }
            }
            _ => {}
        });
        if let Err(e) = result {
            log::error!("Follow toggle for {} failed: {}", name, e);
            alert(&e.to_string());
        }
    });
}

// -----------------------------------------------------------------------------
// 3. Header Views
// -----------------------------------------------------------------------------

fn header_skeleton() -> impl IntoView {
    view! {
        <div class="profile-header skeleton" aria-busy="true">
            <div class="profile-avatar skeleton-block"></div>
            <div class="profile-identity">
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}

fn header_view(
    profile: ProfileHeaderView,
    on_follow: impl Fn(leptos::ev::MouseEvent) + Clone + 'static,
) -> impl IntoView {
    let stats = profile.stats();
    let action = match profile.action.clone() {
        HeaderAction::EditProfile { href } => view! {
            <a href=href class="btn btn-secondary">"Edit profile"</a>
        }
        .into_any(),
        HeaderAction::Follow(button) => view! {
            <button
                type="button"
                class="btn btn-primary follow-btn"
                aria-pressed=button.pressed().to_string()
                disabled=button.disabled()
                on:click=on_follow
            >
                {button.label()}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="profile-header">
            <img class="profile-avatar" src=profile.avatar_url alt=profile.avatar_alt />
            <div class="profile-identity">
                <h1 class="profile-name">{profile.display_name}</h1>
                <p class="profile-handle">{profile.handle}</p>
                {profile.bio.map(|bio| view! { <p class="profile-bio">{bio}</p> })}
            </div>
            <ul class="profile-stats">
                {stats
                    .into_iter()
                    .map(|(label, value)| view! {
                        <li class="profile-stat">
                            <strong>{value}</strong>
                            " "
                            <span>{label}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="profile-actions">{action}</div>
        </div>
    }
}
