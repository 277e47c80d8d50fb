// =============================================================================
// Postline Web - Post Detail Page
// =============================================================================
// Table of Contents:
// 1. Page
// 2. Post View
// 3. Edit Form
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use postline_client::controller::post_detail::{
    delete_post, load_post_detail, save_edit, DetailControls, EditDraft, PostDetailState, PostDetailView,
    CONFIRM_DELETE, LOADING_TEXT, NOT_FOUND_TITLE,
};
use postline_client::controller::Tickets;

use crate::components::{ErrorDisplay, FormError, Layout, LoadingSpinner, TextArea, TextInput};
use crate::state::AppState;
use crate::utils::{alert, confirm, navigate_to, reload};

// -----------------------------------------------------------------------------
// 1. Page
// -----------------------------------------------------------------------------

/// Single post, with owner-only edit and delete.
#[component]
pub fn PostDetailPage() -> impl IntoView {
    view! {
        <Layout require_auth=true show_toast=true>
            <div class="page page-post">
                <PostDetail />
            </div>
        </Layout>
    }
}

#[component]
fn PostDetail() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let detail = RwSignal::new(PostDetailState::Loading);
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let query = use_query_map();
    let loads = RwSignal::new(Tickets::default());

    let loader_state = app_state.clone();
    Effect::new(move |_| {
        let id = query.with(|q| q.get("id"));
        let client = loader_state.client();

        let mut tickets = loads.get_untracked();
        let ticket = tickets.schedule();
        loads.set(tickets);
        editing.set(false);
        detail.set(PostDetailState::Loading);

        spawn_local(async move {
            let state = load_post_detail(&client, id.as_deref()).await;
            if loads.get_untracked().is_latest(ticket) {
                detail.set(state);
            }
        });
    });

    let on_delete = {
        let app_state = app_state.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(id) = current_id(detail) else {
                return;
            };
            if busy.get_untracked() || !confirm(CONFIRM_DELETE) {
                return;
            }
            busy.set(true);

            let client = app_state.client();
            let toasts = app_state.toasts();
            spawn_local(async move {
                match delete_post(&client, &toasts, &id).await {
                    Ok(next) => navigate_to(next),
                    Err(e) => {
                        log::error!("Delete of post {} failed: {}", id, e);
                        busy.set(false);
                        alert(&e.to_string());
                    }
                }
            });
        }
    };

    view! {
        {move || match detail.get() {
            PostDetailState::Loading => view! { <LoadingSpinner message=LOADING_TEXT /> }.into_any(),
            PostDetailState::Failed(message) => view! {
                <ErrorDisplay title=NOT_FOUND_TITLE message=message />
            }
            .into_any(),
            PostDetailState::Ready(post) => {
                let draft = post.draft();
                view! {
                    {post_view(post, editing, busy, on_delete.clone())}
                    <Show when=move || editing.get()>
                        <EditForm detail=detail editing=editing draft=draft.clone() />
                    </Show>
                }
                .into_any()
            }
        }}
    }
}

fn current_id(detail: RwSignal<PostDetailState>) -> Option<String> {
    detail.with_untracked(|state| match state {
        PostDetailState::Ready(post) => Some(post.id.clone()),
        _ => None,
    })
}

// -----------------------------------------------------------------------------
// 2. Post View
// -----------------------------------------------------------------------------

fn post_view(
    post: PostDetailView,
    editing: RwSignal<bool>,
    busy: RwSignal<bool>,
    on_delete: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let controls = match post.controls {
        DetailControls::Owner => view! {
            <div class="post-controls">
                <button
                    type="button"
                    id="editPostBtn"
                    class="btn btn-secondary"
                    disabled=move || busy.get()
                    on:click=move |_| editing.set(true)
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    id="deletePostBtn"
                    class="btn btn-danger"
                    disabled=move || busy.get()
                    on:click=on_delete
                >
                    "Delete"
                </button>
            </div>
        }
        .into_any(),
        other => view! { <p class="post-note">{other.note()}</p> }.into_any(),
    };

    view! {
        <article class="post-detail">
            <h1 class="post-title">{post.title}</h1>
            <p class="post-meta">
                {post.author.zip(post.author_href).map(|(name, href)| view! {
                    <a class="post-author" href=href>{name}</a>
                })}
                " "
                <time class="post-date">{post.date}</time>
            </p>
            {post.media_url.map(|url| view! {
                <img class="post-media" src=url alt=post.media_alt />
            })}
            <p class="post-body">{post.body}</p>
            {(!post.tags.is_empty()).then(|| view! {
                <ul class="post-tags">
                    {post.tags.into_iter().map(|tag| view! { <li class="tag">"#"{tag}</li> }).collect_view()}
                </ul>
            })}
            {controls}
        </article>
    }
}

// -----------------------------------------------------------------------------
// 3. Edit Form
// -----------------------------------------------------------------------------

/// Inline editor. Stays open with an error on failure; reloads on success.
#[component]
fn EditForm(detail: RwSignal<PostDetailState>, editing: RwSignal<bool>, draft: EditDraft) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let title = RwSignal::new(draft.title);
    let body = RwSignal::new(draft.body);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        let Some(id) = current_id(detail) else {
            return;
        };
        if saving.get_untracked() {
            return;
        }

        let draft = EditDraft {
            title: title.get_untracked(),
            body: body.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        saving.set(true);
        error.set(None);

        let client = app_state.client();
        let toasts = app_state.toasts();
        spawn_local(async move {
            match save_edit(&client, &toasts, &id, &draft).await {
                Ok(()) => reload(),
                Err(e) => {
                    log::error!("Update of post {} failed: {}", id, e);
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form id="editPostForm" class="post-form post-edit" on:submit=on_submit>
            <FormError error=error />
            <TextInput id="editTitle" label="Title" value=title required=true />
            <TextArea id="editBody" label="Content" value=body rows=8 required=true />
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button type="button" class="btn btn-ghost" on:click=move |_| editing.set(false)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
