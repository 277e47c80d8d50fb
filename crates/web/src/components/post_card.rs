// =============================================================================
// Postline Web - Post Card Component
// =============================================================================

use leptos::prelude::*;
use postline_client::controller::feed::PostCard;

/// One post in a listing; the whole card links to the detail page.
#[component]
pub fn PostCardView(card: PostCard) -> impl IntoView {
    let PostCard {
        author,
        avatar_url,
        date,
        media_url,
        media_alt,
        body,
        href,
        ..
    } = card;

    view! {
        <article class="card post-card">
            <a href=href class="post-card-link">
                <header class="post-card-header">
                    {avatar_url.map(|url| view! {
                        <img class="post-card-avatar" src=url alt="" />
                    })}
                    <span class="post-card-author">{author}</span>
                    <time class="post-card-date">{date}</time>
                </header>
                {media_url.map(move |url| view! {
                    <img class="post-card-media" src=url alt=media_alt loading="lazy" />
                })}
                <p class="post-card-body">{body}</p>
            </a>
        </article>
    }
}
