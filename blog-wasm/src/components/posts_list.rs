use blog_content::PostSummary;
use blog_content::render::{LOAD_MORE_LABEL, post_href};
use leptos::prelude::*;

use crate::state::ListingState;

#[component]
fn PostCard(post: PostSummary) -> impl IntoView {
    view! {
        <a href=post_href(&post.slug)>
            <strong>{post.title}</strong>
            <p>{post.subtitle}</p>
            <div>
                <time class="calendar">{post.first_publication_date}</time>
                <span class="user">{post.author}</span>
            </div>
        </a>
    }
}

#[component]
pub(crate) fn PostsList(state: ListingState) -> impl IntoView {
    // Slug может повторяться между страницами, поэтому ключ включает позицию.
    let posts = move || {
        state.controller.with(|controller| {
            controller
                .posts()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="posts">
            <For
                each=posts
                key=|(index, post)| (*index, post.slug.clone())
                children=move |(_, post)| view! { <PostCard post=post /> }
            />

            <Show when=move || state.failure().is_some()>
                <div class="error-banner">
                    <strong>"Falha ao carregar mais posts: "</strong>
                    {move || state.failure().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || state.has_more()>
                <button
                    type="button"
                    class="load-more"
                    on:click=move |_| state.load_more()
                    disabled=move || state.is_loading()
                >
                    {move || if state.is_loading() { "Carregando..." } else { LOAD_MORE_LABEL }}
                </button>
            </Show>
        </div>
    }
}
