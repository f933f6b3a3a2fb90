//! Moment List Components
//!
//! The reconciled moment list, one card per moment with its comments,
//! comment form and edit/delete actions.

use leptos::*;

use moments::{Comment, Labels, Moment};

use crate::components::CommentForm;
use crate::state::use_global_state;

/// Every moment in the current snapshot, in list order
#[component]
pub fn MomentList() -> impl IntoView {
    let moments = use_global_state().moments;

    // Not keyed by id: the list may legitimately hold duplicate ids.
    // Reads the memo, not the whole state, so typing in a draft keeps
    // the cards (and the focused comment input) in place.
    move || {
        moments
            .get()
            .into_iter()
            .map(|moment| view! { <MomentCard moment=moment /> })
            .collect_view()
    }
}

#[component]
fn MomentCard(moment: Moment) -> impl IntoView {
    let global = use_global_state();
    let settings = global.settings();
    let labels = settings.labels();
    let id = moment.id;

    let board = global.board.clone();
    let loaded = moment.clone();
    let on_edit = move |_: web_sys::MouseEvent| {
        board.load_moment_for_edit(&loaded);
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        global.spawn(move |board| async move {
            let _ = board.delete_moment(id).await;
        });
    };

    let comments = moment
        .comments
        .into_iter()
        .map(|comment| view! { <CommentItem comment=comment labels=labels rated=settings.ratings_enabled /> })
        .collect_view();

    view! {
        <div class="border border-gray-400 rounded p-8 mb-8 bg-white">
            <h2 class="text-xl font-semibold mb-2">{moment.title}</h2>
            <p class="mb-2 whitespace-pre-line">{moment.description}</p>
            {moment.image.map(|src| view! {
                <img src=src alt=labels.image_alt class="max-w-full" />
            })}

            <h3 class="text-lg mt-8 mb-2">{labels.comments_heading}</h3>
            {comments}

            <CommentForm moment_id=id />

            <div class="flex justify-end mt-4 space-x-2">
                <button
                    on:click=on_edit
                    class="px-4 py-2 bg-orange-500 hover:bg-orange-600 text-white rounded-lg"
                >
                    {labels.edit}
                </button>
                <button
                    on:click=on_delete
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg"
                >
                    {labels.delete}
                </button>
            </div>
        </div>
    }
}

#[component]
fn CommentItem(comment: Comment, labels: &'static Labels, rated: bool) -> impl IntoView {
    let rating = rated.then(|| {
        let label = comment.rate.map(|r| labels.rating(r)).unwrap_or("");
        view! {
            <p class="text-sm">{labels.rating_field}" "{label}</p>
        }
    });

    view! {
        <div class="border border-gray-300 rounded p-2 mb-2">
            <p class="text-sm">
                <span class="font-bold">{comment.username}": "</span>
                {comment.text}
            </p>
            {rating}
        </div>
    }
}
