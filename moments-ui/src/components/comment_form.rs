//! Comment Form Component
//!
//! Every moment card renders one, but they all edit the same comment draft;
//! the moment whose form is submitted receives the comment.

use leptos::*;

use moments::{MomentId, MAX_RATING};

use crate::state::use_global_state;

/// Comment draft form bound to one moment on submit
#[component]
pub fn CommentForm(moment_id: MomentId) -> impl IntoView {
    let global = use_global_state();
    let state = global.state;
    let settings = global.settings();
    let labels = settings.labels();

    let board = global.board.clone();
    let on_username = move |ev: web_sys::Event| {
        let _ = board.update_comment_field("username", event_target_value(&ev));
    };

    let board = global.board.clone();
    let on_text = move |ev: web_sys::Event| {
        let _ = board.update_comment_field("text", event_target_value(&ev));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        global.spawn(move |board| async move {
            let _ = board.submit_comment(moment_id).await;
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-2 mt-4">
            <input
                type="text"
                name="username"
                placeholder=labels.username_field
                prop:value=move || state.with(|s| s.comment_draft.comment().username.clone())
                on:input=on_username
                class="w-full bg-white rounded-lg px-4 py-2 border border-gray-300
                       focus:border-primary-500 focus:outline-none"
            />
            <textarea
                name="text"
                rows="4"
                placeholder=labels.comment_field
                prop:value=move || state.with(|s| s.comment_draft.comment().text.clone())
                on:input=on_text
                class="w-full bg-white rounded-lg px-4 py-2 border border-gray-300
                       focus:border-primary-500 focus:outline-none"
            />

            {settings.ratings_enabled.then(|| view! {
                <div class="flex items-center space-x-4">
                    <span>{labels.rating_field}</span>
                    <RatingPicker />
                </div>
            })}

            <button
                type="submit"
                class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg"
            >
                {labels.add_comment}
            </button>
        </form>
    }
}

/// Five stars; clicking the selected star clears the rating back to 0
#[component]
fn RatingPicker() -> impl IntoView {
    let global = use_global_state();
    let state = global.state;
    let labels = global.settings().labels();

    let current = move || state.with(|s| s.comment_draft.comment().rate.unwrap_or(0));

    (1..=MAX_RATING)
        .map(|star| {
            let board = global.board.clone();
            let on_click = move |_: web_sys::MouseEvent| {
                let picked = if current() == i64::from(star) { None } else { Some(star) };
                board.set_comment_rating(picked);
            };

            view! {
                <button
                    type="button"
                    on:click=on_click
                    title=labels.rating(i64::from(star))
                    class=move || {
                        if current() >= i64::from(star) {
                            "text-2xl text-yellow-500"
                        } else {
                            "text-2xl text-gray-400"
                        }
                    }
                >
                    "★"
                </button>
            }
        })
        .collect_view()
}
