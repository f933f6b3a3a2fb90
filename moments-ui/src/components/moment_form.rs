//! Moment Form Component
//!
//! Composes a new moment or edits the one loaded with "Edit". The submit
//! caption follows the draft: add for id 0, update otherwise.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::use_global_state;

/// Moment draft form
#[component]
pub fn MomentForm() -> impl IntoView {
    let global = use_global_state();
    let state = global.state;
    let labels = global.settings().labels();

    let board = global.board.clone();
    let on_title = move |ev: web_sys::Event| {
        let _ = board.update_moment_field("title", event_target_value(&ev));
    };

    let board = global.board.clone();
    let on_description = move |ev: web_sys::Event| {
        let _ = board.update_moment_field("description", event_target_value(&ev));
    };

    let board = global.board.clone();
    let on_image = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(file_reader) = web_sys::FileReader::new() else {
            return;
        };

        // The draft image is set only once the file has been encoded
        let onload = {
            let file_reader = file_reader.clone();
            let board = board.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(uri) = file_reader.result().ok().and_then(|r| r.as_string()) {
                    board.set_moment_image(Some(uri));
                }
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = file_reader.read_as_data_url(&file);
    };

    let submit_state = global.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let global = submit_state.clone();
        submit_state.spawn(|board| async move {
            if let Ok(moment) = board.submit_moment().await {
                global.show_success(&format!("Moment #{}", moment.id));
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4 mt-8">
            <div>
                <label class="block text-sm text-gray-600 mb-2">{labels.title_field}</label>
                <input
                    type="text"
                    name="title"
                    prop:value=move || state.with(|s| s.moment_draft.moment().title.clone())
                    on:input=on_title
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-600 mb-2">{labels.description_field}</label>
                <textarea
                    name="description"
                    rows="4"
                    prop:value=move || state.with(|s| s.moment_draft.moment().description.clone())
                    on:input=on_description
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex items-center space-x-4">
                <input
                    type="file"
                    accept="image/*"
                    id="upload-image"
                    on:change=on_image
                    class="hidden"
                />
                <label
                    for="upload-image"
                    class="px-4 py-2 border border-purple-500 text-purple-600 rounded-lg cursor-pointer"
                >
                    {labels.add_image}
                </label>
                {move || {
                    state.with(|s| s.moment_draft.moment().image.clone()).map(|src| view! {
                        <img src=src alt=labels.image_alt class="h-16 rounded" />
                    })
                }}
            </div>

            <button
                type="submit"
                class="px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-semibold
                       transition-colors"
            >
                {move || labels.submit_moment(state.with(|s| s.moment_draft.is_editing()))}
            </button>
        </form>
    }
}
