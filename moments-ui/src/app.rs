//! App Root Component
//!
//! Provides the board, loads the moment list once and lays out the page.

use leptos::*;

use crate::api;
use crate::components::{MomentForm, MomentList, Toast};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let global = provide_global_state(api::get_api_base(), api::get_board_settings());

    // Initial list; a failure leaves the list empty and shows a toast
    global.spawn(|board| async move {
        let _ = board.mount().await;
    });

    let labels = global.settings().labels();

    view! {
        <div class="min-h-screen bg-gray-100 flex justify-center">
            <main class="container max-w-3xl mx-auto px-4 py-8 pb-24">
                <h1 class="text-3xl font-bold text-center mb-4">{labels.form_heading}</h1>
                <MomentForm />

                <h1 class="text-3xl font-bold text-center mt-8 mb-4">{labels.list_heading}</h1>
                <MomentList />
            </main>

            <Footer />
            <Toast />
        </div>
    }
}

/// Footer component showing the API address and activity
#[component]
fn Footer() -> impl IntoView {
    let GlobalState { state, .. } = crate::state::use_global_state();
    let api_base = api::get_api_base();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-300 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-600">
                <span>{api_base}</span>

                {move || {
                    if state.with(|s| s.is_busy()) {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
