//! Global Application State
//!
//! The board's view state lives in a Leptos signal so every component
//! re-renders from it; the shared [`MomentBoard`] mutates it through
//! [`SignalStore`].

use leptos::*;
use std::rc::Rc;

use moments::{BoardSettings, BoardState, BoardStore, Moment, MomentBoard};

use crate::api::GlooGateway;

/// [`BoardStore`] backed by a reactive signal
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<BoardState>);

impl BoardStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut out = None;
        self.0.update(|state| out = Some(f(state)));
        out.expect("board state signal disposed")
    }
}

pub type Board = MomentBoard<GlooGateway, SignalStore>;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Controller shared by every event handler
    pub board: Rc<Board>,
    /// Moments, drafts and error state
    pub state: RwSignal<BoardState>,
    /// The moment list alone; unchanged by draft edits and `pending`
    pub moments: Memo<Vec<Moment>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(api_base: String, settings: BoardSettings) -> GlobalState {
    let state = create_rw_signal(BoardState::new(settings));
    let board = MomentBoard::with_store(GlooGateway::new(api_base), SignalStore(state));

    let global = GlobalState {
        board: Rc::new(board),
        state,
        moments: moment_list(state),
        success: create_rw_signal(None),
    };

    provide_context(global.clone());
    global
}

/// Derive the list so that subscribers only rerun when moments change
pub fn moment_list(state: RwSignal<BoardState>) -> Memo<Vec<Moment>> {
    create_memo(move |_| state.with(|s| s.moments.clone()))
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn settings(&self) -> BoardSettings {
        self.state.with_untracked(|s| s.settings)
    }

    /// Run a board action in the background
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Board>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_local(action(Rc::clone(&self.board)));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Dismiss the current error message
    pub fn clear_error(&self) {
        self.state.update(|s| s.clear_error());
    }
}
