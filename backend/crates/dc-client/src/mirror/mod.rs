//! Client-held replica of server-confirmed session and profile state.
//!
//! State changes only through [`Store::dispatch`], which folds one event
//! through the pure reducers. Events are produced from completed server
//! responses, never from local intent.

pub mod events;
pub mod profile_state;
pub mod reducer;
pub mod session_state;
pub mod store;
