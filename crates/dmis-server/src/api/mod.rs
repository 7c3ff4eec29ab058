//! REST façade: router, handlers, shared state, and error mapping.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
