pub mod errors;
pub mod state;
pub mod routes;
pub mod startup;

pub use startup::{run, run_with};
pub use state::AppState;
