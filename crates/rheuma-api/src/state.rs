use rheuma_indices::ScoringEngine;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: ScoringEngine,
}
