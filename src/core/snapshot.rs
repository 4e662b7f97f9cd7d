//! Binary snapshots of a game in progress.
//!
//! Snapshots are plain bincode of `GameState`. Decoding re-checks card
//! conservation and phase consistency, so a corrupted or hand-edited
//! snapshot is rejected instead of producing a state the engine could not
//! have reached.

use super::error::{EngineError, EngineResult};
use super::state::GameState;

/// Serialize a state to bytes.
pub fn encode(state: &GameState) -> EngineResult<Vec<u8>> {
    bincode::serialize(state).map_err(|e| EngineError::Snapshot(e.to_string()))
}

/// Restore a state from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> EngineResult<GameState> {
    let state: GameState = bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))?;
    state.check_conservation()?;
    state.check_phase()?;
    Ok(state)
}
