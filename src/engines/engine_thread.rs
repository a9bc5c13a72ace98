//! Background search on a dedicated thread.
//!
//! `SearchHandle` owns one search request. Cancelling it raises the shared
//! stop flag; the engine returns `SearchCancelled` at its next node. Dropping
//! the handle cancels the search and detaches the thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::search::threading::SearchControl;

pub struct SearchHandle {
    control: Arc<SearchControl>,
    receiver: Receiver<ChessResult<EngineOutput>>,
    worker: Option<JoinHandle<()>>,
    finished: Option<ChessResult<EngineOutput>>,
}

impl SearchHandle {
    pub fn spawn<E: Engine + 'static>(mut engine: E, board: Board, params: GoParams) -> Self {
        let control = Arc::new(SearchControl::new());
        engine.set_stop_signal(Some(Arc::clone(&control)));

        let (sender, receiver) = mpsc::channel();
        let worker = thread::spawn(move || {
            let output = engine.choose_move(&board, &params);
            // The handle may already be gone; nobody is left to tell.
            let _ = sender.send(output);
        });

        Self {
            control,
            receiver,
            worker: Some(worker),
            finished: None,
        }
    }

    #[inline]
    pub fn cancel(&self) {
        self.control.request_stop();
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some() || self.worker.as_ref().map_or(true, |w| w.is_finished())
    }

    pub fn nodes(&self) -> u64 {
        self.control.nodes()
    }

    /// The search result if it is already available. Never blocks.
    pub fn try_result(&mut self) -> Option<ChessResult<EngineOutput>> {
        if self.finished.is_none() {
            match self.receiver.try_recv() {
                Ok(output) => self.finished = Some(output),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.finished = Some(Err(ChessError::WorkerPanicked));
                }
            }
        }
        self.finished.clone()
    }

    /// Waits for the search to end and returns its result.
    pub fn join(mut self) -> ChessResult<EngineOutput> {
        if let Some(output) = self.finished.take() {
            return output;
        }

        let output = self.receiver.recv().map_err(|_| ChessError::WorkerPanicked)?;
        if let Some(worker) = self.worker.take() {
            worker.join().map_err(|_| ChessError::WorkerPanicked)?;
        }
        output
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.control.request_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::SearchHandle;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::GoParams;
    use crate::errors::ChessError;
    use crate::game_state::board::Board;

    #[test]
    fn background_search_returns_a_move() {
        let board = Board::create_standard_board();
        let handle =
            SearchHandle::spawn(RandomEngine::with_seed(3), board.clone(), GoParams::default());
        let out = handle.join().expect("random search should succeed");
        let chosen = out.best_move.expect("start position has moves");
        assert!(board.current_player().is_move_legal(&chosen));
    }

    #[test]
    fn result_is_kept_after_polling() {
        let board = Board::create_standard_board();
        let mut handle = SearchHandle::spawn(MinimaxEngine::new(1), board, GoParams::default());
        while handle.try_result().is_none() {
            std::thread::yield_now();
        }
        assert!(handle.is_finished());
        assert!(handle.try_result().is_some());
        assert!(handle.join().is_ok());
    }

    #[test]
    fn cancelled_deep_search_reports_cancellation() {
        let board = Board::create_standard_board();
        let handle = SearchHandle::spawn(MinimaxEngine::new(8), board, GoParams::default());
        handle.cancel();
        assert_eq!(handle.join(), Err(ChessError::SearchCancelled));
    }
}
