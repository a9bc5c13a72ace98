//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always taken from the perspective of the side to move at the
//! root: that side maximizes, its opponent minimizes. The root only replaces
//! its best move on a strictly better score, so the first move in generation
//! order wins ties and the result matches an unpruned minimax.

use std::thread;
use std::time::{Duration, Instant};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Alliance;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardEvaluator, StandardBoardEvaluator, MATE_SCORE};
use crate::search::threading::{SearchControl, ThreadingConfig};

const INFINITY: i32 = MATE_SCORE * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `Move::Null` when the side to move has no legal move.
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
    pub reached_depth: u8,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct MiniMax<E: BoardEvaluator = StandardBoardEvaluator> {
    config: SearchConfig,
    threading: ThreadingConfig,
    evaluator: E,
}

impl MiniMax {
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig { max_depth: depth })
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            threading: ThreadingConfig::default(),
            evaluator: StandardBoardEvaluator::default(),
        }
    }
}

impl Default for MiniMax {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    pub fn with_evaluator<F: BoardEvaluator>(self, evaluator: F) -> MiniMax<F> {
        MiniMax {
            config: self.config,
            threading: self.threading,
            evaluator,
        }
    }

    pub fn with_threading(mut self, threading: ThreadingConfig) -> Self {
        self.threading = threading;
        self
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.max_depth
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn threading(&self) -> ThreadingConfig {
        self.threading
    }

    /// Best move for the side to move, or the null move when it has none.
    ///
    /// Runs without an external stop signal; a worker failure also yields
    /// the null move. Use `search` to observe errors.
    pub fn execute(&self, board: &Board) -> Move {
        let control = SearchControl::new();
        self.search(board, &control)
            .map(|result| result.best_move)
            .unwrap_or(Move::Null)
    }

    pub fn search(&self, board: &Board, control: &SearchControl) -> ChessResult<SearchResult> {
        let started = Instant::now();
        let nodes_before = control.nodes();
        let perspective = board.next_move_maker();
        let depth = self.config.max_depth.max(1);

        control.visit()?;
        let root_moves = board.current_player().legal_moves();

        let (best_move, best_score) = if root_moves.is_empty() {
            (Move::Null, terminal_score(board, depth, perspective))
        } else if self.threading.normalized_threads() > 1 && root_moves.len() > 1 {
            self.search_root_parallel(board, root_moves, depth, perspective, control)?
        } else {
            self.search_root(board, root_moves, depth, perspective, control)?
        };

        Ok(SearchResult {
            best_move,
            best_score,
            nodes: control.nodes() - nodes_before,
            reached_depth: depth,
            elapsed: started.elapsed(),
        })
    }

    fn search_root(
        &self,
        board: &Board,
        root_moves: &[Move],
        depth: u8,
        perspective: Alliance,
        control: &SearchControl,
    ) -> ChessResult<(Move, i32)> {
        let mut alpha = -INFINITY;
        let mut best_move = Move::Null;
        let mut best_score = -INFINITY;

        for mv in root_moves {
            let child = mv.execute(board);
            let score = self.minimax(&child, depth - 1, alpha, INFINITY, perspective, control)?;
            if score > best_score {
                best_score = score;
                best_move = *mv;
            }
            alpha = alpha.max(score);
        }

        Ok((best_move, best_score))
    }

    /// Deals root moves round-robin to scoped worker threads. Each worker
    /// scores its moves with a full window so scores are exact and the merge
    /// agrees with the sequential root.
    fn search_root_parallel(
        &self,
        board: &Board,
        root_moves: &[Move],
        depth: u8,
        perspective: Alliance,
        control: &SearchControl,
    ) -> ChessResult<(Move, i32)> {
        let workers = self.threading.normalized_threads().min(root_moves.len());
        let mut buckets: Vec<Vec<(usize, Move)>> = vec![Vec::new(); workers];
        for (index, mv) in root_moves.iter().enumerate() {
            buckets[index % workers].push((index, *mv));
        }

        let outcomes: Vec<thread::Result<ChessResult<Vec<(usize, i32)>>>> = thread::scope(|scope| {
            let handles: Vec<_> = buckets
                .iter()
                .map(|bucket| {
                    scope.spawn(move || {
                        bucket
                            .iter()
                            .map(|(index, mv)| {
                                let child = mv.execute(board);
                                self.minimax(&child, depth - 1, -INFINITY, INFINITY, perspective, control)
                                    .map(|score| (*index, score))
                            })
                            .collect::<ChessResult<Vec<_>>>()
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut scored = Vec::with_capacity(root_moves.len());
        for outcome in outcomes {
            let worker_scores = outcome.map_err(|_| ChessError::WorkerPanicked)??;
            scored.extend(worker_scores);
        }

        let mut best: Option<(usize, i32)> = None;
        for (index, score) in scored {
            let better = match best {
                None => true,
                Some((best_index, best_score)) => {
                    score > best_score || (score == best_score && index < best_index)
                }
            };
            if better {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => Ok((root_moves[index], score)),
            None => Err(ChessError::NoLegalMoves),
        }
    }

    fn minimax(
        &self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        perspective: Alliance,
        control: &SearchControl,
    ) -> ChessResult<i32> {
        control.visit()?;

        let player = board.current_player();
        if depth == 0 {
            if !player.has_legal_move() {
                return Ok(terminal_score(board, depth, perspective));
            }
            return Ok(self.evaluator.evaluate(board, perspective));
        }

        let moves = player.legal_moves();
        if moves.is_empty() {
            return Ok(terminal_score(board, depth, perspective));
        }

        if board.next_move_maker() == perspective {
            let mut best = -INFINITY;
            for mv in moves {
                let child = mv.execute(board);
                let score = self.minimax(&child, depth - 1, alpha, beta, perspective, control)?;
                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let child = mv.execute(board);
                let score = self.minimax(&child, depth - 1, alpha, beta, perspective, control)?;
                best = best.min(score);
                beta = beta.min(score);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        }
    }
}

/// Score of a board whose side to move has no legal move: mate (worse the
/// sooner it happens to the root side) or stalemate.
fn terminal_score(board: &Board, depth: u8, perspective: Alliance) -> i32 {
    let side_to_move = board.current_player();
    if !side_to_move.is_in_check() {
        return 0;
    }

    let mate = MATE_SCORE + i32::from(depth);
    if side_to_move.alliance() == perspective {
        -mate
    } else {
        mate
    }
}
