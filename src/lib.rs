//! Crate root module declarations for the tile_chess rules engine.
//!
//! Exposes the board model, move generation with the legality filter,
//! minimax search, engine wrappers, the game session layer, and text
//! helpers so tests, benches and front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_builder;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_factory;
    pub mod perft;
}

pub mod player {
    pub mod castling;
    pub mod move_transition;
    pub mod player;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_thread;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_session;
    pub mod match_config;
    pub mod move_log;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
