//! Perft node counting over the public turn transition.
//!
//! Walks every legal move sequence to a fixed depth and tallies the leaves.
//! Running it against published counts is the quickest way to catch a
//! generator or transition bug.

use tracing::debug;

use crate::errors::TurnResult;
use crate::game_state::chess_types::GameStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::is_en_passant_capture;
use crate::turn::turn_transition::MoveRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> TurnResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for request in game_state.all_legal_moves() {
        total.merge(perft_move(game_state, &request, depth)?);
    }
    Ok(total)
}

/// Per-root-move breakdown, for bisecting a mismatch against a reference.
pub fn perft_divide(game_state: &GameState, depth: u8) -> TurnResult<Vec<(MoveRequest, PerftCounts)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for request in game_state.all_legal_moves() {
        let counts = perft_move(game_state, &request, depth)?;
        debug!(%request, nodes = counts.nodes, "perft divide");
        out.push((request, counts));
    }
    Ok(out)
}

fn perft_move(game_state: &GameState, request: &MoveRequest, depth: u8) -> TurnResult<PerftCounts> {
    let en_passant = is_en_passant_capture(
        &game_state.board,
        request.from,
        request.to,
        game_state.en_passant_target,
    );
    let next = game_state.apply_turn(request)?;

    if depth > 1 {
        return perft(&next, depth - 1);
    }

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if let Some(last) = next.last_move {
        counts.captures += usize::from(last.capture);
        counts.castles += usize::from(last.castle);
        counts.promotions += usize::from(last.promotion.is_some());
    }
    counts.en_passant += usize::from(en_passant);
    match next.status {
        GameStatus::Check => counts.checks += 1,
        GameStatus::Checkmate => {
            counts.checks += 1;
            counts.checkmates += 1;
        }
        GameStatus::Active | GameStatus::Stalemate => {}
    }
    Ok(counts)
}
