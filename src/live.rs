use crate::request::{RequestError, MAX_PLAYERS};
use crate::rollgen::{FairDice, RollGen};
use crate::sim::RunningState;
use crate::stats::GameStatistics;

/// Interactive one-round-at-a-time game. Rolls feed the same running state
/// the batch path uses, plus a per-round history for display. Meant for
/// human-scale round counts; the batch path is the one that scales.
pub struct LiveGame {
    roll_gen: Box<dyn RollGen>,
    num_players: usize,
    state: RunningState,
    history: Vec<Vec<u8>>,
}

impl std::fmt::Debug for LiveGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveGame")
            .field("num_players", &self.num_players)
            .field("history", &self.history)
            .finish()
    }
}

impl LiveGame {
    pub fn new(num_players: usize) -> Result<Self, RequestError> {
        Self::with_gen(num_players, Box::new(FairDice::new()))
    }

    pub fn with_seed(num_players: usize, seed: u64) -> Result<Self, RequestError> {
        Self::with_gen(num_players, Box::new(FairDice::from_seed(seed)))
    }

    pub fn with_gen(num_players: usize, roll_gen: Box<dyn RollGen>) -> Result<Self, RequestError> {
        if num_players < 1 || num_players > MAX_PLAYERS {
            return Err(RequestError::PlayersOutOfRange(num_players));
        }
        Ok(LiveGame {
            roll_gen,
            num_players,
            state: RunningState::new(num_players),
            history: Vec::new(),
        })
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn rounds_played(&self) -> u64 {
        self.state.rounds_processed()
    }

    /// Cumulative point totals, one entry per player.
    pub fn scores(&self) -> &[u64] {
        self.state.totals()
    }

    /// Faces rolled in each past round, oldest first.
    pub fn history(&self) -> &[Vec<u8>] {
        &self.history
    }

    /// Roll one round and return the faces in player order.
    pub fn roll_round(&mut self) -> Vec<u8> {
        let block = self.roll_gen.gen_block(1, self.num_players);
        self.state.fold_block(&block);
        let faces: Vec<u8> = (0..self.num_players).map(|p| block.face(0, p)).collect();
        self.history.push(faces.clone());
        faces
    }

    /// Derive the final statistics. A game with no rounds played yields
    /// all-zero stats with player 1 as the degenerate winner.
    pub fn finish(self) -> GameStatistics {
        self.state.finish(self.state.rounds_processed())
    }
}

#[cfg(test)]
mod tests {
    use super::LiveGame;
    use crate::request::{RequestError, SimulationRequest};
    use crate::rollgen::{RollBlock, RollGen};
    use crate::sim::run_simulation;

    /// Deals faces 1, 2, 3, ... 6, 1, 2, ... across cells.
    struct CyclingDice {
        next: u8,
    }

    impl RollGen for CyclingDice {
        fn gen_block(&mut self, rounds: usize, players: usize) -> RollBlock {
            let mut faces = Vec::with_capacity(rounds * players);
            for _ in 0..rounds * players {
                faces.push(self.next);
                self.next = if self.next == 6 { 1 } else { self.next + 1 };
            }
            RollBlock::new(players, faces)
        }
    }

    #[test]
    fn rejects_player_count() {
        for players in [0, 5].iter() {
            assert_eq!(
                LiveGame::new(*players).unwrap_err(),
                RequestError::PlayersOutOfRange(*players)
            );
        }
    }

    #[test]
    fn scores_and_history_track_rolls() {
        let mut game = LiveGame::with_gen(2, Box::new(CyclingDice { next: 1 })).unwrap();
        assert_eq!(game.rounds_played(), 0);
        game.roll_round();
        game.roll_round();
        game.roll_round();
        assert_eq!(game.history(), &[vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(game.scores(), &[1 + 3 + 5, 2 + 4 + 6]);
        assert_eq!(game.rounds_played(), 3);
        let stats = game.finish();
        assert_eq!(stats.total_rounds, 3);
        assert_eq!(stats.players[0].total_points, 9);
        assert_eq!(stats.winner.player_id, 2);
    }

    #[test]
    fn finish_before_any_roll() {
        let stats = LiveGame::new(3).unwrap().finish();
        assert_eq!(stats.total_rounds, 0);
        for p in &stats.players {
            assert_eq!(p.total_points, 0);
            assert_eq!(p.probability_distribution(), [0.0; 6]);
        }
        assert_eq!(stats.winner.player_id, 1);
    }

    #[test]
    fn seeded_games_replay() {
        let mut a = LiveGame::with_seed(4, 5).unwrap();
        let mut b = LiveGame::with_seed(4, 5).unwrap();
        for _ in 0..10 {
            assert_eq!(a.roll_round(), b.roll_round());
        }
    }

    #[test]
    fn matches_batched_simulation() {
        // 20 one-round blocks consume the same stream as one 20-round batch
        let mut game = LiveGame::with_seed(3, 11).unwrap();
        for _ in 0..20 {
            game.roll_round();
        }
        let mut req = SimulationRequest::new(3, 20);
        req.seed = Some(11);
        assert_eq!(game.finish(), run_simulation(&req).unwrap());
    }
}
