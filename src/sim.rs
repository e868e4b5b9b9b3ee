use crate::counts::FaceCounts;
use crate::request::{RequestError, SimulationRequest};
use crate::rollgen::{FairDice, RollBlock, RollGen};
use crate::stats::{GameStatistics, PlayerStats};
use std::cmp::min;

/// Accumulated totals and histograms for one run in progress. Owned by
/// exactly one run and dropped when the run's statistics are derived; only
/// this and the current block are ever held in memory, so a run costs
/// O(players * batch_size) regardless of the round count.
pub(crate) struct RunningState {
    totals: Vec<u64>,
    frequencies: Vec<FaceCounts>,
}

impl RunningState {
    pub(crate) fn new(num_players: usize) -> Self {
        RunningState {
            totals: vec![0; num_players],
            frequencies: vec![FaceCounts::default(); num_players],
        }
    }

    pub(crate) fn num_players(&self) -> usize {
        self.totals.len()
    }

    pub(crate) fn totals(&self) -> &[u64] {
        &self.totals
    }

    pub(crate) fn rounds_processed(&self) -> u64 {
        self.frequencies.first().map_or(0, |c| c.total())
    }

    /// Fold one block into the running totals and histograms. The caller
    /// drops the block right after; no raw roll survives the fold.
    pub(crate) fn fold_block(&mut self, block: &RollBlock) {
        assert_eq!(block.players(), self.num_players());
        for p in 0..self.num_players() {
            for face in block.player_column(p) {
                self.totals[p] += u64::from(face);
                self.frequencies[p].add(face);
            }
        }
    }

    pub(crate) fn finish(&self, total_rounds: u64) -> GameStatistics {
        let players = (0..self.num_players())
            .map(|p| PlayerStats {
                player_id: p + 1,
                total_points: self.totals[p],
                frequencies: self.frequencies[p],
                most_common_value: self.frequencies[p].most_common(),
            })
            .collect();
        GameStatistics::new(total_rounds, players)
    }
}

/// Run a full simulation with fair dice, seeded from the request if a seed
/// is set. The request is validated before the random source is even
/// constructed.
pub fn run_simulation(req: &SimulationRequest) -> Result<GameStatistics, RequestError> {
    req.validate()?;
    let mut roll_gen = match req.seed {
        Some(seed) => FairDice::from_seed(seed),
        None => FairDice::new(),
    };
    run_simulation_with(req, &mut roll_gen)
}

/// Drive the given generator through min(batch_size, remaining)-round blocks
/// until the requested rounds are exhausted, then derive the statistics.
pub fn run_simulation_with(
    req: &SimulationRequest,
    roll_gen: &mut dyn RollGen,
) -> Result<GameStatistics, RequestError> {
    req.validate()?;
    let mut state = RunningState::new(req.num_players);
    let mut rounds_remaining = req.num_rounds;
    while rounds_remaining > 0 {
        let current = min(req.batch_size as u64, rounds_remaining) as usize;
        let block = roll_gen.gen_block(current, req.num_players);
        state.fold_block(&block);
        rounds_remaining -= current as u64;
    }
    Ok(state.finish(req.num_rounds))
}
