use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const MAX_PLAYERS: usize = 4;
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

#[derive(Debug, PartialEq)]
pub enum RequestError {
    PlayersOutOfRange(usize),
    ZeroRounds,
    ZeroBatchSize,
}

impl Error for RequestError {}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::PlayersOutOfRange(n) => {
                write!(f, "number of players {} not in 1..={}", n, MAX_PLAYERS)
            }
            RequestError::ZeroRounds => write!(f, "number of rounds must be positive"),
            RequestError::ZeroBatchSize => write!(f, "batch size must be positive"),
        }
    }
}

/// Parameters for one simulation run. Validation happens in validate(), not
/// at construction, and must pass before any rolling starts.
#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
pub struct SimulationRequest {
    pub num_players: usize,
    pub num_rounds: u64,
    pub batch_size: usize,
    pub seed: Option<u64>,
}

impl SimulationRequest {
    pub fn new(num_players: usize, num_rounds: u64) -> Self {
        Self {
            num_players,
            num_rounds,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.num_players < 1 || self.num_players > MAX_PLAYERS {
            return Err(RequestError::PlayersOutOfRange(self.num_players));
        }
        if self.num_rounds == 0 {
            return Err(RequestError::ZeroRounds);
        }
        if self.batch_size == 0 {
            return Err(RequestError::ZeroBatchSize);
        }
        Ok(())
    }
}
