use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub trait RollGen {
    fn gen_block(&mut self, rounds: usize, players: usize) -> RollBlock;
}

/// One block of raw rolls, round-major: the face rolled by player p in round
/// r of the block sits at faces[r * players + p]. A block only lives until
/// its contents are folded into the running state.
#[derive(Debug, PartialEq)]
pub struct RollBlock {
    players: usize,
    faces: Vec<u8>,
}

impl RollBlock {
    pub(crate) fn new(players: usize, faces: Vec<u8>) -> Self {
        assert!(players > 0);
        assert_eq!(faces.len() % players, 0);
        Self { players, faces }
    }

    pub fn rounds(&self) -> usize {
        self.faces.len() / self.players
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn face(&self, round: usize, player: usize) -> u8 {
        assert!(player < self.players);
        self.faces[round * self.players + player]
    }

    pub fn player_column(&self, player: usize) -> impl Iterator<Item = u8> + '_ {
        assert!(player < self.players);
        self.faces
            .iter()
            .skip(player)
            .step_by(self.players)
            .copied()
    }
}

/// Fair six-sided dice. One StdRng is threaded across every block of a run,
/// so a seeded generator replays the exact same face sequence.
#[derive(Debug)]
pub struct FairDice {
    rng: StdRng,
    die: Uniform<u8>,
}

impl FairDice {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        FairDice {
            rng,
            die: Uniform::new_inclusive(1, 6),
        }
    }
}

impl Default for FairDice {
    fn default() -> Self {
        FairDice::new()
    }
}

impl RollGen for FairDice {
    // Cells are drawn one at a time in round-major order. The consumed
    // random sequence depends only on the seed and the number of cells, not
    // on how rounds are split into blocks.
    fn gen_block(&mut self, rounds: usize, players: usize) -> RollBlock {
        let mut faces = Vec::with_capacity(rounds * players);
        for _ in 0..rounds * players {
            faces.push(self.die.sample(&mut self.rng));
        }
        RollBlock::new(players, faces)
    }
}
