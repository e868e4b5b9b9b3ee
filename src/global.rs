pub const FACES: [u8; 6] = [1, 2, 3, 4, 5, 6];

pub mod conf_def {
    pub const NUM_PLAYERS: &str = "4";
    pub const NUM_ROUNDS: &str = "1000000";
    pub const BATCH_SIZE: &str = "100000";
    pub const NUM_GAMES: &str = "1";
    pub const BENCH_REPEAT: &str = "3";
}
