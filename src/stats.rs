use crate::counts::FaceCounts;
use crate::global::FACES;
use serde::{Deserialize, Serialize};

/// Final per-player results, derived once after the last round and never
/// mutated afterward.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PlayerStats {
    pub player_id: usize,
    pub total_points: u64,
    pub frequencies: FaceCounts,
    pub most_common_value: u8,
}

impl PlayerStats {
    /// Per-face probability, indexed by face - 1. All entries are 0.0 when
    /// the player has no recorded rolls.
    pub fn probability_distribution(&self) -> [f64; 6] {
        let total = self.frequencies.total();
        let mut dist = [0.0; 6];
        if total == 0 {
            return dist;
        }
        for &face in FACES.iter() {
            dist[face as usize - 1] = self.frequencies.count(face) as f64 / total as f64;
        }
        dist
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GameStatistics {
    pub total_rounds: u64,
    pub players: Vec<PlayerStats>,
    pub winner: PlayerStats,
}

impl GameStatistics {
    /// The winner is the first player holding the maximum point total, so
    /// ties go to the lowest player id.
    pub(crate) fn new(total_rounds: u64, players: Vec<PlayerStats>) -> Self {
        assert!(!players.is_empty());
        let mut best = 0;
        for (i, p) in players.iter().enumerate() {
            if p.total_points > players[best].total_points {
                best = i;
            }
        }
        let winner = players[best].clone();
        GameStatistics {
            total_rounds,
            players,
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameStatistics, PlayerStats};
    use crate::counts::FaceCounts;

    fn player(id: usize, points: u64) -> PlayerStats {
        PlayerStats {
            player_id: id,
            total_points: points,
            frequencies: FaceCounts::default(),
            most_common_value: 1,
        }
    }

    #[test]
    fn winner_is_first_maximum() {
        let stats = GameStatistics::new(
            10,
            vec![player(1, 10), player(2, 25), player(3, 25), player(4, 5)],
        );
        assert_eq!(stats.winner.player_id, 2);
        assert_eq!(stats.winner.total_points, 25);
        assert_eq!(stats.players.len(), 4);
    }

    #[test]
    fn single_player_wins_by_default() {
        let stats = GameStatistics::new(3, vec![player(1, 9)]);
        assert_eq!(stats.winner.player_id, 1);
    }

    #[test]
    fn distribution_sums_to_one() {
        let mut freq = FaceCounts::default();
        freq.add(1);
        freq.add(1);
        freq.add(4);
        freq.add(6);
        let p = PlayerStats {
            player_id: 1,
            total_points: freq.points(),
            frequencies: freq,
            most_common_value: freq.most_common(),
        };
        let dist = p.probability_distribution();
        assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-6);
        assert!((dist[0] - 0.5).abs() < 1e-6);
        assert!((dist[3] - 0.25).abs() < 1e-6);
        assert_eq!(dist[1], 0.0);
    }

    #[test]
    fn distribution_all_zero_without_rolls() {
        let p = player(1, 0);
        assert_eq!(p.probability_distribution(), [0.0; 6]);
    }

    #[test]
    fn serializes_to_json() {
        let stats = GameStatistics::new(2, vec![player(1, 7), player(2, 4)]);
        let j = serde_json::to_value(&stats).unwrap();
        assert_eq!(j["total_rounds"], 2);
        assert_eq!(j["winner"]["player_id"], 1);
        assert_eq!(j["players"][1]["total_points"], 4);
    }
}
