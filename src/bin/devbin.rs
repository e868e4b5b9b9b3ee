use dicesim::live::LiveGame;

fn main() {
    let mut game = LiveGame::with_seed(4, 1234).unwrap();
    for _ in 0..10 {
        let faces = game.roll_round();
        println!(
            "round {:2}: faces {:?} scores {:?}",
            game.rounds_played(),
            faces,
            game.scores()
        );
    }
    let stats = game.finish();
    for p in &stats.players {
        println!(
            "player {}: {} points, most common face {}",
            p.player_id, p.total_points, p.most_common_value
        );
    }
    println!(
        "winner: player {} with {} points",
        stats.winner.player_id, stats.winner.total_points
    );
}
