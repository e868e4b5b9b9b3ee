use clap::{arg_enum, crate_name, crate_version, App, Arg, ArgMatches, SubCommand};
use dicesim::global::{conf_def, FACES};
use dicesim::request::SimulationRequest;
use dicesim::sim::run_simulation;
use dicesim::stats::GameStatistics;
use rayon::prelude::*;
use std::time::Instant;

/// Validates the given expression can be parsed as the given type following clap's convention:
/// Return Ok(()) if yes, else Err(string_describing_the_problem)
macro_rules! validate_as {
    ($T:ty, $V:expr) => {
        match $V.parse::<$T>() {
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    };
}

/// Assuming you have previously validated the given expression can be parsed successfully as the
/// give type, this saves a tiny bit of typing and hides the unwrap
macro_rules! parse_as {
    ($T:ty, $V:expr) => {
        $V.parse::<$T>().unwrap()
    };
}

arg_enum! {
    #[derive(PartialEq, Debug)]
    enum SimulateOutFmt {
        Json,
        Summary,
    }
}

fn request_from_args(args: &ArgMatches) -> SimulationRequest {
    let mut req = SimulationRequest::new(
        parse_as!(usize, args.value_of("players").unwrap()),
        parse_as!(u64, args.value_of("rounds").unwrap()),
    );
    req.batch_size = parse_as!(usize, args.value_of("batchsize").unwrap());
    req.seed = args.value_of("seed").map(|v| parse_as!(u64, v));
    req
}

fn print_summary(stats: &GameStatistics) {
    println!("rounds: {}", stats.total_rounds);
    for p in &stats.players {
        let dist = p.probability_distribution();
        print!(
            "player {}: {} points, most common face {}, faces",
            p.player_id, p.total_points, p.most_common_value
        );
        for &face in FACES.iter() {
            print!(" {}:{:.4}", face, dist[face as usize - 1]);
        }
        println!();
    }
    println!(
        "winner: player {} with {} points",
        stats.winner.player_id, stats.winner.total_points
    );
}

fn simulate(args: &ArgMatches) -> Result<(), ()> {
    let req = request_from_args(args);
    let num_games = parse_as!(u64, args.value_of("numgames").unwrap());
    let outfmt = parse_as!(SimulateOutFmt, args.value_of("outfmt").unwrap());
    // each game is an independent run with its own derived seed, so rayon's
    // scheduling order cannot change any game's results
    let outputs: Vec<_> = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut game_req = req;
            game_req.seed = req.seed.map(|s| s.wrapping_add(i));
            run_simulation(&game_req)
        })
        .collect();
    for o in outputs {
        match o {
            Err(e) => {
                eprintln!("Error running simulation: {}", e);
                return Err(());
            }
            Ok(stats) => match outfmt {
                SimulateOutFmt::Json => println!("{}", serde_json::to_string(&stats).unwrap()),
                SimulateOutFmt::Summary => print_summary(&stats),
            },
        }
    }
    Ok(())
}

fn bench(args: &ArgMatches) -> Result<(), ()> {
    let req = request_from_args(args);
    let repeat = parse_as!(u32, args.value_of("repeat").unwrap());
    let mut seconds = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        let start = Instant::now();
        if let Err(e) = run_simulation(&req) {
            eprintln!("Error running simulation: {}", e);
            return Err(());
        }
        seconds.push(start.elapsed().as_secs_f64());
    }
    println!("{}", serde_json::to_string(&seconds).unwrap());
    Ok(())
}

fn main() {
    let args = App::new(crate_name!())
        .version(crate_version!())
        .subcommand(
            SubCommand::with_name("simulate")
                .about("Run dice game simulations")
                .arg(
                    Arg::with_name("players")
                        .long("players")
                        .value_name("N")
                        .default_value(conf_def::NUM_PLAYERS)
                        .validator(|v| validate_as!(usize, v))
                        .help("Number of players at the table (1-4)"),
                )
                .arg(
                    Arg::with_name("rounds")
                        .long("rounds")
                        .value_name("N")
                        .default_value(conf_def::NUM_ROUNDS)
                        .validator(|v| validate_as!(u64, v))
                        .help("How many rounds to simulate"),
                )
                .arg(
                    Arg::with_name("batchsize")
                        .long("batch-size")
                        .value_name("N")
                        .default_value(conf_def::BATCH_SIZE)
                        .validator(|v| validate_as!(usize, v))
                        .help("Rounds rolled per block"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("N")
                        .validator(|v| validate_as!(u64, v))
                        .help("Seed for reproducible rolls"),
                )
                .arg(
                    Arg::with_name("numgames")
                        .long("num-games")
                        .value_name("N")
                        .default_value(conf_def::NUM_GAMES)
                        .validator(|v| validate_as!(u64, v))
                        .help("How many independent games to run"),
                )
                .arg(
                    Arg::with_name("outfmt")
                        .long("outfmt")
                        .possible_values(&SimulateOutFmt::variants())
                        .default_value("Json")
                        .case_insensitive(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("bench")
                .about("Time repeated simulation runs")
                .arg(
                    Arg::with_name("players")
                        .long("players")
                        .value_name("N")
                        .default_value(conf_def::NUM_PLAYERS)
                        .validator(|v| validate_as!(usize, v))
                        .help("Number of players at the table (1-4)"),
                )
                .arg(
                    Arg::with_name("rounds")
                        .long("rounds")
                        .value_name("N")
                        .default_value(conf_def::NUM_ROUNDS)
                        .validator(|v| validate_as!(u64, v))
                        .help("How many rounds to simulate"),
                )
                .arg(
                    Arg::with_name("batchsize")
                        .long("batch-size")
                        .value_name("N")
                        .default_value(conf_def::BATCH_SIZE)
                        .validator(|v| validate_as!(usize, v))
                        .help("Rounds rolled per block"),
                )
                .arg(
                    Arg::with_name("repeat")
                        .long("repeat")
                        .value_name("N")
                        .default_value(conf_def::BENCH_REPEAT)
                        .validator(|v| validate_as!(u32, v))
                        .help("How many timed runs"),
                ),
        )
        .get_matches();
    let res = if let Some(args) = args.subcommand_matches("simulate") {
        simulate(args)
    } else if let Some(args) = args.subcommand_matches("bench") {
        bench(args)
    } else if args.subcommand_name().is_none() {
        eprintln!("Must provide subcommand");
        Err(())
    } else {
        eprintln!("Unknown subcommand {}", args.subcommand_name().unwrap());
        Err(())
    };
    if res.is_err() {
        std::process::exit(1);
    }
}
