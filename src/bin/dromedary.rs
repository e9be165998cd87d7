use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Rand, Seeded, StdRand};
use tracing::{debug, info};

use dromedary::camel::Camel;
use dromedary::die::Die;
use dromedary::display::DisplaySlice;
use dromedary::file::{ReadJsonFile, WriteJsonFile};
use dromedary::leg::Leg;
use dromedary::mc::DEFAULT_TRIALS;
use dromedary::print::{tabulate_advice, tabulate_track};
use dromedary::scenario::Scenario;
use dromedary::track::Track;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the scenario from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// seed for the random starting positions and simulations
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// number of Monte Carlo trials
    #[clap(short = 't', long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// dice already rolled this leg, e.g. r2,g1
    #[clap(short = 'r', long, value_delimiter = ',', value_parser = parse_die)]
    rolls: Vec<Die>,

    /// comma-separated player names; players take turns in this order
    #[clap(long, value_delimiter = ',', default_value = "p1,p2")]
    players: Vec<String>,

    /// leg tickets taken by the players in turn before any rolls, e.g. g,r
    #[clap(short = 'b', long, value_delimiter = ',', value_parser = parse_camel)]
    bets: Vec<Camel>,

    /// roll out the rest of the leg, the players taking turns to roll
    #[clap(long)]
    play: bool,

    /// file to save the scenario to, after applying the rolls
    #[clap(long)]
    save: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.trials == 0 {
            bail!("number of trials must be positive");
        }
        if self.players.is_empty() {
            bail!("at least one player is required");
        }
        Ok(())
    }
}
fn parse_die(s: &str) -> anyhow::Result<Die> {
    Die::from_str(s)
}
fn parse_camel(s: &str) -> anyhow::Result<Camel> {
    Camel::from_str(s)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("seed: {seed}");
    let mut rand = StdRand::seed(seed);

    let mut leg = match args.file.as_ref() {
        Some(path) => {
            let scenario = Scenario::read_json_file(path)?;
            scenario.validate()?;
            Leg::from(scenario)
        }
        None => Leg::new(Track::starting(&mut rand)),
    }
    .with_players(args.players.iter().cloned());
    for &die in &args.rolls {
        leg.apply(die)?;
    }
    if let Some(path) = args.save.as_ref() {
        Scenario::from(&leg).write_json_file(path)?;
        info!("saved scenario to {}", path.display());
    }

    let mut seat = 0;
    for &camel in &args.bets {
        match leg.bet(seat, camel)? {
            Some(ticket) => info!("{} takes ticket {ticket}", leg.players[seat].name),
            None => return Err(format!("no tickets left for camel {camel}").into()),
        }
        seat = (seat + 1) % leg.players.len();
    }

    print_leg(&leg, args.trials, &mut rand)?;
    if args.play {
        while let Some(die) = leg.roll_by(seat, &mut rand)? {
            info!("{} rolled {die}", leg.players[seat].name);
            seat = (seat + 1) % leg.players.len();
            print_leg(&leg, args.trials, &mut rand)?;
        }
    }
    if leg.is_finished() {
        let rankings = leg.track.rankings()?;
        info!(
            "leg finished, {rankings}, finishing order: {}",
            DisplaySlice::from(&leg.track.standings()[..])
        );
        let deltas = leg.settle()?;
        for (player, delta) in leg.players.iter().zip(deltas) {
            info!("{player} ({delta:+})");
        }
    }

    Ok(())
}

fn print_leg(leg: &Leg, trials: u64, rand: &mut impl Rand) -> anyhow::Result<()> {
    info!(
        "pyramid: {}, dice tents: {}, players: {}\n{}",
        leg.pyramid,
        DisplaySlice::from(&leg.dice_tents[..]),
        DisplaySlice::from(&leg.players[..]),
        Console::default().render(&tabulate_track(&leg.track))
    );
    if !leg.is_finished() {
        let advice = leg.advise(trials, rand)?;
        info!(
            "advice:\n{}",
            Console::default().render(&tabulate_advice(&advice, &leg.ticket_tents))
        );
    }
    Ok(())
}
