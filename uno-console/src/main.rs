mod catalog;
mod terminal;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uno_engine::{
    config::GameConfig,
    console::Console,
    constants::{MAXIMUM_PLAYERS, MINIMUM_PLAYERS},
    deck::Deck,
    error::UnoError,
    message::Message,
    player::Player,
    turn::RoundOutcome,
    uno::Uno,
};

use catalog::Catalog;
use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(name = "uno", about = "Play a round of UNO against computer players.")]
struct Args {
    /// Seats at the table, your own included (random when omitted)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(MINIMUM_PLAYERS as i64..=MAXIMUM_PLAYERS as i64)
    )]
    players: Option<u8>,

    /// Seed for shuffling and for the computer players' choices
    #[arg(short, long)]
    seed: Option<u64>,

    /// Your player name
    #[arg(short, long)]
    name: Option<String>,

    /// Name of the game room
    #[arg(short, long)]
    room: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut console = Terminal::stdio(Catalog::english());

    match play(args, &mut console) {
        Err(UnoError::InputClosed) => {
            info!("input closed, leaving the game");
            Ok(())
        }
        result => Ok(result?),
    }
}

fn play(args: Args, console: &mut impl Console) -> Result<(), UnoError> {
    let config = GameConfig::default();
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let seats = args
        .players
        .map(usize::from)
        .unwrap_or_else(|| rng.gen_range(config.seats()));

    let mut player_name = args.name;
    let mut room_name = args.room;

    let mut human = loop {
        let name = match player_name.take() {
            Some(name) => name,
            None => console.prompt(Message::EnterPlayerName)?,
        };
        match Player::human(&name) {
            Ok(player) => break player,
            Err(UnoError::BlankPlayerId) => continue,
            Err(error) => return Err(error),
        }
    };

    let room = loop {
        let name = match room_name.take() {
            Some(name) => name,
            None => console.prompt(Message::EnterRoomName)?,
        };
        if !name.trim().is_empty() {
            break name.trim().to_string();
        }
    };

    let mut uno = Uno::with_deck(room, Deck::new(), rng).with_config(config);
    uno.room_mut().generate_computers(seats - 1);

    while let Err(player) = uno.join(human) {
        console.display(Message::PlayerNameTaken {
            name: player.id().to_string(),
        });
        human = loop {
            match Player::human(&console.prompt(Message::EnterPlayerName)?) {
                Ok(player) => break player,
                Err(UnoError::BlankPlayerId) => continue,
                Err(error) => return Err(error),
            }
        };
    }
    info!(room = %uno.room().name(), seats, "table ready");

    match uno.play_round(console)? {
        RoundOutcome::Won { winner } => info!(%winner, "game over"),
        RoundOutcome::Quit { player } => info!(%player, "game abandoned"),
    }
    Ok(())
}
