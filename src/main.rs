// main.rs - command line front end over the SQLite store
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thai_scrabble::game::position::parse_positions;
use thai_scrabble::logging::setup_logging;
use thai_scrabble::{
    AiMove, AppConfig, Dictionary, Game, GameService, SqliteGameStore, Strategy,
    ThaiScrabbleError, WordList,
};

type Service = GameService<SqliteGameStore, SqliteGameStore>;

#[derive(Parser, Debug)]
#[command(name = "thai_scrabble", version, about)]
struct Config {
    /// SQLite database holding games, stats and the word list
    #[arg(long, default_value = "data/thai_scrabble.db")]
    db: PathBuf,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// JSON file overriding search and rule settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search used on AI turns (default from the config file)
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a word list (one word per line) into the database
    SeedWords {
        #[arg(long)]
        file: PathBuf,
    },
    /// Start a new game
    New {
        #[arg(long)]
        owner: String,
    },
    /// Print the board, racks and scores
    Show {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
    },
    /// Play tiles as `row:col:letter` triples, e.g. "7:7:ก,7:8:า"
    Place {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        tiles: String,
    },
    /// Skip the player's turn
    Pass {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
    },
    /// Let the computer play its turn
    AiTurn {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
    },
    /// Give up the game
    Abandon {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
    },
    /// List the moves of a game
    History {
        #[arg(long)]
        game: String,
        #[arg(long)]
        owner: String,
    },
    /// Win/loss record of a player
    Stats {
        #[arg(long)]
        owner: String,
    },
    /// Games of a player, newest first
    Games {
        #[arg(long)]
        owner: String,
    },
}

// ============================================================================
// OUTPUT
// ============================================================================

fn print_game(game: &Game) {
    println!("game {} ({})", game.id, game.status.as_str());
    print!("{}", game.board);
    println!(
        "player {} | ai {} | bag {} | turn {}",
        game.player_score,
        game.ai_score,
        game.bag.len(),
        game.current_turn.as_str()
    );
    println!("your rack: {}", game.player_rack.letters());
    if let Some(winner) = game.winner {
        println!("winner: {}", winner.as_str());
    }
}

fn describe_ai_move(applied: &AiMove) -> String {
    match applied {
        AiMove::Place { word, score, .. } => format!("AI played {} for {}", word, score),
        AiMove::Swap { indices } => format!("AI swapped {} tiles", indices.len()),
        AiMove::Pass => "AI passed".to_string(),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn seed_words(store: &SqliteGameStore, file: &Path) -> Result<(), ThaiScrabbleError> {
    let list = WordList::from_file(file)?;
    let added = store.seed_words(list.words())?;
    log::info!("📚 Seeded {} new words ({} in file)", added, list.len());
    println!("{} words added", added);
    Ok(())
}

async fn run(service: &Service, command: Command) -> Result<(), ThaiScrabbleError> {
    match command {
        Command::SeedWords { .. } => {}
        Command::New { owner } => {
            let game = service.create_game(&owner).await?;
            print_game(&game);
        }
        Command::Show { game, owner } => {
            print_game(&service.get_game(&game, &owner).await?);
        }
        Command::Place { game, owner, tiles } => {
            let positions = parse_positions(&tiles).map_err(ThaiScrabbleError::Input)?;
            let (next, score) = service.place_word(&game, &owner, &positions).await?;
            for word in &score.words {
                println!("{} = {}", word.word, word.score);
            }
            if score.bonus > 0 {
                println!("bingo +{}", score.bonus);
            }
            println!("move total {}", score.total);
            print_game(&next);
        }
        Command::Pass { game, owner } => {
            print_game(&service.pass(&game, &owner).await?);
        }
        Command::AiTurn { game, owner } => {
            let (next, applied) = service.ai_turn(&game, &owner).await?;
            println!("{}", describe_ai_move(&applied));
            print_game(&next);
        }
        Command::Abandon { game, owner } => {
            print_game(&service.abandon(&game, &owner).await?);
        }
        Command::History { game, owner } => {
            for record in service.moves(&game, &owner).await? {
                println!(
                    "{:>3}. {:<6} {:<5} {:<12} {:>4}",
                    record.move_number,
                    record.side.as_str(),
                    record.action.as_str(),
                    record.word.as_deref().unwrap_or("-"),
                    record.score
                );
            }
        }
        Command::Stats { owner } => {
            let stats = service.stats(&owner).await?;
            println!(
                "{}: played {} | won {} | lost {} | draw {} | best {} | average {}",
                stats.owner_id,
                stats.games_played,
                stats.games_won,
                stats.games_lost,
                stats.games_draw,
                stats.highest_score,
                stats.average_score
            );
        }
        Command::Games { owner } => {
            for game in service.list_games(&owner).await? {
                println!(
                    "{} {:<9} {:>4} - {:<4}",
                    game.id,
                    game.status.as_str(),
                    game.player_score,
                    game.ai_score
                );
            }
        }
    }
    Ok(())
}

// ============================================================================
// MAIN
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), ThaiScrabbleError> {
    let cli = Config::parse();
    let _logger = setup_logging(&cli.log_level, cli.log_dir.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.ai.strategy = strategy;
    }

    if let Some(parent) = cli.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = SqliteGameStore::new(&cli.db)?;

    if let Command::SeedWords { file } = &cli.command {
        return seed_words(&store, file);
    }

    let dictionary = Dictionary::load(store.clone()).await?;
    if dictionary.is_empty() {
        log::warn!("⚠️ Dictionary is empty, run seed-words first");
    }

    let service = GameService::new(Arc::new(store), Arc::new(dictionary), config);
    if let Err(e) = run(&service, cli.command).await {
        log::error!("❌ {}", e);
        return Err(e);
    }
    Ok(())
}
