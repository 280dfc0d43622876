use std::io::{BufRead, Write};

use clap::Parser;
use tictactoe_engine::{
    Board, BotConfig, BotInput, Difficulty, GameState, GameStatus, Mark, SessionRng, log, logger,
    select_move,
};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Bot strength: easy, medium or hard.
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Mark the human plays.
    #[arg(long, default_value = "X")]
    play_as: Mark,

    /// Let the computer open the game.
    #[arg(long)]
    cpu_starts: bool,

    /// RNG seed; omit for a random one.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a YAML bot config.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match args.config.as_deref() {
        Some(path) => BotConfig::from_yaml_file(path)?,
        None => BotConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut state = GameState::new(args.play_as, !args.cpu_starts);
    log!(
        "You play {} against a {:?} bot",
        state.player_mark.as_char(),
        args.difficulty
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while state.status == GameStatus::InProgress {
        if state.is_bot_turn() {
            let input = BotInput {
                board: state.board,
                bot_mark: state.bot_mark,
                player_mark: state.player_mark,
            };
            let index = select_move(args.difficulty, &input, &config, &mut rng)?;
            state.place_mark(index)?;
            log!("Computer ({}) plays cell {}", state.bot_mark.as_char(), index);
            continue;
        }

        print_board(&state.board, state.winning_line);
        let index = match read_cell_index(&mut lines)? {
            Some(index) => index,
            None => {
                log!("Input closed, leaving game");
                return Ok(());
            }
        };
        if let Err(err) = state.place_mark(index) {
            println!("Invalid move: {}", err);
        }
    }

    print_board(&state.board, state.winning_line);
    match state.winner() {
        Some(mark) if mark == state.player_mark => log!("Victory! {} wins", mark.as_char()),
        Some(mark) => log!("Defeat! {} wins", mark.as_char()),
        None => log!("It's a draw"),
    }

    Ok(())
}

fn read_cell_index(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<Option<usize>, Box<dyn std::error::Error>> {
    loop {
        print!("Your move (0-8): ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        match line.trim().parse::<usize>() {
            Ok(index) if index < 9 => return Ok(Some(index)),
            _ => println!("Enter a cell index between 0 and 8"),
        }
    }
}

fn print_board(board: &Board, winning_line: Option<[usize; 3]>) {
    for row in 0..3 {
        let mut rendered = String::new();
        for col in 0..3 {
            let index = row * 3 + col;
            let highlighted = winning_line.is_some_and(|line| line.contains(&index));
            let cell = board.mark_at(index).as_char();
            if highlighted {
                rendered.push_str(&format!("[{}]", cell));
            } else {
                rendered.push_str(&format!(" {} ", cell));
            }
        }
        println!("{}", rendered);
    }
}
