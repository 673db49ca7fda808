use std::io::{self, BufRead, Write};
use std::process::exit;

use minishogi::engines::engine_random::RandomEngine;
use minishogi::engines::engine_trait::Engine;
use minishogi::game_state::shogi_types::Player;
use minishogi::session::game_session::{GameError, GameSession, Outcome};
use minishogi::utils::notation::{format_move, parse_move};
use minishogi::utils::render_board::render_board;

fn main() {
    // Any argument hands the first move to the computer.
    let computer = if std::env::args().len() > 1 {
        Player::Attacker
    } else {
        Player::Defender
    };

    let mut session = GameSession::new();
    let mut engine = RandomEngine::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.outcome() {
            Ok(Some(Outcome::MaxTurnsReached)) => {
                println!("Draw: the turn limit was reached.");
                break;
            }
            Ok(Some(Outcome::SideToMoveHasNoMoves)) => {
                if session.side_to_move() == computer {
                    println!("You win: the computer has no legal moves.");
                } else {
                    println!("You lose: no legal moves remain.");
                }
                break;
            }
            Ok(None) => {}
            Err(err) => fail(&err.to_string()),
        }

        println!();
        print!("{}", render_board(session.board()));
        println!("position {:016x}, turn {}", session.hash(), session.history().turn());

        if session.side_to_move() == computer {
            let chosen = match engine.choose_move(
                session.board(),
                session.history(),
                session.table(),
            ) {
                Ok(Some(mv)) => mv,
                Ok(None) => fail("engine found no move in a running game"),
                Err(err) => fail(&err),
            };
            println!("computer plays {}", format_move(chosen));
            if let Err(err) = session.play(chosen) {
                fail(&err.to_string());
            }
            continue;
        }

        let moves = match session.legal_moves() {
            Ok(moves) => moves,
            Err(err) => fail(&err.to_string()),
        };
        let listed: Vec<String> = moves.iter().map(|&mv| format_move(mv)).collect();
        println!("your moves: {}", listed.join(" "));

        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(err) => fail(&err.to_string()),
        };

        let mv = match parse_move(&line) {
            Ok(mv) => mv,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match session.play(mv) {
            Ok(()) => {}
            Err(GameError::IllegalMove(_)) => println!("that move is not legal here"),
            Err(err) => fail(&err.to_string()),
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("fatal: {message}");
    exit(1);
}
