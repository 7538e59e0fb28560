//! Line-oriented game session: a human plays one colour against the engine.

use super::parser::{parse_command, Command};
use crate::board::Player;
use crate::game::{Game, MoveOutcome, TurnRecord};
use crate::search::SearchParams;
use std::io::{self, BufRead, Write};

pub struct Session {
    game: Game,
    running: bool,
    /// Reply with an AI turn as soon as the human's turn completes
    auto_reply: bool,
}

impl Session {
    pub fn new(human: Player, params: SearchParams) -> Self {
        Self {
            game: Game::new(human, params),
            running: true,
            auto_reply: true,
        }
    }

    pub fn with_auto_reply(mut self, enable: bool) -> Self {
        self.auto_reply = enable;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Lines to print when the session opens; plays the AI's opening turn
    /// when the engine has the first move.
    pub fn greet(&mut self) -> Vec<String> {
        let mut res = vec![format!("damista ready, you play {}", self.game.human())];
        self.maybe_reply(&mut res);
        res.push(self.game.board().to_string().trim_end().to_string());
        res
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::NewGame => {
                self.game.new_game();
                res.push("ok".to_string());
                self.maybe_reply(&mut res);
            }
            Command::Move { .. } if self.auto_reply && self.game.turn() != self.game.human() => {
                res.push("not your turn".to_string());
            }
            Command::Move { from, to } => match self.game.attempt_move(from, to) {
                MoveOutcome::Rejected => res.push("illegal".to_string()),
                MoveOutcome::ContinueCapture => res.push("continue".to_string()),
                MoveOutcome::TurnComplete => {
                    res.push("ok".to_string());
                    self.maybe_reply(&mut res);
                }
            },
            Command::Go => {
                let side = self.game.turn();
                match self.game.request_ai_move(side) {
                    Some(turn) => res.push(format_turn(&turn)),
                    None => res.push("no move".to_string()),
                }
                self.push_game_over(&mut res);
            }
            Command::Undo => {
                if self.game.undo_last_turn() {
                    res.push("ok".to_string());
                    // Undoing the engine's opening leaves it to move again
                    self.maybe_reply(&mut res);
                } else {
                    res.push("nothing to undo".to_string());
                }
            }
            Command::Show => {
                res.push(self.game.board().to_string().trim_end().to_string());
                res.push(format!("turn {}", self.game.turn()));
                if let Some(sq) = self.game.required_piece() {
                    res.push(format!("capture required from {}", sq));
                }
            }
            Command::Legal(sq) => {
                let dests = self.game.legal_destinations(sq);
                let list: Vec<String> = dests.iter().map(|d| d.to_string()).collect();
                res.push(format!("legal {} {}", sq, list.join(" ")).trim_end().to_string());
            }
            Command::Counts => {
                let c = self.game.piece_counts();
                res.push(format!(
                    "black {} ({} kings) red {} ({} kings)",
                    c.black_pieces, c.black_kings, c.red_pieces, c.red_kings
                ));
            }
            Command::Depth(depth) => {
                let params = self.game.search_params().clone().max_depth(depth);
                self.game.set_search_params(params);
                res.push(format!("depth {}", depth));
            }
            Command::History => {
                for (i, turn) in self.game.history().iter().enumerate() {
                    res.push(format!("{}. {} {}", i + 1, turn.player, format_path(turn)));
                }
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                if !s.is_empty() {
                    res.push(format!("unknown command: {}", s));
                }
            }
        }
        res
    }

    fn maybe_reply(&mut self, res: &mut Vec<String>) {
        let ai = self.game.ai();
        if self.auto_reply && self.game.turn() == ai {
            if let Some(turn) = self.game.request_ai_move(ai) {
                res.push(format_turn(&turn));
            }
        }
        self.push_game_over(res);
    }

    fn push_game_over(&self, res: &mut Vec<String>) {
        if let Some(winner) = self.game.is_game_over() {
            res.push(format!("gameover {}", winner));
        }
    }
}

fn format_path(turn: &TurnRecord) -> String {
    turn.moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_turn(turn: &TurnRecord) -> String {
    format!("ai {}", format_path(turn))
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    match parse_command(line) {
        Ok(cmd) => session.handle_command(cmd),
        Err(e) => vec![format!("error: {}", e)],
    }
}

pub fn run_loop(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    for line in session.greet() {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    let mut buf = String::new();
    while session.is_running() {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, &mut session) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(())
}
