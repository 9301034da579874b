use crate::games::SessionRng;
use crate::log;
use super::board::Grid;
use super::bot_controller::{BotInput, BotType, calculate_move};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameMode, Mark, Outcome};
use super::validate::validate_player_name;
use super::win_detector::evaluate;

pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Select(usize),
    BotTurn { generation: u64 },
    JumpTo(usize),
    SetMode(GameMode),
    SetBotType(BotType),
    Rename { mark: Mark, name: String },
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTurn {
    pub generation: u64,
    pub bot_type: BotType,
    pub bot_mark: Mark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win(line) => match line.mark {
                Mark::X => self.x_wins += 1,
                Mark::O => self.o_wins += 1,
            },
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn set(&mut self, mark: Mark, name: String) {
        match mark {
            Mark::X => self.x = name,
            Mark::O => self.o = name,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: "Player X".to_string(),
            o: "Player O".to_string(),
        }
    }
}

/// Immutable game session. Every command produces a new value through
/// [`TicTacToeSession::handle_command`]; a rejected command leaves the caller's value as it was.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    history: Vec<Grid>,
    view_index: usize,
    mode: GameMode,
    bot_type: BotType,
    names: PlayerNames,
    scores: ScoreBoard,
    rng: SessionRng,
    generation: u64,
}

impl TicTacToeSession {
    pub fn new(settings: &TicTacToeSessionSettings) -> Self {
        Self {
            history: vec![Grid::empty()],
            view_index: 0,
            mode: settings.mode,
            bot_type: settings.bot_type,
            names: settings.names.clone(),
            scores: ScoreBoard::default(),
            rng: SessionRng::new(settings.seed),
            generation: 0,
        }
    }

    pub fn current_grid(&self) -> &Grid {
        &self.history[self.view_index]
    }

    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn view_index(&self) -> usize {
        self.view_index
    }

    pub fn is_viewing_latest(&self) -> bool {
        self.view_index + 1 == self.history.len()
    }

    pub fn current_mark(&self) -> Mark {
        Mark::for_ply(self.view_index)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_grid())
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer && self.current_mark() == COMPUTER_MARK
    }

    pub fn pending_bot_turn(&self) -> Option<BotTurn> {
        if !self.is_bot_turn() || !self.is_viewing_latest() || self.outcome().is_terminal() {
            return None;
        }
        Some(BotTurn {
            generation: self.generation,
            bot_type: self.bot_type,
            bot_mark: COMPUTER_MARK,
        })
    }

    pub fn handle_command(&self, command: &SessionCommand) -> Result<TicTacToeSession, String> {
        let mut next = self.clone();
        match command {
            SessionCommand::Select(index) => next.select(*index)?,
            SessionCommand::BotTurn { generation } => next.play_bot_turn(*generation)?,
            SessionCommand::JumpTo(index) => next.jump_to(*index)?,
            SessionCommand::SetMode(mode) => {
                next.mode = *mode;
                next.restart();
            }
            SessionCommand::SetBotType(bot_type) => next.bot_type = *bot_type,
            SessionCommand::Rename { mark, name } => {
                validate_player_name(name)?;
                next.names.set(*mark, name.clone());
            }
            SessionCommand::Reset => next.restart(),
            SessionCommand::Quit => return Err("Quit is handled by the runner".to_string()),
        }
        Ok(next)
    }

    fn select(&mut self, index: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }
        self.place(index)
    }

    fn play_bot_turn(&mut self, generation: u64) -> Result<(), String> {
        if generation != self.generation {
            return Err(format!(
                "Stale bot turn (generation {}, current {})",
                generation, self.generation
            ));
        }
        let Some(turn) = self.pending_bot_turn() else {
            return Err("No bot turn pending".to_string());
        };

        let input = BotInput::new(*self.current_grid(), turn.bot_mark);
        let index = calculate_move(turn.bot_type, &input, &mut self.rng)
            .ok_or_else(|| "Bot found no move".to_string())?;
        log!("[session] Bot {:?} plays {} at {}", turn.bot_type, turn.bot_mark, index);
        self.place(index)
    }

    fn place(&mut self, index: usize) -> Result<(), String> {
        if self.outcome().is_terminal() {
            return Err("Game is already over".to_string());
        }

        let mark = self.current_mark();
        let grid = self.current_grid().apply(index, mark)?;

        self.history.truncate(self.view_index + 1);
        self.history.push(grid);
        self.view_index += 1;
        self.generation += 1;

        let outcome = evaluate(&grid);
        if outcome.is_terminal() {
            self.scores.record(&outcome);
            match outcome.winner() {
                Some(winner) => log!("[session] {} ({}) wins", self.names.get(winner), winner),
                None => log!("[session] Game drawn"),
            }
        }
        Ok(())
    }

    fn jump_to(&mut self, index: usize) -> Result<(), String> {
        if index >= self.history.len() {
            return Err(format!(
                "History index {} out of range (length {})",
                index,
                self.history.len()
            ));
        }
        self.view_index = index;
        self.generation += 1;
        Ok(())
    }

    fn restart(&mut self) {
        self.history = vec![Grid::empty()];
        self.view_index = 0;
        self.generation += 1;
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new(&TicTacToeSessionSettings::default())
    }
}
