/// The two agents being compared. `A` moves first in even-numbered games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contestant {
    A,
    B,
}

impl Contestant {
    pub fn other(self) -> Contestant {
        match self {
            Contestant::A => Contestant::B,
            Contestant::B => Contestant::A,
        }
    }

    /// Who opens game `game_index`.
    pub fn first_in_game(game_index: usize) -> Contestant {
        if game_index % 2 == 0 {
            Contestant::A
        } else {
            Contestant::B
        }
    }
}

/// Running tally across an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub a_wins: u32,
    pub b_wins: u32,
    pub draws: u32,
    pub games: u32,
    pub plies: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a finished game. `reward` is from the view of `first`, the
    /// contestant that opened it.
    pub fn record(&mut self, first: Contestant, reward: f32, plies: usize) {
        self.games += 1;
        self.plies += plies;
        if reward > 0.0 {
            self.credit(first);
        } else if reward < 0.0 {
            self.credit(first.other());
        } else {
            self.draws += 1;
        }
    }

    fn credit(&mut self, contestant: Contestant) {
        match contestant {
            Contestant::A => self.a_wins += 1,
            Contestant::B => self.b_wins += 1,
        }
    }

    pub fn wins(&self, contestant: Contestant) -> u32 {
        match contestant {
            Contestant::A => self.a_wins,
            Contestant::B => self.b_wins,
        }
    }

    pub fn win_rate(&self, contestant: Contestant) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(contestant) as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.plies as f32 / self.games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mover_alternates() {
        assert_eq!(Contestant::first_in_game(0), Contestant::A);
        assert_eq!(Contestant::first_in_game(1), Contestant::B);
        assert_eq!(Contestant::first_in_game(2), Contestant::A);
    }

    #[test]
    fn test_record_credits_relative_to_opener() {
        let mut board = Scoreboard::new();
        board.record(Contestant::A, 1.0, 10); // A opened and won
        board.record(Contestant::B, -1.0, 12); // B opened and lost
        board.record(Contestant::B, 1.0, 8); // B opened and won
        board.record(Contestant::A, 0.0, 20);

        assert_eq!(board.a_wins, 2);
        assert_eq!(board.b_wins, 1);
        assert_eq!(board.draws, 1);
        assert_eq!(board.games, 4);
        assert!((board.win_rate(Contestant::A) - 0.5).abs() < 1e-6);
        assert!((board.draw_rate() - 0.25).abs() < 1e-6);
        assert!((board.average_game_length() - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_scoreboard_rates() {
        let board = Scoreboard::new();
        assert_eq!(board.win_rate(Contestant::B), 0.0);
        assert_eq!(board.draw_rate(), 0.0);
        assert_eq!(board.average_game_length(), 0.0);
    }
}
