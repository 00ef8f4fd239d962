/// Parameters for one game. Defaults match the classic setup: a 10x10 board,
/// four vertical ships of length three, ten guesses per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub num_ships: usize,
    pub ship_length: usize,
    pub max_tries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            num_ships: 4,
            ship_length: 3,
            max_tries: 10,
        }
    }
}
