use crate::game::Game;
use std::fs;
use std::path::PathBuf;

/// Get the save file path
fn save_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crossword_save.json")
}

/// Load the saved game, if one exists and still parses
pub fn load() -> Option<Game> {
    let json = fs::read_to_string(save_path()).ok()?;
    Game::deserialize(&json)
}

/// Save the game to file (best effort)
pub fn save(game: &Game) {
    let json = game.serialize();
    if !json.is_empty() {
        let _ = fs::write(save_path(), json);
    }
}
