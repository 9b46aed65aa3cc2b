mod board;
mod game;
mod player;

use board::Mark;
use game::Game;
use player::HumanPlayer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut game = Game::new(
        Box::new(HumanPlayer::new(Mark::X)),
        Box::new(HumanPlayer::new(Mark::O)),
    );
    game.run()?;

    Ok(())
}
