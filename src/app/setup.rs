//! Building a ready-to-play game from a configuration.

use super::config::GameConfig;
use crate::{
    Result,
    blocky::Block,
    players::{build_rng, create_players},
    ports::Player,
};

/// A random board together with the players who will act on it.
pub struct Game {
    pub board: Block,
    pub players: Vec<Box<dyn Player>>,
}

impl Game {
    /// Validate `config`, then generate the board and the players.
    ///
    /// The board and every player generator are derived from one generator,
    /// so a seeded configuration always produces the same game.
    pub fn create(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = build_rng(config.seed);

        let board = Block::random_board(config.max_depth, config.board_size, &mut rng)?;
        let players = create_players(
            config.num_human,
            config.num_random,
            &config.smart_difficulties,
            &mut rng,
        )?;

        Ok(Self { board, players })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn seeded_games_are_reproducible() {
        let config = GameConfig::new(3, 64)
            .with_random_players(2)
            .with_smart_players(vec![4])
            .with_seed(11);
        let first = Game::create(&config).unwrap();
        let second = Game::create(&config).unwrap();

        assert_eq!(first.board, second.board);
        assert_eq!(first.players.len(), 3);
        for (a, b) in first.players.iter().zip(&second.players) {
            assert_eq!(a.goal().description(), b.goal().description());
        }
    }

    #[test]
    fn invalid_config_builds_nothing() {
        let config = GameConfig::new(3, 64).with_random_players(0);
        assert!(matches!(
            Game::create(&config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
