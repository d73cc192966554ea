//! Player implementations (adapters for the [`Player`] port)
//!
//! - [`HumanPlayer`]: interactive, driven by input events
//! - [`RandomPlayer`]: plays a uniformly random legal move
//! - [`SmartPlayer`]: plays the best of several random legal moves

pub mod human;
pub mod random;
mod sampler;
pub mod smart;

pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use smart::SmartPlayer;

pub(crate) use sampler::build_rng;

use rand::Rng;

use crate::{Result, goal::generate_goals, ports::Player};

/// Create the players for a game.
///
/// Humans come first, then random players, then one smart player per entry
/// of `smart_difficulties`. Ids run from 0 in that order. Every player gets
/// its own freshly generated goal and a generator seeded from `rng`.
///
/// # Errors
///
/// Returns an error if any difficulty is zero.
pub fn create_players<R: Rng + ?Sized>(
    num_human: usize,
    num_random: usize,
    smart_difficulties: &[usize],
    rng: &mut R,
) -> Result<Vec<Box<dyn Player>>> {
    let total = num_human + num_random + smart_difficulties.len();
    let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(total);

    for id in 0..total {
        let mut goals = generate_goals(1, rng)?;
        let goal = goals.remove(0);
        let seed = rng.random();

        let player: Box<dyn Player> = if id < num_human {
            Box::new(HumanPlayer::new(id, goal).with_seed(seed))
        } else if id < num_human + num_random {
            Box::new(RandomPlayer::new(id, goal).with_seed(seed))
        } else {
            let difficulty = smart_difficulties[id - num_human - num_random];
            Box::new(SmartPlayer::new(id, goal, difficulty)?.with_seed(seed))
        };
        players.push(player);
    }

    Ok(players)
}
