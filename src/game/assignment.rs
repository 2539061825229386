//! Dealing characters to the roster

use crate::data::{Character, CharacterSelection, Player};
use rand::Rng;

/// Draw up to `seats` characters from the selection without replacement,
/// each pick weighted by how many of that character are left.
///
/// Same distribution as the first `seats` entries of a uniformly shuffled pool.
/// The pool itself is never built.
pub fn draw<R: Rng + ?Sized>(selection: &CharacterSelection, seats: usize, rng: &mut R) -> Vec<Character> {
    let mut remaining: Vec<(Character, u64)> = selection
        .iter()
        .map(|(character, count)| (character, u64::from(count)))
        .collect();
    let mut left: u64 = remaining.iter().map(|(_, count)| count).sum();

    let mut drawn = Vec::with_capacity(seats);
    while drawn.len() < seats && left > 0 {
        let mut ticket = rng.gen_range(0..left);
        for (character, count) in remaining.iter_mut() {
            if ticket < *count {
                *count -= 1;
                drawn.push(*character);
                break;
            }
            ticket -= *count;
        }
        left -= 1;
    }
    drawn
}

/// Deal `pool` positionally: seat `i` gets `pool[i]`, seats past the end of the
/// pool get the default character. Surplus pool entries go unused.
pub fn deal(players: &mut [Player], pool: &[Character]) {
    for (index, player) in players.iter_mut().enumerate() {
        let character = pool.get(index).copied().unwrap_or(Character::DEFAULT);
        player.assign(character);
    }
}
