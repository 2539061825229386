//! Property tests for the session state machine (no terminal).
//!
//! - Adding and removing players keeps an exact, duplicate-free roster
//! - Dealing hands out exactly the selected characters when counts match
//! - Short selections are padded with civilians, surplus is left undealt
//! - A game ends exactly when no killer is left or killers match the town
//! - Day and night alternate and count rounds without ending a balanced game

use std::collections::{BTreeMap, HashSet};

use night_in_palermo::{Character, GameSession, Phase, Side};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(64)
}

fn seated(players: usize, seed: u64) -> GameSession {
    let mut session = GameSession::with_seed(seed);
    for i in 0..players {
        session.add_player(format!("P{}", i + 1));
    }
    session
}

fn select(session: &mut GameSession, counts: [u32; 4]) {
    for (character, count) in Character::ALL.iter().zip(counts) {
        session.update_selection(*character, i64::from(count));
    }
}

fn dealt_counts(session: &GameSession) -> BTreeMap<Character, u32> {
    let mut counts = BTreeMap::new();
    for player in session.players() {
        if let Some(character) = player.character {
            *counts.entry(character).or_insert(0) += 1;
        }
    }
    counts
}

fn start(session: &mut GameSession) {
    let ids: Vec<_> = session.players().iter().map(|p| p.id).collect();
    for id in ids {
        session.reveal_character(id);
    }
    session.start_game();
}

proptest! {
    #![proptest_config(config())]

    /// Every add lands, every remove of a seated player lands, ids stay unique.
    #[test]
    fn prop_roster_accounting(
        ops in prop::collection::vec((any::<bool>(), 0usize..8), 0..40),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::with_seed(seed);
        let mut expected = 0usize;
        for (add, index) in ops {
            if add || session.players().is_empty() {
                session.add_player(format!("N{}", index));
                expected += 1;
            } else {
                let id = session.players()[index % session.players().len()].id;
                prop_assert!(session.remove_player(id).is_some());
                prop_assert!(session.remove_player(id).is_none());
                expected -= 1;
            }
        }
        prop_assert_eq!(session.players().len(), expected);
        let ids: HashSet<_> = session.players().iter().map(|p| p.id).collect();
        prop_assert_eq!(ids.len(), expected);
    }

    /// With one character per seat the dealt multiset is the selection.
    #[test]
    fn prop_exact_deal_preserves_multiplicity(
        counts in [0u32..4, 0u32..3, 0u32..3, 0u32..2],
        seed in any::<u64>(),
    ) {
        let total: u32 = counts.iter().sum();
        prop_assume!(total > 0);
        let mut session = seated(total as usize, seed);
        select(&mut session, counts);
        session.assign_roles();

        prop_assert_eq!(session.phase(), Phase::CharacterReveal);
        let dealt = dealt_counts(&session);
        for (character, count) in Character::ALL.iter().zip(counts) {
            prop_assert_eq!(dealt.get(character).copied().unwrap_or(0), count);
        }
        for player in session.players() {
            prop_assert_eq!(player.role, player.character.map(|c| c.role()));
            prop_assert!(!player.has_revealed);
        }
    }

    /// Seats beyond the selection are civilians.
    #[test]
    fn prop_short_selection_pads_with_civilians(
        counts in [0u32..3, 0u32..2, 0u32..2, 0u32..2],
        extra in 1usize..5,
        seed in any::<u64>(),
    ) {
        let total = counts.iter().sum::<u32>() as usize;
        let mut session = seated(total + extra, seed);
        select(&mut session, counts);
        session.assign_roles();

        let dealt = dealt_counts(&session);
        prop_assert!(session.players().iter().all(|p| p.character.is_some()));
        prop_assert_eq!(
            dealt.get(&Character::Civilian).copied().unwrap_or(0) as usize,
            counts[0] as usize + extra
        );
        for (character, count) in Character::ALL.iter().zip(counts).skip(1) {
            prop_assert_eq!(dealt.get(character).copied().unwrap_or(0), count);
        }
    }

    /// More characters than seats: everyone is dealt, nothing beyond the selection.
    #[test]
    fn prop_surplus_selection_is_left_undealt(
        counts in [1u32..4, 1u32..3, 0u32..3, 0u32..2],
        players in 1usize..4,
        seed in any::<u64>(),
    ) {
        let total = counts.iter().sum::<u32>() as usize;
        prop_assume!(total > players);
        let mut session = seated(players, seed);
        select(&mut session, counts);
        session.assign_roles();

        let dealt = dealt_counts(&session);
        prop_assert_eq!(dealt.values().sum::<u32>() as usize, players);
        for (character, count) in Character::ALL.iter().zip(counts) {
            prop_assert!(dealt.get(character).copied().unwrap_or(0) <= count);
        }
    }

    /// The first settle after the start ends the game exactly on K == 0 or K >= C.
    #[test]
    fn prop_win_rule(
        killers in 0u32..4,
        town in 0u32..6,
        seed in any::<u64>(),
    ) {
        prop_assume!(killers + town > 0);
        let mut session = seated((killers + town) as usize, seed);
        select(&mut session, [town, 0, killers, 0]);
        session.assign_roles();
        start(&mut session);
        prop_assert_eq!(session.phase(), Phase::Day);

        session.advance_phase();

        let expected = if killers == 0 {
            Some(Side::Town)
        } else if killers >= town {
            Some(Side::Killers)
        } else {
            None
        };
        prop_assert_eq!(session.winner(), expected);
        prop_assert_eq!(session.phase() == Phase::GameOver, expected.is_some());
        prop_assert_eq!(session.history().len(), usize::from(expected.is_some()));
    }

    /// Without eliminations a balanced game alternates forever.
    #[test]
    fn prop_alternation_counts_rounds(
        steps in 0u32..30,
        seed in any::<u64>(),
    ) {
        let mut session = seated(5, seed);
        select(&mut session, [3, 1, 0, 1]);
        session.assign_roles();
        start(&mut session);

        for _ in 0..steps {
            session.advance_phase();
        }

        prop_assert_ne!(session.phase(), Phase::GameOver);
        prop_assert_eq!(session.round(), 1 + steps / 2);
        prop_assert_eq!(session.is_day(), steps % 2 == 0);
        prop_assert_eq!(
            session.phase(),
            if steps % 2 == 0 { Phase::Day } else { Phase::Night }
        );
        prop_assert!(session.history().is_empty());
    }
}
