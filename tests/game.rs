//! Game integration tests.

use std::collections::HashSet;

use hilo::{
    AdvanceError, Card, Controls, DECK_SIZE, Deck, DeckError, Direction, DrawError, Game,
    GameOptions, GuessError, InputAdapter, Keymap, Message, ParseCardError, Phase, Rank, Suit,
    TieRule,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn tie_game(options: GameOptions) -> Game {
    Game::with_deck(
        options,
        vec![
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Seven),
        ],
        5,
    )
    .unwrap()
}

/// Plays one round per step with the given direction picker.
fn play_out(game: &mut Game, mut pick: impl FnMut(&Game) -> Direction) -> Vec<Card> {
    let mut seen = vec![game.current_card()];
    while !game.is_finished() {
        let outcome = game.guess(pick(game)).unwrap();
        seen.push(outcome.drawn);
        game.advance().unwrap();
    }
    seen
}

#[test]
fn new_game_draws_one_card() {
    let game = Game::new(GameOptions::default(), 42);

    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
    assert!(!game.deck().contains(&game.current_card()));
    assert_eq!(game.pending_card(), None);
    assert_eq!(game.last_guess_correct(), None);
    assert!(!game.is_answered());
    assert!(!game.is_finished());
    assert_eq!(game.phase(), Phase::Guessing);
    assert_eq!(game.wins(), 0);
    assert_eq!(game.losses(), 0);
}

#[test]
fn same_seed_same_game() {
    let mut a = Game::new(GameOptions::default(), 9);
    let mut b = Game::new(GameOptions::default(), 9);

    let seen_a = play_out(&mut a, |_| Direction::Higher);
    let seen_b = play_out(&mut b, |_| Direction::Higher);
    assert_eq!(seen_a, seen_b);
    assert_eq!(a.score(), b.score());
}

#[test]
fn guess_records_outcome() {
    let mut game = Game::new(GameOptions::default(), 3);
    let current = game.current_card();

    let outcome = game.guess(Direction::Lower).unwrap();
    assert_eq!(outcome.current, current);
    assert_eq!(outcome.direction, Direction::Lower);
    assert_eq!(outcome.correct, outcome.drawn.value() <= current.value());
    assert_eq!(game.pending_card(), Some(outcome.drawn));
    assert_eq!(game.last_guess_correct(), Some(outcome.correct));
    assert!(game.is_answered());
    assert_eq!(game.phase(), Phase::Answered);
    assert_eq!(game.score().rounds(), 1);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2);
}

#[test]
fn advance_moves_drawn_card_to_current() {
    let mut game = Game::new(GameOptions::default(), 3);
    let outcome = game.guess(Direction::Higher).unwrap();

    assert_eq!(game.advance(), Ok(Phase::Guessing));
    assert_eq!(game.current_card(), outcome.drawn);
    assert_eq!(game.pending_card(), None);
    assert_eq!(game.last_guess_correct(), None);
    assert!(!game.is_answered());
}

#[test]
fn tie_resolves_in_favor_of_lower() {
    let mut game = tie_game(GameOptions::default());
    let outcome = game.guess(Direction::Higher).unwrap();
    assert!(!outcome.correct);
    assert_eq!(game.losses(), 1);

    let mut game = tie_game(GameOptions::default());
    let outcome = game.guess(Direction::Lower).unwrap();
    assert!(outcome.correct);
    assert_eq!(game.wins(), 1);
}

#[test]
fn tie_rule_is_configurable() {
    let higher_wins = GameOptions::default().with_tie_rule(TieRule::HigherWins);
    assert!(tie_game(higher_wins).guess(Direction::Higher).unwrap().correct);
    assert!(!tie_game(higher_wins).guess(Direction::Lower).unwrap().correct);

    let both_lose = GameOptions::default().with_tie_rule(TieRule::BothLose);
    assert!(!tie_game(both_lose).guess(Direction::Higher).unwrap().correct);
    assert!(!tie_game(both_lose).guess(Direction::Lower).unwrap().correct);
}

#[test]
fn king_never_wins_higher_and_ace_wins_lower_only_on_ace() {
    for seed in 0..20 {
        let mut game = Game::new(GameOptions::default(), seed);
        while !game.is_finished() {
            let current = game.current_card();
            let direction = if seed % 2 == 0 {
                Direction::Higher
            } else {
                Direction::Lower
            };
            let outcome = game.guess(direction).unwrap();

            if current.rank == Rank::King && direction == Direction::Higher {
                assert!(!outcome.correct);
            }
            if current.rank == Rank::Ace && direction == Direction::Lower {
                assert_eq!(outcome.correct, outcome.drawn.rank == Rank::Ace);
            }
            game.advance().unwrap();
        }
    }
}

#[test]
fn suit_does_not_affect_outcome() {
    let deck = vec![
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Diamonds, Rank::Three),
    ];
    for seed in 0..8 {
        let mut game = Game::with_deck(GameOptions::default(), deck.clone(), seed).unwrap();
        let current = game.current_card();
        let outcome = game.guess(Direction::Higher).unwrap();
        assert_eq!(outcome.correct, current.rank == Rank::Three);
    }
}

#[test]
fn full_game_runs_fifty_one_rounds() {
    let mut game = Game::new(GameOptions::default(), 11);

    for round in 1..DECK_SIZE {
        let direction = if round % 2 == 0 {
            Direction::Higher
        } else {
            Direction::Lower
        };
        game.guess(direction).unwrap();
        assert_eq!(game.score().rounds() as usize, round);

        if round == DECK_SIZE - 1 {
            assert!(game.is_deck_empty());
            assert_eq!(
                game.view().controls,
                Controls::Progress { last_round: true }
            );
            assert_eq!(game.advance(), Ok(Phase::Finished));
        } else {
            assert_eq!(
                game.view().controls,
                Controls::Progress { last_round: false }
            );
            assert_eq!(game.advance(), Ok(Phase::Guessing));
        }
    }

    assert!(game.is_finished());
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.wins() + game.losses(), 51);
    assert!(game.pending_card().is_some());

    assert_eq!(game.guess(Direction::Higher), Err(GuessError::InvalidState));
    assert_eq!(game.guess(Direction::Lower), Err(GuessError::InvalidState));
    assert_eq!(game.advance(), Err(AdvanceError::InvalidState));
    assert_eq!(game.wins() + game.losses(), 51);
}

#[test]
fn every_card_is_seen_exactly_once() {
    let mut game = Game::new(GameOptions::default(), 1234);
    let seen = play_out(&mut game, |g| {
        if g.current_card().value() >= 7 {
            Direction::Lower
        } else {
            Direction::Higher
        }
    });

    assert_eq!(seen.len(), DECK_SIZE);
    let unique: HashSet<Card> = seen.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn double_guess_is_rejected_without_change() {
    let mut game = Game::new(GameOptions::default(), 21);
    game.guess(Direction::Higher).unwrap();

    let round = *game.round();
    let score = game.score();
    let deck = game.deck().clone();

    assert_eq!(game.guess(Direction::Lower), Err(GuessError::InvalidState));
    assert_eq!(*game.round(), round);
    assert_eq!(game.score(), score);
    assert_eq!(*game.deck(), deck);
}

#[test]
fn advance_before_guess_is_rejected() {
    let mut game = Game::new(GameOptions::default(), 21);
    let round = *game.round();

    assert_eq!(game.advance(), Err(AdvanceError::InvalidState));
    assert_eq!(*game.round(), round);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn two_card_deck_finishes_after_one_round() {
    let mut game = tie_game(GameOptions::default());
    assert_eq!(game.cards_remaining(), 1);

    game.guess(Direction::Lower).unwrap();
    assert!(game.is_deck_empty());
    assert_eq!(game.advance(), Ok(Phase::Finished));
    assert_eq!(game.guess(Direction::Lower), Err(GuessError::InvalidState));
}

#[test]
fn custom_deck_errors() {
    let options = GameOptions::default();
    let ace = card(Suit::Spades, Rank::Ace);

    assert_eq!(
        Game::with_deck(options, Vec::new(), 1).unwrap_err(),
        DeckError::TooFewCards { len: 0 }
    );
    assert_eq!(
        Game::with_deck(options, vec![ace], 1).unwrap_err(),
        DeckError::TooFewCards { len: 1 }
    );
    let duplicated = vec![ace, card(Suit::Clubs, Rank::Two), ace];
    assert_eq!(
        Game::with_deck(options, duplicated, 1).unwrap_err(),
        DeckError::DuplicateCard(ace)
    );
}

#[test]
fn reset_starts_a_fresh_session() {
    let options = GameOptions::default().with_tie_rule(TieRule::BothLose);
    let mut game = Game::new(options, 5);
    game.guess(Direction::Higher).unwrap();
    game.advance().unwrap();
    game.guess(Direction::Higher).unwrap();

    game.reset(6);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
    assert_eq!(game.score().rounds(), 0);
    assert_eq!(game.phase(), Phase::Guessing);
    assert_eq!(game.options().tie_rule, TieRule::BothLose);
}

#[test]
fn view_follows_the_round() {
    let mut game = tie_game(GameOptions::default());

    let view = game.view();
    assert_eq!(view.message, Message::Prompt);
    assert_eq!(view.controls, Controls::Guess);
    assert_eq!(view.controls.labels(), ["HIGH", "LOW"]);
    assert_eq!(view.pending, None);
    assert_eq!(view.message.to_string(), "High and Low?");

    game.guess(Direction::Lower).unwrap();
    let view = game.view();
    assert_eq!(view.message, Message::Win);
    assert_eq!(view.message.to_string(), "Win!");
    assert_eq!(view.controls.labels(), ["FINISH"]);
    assert!(view.pending.is_some());

    game.advance().unwrap();
    let view = game.view();
    assert_eq!(view.message, Message::Finished { wins: 1, losses: 0 });
    assert_eq!(
        view.message.to_string(),
        "Thank you for playing!\nWin: 1 Lose: 0"
    );
    assert_eq!(view.controls, Controls::Hidden);
    assert!(view.controls.labels().is_empty());
}

#[test]
fn view_reports_a_loss() {
    let mut game = tie_game(GameOptions::default());
    game.guess(Direction::Higher).unwrap();

    let view = game.view();
    assert_eq!(view.message, Message::Lose);
    assert_eq!(view.losses, 1);
    assert_eq!(view.wins, 0);
}

#[test]
fn guess_keys_only_work_while_bound() {
    let mut game = Game::new(GameOptions::default(), 8);
    let mut input = InputAdapter::new(game.options().keymap);

    assert_eq!(input.direction_for('h'), None);
    assert!(!input.is_bound());

    {
        let keys = input.bind_guess_keys();
        assert_eq!(keys.direction_for('h'), Some(Direction::Higher));
        assert_eq!(keys.direction_for('l'), Some(Direction::Lower));
        assert_eq!(keys.direction_for('x'), None);
        assert!(keys.handle(&mut game, 'x').is_none());

        let outcome = keys.handle(&mut game, 'l').unwrap().unwrap();
        assert_eq!(outcome.direction, Direction::Lower);
        assert_eq!(
            keys.handle(&mut game, 'h'),
            Some(Err(GuessError::InvalidState))
        );
    }

    assert!(!input.is_bound());
    assert_eq!(input.direction_for('h'), None);
    assert_eq!(input.direction_for('l'), None);
    assert_eq!(game.score().rounds(), 1);
}

#[test]
fn custom_keymap() {
    let keymap = Keymap {
        higher: 'k',
        lower: 'j',
    };
    let options = GameOptions::default().with_keymap(keymap);
    let mut input = InputAdapter::new(options.keymap);

    let keys = input.bind_guess_keys();
    assert_eq!(keys.direction_for('k'), Some(Direction::Higher));
    assert_eq!(keys.direction_for('j'), Some(Direction::Lower));
    assert_eq!(keys.direction_for('h'), None);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "10♦");
    assert_eq!(card(Suit::Hearts, Rank::King).to_string(), "K❤");
    assert_eq!(card(Suit::Clubs, Rank::Seven).to_string(), "7♣");
}

#[test]
fn rank_values_cover_one_through_thirteen() {
    for (index, rank) in Rank::ALL.iter().enumerate() {
        assert_eq!(usize::from(rank.value()), index + 1);
        assert_eq!(Rank::from_value(rank.value()), Some(*rank));
    }
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(14), None);
}

#[test]
fn rank_symbols_round_trip() {
    for rank in Rank::ALL {
        assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
    }
}

#[test]
fn unknown_rank_symbols_are_rejected() {
    for symbol in ["0", "1", "11", "Z", "", "AA", "+5", "05", "010", " 7"] {
        assert_eq!(Rank::from_symbol(symbol), Err(ParseCardError::UnknownRank));
    }
    assert_eq!("+5S".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("05♠".parse::<Card>(), Err(ParseCardError::UnknownRank));
}

#[test]
fn card_parsing() {
    assert_eq!("10♦".parse::<Card>(), Ok(card(Suit::Diamonds, Rank::Ten)));
    assert_eq!("QS".parse::<Card>(), Ok(card(Suit::Spades, Rank::Queen)));
    assert_eq!("a❤".parse::<Card>(), Ok(card(Suit::Hearts, Rank::Ace)));
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("♠".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("7X".parse::<Card>(), Err(ParseCardError::UnknownSuit));
}

#[test]
fn full_deck_has_every_card_once() {
    let deck = Deck::full();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn draw_removes_the_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::full();

    let drawn = deck.draw(&mut rng).unwrap();
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.contains(&drawn));
}

#[test]
fn draw_from_empty_deck_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, Rank::Two)]).unwrap();

    deck.draw(&mut rng).unwrap();
    assert_eq!(deck.draw(&mut rng), Err(DrawError::EmptyDeck));
    assert!(deck.is_empty());
}

#[test]
fn deck_rejects_duplicates() {
    let queen = card(Suit::Hearts, Rank::Queen);
    assert_eq!(
        Deck::from_cards(vec![queen, card(Suit::Spades, Rank::Two), queen]),
        Err(DeckError::DuplicateCard(queen))
    );
}

#[test]
fn strict_comparisons_ignore_tie_rule() {
    let five = card(Suit::Clubs, Rank::Five);
    let nine = card(Suit::Hearts, Rank::Nine);

    for rule in [TieRule::LowerWins, TieRule::HigherWins, TieRule::BothLose] {
        let options = GameOptions::default().with_tie_rule(rule);
        for seed in 0..8 {
            let mut game = Game::with_deck(options, vec![five, nine], seed).unwrap();
            let low_first = game.current_card() == five;
            let outcome = game.guess(Direction::Higher).unwrap();
            assert_eq!(outcome.correct, low_first);

            let mut game = Game::with_deck(options, vec![five, nine], seed).unwrap();
            let outcome = game.guess(Direction::Lower).unwrap();
            assert_eq!(outcome.correct, !low_first);
        }
    }
}
