//! Game integration tests.

extern crate alloc;

use alloc::sync::Arc;
use std::io;
use std::sync::Mutex;

use truco::ranking;
use truco::{
    Action, ActionError, ActionOutcome, BetError, BetState, Card, DrawError, Game, GameOptions,
    Hand, PendingRaise, Phase, PlayError, Player, Rank, RoundError, RoundResult, Suit,
    fallback_for,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

const SIX_OF_HEARTS: Card = card(Rank::Six, Suit::Hearts);

/// Replaces both hands and the diva of a started round.
fn stage(game: &Game, one: &[Card], two: &[Card], diva: Card) {
    let mut state = game.state.lock();
    state.seat_mut(Player::One).hand = Hand::from_cards(one.to_vec());
    state.seat_mut(Player::Two).hand = Hand::from_cards(two.to_vec());
    state.diva = Some(diva);
    state.manilhas = ranking::manilhas(diva).to_vec();
}

fn started_game(seed: u64) -> Game {
    let game = Game::new(GameOptions::default(), seed);
    game.start_round().unwrap();
    game
}

/// Collects formatted `tracing` output.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn last_log(game: &Game) -> String {
    game.log().last().cloned().unwrap_or_default()
}

/// Player one wins two straight tricks with manilhas.
fn win_round_for_player_one(game: &Game) -> RoundResult {
    game.start_round().unwrap();
    stage(
        game,
        &[
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Four, Suit::Spades),
        ],
        &[
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Five, Suit::Spades),
        ],
        SIX_OF_HEARTS,
    );

    let first = game
        .play_card(card(Rank::Seven, Suit::Clubs).id(), Player::One)
        .unwrap();
    assert!(first.trick.is_none());
    let first = game
        .play_card(card(Rank::Four, Suit::Diamonds).id(), Player::Two)
        .unwrap();
    assert_eq!(first.trick.unwrap().winner, Player::One);
    assert!(first.round.is_none());

    game.play_card(card(Rank::Seven, Suit::Hearts).id(), Player::One)
        .unwrap();
    game.play_card(card(Rank::Five, Suit::Diamonds).id(), Player::Two)
        .unwrap()
        .round
        .unwrap()
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(5)
        .with_tricks_to_win(3)
        .with_winning_score(24);

    assert_eq!(options.hand_size, 5);
    assert_eq!(options.tricks_to_win, 3);
    assert_eq!(options.winning_score, 24);
    assert!(options.hand_is_decisive());
    assert!(!GameOptions::default().with_hand_size(2).hand_is_decisive());
}

#[test]
fn new_game_is_idle() {
    let game = Game::new(GameOptions::default(), 1);
    assert!(!game.is_started());
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.hand(Player::One).is_empty());
    assert_eq!(game.diva(), None);
    assert_eq!(game.bet(), BetState::default());
    assert!(game.log().is_empty());
    assert_eq!(game.revision(), 0);
}

#[test]
fn start_round_deals_hands_and_diva() {
    let game = started_game(7);
    let state = game.snapshot();

    assert!(state.is_started);
    assert_eq!(state.phase(), Phase::AwaitingPlays);
    assert_eq!(state.trick_number, 1);
    assert_eq!(state.deck.remaining(), 40 - 7);

    let diva = state.diva.unwrap();
    assert!(state.deck.is_drawn(diva));
    assert_eq!(state.deck.owner(diva), None);
    assert_eq!(state.manilhas, ranking::manilhas(diva).to_vec());

    for player in Player::BOTH {
        let hand = &state.seat(player).hand;
        assert_eq!(hand.len(), 3);
        for card in hand.cards() {
            assert_eq!(state.deck.owner(*card), Some(player));
            assert_ne!(*card, diva);
        }
    }

    let log = state.log.entries();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], "New round started");
    assert!(log[1].starts_with("Player One was dealt "));
    assert!(log[2].starts_with("Player Two was dealt "));
    assert!(log[3].starts_with(&format!("The diva is {diva}")));
}

#[test]
fn round_start_is_traced() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        started_game(29);
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("deck rebuilt and dealt remaining=33"));
    assert!(output.contains("New round started"));
}

#[test]
fn deals_are_reproducible_from_the_seed() {
    let a = started_game(42).snapshot();
    let b = started_game(42).snapshot();
    assert_eq!(a.seats, b.seats);
    assert_eq!(a.diva, b.diva);
}

#[test]
fn start_round_rejects_unworkable_options() {
    let game = Game::new(GameOptions::default().with_hand_size(2), 1);
    assert_eq!(game.start_round().unwrap_err(), RoundError::HandTooSmall);
    assert!(!game.is_started());
    assert!(last_log(&game).starts_with("Cannot start a round"));

    let game = Game::new(GameOptions::default().with_hand_size(20), 1);
    assert_eq!(
        game.start_round().unwrap_err(),
        RoundError::Deal(DrawError::InsufficientCards {
            requested: 41,
            remaining: 40,
        })
    );
    assert!(!game.is_started());
    assert!(game.hand(Player::One).is_empty());

    let game = Game::new(GameOptions::default().with_hand_size(usize::MAX), 1);
    assert_eq!(
        game.start_round().unwrap_err(),
        RoundError::Deal(DrawError::InsufficientCards {
            requested: usize::MAX,
            remaining: 40,
        })
    );
    assert!(!game.is_started());
    assert!(last_log(&game).starts_with("Cannot start a round"));
}

#[test]
fn trick_goes_to_stronger_card_in_either_play_order() {
    let king = card(Rank::King, Suit::Clubs);
    let manilha = card(Rank::Seven, Suit::Diamonds);

    for player_one_first in [true, false] {
        let game = started_game(5);
        stage(
            &game,
            &[king, card(Rank::Four, Suit::Diamonds)],
            &[manilha, card(Rank::Three, Suit::Clubs)],
            SIX_OF_HEARTS,
        );

        let outcome = if player_one_first {
            game.play_card(king.id(), Player::One).unwrap();
            assert_eq!(
                game.phase(),
                Phase::AwaitingOtherSide {
                    waiting_on: Player::Two
                }
            );
            game.play_card(manilha.id(), Player::Two).unwrap()
        } else {
            game.play_card(manilha.id(), Player::Two).unwrap();
            assert_eq!(
                game.phase(),
                Phase::AwaitingOtherSide {
                    waiting_on: Player::One
                }
            );
            game.play_card(king.id(), Player::One).unwrap()
        };

        let trick = outcome.trick.unwrap();
        assert_eq!(trick.trick_number, 1);
        assert_eq!(trick.player_one_card, king);
        assert_eq!(trick.player_two_card, manilha);
        assert_eq!(trick.winner, Player::Two);

        assert_eq!(game.trick_score(Player::One), 0);
        assert_eq!(game.trick_score(Player::Two), 1);
        assert_eq!(game.trick_number(), 2);
        assert_eq!(game.stack(Player::One), None);
        assert_eq!(game.stack(Player::Two), None);
        assert_eq!(game.phase(), Phase::AwaitingPlays);
        assert!(!game.hand(Player::One).contains(king.id()));
    }
}

#[test]
fn second_play_in_a_trick_is_rejected() {
    let game = started_game(3);
    stage(
        &game,
        &[card(Rank::Ace, Suit::Spades), card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Jack, Suit::Clubs)],
        SIX_OF_HEARTS,
    );

    game.play_card(card(Rank::Ace, Suit::Spades).id(), Player::One)
        .unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.play_card(card(Rank::Two, Suit::Hearts).id(), Player::One)
            .unwrap_err(),
        PlayError::AlreadyPlayed
    );

    let after = game.snapshot();
    assert_eq!(after.seats, before.seats);
    assert_eq!(after.log.len(), before.log.len() + 1);
    assert_eq!(
        last_log(&game),
        "Player One cannot play a card: a card was already played this trick"
    );
}

#[test]
fn play_rejections() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.play_card(1, Player::One).unwrap_err(),
        PlayError::RoundNotStarted
    );
    assert_eq!(game.log().len(), 1);

    let game = started_game(1);
    stage(
        &game,
        &[card(Rank::Ace, Suit::Spades)],
        &[card(Rank::Jack, Suit::Clubs)],
        SIX_OF_HEARTS,
    );
    let jack = card(Rank::Jack, Suit::Clubs).id();
    assert_eq!(
        game.play_card(jack, Player::One).unwrap_err(),
        PlayError::CardNotInHand(jack)
    );
    assert_eq!(game.hand(Player::Two).len(), 1);
}

#[test]
fn two_straight_tricks_win_the_round() {
    let game = Game::new(GameOptions::default(), 11);
    let result = win_round_for_player_one(&game);

    assert_eq!(
        result,
        RoundResult {
            winner: Player::One,
            points: 1,
            folded: false,
            scores: [1, 0],
            game_winner: None,
        }
    );
    assert!(!game.is_started());
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.round_score(Player::One), 1);
    assert_eq!(game.trick_score(Player::One), 0);
    assert_eq!(game.trick_number(), 1);
    assert_eq!(last_log(&game), "Player One wins the round and scores 1");
    assert_eq!(
        game.play_card(card(Rank::Four, Suit::Spades).id(), Player::One)
            .unwrap_err(),
        PlayError::RoundNotStarted
    );
}

#[test]
fn split_tricks_go_to_a_third() {
    let game = started_game(13);
    stage(
        &game,
        &[
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Seven, Suit::Hearts),
        ],
        &[
            card(Rank::Five, Suit::Diamonds),
            card(Rank::King, Suit::Spades),
            card(Rank::Ace, Suit::Diamonds),
        ],
        SIX_OF_HEARTS,
    );

    let plays = [
        (Rank::Seven, Suit::Clubs, Rank::Five, Suit::Diamonds),
        (Rank::Four, Suit::Diamonds, Rank::King, Suit::Spades),
    ];
    for (one_rank, one_suit, two_rank, two_suit) in plays {
        game.play_card(card(one_rank, one_suit).id(), Player::One)
            .unwrap();
        let outcome = game
            .play_card(card(two_rank, two_suit).id(), Player::Two)
            .unwrap();
        assert!(outcome.round.is_none());
    }
    assert_eq!(game.trick_score(Player::One), 1);
    assert_eq!(game.trick_score(Player::Two), 1);
    assert_eq!(game.trick_number(), 3);

    game.play_card(card(Rank::Ace, Suit::Diamonds).id(), Player::Two)
        .unwrap();
    let outcome = game
        .play_card(card(Rank::Seven, Suit::Hearts).id(), Player::One)
        .unwrap();
    assert_eq!(outcome.trick.unwrap().trick_number, 3);
    assert_eq!(outcome.round.unwrap().winner, Player::One);
    assert_eq!(game.round_score(Player::One), 1);
}

#[test]
fn pending_raise_blocks_play_until_accepted() {
    let game = started_game(21);
    stage(
        &game,
        &[card(Rank::Ace, Suit::Spades)],
        &[card(Rank::Jack, Suit::Clubs)],
        SIX_OF_HEARTS,
    );

    game.raise(3, Player::One).unwrap();
    assert_eq!(
        game.phase(),
        Phase::AwaitingResponse {
            responder: Player::Two
        }
    );
    assert_eq!(
        game.bet().pending,
        Some(PendingRaise {
            value: 3,
            raiser: Player::One,
        })
    );

    for (card_id, player) in [
        (card(Rank::Ace, Suit::Spades).id(), Player::One),
        (card(Rank::Jack, Suit::Clubs).id(), Player::Two),
    ] {
        assert_eq!(
            game.play_card(card_id, player).unwrap_err(),
            PlayError::RaisePending(3)
        );
    }
    assert_eq!(
        last_log(&game),
        "Player Two cannot play a card: a raise to 3 is waiting for an answer"
    );

    assert_eq!(game.accept(Player::Two).unwrap(), 3);
    let bet = game.bet();
    assert_eq!(bet.confirmed_value, 3);
    assert_eq!(bet.confirmed_bettor, Some(Player::One));
    assert_eq!(bet.pending, None);

    game.play_card(card(Rank::Ace, Suit::Spades).id(), Player::One)
        .unwrap();
}

#[test]
fn raises_climb_the_ladder_one_rung_at_a_time() {
    let game = started_game(8);

    assert_eq!(
        game.raise(6, Player::One).unwrap_err(),
        BetError::NotNextRung {
            expected: 3,
            requested: 6,
        }
    );
    game.raise(3, Player::One).unwrap();
    assert_eq!(
        game.raise(6, Player::One).unwrap_err(),
        BetError::AlreadyHoldsBet
    );
    assert_eq!(game.accept(Player::One).unwrap_err(), BetError::OwnRaise);
    game.accept(Player::Two).unwrap();

    // The accepted raise still belongs to player one.
    assert_eq!(
        game.raise(6, Player::One).unwrap_err(),
        BetError::AlreadyHoldsBet
    );
    game.raise(6, Player::Two).unwrap();
    assert_eq!(game.bet().confirmed_value, fallback_for(6));
    assert_eq!(game.accept(Player::One).unwrap(), 6);
    assert_eq!(game.bet().confirmed_value, 6);

    game.raise(9, Player::One).unwrap();
    game.raise(12, Player::Two).unwrap();
    let bet = game.bet();
    assert_eq!(bet.confirmed_value, 9);
    assert_eq!(bet.confirmed_bettor, Some(Player::One));
    assert_eq!(
        game.raise(12, Player::One).unwrap_err(),
        BetError::LadderExhausted
    );
    assert_eq!(game.accept(Player::One).unwrap(), 12);
    assert_eq!(
        game.accept(Player::Two).unwrap_err(),
        BetError::NoPendingRaise
    );
}

#[test]
fn fallback_is_the_rung_below() {
    assert_eq!(fallback_for(3), 1);
    assert_eq!(fallback_for(6), 3);
    assert_eq!(fallback_for(9), 6);
    assert_eq!(fallback_for(12), 9);
}

#[test]
fn bet_actions_need_a_round() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.raise(3, Player::One).unwrap_err(),
        BetError::RoundNotStarted
    );
    assert_eq!(
        game.accept(Player::Two).unwrap_err(),
        BetError::RoundNotStarted
    );
    assert_eq!(
        game.fold(Player::Two).unwrap_err(),
        BetError::RoundNotStarted
    );
    assert_eq!(game.log().len(), 3);
    assert_eq!(
        last_log(&game),
        "Player Two cannot fold: no round is in progress"
    );
}

#[test]
fn fold_awards_the_confirmed_stake_to_the_opponent() {
    let game = started_game(4);
    game.raise(3, Player::One).unwrap();
    game.accept(Player::Two).unwrap();
    game.raise(6, Player::Two).unwrap();

    let result = game.fold(Player::One).unwrap();
    assert_eq!(
        result,
        RoundResult {
            winner: Player::Two,
            points: 3,
            folded: true,
            scores: [0, 3],
            game_winner: None,
        }
    );
    assert!(!game.is_started());
    assert_eq!(game.bet(), BetState::default());
    assert_eq!(game.round_score(Player::Two), 3);
    assert_eq!(game.trick_score(Player::Two), 0);
}

#[test]
fn countering_a_raise_accepts_it() {
    let game = started_game(6);
    game.raise(3, Player::One).unwrap();
    game.raise(6, Player::Two).unwrap();

    let result = game.fold(Player::One).unwrap();
    assert_eq!(result.winner, Player::Two);
    assert_eq!(result.points, 3);
}

#[test]
fn fold_drops_cards_on_the_table() {
    let game = started_game(2);
    stage(
        &game,
        &[card(Rank::Ace, Suit::Spades)],
        &[card(Rank::Jack, Suit::Clubs)],
        SIX_OF_HEARTS,
    );
    game.play_card(card(Rank::Ace, Suit::Spades).id(), Player::One)
        .unwrap();

    let result = game.fold(Player::Two).unwrap();
    assert_eq!(result.winner, Player::One);
    assert_eq!(result.points, 1);
    assert_eq!(game.stack(Player::One), None);
}

#[test]
fn twelve_points_end_the_game() {
    let game = Game::new(GameOptions::default(), 17);

    for round in 1..12 {
        let result = win_round_for_player_one(&game);
        assert_eq!(result.scores, [round, 0]);
        assert_eq!(result.game_winner, None);
    }

    let result = win_round_for_player_one(&game);
    assert_eq!(result.game_winner, Some(Player::One));
    assert_eq!(result.scores, [0, 0]);
    assert_eq!(game.round_score(Player::One), 0);
    assert_eq!(last_log(&game), "Player One wins the game with 12 points");
}

#[test]
fn doze_round_ends_the_game_at_once() {
    let game = started_game(30);
    game.raise(3, Player::One).unwrap();
    game.raise(6, Player::Two).unwrap();
    game.raise(9, Player::One).unwrap();
    game.raise(12, Player::Two).unwrap();
    assert_eq!(game.accept(Player::One).unwrap(), 12);

    let result = game.fold(Player::One).unwrap();
    assert_eq!(result.points, 12);
    assert_eq!(result.game_winner, Some(Player::Two));
    assert_eq!(result.scores, [0, 0]);
}

#[test]
fn reset_clears_everything_but_the_revision() {
    let game = Game::new(GameOptions::default(), 10);
    win_round_for_player_one(&game);
    game.start_round().unwrap();
    game.raise(3, Player::Two).unwrap();
    let revision = game.revision();

    game.reset_game();
    let state = game.snapshot();
    assert!(!state.is_started);
    assert_eq!(state.revision, revision + 1);
    assert_eq!(state.round_scores(), [0, 0]);
    assert_eq!(state.bet, BetState::default());
    assert_eq!(state.diva, None);
    assert!(state.manilhas.is_empty());
    assert!(state.log.is_empty());
    assert_eq!(state.deck.remaining(), 40);
    assert!(state.seats.iter().all(|seat| seat.hand.is_empty()));
}

#[test]
fn revision_moves_on_every_change() {
    let game = Game::new(GameOptions::default(), 12);
    game.start_round().unwrap();
    assert_eq!(game.revision(), 1);

    let _ = game.accept(Player::One);
    assert_eq!(game.revision(), 2);

    game.raise(3, Player::One).unwrap();
    assert_eq!(game.revision(), 3);
}

#[test]
fn actions_arrive_as_relay_events() {
    assert_eq!(
        Action::from_event("play card", &[16, 1]).unwrap(),
        Action::PlayCard {
            card_id: 16,
            player: Player::One,
        }
    );
    assert_eq!(
        Action::from_event("bet", &[3, 2]).unwrap(),
        Action::Raise {
            value: 3,
            player: Player::Two,
        }
    );
    assert_eq!(
        Action::from_event("fold", &[3]).unwrap_err(),
        ActionError::UnknownPlayer(3)
    );
    assert_eq!(
        Action::from_event("accept", &[]).unwrap_err(),
        ActionError::MissingArgument
    );
    assert_eq!(
        Action::from_event("shuffle", &[]).unwrap_err(),
        ActionError::UnknownEvent
    );
    assert_eq!(Action::StartRound.event_name(), "new round");
}

#[test]
fn apply_dispatches_each_action() {
    let game = Game::new(GameOptions::default(), 19);
    assert_eq!(
        game.apply(Action::StartRound).unwrap(),
        ActionOutcome::RoundStarted
    );

    let truco = Action::Raise {
        value: 3,
        player: Player::Two,
    };
    assert_eq!(
        game.apply(truco).unwrap(),
        ActionOutcome::Raised { value: 3 }
    );

    let own_accept = Action::Accept {
        player: Player::Two,
    };
    assert_eq!(
        game.apply(own_accept).unwrap_err(),
        ActionError::Bet(BetError::OwnRaise)
    );

    let accept = Action::Accept {
        player: Player::One,
    };
    assert_eq!(
        game.apply(accept).unwrap(),
        ActionOutcome::Accepted { value: 3 }
    );

    let card_id = game.hand(Player::One).cards()[0].id();
    let play = Action::PlayCard {
        card_id,
        player: Player::One,
    };
    let ActionOutcome::Played(outcome) = game.apply(play).unwrap() else {
        panic!("expected a played card");
    };
    assert_eq!(outcome.card.id(), card_id);

    let fold = Action::Fold {
        player: Player::One,
    };
    let ActionOutcome::Folded(result) = game.apply(fold).unwrap() else {
        panic!("expected a fold");
    };
    assert_eq!(result.winner, Player::Two);
    assert_eq!(result.points, 3);

    assert_eq!(
        game.apply(Action::ResetGame).unwrap(),
        ActionOutcome::GameReset
    );
    assert_eq!(game.round_score(Player::Two), 0);
}

#[test]
fn simultaneous_raises_are_serialized() {
    let game = started_game(23);
    let table = &game;

    let results: Vec<Result<(), BetError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = Player::BOTH
            .into_iter()
            .map(|player| scope.spawn(move || table.raise(3, player)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    let raiser = game.bet().pending.unwrap().raiser;
    let loser = Player::BOTH
        .into_iter()
        .position(|player| player != raiser)
        .unwrap();
    assert_eq!(
        results[loser],
        Err(BetError::NotNextRung {
            expected: 6,
            requested: 3,
        })
    );
}
