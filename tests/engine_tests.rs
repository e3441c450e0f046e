//! Game engine integration tests.

use std::sync::Arc;
use std::thread;

use question_tree::core::{candidate_set, CandidateId, CandidateSet, QuestionId, QuestionSpec};
use question_tree::engine::GameEngine;
use question_tree::tree::{build, Outcome};
use question_tree::Error;

fn question(id: u32, text: &str, yes: &[u32], no: &[u32]) -> QuestionSpec {
    QuestionSpec::new(
        QuestionId::new(id),
        text,
        candidate_set(yes.iter().copied()),
        candidate_set(no.iter().copied()),
    )
}

fn new_game(universe: &CandidateSet, questions: &[QuestionSpec]) -> GameEngine {
    GameEngine::new(Arc::new(build(universe, questions)), universe.clone())
}

// =============================================================================
// Engine / Builder Agreement
// =============================================================================

#[test]
fn test_yes_matches_builder_subtree() {
    let universe = candidate_set([1, 2, 3, 4]);
    let questions = vec![question(1, "Is it a mammal?", &[1, 2], &[3, 4])];
    let mut game = new_game(&universe, &questions);

    game.submit_answer(true).unwrap();

    assert_eq!(game.remaining(), &candidate_set([1, 2]));
    // Same leaf the builder makes for {1, 2} with no questions left.
    let expected = build(&candidate_set([1, 2]), &[]);
    assert_eq!(game.current_outcome(), expected.root_node().outcome());
    assert_eq!(game.current_outcome(), Some(Outcome::Exhausted));
}

#[test]
fn test_remaining_is_superset_of_identified() {
    let universe = candidate_set(1..=6);
    let questions = vec![
        question(1, "Red?", &[1, 2, 3], &[4, 5]),
        question(2, "Round?", &[1, 4], &[2, 5]),
        question(3, "Small?", &[2], &[3]),
    ];

    for answers in [[true, true], [true, false], [false, true], [false, false]] {
        let mut game = new_game(&universe, &questions);
        for answer in answers {
            if game.is_finished() {
                break;
            }
            game.submit_answer(answer).unwrap();
        }

        if let Some(Outcome::Identified(id)) = game.current_outcome() {
            assert!(game.remaining().contains(&id), "{:?} lost {}", answers, id);
        }
    }
}

#[test]
fn test_full_game() {
    let universe = candidate_set(1..=4);
    let questions = vec![
        question(1, "Does your character wear glasses?", &[1, 2], &[3, 4]),
        question(2, "Is your character a wizard?", &[1, 3], &[2, 4]),
    ];
    let mut game = new_game(&universe, &questions);

    assert_eq!(game.current_question(), Some("Does your character wear glasses?"));
    game.submit_answer(false).unwrap();
    assert_eq!(game.current_question(), Some("Is your character a wizard?"));
    game.submit_answer(true).unwrap();

    assert_eq!(game.current_question(), None);
    assert_eq!(game.current_outcome(), Some(Outcome::Identified(CandidateId(3))));
    assert_eq!(game.sole_candidate(), Some(CandidateId(3)));
    assert_eq!(game.history().len(), 2);
}

// =============================================================================
// Reads and Rejections
// =============================================================================

#[test]
fn test_reads_are_idempotent() {
    let universe = candidate_set(1..=4);
    let questions = vec![question(1, "Tall?", &[1, 2], &[3, 4])];
    let game = new_game(&universe, &questions);

    let cursor = game.cursor();
    for _ in 0..3 {
        assert_eq!(game.current_question(), Some("Tall?"));
        assert_eq!(game.current_outcome(), None);
    }
    assert_eq!(game.cursor(), cursor);
    assert_eq!(game.remaining(), &universe);
}

#[test]
fn test_terminal_state_rejects_answers() {
    let universe = candidate_set([1, 2]);
    let questions = vec![question(1, "Tall?", &[1], &[2])];
    let mut game = new_game(&universe, &questions);
    game.submit_answer(false).unwrap();

    for answer in [true, false] {
        let err = game.submit_answer(answer).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
    }

    assert_eq!(game.remaining(), &candidate_set([2]));
    assert_eq!(game.current_outcome(), Some(Outcome::Identified(CandidateId(2))));
}

#[test]
fn test_no_match_path() {
    // The bank says everyone answers "no"; a "yes" leaves nobody.
    let universe = candidate_set([1, 2]);
    let questions = vec![question(1, "Blue?", &[], &[1, 2])];
    let mut game = new_game(&universe, &questions);

    game.submit_answer(true).unwrap();

    assert!(game.remaining().is_empty());
    assert_eq!(game.current_outcome(), Some(Outcome::NoMatch));
}

#[test]
fn test_overlapping_sets_drop_identified_candidate() {
    // Candidate 0 claims both answers. The builder keeps it on the no side,
    // while answering no subtracts every yes id.
    let universe = candidate_set([0, 1]);
    let questions = vec![question(1, "Both?", &[0], &[0])];
    let mut game = new_game(&universe, &questions);

    game.submit_answer(false).unwrap();

    assert_eq!(game.current_outcome(), Some(Outcome::Identified(CandidateId(0))));
    assert_eq!(game.remaining(), &candidate_set([1]));
}

// =============================================================================
// Shared Trees
// =============================================================================

#[test]
fn test_sessions_share_tree_across_threads() {
    let universe = candidate_set(1..=4);
    let questions = vec![
        question(1, "A?", &[1, 2], &[3, 4]),
        question(2, "B?", &[1, 3], &[2, 4]),
    ];
    let tree = Arc::new(build(&universe, &questions));

    let handles: Vec<_> = [(true, true), (true, false), (false, true), (false, false)]
        .into_iter()
        .map(|(first, second)| {
            let mut game = GameEngine::new(Arc::clone(&tree), universe.clone());
            thread::spawn(move || {
                game.submit_answer(first).unwrap();
                game.submit_answer(second).unwrap();
                game.current_outcome()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        outcomes,
        vec![
            Some(Outcome::Identified(CandidateId(1))),
            Some(Outcome::Identified(CandidateId(2))),
            Some(Outcome::Identified(CandidateId(3))),
            Some(Outcome::Identified(CandidateId(4))),
        ]
    );
}
