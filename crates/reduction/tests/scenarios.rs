use std::collections::BTreeMap;

use test_case::test_case;

use nerode_dfa::Automaton;
use nerode_dfa::StateDescriptor;
use nerode_dfa::StateId;
use nerode_dfa::UnknownSymbolError;
use nerode_reduction::minimize;
use nerode_reduction::minimize_reachable;
use nerode_utilities::test_logger;

fn state(id: StateId, is_final: bool, is_start: bool, zero: StateId, one: StateId) -> StateDescriptor<char> {
    StateDescriptor::new(id, is_final, is_start, BTreeMap::from([('0', zero), ('1', one)]))
}

/// Two clusters: the non-final states 0, 1 and 2 are pairwise distinguishable,
/// the final states 3, 4 and 5 only move among each other and accept everything.
fn two_clusters() -> Automaton<char> {
    let states = vec![
        state(0, false, true, 1, 3),
        state(1, false, false, 2, 4),
        state(2, false, false, 2, 2),
        state(3, true, false, 4, 5),
        state(4, true, false, 3, 5),
        state(5, true, false, 5, 4),
    ];

    Automaton::new(['0', '1'], states).unwrap()
}

/// Accepts the words ending with a 1, no two states are equivalent.
fn ends_with_one() -> Automaton<char> {
    let states = vec![state(0, false, true, 0, 1), state(1, true, false, 0, 1)];

    Automaton::new(['0', '1'], states).unwrap()
}

#[test]
fn test_two_clusters_collapse() {
    test_logger();

    let automaton = two_clusters();
    let minimal = minimize(&automaton);

    assert_eq!(minimal.num_of_states(), 4);
    assert_eq!(minimal.final_ids().collect::<Vec<_>>(), vec![3]);
    assert_eq!(minimal.start_id(), 0);
    assert_eq!(minimal.transition(0, &'1'), Some(3));
    assert_eq!(minimal.transition(1, &'1'), Some(3));
    assert_eq!(minimal.transition(3, &'0'), Some(3));

    assert_eq!(automaton.accepts("1".chars()), Ok(true));
    assert_eq!(minimal.accepts("1".chars()), automaton.accepts("1".chars()));

    // The input is left untouched.
    assert_eq!(automaton, two_clusters());
}

#[test_case("" ; "empty word")]
#[test_case("1" ; "single one")]
#[test_case("0" ; "single zero")]
#[test_case("01" ; "zero one")]
#[test_case("001" ; "two zeros then one")]
#[test_case("0011" ; "dead prefix")]
#[test_case("1000010" ; "accepting prefix")]
fn test_two_clusters_language(word: &str) {
    test_logger();

    let automaton = two_clusters();
    let minimal = minimize(&automaton);

    assert_eq!(automaton.accepts(word.chars()), minimal.accepts(word.chars()));
}

#[test]
fn test_minimal_unchanged() {
    test_logger();

    let automaton = ends_with_one();
    let minimal = minimize(&automaton);

    assert_eq!(minimal.num_of_states(), 2);
    assert_eq!(minimal, automaton);
    assert_eq!(minimize_reachable(&automaton), automaton);
}

#[test_case(two_clusters(), false ; "non-final start")]
#[test_case(ends_with_one(), false ; "ends with one")]
#[test_case(Automaton::new(['0', '1'], vec![state(8, true, true, 8, 8)]).unwrap(), true ; "universal")]
fn test_empty_word(automaton: Automaton<char>, expected: bool) {
    test_logger();

    assert_eq!(automaton.accepts("".chars()), Ok(expected));
    assert_eq!(minimize(&automaton).accepts("".chars()), Ok(expected));
}

#[test]
fn test_unknown_symbol_is_an_error() {
    test_logger();

    let automaton = two_clusters();
    let minimal = minimize(&automaton);

    for candidate in [&automaton, &minimal] {
        assert_eq!(
            candidate.accepts("012".chars()),
            Err(UnknownSymbolError {
                symbol: "2".to_string(),
                position: 2
            })
        );
    }
}
