//! Session progress: solving, failed checks and completion.

use equatio::core::{CheckOutcome, EquationId, EquationSet, Location, Session, TermId};
use equatio::types::Side;
use proptest::prelude::*;

const STANDARD_SET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/standard_set.json");

fn standard() -> EquationSet {
    EquationSet::load(STANDARD_SET).unwrap()
}

/// Move every term of `equation` onto the bar (left terms left, right terms right).
fn place_equation(session: &mut Session, equation: &EquationId, swap: bool) {
    let eq = session.set().equation(equation).unwrap().clone();
    let (left, right) = if swap {
        (eq.right(), eq.left())
    } else {
        (eq.left(), eq.right())
    };
    for (side, terms) in [(Side::Left, left), (Side::Right, right)] {
        for (term, slot) in terms.iter().zip(side.slots()) {
            let from = session.location_of(term).unwrap();
            assert!(session.relocate(from, Location::Slot(slot)));
        }
    }
}

fn assert_consistent(session: &Session) {
    let set = session.set();
    for term in set.all_terms() {
        let owner = set.equation_of(term.id()).unwrap().id();
        let location = session.location_of(term.id());
        if session.solved().contains(owner) {
            assert_eq!(location, None, "{} of solved {} still on board", term.id(), owner);
        } else {
            assert!(location.is_some(), "{} lost", term.id());
        }
    }
}

#[test]
fn test_new_session_puts_every_term_in_the_pool() {
    let session = Session::new(standard(), 7);
    assert_eq!(session.pool().remaining(), 16);
    assert_eq!((session.pool().cols(), session.pool().rows()), (4, 4));
    assert!(session.slots().is_empty());
    assert_eq!(session.progress(), (0, 5));
    assert!(!session.is_complete());
}

#[test]
fn test_same_seed_same_board() {
    let a = Session::new(standard(), 99);
    let b = Session::new(standard(), 99);
    assert_eq!(a.pool(), b.pool());
}

#[test]
fn test_ideal_gas_example() {
    let mut session = Session::new(standard(), 1);
    let id = EquationId::from("ideal_gas");

    // {P, n} = {V, R, T}: no match, all five terms back in the pool.
    for (term, slot) in [("P", 0), ("n", 1), ("V", 4), ("R", 5), ("T", 6)] {
        let from = session.location_of(&TermId::from(term)).unwrap();
        assert!(session.relocate(from, Location::Slot(slot)));
    }
    assert_eq!(session.check(), CheckOutcome::NoMatch);
    assert!(session.slots().is_empty());
    assert_eq!(session.pool().remaining(), 16);

    place_equation(&mut session, &id, false);
    assert_eq!(session.check(), CheckOutcome::Matched(id.clone()));
    assert!(session.solved().contains(&id));
    assert_eq!(session.pool().remaining(), 11);
    assert_consistent(&session);
}

#[test]
fn test_terms_of_two_equations_on_one_side_all_return() {
    let mut session = Session::new(standard(), 5);

    // P, V from the ideal gas law's left side; m, a from Newton's right side.
    let placed = [("P", 0), ("m", 1), ("V", 4), ("a", 5)];
    for (term, slot) in placed {
        let from = session.location_of(&TermId::from(term)).unwrap();
        assert!(session.relocate(from, Location::Slot(slot)));
    }

    assert_eq!(session.check(), CheckOutcome::NoMatch);
    assert!(session.slots().is_empty());
    assert_eq!(session.pool().remaining(), 16);
    assert_eq!(session.progress(), (0, 5));
    for (term, _) in placed {
        assert!(
            matches!(session.location_of(&TermId::from(term)), Some(Location::Pool(_))),
            "{} not back in the pool",
            term
        );
    }
    assert_consistent(&session);
}

#[test]
fn test_failed_check_prefers_home_cell_then_first_free() {
    let mut session = Session::new(standard(), 3);
    let f = TermId::from("F");
    let Some(Location::Pool(home)) = session.location_of(&f) else {
        panic!("F should start in the pool");
    };
    assert!(session.relocate(Location::Pool(home), Location::Slot(0)));

    // Occupy F's home cell with another tile.
    let m = TermId::from("m");
    let Some(Location::Pool(m_cell)) = session.location_of(&m) else {
        panic!("m should start in the pool");
    };
    assert!(session.relocate(Location::Pool(m_cell), Location::Pool(home)));
    let t = TermId::from("T");
    let Some(Location::Pool(t_cell)) = session.location_of(&t) else {
        panic!("T should start in the pool");
    };
    assert!(session.relocate(Location::Pool(t_cell), Location::Slot(4)));

    // F is returned first (slot 0) and falls back to the first free cell.
    assert_eq!(session.check(), CheckOutcome::NoMatch);
    let first_free = m_cell.min(t_cell);
    assert_eq!(session.location_of(&f), Some(Location::Pool(first_free)));
    assert_eq!(session.location_of(&m), Some(Location::Pool(home)));
    assert_eq!(session.pool().remaining(), 16);
}

#[test]
fn test_incomplete_check_changes_nothing() {
    let mut session = Session::new(standard(), 3);
    let from = session.location_of(&TermId::from("F")).unwrap();
    session.relocate(from, Location::Slot(2));
    let before = session.slots().clone();

    assert_eq!(session.check(), CheckOutcome::Incomplete);
    assert_eq!(session.slots(), &before);
    assert_eq!(session.progress(), (0, 5));
}

#[test]
fn test_solving_everything_completes() {
    let mut session = Session::new(standard(), 11);
    let ids: Vec<EquationId> = session.set().equations().map(|e| e.id().clone()).collect();
    for id in &ids {
        place_equation(&mut session, id, false);
        assert_eq!(session.check(), CheckOutcome::Matched(id.clone()));
    }
    assert!(session.is_complete());
    assert!(session.pool().is_empty());
    assert!(session.slots().is_empty());
}

proptest! {
    #[test]
    fn prop_completion_is_order_independent(
        seed in any::<u32>(),
        order in Just((0..5usize).collect::<Vec<_>>()).prop_shuffle(),
        swaps in proptest::collection::vec(any::<bool>(), 5),
    ) {
        let mut session = Session::new(standard(), seed);
        let ids: Vec<EquationId> = session.set().equations().map(|e| e.id().clone()).collect();

        for (step, &i) in order.iter().enumerate() {
            place_equation(&mut session, &ids[i], swaps[i]);
            prop_assert_eq!(session.check(), CheckOutcome::Matched(ids[i].clone()));
            prop_assert_eq!(session.progress(), (step + 1, 5));
            assert_consistent(&session);
        }
        prop_assert!(session.is_complete());
    }
}
