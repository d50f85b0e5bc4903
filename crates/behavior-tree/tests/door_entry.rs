//! End-to-end door entry scenario.
//!
//! An agent fetches the building's doors as a stack, then tries them one at a
//! time until it gets through one:
//!
//! ```text
//! sequence
//!   ├─ get stack (building doors → working doors)
//!   ├─ repeat until fail
//!   │   └─ sequence
//!   │       ├─ pop door → current
//!   │       └─ inverter
//!   │           └─ sequence
//!   │               ├─ walk to door
//!   │               ├─ selector (open, unlock, smash)
//!   │               ├─ walk through door
//!   │               ├─ succeeder (close door)
//!   │               └─ set used ← current
//!   └─ inverter
//!       └─ is null (used)
//! ```

use std::sync::{Arc, Mutex};

use behavior_tree::leaves::{GetStack, IsNull, PopFromStack, SetVariable};
use behavior_tree::{Action, NodeId, Tree};

#[derive(Debug, Clone, PartialEq)]
struct Door {
    number: u32,
}

/// Door actions that succeed, keyed by (action, door number).
type Outcomes = &'static [(&'static str, u32)];

struct Building {
    doors: Vec<Door>,
    working: Vec<Door>,
    current: Option<Door>,
    used: Option<Door>,
    outcomes: Outcomes,
    trace: Vec<String>,
}

impl Building {
    /// Doors are stacked so that door #1 is on top.
    fn new(door_count: u32, outcomes: Outcomes) -> Self {
        Self {
            doors: (1..=door_count).rev().map(|number| Door { number }).collect(),
            working: Vec::new(),
            current: None,
            used: None,
            outcomes,
            trace: Vec::new(),
        }
    }
}

fn door_action(tree: &mut Tree<Building>, name: &'static str) -> NodeId {
    tree.leaf(Action::new(name, move |b: &mut Building| {
        let number = b.current.as_ref().map_or(0, |door| door.number);
        let success = name == "walk to door"
            || name == "close door"
            || b.outcomes.contains(&(name, number));
        b.trace.push(format!(
            "{name} {}",
            if success { "succeeded" } else { "failed" }
        ));
        success
    }))
}

fn build(tree: &mut Tree<Building>, observed: Arc<Mutex<Vec<String>>>) -> NodeId {
    let tried = Arc::clone(&observed);
    let get_doors = tree.leaf(GetStack::new(
        |b: &mut Building| &mut b.working,
        |b: &Building| &b.doors,
    ));
    let pop = tree.leaf(
        PopFromStack::new(|b: &mut Building| &mut b.current, |b: &mut Building| &mut b.working)
            .with_observer(move |door: &Door| {
                tried
                    .lock()
                    .unwrap()
                    .push(format!("trying door #{}", door.number));
            }),
    );
    let set_used = tree.leaf(
        SetVariable::new(|b: &mut Building| &mut b.used, |b: &Building| &b.current)
            .with_observer(move |door: &Door| {
                observed
                    .lock()
                    .unwrap()
                    .push(format!("used door #{}", door.number));
            }),
    );
    let is_null = tree.leaf(IsNull::new(|b: &Building| &b.used));

    let walk = door_action(tree, "walk to door");
    let open = door_action(tree, "open door");
    let unlock = door_action(tree, "unlock door");
    let smash = door_action(tree, "smash door");
    let walk_through = door_action(tree, "walk through door");
    let close = door_action(tree, "close door");

    let get_in = tree.selector_of([open, unlock, smash]).unwrap();
    let close_if_possible = tree.succeeder_of(close).unwrap();
    let attempt = tree
        .sequence_of([walk, get_in, walk_through, close_if_possible, set_used])
        .unwrap();
    let keep_trying = tree.inverter_of(attempt).unwrap();
    let next_door = tree.sequence_of([pop, keep_trying]).unwrap();
    let until_fail = tree.repeat_until_fail_of(next_door).unwrap();
    let got_in = tree.inverter_of(is_null).unwrap();

    tree.sequence_of([get_doors, until_fail, got_in]).unwrap()
}

#[test]
fn second_door_gets_the_agent_in() {
    let outcomes: Outcomes = &[
        ("smash door", 1),
        ("open door", 2),
        ("walk through door", 2),
    ];
    let observed = Arc::new(Mutex::new(Vec::new()));
    let mut tree = Tree::new();
    let entry = build(&mut tree, Arc::clone(&observed));
    tree.set_root_child(entry).unwrap();

    let mut building = Building::new(3, outcomes);
    assert_eq!(
        building.doors.last(),
        Some(&Door { number: 1 }),
        "door #1 should be on top"
    );

    assert!(tree.run(&mut building));
    assert_eq!(building.used, Some(Door { number: 2 }));
    assert_eq!(building.working, [Door { number: 3 }]);
    assert_eq!(building.doors.len(), 3, "source stack must be untouched");

    assert_eq!(
        building.trace,
        [
            "walk to door succeeded",
            "open door failed",
            "unlock door failed",
            "smash door succeeded",
            "walk through door failed",
            "walk to door succeeded",
            "open door succeeded",
            "walk through door succeeded",
            "close door succeeded",
        ]
    );
    assert_eq!(
        *observed.lock().unwrap(),
        ["trying door #1", "trying door #2", "used door #2"]
    );
}

#[test]
fn locked_building_reports_failure() {
    let outcomes: Outcomes = &[("open door", 1), ("open door", 2)];
    let mut tree = Tree::new();
    let entry = build(&mut tree, Arc::new(Mutex::new(Vec::new())));
    tree.set_root_child(entry).unwrap();

    let mut building = Building::new(2, outcomes);
    assert!(!tree.run(&mut building));
    assert_eq!(building.used, None);
    assert!(building.working.is_empty());
    assert_eq!(building.current, Some(Door { number: 2 }));
}

#[test]
fn rerunning_reloads_the_doors() {
    let outcomes: Outcomes = &[("open door", 3), ("walk through door", 3)];
    let mut tree = Tree::new();
    let entry = build(&mut tree, Arc::new(Mutex::new(Vec::new())));
    tree.set_root_child(entry).unwrap();

    let mut building = Building::new(3, outcomes);
    assert!(tree.run(&mut building));
    assert_eq!(building.used, Some(Door { number: 3 }));

    building.used = None;
    building.trace.clear();
    assert!(tree.run(&mut building));
    assert_eq!(building.used, Some(Door { number: 3 }));
    assert_eq!(
        building
            .trace
            .iter()
            .filter(|line| line.starts_with("walk to door"))
            .count(),
        3
    );
}
