use crate::model::Problem;

pub const LINE_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/line.json"
));

pub const CAPACITY_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/capacity.json"
));

pub const TRIANGLE_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/triangle.json"
));

pub const DIAMOND_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/diamond.json"
));

pub const DISCONNECTED_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/disconnected.json"
));

pub const EMPTY_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/empty.json"
));

pub const SWITZERLAND_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/instances/switzerland.json"
));

fn load(text: &str) -> Problem {
    Problem::from_text(text).expect("Failed to parse test instance")
}

/// Cities A--B--C in a line (A-B 2, B-C 3), one task from A to C.
pub fn line_problem() -> Problem {
    load(LINE_PROBLEM_TEXT)
}

/// Two weight-4 tasks from A to B on a capacity-5 vehicle.
pub fn capacity_problem() -> Problem {
    load(CAPACITY_PROBLEM_TEXT)
}

/// A direct A-C road declared with length 10 against an A-B-C route of
/// length 5; the distance oracle charges 5 for either.
pub fn triangle_problem() -> Problem {
    load(TRIANGLE_PROBLEM_TEXT)
}

/// Two routes of different cost converging on the same middle city.
pub fn diamond_problem() -> Problem {
    load(DIAMOND_PROBLEM_TEXT)
}

/// A delivery city with no road to the rest of the network.
pub fn disconnected_problem() -> Problem {
    load(DISCONNECTED_PROBLEM_TEXT)
}

/// The line topology with no tasks at all.
pub fn empty_problem() -> Problem {
    load(EMPTY_PROBLEM_TEXT)
}

/// Seven Swiss cities and three tasks; the largest fixture.
pub fn switzerland_problem() -> Problem {
    load(SWITZERLAND_PROBLEM_TEXT)
}
