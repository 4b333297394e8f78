use itertools::Itertools;

use npuzzle_solver::{solve, Heuristic};

// Each case is (start, goal, width, height), tiles in row-major order with
// 0 as the blank. The last pair is of opposite permutation parity, so its
// searches exhaust the reachable space and report no solution.
const CASES: &[(&[u8], &[u8], usize, usize)] = &[
    (&[1, 5, 2, 4, 0, 3], &[1, 2, 3, 4, 5, 0], 3, 2),
    (
        &[2, 4, 3, 1, 5, 0, 7, 8, 6],
        &[1, 2, 3, 4, 5, 6, 7, 8, 0],
        3,
        3,
    ),
    (
        &[4, 1, 2, 5, 8, 3, 10, 0, 6, 11, 7, 9],
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],
        3,
        4,
    ),
    (
        &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        &[8, 0, 6, 5, 4, 7, 2, 3, 1],
        3,
        3,
    ),
];

fn main() {
    tracing_subscriber::fmt::init();

    let mut case = 0;
    for &(start, goal, width, height) in CASES {
        case += 1;

        println!("{}", "=".repeat(80));
        println!("Case {case}: {width}x{height}");
        println!("Start: {start:?}");
        println!("Goal:  {goal:?}");
        println!("{}", "=".repeat(80));

        for heuristic in [Heuristic::Misplaced, Heuristic::Manhattan, Heuristic::Zero] {
            report(start, goal, width, height, heuristic);
        }
    }
}

fn report(start: &[u8], goal: &[u8], width: usize, height: usize, heuristic: Heuristic) {
    println!("{}", "-".repeat(80));
    println!("Heuristic: {heuristic}");
    println!("{}", "-".repeat(80));

    match solve(start, goal, width, height, heuristic) {
        Ok(result) => {
            if result.found {
                println!("Moves: {}", result.moves.iter().join(", "));
                println!("Path length: {}", result.moves.len());
            } else {
                println!("No solution exists!");
            }
            println!("Unexpanded states: {}", result.unexpanded);
            println!("Expanded states: {}", result.expanded);
            println!(
                "Total generated states: {}",
                result.unexpanded + result.expanded
            );
            println!("Time: {:.2} s", result.elapsed.as_secs_f64());
        }
        Err(err) => println!("Invalid configuration: {err}"),
    }
}
