use std::env;

use swag_maze::{parse_swag_list, SwagMaze, DEFAULT_SWAG};

// Usage: custom_swag [rows] [cols] ["item, item, ..."]
// Missing arguments fall back to a 21x21 maze with the default swag.

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let rows = args.first().and_then(|s| s.parse().ok()).unwrap_or(21);
    let cols = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(21);
    let swag = args
        .get(2)
        .map(|s| parse_swag_list(s))
        .unwrap_or_else(|| DEFAULT_SWAG.iter().map(|s| s.to_string()).collect());
    let maze = SwagMaze::new(rows, cols, swag);
    match maze.build(&mut rand::thread_rng()) {
        Ok(run) => println!("{}", run),
        Err(e) => eprintln!("Error: {}", e),
    }
}
