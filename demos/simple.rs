use swag_maze::SwagMaze;

// In this example a 15x31 maze is carved with the default swag, the shortest path from the
// start to the terminal cell is found and the swag along it is reported.
// - # marks a wall
// - S marks the start
// - E marks the end
// - . marks the path
// - any other letter is the first letter of a swag item

fn main() {
    let maze = SwagMaze::default();
    match maze.build_seeded(2024) {
        Ok(run) => println!("{}", run),
        Err(e) => eprintln!("{}", e),
    }
}
