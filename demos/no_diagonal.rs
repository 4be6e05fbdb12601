use swag_maze::SwagMaze;

// The path finder steps diagonally by default. Turning that off keeps the path inside the
// carved corridors.

fn main() {
    let mut maze = SwagMaze::new(11, 21, ["candy corn", "werewolf", "pumpkin"]);
    maze.allow_diagonal_move = false;
    let run = maze.build_seeded(7).unwrap();
    println!("{}", run.grid);
    println!("Path:");
    for p in run.path {
        println!("{:?}", p);
    }
}
