use std::error::Error;

use lasca::board::Board;
use lasca::config::Variant;
use lasca::utils::perft_divide;

/// Usage: `lasca [variant] [depth]`
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let variant: Variant = match args.next() {
        Some(name) => name.parse()?,
        None => Variant::default(),
    };
    let depth: usize = match args.next() {
        Some(depth) => depth.parse()?,
        None => 3,
    };

    let geometry = variant.geometry();
    let (board, side) = Board::from_notation(variant.opening(), &geometry)?;

    println!("{variant}: {}", board.notation(&geometry, side));

    let mut total_nodes = 0;
    for (move_, nodes) in perft_divide(&board, &geometry, side, depth)? {
        println!("{move_}: {nodes}");
        total_nodes += nodes;
    }

    println!("Total nodes: {total_nodes}");

    Ok(())
}
