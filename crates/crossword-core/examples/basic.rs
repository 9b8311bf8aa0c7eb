//! Basic example of using the crossword engine

use crossword_core::{Entry, Generator, Orientation, Position};

fn main() {
    let entries = Entry::from_pairs(vec![
        ("Interconnection of human, animal and environmental health", "UNA SOLA SALUD"),
        ("Diseases animals can transmit to humans", "ZOONOSIS"),
        ("Physiological equilibrium at every level", "SALUD"),
        ("Minimum dose required to infect a host", "AGENTE"),
        ("Partial or total loss of physiological equilibrium", "ENFERMEDAD"),
    ])
    .expect("all answers have letters");

    println!("Generating a layout for {} entries...\n", entries.len());
    let layout = Generator::new().generate(&entries).expect("entries fit the grid");

    // Print the grid
    let n = layout.size();
    for row in 0..n {
        let mut line = String::new();
        for col in 0..n {
            match layout.grid.get(Position::new(row, col)) {
                Some(ch) => line.push(ch),
                None => line.push('.'),
            }
            line.push(' ');
        }
        println!("{}", line);
    }

    // Print the clue list
    println!();
    for placement in &layout.placements {
        let entry = &entries[placement.entry_id];
        let orientation = match placement.orientation {
            Orientation::Horizontal => "across",
            Orientation::Vertical => "down",
        };
        println!(
            "{:2}. ({:2},{:2}) {} [{} letters] {}",
            placement.number,
            placement.row,
            placement.col,
            orientation,
            placement.length,
            entry.clue,
        );
    }

    println!("\nUsed cells: {}", layout.grid.used_count());
    if !layout.unplaced.is_empty() {
        println!("Unplaced entries: {}", layout.unplaced.len());
    }
}
