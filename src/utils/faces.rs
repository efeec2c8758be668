/// Rows on the board
pub const BOARD_ROWS: usize = 4;
/// Columns on the board
pub const BOARD_COLS: usize = 4;
/// Faces on every die
pub const FACES_PER_DIE: usize = 6;

/// The legal faces of each of the 16 dice, indexed by die identity.
/// Multi-letter faces such as "QU" occupy a single cell.
pub const CUBE_FACES: [[&str; FACES_PER_DIE]; BOARD_ROWS * BOARD_COLS] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "QU", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_are_uppercase_and_short() {
        for (index, faces) in CUBE_FACES.iter().enumerate() {
            for face in faces {
                assert!(
                    (1..=3).contains(&face.len()),
                    "Face '{}' on die {} should be one to three letters",
                    face,
                    index
                );
                assert!(
                    face.chars().all(|c| c.is_ascii_uppercase()),
                    "Face '{}' on die {} should be uppercase",
                    face,
                    index
                );
            }
        }
    }
}
