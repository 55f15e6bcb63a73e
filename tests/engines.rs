#[cfg(test)]
mod tests {
    use conway_board::{iterate_once, step, Board, GridStorage};

    const SEED: u64 = 42;

    fn randomly_filled(rows: i64, cols: i64, seed: u64) -> (Board, Vec<Vec<bool>>) {
        let board = Board::random(rows, cols, Some(seed), Some(0.35)).unwrap();
        let nested = board.to_rows();
        assert_fields_equal(&board, &nested);
        (board, nested)
    }

    fn assert_fields_equal(board: &Board, nested: &[Vec<bool>]) {
        let cells_board = board.to_rows();
        if cells_board == nested {
            return;
        }
        assert_eq!(cells_board.len(), nested.len());
        let (m, n) = (board.rows(), board.cols());
        const K: usize = 5;
        for y in 0..m {
            for x in 0..n {
                if cells_board[y][x] != nested[y][x] {
                    let (x1, y1) = (x.saturating_sub(K), y.saturating_sub(K));
                    let (x2, y2) = ((x + K).min(n), (y + K).min(m));
                    let mut picture = String::new();
                    for y in y1..y2 {
                        picture.push('|');
                        picture.extend(
                            cells_board[y][x1..x2]
                                .iter()
                                .map(|&c| if c { '#' } else { ' ' }),
                        );
                        picture.push('|');
                        picture.extend(
                            nested[y][x1..x2]
                                .iter()
                                .map(|&c| if c { '#' } else { ' ' }),
                        );
                        picture.push_str("|\n");
                    }
                    panic!("Mismatch at ({}, {}):\n{}", y, x, picture);
                }
            }
        }
    }

    #[test]
    fn test_single_updates() {
        for (rows, cols) in [(1, 1), (1, 9), (9, 1), (2, 2), (16, 16), (31, 47), (64, 20)] {
            let (mut board, mut nested) = randomly_filled(rows, cols, SEED);

            board.iterate_once();
            iterate_once(&mut nested).unwrap();

            assert_fields_equal(&board, &nested);
        }
    }

    #[test]
    fn test_repetitive_updates() {
        for seed in 0..4 {
            let (mut board, mut nested) = randomly_filled(40, 25, SEED + seed);

            for _ in 0..50 {
                board.iterate_once();
                iterate_once(&mut nested).unwrap();

                assert_fields_equal(&board, &nested);
            }
        }
    }

    #[test]
    fn test_updates_across_resizes() {
        let (mut board, _) = randomly_filled(30, 30, SEED);
        for (rows, cols) in [(20, 40), (45, 12), (8, 8), (30, 30)] {
            board.resize(rows, cols).unwrap();
            let mut nested = board.to_rows();

            board.iterate(3);
            for _ in 0..3 {
                iterate_once(&mut nested).unwrap();
            }

            assert_fields_equal(&board, &nested);
        }
    }

    #[test]
    fn test_generic_step_matches_board() {
        let (mut board, nested) = randomly_filled(24, 24, SEED);
        let src = GridStorage::from_rows(&nested).unwrap();
        let mut dst = GridStorage::blank(24, 24).unwrap();
        step(&src, &mut dst);
        board.iterate_once();
        assert_eq!(board.cells(), dst.cells());
    }
}
