use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, BoardError, Position, STANDARD_FREQUENCY, Tile, TileBag, TileKind};

fn tiles(symbols: &str) -> Vec<Tile> {
    symbols
        .chars()
        .map(|c| match Tile::new(c) {
            Ok(tile) => tile,
            Err(err) => panic!("bad test tile: {}", err),
        })
        .collect()
}

fn board(text: &str) -> Board {
    match Board::parse(text) {
        Ok(board) => board,
        Err(err) => panic!("board {:?} failed to parse: {}", text, err),
    }
}

fn tile(symbol: char) -> Tile {
    tiles(&symbol.to_string())[0]
}

#[test]
fn test_tile_classification() {
    for symbol in ['+', '-', '*', '%'] {
        let tile = Tile::new(symbol);
        assert!(matches!(tile, Ok(t) if t.kind() == TileKind::Operator));
    }
    for symbol in '0'..='9' {
        let tile = Tile::new(symbol);
        assert!(matches!(tile, Ok(t) if t.kind() == TileKind::Number));
    }
}

#[test]
fn test_tile_rejects_unknown_symbol() {
    assert_eq!(Tile::new('/'), Err(BoardError::InvalidTile('/')));
    assert_eq!(Tile::new('a'), Err(BoardError::InvalidTile('a')));
}

#[test]
fn test_tile_equality_uses_symbol_and_flag() {
    let (a, b) = (tile('7'), tile('7'));
    assert_eq!(a, b);
    assert_ne!(a, b.with_active(true));
    assert_eq!(a.with_active(true), b.with_active(true));
}

#[test]
fn test_tile_digit() {
    assert!(matches!(Tile::new('7').map(|t| t.digit()), Ok(Some(7))));
    assert!(matches!(Tile::new('%').map(|t| t.digit()), Ok(None)));
}

#[test]
fn test_board_rejects_zero_dimensions() {
    let result = Board::new(0, 2, tiles("12"));
    assert_eq!(
        result,
        Err(BoardError::InvalidDimensions {
            width: 0,
            height: 2
        })
    );
    assert!(Board::new(2, 0, tiles("12")).is_err());
}

#[test]
fn test_board_rejects_short_supply() {
    let result = Board::new(2, 2, tiles("1+2"));
    assert_eq!(
        result,
        Err(BoardError::InsufficientTiles {
            required: 4,
            supplied: 3
        })
    );
    if let Err(err) = result {
        assert!(err.is_configuration());
    }
}

#[test]
fn test_board_fills_row_major() {
    let board = Board::new(2, 2, tiles("1+23"));
    assert!(board.is_ok());
    if let Ok(board) = board {
        let symbols: Vec<char> = board.tiles().map(|(_, t)| t.symbol()).collect();
        assert_eq!(symbols, vec!['1', '+', '2', '3']);
        assert!(matches!(board.tile_at(Position::new(1, 0)), Ok(t) if t.symbol() == '+'));
        assert!(matches!(board.tile_at(Position::new(0, 1)), Ok(t) if t.symbol() == '2'));
    }
}

#[test]
fn test_board_out_of_bounds() {
    let result = board("12/34").tile_at(Position::new(2, 0));
    assert!(matches!(result, Err(BoardError::OutOfBounds { x: 2, y: 0, .. })));
    if let Err(err) = result {
        assert!(!err.is_configuration());
    }
}

#[test]
fn test_position_of_detects_foreign_tile() {
    let board = board("1+/23");
    let one = tile('1');
    let here = Position::new(0, 0);
    assert_eq!(board.position_of(here, &one), Ok(here));
    assert!(matches!(
        board.position_of(here, &one.with_active(true)),
        Err(BoardError::NotFound { x: 0, y: 0, symbol: '1' })
    ));
    assert!(board.position_of(Position::new(1, 0), &one).is_err());
}

#[test]
fn test_adjacency_is_chebyshev_one() {
    let centre = Position::new(1, 1);
    assert!(centre.is_adjacent(&Position::new(0, 0)));
    assert!(centre.is_adjacent(&Position::new(2, 1)));
    assert!(centre.is_adjacent(&Position::new(2, 2)));
    assert!(!centre.is_adjacent(&centre));
    assert!(!centre.is_adjacent(&Position::new(3, 1)));
    assert!(!Position::new(0, 0).is_adjacent(&Position::new(0, 2)));
}

#[test]
fn test_neighbours_are_in_bounds_and_row_major() {
    let board = board("123/456/789");
    let corner: Vec<char> = board
        .neighbours(Position::new(0, 0))
        .map(|(_, t)| t.symbol())
        .collect();
    assert_eq!(corner, vec!['2', '4', '5']);

    let centre: Vec<char> = board
        .neighbours(Position::new(1, 1))
        .map(|(_, t)| t.symbol())
        .collect();
    assert_eq!(centre, vec!['1', '2', '3', '4', '6', '7', '8', '9']);

    assert!(matches!(
        board.are_neighbours(Position::new(0, 0), Position::new(2, 2)),
        Ok(false)
    ));
    assert!(board.are_neighbours(Position::new(0, 0), Position::new(3, 3)).is_err());
}

#[test]
fn test_clone_is_independent() {
    let board = board("1+/23");
    let mut copy = board.clone();
    let at = Position::new(0, 1);
    assert!(copy.set_tile(at, tile('9').with_active(true)).is_ok());

    assert!(matches!(copy.tile_at(at), Ok(t) if t.symbol() == '9' && t.is_active()));
    assert!(matches!(board.tile_at(at), Ok(t) if t.symbol() == '2' && !t.is_active()));
}

#[test]
fn test_set_tile_toggles_active_flag() {
    let mut board = board("12");
    let at = Position::new(1, 0);
    let two = tile('2');
    assert_eq!(board.tile_at(at), Ok(two));
    assert!(board.set_tile(at, two.with_active(true)).is_ok());
    assert!(matches!(board.tile_at(at), Ok(t) if t.is_active()));
    assert!(board.set_tile(at, two).is_ok());
    assert!(matches!(board.tile_at(at), Ok(t) if !t.is_active()));
}

#[test]
fn test_parse_and_display() {
    let board = Board::parse("1 + 2\n3 * 4\n");
    assert!(board.is_ok());
    if let Ok(board) = board {
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.to_string(), "1+2\n3*4");
        assert_eq!("1+2/3*4".parse::<Board>(), Ok(board));
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Board::parse("12/3"),
        Err(BoardError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(Board::parse("1x"), Err(BoardError::InvalidTile('x')));
    assert!(matches!(
        Board::parse(""),
        Err(BoardError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_standard_bag_contents() {
    let bag = TileBag::standard();
    assert_eq!(bag.len(), STANDARD_FREQUENCY.iter().sum::<usize>());
    assert_eq!(bag.len(), 76);
    let operators = bag.tiles().iter().filter(|t| t.is_operator()).count();
    assert_eq!(operators, 32);
}

#[test]
fn test_shuffled_bag_is_permutation() {
    let mut rng = StdRng::seed_from_u64(42);
    let bag = TileBag::shuffled(&mut rng);
    let mut shuffled: Vec<char> = bag.tiles().iter().map(|t| t.symbol()).collect();
    let mut standard: Vec<char> = TileBag::standard()
        .tiles()
        .iter()
        .map(|t| t.symbol())
        .collect();
    shuffled.sort_unstable();
    standard.sort_unstable();
    assert_eq!(shuffled, standard);
}

#[test]
fn test_deal_consumes_bag() {
    let mut bag = TileBag::standard();
    let board = Board::deal(8, 8, &mut bag);
    assert!(board.is_ok());
    assert_eq!(bag.len(), 12);

    let too_big = Board::deal(4, 4, &mut bag);
    assert!(matches!(
        too_big,
        Err(BoardError::InsufficientTiles {
            required: 16,
            supplied: 12
        })
    ));
    assert_eq!(bag.len(), 12);
}

#[test]
fn test_board_rejects_overflowing_dimensions() {
    assert_eq!(
        Board::new(usize::MAX, 2, std::iter::empty()),
        Err(BoardError::InvalidDimensions {
            width: usize::MAX,
            height: 2
        })
    );
}

#[test]
fn test_huge_board_fails_on_supply_not_allocation() {
    let mut bag = TileBag::standard();
    let result = Board::deal(1_000_000, 1_000_000, &mut bag);
    assert_eq!(
        result,
        Err(BoardError::InsufficientTiles {
            required: 1_000_000_000_000,
            supplied: 76
        })
    );
    assert_eq!(bag.len(), 76);
}

#[test]
fn test_active_flags_survive_construction() {
    let supply = vec![
        tile('1').with_active(true),
        tile('+'),
        tile('2'),
        tile('3').with_active(true),
    ];
    let board = Board::new(2, 2, supply.clone());
    assert!(board.is_ok());
    if let Ok(board) = board {
        let built: Vec<Tile> = board.tiles().map(|(_, t)| t).collect();
        assert_eq!(built, supply);
    }
}

#[test]
fn test_neighbours_at_extreme_position_is_empty() {
    let board = board("12/34");
    let far = Position::new(usize::MAX, usize::MAX);
    assert_eq!(board.neighbours(far).count(), 0);
    assert!(board.tile_at(far).is_err());
}
