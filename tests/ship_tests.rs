use seabattle::{Cell, Grid, Ship, ShipError, ShipId, Sign};

fn grid(width: i32, height: i32) -> Grid {
    (0..=width)
        .flat_map(|x| (0..=height).map(move |y| ((x, y), Cell::new(x, y))))
        .collect()
}

#[test]
fn validate_sorts_horizontal_ship() -> Result<(), ShipError> {
    let sorted = Ship::validate(&[(3, 1), (1, 1), (2, 1)])?;
    assert_eq!(sorted, vec![(1, 1), (2, 1), (3, 1)]);
    Ok(())
}

#[test]
fn validate_sorts_vertical_ship() -> Result<(), ShipError> {
    let sorted = Ship::validate(&[(4, 7), (4, 5), (4, 6), (4, 4)])?;
    assert_eq!(sorted, vec![(4, 4), (4, 5), (4, 6), (4, 7)]);
    Ok(())
}

#[test]
fn validate_single_cell() -> Result<(), ShipError> {
    assert_eq!(Ship::validate(&[(5, 5)])?, vec![(5, 5)]);
    Ok(())
}

#[test]
fn diagonal_ship_is_not_parallel() {
    let err = Ship::validate(&[(1, 1), (2, 2)]).unwrap_err();
    assert_eq!(err, ShipError::NotParallelShip(vec![(1, 1), (2, 2)]));
    assert_eq!(err.code(), "NOT_PARALLEL_SHIP");
}

#[test]
fn gap_is_wrong_coordinate() {
    let err = Ship::validate(&[(1, 3), (1, 1)]).unwrap_err();
    assert_eq!(err, ShipError::WrongShipCoordinate(vec![(1, 1), (1, 3)]));
    assert_eq!(err.code(), "WRONG_SHIP_COORDINATE");
}

#[test]
fn duplicate_cell_is_wrong_coordinate() {
    assert!(matches!(
        Ship::validate(&[(2, 2), (2, 2)]),
        Err(ShipError::WrongShipCoordinate(_))
    ));
}

#[test]
fn run_past_i32_max_is_wrong_coordinate() {
    assert!(matches!(
        Ship::validate(&[(0, i32::MAX), (0, i32::MAX)]),
        Err(ShipError::WrongShipCoordinate(_))
    ));
    assert!(matches!(
        Ship::validate(&[(i32::MAX, 3), (i32::MAX - 1, 3), (i32::MAX, 3)]),
        Err(ShipError::WrongShipCoordinate(_))
    ));
    assert_eq!(
        Ship::validate(&[(i32::MAX, 3), (i32::MAX - 1, 3)]),
        Ok(vec![(i32::MAX - 1, 3), (i32::MAX, 3)])
    );
}

#[test]
fn empty_ship_is_wrong_coordinate() {
    assert_eq!(
        Ship::validate(&[]),
        Err(ShipError::WrongShipCoordinate(vec![]))
    );
}

#[test]
fn new_marks_cells_and_names_class() -> Result<(), ShipError> {
    let mut grid = grid(11, 11);
    let ship = Ship::new(ShipId(3), &[(2, 4), (2, 2), (2, 3)], &mut grid)?;
    assert_eq!(ship.name(), "cruiser");
    assert_eq!(ship.len(), 3);
    assert!(ship.is_alive());
    assert_eq!(ship.coordinates(), &[(2, 2), (2, 3), (2, 4)]);
    for c in ship.coordinates() {
        let cell = grid[c];
        assert_eq!(cell.sign, Sign::Ship);
        assert_eq!(cell.ship_id, Some(ShipId(3)));
    }
    assert_eq!(grid[&(2, 5)].sign, Sign::Empty);
    assert!(ship.contains((2, 3)));
    assert!(!ship.contains((3, 3)));
    Ok(())
}

#[test]
fn new_leaves_grid_untouched_on_error() {
    let mut grid = grid(11, 11);
    assert!(Ship::new(ShipId(0), &[(1, 1), (3, 1)], &mut grid).is_err());
    assert!(grid.values().all(|cell| cell.sign == Sign::Empty));
}

#[test]
fn ship_without_class_is_unclassified() -> Result<(), ShipError> {
    let mut grid = grid(11, 11);
    let ship = Ship::new(ShipId(0), &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)], &mut grid)?;
    assert_eq!(ship.name(), "unclassified");
    Ok(())
}

#[test]
fn alive_until_every_segment_is_hit() -> Result<(), ShipError> {
    let mut grid = grid(11, 11);
    let mut ship = Ship::new(ShipId(0), &[(1, 1), (1, 2)], &mut grid)?;
    if let Some(cell) = grid.get_mut(&(1, 1)) {
        cell.sign = Sign::Hit;
    }
    assert!(ship.is_ship_alive(&grid));
    if let Some(cell) = grid.get_mut(&(1, 2)) {
        cell.sign = Sign::Hit;
    }
    assert!(!ship.is_ship_alive(&grid));
    assert!(!ship.is_alive());
    Ok(())
}
