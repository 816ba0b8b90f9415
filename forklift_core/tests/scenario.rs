use forklift_core::{
    FreightType, Position, START_POSITION,
    warehouse::{CarryState, Command, Outcome, Warehouse},
};

fn repeat(warehouse: &mut Warehouse, command: Command, times: usize) {
    for _ in 0..times {
        warehouse.apply(command);
    }
}

#[test]
fn carry_freight_off_the_truck_bed() {
    let mut warehouse = Warehouse::with_seed(2024);
    assert_eq!(warehouse.forklift().position, START_POSITION);
    assert_eq!(warehouse.carry_state(), CarryState::Empty);

    let supply = Position::new(12, 0);
    let expected: FreightType = warehouse
        .freight_at(supply)
        .expect("supply cell starts stocked");

    repeat(&mut warehouse, Command::MoveRight, 5);
    assert_eq!(warehouse.forklift().position, Position::new(12, 3));
    repeat(&mut warehouse, Command::MoveUp, 3);
    assert_eq!(warehouse.forklift().position, supply);

    assert_eq!(
        warehouse.apply(Command::Interact),
        Outcome::PickedUp(expected)
    );
    assert_eq!(warehouse.freight_at(supply), None);
    assert_eq!(warehouse.carry_state(), CarryState::Carrying(expected));

    warehouse.apply(Command::MoveDown);
    let below = Position::new(12, 1);
    assert_eq!(warehouse.forklift().position, below);
    assert_eq!(warehouse.apply(Command::Interact), Outcome::Dropped(expected));
    assert_eq!(warehouse.freight_at(below), Some(expected));
    assert_eq!(warehouse.carry_state(), CarryState::Empty);
    assert_eq!(warehouse.freight().len(), 4);
}

#[test]
fn interact_at_start_cell_does_nothing() {
    let mut warehouse = Warehouse::with_seed(1);
    let before = warehouse.freight().clone();
    assert_eq!(warehouse.apply(Command::Interact), Outcome::NothingHere);
    assert_eq!(warehouse.freight(), &before);
    assert_eq!(warehouse.carry_state(), CarryState::Empty);
}

#[test]
fn walls_of_the_yard_stop_the_forklift() {
    let mut warehouse = Warehouse::with_seed(1);
    repeat(&mut warehouse, Command::MoveLeft, 20);
    repeat(&mut warehouse, Command::MoveDown, 20);
    assert_eq!(warehouse.forklift().position, Position::new(0, 7));
    assert_eq!(warehouse.apply(Command::MoveLeft), Outcome::Blocked);
    assert_eq!(warehouse.apply(Command::MoveDown), Outcome::Blocked);
}

#[test]
fn restock_refills_after_unloading() {
    let mut warehouse = Warehouse::with_seed(77);
    repeat(&mut warehouse, Command::MoveRight, 5);
    repeat(&mut warehouse, Command::MoveUp, 3);
    warehouse.apply(Command::Interact);
    warehouse.apply(Command::MoveDown);
    warehouse.apply(Command::Interact);

    assert_eq!(warehouse.apply(Command::ResetSupply), Outcome::Restocked);
    assert_eq!(warehouse.freight().len(), 5);
    for x in 12..16 {
        assert!(warehouse.freight_at(Position::new(x, 0)).is_some());
    }
}
