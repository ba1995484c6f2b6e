use crate::Cell;

/// Which of Conway's rules decides the next state of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Live cell with fewer than two live neighbours dies.
    Underpopulation,
    /// Live cell with two or three live neighbours lives on.
    Survival,
    /// Live cell with more than three live neighbours dies.
    Overpopulation,
    /// Dead cell with exactly three live neighbours becomes alive.
    Reproduction,
    /// No rule applies, the cell keeps its state.
    Unchanged,
}

impl Transition {
    /// The four explicit rules in precedence order.
    pub const RULES: [Transition; 4] = [
        Transition::Underpopulation,
        Transition::Survival,
        Transition::Overpopulation,
        Transition::Reproduction,
    ];

    pub fn classify(state: Cell, neighbours: u8) -> Self {
        match (state, neighbours) {
            (Cell::Alive, 0..=1) => Transition::Underpopulation,
            (Cell::Alive, 2..=3) => Transition::Survival,
            (Cell::Alive, _) => Transition::Overpopulation,
            (Cell::Dead, 3) => Transition::Reproduction,
            (Cell::Dead, _) => Transition::Unchanged,
        }
    }

    /// Whether the rule's own condition holds, independently of the others.
    pub fn applies(self, state: Cell, neighbours: u8) -> bool {
        match self {
            Transition::Underpopulation => state == Cell::Alive && neighbours < 2,
            Transition::Survival => state == Cell::Alive && (neighbours == 2 || neighbours == 3),
            Transition::Overpopulation => state == Cell::Alive && neighbours > 3,
            Transition::Reproduction => state == Cell::Dead && neighbours == 3,
            Transition::Unchanged => !Self::RULES.iter().any(|r| r.applies(state, neighbours)),
        }
    }

    pub fn apply(self, state: Cell) -> Cell {
        match self {
            Transition::Underpopulation | Transition::Overpopulation => Cell::Dead,
            Transition::Survival | Transition::Reproduction => Cell::Alive,
            Transition::Unchanged => state,
        }
    }
}

/// Next state of a cell given its current state and live neighbour count.
pub fn next_state(state: Cell, neighbours: u8) -> Cell {
    Transition::classify(state, neighbours).apply(state)
}
