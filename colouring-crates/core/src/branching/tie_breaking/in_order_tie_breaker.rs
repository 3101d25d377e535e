use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, with [`Direction::Minimum`], if `v3` and then `v1` are considered and both have
/// a domain of size 2, `v3` is selected since it was the first one with the minimum value.
#[derive(Debug, Clone)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable and its value, [None] if no variable has been considered yet
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_improvement = match &self.selected {
            None => true,
            // Only a strict improvement replaces the stored variable, so the first variable with
            // the best value is kept
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if is_improvement {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
