use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use super::*;

/// The winning move of the forcing player on a closed set `Z`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// The player pays for `vertex` and the rule closes `Z ∪ {vertex}`
    Spend { vertex: Node, closure: VertexSubset },
    /// The player hands the components in `menu` to the adversary who returns the union
    /// `choice` of some of them; forcing in `Z ∪ choice` and then in the whole graph
    /// leads to `closure`
    Hand {
        menu: SmallVec<[VertexSubset; 4]>,
        choice: VertexSubset,
        closure: VertexSubset,
    },
}

impl Move {
    /// Returns the closed set reached after the move
    pub fn closure(&self) -> VertexSubset {
        match self {
            Self::Spend { closure, .. } | Self::Hand { closure, .. } => *closure,
        }
    }

    /// Returns *true* if the move costs one unit
    pub fn is_spend(&self) -> bool {
        matches!(self, Self::Spend { .. })
    }
}

/// A single position on the optimal trail together with the move played there
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub from: VertexSubset,
    pub play: Move,
}

impl Step {
    /// Returns a [`Display`]-able view that renders vertices by their original labels
    pub fn display<'a>(&'a self, model: &'a AdjacencyModel) -> StepDisplay<'a> {
        StepDisplay { step: self, model }
    }
}

pub struct StepDisplay<'a> {
    step: &'a Step,
    model: &'a AdjacencyModel,
}

impl Display for StepDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let model = self.model;
        write!(f, "{} ", model.display_subset(self.step.from))?;
        match &self.step.play {
            Move::Spend { vertex, closure } => write!(
                f,
                "spend {} -> {}",
                model.label(*vertex),
                model.display_subset(*closure)
            ),
            Move::Hand {
                menu,
                choice,
                closure,
            } => write!(
                f,
                "hand [{}], adversary returns {} -> {}",
                menu.iter().map(|c| model.display_subset(*c)).join(", "),
                model.display_subset(*choice),
                model.display_subset(*closure)
            ),
        }
    }
}

/// Number of spend moves on a trail
pub fn trail_cost(trail: &[Step]) -> NumNodes {
    trail.iter().filter(|s| s.play.is_spend()).count() as NumNodes
}

/// Renders a trail one step per line
pub fn format_trail(model: &AdjacencyModel, trail: &[Step]) -> String {
    trail.iter().map(|s| s.display(model).to_string()).join("\n")
}
