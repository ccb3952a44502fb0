use super::candidate::Candidate;
use crate::grid::GridConfig;
use crate::grid::Placement;
use crate::trace::trace;
use crate::trace::MirrorMap;
use crate::Score;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// the optimizer's answer: the best achieved length and the mirror
/// list achieving it. also the contract any external solver must
/// satisfy before its result is trusted: `verify` replays the claimed
/// mirrors through the tracer and checks the claimed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    length: Score,
    mirrors: Vec<Placement>,
}

impl Solution {
    pub fn new(length: Score, mirrors: Vec<Placement>) -> Self {
        Self { length, mirrors }
    }

    pub fn length(&self) -> Score {
        self.length
    }
    pub fn mirrors(&self) -> &[Placement] {
        &self.mirrors
    }

    /// replay the mirrors through a full trace and check the claim.
    pub fn verify(&self, grid: &GridConfig) -> bool {
        let map = self
            .mirrors
            .iter()
            .map(|p| (p.cell, p.mirror))
            .collect::<MirrorMap>();
        trace(grid, &map).length() == self.length
    }
}

impl From<&Candidate> for Solution {
    fn from(candidate: &Candidate) -> Self {
        Self {
            length: candidate.score(),
            mirrors: candidate.mirrors().to_vec(),
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "length {} [", self.length)?;
        for (i, placement) in self.mirrors.iter().enumerate() {
            match i {
                0 => write!(f, "{}", placement)?,
                _ => write!(f, ", {}", placement)?,
            }
        }
        write!(f, "]")
    }
}
