use std::cmp::Ordering;

/// The best complete candidates found so far, all of which share the same objective value.
#[derive(Debug, Clone, Default)]
pub(crate) enum BestSolutions<Candidate> {
    #[default]
    NoSolutions,
    Solutions {
        /// The candidates, in the order in which they were found
        candidates: Vec<Candidate>,
        objective_value: f64,
    },
}

/// How an offered candidate compared to the best candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SolutionComparison {
    Better,
    Equal,
    Worse,
}

impl<Candidate> BestSolutions<Candidate> {
    pub(crate) fn best_objective_value(&self) -> Option<f64> {
        match self {
            BestSolutions::NoSolutions => None,
            BestSolutions::Solutions {
                objective_value, ..
            } => Some(*objective_value),
        }
    }

    /// Offers a complete candidate; it replaces the best candidates if it is strictly better and
    /// joins them if it is equally good.
    pub(crate) fn offer(&mut self, candidate: Candidate, value: f64) -> SolutionComparison {
        match self {
            BestSolutions::NoSolutions => {
                *self = BestSolutions::Solutions {
                    candidates: vec![candidate],
                    objective_value: value,
                };
                SolutionComparison::Better
            }
            BestSolutions::Solutions {
                candidates,
                objective_value,
            } => match value.partial_cmp(objective_value) {
                Some(Ordering::Less) => {
                    *candidates = vec![candidate];
                    *objective_value = value;
                    SolutionComparison::Better
                }
                Some(Ordering::Equal) => {
                    candidates.push(candidate);
                    SolutionComparison::Equal
                }
                Some(Ordering::Greater) | None => SolutionComparison::Worse,
            },
        }
    }

    pub(crate) fn candidates(&self) -> &[Candidate] {
        match self {
            BestSolutions::NoSolutions => &[],
            BestSolutions::Solutions { candidates, .. } => candidates,
        }
    }

    /// Returns the first of the best candidates which was found.
    pub(crate) fn into_best(self) -> Option<Candidate> {
        match self {
            BestSolutions::NoSolutions => None,
            BestSolutions::Solutions { candidates, .. } => candidates.into_iter().next(),
        }
    }
}
