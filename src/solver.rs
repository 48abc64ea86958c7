use crate::model::{Relation, ScheduleModel};
use good_lp::variable;
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, constraint,
    default_solver,
};
use log::{info, warn};
use std::time::{Duration, Instant};

/// Outcome of one engine invocation. `Optimal` and `Feasible` carry the
/// indices of the selected decision variables; any satisfying assignment
/// is acceptable since there is no objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    Optimal(Vec<usize>),
    Feasible(Vec<usize>),
    Infeasible,
    Error(String),
}

/// The boundary to the constraint-satisfaction search. Engines are
/// stateless: the model goes in by reference, the outcome comes back as
/// a plain value.
pub trait SolvingEngine {
    fn solve(&self, model: &ScheduleModel) -> EngineOutcome;
}

/// Shipped engine: encodes the model as a 0/1 integer program and hands
/// it to the HiGHS solver with a constant-zero objective.
#[derive(Debug, Clone)]
pub struct IlpEngine {
    /// Wall-clock budget for one solve; expiry surfaces as an engine
    /// error and triggers the fallback path.
    pub time_limit: Duration,
    pub threads: i32,
    pub random_seed: i32,
}

impl Default for IlpEngine {
    fn default() -> Self {
        IlpEngine {
            time_limit: Duration::from_secs(30),
            threads: 1,
            random_seed: 1234,
        }
    }
}

impl SolvingEngine for IlpEngine {
    fn solve(&self, model: &ScheduleModel) -> EngineOutcome {
        // with no variables every row is decidable by inspection
        if model.vars.is_empty() {
            let satisfiable = model
                .constraints
                .iter()
                .all(|c| c.relation == Relation::Le || c.bound == 0);
            return if satisfiable {
                EngineOutcome::Optimal(Vec::new())
            } else {
                EngineOutcome::Infeasible
            };
        }

        let start_time = Instant::now();
        let mut problem = ProblemVariables::new();
        let decision_vars = problem.add_vector(variable().binary(), model.vars.len());

        info!(
            "Starting ILP solver with {} variables and {} constraints...",
            model.vars.len(),
            model.constraints.len()
        );
        let mut ilp = problem
            .minimise(Expression::default())
            .using(default_solver)
            .set_option("threads", self.threads)
            .set_option("random_seed", self.random_seed)
            .set_option("time_limit", self.time_limit.as_secs_f64());

        for row in &model.constraints {
            let total: Expression = row.vars.iter().map(|&i| decision_vars[i]).sum();
            let bound = f64::from(row.bound);
            match row.relation {
                Relation::Eq => ilp.add_constraint(constraint!(total == bound)),
                Relation::Le => ilp.add_constraint(constraint!(total <= bound)),
            };
        }

        match ilp.solve() {
            Ok(solution) => {
                info!("Solution found in {:.2?}", start_time.elapsed());
                let selected = (0..model.vars.len())
                    .filter(|&i| solution.value(decision_vars[i]) > 0.9)
                    .collect();
                EngineOutcome::Optimal(selected)
            }
            Err(ResolutionError::Infeasible) => {
                warn!("Solver proved the model infeasible.");
                EngineOutcome::Infeasible
            }
            Err(e) => EngineOutcome::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearConstraint;

    fn empty_model(constraints: Vec<LinearConstraint>) -> ScheduleModel {
        ScheduleModel {
            vars: Vec::new(),
            constraints,
        }
    }

    #[test]
    fn empty_universe_without_rows_is_trivially_optimal() {
        let outcome = IlpEngine::default().solve(&empty_model(Vec::new()));
        assert_eq!(outcome, EngineOutcome::Optimal(Vec::new()));
    }

    #[test]
    fn empty_universe_with_positive_count_row_is_infeasible() {
        let rows = vec![LinearConstraint {
            vars: Vec::new(),
            relation: Relation::Eq,
            bound: 3,
        }];
        let outcome = IlpEngine::default().solve(&empty_model(rows));
        assert_eq!(outcome, EngineOutcome::Infeasible);
    }

    #[test]
    fn empty_universe_ignores_upper_bound_rows() {
        let rows = vec![LinearConstraint {
            vars: Vec::new(),
            relation: Relation::Le,
            bound: 1,
        }];
        let outcome = IlpEngine::default().solve(&empty_model(rows));
        assert_eq!(outcome, EngineOutcome::Optimal(Vec::new()));
    }
}
