use std::fmt;

use crate::{
    sim::{self, Policy, SimulationResult},
    stats::{self, AnalysisRow},
};

pub struct PolicyRun {
    pub policy: Policy,
    pub result: SimulationResult<i64>,
    pub rows: Vec<AnalysisRow<i64>>,
}

/// Runs each requested policy over the same reference sequence and pairs
/// the trace with its analysis rows.
pub fn run_policies(refs: &[i64], frame_count: usize, policies: &[Policy]) -> Vec<PolicyRun> {
    policies
        .iter()
        .map(|&policy| {
            let result = sim::simulate(policy, refs, frame_count);
            let rows = stats::analyze(&result.steps);
            PolicyRun {
                policy,
                result,
                rows,
            }
        })
        .collect()
}

fn frames_cell(frames: &[Option<i64>]) -> String {
    let cells: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        })
        .collect();
    format!("[ {} ]", cells.join(" | "))
}

impl fmt::Display for PolicyRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.policy.name())?;
        writeln!(
            f,
            "  {:>4}  {:>4}  {:<24} {:<6} {:>9}",
            "step", "page", "frames", "result", "hit-rate"
        )?;
        for (position, (step, row)) in self.result.steps.iter().zip(&self.rows).enumerate() {
            writeln!(
                f,
                "  {:>4}  {:>4}  {:<24} {:<6} {:>8.2}%",
                position + 1,
                row.page,
                frames_cell(&step.frames),
                if step.fault { "FAULT" } else { "hit" },
                row.hit_rate
            )?;
        }
        write!(
            f,
            "  faults {}/{}, hit rate {:.2}%",
            self.result.total_faults,
            self.result.steps.len(),
            self.result.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_each_requested_policy() {
        let refs = [1, 2, 3, 4, 1, 2, 5];
        let runs = run_policies(&refs, 3, &[Policy::Fifo, Policy::Lru, Policy::Optimal]);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].result.total_faults, 7);
        assert_eq!(runs[2].result.total_faults, 5);
        for run in &runs {
            assert_eq!(run.rows.len(), refs.len());
        }
    }

    #[test]
    fn frames_cell_marks_empty_slots() {
        assert_eq!(frames_cell(&[Some(1), None, None]), "[ 1 | - | - ]");
        assert_eq!(frames_cell(&[Some(4), Some(2), Some(3)]), "[ 4 | 2 | 3 ]");
    }

    #[test]
    fn display_includes_fault_footer() {
        let runs = run_policies(&[1, 2, 3, 4, 1, 2, 5], 3, &[Policy::Optimal]);
        let rendered = runs[0].to_string();
        assert!(rendered.starts_with("== Optimal =="));
        assert!(rendered.contains("faults 5/7"));
    }
}
