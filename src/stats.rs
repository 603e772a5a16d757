use crate::sim::Step;

/// Per-step view of the trace with the cumulative hit rate up to and
/// including that step, as a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow<P> {
    pub page: P,
    pub fault: bool,
    pub faults_so_far: usize,
    pub hit_rate: f64,
}

pub fn analyze<P: Copy>(steps: &[Step<P>]) -> Vec<AnalysisRow<P>> {
    let mut rows = Vec::with_capacity(steps.len());
    let mut faults_so_far = 0;
    for (position, step) in steps.iter().enumerate() {
        if step.fault {
            faults_so_far += 1;
        }
        let seen = position + 1;
        let hit_rate = (seen - faults_so_far) as f64 / seen as f64 * 100.0;
        rows.push(AnalysisRow {
            page: step.page,
            fault: step.fault,
            faults_so_far,
            hit_rate,
        });
    }
    rows
}
