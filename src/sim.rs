use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

/// One record per reference: the requested page, a copy of the frame
/// contents after the request was processed, and whether it faulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<P> {
    pub page: P,
    pub frames: Vec<Option<P>>,
    pub fault: bool,
}

#[derive(Debug, Clone)]
pub struct SimulationResult<P> {
    pub steps: Vec<Step<P>>,
    pub total_faults: usize,
}

impl<P> SimulationResult<P> {
    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            (self.steps.len() - self.total_faults) as f64 / self.steps.len() as f64
        }
    }

    pub fn fault_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.total_faults as f64 / self.steps.len() as f64
        }
    }
}

/// Runs one policy over the whole reference sequence. Input is assumed to
/// be validated: `frame_count` at least 1, `refs` non-empty.
pub fn simulate<P: Copy + Eq + Hash>(
    policy: Policy,
    refs: &[P],
    frame_count: usize,
) -> SimulationResult<P> {
    match policy {
        Policy::Fifo => run(refs, frame_count, FifoQueue::default()),
        Policy::Lru => run(refs, frame_count, LruTracker::new()),
        Policy::Optimal => run(refs, frame_count, Lookahead { refs }),
    }
}

/// The three policies differ only in victim choice and the bookkeeping that
/// feeds it; the per-step loop itself is shared.
trait EvictionPolicy<P> {
    // Called once per reference, hits included, after residency is resolved.
    fn note_access(&mut self, _page: P, _position: usize) {}

    // Called whenever a page is placed into `slot`, on every fault.
    fn note_load(&mut self, _slot: usize) {}

    // All slots occupied; pick the one to vacate.
    fn choose_victim(&mut self, frames: &[Option<P>], position: usize) -> usize;
}

fn run<P: Copy + Eq, E: EvictionPolicy<P>>(
    refs: &[P],
    frame_count: usize,
    mut policy: E,
) -> SimulationResult<P> {
    let mut frames: Vec<Option<P>> = vec![None; frame_count];
    let mut steps = Vec::with_capacity(refs.len());
    let mut total_faults = 0;
    for (position, &page) in refs.iter().enumerate() {
        let resident = frames.contains(&Some(page));
        if !resident {
            total_faults += 1;
            let slot = match frames.iter().position(|slot| slot.is_none()) {
                Some(free) => free,
                None => policy.choose_victim(&frames, position),
            };
            frames[slot] = Some(page);
            policy.note_load(slot);
        }
        policy.note_access(page, position);
        steps.push(Step {
            page,
            frames: frames.clone(),
            fault: !resident,
        });
    }
    SimulationResult { steps, total_faults }
}

/// Load-order queue of slot indices. Hits never touch it; an evicted slot is
/// re-registered at the tail as the most recently loaded.
#[derive(Default)]
struct FifoQueue {
    order: VecDeque<usize>,
}

impl<P> EvictionPolicy<P> for FifoQueue {
    fn note_load(&mut self, slot: usize) {
        self.order.push_back(slot);
    }

    fn choose_victim(&mut self, _frames: &[Option<P>], _position: usize) -> usize {
        self.order.pop_front().unwrap_or(0)
    }
}

/// Last-access position per page, updated on hits and faults alike.
struct LruTracker<P> {
    last_used: HashMap<P, usize>,
}

impl<P> LruTracker<P> {
    fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }
}

impl<P: Copy + Eq + Hash> EvictionPolicy<P> for LruTracker<P> {
    fn note_access(&mut self, page: P, position: usize) {
        self.last_used.insert(page, position);
    }

    fn choose_victim(&mut self, frames: &[Option<P>], _position: usize) -> usize {
        let mut victim = 0;
        let mut oldest = usize::MAX;
        for (idx, slot) in frames.iter().enumerate() {
            let Some(page) = slot else { continue };
            let used = self.last_used.get(page).copied().unwrap_or(0);
            // Strict comparison: ties go to the lowest slot index.
            if used < oldest {
                oldest = used;
                victim = idx;
            }
        }
        victim
    }
}

/// Belady's algorithm: evict the resident page whose next occurrence lies
/// farthest in the unconsumed suffix. Non-causal; needs the full sequence.
struct Lookahead<'a, P> {
    refs: &'a [P],
}

impl<P: Eq> EvictionPolicy<P> for Lookahead<'_, P> {
    fn choose_victim(&mut self, frames: &[Option<P>], position: usize) -> usize {
        let remainder = &self.refs[position + 1..];
        let mut victim = 0;
        let mut farthest = 0;
        for (idx, slot) in frames.iter().enumerate() {
            let Some(page) = slot else { continue };
            match remainder.iter().position(|next| next == page) {
                // Never referenced again; nothing can beat it.
                None => return idx,
                Some(distance) if distance > farthest => {
                    farthest = distance;
                    victim = idx;
                }
                Some(_) => {}
            }
        }
        victim
    }
}
