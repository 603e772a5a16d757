mod input;
mod report;
mod sim;
mod stats;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use report::PolicyRun;
use sim::Policy;

#[derive(Parser)]
#[command(
    name = "page-replacement-simulator",
    about = "Simulates FIFO, LRU and Optimal page replacement over a reference string"
)]
struct Args {
    /// Comma-separated page reference string, e.g. "1,2,3,4,1,2,5"
    refs: String,

    /// Number of physical frames (1-10)
    #[arg(short, long, default_value_t = 3)]
    frames: usize,

    /// Replacement policy to simulate
    #[arg(short, long, value_enum, default_value = "fifo")]
    policy: PolicyArg,

    /// Run all three policies and append a comparison summary
    #[arg(long)]
    compare: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    Optimal,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fifo => Policy::Fifo,
            PolicyArg::Lru => Policy::Lru,
            PolicyArg::Optimal => Policy::Optimal,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let refs = input::validate(&args.refs, args.frames)?;

    let policies: Vec<Policy> = if args.compare {
        vec![Policy::Fifo, Policy::Lru, Policy::Optimal]
    } else {
        vec![args.policy.into()]
    };

    let runs = report::run_policies(&refs, args.frames, &policies);
    for run in &runs {
        println!("{run}\n");
    }
    if args.compare {
        print_summary(&runs);
    }
    Ok(())
}

fn print_summary(runs: &[PolicyRun]) {
    println!("== Summary ==");
    for run in runs {
        println!(
            "  {:<8} faults {:>3}  hit {:>6.2}%  fault {:>6.2}%",
            run.policy.name(),
            run.result.total_faults,
            run.result.hit_rate() * 100.0,
            run.result.fault_rate() * 100.0
        );
    }
}
