//! `subcheck rules` – show required-file rules in effect.

use anyhow::Result;
use subcheck_core::config::SubcheckConfig;
use subcheck_core::rules::{rules_for, AssignmentType};

pub fn run_rules(cfg: &SubcheckConfig, only: Option<AssignmentType>) -> Result<()> {
    let selected: Vec<AssignmentType> = match only {
        Some(a) => vec![a],
        None => AssignmentType::ALL.to_vec(),
    };
    for assignment in selected {
        let labels: Vec<String> = rules_for(cfg, assignment).iter().map(|r| r.label()).collect();
        println!("{:<16} {}", assignment.name(), labels.join(", "));
    }
    Ok(())
}
