//! Every built-in graph evaluates cleanly on generated households, complete or not.

use benefitgraph_core::{random_household, seeded_rng, Household, Verdict};
use benefitgraph_programs::ProgramRegistry;
use proptest::prelude::*;

// Drops every attribute whose bit is set, except the head's relation.
fn thin_out(hh: &Household, mask: u64) -> Household {
    let mut bit = 0u32;
    let members = hh
        .members()
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let mut member = member.clone();
            let names: Vec<String> = member.names().map(str::to_string).collect();
            for name in names {
                bit = (bit + 1) % 64;
                let keep = index == 0 && name == "relation";
                if !keep && mask & (1 << bit) != 0 {
                    member.remove(&name);
                }
            }
            member
        })
        .collect();
    Household::new(members).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_complete_households_never_error(seed in any::<u64>()) {
        let registry = ProgramRegistry::builtin();
        let hh = random_household(&mut seeded_rng(seed)).unwrap();
        for program in registry.iter() {
            match program.evaluate(&hh) {
                Ok(evaluation) => prop_assert_ne!(evaluation.verdict, Verdict::Indeterminate),
                Err(e) => prop_assert!(false, "{}: {}", program.name(), e),
            }
        }
    }

    #[test]
    fn prop_missing_data_never_errors(seed in any::<u64>(), mask in any::<u64>()) {
        let registry = ProgramRegistry::builtin();
        let hh = thin_out(&random_household(&mut seeded_rng(seed)).unwrap(), mask);
        for program in registry.iter() {
            if let Err(e) = program.evaluate(&hh) {
                prop_assert!(false, "{}: {}", program.name(), e);
            }
        }
    }
}
