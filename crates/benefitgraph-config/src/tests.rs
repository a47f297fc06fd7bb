//! Tests for evaluator configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        programs = ["HeadStart", "EarnedIncomeTaxCredit"]
        parallelism = "sequential"
        random_seed = 42
        log_filter = "benefitgraph=debug"

        [dataset]
        path = "households.jsonl"
        shift = 3
    "#;

    let config = EvaluatorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.programs, vec!["HeadStart", "EarnedIncomeTaxCredit"]);
    assert_eq!(config.parallelism, Parallelism::Sequential);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.log_filter.as_deref(), Some("benefitgraph=debug"));
    let dataset = config.dataset.unwrap();
    assert_eq!(dataset.path, PathBuf::from("households.jsonl"));
    assert_eq!(dataset.shift, 3);
}

#[test]
fn test_toml_thread_count() {
    let config = EvaluatorConfig::from_toml_str("parallelism = { threads = 6 }").unwrap();
    assert_eq!(config.parallelism, Parallelism::Threads(6));
    assert_eq!(config.thread_count(), Some(6));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        programs:
          - ChildTaxCredit
        parallelism: auto
        random_seed: 42
        dataset:
          path: data/eval.jsonl
    "#;

    let config = EvaluatorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.programs, vec!["ChildTaxCredit"]);
    assert_eq!(config.parallelism, Parallelism::Auto);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.dataset.unwrap().shift, 0);
}

#[test]
fn test_defaults() {
    let config = EvaluatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, EvaluatorConfig::default());
    assert!(config.programs.is_empty());
    assert_eq!(config.thread_count(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_parallelism_rejected() {
    let err = EvaluatorConfig::from_toml_str(r#"parallelism = "turbo""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = EvaluatorConfig::new()
        .with_program("HeadStart")
        .with_parallelism(Parallelism::Threads(2))
        .with_random_seed(123)
        .with_log_filter("benefitgraph=trace")
        .with_dataset("hh.jsonl");

    assert_eq!(config.programs.len(), 1);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.dataset.as_ref().unwrap().shift, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_threads() {
    let config = EvaluatorConfig::new().with_parallelism(Parallelism::Threads(0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_duplicate_and_blank_programs() {
    let config = EvaluatorConfig::new()
        .with_program("HeadStart")
        .with_program("HeadStart");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("listed twice"));

    let config = EvaluatorConfig::new().with_program("  ");
    assert!(config.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let err = EvaluatorConfig::load("/nonexistent/benefitgraph.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
