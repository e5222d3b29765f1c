use ccip_chaos_config::{ChaosConfig, ConfigError, Environment, ExperimentPlan};
use chrono::Utc;
use std::time::Duration;

/// Environment backed by a live deployment in real harnesses.
struct StagingEnvironment;

impl Environment for StagingEnvironment {
    fn name(&self) -> &str {
        "staging"
    }
}

const CONFIG: &str = r#"
Namespace: ccip-chaos-staging
DashboardUIDs:
  - ccip-lanes
WaitBeforeStart: ""
ExperimentFullInterval: 1h2m3s
ExperimentInjectionInterval: 3m
"#;

#[test]
fn test_harness_flow() {
    let config = ChaosConfig::from_yaml_str(CONFIG).unwrap();
    config.validate(&StagingEnvironment).assert_valid();

    assert_eq!(config.wait_before_start(), Duration::ZERO);
    assert_eq!(config.experiment_interval(), Duration::from_secs(3723));
    assert_eq!(config.experiment_injection_interval(), Duration::from_secs(180));

    let plan = ExperimentPlan::resolve(&config, Utc::now()).unwrap();
    assert_eq!(plan.injections, 20);
    assert_eq!(plan.ends_at - plan.starts_at, chrono::Duration::seconds(3723));
}

#[test]
fn test_dyn_environment_accepted() {
    let env: &dyn Environment = &StagingEnvironment;
    let report = ChaosConfig::default().validate(env);
    assert_eq!(report.issues().len(), 4);
}

#[test]
fn test_invalid_report_converts_to_error() {
    let config = ChaosConfig {
        namespace: "ccip-chaos".to_string(),
        ..ChaosConfig::default()
    };
    let err = config
        .validate(&StagingEnvironment)
        .into_result()
        .unwrap_err();
    match &err {
        ConfigError::Invalid(issues) => {
            let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
            assert_eq!(
                fields,
                vec![
                    "dashboard_uids",
                    "experiment_full_interval",
                    "experiment_injection_interval",
                ]
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("dashboard UIDs can't be empty"));
}

#[test]
fn test_malformed_duration_is_silent_zero_but_caught_by_validation() {
    let config = ChaosConfig {
        experiment_full_interval: "not-a-duration".to_string(),
        ..ChaosConfig::from_yaml_str(CONFIG).unwrap()
    };
    assert_eq!(config.experiment_interval(), Duration::ZERO);
    assert!(config.try_experiment_interval().is_err());

    let report = config.validate(&StagingEnvironment);
    assert_eq!(report.fields(), vec!["experiment_full_interval"]);
}
