use super::artifacts;
use crate::analysis::classifier::{
    classify, classify_with, Capability, Rule, RuleKind, DEFAULT_ARCHITECTURE, DEFAULT_PURPOSE,
    RULES,
};
use crate::analysis::Signals;

fn classify_repo(package_json: Option<&str>, entries: &[&str]) -> crate::analysis::Narrative {
    classify(&Signals::extract(&artifacts(package_json, entries)))
}

#[test]
fn test_first_exclusive_rule_owns_the_narrative() {
    let narrative = classify_repo(
        Some(r#"{ "dependencies": { "express": "4", "react": "18" } }"#),
        &[],
    );

    assert!(narrative.purpose.starts_with("A React web application"));
    assert_eq!(
        narrative.architecture,
        "Component-based React architecture with hooks and context"
    );
    assert!(narrative.features.contains(&"Virtual DOM".to_string()));
    assert!(!narrative.features.contains(&"RESTful API".to_string()));
    assert!(!narrative.capabilities.has_api);
}

#[test]
fn test_express_sets_api_flag() {
    let narrative = classify_repo(Some(r#"{ "dependencies": { "express": "4" } }"#), &[]);
    assert!(narrative.capabilities.has_api);
    assert_eq!(
        narrative.features,
        vec!["RESTful API", "Middleware Support", "Route Handling"]
    );
}

#[test]
fn test_additive_rules_run_regardless_of_branch() {
    let narrative = classify_repo(
        Some(
            r#"{
                "dependencies": { "next": "14", "@prisma/client": "5", "next-auth": "4", "stripe": "1", "socket.io": "4" },
                "devDependencies": { "typescript": "5", "vitest": "1" }
            }"#,
        ),
        &[],
    );

    let caps = narrative.capabilities;
    assert!(caps.is_full_stack);
    assert!(caps.has_database);
    assert!(caps.has_auth);
    assert!(caps.has_tests);
    assert!(!caps.has_api);
    for feature in [
        "API Routes",
        "ORM/ODM Support",
        "Session Management",
        "WebSocket Support",
        "Payment Processing",
        "Type Safety",
        "Automated Testing",
    ] {
        assert!(
            narrative.features.iter().any(|f| f == feature),
            "missing {}",
            feature
        );
    }
}

#[test]
fn test_test_files_do_not_repeat_testing_features() {
    let narrative = classify_repo(
        Some(r#"{ "dependencies": {}, "devDependencies": { "jest": "29" } }"#),
        &["__tests__"],
    );
    assert_eq!(narrative.features, vec!["Automated Testing", "Test Coverage"]);

    let narrative = classify_repo(None, &["spec"]);
    assert!(narrative.capabilities.has_tests);
    assert_eq!(narrative.features, vec!["Test Coverage", "Quality Assurance"]);
}

#[test]
fn test_listing_flags_raise_capabilities() {
    let narrative = classify_repo(None, &["netlify.toml", ".github", "docker-compose.yml"]);

    assert!(narrative.capabilities.deployment_ready);
    assert!(narrative.capabilities.has_container);
    assert_eq!(
        narrative.features,
        vec![
            "Containerized Deployment",
            "Docker Support",
            "Cloud Deployment",
            "Production Ready",
            "CI/CD Pipeline",
            "GitHub Actions",
        ]
    );
}

#[test]
fn test_no_signals_falls_back_to_defaults() {
    let narrative = classify_repo(None, &["LICENSE", "notes.md"]);
    assert_eq!(narrative.purpose, DEFAULT_PURPOSE);
    assert_eq!(narrative.architecture, DEFAULT_ARCHITECTURE);
    assert!(narrative.features.is_empty());
    assert_eq!(narrative.capabilities, Default::default());
}

#[test]
fn test_pyproject_features_survive_javascript_branch() {
    let mut raw = artifacts(None, &["pyproject.toml"]);
    let narrative = classify(&Signals::extract(&raw));
    assert!(narrative.purpose.contains("Poetry"));
    assert_eq!(
        narrative.features,
        vec![
            "Modern Python Packaging",
            "Dependency Management",
            "Virtual Environment Support",
        ]
    );

    raw.files.push((
        "package.json".to_string(),
        r#"{ "dependencies": { "vue": "3" } }"#.to_string(),
    ));
    let narrative = classify(&Signals::extract(&raw));
    assert!(narrative.purpose.starts_with("A Vue.js"));
    assert!(narrative.features.iter().any(|f| f == "Reactive Data Binding"));
    assert!(narrative.features.iter().any(|f| f == "Modern Python Packaging"));
}

#[test]
fn test_docker_features_precede_python_packaging() {
    let mut raw = artifacts(
        Some(r#"{ "dependencies": { "next": "14" } }"#),
        &["package.json", "pyproject.toml", "Dockerfile"],
    );
    raw.files.push(("Dockerfile".to_string(), "FROM node:20".to_string()));
    raw.files.push(("pyproject.toml".to_string(), "[tool.poetry]".to_string()));

    let narrative = classify(&Signals::extract(&raw));
    assert!(narrative.purpose.starts_with("A Next.js"));
    assert_eq!(
        narrative.features,
        vec![
            "Server-Side Rendering (SSR)",
            "Static Site Generation (SSG)",
            "API Routes",
            "React Server Components",
            "Containerized Deployment",
            "Docker Support",
            "Modern Python Packaging",
            "Dependency Management",
            "Virtual Environment Support",
        ]
    );
}

#[test]
fn test_dockerignore_only_marks_container() {
    let narrative = classify_repo(None, &[".dockerignore"]);

    assert!(narrative.capabilities.has_container);
    assert!(!narrative.capabilities.deployment_ready);
    assert!(narrative.features.is_empty());
}

#[test]
fn test_rule_table_shape() {
    let exclusive: Vec<&str> = RULES
        .iter()
        .filter(|r| r.kind == RuleKind::Exclusive)
        .map(|r| r.name)
        .collect();
    assert_eq!(exclusive, vec!["next", "react", "vue", "express", "poetry"]);
    assert!(RULES
        .iter()
        .filter(|r| r.kind == RuleKind::Additive)
        .all(|r| r.purpose.is_none() && r.architecture.is_none()));
}

#[test]
fn test_custom_rule_table() {
    let rules = [Rule {
        name: "always",
        kind: RuleKind::Additive,
        applies: |_| true,
        purpose: None,
        architecture: None,
        features: &["Always On"],
        capabilities: &[Capability::Auth],
        unless_feature: None,
    }];

    let narrative = classify_with(&rules, &Signals::default());
    assert_eq!(narrative.features, vec!["Always On"]);
    assert!(narrative.capabilities.has_auth);
    assert_eq!(narrative.purpose, DEFAULT_PURPOSE);
}
