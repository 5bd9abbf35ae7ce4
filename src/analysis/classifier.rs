//! Narrative classification as an ordered rule table.
//!
//! Exclusive rules form a first-match-wins chain that owns the purpose and
//! architecture sentences. Additive rules always run. Both kinds contribute
//! features and capability flags when they match.

use serde::Serialize;

use super::signals::Signals;

pub const DEFAULT_PURPOSE: &str =
    "A modern software application with advanced features and robust architecture.";
pub const DEFAULT_ARCHITECTURE: &str = "Modular architecture with clean separation of concerns";

const TEST_FRAMEWORKS: [&str; 3] = ["jest", "vitest", "cypress"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FullStack,
    Api,
    Database,
    Auth,
    Tests,
    Container,
    DeploymentReady,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub is_full_stack: bool,
    pub has_api: bool,
    pub has_database: bool,
    pub has_auth: bool,
    pub has_tests: bool,
    pub has_container: bool,
    pub deployment_ready: bool,
}

impl Capabilities {
    /// Flags are only ever raised.
    pub fn raise(&mut self, capability: Capability) {
        match capability {
            Capability::FullStack => self.is_full_stack = true,
            Capability::Api => self.has_api = true,
            Capability::Database => self.has_database = true,
            Capability::Auth => self.has_auth = true,
            Capability::Tests => self.has_tests = true,
            Capability::Container => self.has_container = true,
            Capability::DeploymentReady => self.deployment_ready = true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Exclusive,
    Additive,
}

pub struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub applies: fn(&Signals) -> bool,
    pub purpose: Option<&'static str>,
    pub architecture: Option<&'static str>,
    pub features: &'static [&'static str],
    pub capabilities: &'static [Capability],
    /// Features are skipped when an existing feature contains this text.
    pub unless_feature: Option<&'static str>,
}

impl Rule {
    const fn exclusive(
        name: &'static str,
        applies: fn(&Signals) -> bool,
        purpose: &'static str,
        architecture: &'static str,
        features: &'static [&'static str],
        capabilities: &'static [Capability],
    ) -> Self {
        Self {
            name,
            kind: RuleKind::Exclusive,
            applies,
            purpose: Some(purpose),
            architecture: Some(architecture),
            features,
            capabilities,
            unless_feature: None,
        }
    }

    const fn additive(
        name: &'static str,
        applies: fn(&Signals) -> bool,
        features: &'static [&'static str],
        capabilities: &'static [Capability],
    ) -> Self {
        Self {
            name,
            kind: RuleKind::Additive,
            applies,
            purpose: None,
            architecture: None,
            features,
            capabilities,
            unless_feature: None,
        }
    }

    const fn unless_feature(mut self, text: &'static str) -> Self {
        self.unless_feature = Some(text);
        self
    }
}

pub static RULES: &[Rule] = &[
    Rule::exclusive(
        "next",
        |s| s.has_dependency("next"),
        "A Next.js full-stack web application with modern React architecture and server-side capabilities.",
        "Next.js App Router with React Server Components and API routes",
        &[
            "Server-Side Rendering (SSR)",
            "Static Site Generation (SSG)",
            "API Routes",
            "React Server Components",
        ],
        &[Capability::FullStack],
    ),
    Rule::exclusive(
        "react",
        |s| s.has_dependency("react"),
        "A React web application with component-based architecture and modern development practices.",
        "Component-based React architecture with hooks and context",
        &[
            "Component-based UI",
            "Virtual DOM",
            "State Management",
            "Modern React Hooks",
        ],
        &[],
    ),
    Rule::exclusive(
        "vue",
        |s| s.has_dependency("vue"),
        "A Vue.js progressive web application with reactive data binding and component composition.",
        "Vue.js progressive framework with composition API",
        &[
            "Progressive Framework",
            "Reactive Data Binding",
            "Component Composition",
        ],
        &[],
    ),
    Rule::exclusive(
        "express",
        |s| s.has_dependency("express"),
        "A Node.js Express server application providing RESTful API services with middleware support.",
        "RESTful API server architecture with Express.js middleware",
        &["RESTful API", "Middleware Support", "Route Handling"],
        &[Capability::Api],
    ),
    Rule::additive(
        "database",
        |s| s.has_dependency("mongoose") || s.has_dependency("@prisma/client"),
        &["Database Integration", "ORM/ODM Support"],
        &[Capability::Database],
    ),
    Rule::additive(
        "auth",
        |s| s.has_dependency("passport") || s.has_dependency("next-auth"),
        &["Authentication System", "Session Management"],
        &[Capability::Auth],
    ),
    Rule::additive(
        "realtime",
        |s| s.has_dependency("socket.io"),
        &["Real-time Communication", "WebSocket Support"],
        &[],
    ),
    Rule::additive(
        "payments",
        |s| s.has_dependency("stripe"),
        &["Payment Processing", "E-commerce Integration"],
        &[],
    ),
    Rule::additive(
        "typescript",
        |s| s.declares("typescript"),
        &["Type Safety", "Enhanced Developer Experience"],
        &[],
    ),
    Rule::additive(
        "tailwind",
        |s| s.declares("tailwindcss"),
        &["Modern Styling", "Utility-first CSS"],
        &[],
    ),
    Rule::additive(
        "test-framework",
        |s| TEST_FRAMEWORKS.iter().any(|t| s.has_dev_dependency(t)),
        &["Automated Testing", "Test Coverage"],
        &[Capability::Tests],
    ),
    Rule::additive(
        "container",
        |s| {
            s.container_config
                || s.has_listed_file("dockerfile")
                || s.has_listed_file("docker-compose.yml")
        },
        &["Containerized Deployment", "Docker Support"],
        &[Capability::Container, Capability::DeploymentReady],
    ),
    // Any docker-related name in the listing, e.g. .dockerignore.
    Rule::additive("docker-listing", |s| s.files.container, &[], &[Capability::Container]),
    // Sits in the chain after express, so a JavaScript branch keeps the
    // narrative while the packaging features below still apply.
    Rule::exclusive(
        "poetry",
        |s| s.pyproject,
        "A Python application with modern packaging and dependency management using Poetry.",
        "Python modular architecture with clean package structure",
        &[],
        &[],
    ),
    Rule::additive(
        "python-packaging",
        |s| s.pyproject,
        &[
            "Modern Python Packaging",
            "Dependency Management",
            "Virtual Environment Support",
        ],
        &[],
    ),
    Rule::additive(
        "cloud-deploy",
        |s| s.files.deploy,
        &["Cloud Deployment", "Production Ready"],
        &[Capability::DeploymentReady],
    ),
    Rule::additive(
        "test-files",
        |s| s.files.test,
        &["Test Coverage", "Quality Assurance"],
        &[Capability::Tests],
    )
    .unless_feature("Testing"),
    Rule::additive(
        "ci",
        |s| s.files.ci,
        &["CI/CD Pipeline", "GitHub Actions"],
        &[],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub purpose: String,
    pub architecture: String,
    pub features: Vec<String>,
    pub capabilities: Capabilities,
}

impl Default for Narrative {
    fn default() -> Self {
        Self {
            purpose: DEFAULT_PURPOSE.to_string(),
            architecture: DEFAULT_ARCHITECTURE.to_string(),
            features: Vec::new(),
            capabilities: Capabilities::default(),
        }
    }
}

impl Narrative {
    fn add_feature(&mut self, feature: &str) {
        if !self.features.iter().any(|f| f == feature) {
            self.features.push(feature.to_string());
        }
    }
}

pub fn classify(signals: &Signals) -> Narrative {
    classify_with(RULES, signals)
}

pub fn classify_with(rules: &[Rule], signals: &Signals) -> Narrative {
    let mut narrative = Narrative::default();
    let mut chain_resolved = false;

    for rule in rules {
        if rule.kind == RuleKind::Exclusive && chain_resolved {
            continue;
        }
        if !(rule.applies)(signals) {
            continue;
        }

        if rule.kind == RuleKind::Exclusive {
            chain_resolved = true;
            if let Some(purpose) = rule.purpose {
                narrative.purpose = purpose.to_string();
            }
            if let Some(architecture) = rule.architecture {
                narrative.architecture = architecture.to_string();
            }
        }

        let suppressed = rule
            .unless_feature
            .map(|text| narrative.features.iter().any(|f| f.contains(text)))
            .unwrap_or(false);
        if !suppressed {
            for feature in rule.features {
                narrative.add_feature(feature);
            }
        }

        for capability in rule.capabilities {
            narrative.capabilities.raise(*capability);
        }
    }

    narrative
}
