use super::signals::Signals;

enum Matcher {
    /// Any of these keys among runtime or dev dependencies.
    Declares(&'static [&'static str]),
    /// All of these keys among runtime dependencies.
    Depends(&'static [&'static str]),
    /// A top-level entry with this lower-cased name.
    Listed(&'static str),
}

impl Matcher {
    fn matches(&self, signals: &Signals) -> bool {
        match self {
            Matcher::Declares(keys) => keys.iter().any(|k| signals.declares(k)),
            Matcher::Depends(keys) => keys.iter().all(|k| signals.has_dependency(k)),
            Matcher::Listed(name) => signals.has_listed_file(name),
        }
    }
}

struct FrameworkPattern {
    name: &'static str,
    matcher: Matcher,
}

pub struct FrameworkDetector {
    framework_patterns: Vec<FrameworkPattern>,
    project_types: Vec<FrameworkPattern>,
}

impl FrameworkDetector {
    pub fn new() -> Self {
        let mut detector = Self {
            framework_patterns: Vec::new(),
            project_types: Vec::new(),
        };
        detector.initialize_patterns();
        detector
    }

    fn initialize_patterns(&mut self) {
        use Matcher::*;

        // Node.js dependency patterns
        self.add_framework_patterns(vec![
            ("React", Declares(&["react"])),
            ("Next.js", Declares(&["next"])),
            ("Vue.js", Declares(&["vue"])),
            ("Angular", Declares(&["angular"])),
            ("Express.js", Declares(&["express"])),
            ("Fastify", Declares(&["fastify"])),
            ("NestJS", Declares(&["nestjs"])),
            ("TypeScript", Declares(&["typescript"])),
            ("Tailwind CSS", Declares(&["tailwindcss"])),
            ("Sass/SCSS", Declares(&["sass", "scss"])),
            ("Prisma", Declares(&["prisma"])),
            ("MongoDB", Declares(&["mongoose"])),
            ("Redis", Declares(&["redis"])),
            ("GraphQL", Declares(&["graphql"])),
            ("Stripe", Declares(&["stripe"])),
            ("Socket.IO", Declares(&["socket.io"])),
        ]);

        // Build and packaging files
        self.add_framework_patterns(vec![
            ("Docker", Listed("dockerfile")),
            ("Docker Compose", Listed("docker-compose.yml")),
            ("Python", Listed("requirements.txt")),
            ("Poetry", Listed("pyproject.toml")),
            ("Rust", Listed("cargo.toml")),
            ("Go", Listed("go.mod")),
        ]);

        // Project types, most specific first
        self.project_types = vec![
            ("Next.js Application", Depends(&["next", "react"])),
            ("React Application", Depends(&["react"])),
            ("Vue.js Application", Depends(&["vue"])),
            ("Angular Application", Depends(&["angular"])),
            ("Express.js API", Depends(&["express"])),
            ("Fastify API", Depends(&["fastify"])),
            ("NestJS Application", Depends(&["nestjs"])),
            ("Containerized Application", Listed("dockerfile")),
            ("Python Poetry Project", Listed("pyproject.toml")),
            ("Python Application", Listed("requirements.txt")),
            ("Rust Application", Listed("cargo.toml")),
            ("Go Application", Listed("go.mod")),
            ("Java Maven Project", Listed("pom.xml")),
            ("Java Gradle Project", Listed("build.gradle")),
        ]
        .into_iter()
        .map(|(name, matcher)| FrameworkPattern { name, matcher })
        .collect();
    }

    fn add_framework_patterns(&mut self, patterns: Vec<(&'static str, Matcher)>) {
        self.framework_patterns.extend(
            patterns
                .into_iter()
                .map(|(name, matcher)| FrameworkPattern { name, matcher }),
        );
    }

    /// Every framework or tool with a matching signal, each named once, in
    /// order of first detection.
    pub fn detect(&self, signals: &Signals) -> Vec<String> {
        let mut frameworks: Vec<String> = Vec::new();

        for pattern in &self.framework_patterns {
            if pattern.matcher.matches(signals) && !frameworks.iter().any(|f| f == pattern.name) {
                frameworks.push(pattern.name.to_string());
            }
        }

        frameworks
    }

    pub fn project_type(&self, signals: &Signals, language: &str) -> String {
        self.project_types
            .iter()
            .find(|pattern| pattern.matcher.matches(signals))
            .map(|pattern| pattern.name.to_string())
            .unwrap_or_else(|| format!("{} Project", language))
    }
}

impl Default for FrameworkDetector {
    fn default() -> Self {
        Self::new()
    }
}
