use serde::{Serialize, Serializer};
use std::fmt;

use super::signals::Signals;

pub const GENERIC_ENTRY_POINT: &str = "main application";

const ENTRY_POINT_FILES: [&str; 4] = ["main.py", "app.py", "index.js", "server.js"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Poetry,
    Pip,
    Conda,
    Docker,
    Other(String),
}

impl PackageManager {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "npm" => Self::Npm,
            "yarn" => Self::Yarn,
            "pnpm" => Self::Pnpm,
            "poetry" => Self::Poetry,
            "pip" => Self::Pip,
            "conda" => Self::Conda,
            "docker" => Self::Docker,
            _ => Self::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Poetry => "poetry",
            Self::Pip => "pip",
            Self::Conda => "conda",
            Self::Docker => "docker",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Name with its first letter capitalised, e.g. "Npm".
    pub fn display_name(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn badge_url(&self) -> &'static str {
        match self {
            Self::Yarn => "https://img.shields.io/badge/Yarn-2C8EBB.svg?style=flat-square&logo=yarn&logoColor=white",
            Self::Pnpm => "https://img.shields.io/badge/pnpm-F69220.svg?style=flat-square&logo=pnpm&logoColor=white",
            Self::Poetry => "https://img.shields.io/endpoint?url=https://python-poetry.org/badge/v0.json",
            Self::Pip => "https://img.shields.io/badge/Pip-3776AB.svg?style=flat-square&logo=pypi&logoColor=white",
            Self::Conda => "https://img.shields.io/badge/conda-342B029.svg?style=flat-square&logo=anaconda&logoColor=white",
            Self::Docker => "https://img.shields.io/badge/Docker-2CA5E0.svg?style=flat-square&logo=docker&logoColor=white",
            Self::Npm | Self::Other(_) => "https://img.shields.io/badge/npm-CB3837.svg?style=flat-square&logo=npm&logoColor=white",
        }
    }

    pub fn homepage(&self) -> &'static str {
        match self {
            Self::Yarn => "https://yarnpkg.com/",
            Self::Pnpm => "https://pnpm.io/",
            Self::Poetry => "https://python-poetry.org/",
            Self::Pip => "https://pypi.org/project/pip/",
            Self::Conda => "https://docs.conda.io/",
            Self::Docker => "https://www.docker.com/",
            Self::Npm | Self::Other(_) => "https://www.npmjs.com/",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn install",
            Self::Pnpm => "pnpm install",
            Self::Poetry => "poetry install",
            Self::Pip => "pip install -r requirements.txt",
            Self::Conda => "conda env create -f environment.yaml",
            Self::Docker => "docker build -t project-name .",
            Self::Npm | Self::Other(_) => "npm install",
        }
    }

    pub fn run_command(&self, entry_point: &str) -> String {
        match self {
            Self::Npm => "npm start".to_string(),
            Self::Yarn => "yarn start".to_string(),
            Self::Pnpm => "pnpm start".to_string(),
            Self::Poetry => format!("poetry run python {}", entry_point),
            Self::Pip => format!("python {}", entry_point),
            Self::Conda => format!("conda activate {{venv}}\n❯ python {}", entry_point),
            Self::Docker => "docker run -it project-name".to_string(),
            Self::Other(_) => format!("node {}", entry_point),
        }
    }

    pub fn test_command(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn test",
            Self::Pnpm => "pnpm test",
            Self::Poetry => "poetry run pytest",
            Self::Pip => "pytest",
            Self::Conda => "conda activate {venv}\n❯ pytest",
            Self::Docker => "docker run -it project-name npm test",
            Self::Npm | Self::Other(_) => "npm test",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PackageManager {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    pub package_managers: Vec<PackageManager>,
    pub entry_point: String,
    pub start_commands: Vec<String>,
}

pub struct CommandSynthesizer;

impl CommandSynthesizer {
    pub fn synthesize(signals: &Signals, language: &str) -> CommandPlan {
        CommandPlan {
            package_managers: Self::package_managers(signals),
            entry_point: Self::entry_point(signals),
            start_commands: Self::start_commands(signals, language),
        }
    }

    /// Never empty: npm is assumed when nothing else is detected.
    pub fn package_managers(signals: &Signals) -> Vec<PackageManager> {
        let mut managers = Vec::new();

        if signals.manifest.is_some() {
            managers.push(PackageManager::Npm);
        }

        let detections = [
            (PackageManager::Yarn, &["yarn.lock"][..]),
            (PackageManager::Pnpm, &["pnpm-lock.yaml"][..]),
            (PackageManager::Poetry, &["pyproject.toml"][..]),
            (PackageManager::Pip, &["requirements.txt"][..]),
            (PackageManager::Conda, &["environment.yaml", "environment.yml"][..]),
            (PackageManager::Docker, &["dockerfile"][..]),
        ];
        for (manager, files) in detections {
            if files.iter().any(|f| signals.has_listed_file(f)) {
                managers.push(manager);
            }
        }

        if managers.is_empty() {
            managers.push(PackageManager::Npm);
        }
        managers
    }

    pub fn entry_point(signals: &Signals) -> String {
        if let Some(manifest) = &signals.manifest {
            if let Some(main) = &manifest.main {
                return main.clone();
            }
            if manifest.has_script("start") {
                return GENERIC_ENTRY_POINT.to_string();
            }
        }

        ENTRY_POINT_FILES
            .iter()
            .find(|file| signals.has_listed_file(file))
            .map(|file| file.to_string())
            .unwrap_or_else(|| GENERIC_ENTRY_POINT.to_string())
    }

    pub fn start_commands(signals: &Signals, language: &str) -> Vec<String> {
        let mut commands = Vec::new();

        match signals.manifest.as_ref().filter(|m| m.scripts.is_some()) {
            Some(manifest) => {
                let run = [("dev", "npm run dev"), ("start", "npm start"), ("serve", "npm run serve")]
                    .into_iter()
                    .find(|(script, _)| manifest.has_script(script));
                if let Some((_, command)) = run {
                    commands.push(command.to_string());
                }
                if manifest.has_script("build") {
                    commands.push("npm run build".to_string());
                }
                if manifest.has_script("test") {
                    commands.push("npm test".to_string());
                }
            }
            None => {
                let default = match language {
                    "Python" => Some("python main.py"),
                    "Go" => Some("go run main.go"),
                    "Rust" => Some("cargo run"),
                    "Java" => Some("mvn spring-boot:run"),
                    _ => None,
                };
                commands.extend(default.map(String::from));
            }
        }

        commands
    }
}
