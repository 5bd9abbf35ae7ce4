use std::fmt::Write;

use super::manager_blocks;
use crate::analysis::Profile;

const INDEXED_FILES: [&str; 5] = [
    "package.json",
    "Dockerfile",
    "README.md",
    "pyproject.toml",
    "requirements.txt",
];
const MAX_INDEXED_FILES: usize = 6;

const GENERIC_FEATURES: [&str; 2] = [
    "Clean and maintainable code structure",
    "Responsive and user-friendly interface",
];

pub(super) fn header(out: &mut String, profile: &Profile) {
    let slug = format!("{}/{}", profile.owner, profile.name);

    out.push_str("<p align=\"center\">\n");
    out.push_str("    <img src=\"https://raw.githubusercontent.com/PKief/vscode-material-icon-theme/ec559a9f6bfd399b82bb44393651661b08aaf7ba/icons/folder-markdown-open.svg\" align=\"center\" width=\"30%\">\n");
    out.push_str("</p>\n");
    let _ = writeln!(
        out,
        "<p align=\"center\"><h1 align=\"center\">{}</h1></p>",
        profile.name.to_uppercase()
    );
    out.push_str("<p align=\"center\">\n");
    let _ = writeln!(out, "\t<em>{}</em>", profile.narrative.purpose);
    out.push_str("</p>\n");
    out.push_str("<p align=\"center\">\n");
    let _ = writeln!(out, "\t<img src=\"https://img.shields.io/github/license/{}?style=default&logo=opensourceinitiative&logoColor=white&color=0080ff\" alt=\"license\">", slug);
    let _ = writeln!(out, "\t<img src=\"https://img.shields.io/github/last-commit/{}?style=default&logo=git&logoColor=white&color=0080ff\" alt=\"last-commit\">", slug);
    let _ = writeln!(out, "\t<img src=\"https://img.shields.io/github/languages/top/{}?style=default&color=0080ff\" alt=\"repo-top-language\">", slug);
    let _ = writeln!(out, "\t<img src=\"https://img.shields.io/github/languages/count/{}?style=default&color=0080ff\" alt=\"repo-language-count\">", slug);
    out.push_str("</p>\n");
    out.push_str("<p align=\"center\"><!-- default option, no dependency badges. -->\n");
    out.push_str("</p>\n");
    out.push_str("<p align=\"center\">\n");
    out.push_str("\t<!-- default option, no dependency badges. -->\n");
    out.push_str("</p>\n");
    out.push_str("<br>\n\n");
}

pub(super) fn table_of_contents(out: &mut String) {
    out.push_str("## Table of Contents\n\n");
    for entry in [
        "- [ Overview](#-overview)",
        "- [ Features](#-features)",
        "- [ Project Structure](#-project-structure)",
        "  - [ Project Index](#-project-index)",
        "- [ Getting Started](#-getting-started)",
        "  - [ Prerequisites](#-prerequisites)",
        "  - [ Installation](#-installation)",
        "  - [ Usage](#-usage)",
        "  - [ Testing](#-testing)",
        "- [ Project Roadmap](#-project-roadmap)",
        "- [ Contributing](#-contributing)",
        "- [ License](#-license)",
        "- [ Acknowledgments](#-acknowledgments)",
    ] {
        out.push_str(entry);
        out.push('\n');
    }
    out.push('\n');
}

pub(super) fn overview(out: &mut String, profile: &Profile) {
    out.push_str("## Overview\n\n");
    if !profile.description.is_empty() {
        let _ = write!(out, "{}\n\n", profile.description);
    }
    let _ = write!(out, "{}\n\n", profile.narrative.architecture);
}

pub(super) fn features(out: &mut String, profile: &Profile) {
    out.push_str("## Features\n\n");
    if profile.narrative.features.is_empty() {
        let _ = writeln!(out, "- Modern {} application", profile.language.name);
        for feature in GENERIC_FEATURES {
            let _ = writeln!(out, "- {}", feature);
        }
    } else {
        for feature in &profile.narrative.features {
            let _ = writeln!(out, "- {}", feature);
        }
    }
}

pub(super) fn project_structure(out: &mut String, profile: &Profile) {
    out.push_str("## Project Structure\n\n");
    out.push_str("```sh\n");
    let _ = writeln!(out, "└── {}/", profile.name);

    let (shown, remaining) = profile.displayed_files();
    for (index, file) in shown.iter().enumerate() {
        let prefix = if index + 1 == shown.len() { "    └──" } else { "    ├──" };
        let _ = writeln!(out, "{} {}", prefix, file);
    }
    if remaining > 0 {
        let _ = writeln!(out, "    └── ... ({} more files)", remaining);
    }
    out.push_str("```\n\n");
}

pub(super) fn project_index(out: &mut String, profile: &Profile) {
    out.push_str("### Project Index\n");
    out.push_str("<details open>\n");
    let _ = writeln!(
        out,
        "\t<summary><b><code>{}/</code></b></summary>",
        profile.name.to_uppercase()
    );
    out.push_str("\t<details>\n");
    out.push_str("\t\t<summary><b>__root__</b></summary>\n");
    out.push_str("\t\t<blockquote>\n");
    out.push_str("\t\t\t<table>\n");

    let key_files = profile
        .file_structure
        .iter()
        .filter(|file| INDEXED_FILES.contains(&file.as_str()))
        .take(MAX_INDEXED_FILES);
    for file in key_files {
        out.push_str("\t\t\t<tr>\n");
        let _ = writeln!(
            out,
            "\t\t\t\t<td><b><a href='{}/blob/master/{}'>{}</a></b></td>",
            profile.url, file, file
        );
        out.push_str("\t\t\t\t<td>Core configuration and setup file</td>\n");
        out.push_str("\t\t\t</tr>\n");
    }

    out.push_str("\t\t\t</table>\n");
    out.push_str("\t\t</blockquote>\n");
    out.push_str("\t</details>\n");
    out.push_str("</details>\n\n");
}

pub(super) fn getting_started(out: &mut String, profile: &Profile) {
    let name = &profile.name;
    out.push_str("## Getting Started\n\n");

    out.push_str("### Prerequisites\n\n");
    let _ = write!(
        out,
        "Before getting started with {}, ensure your runtime environment meets the following requirements:\n\n",
        name
    );
    let _ = writeln!(out, "- **Programming Language:** {}", profile.language.name);
    if !profile.package_managers.is_empty() {
        let managers: Vec<String> = profile
            .package_managers
            .iter()
            .map(|m| m.display_name())
            .collect();
        let _ = writeln!(out, "- **Package Manager:** {}", managers.join(", "));
    }
    if profile.has_container {
        out.push_str("- **Container Runtime:** Docker\n");
    }
    out.push('\n');

    out.push_str("### Installation\n\n");
    let _ = write!(out, "Install {} using one of the following methods:\n\n", name);
    out.push_str("**Build from source:**\n\n");
    let _ = writeln!(out, "1. Clone the {} repository:", name);
    let _ = write!(out, "```sh\n❯ git clone {}\n```\n\n", profile.url);
    out.push_str("2. Navigate to the project directory:\n");
    let _ = write!(out, "```sh\n❯ cd {}\n```\n\n", name);
    out.push_str("3. Install the project dependencies:\n\n");
    manager_blocks(out, &profile.package_managers, |m| {
        m.install_command().to_string()
    });

    out.push_str("### Usage\n");
    let _ = writeln!(out, "Run {} using the following command:", name);
    manager_blocks(out, &profile.package_managers, |m| {
        m.run_command(&profile.entry_point)
    });

    if profile.narrative.capabilities.has_tests {
        out.push_str("### Testing\n");
        out.push_str("Run the test suite using the following command:\n");
        manager_blocks(out, &profile.package_managers, |m| {
            m.test_command().to_string()
        });
    }
}

pub(super) fn roadmap(out: &mut String) {
    out.push_str("## Project Roadmap\n\n");
    out.push_str("- [X] **`Task 1`**: <strike>Implement core functionality.</strike>\n");
    out.push_str("- [ ] **`Task 2`**: Add comprehensive testing suite.\n");
    out.push_str("- [ ] **`Task 3`**: Enhance user interface and experience.\n\n");
}

pub(super) fn contributing(out: &mut String, profile: &Profile) {
    let url = &profile.url;
    out.push_str("## Contributing\n\n");
    let _ = writeln!(out, "- **💬 [Join the Discussions]({}/discussions)**: Share your insights, provide feedback, or ask questions.", url);
    let _ = writeln!(out, "- **🐛 [Report Issues]({}/issues)**: Submit bugs found or log feature requests for the `{}` project.", url, profile.name);
    let _ = write!(out, "- **💡 [Submit Pull Requests]({}/blob/main/CONTRIBUTING.md)**: Review open PRs, and submit your own PRs.\n\n", url);

    out.push_str("<details closed>\n");
    out.push_str("<summary>Contributing Guidelines</summary>\n\n");
    out.push_str("1. **Fork the Repository**: Start by forking the project repository to your github account.\n");
    out.push_str("2. **Clone Locally**: Clone the forked repository to your local machine using a git client.\n");
    let _ = write!(out, "   ```sh\n   git clone {}\n   ```\n", url);
    out.push_str("3. **Create a New Branch**: Always work on a new branch, giving it a descriptive name.\n");
    out.push_str("   ```sh\n   git checkout -b new-feature-x\n   ```\n");
    out.push_str("4. **Make Your Changes**: Develop and test your changes locally.\n");
    out.push_str("5. **Commit Your Changes**: Commit with a clear message describing your updates.\n");
    out.push_str("   ```sh\n   git commit -m 'Implemented new feature x.'\n   ```\n");
    out.push_str("6. **Push to github**: Push the changes to your forked repository.\n");
    out.push_str("   ```sh\n   git push origin new-feature-x\n   ```\n");
    out.push_str("7. **Submit a Pull Request**: Create a PR against the original project repository. Clearly describe the changes and their motivations.\n");
    out.push_str("8. **Review**: Once your PR is reviewed and approved, it will be merged into the main branch. Congratulations on your contribution!\n");
    out.push_str("</details>\n\n");

    out.push_str("<details closed>\n");
    out.push_str("<summary>Contributor Graph</summary>\n");
    out.push_str("<br>\n");
    out.push_str("<p align=\"left\">\n");
    let _ = writeln!(out, "   <a href=\"{}/graphs/contributors\">", url);
    let _ = writeln!(
        out,
        "      <img src=\"https://contrib.rocks/image?repo={}/{}\">",
        profile.owner, profile.name
    );
    out.push_str("   </a>\n");
    out.push_str("</p>\n");
    out.push_str("</details>\n\n");
}

pub(super) fn license(out: &mut String, profile: &Profile) {
    out.push_str("## License\n\n");
    match &profile.license {
        Some(license) => {
            let _ = write!(
                out,
                "This project is protected under the [{license}]({url}/blob/main/LICENSE) License. For more details, refer to the [LICENSE]({url}/blob/main/LICENSE) file.\n\n",
                license = license,
                url = profile.url
            );
        }
        None => out.push_str("This project is protected under the [SELECT-A-LICENSE](https://choosealicense.com/licenses) License. For more details, refer to the [LICENSE](https://choosealicense.com/licenses/) file.\n\n"),
    }
}

pub(super) fn acknowledgments(out: &mut String) {
    out.push_str("## Acknowledgments\n\n");
    out.push_str("- List any resources, contributors, inspiration, etc. here.\n\n");
}
