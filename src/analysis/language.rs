use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub name: String,
    pub percentage: u32,
    pub count: usize,
}

impl LanguageSummary {
    pub fn percentage_label(&self) -> String {
        format!("{}.0%", self.percentage)
    }
}

pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Picks the language with the most bytes. Ties go to the language the
    /// provider listed first. Falls back to the repository's reported
    /// language, then to "Unknown".
    pub fn summarize(&self, languages: &[(String, u64)], reported: Option<&str>) -> LanguageSummary {
        let total: u64 = languages.iter().map(|(_, bytes)| bytes).sum();

        let primary = languages
            .iter()
            .fold(None::<&(String, u64)>, |best, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            });

        let percentage = match primary {
            Some((_, bytes)) if total > 0 => ((*bytes as f64 / total as f64) * 100.0).round() as u32,
            _ => 0,
        };

        let name = primary
            .map(|(name, _)| name.as_str())
            .or(reported.filter(|r| !r.is_empty()))
            .unwrap_or("Unknown")
            .to_string();

        LanguageSummary {
            name,
            percentage,
            count: languages.len(),
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
