use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// How `{name}` placeholders are resolved against [`PromptVariables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionStrategy {
    /// Replace every `{identifier}` in one pass. Unknown names are left as-is
    /// and substituted values are never scanned again.
    #[default]
    Scan,
    /// Replace the first occurrence of each variable's placeholder, one
    /// variable at a time, in insertion order.
    Sequential,
}

impl FromStr for SubstitutionStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(Self::Scan),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("unknown substitution strategy: {other}")),
        }
    }
}

/// Ordered placeholder name -> value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptVariables {
    entries: Vec<(String, String)>,
}

impl PromptVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, keeping its original position if it was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
}

impl PromptTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn render(&self, variables: &PromptVariables) -> String {
        self.render_with(SubstitutionStrategy::Scan, variables)
    }

    pub fn render_with(
        &self,
        strategy: SubstitutionStrategy,
        variables: &PromptVariables,
    ) -> String {
        match strategy {
            SubstitutionStrategy::Scan => scan(&self.source, variables),
            SubstitutionStrategy::Sequential => sequential(&self.source, variables),
        }
    }
}

fn scan(template: &str, variables: &PromptVariables) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            variables
                .get(&caps[1])
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn sequential(template: &str, variables: &PromptVariables) -> String {
    variables
        .iter()
        .fold(template.to_string(), |output, (name, value)| {
            output.replacen(&format!("{{{name}}}"), value, 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> PromptVariables {
        PromptVariables::new()
            .with("sourceLanguage", "French")
            .with("targetLanguage", "English")
            .with("text", "Bonjour")
    }

    #[test]
    fn scan_replaces_every_occurrence() {
        let template = PromptTemplate::new("{text} / {text} ({sourceLanguage})");
        assert_eq!(template.render(&vars()), "Bonjour / Bonjour (French)");
    }

    #[test]
    fn scan_leaves_unknown_placeholders_verbatim() {
        let template = PromptTemplate::new("{text} -> {tone}");
        assert_eq!(template.render(&vars()), "Bonjour -> {tone}");
    }

    #[test]
    fn scan_does_not_expand_substituted_values() {
        let variables = PromptVariables::new()
            .with("a", "{b}")
            .with("b", "nested");
        let template = PromptTemplate::new("{a} {b}");
        assert_eq!(template.render(&variables), "{b} nested");
    }

    #[test]
    fn scan_ignores_non_identifier_braces() {
        let template = PromptTemplate::new("{ text } {1st} {} {text}");
        assert_eq!(template.render(&vars()), "{ text } {1st} {} Bonjour");
    }

    #[test]
    fn sequential_replaces_first_occurrence_only() {
        let template = PromptTemplate::new("{text} / {text}");
        assert_eq!(
            template.render_with(SubstitutionStrategy::Sequential, &vars()),
            "Bonjour / {text}"
        );
    }

    #[test]
    fn sequential_can_rematch_inserted_values() {
        let variables = PromptVariables::new()
            .with("a", "{b}")
            .with("b", "nested");
        let template = PromptTemplate::new("{a}");
        assert_eq!(
            template.render_with(SubstitutionStrategy::Sequential, &variables),
            "nested"
        );
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut variables = vars();
        variables.insert("sourceLanguage", "German");
        assert_eq!(variables.iter().count(), 3);
        assert_eq!(variables.iter().next(), Some(("sourceLanguage", "German")));
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!(
            "Scan".parse::<SubstitutionStrategy>(),
            Ok(SubstitutionStrategy::Scan)
        );
        assert_eq!(
            " sequential ".parse::<SubstitutionStrategy>(),
            Ok(SubstitutionStrategy::Sequential)
        );
        assert!("regex".parse::<SubstitutionStrategy>().is_err());
    }
}
