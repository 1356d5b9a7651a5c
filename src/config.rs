//! Runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Where round words come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WordlistSource {
    /// The catalog compiled into the binary.
    #[default]
    Builtin,
    /// A `word<TAB>hint` file on disk.
    File(PathBuf),
}

impl WordlistSource {
    /// Parse a `--wordlist` value: `builtin` or a path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "builtin" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings shared by every command.
///
/// Command-line flags are layered on top with [`Config::with_overrides`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub wordlist: WordlistSource,
    /// Seed for word selection; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Directory for the TUI log file; the TUI does not log when unset.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_WORDLIST` - `builtin` (default) or a catalog path
    /// - `HANGMAN_SEED` - integer seed for reproducible word selection
    /// - `HANGMAN_LOG_DIR` - directory for the TUI log file
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(wordlist) = lookup("HANGMAN_WORDLIST") {
            config.wordlist = WordlistSource::parse(&wordlist);
        }
        config.seed = read_parsed(&lookup, "HANGMAN_SEED");
        config.log_dir = lookup("HANGMAN_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    /// Apply command-line values, which win over the environment.
    #[must_use]
    pub fn with_overrides(mut self, wordlist: Option<&str>, seed: Option<u64>) -> Self {
        if let Some(wordlist) = wordlist {
            self.wordlist = WordlistSource::parse(wordlist);
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

fn read_parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.wordlist, WordlistSource::Builtin);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("HANGMAN_WORDLIST", "/tmp/words.tsv"),
            ("HANGMAN_SEED", " 42 "),
            ("HANGMAN_LOG_DIR", "/tmp/logs"),
        ]));
        assert_eq!(
            config.wordlist,
            WordlistSource::File(PathBuf::from("/tmp/words.tsv"))
        );
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn malformed_seed_is_ignored() {
        let config = Config::from_lookup(lookup(&[("HANGMAN_SEED", "forty-two")]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn blank_log_dir_disables_logging() {
        let config = Config::from_lookup(lookup(&[("HANGMAN_LOG_DIR", "  ")]));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn flags_override_environment() {
        let config = Config::from_lookup(lookup(&[
            ("HANGMAN_WORDLIST", "/tmp/words.tsv"),
            ("HANGMAN_SEED", "1"),
        ]))
        .with_overrides(Some("builtin"), Some(7));
        assert_eq!(config.wordlist, WordlistSource::Builtin);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn missing_flags_keep_environment() {
        let config = Config::from_lookup(lookup(&[("HANGMAN_SEED", "3")])).with_overrides(None, None);
        assert_eq!(config.seed, Some(3));
    }
}
