//! `with-automdrs` block: a footer crediting the tool.

use crate::readme::TagOptions;

const DEFAULT_MESSAGE: &str =
    "🤖 auto updated with [automd-rs](https://github.com/betterhyq/automd-rs)";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WithAutomdrsConfig {
    pub message: String,
}

impl WithAutomdrsConfig {
    pub fn from_options(opts: &TagOptions) -> Self {
        Self {
            message: opts.get("message").unwrap_or_default().to_string(),
        }
    }
}

pub fn generate(config: &WithAutomdrsConfig) -> Vec<String> {
    let message = match config.message.trim() {
        "" => DEFAULT_MESSAGE,
        custom => custom,
    };
    vec![format!("---<br>_{message}_")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let out = generate(&WithAutomdrsConfig::default());
        assert_eq!(
            out,
            vec!["---<br>_🤖 auto updated with [automd-rs](https://github.com/betterhyq/automd-rs)_"]
        );
    }

    #[test]
    fn test_custom_message() {
        let config = WithAutomdrsConfig {
            message: "kept fresh by CI".into(),
        };
        assert_eq!(generate(&config), vec!["---<br>_kept fresh by CI_"]);
    }
}
