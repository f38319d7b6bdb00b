use crate::models::ApplicationSource;
use std::str::FromStr;
use thiserror::Error;

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Format selection errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unsupported output format '{0}': only yaml or json are supported")]
    Unsupported(String),
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(FormatError::Unsupported(other.to_string())),
        }
    }
}

/// Output formatting interface
pub trait Formatter {
    fn format(&self, source: &ApplicationSource) -> anyhow::Result<String>;
}

pub struct JsonFormatter;
pub struct YamlFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, source: &ApplicationSource) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(source)?)
    }
}

impl Formatter for YamlFormatter {
    fn format(&self, source: &ApplicationSource) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(source)?)
    }
}

/// Get formatter for the specified output format
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Format the source and print it to stdout. Nothing is written when
/// formatting fails.
pub fn print_output(
    source: &ApplicationSource,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = get_formatter(format);
    let output = formatter.format(source)?;
    println!("{}", output);
    Ok(())
}

/// Output arguments shared by data commands
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format. One of: yaml, json
    #[arg(short = 'o', long = "out", default_value = "yaml")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> ApplicationSource {
        ApplicationSource {
            repo_url: "https://x/y.git".to_string(),
            path: Some("k8s".to_string()),
            target_revision: Some("HEAD".to_string()),
            chart: None,
        }
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!(OutputFormat::from_str("yaml").unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_formats() {
        for bad in ["xml", "toml", "", "YAML"] {
            let err = OutputFormat::from_str(bad).unwrap_err();
            assert!(err.to_string().contains("unsupported output format"));
        }
    }

    #[test]
    fn json_is_pretty_with_two_space_indent_in_field_order() {
        let rendered = JsonFormatter.format(&sample_source()).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"repoURL\": \"https://x/y.git\",\n  \"path\": \"k8s\",\n  \"targetRevision\": \"HEAD\"\n}"
        );
    }

    #[test]
    fn yaml_preserves_field_order() {
        let rendered = YamlFormatter.format(&sample_source()).unwrap();
        let repo = rendered.find("repoURL:").unwrap();
        let path = rendered.find("path:").unwrap();
        let rev = rendered.find("targetRevision:").unwrap();
        assert!(repo < path && path < rev);
    }

    #[test]
    fn json_round_trip_reconstructs_source() {
        let source = sample_source();
        let rendered = JsonFormatter.format(&source).unwrap();
        let parsed: ApplicationSource = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, source);
    }

    #[test]
    fn yaml_round_trip_reconstructs_source() {
        let source = sample_source();
        let rendered = YamlFormatter.format(&source).unwrap();
        let parsed: ApplicationSource = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed, source);
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let source = ApplicationSource {
            repo_url: "https://x/y.git".to_string(),
            path: Some("k8s".to_string()),
            target_revision: None,
            chart: None,
        };
        let rendered = JsonFormatter.format(&source).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"repoURL\": \"https://x/y.git\",\n  \"path\": \"k8s\"\n}"
        );
    }
}
