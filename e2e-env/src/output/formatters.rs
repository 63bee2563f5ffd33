//! Output formatter implementations.

use crate::resolve::ResolvedEnvironment;
use crate::Result;

use super::{OutputFormatter, ShellType};

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub const fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, env: &ResolvedEnvironment) -> Result<String> {
        let exports: Vec<String> = env
            .variables()
            .iter()
            .map(|(name, value)| self.shell.format_export(name, value))
            .collect();
        Ok(exports.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, env: &ResolvedEnvironment) -> Result<String> {
        Ok(serde_json::to_string_pretty(env)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, env: &ResolvedEnvironment) -> Result<String> {
        let yaml = serde_yaml::to_string(env)?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, env: &ResolvedEnvironment) -> Result<String> {
        let lines: Vec<String> = env
            .variables()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, env: &ResolvedEnvironment) -> Result<String> {
        let region = if env.cluster_region.is_empty() {
            "(unknown)"
        } else {
            env.cluster_region.as_str()
        };
        let languages = if env.languages.is_empty() {
            "(all)".to_string()
        } else {
            env.languages.to_string()
        };

        let lines = [
            format!("Cluster:        {}", env.cluster),
            format!("Cluster region: {region}"),
            format!("Docker repo:    {}", env.docker_repo),
            format!("Tag:            {}", env.tag),
            format!("Languages:      {languages}"),
            format!("Verbose logs:   {}", yes_no(env.log_verbose)),
            format!("Emit metrics:   {}", yes_no(env.emit_metrics)),
        ];
        Ok(lines.join("\n"))
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageAllowList;

    fn create_test_environment() -> ResolvedEnvironment {
        ResolvedEnvironment {
            cluster: "my-cluster".into(),
            cluster_region: "us-central1".into(),
            docker_repo: "gcr.io/knative-tests".into(),
            tag: "latest".into(),
            languages: LanguageAllowList::parse("go,java"),
            log_verbose: false,
            emit_metrics: true,
        }
    }

    #[test]
    fn test_export_formatter_bash() {
        let output = ExportFormatter::new(ShellType::Bash)
            .format(&create_test_environment())
            .unwrap();

        assert!(output.contains("export E2E_CLUSTER=my-cluster"));
        assert!(output.contains("export E2E_CLUSTER_REGION=us-central1"));
        assert!(output.contains("export KO_DOCKER_REPO=gcr.io/knative-tests"));
        assert!(output.contains("export E2E_LANGUAGES=go,java"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_export_formatter_fish() {
        let output = ExportFormatter::new(ShellType::Fish)
            .format(&create_test_environment())
            .unwrap();
        assert!(output.starts_with("set -x E2E_CLUSTER my-cluster"));
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_environment()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["cluster"], "my-cluster");
        assert_eq!(parsed["cluster_region"], "us-central1");
        assert_eq!(parsed["languages"], serde_json::json!(["go", "java"]));
        assert_eq!(parsed["emit_metrics"], true);
    }

    #[test]
    fn test_yaml_formatter() {
        let output = YamlFormatter.format(&create_test_environment()).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        assert_eq!(parsed["cluster"].as_str(), Some("my-cluster"));
        assert_eq!(parsed["tag"].as_str(), Some("latest"));
    }

    #[test]
    fn test_dotenv_formatter() {
        let output = DotenvFormatter.format(&create_test_environment()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "E2E_CLUSTER=my-cluster");
        assert_eq!(lines[2], "KO_DOCKER_REPO=gcr.io/knative-tests");
        assert_eq!(lines[6], "E2E_EMIT_METRICS=true");
    }

    #[test]
    fn test_human_formatter() {
        let output = HumanFormatter.format(&create_test_environment()).unwrap();
        assert!(output.contains("Cluster:        my-cluster"));
        assert!(output.contains("Languages:      go,java"));
        assert!(output.contains("Emit metrics:   yes"));
    }

    #[test]
    fn test_human_formatter_placeholders() {
        let mut env = create_test_environment();
        env.cluster_region.clear();
        env.languages = LanguageAllowList::default();

        let output = HumanFormatter.format(&env).unwrap();
        assert!(output.contains("Cluster region: (unknown)"));
        assert!(output.contains("Languages:      (all)"));
    }
}
