//! Step flags shared by every subcommand.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::app::commands::StepRequest;
use crate::domain::{AppError, Platform, Profile, RawNumber, RawStepConfig, StepFile};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TargetOs {
    Windows,
    Posix,
}

impl From<TargetOs> for Platform {
    fn from(value: TargetOs) -> Self {
        match value {
            TargetOs::Windows => Platform::Windows,
            TargetOs::Posix => Platform::Posix,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProfileArg {
    /// Current tool releases
    Full,
    /// Older releases without CSV export or inconclusive-watcher flags
    Legacy,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Full => Profile::Full,
            ProfileArg::Legacy => Profile::Legacy,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct StepArgs {
    /// TOML step file; flags override its values
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Working directory for relative paths and the tool (default: current directory)
    #[arg(short = 'w', long)]
    pub workspace: Option<PathBuf>,
    /// Platform to generate the command for (default: host)
    #[arg(long, value_enum)]
    pub target_os: Option<TargetOs>,
    /// Tool flag set
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,
    /// TestWeaver installation root (overrides WEAVER_HOME)
    #[arg(long)]
    pub weaver_home: Option<String>,

    /// TestWeaver project path
    #[arg(long)]
    pub project_path: Option<String>,
    /// Experiment name; space-separated wildcard patterns
    #[arg(long)]
    pub experiment_name: Option<String>,
    /// Directory for JUnit reports
    #[arg(long)]
    pub unit_test_report_directory: Option<String>,
    /// Directory for HTML reports
    #[arg(long)]
    pub html_report_directory: Option<String>,
    /// Directory for CSV report export
    #[arg(long)]
    pub csv_export_directory: Option<String>,
    /// Comma-separated report names to export
    #[arg(long)]
    pub csv_reports: Option<String>,
    /// CSV field separator
    #[arg(long)]
    pub csv_separator: Option<String>,
    /// CSV quote character
    #[arg(long)]
    pub csv_quote: Option<String>,
    /// Disable CSV quoting
    #[arg(long)]
    pub csv_no_quote: bool,
    /// CSV decimal separator
    #[arg(long)]
    pub csv_decimal_separator: Option<String>,
    /// Parameter values file to import
    #[arg(long)]
    pub parameter_values: Option<String>,
    /// Silver parameters file to import
    #[arg(long)]
    pub silver_parameters: Option<String>,
    /// Open the instrument view
    #[arg(long)]
    pub instrument_view: bool,
    /// Accept inconclusive watchers
    #[arg(long)]
    pub accept_inconclusive_watchers: bool,
    /// Namespace pattern
    #[arg(long)]
    pub namespace_pattern: Option<String>,
    /// Maximum number of scenarios
    #[arg(long, allow_negative_numbers = true)]
    pub run_scenario_limit: Option<String>,
    /// Time limit in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub run_time_limit: Option<String>,
}

/// A step request plus the installation-root override that goes with it.
#[derive(Debug)]
pub struct ResolvedStep {
    pub request: StepRequest,
    pub weaver_home: Option<String>,
}

impl StepArgs {
    /// Merge the step file (if any) with the flags.
    ///
    /// Precedence: flag, then step file, then environment or default.
    /// A relative `--workspace` is taken from the current directory.
    pub fn resolve(self) -> Result<ResolvedStep, AppError> {
        let file = match &self.config {
            Some(path) => crate::app::api::load_step_file(path)?,
            None => StepFile::default(),
        };

        let platform = self.target_os.map(Platform::from).unwrap_or_else(Platform::host);
        let working_dir = match &self.workspace {
            Some(dir) => absolute_workspace(dir, platform)?,
            None => std::env::current_dir()?,
        };
        let profile = self.profile.map(Profile::from).or(file.tool.profile).unwrap_or_default();
        let weaver_home = self.weaver_home.clone().or(file.tool.home);

        let mut config = file.step;
        self.overlay(&mut config);

        let request = StepRequest::new(config, working_dir)
            .with_platform(platform)
            .with_profile(profile);
        Ok(ResolvedStep { request, weaver_home })
    }

    fn overlay(self, config: &mut RawStepConfig) {
        set(&mut config.project_path, self.project_path);
        set(&mut config.experiment_name, self.experiment_name);
        set(&mut config.unit_test_report_directory, self.unit_test_report_directory);
        set(&mut config.html_report_directory, self.html_report_directory);
        set(&mut config.csv_export.directory, self.csv_export_directory);
        set(&mut config.csv_export.reports, self.csv_reports);
        set(&mut config.csv_export.separator, self.csv_separator);
        set(&mut config.csv_export.quote, self.csv_quote);
        set(&mut config.csv_export.decimal_separator, self.csv_decimal_separator);
        set(&mut config.parameter_values, self.parameter_values);
        set(&mut config.silver_parameters, self.silver_parameters);
        set(&mut config.namespace_pattern, self.namespace_pattern);

        config.csv_export.no_quote |= self.csv_no_quote;
        config.instrument_view |= self.instrument_view;
        config.accept_inconclusive_watchers |= self.accept_inconclusive_watchers;

        if let Some(limit) = self.run_scenario_limit {
            config.run_scenario_limit = Some(RawNumber::Text(limit));
        }
        if let Some(limit) = self.run_time_limit {
            config.run_time_limit = Some(RawNumber::Text(limit));
        }
    }
}

/// Absolute paths are judged by the target shell, so a Windows workspace can be
/// compiled on a POSIX host and vice versa.
fn absolute_workspace(dir: &Path, platform: Platform) -> Result<PathBuf, AppError> {
    if platform.shell().is_absolute(&dir.to_string_lossy()) {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flags_override_step_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.toml");
        fs::write(
            &path,
            "[tool]\nhome = \"/opt/file\"\nprofile = \"legacy\"\n\n[step]\nproject_path = \"from-file\"\nexperiment_name = \"exp\"\n",
        )
        .unwrap();

        let args = StepArgs {
            config: Some(path),
            workspace: Some(PathBuf::from("/ws")),
            target_os: Some(TargetOs::Posix),
            profile: Some(ProfileArg::Full),
            project_path: Some("from-flag".into()),
            run_time_limit: Some("30".into()),
            instrument_view: true,
            ..Default::default()
        };
        let resolved = args.resolve().unwrap();

        let request = resolved.request;
        assert_eq!(request.config.project_path, "from-flag");
        assert_eq!(request.config.experiment_name, "exp");
        assert_eq!(request.config.run_time_limit, Some(RawNumber::Text("30".into())));
        assert!(request.config.instrument_view);
        assert_eq!(request.profile, Profile::Full);
        assert_eq!(request.platform, Platform::Posix);
        assert_eq!(request.working_dir, PathBuf::from("/ws"));
        assert_eq!(resolved.weaver_home.as_deref(), Some("/opt/file"));
    }

    #[test]
    fn step_file_profile_applies_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.toml");
        fs::write(&path, "[tool]\nprofile = \"legacy\"\n").unwrap();

        let args = StepArgs { config: Some(path), workspace: Some("/ws".into()), ..Default::default() };
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.request.profile, Profile::Legacy);
        assert_eq!(resolved.weaver_home, None);
    }

    #[test]
    fn relative_workspace_is_anchored_at_current_dir() {
        let args = StepArgs {
            workspace: Some(PathBuf::from("ws")),
            target_os: Some(TargetOs::Posix),
            ..Default::default()
        };
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.request.working_dir, std::env::current_dir().unwrap().join("ws"));
    }

    #[test]
    fn foreign_absolute_workspace_is_kept() {
        let args = StepArgs {
            workspace: Some(PathBuf::from("C:\\ws")),
            target_os: Some(TargetOs::Windows),
            ..Default::default()
        };
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.request.working_dir, PathBuf::from("C:\\ws"));
    }

    #[test]
    fn missing_step_file_is_an_error() {
        let args = StepArgs { config: Some("/nonexistent/step.toml".into()), ..Default::default() };
        assert!(matches!(args.resolve(), Err(AppError::ConfigFileMissing(_))));
    }
}
