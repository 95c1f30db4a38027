//! Raw step configuration as the user wrote it.
//!
//! Nothing here is trusted: [`RawStepConfig::validate`] runs every field check
//! and only then produces [`RunOptions`].

use serde::{Deserialize, Serialize};

use crate::domain::command_line::Profile;
use crate::domain::error::{AppError, FieldError, ValidationErrors};
use crate::domain::validation::{self, CsvGroupInput};
use crate::domain::{CsvExportOptions, Platform, RunOptions};

pub mod fields {
    pub const PROJECT_PATH: &str = "project_path";
    pub const EXPERIMENT_NAME: &str = "experiment_name";
    pub const UNIT_TEST_REPORT_DIRECTORY: &str = "unit_test_report_directory";
    pub const HTML_REPORT_DIRECTORY: &str = "html_report_directory";
    pub const CSV_DIRECTORY: &str = "csv_export.directory";
    pub const CSV_SEPARATOR: &str = "csv_export.separator";
    pub const CSV_QUOTE: &str = "csv_export.quote";
    pub const CSV_DECIMAL_SEPARATOR: &str = "csv_export.decimal_separator";
    pub const PARAMETER_VALUES: &str = "parameter_values";
    pub const SILVER_PARAMETERS: &str = "silver_parameters";
    pub const RUN_SCENARIO_LIMIT: &str = "run_scenario_limit";
    pub const RUN_TIME_LIMIT: &str = "run_time_limit";
}

/// Top-level layout of a step file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepFile {
    #[serde(default)]
    pub tool: ToolSection,
    #[serde(default)]
    pub step: RawStepConfig,
}

/// `[tool]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSection {
    /// Installation root; overrides `WEAVER_HOME`.
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// A numeric field that may be written as an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Text(String),
}

impl RawNumber {
    pub fn as_raw(&self) -> String {
        match self {
            RawNumber::Int(n) => n.to_string(),
            RawNumber::Text(s) => s.clone(),
        }
    }
}

/// `[step]` table: every option of the build step, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RawStepConfig {
    pub project_path: String,
    pub experiment_name: String,
    pub unit_test_report_directory: String,
    pub html_report_directory: String,
    pub csv_export: RawCsvExport,
    pub parameter_values: String,
    pub silver_parameters: String,
    pub instrument_view: bool,
    pub accept_inconclusive_watchers: bool,
    pub namespace_pattern: String,
    pub run_scenario_limit: Option<RawNumber>,
    pub run_time_limit: Option<RawNumber>,
}

/// `[step.csv_export]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RawCsvExport {
    pub directory: String,
    pub reports: String,
    pub separator: String,
    pub quote: String,
    pub no_quote: bool,
    pub decimal_separator: String,
}

impl RawStepConfig {
    /// Check every field and build the validated options.
    ///
    /// All failing fields are reported together.
    pub fn validate(&self, platform: Platform) -> Result<RunOptions, AppError> {
        let errors = self.check(platform);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(self.to_options())
    }

    /// Run every field check without building anything.
    pub fn check(&self, platform: Platform) -> ValidationErrors {
        use fields::*;

        let mut errors = ValidationErrors::new();
        errors.collect(validation::check_required_path(PROJECT_PATH, &self.project_path, platform));
        errors.collect(validation::check_experiment_name(EXPERIMENT_NAME, &self.experiment_name));
        errors.collect(validation::check_required_path(
            UNIT_TEST_REPORT_DIRECTORY,
            &self.unit_test_report_directory,
            platform,
        ));
        errors.collect(validation::check_optional_path(
            HTML_REPORT_DIRECTORY,
            &self.html_report_directory,
            platform,
        ));

        let csv = &self.csv_export;
        let csv_input = CsvGroupInput {
            directory: &csv.directory,
            reports: &csv.reports,
            separator: &csv.separator,
            quote: &csv.quote,
            no_quote: csv.no_quote,
            decimal_separator: &csv.decimal_separator,
        };
        errors.collect(validation::check_csv_directory(CSV_DIRECTORY, &csv_input, platform));
        errors.collect(validation::check_single_char(CSV_SEPARATOR, &csv.separator));
        errors.collect(validation::check_single_char(CSV_QUOTE, &csv.quote));
        errors.collect(validation::check_single_char(CSV_DECIMAL_SEPARATOR, &csv.decimal_separator));

        errors.collect(validation::check_optional_path(
            PARAMETER_VALUES,
            &self.parameter_values,
            platform,
        ));
        errors.collect(validation::check_optional_path(
            SILVER_PARAMETERS,
            &self.silver_parameters,
            platform,
        ));
        errors.collect(check_limit::<u32>(RUN_SCENARIO_LIMIT, self.run_scenario_limit.as_ref()));
        errors.collect(check_limit::<u64>(RUN_TIME_LIMIT, self.run_time_limit.as_ref()));
        errors
    }

    fn to_options(&self) -> RunOptions {
        let csv = &self.csv_export;
        RunOptions::builder(
            self.project_path.as_str(),
            self.experiment_name.as_str(),
            self.unit_test_report_directory.as_str(),
        )
        .html_report_directory(self.html_report_directory.as_str())
        .csv_export(
            CsvExportOptions::new(csv.directory.as_str())
                .reports(csv.reports.as_str())
                .separator(csv.separator.as_str())
                .quote(csv.quote.as_str())
                .no_quote(csv.no_quote)
                .decimal_separator(csv.decimal_separator.as_str()),
        )
        .parameter_values_path(self.parameter_values.as_str())
        .silver_parameters_path(self.silver_parameters.as_str())
        .instrument_view(self.instrument_view)
        .accept_inconclusive_watchers(self.accept_inconclusive_watchers)
        .namespace_pattern(self.namespace_pattern.as_str())
        .run_scenario_limit(parse_limit(self.run_scenario_limit.as_ref()))
        .run_time_limit_seconds(parse_limit(self.run_time_limit.as_ref()))
        .build()
    }
}

/// Parse a step file from TOML content.
pub fn parse_step_content(content: &str) -> Result<StepFile, AppError> {
    Ok(toml::from_str(content)?)
}

fn check_limit<T: TryFrom<i64>>(
    field: &str,
    raw: Option<&RawNumber>,
) -> Result<(), FieldError> {
    let Some(raw) = raw else {
        return Ok(());
    };
    let value = validation::check_positive_number(field, &raw.as_raw())?;
    T::try_from(value).map(|_| ()).map_err(|_| FieldError::new(field, validation::MSG_NOT_A_NUMBER))
}

fn parse_limit<T: TryFrom<i64> + Default>(raw: Option<&RawNumber>) -> T {
    raw.and_then(|r| r.as_raw().trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .and_then(|n| T::try_from(n).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{MSG_INVALID_PATH, MSG_NOT_POSITIVE, MSG_REQUIRED};

    fn valid() -> RawStepConfig {
        RawStepConfig {
            project_path: "models/plant".into(),
            experiment_name: "smoke*".into(),
            unit_test_report_directory: "reports/junit".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_config_builds_options() {
        let mut raw = valid();
        raw.run_scenario_limit = Some(RawNumber::Int(25));
        raw.run_time_limit = Some(RawNumber::Text("600".into()));
        raw.csv_export.directory = "csv".into();
        raw.csv_export.reports = "a,b".into();

        let opts = raw.validate(Platform::Posix).unwrap();
        assert_eq!(opts.project_path, "models/plant");
        assert_eq!(opts.run_scenario_limit, 25);
        assert_eq!(opts.run_time_limit_seconds, 600);
        assert_eq!(opts.csv_export.unwrap().reports.as_deref(), Some("a,b"));
        assert_eq!(opts.html_report_directory, None);
    }

    #[test]
    fn all_errors_are_reported_together() {
        let mut raw = RawStepConfig::default();
        raw.run_time_limit = Some(RawNumber::Int(-1));
        raw.csv_export.quote = "''".into();

        let errors = raw.check(Platform::Posix);
        assert_eq!(errors.for_field(fields::PROJECT_PATH).unwrap().message, MSG_REQUIRED);
        assert_eq!(errors.for_field(fields::EXPERIMENT_NAME).unwrap().message, MSG_REQUIRED);
        assert_eq!(
            errors.for_field(fields::UNIT_TEST_REPORT_DIRECTORY).unwrap().message,
            MSG_REQUIRED
        );
        assert_eq!(errors.for_field(fields::RUN_TIME_LIMIT).unwrap().message, MSG_NOT_POSITIVE);
        assert_eq!(errors.for_field(fields::CSV_DIRECTORY).unwrap().message, MSG_REQUIRED);
        assert!(errors.for_field(fields::CSV_QUOTE).is_some());
    }

    #[test]
    fn validation_error_blocks_assembly() {
        let mut raw = valid();
        raw.html_report_directory = "out|html".into();
        let err = raw.validate(Platform::Windows).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors.for_field(fields::HTML_REPORT_DIRECTORY).unwrap().message,
                    MSG_INVALID_PATH
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scenario_limit_beyond_u32_is_rejected() {
        let mut raw = valid();
        raw.run_scenario_limit = Some(RawNumber::Int(i64::from(u32::MAX) + 1));
        let errors = raw.check(Platform::Posix);
        assert!(errors.for_field(fields::RUN_SCENARIO_LIMIT).is_some());
    }

    #[test]
    fn step_file_parses_from_toml() {
        let content = r#"
[tool]
home = "/opt/tw"
profile = "legacy"

[step]
project_path = "proj"
experiment_name = "exp?"
unit_test_report_directory = "junit"
run_scenario_limit = 3
run_time_limit = "90"

[step.csv_export]
directory = "csv"
separator = ";"
"#;
        let file: StepFile = toml::from_str(content).unwrap();
        assert_eq!(file.tool.home.as_deref(), Some("/opt/tw"));
        assert_eq!(file.tool.profile, Some(Profile::Legacy));
        assert_eq!(file.step.run_scenario_limit, Some(RawNumber::Int(3)));
        assert_eq!(file.step.run_time_limit, Some(RawNumber::Text("90".into())));
        assert_eq!(file.step.csv_export.separator, ";");
    }

    #[test]
    fn step_file_rejects_unknown_keys() {
        let content = "[step]\nproject = \"typo\"\n";
        assert!(toml::from_str::<StepFile>(content).is_err());
    }
}
