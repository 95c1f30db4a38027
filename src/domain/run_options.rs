//! Validated options for a single TestWeaver run.

/// Options consumed by the argument assembler.
///
/// Optional strings are `None` when unset; the limits use `0` for unset.
/// Build one through [`RunOptions::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub project_path: String,
    /// One or more space-separated wildcard patterns.
    pub experiment_name: String,
    pub unit_test_report_directory: String,
    pub html_report_directory: Option<String>,
    pub csv_export: Option<CsvExportOptions>,
    pub parameter_values_path: Option<String>,
    pub silver_parameters_path: Option<String>,
    pub instrument_view: bool,
    pub accept_inconclusive_watchers: bool,
    pub namespace_pattern: Option<String>,
    pub run_scenario_limit: u32,
    pub run_time_limit_seconds: u64,
}

impl RunOptions {
    pub fn builder(
        project_path: impl Into<String>,
        experiment_name: impl Into<String>,
        unit_test_report_directory: impl Into<String>,
    ) -> RunOptionsBuilder {
        RunOptionsBuilder {
            options: RunOptions {
                project_path: project_path.into(),
                experiment_name: experiment_name.into(),
                unit_test_report_directory: unit_test_report_directory.into(),
                html_report_directory: None,
                csv_export: None,
                parameter_values_path: None,
                silver_parameters_path: None,
                instrument_view: false,
                accept_inconclusive_watchers: false,
                namespace_pattern: None,
                run_scenario_limit: 0,
                run_time_limit_seconds: 0,
            },
        }
    }
}

/// Builder for [`RunOptions`]. Empty strings leave a field unset.
#[derive(Debug, Clone)]
pub struct RunOptionsBuilder {
    options: RunOptions,
}

impl RunOptionsBuilder {
    pub fn html_report_directory(mut self, dir: impl Into<String>) -> Self {
        self.options.html_report_directory = non_empty(dir);
        self
    }

    pub fn csv_export(mut self, csv: CsvExportOptions) -> Self {
        self.options.csv_export = (!csv.directory.is_empty()).then_some(csv);
        self
    }

    pub fn parameter_values_path(mut self, path: impl Into<String>) -> Self {
        self.options.parameter_values_path = non_empty(path);
        self
    }

    pub fn silver_parameters_path(mut self, path: impl Into<String>) -> Self {
        self.options.silver_parameters_path = non_empty(path);
        self
    }

    pub fn instrument_view(mut self, enabled: bool) -> Self {
        self.options.instrument_view = enabled;
        self
    }

    pub fn accept_inconclusive_watchers(mut self, enabled: bool) -> Self {
        self.options.accept_inconclusive_watchers = enabled;
        self
    }

    pub fn namespace_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.namespace_pattern = non_empty(pattern);
        self
    }

    pub fn run_scenario_limit(mut self, limit: u32) -> Self {
        self.options.run_scenario_limit = limit;
        self
    }

    pub fn run_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.options.run_time_limit_seconds = seconds;
        self
    }

    pub fn build(self) -> RunOptions {
        self.options
    }
}

/// CSV export group. Only meaningful with a non-empty `directory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExportOptions {
    pub directory: String,
    /// Comma-separated report names.
    pub reports: Option<String>,
    pub separator: Option<String>,
    pub quote: Option<String>,
    pub no_quote: bool,
    pub decimal_separator: Option<String>,
}

impl CsvExportOptions {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            reports: None,
            separator: None,
            quote: None,
            no_quote: false,
            decimal_separator: None,
        }
    }

    pub fn reports(mut self, reports: impl Into<String>) -> Self {
        self.reports = non_empty(reports);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = non_empty(separator);
        self
    }

    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = non_empty(quote);
        self
    }

    pub fn no_quote(mut self, no_quote: bool) -> Self {
        self.no_quote = no_quote;
        self
    }

    pub fn decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = non_empty(separator);
        self
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.is_empty())
}
