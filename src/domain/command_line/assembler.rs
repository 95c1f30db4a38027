//! Option-to-argument compiler.
//!
//! Emission order is part of the tool's contract: it parses some of these
//! positionally, so clauses are appended in a fixed sequence and each one
//! only when its guard holds. No validation happens here.

use serde::{Deserialize, Serialize};

use crate::domain::command_line::ArgumentList;
use crate::domain::command_line::path_resolver::resolve;
use crate::domain::{CsvExportOptions, Platform, RunOptions};

/// Which optional clause groups the target tool version understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// `--export-report-as-csv` and its sub-options.
    pub csv_export: bool,
    /// `--accept-inconclusive-watchers`.
    pub inconclusive_watchers: bool,
}

impl Features {
    pub const fn full() -> Self {
        Self { csv_export: true, inconclusive_watchers: true }
    }

    /// Flag set of older tool releases.
    pub const fn legacy() -> Self {
        Self { csv_export: false, inconclusive_watchers: false }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::full()
    }
}

/// Named [`Features`] presets selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Full,
    Legacy,
}

impl Profile {
    pub fn features(self) -> Features {
        match self {
            Profile::Full => Features::full(),
            Profile::Legacy => Features::legacy(),
        }
    }
}

/// Compiles [`RunOptions`] into tool arguments for one platform.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentAssembler {
    features: Features,
    platform: Platform,
}

impl ArgumentAssembler {
    pub fn new(features: Features, platform: Platform) -> Self {
        Self { features, platform }
    }

    pub fn assemble(&self, opts: &RunOptions, working_dir: &str) -> ArgumentList {
        let mut args = ArgumentList::default();
        let path = |p: &str| resolve(p, working_dir, self.platform);

        if opts.run_scenario_limit > 0 {
            args.push_option("--run-scenario-limit", opts.run_scenario_limit.to_string());
        }
        if let Some(dir) = &opts.html_report_directory {
            args.push_option("--html-report", path(dir));
        }
        if self.features.csv_export
            && let Some(csv) = &opts.csv_export
        {
            self.push_csv_export(&mut args, csv, working_dir);
        }
        if let Some(file) = &opts.silver_parameters_path {
            args.push_option("--import-silver-parameters", path(file));
        }
        if let Some(file) = &opts.parameter_values_path {
            args.push_option("--import-parameter-values", path(file));
        }
        if opts.run_time_limit_seconds > 0 {
            args.push_option("--run-time-limit", opts.run_time_limit_seconds.to_string());
        }
        if opts.instrument_view {
            args.push("-i");
        }
        if self.features.inconclusive_watchers && opts.accept_inconclusive_watchers {
            args.push("--accept-inconclusive-watchers");
        }
        if let Some(pattern) = &opts.namespace_pattern {
            args.push_option("--namespace", pattern.clone());
        }
        if !opts.unit_test_report_directory.is_empty() {
            args.push_option("--unit-test", path(&opts.unit_test_report_directory));
        }
        if !opts.project_path.is_empty() {
            args.push(path(&opts.project_path));
        }
        if !opts.experiment_name.is_empty() {
            args.push(opts.experiment_name.clone());
        }

        args
    }

    fn push_csv_export(&self, args: &mut ArgumentList, csv: &CsvExportOptions, working_dir: &str) {
        args.push("--export-report-as-csv");
        args.push_option("--export-dir", resolve(&csv.directory, working_dir, self.platform));
        if let Some(reports) = &csv.reports {
            args.push_repeated("--report", reports.split(',').map(str::trim));
        }
        if let Some(separator) = &csv.separator {
            args.push_option("--csv-separator", quoted_char(separator));
        }
        if let Some(quote) = &csv.quote {
            args.push_option("--csv-quote", quoted_char(quote));
        }
        if csv.no_quote {
            args.push("--csv-no-quote");
        }
        if let Some(separator) = &csv.decimal_separator {
            args.push_option("--csv-decimal-separator", quoted_char(separator));
        }
    }
}

fn quoted_char(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Assemble with the full flag set.
pub fn assemble(opts: &RunOptions, working_dir: &str, platform: Platform) -> ArgumentList {
    ArgumentAssembler::new(Features::full(), platform).assemble(opts, working_dir)
}
