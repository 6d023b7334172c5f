//! Report generation module.
//!
//! - [`writing`] turns the four moments into the printed interpretation.
//! - [`ReportGenerator`] assembles an [`AnalysisReport`] that can be printed
//!   as JSON (`--json`) or written next to the charts (`--emit-report`).
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_insight::reporting::{render_sentence, ReportGenerator};
//!
//! println!("{}", render_sentence(&moments, "money"));
//!
//! let generator = ReportGenerator::new(PathBuf::from("output"));
//! generator.write_report_to_file(&report)?;
//! ```

mod generator;
pub mod writing;

pub use generator::{
    AnalysisReport, ChartFiles, REPORT_FILE_NAME, ReportGenerator, ReportParams,
};
pub use writing::{KurtosisShape, SkewnessShape, render_sentence, writing};
