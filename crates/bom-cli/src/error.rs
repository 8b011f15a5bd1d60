//! Run failures and their process exit statuses.

use std::path::PathBuf;

use thiserror::Error;

use bom_ingest::IngestError;
use bom_model::TableError;
use bom_report::ReportError;

/// Environment failures that abort a run. Data-quality findings are never
/// errors.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("输入文件不存在: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("无法解码文件: {}", path.display())]
    Undecodable {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    #[error(transparent)]
    Ingest(IngestError),

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("需要 XLSX 支持以导出表格 (built without the `xlsx` feature)")]
    XlsxUnavailable,

    #[error(transparent)]
    Report(ReportError),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl RunError {
    /// Classify an ingest failure for `path`.
    pub fn from_ingest(path: PathBuf, error: IngestError) -> Self {
        match error {
            IngestError::FileNotFound { .. } => Self::InputMissing { path },
            IngestError::Undecodable { .. } | IngestError::UnknownEncoding { .. } => {
                Self::Undecodable {
                    path,
                    source: error,
                }
            }
            other => Self::Ingest(other),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputMissing { .. } => 2,
            Self::Undecodable { .. } => 3,
            Self::OutputDir { .. } => 4,
            Self::XlsxUnavailable => 5,
            Self::Ingest(_) | Self::Report(_) | Self::Table(_) => 1,
        }
    }
}

impl From<ReportError> for RunError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::XlsxUnavailable => Self::XlsxUnavailable,
            other => Self::Report(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_environment_failure() {
        let path = PathBuf::from("bom.csv");
        let missing = RunError::from_ingest(
            path.clone(),
            IngestError::FileNotFound { path: path.clone() },
        );
        let undecodable = RunError::from_ingest(
            path.clone(),
            IngestError::Undecodable {
                tried: "utf-8".to_string(),
            },
        );
        let empty = RunError::from_ingest(path.clone(), IngestError::EmptyCsv);
        let xlsx = RunError::from(ReportError::XlsxUnavailable);

        assert_eq!(missing.exit_code(), 2);
        assert_eq!(undecodable.exit_code(), 3);
        assert_eq!(empty.exit_code(), 1);
        assert_eq!(xlsx.exit_code(), 5);
        assert_eq!(
            RunError::OutputDir {
                path,
                source: std::io::Error::other("denied"),
            }
            .exit_code(),
            4
        );
    }
}
