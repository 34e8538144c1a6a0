//! CLI module for sitekit
//!
//! Command-line surface for validating contact submissions, running SEO
//! head synchronization passes, and managing the admin content entities.

pub mod commands;
pub mod output;

pub use commands::{BulletinCommands, HolidayCommands, SiteCli, SiteCommands};
pub use output::OutputFormat;

use crate::error::{Result, SiteError};

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution
    Success = 0,
    /// Submission validation failed
    ValidationError = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine the exit code for a failed operation
    pub fn from_error(error: &SiteError) -> Self {
        match error {
            SiteError::FileError(_) => ExitCode::FileError,
            e if e.is_user_error() => ExitCode::InvalidInput,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: SiteCli) -> Result<ExitCode> {
    match cli.command {
        SiteCommands::Validate { submission, format } => {
            commands::execute_validate(submission, format)
        }
        SiteCommands::Seo {
            page_type,
            reference_id,
            path,
            format,
        } => commands::execute_seo(&cli.api_url, page_type, reference_id, path, format).await,
        SiteCommands::Bulletins { command } => {
            commands::execute_bulletins(&cli.api_url, command).await
        }
        SiteCommands::Holidays { command } => {
            commands::execute_holidays(&cli.api_url, command).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::ValidationError), 1);
        assert_eq!(i32::from(ExitCode::InvalidInput), 3);
        assert_eq!(i32::from(ExitCode::FileError), 4);
        assert_eq!(i32::from(ExitCode::InternalError), 10);
    }

    #[test]
    fn test_exit_code_from_error() {
        assert_eq!(
            ExitCode::from_error(&SiteError::file_error("missing")),
            ExitCode::FileError
        );
        assert_eq!(
            ExitCode::from_error(&SiteError::parse_error("bad json")),
            ExitCode::InvalidInput
        );
        assert_eq!(
            ExitCode::from_error(&SiteError::api_error(500, "boom")),
            ExitCode::InternalError
        );
    }
}
