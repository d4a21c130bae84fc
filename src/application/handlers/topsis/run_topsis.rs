//! RunTopsisHandler - Command handler for scoring an uploaded decision matrix.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::adapters::table::{read_decision_matrix, write_scored_rows};
use crate::config::LimitsConfig;
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::topsis::{
    DecisionMatrix, ImpactVector, TopsisAnalysis, TopsisError, TopsisScorer, ValidationError,
    WeightVector,
};
use crate::ports::{ResultAttachment, ResultMailer};

use super::file_names::result_file_name;

/// Reported when delivery was attempted and failed.
pub const EMAIL_SEND_FAILED: &str = "Email sending failed";

/// Reported when delivery was requested but no mailer is configured.
pub const EMAIL_NOT_CONFIGURED: &str = "Email sending is not configured";

/// Reported for any impact symbol other than `+` or `-`.
const INVALID_IMPACTS: &str = "Impacts must be + or -";

/// Command to score an uploaded CSV matrix.
#[derive(Debug, Clone, Default)]
pub struct RunTopsisCommand {
    /// Client-supplied upload name, used only to name the result file.
    pub file_name: Option<String>,
    /// Raw CSV bytes.
    pub csv: Vec<u8>,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,-,+"`.
    pub impacts: String,
    /// Recipient for the result file.
    pub email: Option<String>,
    /// Whether to mail the result file.
    pub send_mail: bool,
}

/// Result of a scoring run.
#[derive(Debug, Clone)]
pub struct RunTopsisResult {
    pub run_id: Uuid,
    pub matrix: DecisionMatrix,
    pub analysis: TopsisAnalysis,
    /// Rendered result CSV (original columns + score + rank).
    pub csv: Vec<u8>,
    pub download_name: String,
    pub email_sent: bool,
    pub email_error: Option<String>,
    pub computed_at: DateTime<Utc>,
}

/// Handler for scoring runs.
pub struct RunTopsisHandler {
    scorer: TopsisScorer,
    limits: LimitsConfig,
    mailer: Option<Arc<dyn ResultMailer>>,
}

impl RunTopsisHandler {
    pub fn new(
        scorer: TopsisScorer,
        limits: LimitsConfig,
        mailer: Option<Arc<dyn ResultMailer>>,
    ) -> Self {
        Self {
            scorer,
            limits,
            mailer,
        }
    }

    pub async fn handle(&self, cmd: RunTopsisCommand) -> Result<RunTopsisResult, DomainError> {
        let run_id = Uuid::new_v4();

        // 1. Validate recipient before doing any work
        let recipient = if cmd.send_mail {
            let address = cmd.email.as_deref().unwrap_or_default();
            match EmailAddress::try_new(address) {
                Ok(address) => Some(address),
                Err(e) => {
                    warn!(%run_id, "Rejected run with invalid email: {}", e);
                    return Err(DomainError::validation("email", "Invalid email format"));
                }
            }
        } else {
            None
        };

        // 2. Parse inputs
        let (matrix, weights, impacts) = self.parse_inputs(&cmd).map_err(|e| {
            warn!(%run_id, "Rejected scoring input: {}", e);
            e
        })?;

        info!(
            %run_id,
            alternatives = matrix.alternative_count(),
            criteria = matrix.criteria_count(),
            "Scoring decision matrix"
        );

        // 3. Score
        let analysis = self
            .scorer
            .analyze(&matrix, &weights, &impacts)
            .map_err(|e| {
                warn!(%run_id, "Scoring failed: {}", e);
                DomainError::from(e)
            })?;

        if analysis.has_degenerate_rows() {
            warn!(%run_id, "Every criterion is constant; all rows scored 0");
        }
        if let Some(best) = analysis.best() {
            debug!(%run_id, best = %best.id, score = best.score, "Top alternative");
        }

        // 4. Render result file
        let csv = write_scored_rows(&matrix, &analysis.rows)?;
        let download_name = result_file_name(cmd.file_name.as_deref());

        // 5. Deliver by email if requested
        let (email_sent, email_error) = match recipient {
            Some(recipient) => {
                self.deliver(run_id, &recipient, &download_name, csv.clone())
                    .await
            }
            None => (false, None),
        };

        info!(%run_id, email_sent, "Scoring run complete");

        Ok(RunTopsisResult {
            run_id,
            matrix,
            analysis,
            csv,
            download_name,
            email_sent,
            email_error,
            computed_at: Utc::now(),
        })
    }

    fn parse_inputs(
        &self,
        cmd: &RunTopsisCommand,
    ) -> Result<(DecisionMatrix, WeightVector, ImpactVector), DomainError> {
        let weights = cmd
            .weights
            .parse::<WeightVector>()
            .map_err(TopsisError::from)?;
        let impacts = cmd
            .impacts
            .parse::<ImpactVector>()
            .map_err(|e| DomainError {
                message: INVALID_IMPACTS.to_string(),
                ..DomainError::from(TopsisError::from(e))
            })?;
        let matrix = read_decision_matrix(&cmd.csv)?;

        self.check_limits(&matrix).map_err(TopsisError::from)?;
        Ok((matrix, weights, impacts))
    }

    fn check_limits(&self, matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        if matrix.alternative_count() > self.limits.max_rows {
            return Err(ValidationError::TooLarge {
                what: "rows",
                limit: self.limits.max_rows,
                actual: matrix.alternative_count(),
            });
        }
        if matrix.criteria_count() > self.limits.max_criteria {
            return Err(ValidationError::TooLarge {
                what: "criteria",
                limit: self.limits.max_criteria,
                actual: matrix.criteria_count(),
            });
        }
        Ok(())
    }

    /// Sends the result file. Delivery problems never fail the run.
    async fn deliver(
        &self,
        run_id: Uuid,
        recipient: &EmailAddress,
        file_name: &str,
        csv: Vec<u8>,
    ) -> (bool, Option<String>) {
        let Some(mailer) = &self.mailer else {
            warn!(%run_id, "Email requested but no mailer is configured");
            return (false, Some(EMAIL_NOT_CONFIGURED.to_string()));
        };

        match mailer
            .send_result(recipient, ResultAttachment::csv(file_name, csv))
            .await
        {
            Ok(()) => (true, None),
            Err(e) => {
                warn!(%run_id, "Result email failed: {}", e);
                (false, Some(EMAIL_SEND_FAILED.to_string()))
            }
        }
    }
}
