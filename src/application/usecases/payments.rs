use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::usecases::bids::PAYMENT_CURRENCY;
use crate::domain::{
    repositories::payments::PaymentRepository,
    value_objects::{
        enums::payment_statuses::PaymentStatus,
        payments::{EarningsDto, PaymentDto, TransitionPaymentModel},
    },
};

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("payment cannot move from {from} to {to}")]
    IllegalTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },
    #[error("payment was modified concurrently, reload and retry")]
    TransitionConflict,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::NotFound => StatusCode::NOT_FOUND,
            PaymentError::Invalid(_) => StatusCode::BAD_REQUEST,
            PaymentError::IllegalTransition { .. } | PaymentError::TransitionConflict => {
                StatusCode::CONFLICT
            }
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PaymentError>;

pub struct PaymentUseCase<P>
where
    P: PaymentRepository + Send + Sync + 'static,
{
    payment_repo: Arc<P>,
}

impl<P> PaymentUseCase<P>
where
    P: PaymentRepository + Send + Sync + 'static,
{
    pub fn new(payment_repo: Arc<P>) -> Self {
        Self { payment_repo }
    }

    pub async fn list_by_influencer(&self, influencer_id: Uuid) -> UseCaseResult<Vec<PaymentDto>> {
        let payments = self
            .payment_repo
            .list_by_influencer(influencer_id)
            .await
            .map_err(|err| {
                error!(%influencer_id, db_error = ?err, "payments: failed to list influencer payments");
                PaymentError::Internal(err)
            })?;
        Ok(payments.into_iter().map(PaymentDto::from).collect())
    }

    pub async fn earnings(&self, influencer_id: Uuid) -> UseCaseResult<EarningsDto> {
        let summary = self
            .payment_repo
            .influencer_earnings(influencer_id)
            .await
            .map_err(|err| {
                error!(%influencer_id, db_error = ?err, "payments: failed to sum earnings");
                PaymentError::Internal(err)
            })?;
        Ok(EarningsDto {
            influencer_id,
            total_earned_minor: summary.total_earned_minor,
            pending_minor: summary.pending_minor,
            currency: PAYMENT_CURRENCY.to_string(),
        })
    }

    pub async fn transition_status(
        &self,
        payment_id: Uuid,
        transition_payment_model: TransitionPaymentModel,
    ) -> UseCaseResult<PaymentDto> {
        let to = transition_payment_model
            .status
            .parse::<PaymentStatus>()
            .map_err(PaymentError::Invalid)?;

        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to load payment");
                PaymentError::Internal(err)
            })?
            .ok_or(PaymentError::NotFound)?;
        let from = payment.status.parse::<PaymentStatus>().map_err(|err| {
            PaymentError::Internal(anyhow!(
                "payment {} carries unknown status: {}",
                payment_id,
                err
            ))
        })?;

        if !from.can_transition_to(to) {
            warn!(%payment_id, %from, %to, "payments: illegal status transition rejected");
            return Err(PaymentError::IllegalTransition { from, to });
        }

        let updated = self
            .payment_repo
            .transition_status(payment_id, from, to)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to transition status");
                PaymentError::Internal(err)
            })?;
        if updated == 0 {
            warn!(%payment_id, %from, %to, "payments: lost status transition race");
            return Err(PaymentError::TransitionConflict);
        }

        info!(%payment_id, %from, %to, "payments: status transitioned");
        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to reload payment");
                PaymentError::Internal(err)
            })?
            .ok_or_else(|| PaymentError::Internal(anyhow!("payment {payment_id} vanished")))?;
        Ok(PaymentDto::from(payment))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::entities::payments::PaymentEntity;
    use crate::domain::repositories::payments::MockPaymentRepository;
    use crate::domain::value_objects::payments::EarningsSummary;

    fn payment_fixture(status: PaymentStatus) -> PaymentEntity {
        PaymentEntity {
            id: Uuid::new_v4(),
            bid_id: Uuid::new_v4(),
            amount_minor: 20_000,
            currency: "USD".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn transition_applies_legal_pair() {
        let payment = payment_fixture(PaymentStatus::Pending);
        let payment_id = payment.id;
        let mut processing = payment.clone();
        processing.status = PaymentStatus::Processing.to_string();

        let mut payment_repo = MockPaymentRepository::new();
        let mut first = Some(payment);
        payment_repo.expect_find_by_id().returning(move |_| {
            let next = first.take().unwrap_or_else(|| processing.clone());
            Box::pin(async move { Ok(Some(next)) })
        });
        payment_repo
            .expect_transition_status()
            .with(
                eq(payment_id),
                eq(PaymentStatus::Pending),
                eq(PaymentStatus::Processing),
            )
            .returning(|_, _, _| Box::pin(async move { Ok(1) }));

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let dto = payments
            .transition_status(
                payment_id,
                TransitionPaymentModel {
                    status: "processing".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(dto.status, "processing");
    }

    #[tokio::test]
    async fn transition_rejects_illegal_pair() {
        let payment = payment_fixture(PaymentStatus::Completed);
        let payment_id = payment.id;

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            let payment = payment.clone();
            Box::pin(async move { Ok(Some(payment)) })
        });

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let err = payments
            .transition_status(
                payment_id,
                TransitionPaymentModel {
                    status: "processing".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PaymentError::IllegalTransition {
                from: PaymentStatus::Completed,
                to: PaymentStatus::Processing,
            }
        ));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn transition_rejects_unknown_status_string() {
        let payments = PaymentUseCase::new(Arc::new(MockPaymentRepository::new()));

        let err = payments
            .transition_status(
                Uuid::new_v4(),
                TransitionPaymentModel {
                    status: "chargeback".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Invalid(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn transition_unknown_payment_is_not_found() {
        let mut payment_repo = MockPaymentRepository::new();
        payment_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async move { Ok(None) }));

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let err = payments
            .transition_status(
                Uuid::new_v4(),
                TransitionPaymentModel {
                    status: "processing".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::NotFound));
    }

    #[tokio::test]
    async fn transition_lost_race_conflicts() {
        let payment = payment_fixture(PaymentStatus::Processing);
        let payment_id = payment.id;

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            let payment = payment.clone();
            Box::pin(async move { Ok(Some(payment)) })
        });
        payment_repo
            .expect_transition_status()
            .returning(|_, _, _| Box::pin(async move { Ok(0) }));

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let err = payments
            .transition_status(
                payment_id,
                TransitionPaymentModel {
                    status: "completed".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::TransitionConflict));
    }

    #[tokio::test]
    async fn earnings_carries_summary_and_currency() {
        let influencer_id = Uuid::new_v4();

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo
            .expect_influencer_earnings()
            .with(eq(influencer_id))
            .returning(|_| {
                Box::pin(async move {
                    Ok(EarningsSummary {
                        total_earned_minor: 40_000,
                        pending_minor: 20_000,
                    })
                })
            });

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let dto = payments.earnings(influencer_id).await.unwrap();
        assert_eq!(dto.influencer_id, influencer_id);
        assert_eq!(dto.total_earned_minor, 40_000);
        assert_eq!(dto.pending_minor, 20_000);
        assert_eq!(dto.currency, "USD");
    }

    #[tokio::test]
    async fn list_by_influencer_maps_rows() {
        let influencer_id = Uuid::new_v4();

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo
            .expect_list_by_influencer()
            .with(eq(influencer_id))
            .returning(|_| {
                Box::pin(async move {
                    Ok(vec![
                        payment_fixture(PaymentStatus::Completed),
                        payment_fixture(PaymentStatus::Pending),
                    ])
                })
            });

        let payments = PaymentUseCase::new(Arc::new(payment_repo));

        let dtos = payments.list_by_influencer(influencer_id).await.unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].status, "completed");
    }
}
