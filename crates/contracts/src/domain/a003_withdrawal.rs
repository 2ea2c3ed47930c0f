use serde::{Deserialize, Serialize};

/// Provider payout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: String,
    pub provider_id: String,
    pub provider_name: String,
    pub amount: f64,
    pub bank_account: Option<String>,
    pub status: WithdrawalStatus,
    pub note: Option<String>,
    pub requested_at: String,
    pub processed_at: Option<String>,
}

/// Statuses the console knows how to act on. Anything else the server
/// reports reads as `Unknown` and allows no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[serde(alias = "PENDING", alias = "Pending")]
    Pending,
    #[serde(alias = "APPROVED", alias = "Approved")]
    Approved,
    #[serde(alias = "REJECTED", alias = "Rejected")]
    Rejected,
    #[serde(alias = "COMPLETED", alias = "Completed")]
    Completed,
    #[serde(other)]
    Unknown,
}

impl WithdrawalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Completed => "completed",
            WithdrawalStatus::Unknown => "unknown",
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, WithdrawalStatus::Rejected | WithdrawalStatus::Completed)
    }
}

/// State transitions an admin can apply to a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalAction {
    Approve,
    Reject,
    Complete,
}

impl WithdrawalAction {
    /// Path segment of the transition endpoint.
    pub fn as_path(self) -> &'static str {
        match self {
            WithdrawalAction::Approve => "approve",
            WithdrawalAction::Reject => "reject",
            WithdrawalAction::Complete => "complete",
        }
    }

    /// Approve/reject work on pending requests, completion on approved ones.
    pub fn allowed_from(self, status: WithdrawalStatus) -> bool {
        match self {
            WithdrawalAction::Approve | WithdrawalAction::Reject => {
                status == WithdrawalStatus::Pending
            }
            WithdrawalAction::Complete => status == WithdrawalStatus::Approved,
        }
    }

    pub fn target(self) -> WithdrawalStatus {
        match self {
            WithdrawalAction::Approve => WithdrawalStatus::Approved,
            WithdrawalAction::Reject => WithdrawalStatus::Rejected,
            WithdrawalAction::Complete => WithdrawalStatus::Completed,
        }
    }

    pub fn requires_note(self) -> bool {
        self == WithdrawalAction::Reject
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        use WithdrawalAction::*;
        use WithdrawalStatus::*;

        assert!(Approve.allowed_from(Pending));
        assert!(Reject.allowed_from(Pending));
        assert!(!Complete.allowed_from(Pending));
        assert!(Complete.allowed_from(Approved));
        assert!(!Approve.allowed_from(Approved));
        for action in [Approve, Reject, Complete] {
            assert!(!action.allowed_from(Rejected));
            assert!(!action.allowed_from(Completed));
        }
        assert_eq!(Reject.target(), Rejected);
        assert!(Rejected.is_final() && Completed.is_final());
    }

    #[test]
    fn test_status_wire_format() {
        let w: Withdrawal = serde_json::from_str(
            r#"{
                "id": "w1", "providerId": "p1", "providerName": "Happy Paws",
                "amount": 120.5, "bankAccount": null, "status": "approved",
                "note": null, "requestedAt": "2024-05-01T10:00:00Z", "processedAt": null
            }"#,
        )
        .unwrap();
        assert_eq!(w.status, WithdrawalStatus::Approved);

        let statuses: Vec<WithdrawalStatus> =
            serde_json::from_str(r#"["PENDING", "Completed", "processing"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![
                WithdrawalStatus::Pending,
                WithdrawalStatus::Completed,
                WithdrawalStatus::Unknown
            ]
        );
        for action in [WithdrawalAction::Approve, WithdrawalAction::Reject, WithdrawalAction::Complete] {
            assert!(!action.allowed_from(WithdrawalStatus::Unknown));
        }
        assert_eq!(
            serde_json::to_string(&TransitionRequest::default()).unwrap(),
            "{}"
        );
    }
}
