use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_auth::{authorize, Capability, Role};
use stockroom_core::{Aggregate, AggregateRoot, DomainError, ItemId, UpdateRequestId, UserId};

/// Lifecycle of an update request.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Aggregate root: a staff proposal to set an item's on-hand quantity.
///
/// Staff roles submit; a manager or admin approves or rejects exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    id: UpdateRequestId,
    item_id: Option<ItemId>,
    requested_quantity: u64,
    submitted_by: Option<UserId>,
    decided_by: Option<UserId>,
    status: RequestStatus,
    created_at: Option<DateTime<Utc>>,
    decided_at: Option<DateTime<Utc>>,
    version: u64,
    created: bool,
}

impl UpdateRequest {
    /// Empty, not-yet-submitted instance for rehydration.
    pub fn empty(id: UpdateRequestId) -> Self {
        Self {
            id,
            item_id: None,
            requested_quantity: 0,
            submitted_by: None,
            decided_by: None,
            status: RequestStatus::Pending,
            created_at: None,
            decided_at: None,
            version: 0,
            created: false,
        }
    }

    /// Rebuild from a stream of events.
    pub fn from_events<'a>(
        id: UpdateRequestId,
        events: impl IntoIterator<Item = &'a UpdateRequestEvent>,
    ) -> Self {
        let mut request = Self::empty(id);
        for event in events {
            request.apply(event);
        }
        request
    }

    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id
    }

    pub fn requested_quantity(&self) -> u64 {
        self.requested_quantity
    }

    pub fn submitted_by(&self) -> Option<UserId> {
        self.submitted_by
    }

    pub fn decided_by(&self) -> Option<UserId> {
        self.decided_by
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decided_at
    }

    /// Quantity to write to the item, once approved.
    pub fn approved_quantity(&self) -> Option<(ItemId, u64)> {
        match (self.status, self.item_id) {
            (RequestStatus::Approved, Some(item_id)) => Some((item_id, self.requested_quantity)),
            _ => None,
        }
    }
}

impl AggregateRoot for UpdateRequest {
    type Id = UpdateRequestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: SubmitRequest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub request_id: UpdateRequestId,
    pub item_id: ItemId,
    /// Signed so a negative proposal can be rejected instead of failing to parse.
    pub requested_quantity: i64,
    pub submitted_by: UserId,
    pub submitter_role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ApproveRequest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub request_id: UpdateRequestId,
    pub decided_by: UserId,
    pub decider_role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RejectRequest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub request_id: UpdateRequestId,
    pub decided_by: UserId,
    pub decider_role: Role,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpdateRequestCommand {
    Submit(SubmitRequest),
    Approve(ApproveRequest),
    Reject(RejectRequest),
}

/// Event: RequestSubmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmitted {
    pub request_id: UpdateRequestId,
    pub item_id: ItemId,
    pub requested_quantity: u64,
    pub submitted_by: UserId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RequestDecided (approved or rejected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDecided {
    pub request_id: UpdateRequestId,
    pub status: RequestStatus,
    pub decided_by: UserId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateRequestEvent {
    Submitted(RequestSubmitted),
    Decided(RequestDecided),
}

impl UpdateRequestEvent {
    /// Stable event name.
    pub fn event_type(&self) -> &'static str {
        match self {
            UpdateRequestEvent::Submitted(_) => "inventory.request.submitted",
            UpdateRequestEvent::Decided(e) => match e.status {
                RequestStatus::Approved => "inventory.request.approved",
                RequestStatus::Rejected => "inventory.request.rejected",
                RequestStatus::Pending => "inventory.request.decided",
            },
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            UpdateRequestEvent::Submitted(e) => e.occurred_at,
            UpdateRequestEvent::Decided(e) => e.occurred_at,
        }
    }
}

impl Aggregate for UpdateRequest {
    type Command = UpdateRequestCommand;
    type Event = UpdateRequestEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            UpdateRequestEvent::Submitted(e) => {
                self.id = e.request_id;
                self.item_id = Some(e.item_id);
                self.requested_quantity = e.requested_quantity;
                self.submitted_by = Some(e.submitted_by);
                self.status = RequestStatus::Pending;
                self.created_at = Some(e.occurred_at);
                self.created = true;
            }
            UpdateRequestEvent::Decided(e) => {
                self.status = e.status;
                self.decided_by = Some(e.decided_by);
                self.decided_at = Some(e.occurred_at);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            UpdateRequestCommand::Submit(cmd) => self.handle_submit(cmd),
            UpdateRequestCommand::Approve(cmd) => self.handle_decide(
                cmd.request_id,
                cmd.decided_by,
                &cmd.decider_role,
                RequestStatus::Approved,
                cmd.occurred_at,
            ),
            UpdateRequestCommand::Reject(cmd) => self.handle_decide(
                cmd.request_id,
                cmd.decided_by,
                &cmd.decider_role,
                RequestStatus::Rejected,
                cmd.occurred_at,
            ),
        }
    }
}

impl UpdateRequest {
    fn ensure_request_id(&self, request_id: UpdateRequestId) -> Result<(), DomainError> {
        if self.id != request_id {
            return Err(DomainError::conflict("request_id mismatch"));
        }
        Ok(())
    }

    fn handle_submit(&self, cmd: &SubmitRequest) -> Result<Vec<UpdateRequestEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("request already submitted"));
        }
        self.ensure_request_id(cmd.request_id)?;
        authorize(&cmd.submitter_role, Capability::SubmitRequests)?;

        let requested_quantity = u64::try_from(cmd.requested_quantity)
            .map_err(|_| DomainError::validation("requested quantity cannot be negative"))?;

        Ok(vec![UpdateRequestEvent::Submitted(RequestSubmitted {
            request_id: cmd.request_id,
            item_id: cmd.item_id,
            requested_quantity,
            submitted_by: cmd.submitted_by,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_decide(
        &self,
        request_id: UpdateRequestId,
        decided_by: UserId,
        decider_role: &Role,
        outcome: RequestStatus,
        occurred_at: DateTime<Utc>,
    ) -> Result<Vec<UpdateRequestEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_request_id(request_id)?;
        authorize(decider_role, Capability::DecideRequests)?;

        if self.status != RequestStatus::Pending {
            return Err(DomainError::conflict(format!(
                "request already {}",
                match self.status {
                    RequestStatus::Approved => "approved",
                    RequestStatus::Rejected => "rejected",
                    RequestStatus::Pending => "pending",
                }
            )));
        }

        tracing::info!(
            request_id = %request_id,
            decided_by = %decided_by,
            outcome = ?outcome,
            "update request decided"
        );

        Ok(vec![UpdateRequestEvent::Decided(RequestDecided {
            request_id,
            status: outcome,
            decided_by,
            occurred_at,
        })])
    }
}
