use crate::api::{ApiResponse, DeleteReply};
use crate::variant::{
    ClientVariant, DeleteStatusPolicy, ADD_TRANSPORT_ERROR, AUTHORIZATION_ERROR, DELETE_FAILED,
    DELETE_SUCCESS, DELETE_TRANSPORT_ERROR,
};

/// What the page should do after an add request resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Close the modal and re-fetch events
    Saved,
    /// Keep the modal open and show the text in the error region
    InlineError(String),
    /// Keep the modal open and show a blocking alert
    Alert(String),
}

/// What the page should do after a delete request resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Re-fetch events, then alert the message
    Deleted(String),
    /// Alert the message, nothing else changes
    Failed(String),
}

impl DeleteOutcome {
    pub fn message(&self) -> &str {
        match self {
            DeleteOutcome::Deleted(message) | DeleteOutcome::Failed(message) => message,
        }
    }
}

pub fn interpret_add<E>(variant: &ClientVariant, reply: Result<ApiResponse, E>) -> AddOutcome {
    match reply {
        Ok(body) if body.success => AddOutcome::Saved,
        Ok(body) => {
            let message = body
                .error
                .unwrap_or_else(|| ADD_TRANSPORT_ERROR.to_string());
            if variant.alerts_authorization_errors() && message == AUTHORIZATION_ERROR {
                AddOutcome::Alert(message)
            } else {
                AddOutcome::InlineError(message)
            }
        }
        Err(_) => AddOutcome::InlineError(ADD_TRANSPORT_ERROR.to_string()),
    }
}

pub fn interpret_delete<E>(variant: &ClientVariant, reply: Result<DeleteReply, E>) -> DeleteOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(_) => return DeleteOutcome::Failed(DELETE_TRANSPORT_ERROR.to_string()),
    };

    match variant.delete_policy() {
        DeleteStatusPolicy::ParseRegardless => {
            if reply.status == 200 && reply.body.success {
                DeleteOutcome::Deleted(DELETE_SUCCESS.to_string())
            } else {
                let error = reply.body.error.as_deref().unwrap_or("Unknown error");
                DeleteOutcome::Failed(format!("Error: {}", error))
            }
        }
        DeleteStatusPolicy::RejectErrorStatus => {
            if !(200..300).contains(&reply.status) {
                DeleteOutcome::Failed(DELETE_TRANSPORT_ERROR.to_string())
            } else if reply.body.success {
                DeleteOutcome::Deleted(DELETE_SUCCESS.to_string())
            } else {
                DeleteOutcome::Failed(DELETE_FAILED.to_string())
            }
        }
    }
}
