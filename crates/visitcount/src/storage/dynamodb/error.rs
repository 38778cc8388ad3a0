//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `visitcount_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use visitcount_core::storage::RepositoryError;

/// Map an UpdateItem SDK error to RepositoryError.
///
/// The variant records the failure category; the payload is DynamoDB's own
/// message, which is what the caller eventually sees.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    if matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    ) {
        return RepositoryError::ConnectionFailed(DisplayErrorContext(&err).to_string());
    }

    let err = err.into_service_error();
    let message = service_message(&err);

    match &err {
        UpdateItemError::ProvisionedThroughputExceededException(_)
        | UpdateItemError::RequestLimitExceeded(_) => RepositoryError::Throttled(message),
        _ => match err.code() {
            Some("ThrottlingException") => RepositoryError::Throttled(message),
            Some("AccessDeniedException" | "UnrecognizedClientException") => {
                RepositoryError::PermissionDenied(message)
            }
            _ => RepositoryError::QueryFailed(message),
        },
    }
}

/// The service-provided message, or the full error chain when there is none.
fn service_message(err: &UpdateItemError) -> String {
    err.message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string())
}
