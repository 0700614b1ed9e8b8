mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{fmt::Debug, sync::Arc};

/// A data session: the storage boundary the fetch resolver walks.
///
/// Implementations wrap a native client. Every operation selects an explicit
/// list of columns and returns rows aligned with it. Returning no rows is not
/// an error. Timeouts and retries are the implementation's concern.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a data session operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Arc<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

