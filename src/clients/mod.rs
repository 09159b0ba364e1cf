pub mod credentials;
pub mod docs_client;
pub mod http_client;
pub mod queue_client;

pub use credentials::{load_credentials, DocumentCredentialProvider, ServiceAccountProvider};
pub use docs_client::{DocsClient, DocumentSource};
pub use http_client::{HttpFetcher, PageFetcher};
pub use queue_client::{MessageQueue, SqsQueue};
