pub mod forwarding;
pub mod query_transport;
pub mod transport;

pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use query_transport::UdpQueryTransport;
pub use transport::UdpTransport;
