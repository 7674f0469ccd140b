#![allow(dead_code)]

mod builders;
mod mock_resolvers;
mod mock_transport;

pub use builders::*;
pub use mock_resolvers::{MockHostResolver, MockHostnameResolver};
pub use mock_transport::{MockQueryTransport, QueryCall};
