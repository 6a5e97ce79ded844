//! Client-against-backend integration flows.

pub mod api_flows;
pub mod roster_flows;
pub mod socket_flows;
