//! Homework Burndown Core
//!
//! Platform independent layers:
//! - model: period, work items, guideline settings, application state
//! - compact: state <-> minimal positional wire form
//! - transport: wire form <-> URL-safe share token
//! - share: share links, channel URLs, share readiness
//! - projection: reference trend lines for the burndown chart

pub mod config;
pub mod defaults;
mod error;
pub mod model;
pub mod compact;
pub mod transport;
pub mod share;
pub mod projection;
pub mod presets;

pub use config::ShareConfig;
pub use error::{CodecError, CodecResult};
pub use model::{GuidelineSettings, ItemId, Period, PrintData, WorkItem, Workload};
pub use compact::CompactState;
pub use share::{ShareChannel, ShareReadiness};
pub use projection::{GridRow, Projection};

/// Encode application state into a share token.
pub fn encode_print_data(data: &PrintData) -> CodecResult<String> {
    transport::encode_token(&CompactState::from_print_data(data))
}

/// Decode a share token back into application state.
///
/// Item ids are positional (`hw-0`, `hw-1`, ...), not the ones the sender had.
pub fn decode_print_data(token: &str) -> CodecResult<PrintData> {
    transport::decode_token(token)?.into_print_data()
}
