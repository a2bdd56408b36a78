//! Guestbook engine: contract encoding, attribution and wallet providers.
mod attribution;
mod batch_call;
mod chain_write;
mod contract;
mod dispatcher;
mod engine;
mod rpc;
mod session;
mod types;

pub use attribution::{data_suffix, Attribution, AttributionError, ATTRIBUTION_CODES, ERC_8021_MARKER};
pub use batch_call::{BatchCaller, Call, Capabilities, RpcBatchCaller, SendCallsRequest};
pub use chain_write::{ChainWriter, Receipt, ReceiptStatus, RpcChainWriter, WriteContractRequest};
pub use contract::{encode_sign, GuestBook, GUESTBOOK_ADDRESS, SIGN_FUNCTION};
pub use dispatcher::Dispatcher;
pub use engine::{EngineConfig, EngineHandle, Providers};
pub use rpc::{RpcClient, RpcSettings};
pub use session::{Account, AccountSlot, RpcWalletSession, WalletSession};
pub use types::{
    ChannelEventSink, EngineEvent, EventSink, ProviderError, ProviderErrorKind, SessionInfo,
    SubmissionId, SubmitRequest,
};
