use alloy_primitives::{address, Address, Bytes};
use alloy_sol_types::{sol, SolCall};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface GuestBook {
        struct Entry {
            address from;
            string message;
        }

        function getEntries() external view returns (Entry[] memory);

        function sign(string _message) external returns (Entry memory);
    }
}

/// Deployed guestbook contract on Base.
pub const GUESTBOOK_ADDRESS: Address = address!("0x9805D57A15c014c6C18fE2D237cbB1784795CB1E");

pub const SIGN_FUNCTION: &str = "sign";

/// ABI-encodes `sign(message)` into raw call data.
pub fn encode_sign(message: &str) -> Bytes {
    GuestBook::signCall {
        _message: message.to_owned(),
    }
    .abi_encode()
    .into()
}
