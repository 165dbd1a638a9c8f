//! NeoVM script construction.
//!
//! Only the part of the VM a client needs: opcodes for pushes and calls, a
//! [`ScriptBuilder`] that emits them, and [`ContractParameter`] values that can
//! be encoded either as script pushes or as JSON-RPC arguments.

pub mod call_flags;
pub mod contract_parameter;
pub mod error;
pub mod op_code;
pub mod script_builder;

pub use call_flags::CallFlags;
pub use contract_parameter::ContractParameter;
pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
