//! Member layer — handles, payloads, and the depth-indexed adapters that
//! consume the leveled container.

pub mod data;
pub mod depth;
pub mod function_members;
pub mod handle;
pub mod module_members;
pub mod type_members;

pub use data::MemberData;
pub use depth::{FunctionDepth, MemberDepth};
pub use function_members::FunctionMembers;
pub use handle::MemberHandle;
pub use module_members::ModuleMembers;
pub use type_members::TypeMembers;
