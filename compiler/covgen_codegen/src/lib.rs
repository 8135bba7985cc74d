//! C++ Coverage Program Generation
//!
//! Emits a single C++ translation unit that declares one local variable per
//! container instantiation, each followed by a debugger breakpoint, so the
//! layout of every instantiation can be inspected by hand.
//!
//! # Architecture
//!
//! ```text
//! CoverageConfig
//!        ↓
//!   ContainerExpander   (family → TypeDescriptors)
//!        ↓
//!  InitializerBuilder   (TypeDescriptor → initializer literal)
//!        ↓
//!   ProgramAssembler    (includes, support decls, groups, fixed block, main)
//! ```

mod assemble;
mod context;
mod init;
mod resource;
mod support;

pub use assemble::{AssembleOptions, BreakpointPlacement, ProgramAssembler};
pub use context::CodegenContext;
pub use init::InitializerBuilder;
pub use resource::{FixedBlock, DEFAULT_ENTRY, DEFAULT_FIXED_PATH};
pub use support::SupportDecls;
