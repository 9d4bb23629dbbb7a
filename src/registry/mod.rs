//! Type registry and eligibility subsystem.
//!
//! # Data Flow
//! ```text
//! Host metadata pass
//!     → types.rs       (TypeIntrospector: shapes supplied by the host)
//!     → complex.rs     (register aggregates, record member names)
//!     → eligibility.rs (resolve owner, cache transform decision)
//! ```
//!
//! # Design Decisions
//! - The engine never reflects over types itself; the host hands it
//!   shapes through the `TypeIntrospector` capability
//! - Every map is a DashMap: metadata passes may run during parallel
//!   startup phases, and first-time writes must converge on one value
//! - All state is per-configuration; there are no process-wide statics

pub mod complex;
pub mod eligibility;
pub mod types;

pub use complex::{ComplexTypeDescriptor, ComplexTypeRegistry};
pub use eligibility::{
    BindingSource, Eligibility, EligibilityPredicate, EligibilityResolver, MetadataEvent,
};
pub use types::{MemberInfo, TypeClass, TypeId, TypeIntrospector, TypeRef, TypeShape};
