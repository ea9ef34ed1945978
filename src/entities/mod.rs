//! Record types exposed by the API

pub mod group;
pub mod macros;
pub mod member;

pub use group::Group;
pub use member::Member;
