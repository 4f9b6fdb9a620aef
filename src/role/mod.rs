//! Role classification module
//!
//! Maps the raw role string carried by an identity onto the closed
//! role-category partition the visibility resolver works with:
//! - Platform-management roles operate the platform itself and never see
//!   tenant navigation
//! - School-admin, teacher, and parent-facing roles see tenant navigation
//! - Anything unrecognized falls open to the least-privileged parent-facing
//!   feature set
//!
//! Classification is total: every possible input string (including absent
//! and empty) maps to exactly one category, and nothing here can fail.

mod classifier;
mod types;

pub use classifier::{
    classify, PARENT_ROLES, PLATFORM_ROLES, SCHOOL_ADMIN_ROLES, TEACHER_ROLES,
};
pub use types::{RoleCategory, RoleName};

#[cfg(test)]
mod tests;
