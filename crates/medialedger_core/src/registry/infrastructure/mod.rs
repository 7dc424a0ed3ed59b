//! Infrastructure concerns shared by the registry services: identity and
//! identifier types, the execution-environment seam, and pure field
//! validation.

pub mod naming;
pub mod validation;
