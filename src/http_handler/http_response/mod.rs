pub(crate) mod response_common;
pub(crate) mod acknowledgement;
pub mod payment;
pub(crate) mod profile;
pub(crate) mod records;
