/// Value type stored by every container and consumed by every utility in this crate.
pub type Element = i32;
