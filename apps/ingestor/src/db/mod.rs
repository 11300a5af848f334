pub mod locking;
pub mod txn;
