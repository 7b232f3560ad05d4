// SiteDock state managers
// Managers perform a full read-modify-write of their persisted collection
// on every mutation: visit history and the favorites list.

pub mod favorites_manager;
pub mod history_manager;
