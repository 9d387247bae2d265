// Services operating on the managers' state through the client seams.

pub mod bookmark_service;
pub mod realtime_sync;
