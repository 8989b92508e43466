pub mod header;
pub mod privacy;
pub mod upload_flow;
pub mod result_panel;
