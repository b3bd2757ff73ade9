pub mod buffer;
pub mod chrome;
pub mod clusters;
pub mod dashboard;
pub mod deploy;
pub mod help;
pub mod instances;
pub mod notification;
pub mod pools;
pub mod tabs;
pub mod text;
pub mod widgets;
