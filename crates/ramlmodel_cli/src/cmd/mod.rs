/// Whole-document audit command.
pub mod check;
/// Field-path selection command.
pub mod get;
/// Kind table listing command.
pub mod kinds;
/// Projection rendering shared by `show` and `get`.
pub mod render;
/// Document projection command.
pub mod show;
/// Shared command helpers.
pub mod util;
