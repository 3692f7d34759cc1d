pub mod chart;
pub mod chart_document;
pub mod command;
pub mod procedure;
pub mod surface;
pub mod tooth;
pub mod treatment;
