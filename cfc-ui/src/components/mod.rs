//! Dioxus RSX components for the carbon footprint calculator.

mod activity_input;
mod calculator_form;
mod category_bar;
mod error_display;
mod page_footer;
mod page_header;
mod reduction_tips;
mod results_display;
mod section_header;

pub use activity_input::ActivityInput;
pub use calculator_form::CalculatorForm;
pub use category_bar::CategoryBar;
pub use error_display::ErrorDisplay;
pub use page_footer::PageFooter;
pub use page_header::PageHeader;
pub use reduction_tips::ReductionTips;
pub use results_display::ResultsDisplay;
pub use section_header::SectionHeader;
